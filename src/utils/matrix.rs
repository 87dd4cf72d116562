//! Matrix helpers shared by the solver and the selection code.

use faer::{Col, Mat};

/// Flag columns whose values all lie within `tolerance` of their first entry.
///
/// With no rows every column counts as constant.
pub fn detect_constant_columns(x: &Mat<f64>, tolerance: f64) -> Vec<bool> {
    (0..x.ncols())
        .map(|j| match x.nrows() {
            0 => true,
            n => (1..n).all(|i| (x[(i, j)] - x[(0, j)]).abs() < tolerance),
        })
        .collect()
}

/// Copy the given columns of `x`, in the order listed, into a new matrix.
pub fn select_columns(x: &Mat<f64>, columns: &[usize]) -> Mat<f64> {
    Mat::from_fn(x.nrows(), columns.len(), |i, k| x[(i, columns[k])])
}

/// Subtract each column's mean. Returns the centered matrix and the means.
pub fn center_columns(x: &Mat<f64>) -> (Mat<f64>, Col<f64>) {
    let n = x.nrows() as f64;
    let means = Col::from_fn(x.ncols(), |j| {
        (0..x.nrows()).map(|i| x[(i, j)]).sum::<f64>() / n
    });
    let centered = Mat::from_fn(x.nrows(), x.ncols(), |i, j| x[(i, j)] - means[j]);

    (centered, means)
}

/// Subtract the mean of `y`. Returns the centered vector and the mean.
pub fn center_vector(y: &Col<f64>) -> (Col<f64>, f64) {
    let mean = y.iter().sum::<f64>() / y.nrows() as f64;
    (Col::from_fn(y.nrows(), |i| y[i] - mean), mean)
}
