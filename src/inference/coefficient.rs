//! Coefficient inference calculations.

use faer::{Col, Mat};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Pivot threshold below which a cross-product matrix is treated as singular.
const SINGULAR_PIVOT: f64 = 1e-10;

/// Computes inference statistics for regression coefficients.
pub struct CoefficientInference;

impl CoefficientInference {
    /// Compute standard errors for both intercept and coefficients using the
    /// augmented design matrix [1 | X], matching R's `lm()`.
    ///
    /// Aliased columns are dropped before inversion so the remaining
    /// coefficients still get standard errors.
    ///
    /// Returns (coefficient_SE, intercept_SE).
    pub fn standard_errors_with_intercept(
        x: &Mat<f64>,
        mse: f64,
        aliased: &[bool],
    ) -> Result<(Col<f64>, f64), &'static str> {
        let n_samples = x.nrows();
        let n_features = x.ncols();
        let active: Vec<usize> = (0..n_features).filter(|&j| !aliased[j]).collect();

        let x_aug = Mat::from_fn(n_samples, active.len() + 1, |i, k| {
            if k == 0 {
                1.0
            } else {
                x[(i, active[k - 1])]
            }
        });

        let xtx_aug_inv = invert_cross_product(&(x_aug.transpose() * &x_aug))
            .map_err(|_| "Augmented matrix is singular")?;

        let se_intercept = variance_to_se(mse * xtx_aug_inv[(0, 0)]);

        let mut se_coef = Col::from_fn(n_features, |_| f64::NAN);
        for (k, &j) in active.iter().enumerate() {
            se_coef[j] = variance_to_se(mse * xtx_aug_inv[(k + 1, k + 1)]);
        }

        Ok((se_coef, se_intercept))
    }

    /// Compute t-statistics for coefficients.
    ///
    /// t_j = β_j / SE(β_j)
    pub fn t_statistics(coefficients: &Col<f64>, std_errors: &Col<f64>) -> Col<f64> {
        Col::from_fn(coefficients.nrows(), |j| {
            if std_errors[j].is_nan() || std_errors[j] == 0.0 {
                f64::NAN
            } else {
                coefficients[j] / std_errors[j]
            }
        })
    }

    /// Compute two-tailed p-values from t-statistics.
    ///
    /// p_j = 2 * P(|T| > |t_j|) where T ~ t(df)
    pub fn p_values(t_statistics: &Col<f64>, df: f64) -> Col<f64> {
        let n = t_statistics.nrows();
        let t_dist = match students_t(df) {
            Some(d) => d,
            None => return Col::from_fn(n, |_| f64::NAN),
        };

        Col::from_fn(n, |j| two_tailed_p(&t_dist, t_statistics[j]))
    }

    /// Two-tailed p-value of a single t-statistic.
    pub fn p_value(t_statistic: f64, df: f64) -> f64 {
        students_t(df).map_or(f64::NAN, |d| two_tailed_p(&d, t_statistic))
    }

    /// Two-tailed critical value: the `1 - alpha/2` quantile of t(df).
    ///
    /// Returns NaN if `df` is not positive. `alpha = 1` gives the median, 0.
    pub fn critical_value(df: f64, alpha: f64) -> f64 {
        students_t(df).map_or(f64::NAN, |d| {
            if alpha >= 1.0 {
                0.0
            } else {
                d.inverse_cdf(1.0 - alpha / 2.0)
            }
        })
    }
}

fn students_t(df: f64) -> Option<StudentsT> {
    if df <= 0.0 {
        return None;
    }
    StudentsT::new(0.0, 1.0, df).ok()
}

fn two_tailed_p(t_dist: &StudentsT, t: f64) -> f64 {
    if t.is_nan() {
        f64::NAN
    } else {
        2.0 * (1.0 - t_dist.cdf(t.abs()))
    }
}

fn variance_to_se(var: f64) -> f64 {
    if var >= 0.0 {
        var.sqrt()
    } else {
        f64::NAN
    }
}

/// Invert a symmetric cross-product matrix via QR decomposition.
fn invert_cross_product(xtx: &Mat<f64>) -> Result<Mat<f64>, &'static str> {
    let size = xtx.nrows();
    let qr = xtx.qr();
    let q = qr.compute_Q();
    let r = qr.R();

    for i in 0..size {
        if r[(i, i)].abs() < SINGULAR_PIVOT {
            return Err("Matrix is singular");
        }
    }

    // Solve R * X = Q' column by column
    let qt = q.transpose();
    let mut inverse = Mat::zeros(size, size);
    for col in 0..size {
        for i in (0..size).rev() {
            let mut sum = qt[(i, col)];
            for j in (i + 1)..size {
                sum -= r[(i, j)] * inverse[(j, col)];
            }
            inverse[(i, col)] = sum / r[(i, i)];
        }
    }

    Ok(inverse)
}
