//! Common test utilities and data generators.
#![allow(dead_code)]

use faer::{Col, Mat};
use stepwise_ols::{ModelSelectionData, ReferenceModel};

/// Deterministic uniform noise in [-1, 1).
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn uniform(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.0 >> 11) as f64) / ((1u64 << 53) as f64) * 2.0 - 1.0
    }
}

/// Generate y = intercept + Σ beta_j x_j + noise with uniform predictors.
pub fn generate_linear_data(
    n_samples: usize,
    beta: &[f64],
    intercept: f64,
    noise_std: f64,
    seed: u64,
) -> (Mat<f64>, Col<f64>) {
    let mut rng = Lcg::new(seed);
    let mut x = Mat::zeros(n_samples, beta.len());
    let mut y = Col::zeros(n_samples);

    for i in 0..n_samples {
        let mut yi = intercept;
        for (j, &b) in beta.iter().enumerate() {
            x[(i, j)] = rng.uniform();
            yi += x[(i, j)] * b;
        }
        y[i] = yi + noise_std * rng.uniform();
    }

    (x, y)
}

/// Predictor names x1, x2, ...
pub fn names(n: usize) -> Vec<String> {
    (1..=n).map(|j| format!("x{j}")).collect()
}

/// Fit the full model over generated data with predictors named x1, x2, ...
pub fn reference_model(
    n_samples: usize,
    beta: &[f64],
    noise_std: f64,
    seed: u64,
) -> ReferenceModel {
    let (x, y) = generate_linear_data(n_samples, beta, 1.0, noise_std, seed);
    let data = ModelSelectionData::new(y, x, names(beta.len())).expect("valid data");
    ReferenceModel::fit(data).expect("full model should fit")
}

/// Three predictors {a, b, c} over 20 observations: `a` strong, `b` weaker,
/// `c` unrelated to the response.
pub fn abc_model() -> ReferenceModel {
    let (x, y) = generate_linear_data(20, &[3.0, 0.8, 0.0], 1.0, 0.5, 7);
    let data = ModelSelectionData::new(y, x, ["a", "b", "c"]).expect("valid data");
    ReferenceModel::fit(data).expect("full model should fit")
}

/// `mtcars` columns mpg, cyl, disp, hp and wt, in R's row order.
pub const MTCARS: [[f64; 5]; 32] = [
    [21.0, 6.0, 160.0, 110.0, 2.620],
    [21.0, 6.0, 160.0, 110.0, 2.875],
    [22.8, 4.0, 108.0, 93.0, 2.320],
    [21.4, 6.0, 258.0, 110.0, 3.215],
    [18.7, 8.0, 360.0, 175.0, 3.440],
    [18.1, 6.0, 225.0, 105.0, 3.460],
    [14.3, 8.0, 360.0, 245.0, 3.570],
    [24.4, 4.0, 146.7, 62.0, 3.190],
    [22.8, 4.0, 140.8, 95.0, 3.150],
    [19.2, 6.0, 167.6, 123.0, 3.440],
    [17.8, 6.0, 167.6, 123.0, 3.440],
    [16.4, 8.0, 275.8, 180.0, 4.070],
    [17.3, 8.0, 275.8, 180.0, 3.730],
    [15.2, 8.0, 275.8, 180.0, 3.780],
    [10.4, 8.0, 472.0, 205.0, 5.250],
    [10.4, 8.0, 460.0, 215.0, 5.424],
    [14.7, 8.0, 440.0, 230.0, 5.345],
    [32.4, 4.0, 78.7, 66.0, 2.200],
    [30.4, 4.0, 75.7, 52.0, 1.615],
    [33.9, 4.0, 71.1, 65.0, 1.835],
    [21.5, 4.0, 120.1, 97.0, 2.465],
    [15.5, 8.0, 318.0, 150.0, 3.520],
    [15.2, 8.0, 304.0, 150.0, 3.435],
    [13.3, 8.0, 350.0, 245.0, 3.840],
    [19.2, 8.0, 400.0, 175.0, 3.845],
    [27.3, 4.0, 79.0, 66.0, 1.935],
    [26.0, 4.0, 120.3, 91.0, 2.140],
    [30.4, 4.0, 95.1, 113.0, 1.513],
    [15.8, 8.0, 351.0, 264.0, 3.170],
    [19.7, 6.0, 145.0, 175.0, 2.770],
    [15.0, 8.0, 301.0, 335.0, 3.570],
    [21.4, 4.0, 121.0, 109.0, 2.780],
];

/// `mpg ~ cyl + disp + hp + wt` as a design matrix and response.
pub fn mtcars_design() -> (Mat<f64>, Col<f64>) {
    let x = Mat::from_fn(MTCARS.len(), 4, |i, j| MTCARS[i][j + 1]);
    let y = Col::from_fn(MTCARS.len(), |i| MTCARS[i][0]);
    (x, y)
}

/// Full model `mpg ~ cyl + disp + hp + wt` over `mtcars`.
pub fn mtcars_model() -> ReferenceModel {
    let (x, y) = mtcars_design();
    let data = ModelSelectionData::new(y, x, ["cyl", "disp", "hp", "wt"]).expect("valid data");
    ReferenceModel::fit(data).expect("full model should fit")
}

/// Approximate equality check for floating point values.
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}
