//! Ordinary Least Squares regression solver.

use crate::core::{RegressionOptions, RegressionOptionsBuilder, RegressionResult};
use crate::inference::CoefficientInference;
use crate::solvers::traits::{FittedRegressor, RegressionError, Regressor};
use crate::utils::{center_columns, center_vector, detect_constant_columns, select_columns};
use faer::{Col, Mat};
use statrs::distribution::{ContinuousCDF, FisherSnedecor};

/// Ordinary Least Squares regression estimator with intercept.
///
/// Columns are screened in their given order: a constant column, or one that
/// lies in the span of the columns before it, is aliased and its coefficient
/// set to NaN, the way R's `lm()` reports rank-deficient fits. The remaining
/// columns are solved on centered data with a QR decomposition.
///
/// # Example
///
/// ```rust,ignore
/// use stepwise_ols::solvers::{FittedRegressor, OlsRegressor, Regressor};
/// use faer::{Col, Mat};
///
/// let x = Mat::from_fn(100, 2, |i, j| ((i * (j + 1)) as f64).sin());
/// let y = Col::from_fn(100, |i| 1.0 + 2.0 * x[(i, 0)]);
///
/// let result = OlsRegressor::default().fit(&x, &y)?.into_result();
/// println!("R² = {}", result.r_squared);
/// ```
#[derive(Debug, Clone)]
pub struct OlsRegressor {
    options: RegressionOptions,
}

impl OlsRegressor {
    /// Create a new OLS regressor with the given options.
    pub fn new(options: RegressionOptions) -> Self {
        Self { options }
    }

    /// Create a builder for configuring the regressor.
    pub fn builder() -> OlsRegressorBuilder {
        OlsRegressorBuilder::default()
    }

    /// The options this regressor fits with.
    pub fn options(&self) -> &RegressionOptions {
        &self.options
    }
}

impl Default for OlsRegressor {
    fn default() -> Self {
        Self::new(RegressionOptions::default())
    }
}

impl Regressor for OlsRegressor {
    type Fitted = FittedOls;

    fn fit(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<Self::Fitted, RegressionError> {
        self.options.validate()?;

        let n_samples = x.nrows();
        let n_features = x.ncols();

        if x.nrows() != y.nrows() {
            return Err(RegressionError::DimensionMismatch {
                x_rows: x.nrows(),
                y_len: y.nrows(),
            });
        }

        if n_samples < 2 {
            return Err(RegressionError::InsufficientObservations {
                needed: 2,
                got: n_samples,
            });
        }

        // Allow an exact fit (n_params == n_samples); inference is skipped then.
        let n_params = n_features + 1;
        if n_samples < n_params {
            return Err(RegressionError::InsufficientObservations {
                needed: n_params,
                got: n_samples,
            });
        }

        let constant_cols = detect_constant_columns(x, self.options.rank_tolerance);
        let (x_centered, x_means) = center_columns(x);
        let (y_centered, y_mean) = center_vector(y);

        let (coefficients, aliased, rank) =
            self.solve_with_qr(&x_centered, &y_centered, &constant_cols);

        // intercept = y_mean - x_means' * coefficients
        let intercept = y_mean
            - (0..n_features)
                .filter(|&j| !aliased[j])
                .map(|j| x_means[j] * coefficients[j])
                .sum::<f64>();

        let residuals = Col::from_fn(n_samples, |i| {
            let fitted = intercept
                + (0..n_features)
                    .filter(|&j| !aliased[j])
                    .map(|j| x[(i, j)] * coefficients[j])
                    .sum::<f64>();
            y[i] - fitted
        });

        let mut result = RegressionResult::empty(n_features, n_samples);
        result.coefficients = coefficients;
        result.intercept = intercept;
        result.residuals = residuals;
        result.n_parameters = rank + 1;
        result.aliased = aliased;

        self.compute_statistics(&y_centered, &mut result);

        if self.options.compute_inference {
            self.compute_inference(x, &mut result);
        }

        Ok(FittedOls { result })
    }
}

impl OlsRegressor {
    /// Solve the least squares problem, aliasing dependent columns first.
    ///
    /// `preset_aliased` marks columns known to be redundant up front (constant
    /// columns when an intercept absorbs them).
    fn solve_with_qr(
        &self,
        x: &Mat<f64>,
        y: &Col<f64>,
        preset_aliased: &[bool],
    ) -> (Col<f64>, Vec<bool>, usize) {
        let n_features = x.ncols();
        let mut aliased = preset_aliased.to_vec();
        let mut active: Vec<usize> = Vec::with_capacity(n_features);

        for j in 0..n_features {
            if aliased[j] {
                continue;
            }
            if active.len() >= x.nrows() || !self.adds_rank(x, &active, j) {
                aliased[j] = true;
                continue;
            }
            active.push(j);
        }

        let rank = active.len();
        let mut coefficients = Col::from_fn(n_features, |_| f64::NAN);
        if rank == 0 {
            return (coefficients, aliased, 0);
        }

        let x_active = select_columns(x, &active);
        let qr = x_active.qr();
        let q = qr.compute_Q();
        let r = qr.R();
        let qty = q.transpose() * y;

        // Back-substitution for R * beta = Q'y
        let mut beta = vec![0.0; rank];
        for i in (0..rank).rev() {
            let mut sum = qty[i];
            for k in (i + 1)..rank {
                sum -= r[(i, k)] * beta[k];
            }
            beta[i] = sum / r[(i, i)];
        }

        for (k, &j) in active.iter().enumerate() {
            coefficients[j] = beta[k];
        }

        (coefficients, aliased, rank)
    }

    /// Whether column `j` has a component outside the span of `active`.
    fn adds_rank(&self, x: &Mat<f64>, active: &[usize], j: usize) -> bool {
        let norm = (0..x.nrows()).map(|i| x[(i, j)].powi(2)).sum::<f64>().sqrt();
        if norm <= self.options.rank_tolerance {
            return false;
        }

        let mut columns = active.to_vec();
        columns.push(j);
        let candidate = select_columns(x, &columns);
        let qr = candidate.qr();
        let r = qr.R();
        let k = active.len();

        r[(k, k)].abs() > self.options.rank_tolerance.max(1e-7 * norm)
    }

    /// Compute goodness-of-fit statistics from residuals.
    fn compute_statistics(&self, y_centered: &Col<f64>, result: &mut RegressionResult) {
        let n = y_centered.nrows() as f64;
        let tss: f64 = y_centered.iter().map(|&v| v.powi(2)).sum();
        let rss = result.rss();

        let r_squared = if tss > 0.0 {
            (1.0 - rss / tss).clamp(0.0, 1.0)
        } else if rss < 1e-10 {
            1.0
        } else {
            0.0
        };

        let df_total = n - 1.0;
        let df_resid = result.residual_df() as f64;
        let adj_r_squared = if df_resid > 0.0 {
            1.0 - (1.0 - r_squared) * df_total / df_resid
        } else {
            f64::NAN
        };

        let mse = if df_resid > 0.0 { rss / df_resid } else { f64::NAN };

        let df_model = result.model_df() as f64;
        let f_statistic = if df_model > 0.0 && df_resid > 0.0 && mse > 0.0 {
            ((tss - rss) / df_model) / mse
        } else {
            f64::NAN
        };
        let f_pvalue = if f_statistic.is_finite() {
            FisherSnedecor::new(df_model, df_resid)
                .ok()
                .map_or(f64::NAN, |d| 1.0 - d.cdf(f_statistic))
        } else {
            f64::NAN
        };

        result.r_squared = r_squared;
        result.adj_r_squared = adj_r_squared;
        result.mse = mse;
        result.rmse = mse.sqrt();
        result.f_statistic = f_statistic;
        result.f_pvalue = f_pvalue;
    }

    /// Compute standard errors, t-statistics and p-values.
    ///
    /// Leaves the optional fields as `None` when there are no residual degrees
    /// of freedom or the cross-product matrix cannot be inverted.
    fn compute_inference(&self, x: &Mat<f64>, result: &mut RegressionResult) {
        let df = result.residual_df() as f64;
        if df <= 0.0 || !result.mse.is_finite() {
            return;
        }

        let Ok((se, se_int)) =
            CoefficientInference::standard_errors_with_intercept(x, result.mse, &result.aliased)
        else {
            return;
        };

        let t_int = if se_int > 0.0 {
            result.intercept / se_int
        } else {
            f64::NAN
        };
        let t_stats = CoefficientInference::t_statistics(&result.coefficients, &se);
        let p_vals = CoefficientInference::p_values(&t_stats, df);

        result.intercept_std_error = Some(se_int);
        result.intercept_t_statistic = Some(t_int);
        result.intercept_p_value = Some(CoefficientInference::p_value(t_int, df));
        result.std_errors = Some(se);
        result.t_statistics = Some(t_stats);
        result.p_values = Some(p_vals);
    }
}

/// A fitted OLS regression model.
#[derive(Debug, Clone)]
pub struct FittedOls {
    result: RegressionResult,
}

impl FittedRegressor for FittedOls {
    fn into_result(self) -> RegressionResult {
        self.result
    }
}

/// Builder for `OlsRegressor`.
#[derive(Debug, Clone, Default)]
pub struct OlsRegressorBuilder {
    builder: RegressionOptionsBuilder,
}

impl OlsRegressorBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to compute inference statistics.
    pub fn compute_inference(mut self, compute: bool) -> Self {
        self.builder = self.builder.compute_inference(compute);
        self
    }

    /// Set the rank tolerance for aliasing decisions.
    pub fn rank_tolerance(mut self, tol: f64) -> Self {
        self.builder = self.builder.rank_tolerance(tol);
        self
    }

    /// Build the OLS regressor. Options are validated when fitting.
    pub fn build(self) -> OlsRegressor {
        OlsRegressor::new(self.builder.build_unchecked())
    }
}
