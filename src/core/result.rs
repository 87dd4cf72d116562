//! Regression result structures.

use faer::Col;

/// Result of an OLS fit with intercept.
///
/// Holds what stepwise selection reads from a fit: coefficients and their
/// tests, the residuals behind every information criterion, and the summary
/// statistics reported per step.
#[derive(Debug, Clone)]
pub struct RegressionResult {
    /// Estimated slopes in the column order of the design matrix. Aliased
    /// coefficients are NaN.
    pub coefficients: Col<f64>,

    pub intercept: f64,

    /// Residuals `y - ŷ`.
    pub residuals: Col<f64>,

    /// Estimated coefficients, intercept included.
    pub n_parameters: usize,

    pub n_observations: usize,

    /// Which columns were dropped as linearly dependent.
    pub aliased: Vec<bool>,

    pub r_squared: f64,
    pub adj_r_squared: f64,

    /// `sqrt(mse)`.
    pub rmse: f64,

    /// Residual mean square, `RSS / (n - p)`.
    pub mse: f64,

    pub f_statistic: f64,
    pub f_pvalue: f64,

    // Inference, present when computed and residual df > 0.
    pub std_errors: Option<Col<f64>>,
    pub intercept_std_error: Option<f64>,
    pub t_statistics: Option<Col<f64>>,
    pub intercept_t_statistic: Option<f64>,
    pub p_values: Option<Col<f64>>,
    pub intercept_p_value: Option<f64>,
}

impl RegressionResult {
    /// Create a new empty result (used internally by solvers).
    pub(crate) fn empty(n_features: usize, n_observations: usize) -> Self {
        Self {
            coefficients: Col::zeros(n_features),
            intercept: 0.0,
            residuals: Col::zeros(n_observations),
            n_parameters: 1,
            n_observations,
            aliased: vec![false; n_features],
            r_squared: 0.0,
            adj_r_squared: 0.0,
            rmse: 0.0,
            mse: 0.0,
            f_statistic: 0.0,
            f_pvalue: 1.0,
            std_errors: None,
            intercept_std_error: None,
            t_statistics: None,
            intercept_t_statistic: None,
            p_values: None,
            intercept_p_value: None,
        }
    }

    /// Residual degrees of freedom (n - p).
    pub fn residual_df(&self) -> usize {
        self.n_observations.saturating_sub(self.n_parameters)
    }

    /// Model degrees of freedom (p - 1).
    pub fn model_df(&self) -> usize {
        self.n_parameters.saturating_sub(1)
    }

    /// Check if any coefficients are aliased.
    pub fn has_aliased(&self) -> bool {
        self.aliased.iter().any(|&a| a)
    }

    /// Get coefficient value, returning None for aliased coefficients.
    pub fn get_coefficient(&self, index: usize) -> Option<f64> {
        if index < self.coefficients.nrows() && !self.aliased[index] {
            Some(self.coefficients[index])
        } else {
            None
        }
    }

    /// t-statistic and two-tailed p-value of the coefficient at `index`.
    ///
    /// Returns `None` when inference was not computed, the index is out of
    /// range, or the coefficient is aliased.
    pub fn coefficient_test(&self, index: usize) -> Option<(f64, f64)> {
        self.get_coefficient(index)?;
        let t = self.t_statistics.as_ref()?[index];
        let p = self.p_values.as_ref()?[index];
        Some((t, p))
    }

    /// Residual sum of squares (RSS).
    pub fn rss(&self) -> f64 {
        self.residuals.iter().map(|&r| r.powi(2)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result() {
        let result = RegressionResult::empty(3, 10);
        assert_eq!(result.coefficients.nrows(), 3);
        assert_eq!(result.n_observations, 10);
        assert_eq!(result.residual_df(), 9);
        assert_eq!(result.model_df(), 0);
    }

    #[test]
    fn test_degrees_of_freedom() {
        let mut result = RegressionResult::empty(3, 100);
        result.n_parameters = 4;

        assert_eq!(result.residual_df(), 96);
        assert_eq!(result.model_df(), 3);
    }

    #[test]
    fn test_get_coefficient() {
        let mut result = RegressionResult::empty(3, 10);
        result.coefficients[0] = 1.0;
        result.coefficients[1] = 2.0;
        result.coefficients[2] = 3.0;

        assert_eq!(result.get_coefficient(0), Some(1.0));
        assert_eq!(result.get_coefficient(5), None);

        result.aliased[1] = true;
        assert!(result.has_aliased());
        assert_eq!(result.get_coefficient(1), None);
    }

    #[test]
    fn test_coefficient_test_requires_inference() {
        let mut result = RegressionResult::empty(2, 10);
        assert_eq!(result.coefficient_test(0), None);

        result.t_statistics = Some(Col::from_fn(2, |i| (i + 1) as f64));
        result.p_values = Some(Col::from_fn(2, |i| 0.1 * (i + 1) as f64));
        assert_eq!(result.coefficient_test(1), Some((2.0, 0.2)));

        result.aliased[1] = true;
        assert_eq!(result.coefficient_test(1), None);
    }

    #[test]
    fn test_rss() {
        let mut result = RegressionResult::empty(2, 5);
        result.residuals = Col::from_fn(5, |i| [-0.1, 0.0, 0.1, 0.0, -0.1][i]);

        assert!((result.rss() - 0.03).abs() < 1e-10);
    }
}
