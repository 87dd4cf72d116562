//! Regression and selection options.

use thiserror::Error;

/// Default entry significance level for forward selection.
pub const DEFAULT_PENTER: f64 = 0.3;

/// Configuration options for the OLS solver. An intercept is always fitted.
#[derive(Debug, Clone)]
pub struct RegressionOptions {
    /// Whether to compute standard errors and inference statistics (default: true).
    pub compute_inference: bool,
    /// Rank tolerance for QR decomposition.
    pub rank_tolerance: f64,
}

impl Default for RegressionOptions {
    fn default() -> Self {
        Self {
            compute_inference: true,
            rank_tolerance: 1e-10,
        }
    }
}

/// Errors that can occur when validating options.
#[derive(Debug, Error, PartialEq)]
pub enum OptionsError {
    #[error("rank_tolerance must be positive, got {0}")]
    InvalidRankTolerance(f64),
    #[error("penter must be in (0, 1], got {0}")]
    InvalidPenter(f64),
}

impl RegressionOptions {
    /// Create a new builder for regression options.
    pub fn builder() -> RegressionOptionsBuilder {
        RegressionOptionsBuilder::default()
    }

    /// Validate the options and return an error if invalid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !(self.rank_tolerance > 0.0) {
            return Err(OptionsError::InvalidRankTolerance(self.rank_tolerance));
        }
        Ok(())
    }
}

/// Builder for `RegressionOptions`.
#[derive(Debug, Clone, Default)]
pub struct RegressionOptionsBuilder {
    options: RegressionOptions,
}

impl RegressionOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to compute inference statistics.
    pub fn compute_inference(mut self, compute: bool) -> Self {
        self.options.compute_inference = compute;
        self
    }

    /// Set the rank tolerance for QR decomposition.
    pub fn rank_tolerance(mut self, tol: f64) -> Self {
        self.options.rank_tolerance = tol;
        self
    }

    /// Build and validate the options.
    pub fn build(self) -> Result<RegressionOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }

    /// Build the options without validation.
    pub fn build_unchecked(self) -> RegressionOptions {
        self.options
    }
}

/// Options controlling forward stepwise selection.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionOptions {
    /// Entry significance level; a candidate enters when its two-tailed
    /// p-value would be at most `penter` (default: 0.3).
    pub penter: f64,
    /// Emit the cumulative fit after every accepted step (default: false).
    pub details: bool,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            penter: DEFAULT_PENTER,
            details: false,
        }
    }
}

impl SelectionOptions {
    /// Create a new builder for selection options.
    pub fn builder() -> SelectionOptionsBuilder {
        SelectionOptionsBuilder::default()
    }

    /// Validate the options and return an error if invalid.
    ///
    /// `penter` must lie in (0, 1]; NaN is rejected.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !(self.penter > 0.0 && self.penter <= 1.0) {
            return Err(OptionsError::InvalidPenter(self.penter));
        }
        Ok(())
    }
}

/// Builder for `SelectionOptions`.
#[derive(Debug, Clone, Default)]
pub struct SelectionOptionsBuilder {
    options: SelectionOptions,
}

impl SelectionOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the entry significance level.
    pub fn penter(mut self, penter: f64) -> Self {
        self.options.penter = penter;
        self
    }

    /// Set whether per-step fit details are reported.
    pub fn details(mut self, details: bool) -> Self {
        self.options.details = details;
        self
    }

    /// Build and validate the options.
    pub fn build(self) -> Result<SelectionOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }

    /// Build the options without validation.
    pub fn build_unchecked(self) -> SelectionOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = RegressionOptions::default();
        assert!(opts.compute_inference);
        assert!((opts.rank_tolerance - 1e-10).abs() < 1e-20);
    }

    #[test]
    fn test_builder() {
        let opts = RegressionOptions::builder()
            .compute_inference(false)
            .rank_tolerance(1e-8)
            .build()
            .unwrap();

        assert!(!opts.compute_inference);
        assert!((opts.rank_tolerance - 1e-8).abs() < 1e-20);
    }

    #[test]
    fn test_validation_invalid_rank_tolerance() {
        let result = RegressionOptions::builder().rank_tolerance(0.0).build();
        assert!(matches!(result, Err(OptionsError::InvalidRankTolerance(_))));
    }

    #[test]
    fn test_selection_defaults() {
        let opts = SelectionOptions::default();
        assert!((opts.penter - 0.3).abs() < 1e-12);
        assert!(!opts.details);
    }

    #[test]
    fn test_penter_bounds() {
        assert!(SelectionOptions::builder().penter(1.0).build().is_ok());
        assert!(SelectionOptions::builder().penter(1e-6).build().is_ok());

        for bad in [0.0, -0.1, 1.01, f64::NAN] {
            let result = SelectionOptions::builder().penter(bad).build();
            assert!(
                matches!(result, Err(OptionsError::InvalidPenter(_))),
                "penter = {bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_selection_build_unchecked() {
        let opts = SelectionOptionsBuilder::new()
            .penter(2.0)
            .details(true)
            .build_unchecked();
        assert!(opts.details);
        assert!(opts.validate().is_err());
    }
}
