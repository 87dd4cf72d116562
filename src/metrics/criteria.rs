//! Information criteria and Mallows' Cp for OLS fits.
//!
//! All criteria are computed from the residual sum of squares using the
//! maximum-likelihood variance estimate `SSE / n`, the convention of R's
//! `AIC()`/`BIC()` on `lm` objects. `p` is the number of estimated
//! coefficients including the intercept.

use crate::core::RegressionResult;
use std::f64::consts::PI;

/// Gaussian log-likelihood term shared by AIC and SBC:
/// `n ln(2π) + n ln(SSE/n) + n`.
fn deviance(fit: &RegressionResult) -> f64 {
    let n = fit.n_observations as f64;
    n * (2.0 * PI).ln() + n * (fit.rss() / n).ln() + n
}

/// Akaike information criterion.
///
/// `AIC = n ln(2π) + n ln(SSE/n) + n + 2(p + 1)`, where the extra parameter
/// accounts for the error variance.
pub fn aic(fit: &RegressionResult) -> f64 {
    let k = fit.n_parameters as f64 + 1.0;
    deviance(fit) + 2.0 * k
}

/// Schwarz Bayesian criterion.
///
/// `SBC = n ln(2π) + n ln(SSE/n) + n + ln(n)(p + 1)`
pub fn sbc(fit: &RegressionResult) -> f64 {
    let n = fit.n_observations as f64;
    let k = fit.n_parameters as f64 + 1.0;
    deviance(fit) + n.ln() * k
}

/// Sawa's Bayesian information criterion.
///
/// `SBIC = n ln(SSE/n) + 2(p + 2)q - 2q²` with `q = n σ̂²_full / SSE`, where
/// `σ̂²_full` is the residual mean square of the full model.
pub fn sbic(fit: &RegressionResult, full: &RegressionResult) -> f64 {
    let n = fit.n_observations as f64;
    let p = fit.n_parameters as f64;
    let sse = fit.rss();
    let q = n * full.mse / sse;

    n * (sse / n).ln() + 2.0 * (p + 2.0) * q - 2.0 * q.powi(2)
}

/// Mallows' Cp.
///
/// `Cp = SSE / σ̂²_full - (n - 2p)`. The full model itself scores `Cp = p`.
pub fn mallows_cp(fit: &RegressionResult, full: &RegressionResult) -> f64 {
    let n = fit.n_observations as f64;
    let p = fit.n_parameters as f64;

    fit.rss() / full.mse - (n - 2.0 * p)
}

/// The four quality criteria of one fit, relative to a full model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelQuality {
    pub aic: f64,
    pub sbc: f64,
    pub sbic: f64,
    pub mallows_cp: f64,
}

impl ModelQuality {
    /// Evaluate every criterion for `fit` against `full`.
    pub fn evaluate(fit: &RegressionResult, full: &RegressionResult) -> Self {
        Self {
            aic: aic(fit),
            sbc: sbc(fit),
            sbic: sbic(fit, full),
            mallows_cp: mallows_cp(fit, full),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faer::Col;

    /// Result with n = 10, p = 3 (intercept + 2) and SSE = 20.
    fn fit_with_sse() -> RegressionResult {
        let mut result = RegressionResult::empty(2, 10);
        result.n_parameters = 3;
        // Residuals of ±sqrt(2) give SSE = 10 * 2 = 20
        result.residuals = Col::from_fn(10, |i| {
            if i % 2 == 0 {
                2f64.sqrt()
            } else {
                -(2f64.sqrt())
            }
        });
        result.mse = 20.0 / 7.0;
        result
    }

    #[test]
    fn test_aic_and_sbc() {
        let fit = fit_with_sse();
        let base = 10.0 * (2.0 * PI).ln() + 10.0 * 2f64.ln() + 10.0;

        assert!((aic(&fit) - (base + 8.0)).abs() < 1e-10);
        assert!((sbc(&fit) - (base + 4.0 * 10f64.ln())).abs() < 1e-10);
    }

    #[test]
    fn test_full_model_cp_equals_parameter_count() {
        let fit = fit_with_sse();
        assert!((mallows_cp(&fit, &fit) - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_sbic_against_reference() {
        let fit = fit_with_sse();
        let mut full = fit_with_sse();
        full.mse = 1.0;

        // q = 10 * 1 / 20 = 0.5
        let expected = 10.0 * 2f64.ln() + 2.0 * 5.0 * 0.5 - 2.0 * 0.25;
        assert!((sbic(&fit, &full) - expected).abs() < 1e-10);
    }

    #[test]
    fn test_evaluate_bundles_all_criteria() {
        let fit = fit_with_sse();
        let quality = ModelQuality::evaluate(&fit, &fit);

        assert_eq!(quality.aic, aic(&fit));
        assert_eq!(quality.sbc, sbc(&fit));
        assert_eq!(quality.sbic, sbic(&fit, &fit));
        assert_eq!(quality.mallows_cp, mallows_cp(&fit, &fit));
    }
}
