//! The fitting seam used by stepwise selection.

use crate::core::RegressionResult;
use crate::selection::SelectionError;
use crate::solvers::{FittedRegressor, OlsRegressor, RegressionError, Regressor};
use faer::{Col, Mat};

/// Fits the response on an ordered set of named predictors.
///
/// Implementations must return per-coefficient t-statistics and p-values
/// aligned with the columns of `predictors` (the intercept is reported
/// separately), and must fail with [`SelectionError::SingularFit`] rather
/// than return a fit whose design is not of full rank.
pub trait RegressionFitter {
    fn fit(
        &self,
        response: &Col<f64>,
        predictors: &Mat<f64>,
        names: &[String],
    ) -> Result<RegressionResult, SelectionError>;
}

/// [`RegressionFitter`] backed by [`OlsRegressor`] with an intercept.
#[derive(Debug, Clone)]
pub struct OlsFitter {
    regressor: OlsRegressor,
}

impl OlsFitter {
    /// Use a specific regressor. It must compute coefficient inference.
    pub fn new(regressor: OlsRegressor) -> Result<Self, SelectionError> {
        if !regressor.options().compute_inference {
            return Err(SelectionError::InvalidModel(
                "stepwise fits need coefficient inference".to_string(),
            ));
        }
        Ok(Self { regressor })
    }
}

impl Default for OlsFitter {
    fn default() -> Self {
        Self {
            regressor: OlsRegressor::default(),
        }
    }
}

impl RegressionFitter for OlsFitter {
    fn fit(
        &self,
        response: &Col<f64>,
        predictors: &Mat<f64>,
        names: &[String],
    ) -> Result<RegressionResult, SelectionError> {
        let result = self.regressor.fit(predictors, response)?.into_result();

        if result.has_aliased() {
            return Err(SelectionError::SingularFit {
                predictors: names.to_vec(),
            });
        }
        if result.t_statistics.is_none() || result.p_values.is_none() {
            return Err(RegressionError::InsufficientObservations {
                needed: result.n_parameters + 1,
                got: result.n_observations,
            }
            .into());
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|j| format!("x{j}")).collect()
    }

    #[test]
    fn test_fit_reports_inference() {
        let x = Mat::from_fn(10, 2, |i, j| ((i + 3 * j) as f64).sin());
        let y = Col::from_fn(10, |i| 2.0 * x[(i, 0)] - x[(i, 1)] + 0.05 * (i as f64).cos());

        let fit = OlsFitter::default().fit(&y, &x, &names(2)).unwrap();
        assert_eq!(fit.t_statistics.as_ref().map(|t| t.nrows()), Some(2));
        assert!(fit.coefficient_test(1).is_some());
    }

    #[test]
    fn test_collinear_design_is_singular() {
        let x = Mat::from_fn(10, 2, |i, j| (i as f64) * (j + 1) as f64);
        let y = Col::from_fn(10, |i| (i as f64).sqrt());

        let err = OlsFitter::default().fit(&y, &x, &names(2)).unwrap_err();
        match err {
            SelectionError::SingularFit { predictors } => assert_eq!(predictors, names(2)),
            other => panic!("expected SingularFit, got {other:?}"),
        }
    }

    #[test]
    fn test_saturated_design_rejected() {
        let x = Mat::from_fn(3, 2, |i, j| ((i + 1) * (j + 2) + i * i) as f64);
        let y = Col::from_fn(3, |i| i as f64 + 0.5);

        let err = OlsFitter::default().fit(&y, &x, &names(2)).unwrap_err();
        assert!(matches!(
            err,
            SelectionError::Regression(RegressionError::InsufficientObservations { .. })
        ));
    }

    #[test]
    fn test_regressor_without_inference_rejected() {
        let regressor = OlsRegressor::builder().compute_inference(false).build();
        assert!(OlsFitter::new(regressor).is_err());
        assert!(OlsFitter::new(OlsRegressor::default()).is_ok());
    }
}
