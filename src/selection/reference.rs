//! The full model a selection starts from.

use crate::core::{ModelSelectionData, RegressionResult};
use crate::selection::SelectionError;
use crate::solvers::{FittedRegressor, OlsRegressor, Regressor};

/// Minimum number of candidate predictors forward selection accepts.
pub const MIN_CANDIDATES: usize = 2;

/// An OLS fit of the response on every candidate predictor, together with
/// the data it was fit on.
///
/// Its predictor set is the candidate pool, and its residual mean square is
/// the variance estimate SBIC and Mallows' Cp are scaled by.
#[derive(Debug, Clone)]
pub struct ReferenceModel {
    data: ModelSelectionData,
    fit: RegressionResult,
}

impl ReferenceModel {
    /// Fit the full model (with intercept) on all predictors of `data`.
    pub fn fit(data: ModelSelectionData) -> Result<Self, SelectionError> {
        check_candidate_count(&data)?;

        let fitted = OlsRegressor::default().fit(data.predictors(), data.response())?;

        Self::from_fit(data, fitted.into_result())
    }

    /// Pair an existing fit with the data it was fit on.
    ///
    /// The fit must cover exactly the columns of `data` at full rank and
    /// leave positive residual degrees of freedom.
    pub fn from_fit(data: ModelSelectionData, fit: RegressionResult) -> Result<Self, SelectionError> {
        check_candidate_count(&data)?;

        if fit.coefficients.nrows() != data.n_predictors() {
            return Err(SelectionError::InvalidModel(format!(
                "fit has {} coefficients but the data has {} predictors",
                fit.coefficients.nrows(),
                data.n_predictors()
            )));
        }
        if fit.n_observations != data.n_observations() {
            return Err(SelectionError::InvalidModel(format!(
                "fit used {} observations but the data has {}",
                fit.n_observations,
                data.n_observations()
            )));
        }
        if fit.has_aliased() {
            let aliased: Vec<&str> = data
                .names()
                .iter()
                .zip(&fit.aliased)
                .filter(|&(_, &a)| a)
                .map(|(name, _)| name.as_str())
                .collect();
            return Err(SelectionError::InvalidModel(format!(
                "the full model has aliased coefficients: {}",
                aliased.join(", ")
            )));
        }
        if fit.residual_df() == 0 || !fit.mse.is_finite() {
            return Err(SelectionError::InvalidModel(
                "the full model has no residual degrees of freedom".to_string(),
            ));
        }

        Ok(Self { data, fit })
    }

    /// The data the model was fit on.
    pub fn data(&self) -> &ModelSelectionData {
        &self.data
    }

    /// The full-model fit.
    pub fn result(&self) -> &RegressionResult {
        &self.fit
    }

    /// Candidate predictor names, in model order.
    pub fn candidates(&self) -> &[String] {
        self.data.names()
    }
}

fn check_candidate_count(data: &ModelSelectionData) -> Result<(), SelectionError> {
    if data.n_predictors() < MIN_CANDIDATES {
        return Err(SelectionError::InsufficientPredictors {
            got: data.n_predictors(),
        });
    }
    Ok(())
}
