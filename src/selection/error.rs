//! Errors raised by stepwise selection.

use crate::core::{DataError, OptionsError};
use crate::solvers::RegressionError;
use thiserror::Error;

/// Errors that can occur while building a reference model or running a
/// selection.
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("invalid model: {0}")]
    InvalidModel(String),

    #[error("forward selection needs at least 2 candidate predictors, got {got}")]
    InsufficientPredictors { got: usize },

    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] OptionsError),

    #[error("singular fit: design matrix for [{}] is not of full rank", .predictors.join(", "))]
    SingularFit { predictors: Vec<String> },

    #[error("no candidate among [{}] has a finite t-statistic", .candidates.join(", "))]
    UndefinedStatistics { candidates: Vec<String> },

    #[error(transparent)]
    Regression(#[from] RegressionError),

    #[error(transparent)]
    Data(#[from] DataError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singular_fit_message_lists_predictors() {
        let err = SelectionError::SingularFit {
            predictors: vec!["x1".to_string(), "x2".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "singular fit: design matrix for [x1, x2] is not of full rank"
        );
    }

    #[test]
    fn test_undefined_statistics_message() {
        let err = SelectionError::UndefinedStatistics {
            candidates: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "no candidate among [a, b] has a finite t-statistic"
        );
    }

    #[test]
    fn test_options_error_converts() {
        let err: SelectionError = OptionsError::InvalidPenter(0.0).into();
        assert!(matches!(err, SelectionError::InvalidParameter(_)));
        assert_eq!(
            err.to_string(),
            "invalid parameter: penter must be in (0, 1], got 0"
        );
    }
}
