//! Named response/predictor data used during model selection.

use faer::{Col, Mat};
use thiserror::Error;

/// Errors raised when assembling a [`ModelSelectionData`].
#[derive(Debug, Error, PartialEq)]
pub enum DataError {
    #[error("expected {expected} predictor names, got {got}")]
    NameCountMismatch { expected: usize, got: usize },

    #[error("dimension mismatch: predictors have {x_rows} rows but response has {y_len} elements")]
    DimensionMismatch { x_rows: usize, y_len: usize },

    #[error("predictor name at position {0} is empty")]
    EmptyName(usize),

    #[error("duplicate predictor name: {0}")]
    DuplicateName(String),

    #[error("unknown predictor: {0}")]
    UnknownPredictor(String),

    #[error("non-finite value in {column} at row {row}")]
    NonFinite { column: String, row: usize },
}

/// Response vector plus named predictor columns.
///
/// Built once from the training data of the full model and never mutated
/// afterwards; subsets for candidate fits are materialized with
/// [`ModelSelectionData::design`].
#[derive(Debug, Clone)]
pub struct ModelSelectionData {
    response: Col<f64>,
    predictors: Mat<f64>,
    names: Vec<String>,
}

impl ModelSelectionData {
    /// Assemble and validate a dataset.
    ///
    /// `names[j]` labels column `j` of `predictors`.
    pub fn new<S: Into<String>>(
        response: Col<f64>,
        predictors: Mat<f64>,
        names: impl IntoIterator<Item = S>,
    ) -> Result<Self, DataError> {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        if names.len() != predictors.ncols() {
            return Err(DataError::NameCountMismatch {
                expected: predictors.ncols(),
                got: names.len(),
            });
        }
        if predictors.nrows() != response.nrows() {
            return Err(DataError::DimensionMismatch {
                x_rows: predictors.nrows(),
                y_len: response.nrows(),
            });
        }

        for (j, name) in names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(DataError::EmptyName(j));
            }
            if names[..j].contains(name) {
                return Err(DataError::DuplicateName(name.clone()));
            }
        }

        if let Some(row) = response.iter().position(|v| !v.is_finite()) {
            return Err(DataError::NonFinite {
                column: "response".to_string(),
                row,
            });
        }
        for (j, name) in names.iter().enumerate() {
            if let Some(row) = (0..predictors.nrows()).find(|&i| !predictors[(i, j)].is_finite()) {
                return Err(DataError::NonFinite {
                    column: name.clone(),
                    row,
                });
            }
        }

        Ok(Self {
            response,
            predictors,
            names,
        })
    }

    /// Build a dataset from `(name, column)` pairs.
    pub fn from_columns<S: Into<String>>(
        response: Col<f64>,
        columns: Vec<(S, Col<f64>)>,
    ) -> Result<Self, DataError> {
        let n = response.nrows();
        let mut names = Vec::with_capacity(columns.len());
        let mut values = Vec::with_capacity(columns.len());
        for (name, column) in columns {
            let name = name.into();
            if column.nrows() != n {
                return Err(DataError::DimensionMismatch {
                    x_rows: column.nrows(),
                    y_len: n,
                });
            }
            names.push(name);
            values.push(column);
        }

        let predictors = Mat::from_fn(n, values.len(), |i, j| values[j][i]);
        Self::new(response, predictors, names)
    }

    /// The response vector.
    pub fn response(&self) -> &Col<f64> {
        &self.response
    }

    /// The full predictor matrix, one column per name.
    pub fn predictors(&self) -> &Mat<f64> {
        &self.predictors
    }

    /// Predictor names in column order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of observations.
    pub fn n_observations(&self) -> usize {
        self.response.nrows()
    }

    /// Number of predictor columns.
    pub fn n_predictors(&self) -> usize {
        self.names.len()
    }

    /// Column index of a predictor.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Design matrix for the given predictors, columns in the order supplied.
    pub fn design<S: AsRef<str>>(&self, names: &[S]) -> Result<Mat<f64>, DataError> {
        let indices = names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.index_of(name)
                    .ok_or_else(|| DataError::UnknownPredictor(name.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(crate::utils::select_columns(&self.predictors, &indices))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ModelSelectionData {
        let y = Col::from_fn(4, |i| i as f64);
        let x = Mat::from_fn(4, 3, |i, j| (i * 10 + j) as f64);
        ModelSelectionData::new(y, x, ["a", "b", "c"]).expect("valid data")
    }

    #[test]
    fn test_design_respects_requested_order() {
        let data = sample();
        let design = data.design(&["c", "a"]).unwrap();

        assert_eq!(design.ncols(), 2);
        assert_eq!(design[(1, 0)], 12.0);
        assert_eq!(design[(1, 1)], 10.0);
    }

    #[test]
    fn test_unknown_predictor() {
        let data = sample();
        assert_eq!(
            data.design(&["z"]).unwrap_err(),
            DataError::UnknownPredictor("z".to_string())
        );
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let y = Col::from_fn(3, |i| i as f64);
        let x = Mat::from_fn(3, 2, |i, j| (i + j) as f64);
        let err = ModelSelectionData::new(y, x, ["a", "a"]).unwrap_err();
        assert_eq!(err, DataError::DuplicateName("a".to_string()));
    }

    #[test]
    fn test_rejects_name_count_mismatch() {
        let y = Col::from_fn(3, |i| i as f64);
        let x = Mat::from_fn(3, 2, |i, j| (i + j) as f64);
        let err = ModelSelectionData::new(y, x, ["a"]).unwrap_err();
        assert!(matches!(err, DataError::NameCountMismatch { expected: 2, got: 1 }));
    }

    #[test]
    fn test_rejects_non_finite() {
        let y = Col::from_fn(3, |i| i as f64);
        let x = Mat::from_fn(3, 2, |i, j| if i == 2 && j == 1 { f64::NAN } else { 1.0 });
        let err = ModelSelectionData::new(y, x, ["a", "b"]).unwrap_err();
        assert_eq!(
            err,
            DataError::NonFinite {
                column: "b".to_string(),
                row: 2
            }
        );
    }

    #[test]
    fn test_from_columns() {
        let y = Col::from_fn(3, |i| i as f64);
        let data = ModelSelectionData::from_columns(
            y,
            vec![
                ("x1", Col::from_fn(3, |i| i as f64 * 2.0)),
                ("x2", Col::from_fn(3, |i| 1.0 - i as f64)),
            ],
        )
        .unwrap();

        assert_eq!(data.n_predictors(), 2);
        assert_eq!(data.n_observations(), 3);
        assert_eq!(data.predictors()[(2, 0)], 4.0);
        assert_eq!(data.index_of("x2"), Some(1));
    }
}
