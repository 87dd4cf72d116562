//! Core types for regression analysis and model selection.

mod data;
mod options;
mod result;

pub use data::{DataError, ModelSelectionData};
pub use options::{
    OptionsError, RegressionOptions, RegressionOptionsBuilder, SelectionOptions,
    SelectionOptionsBuilder, DEFAULT_PENTER,
};
pub use result::RegressionResult;
