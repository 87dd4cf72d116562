//! Forward stepwise variable selection for OLS models.
//!
//! - [`ReferenceModel`]: the full model whose predictors form the candidate pool
//! - [`ForwardSelector`]: the selection loop and entry rule
//! - [`RegressionFitter`]: the fitting seam, implemented by [`OlsFitter`]
//! - [`Reporter`]: progress and per-step detail output
//! - [`SelectionResult`]: selected predictors and per-step metrics
//!
//! # Example
//!
//! ```rust,ignore
//! use stepwise_ols::selection::{ols_step_forward, ReferenceModel};
//!
//! let model = ReferenceModel::fit(data)?;
//! let result = ols_step_forward(&model, 0.3, false)?;
//! println!("{result}");
//! ```

mod error;
mod fitter;
mod forward;
mod reference;
mod report;
mod result;

pub use error::SelectionError;
pub use fitter::{OlsFitter, RegressionFitter};
pub use forward::{
    ols_step_forward, strongest, CandidateScore, ForwardSelector, ForwardSelectorBuilder,
};
pub use reference::{ReferenceModel, MIN_CANDIDATES};
pub use report::{LogReporter, NullReporter, Reporter, StepDetail};
pub use result::{SelectionResult, StepMetric, StepRecord};
