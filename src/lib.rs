//! Forward stepwise variable selection for ordinary least squares regression.
//!
//! Starting from a full OLS model over a set of candidate predictors, the
//! selector builds a reduced model one step at a time, admitting the candidate
//! whose coefficient is most significant until no remaining candidate passes
//! the entry level `penter`. Every accepted step records R², adjusted R²,
//! AIC, SBC, SBIC, Mallows' Cp and RMSE of the cumulative model.
//!
//! # Example
//!
//! ```rust,ignore
//! use stepwise_ols::prelude::*;
//! use faer::{Col, Mat};
//!
//! let data = ModelSelectionData::new(y, x, ["a", "b", "c"])?;
//! let model = ReferenceModel::fit(data)?;
//!
//! let result = ForwardSelector::builder()
//!     .penter(0.3)
//!     .details(true)
//!     .build()?
//!     .select(&model)?;
//!
//! println!("{result}");
//! for metric in StepMetric::PLOTTED {
//!     println!("{}: {:?}", metric.label(), result.series(metric));
//! }
//! ```

pub mod core;
pub mod inference;
pub mod metrics;
pub mod selection;
pub mod solvers;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        DataError, ModelSelectionData, OptionsError, RegressionOptions, RegressionResult,
        SelectionOptions,
    };
    pub use crate::metrics::ModelQuality;
    pub use crate::selection::{
        ols_step_forward, ForwardSelector, LogReporter, NullReporter, OlsFitter, ReferenceModel,
        RegressionFitter, Reporter, SelectionError, SelectionResult, StepDetail, StepMetric,
        StepRecord,
    };
    pub use crate::solvers::{FittedRegressor, OlsRegressor, RegressionError, Regressor};
}

pub use crate::core::{ModelSelectionData, RegressionResult, SelectionOptions};
pub use crate::selection::{
    ols_step_forward, ForwardSelector, ReferenceModel, SelectionError, SelectionResult,
};
