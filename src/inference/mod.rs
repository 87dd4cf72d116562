//! Statistical inference (standard errors, p-values, critical values).

mod coefficient;

pub use coefficient::CoefficientInference;
