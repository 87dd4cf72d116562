//! Model quality metrics (AIC, SBC, SBIC, Mallows' Cp).
//!
//! These score a candidate fit against the full model the selection started
//! from. SBIC and Cp need the full model's residual mean square; AIC and SBC
//! only need the candidate fit.

mod criteria;

pub use criteria::{aic, mallows_cp, sbc, sbic, ModelQuality};
