//! # Forward Stepwise Selection
//!
//! Forward selection grows an OLS model one predictor at a time, starting
//! from the candidate with the most significant simple regression and then
//! admitting whichever remaining candidate is most significant given the
//! current model, until none reaches the entry level `penter`.
//!
//! ## When to Use
//! - Many candidate predictors, few of which matter
//! - Exploratory screening before a confirmatory fit
//! - Comparing models along a nested sequence (R², Cp, AIC, SBC)
//!
//! ## Key Features
//! - Entry test on coefficient t-statistics with `n - 2` degrees of freedom
//! - Per-step R², adjusted R², Mallows' Cp, AIC, SBC, SBIC and RMSE
//! - Pluggable progress reporting
//!
//! Run with: `cargo run --example forward_selection`

use faer::{Col, Mat};
use stepwise_ols::prelude::*;

fn main() {
    println!("=== Forward Stepwise Selection ===\n");

    let model = build_model();

    default_selection(&model);
    detailed_selection(&model);
    strict_selection(&model);
    metric_series(&model);
}

/// Six candidates; only x1, x3 and x4 drive the response.
fn build_model() -> ReferenceModel {
    let n = 40;
    let x = Mat::from_fn(n, 6, |i, j| {
        let t = i as f64 + 1.0;
        ((t * (j as f64 + 1.3)).sin() + 0.3 * (t * 0.17 * (j as f64 + 2.0)).cos()) * 2.0
    });
    let y = Col::from_fn(n, |i| {
        let noise = ((i as f64) * 2.71).sin() * 0.6;
        4.0 + 1.8 * x[(i, 0)] - 1.1 * x[(i, 2)] + 0.6 * x[(i, 3)] + noise
    });

    let data = ModelSelectionData::new(y, x, ["x1", "x2", "x3", "x4", "x5", "x6"])
        .expect("data should be valid");
    ReferenceModel::fit(data).expect("full model should fit")
}

/// Default entry level (penter = 0.3)
fn default_selection(model: &ReferenceModel) {
    println!("--- Default Entry Level ---\n");

    let result = ForwardSelector::new(SelectionOptions::default())
        .select_with_reporter(model, &mut NullReporter)
        .expect("selection should succeed");

    println!("penter = {}, t_enter = {:.4}", result.penter(), result.t_enter());
    println!("Selected: {:?}", result.predictors());
    println!("Not selected: {:?}\n", result.remaining());
    println!("{result}");
}

/// Prints progress and per-step fits to stdout.
struct StdoutReporter;

impl Reporter for StdoutReporter {
    fn log_progress(&mut self, message: &str) {
        println!("{message}");
    }

    fn print_step_detail(&mut self, detail: &StepDetail<'_>) {
        println!();
        println!("{detail}");
    }
}

/// Step-by-step detail
fn detailed_selection(model: &ReferenceModel) {
    println!("--- Step Details (penter = 0.1) ---\n");

    let selector = ForwardSelector::builder()
        .penter(0.1)
        .details(true)
        .build()
        .expect("penter should be valid");
    let result = selector
        .select_with_reporter(model, &mut StdoutReporter)
        .expect("selection should succeed");

    println!("Steps taken: {}\n", result.steps());
}

/// A strict entry level admits little beyond the unconditional first step
fn strict_selection(model: &ReferenceModel) {
    println!("--- Strict Entry Level (penter = 1e-6) ---\n");

    let result = ForwardSelector::builder()
        .penter(1e-6)
        .build()
        .expect("penter should be valid")
        .select_with_reporter(model, &mut StdoutReporter)
        .expect("selection should succeed");

    println!("\nSelected: {:?}\n", result.predictors());
}

/// The per-step series behind the trend charts
fn metric_series(model: &ReferenceModel) {
    println!("--- Metric Series ---\n");

    let result = ForwardSelector::new(SelectionOptions::default())
        .select_with_reporter(model, &mut NullReporter)
        .expect("selection should succeed");

    for metric in StepMetric::PLOTTED {
        let values: Vec<String> = result
            .series(metric)
            .iter()
            .map(|v| format!("{v:.4}"))
            .collect();
        println!("{:<14} {}", metric.label(), values.join("  "));
    }

    let full = ModelQuality::evaluate(model.result(), model.result());
    println!("\nFull model: Cp = {:.4}, AIC = {:.4}", full.mallows_cp, full.aic);
}
