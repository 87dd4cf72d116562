//! Forward stepwise selection driven by coefficient p-values.
//!
//! The first step admits the candidate whose simple regression has the
//! largest |t| (smallest p-value) unconditionally. Every later step refits the
//! current model plus one candidate at a time and admits the strongest
//! newcomer only if its |t| reaches the two-tailed critical value for
//! `penter` on `n - 2` degrees of freedom. Exact ties on |t| are admitted
//! together.

use crate::core::{ModelSelectionData, SelectionOptions, SelectionOptionsBuilder};
use crate::inference::CoefficientInference;
use crate::metrics::ModelQuality;
use crate::selection::{
    LogReporter, OlsFitter, ReferenceModel, RegressionFitter, Reporter, SelectionError,
    SelectionResult, StepDetail, StepRecord,
};

/// Significance of one candidate's coefficient when added to the current model.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateScore {
    pub name: String,
    pub t_value: f64,
    pub p_value: f64,
}

/// Forward stepwise selector.
///
/// # Example
///
/// ```rust,ignore
/// use stepwise_ols::prelude::*;
///
/// let model = ReferenceModel::fit(data)?;
/// let result = ForwardSelector::builder()
///     .penter(0.1)
///     .build()?
///     .select(&model)?;
///
/// println!("{result}");
/// ```
#[derive(Debug, Clone)]
pub struct ForwardSelector<F = OlsFitter> {
    options: SelectionOptions,
    fitter: F,
}

impl ForwardSelector<OlsFitter> {
    /// Create a selector that fits with [`OlsFitter`].
    pub fn new(options: SelectionOptions) -> Self {
        Self::with_fitter(options, OlsFitter::default())
    }

    /// Create a builder for configuring the selector.
    pub fn builder() -> ForwardSelectorBuilder {
        ForwardSelectorBuilder::default()
    }
}

impl Default for ForwardSelector<OlsFitter> {
    fn default() -> Self {
        Self::new(SelectionOptions::default())
    }
}

impl<F: RegressionFitter> ForwardSelector<F> {
    /// Create a selector around a custom fitter.
    pub fn with_fitter(options: SelectionOptions, fitter: F) -> Self {
        Self { options, fitter }
    }

    /// The options this selector runs with.
    pub fn options(&self) -> &SelectionOptions {
        &self.options
    }

    /// Run the selection, reporting progress through the `log` facade.
    pub fn select(&self, model: &ReferenceModel) -> Result<SelectionResult, SelectionError> {
        self.select_with_reporter(model, &mut LogReporter)
    }

    /// Run the selection, reporting progress to `reporter`.
    ///
    /// Options and model are checked before any fitting; a singular candidate
    /// fit aborts the run. So does a first step where no candidate has a
    /// finite t-statistic, as happens with a constant response. At later
    /// steps that condition ends the selection like a failed entry test.
    pub fn select_with_reporter<R: Reporter>(
        &self,
        model: &ReferenceModel,
        reporter: &mut R,
    ) -> Result<SelectionResult, SelectionError> {
        self.options.validate()?;

        let data = model.data();
        let indvar = model.candidates().to_vec();
        let n_candidates = indvar.len();
        if n_candidates < crate::selection::MIN_CANDIDATES {
            return Err(SelectionError::InsufficientPredictors { got: n_candidates });
        }

        let df = data.n_observations() as f64 - 2.0;
        let t_enter = CoefficientInference::critical_value(df, self.options.penter);
        if !t_enter.is_finite() {
            return Err(SelectionError::InvalidModel(format!(
                "{} observations leave no degrees of freedom for the entry test",
                data.n_observations()
            )));
        }

        log::debug!(
            "forward selection over {n_candidates} candidates: penter = {}, df = {df}, t_enter = {t_enter:.6}",
            self.options.penter
        );
        reporter.log_progress("Forward Selection Method");
        reporter.log_progress(&format!("Candidate Terms: {}", indvar.join(", ")));

        let mut remaining = indvar.clone();
        let mut selected: Vec<String> = Vec::with_capacity(n_candidates);
        let mut records: Vec<StepRecord> = Vec::new();

        while !remaining.is_empty() && records.len() < n_candidates {
            let step = records.len() + 1;
            let scores = self.score_candidates(data, &selected, &remaining)?;
            for score in &scores {
                log::debug!(
                    "step {step}: {} t = {:.6}, p = {:.6}",
                    score.name,
                    score.t_value,
                    score.p_value
                );
            }

            let winners = strongest(&scores);
            let Some(&first) = winners.first() else {
                if step == 1 {
                    return Err(SelectionError::UndefinedStatistics {
                        candidates: remaining,
                    });
                }
                log::debug!("step {step}: no candidate has a finite t-statistic");
                break;
            };

            // The first step is unconditional.
            let best = scores[first].t_value.abs();
            if step > 1 && best < t_enter {
                log::debug!("step {step}: max |t| = {best:.6} is below t_enter = {t_enter:.6}");
                break;
            }

            let entered: Vec<String> = winners.iter().map(|&i| scores[i].name.clone()).collect();
            remaining.retain(|name| !entered.contains(name));
            selected.extend(entered.iter().cloned());

            let fit = self
                .fitter
                .fit(data.response(), &data.design(&selected)?, &selected)?;
            let quality = ModelQuality::evaluate(&fit, model.result());

            reporter.log_progress(&format!(
                "{} variable(s) added: {}",
                entered.len(),
                entered.join(", ")
            ));
            if self.options.details {
                reporter.print_step_detail(&StepDetail {
                    step,
                    entered: &entered,
                    predictors: &selected,
                    fit: &fit,
                });
            }

            records.push(StepRecord {
                step,
                entered,
                r_squared: fit.r_squared,
                adj_r_squared: fit.adj_r_squared,
                aic: quality.aic,
                sbc: quality.sbc,
                sbic: quality.sbic,
                mallows_cp: quality.mallows_cp,
                rmse: fit.rmse,
            });
        }

        if records.is_empty() {
            reporter.log_progress("No variables have been added to the model.");
        } else if !remaining.is_empty() {
            reporter.log_progress("No more variables satisfy the condition of penter.");
        } else {
            reporter.log_progress("All candidate variables have been added.");
        }

        Ok(SelectionResult::new(
            indvar,
            records,
            self.options.penter,
            t_enter,
        ))
    }

    /// Fit `selected + [candidate]` for every remaining candidate and test the
    /// candidate's coefficient.
    ///
    /// The candidate is always the last column, so its coefficient sits at
    /// position `selected.len()`. Scores come back in `remaining` order.
    pub fn score_candidates(
        &self,
        data: &ModelSelectionData,
        selected: &[String],
        remaining: &[String],
    ) -> Result<Vec<CandidateScore>, SelectionError> {
        let position = selected.len();

        remaining
            .iter()
            .map(|candidate| {
                let mut names = selected.to_vec();
                names.push(candidate.clone());

                let fit = self
                    .fitter
                    .fit(data.response(), &data.design(&names)?, &names)?;
                let (t_value, p_value) = fit
                    .coefficient_test(position)
                    .ok_or_else(|| SelectionError::SingularFit {
                        predictors: names.clone(),
                    })?;

                Ok(CandidateScore {
                    name: candidate.clone(),
                    t_value,
                    p_value,
                })
            })
            .collect()
    }
}

/// Indices of every score whose |t| equals the maximum |t|.
///
/// Comparison is exact, so only bit-identical statistics tie. Candidates
/// that tie in exact arithmetic may still differ in the last bits once fit
/// through separate QR factorizations, and then enter at separate steps.
/// Non-finite statistics never win.
pub fn strongest(scores: &[CandidateScore]) -> Vec<usize> {
    let max = scores
        .iter()
        .map(|s| s.t_value.abs())
        .filter(|t| t.is_finite())
        .fold(f64::NEG_INFINITY, f64::max);

    if !max.is_finite() {
        return Vec::new();
    }

    scores
        .iter()
        .enumerate()
        .filter(|(_, s)| s.t_value.abs() == max)
        .map(|(i, _)| i)
        .collect()
}

/// Run forward selection on `model` with the given entry level.
///
/// Shorthand for building a [`ForwardSelector`] with validated options and
/// calling [`ForwardSelector::select`].
pub fn ols_step_forward(
    model: &ReferenceModel,
    penter: f64,
    details: bool,
) -> Result<SelectionResult, SelectionError> {
    ForwardSelector::builder()
        .penter(penter)
        .details(details)
        .build()?
        .select(model)
}

/// Builder for `ForwardSelector`.
#[derive(Debug, Clone, Default)]
pub struct ForwardSelectorBuilder {
    builder: SelectionOptionsBuilder,
}

impl ForwardSelectorBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the entry significance level.
    pub fn penter(mut self, penter: f64) -> Self {
        self.builder = self.builder.penter(penter);
        self
    }

    /// Set whether per-step fit details are reported.
    pub fn details(mut self, details: bool) -> Self {
        self.builder = self.builder.details(details);
        self
    }

    /// Build the selector, validating the options.
    pub fn build(self) -> Result<ForwardSelector, SelectionError> {
        Ok(ForwardSelector::new(self.builder.build()?))
    }
}
