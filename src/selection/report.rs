//! Progress and per-step reporting for stepwise selection.

use crate::core::RegressionResult;
use std::fmt;

/// A fit accepted by the selector, as handed to a [`Reporter`].
#[derive(Debug, Clone, Copy)]
pub struct StepDetail<'a> {
    /// 1-based step index.
    pub step: usize,
    /// Names entered at this step (more than one on ties).
    pub entered: &'a [String],
    /// Every selected name so far, in coefficient order.
    pub predictors: &'a [String],
    /// The cumulative fit after this step.
    pub fit: &'a RegressionResult,
}

/// Receives progress notices and step details from a selection run.
///
/// Reporting is purely observational: nothing a reporter does can change
/// which predictors enter.
pub trait Reporter {
    /// An informational progress notice.
    fn log_progress(&mut self, message: &str);

    /// The cumulative fit after an accepted step. Only called when the
    /// selection runs with `details` enabled.
    fn print_step_detail(&mut self, detail: &StepDetail<'_>);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn log_progress(&mut self, message: &str) {
        (**self).log_progress(message);
    }

    fn print_step_detail(&mut self, detail: &StepDetail<'_>) {
        (**self).print_step_detail(detail);
    }
}

/// Reporter that writes through the `log` facade at `info` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn log_progress(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn print_step_detail(&mut self, detail: &StepDetail<'_>) {
        log::info!("\n{detail}");
    }
}

/// Reporter that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn log_progress(&mut self, _message: &str) {}

    fn print_step_detail(&mut self, _detail: &StepDetail<'_>) {}
}

/// Renders the step's cumulative fit as a fit-statistics block followed by a
/// coefficient table.
impl fmt::Display for StepDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fit = self.fit;
        let rule = "-".repeat(72);

        writeln!(
            f,
            "Step {} => Variable(s) entered: {}",
            self.step,
            self.entered.join(", ")
        )?;
        writeln!(f, "{rule}")?;
        writeln!(
            f,
            "R-Squared: {:>10.4}    Adj. R-Squared: {:>10.4}    RMSE: {:>10.4}",
            fit.r_squared, fit.adj_r_squared, fit.rmse
        )?;
        writeln!(
            f,
            "F: {:>10.4} on {} and {} DF, p-value: {:.4}",
            fit.f_statistic,
            fit.model_df(),
            fit.residual_df(),
            fit.f_pvalue
        )?;
        writeln!(f, "{rule}")?;
        writeln!(
            f,
            "{:<14}{:>12}{:>12}{:>10}{:>10}{:>12}",
            "Term", "Estimate", "Std. Error", "t", "Pr(>|t|)", ""
        )?;
        writeln!(
            f,
            "{:<14}{:>12.4}{:>12.4}{:>10.3}{:>10.4}",
            "(Intercept)",
            fit.intercept,
            fit.intercept_std_error.unwrap_or(f64::NAN),
            fit.intercept_t_statistic.unwrap_or(f64::NAN),
            fit.intercept_p_value.unwrap_or(f64::NAN),
        )?;

        for (j, name) in self.predictors.iter().enumerate() {
            let se = fit.std_errors.as_ref().map_or(f64::NAN, |s| s[j]);
            let (t, p) = fit.coefficient_test(j).unwrap_or((f64::NAN, f64::NAN));
            writeln!(
                f,
                "{:<14}{:>12.4}{:>12.4}{:>10.3}{:>10.4}{:>12}",
                name,
                fit.coefficients[j],
                se,
                t,
                p,
                significance_stars(p)
            )?;
        }

        Ok(())
    }
}

/// R-style significance codes.
fn significance_stars(p: f64) -> &'static str {
    match p {
        p if p < 0.001 => "***",
        p if p < 0.01 => "**",
        p if p < 0.05 => "*",
        p if p < 0.1 => ".",
        _ => "",
    }
}
