//! Step records and the aggregate selection result.

use std::fmt;

/// Metrics of the cumulative model after one accepted step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepRecord {
    /// 1-based step index.
    pub step: usize,
    /// Predictor(s) entered at this step; more than one on exact ties.
    pub entered: Vec<String>,
    pub r_squared: f64,
    pub adj_r_squared: f64,
    pub aic: f64,
    pub sbc: f64,
    pub sbic: f64,
    pub mallows_cp: f64,
    pub rmse: f64,
}

/// A per-step metric series of a [`SelectionResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepMetric {
    RSquare,
    AdjRSquare,
    MallowsCp,
    Aic,
    Sbic,
    Sbc,
    Rmse,
}

impl StepMetric {
    /// The six series drawn as per-step trend charts, in panel order.
    pub const PLOTTED: [StepMetric; 6] = [
        StepMetric::RSquare,
        StepMetric::AdjRSquare,
        StepMetric::MallowsCp,
        StepMetric::Aic,
        StepMetric::Sbic,
        StepMetric::Sbc,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            StepMetric::RSquare => "R-Square",
            StepMetric::AdjRSquare => "Adj. R-Square",
            StepMetric::MallowsCp => "C(p)",
            StepMetric::Aic => "AIC",
            StepMetric::Sbic => "SBIC",
            StepMetric::Sbc => "SBC",
            StepMetric::Rmse => "RMSE",
        }
    }

    fn of(self, record: &StepRecord) -> f64 {
        match self {
            StepMetric::RSquare => record.r_squared,
            StepMetric::AdjRSquare => record.adj_r_squared,
            StepMetric::MallowsCp => record.mallows_cp,
            StepMetric::Aic => record.aic,
            StepMetric::Sbic => record.sbic,
            StepMetric::Sbc => record.sbc,
            StepMetric::Rmse => record.rmse,
        }
    }
}

/// Outcome of a forward selection run.
///
/// The metric sequences are parallel: entry `k` of each belongs to step
/// `k + 1`, and all have length [`SelectionResult::steps`].
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionResult {
    predictors: Vec<String>,
    indvar: Vec<String>,
    records: Vec<StepRecord>,
    rsquare: Vec<f64>,
    adjr: Vec<f64>,
    aic: Vec<f64>,
    sbc: Vec<f64>,
    sbic: Vec<f64>,
    mallows_cp: Vec<f64>,
    rmse: Vec<f64>,
    penter: f64,
    t_enter: f64,
}

impl SelectionResult {
    /// Assemble a result from the accepted step records.
    ///
    /// The selected predictors are the concatenation of every record's
    /// entered names, in step order.
    pub(crate) fn new(
        indvar: Vec<String>,
        records: Vec<StepRecord>,
        penter: f64,
        t_enter: f64,
    ) -> Self {
        let predictors = records
            .iter()
            .flat_map(|r| r.entered.iter().cloned())
            .collect();
        let series = |metric: StepMetric| -> Vec<f64> {
            records.iter().map(|r| metric.of(r)).collect()
        };

        Self {
            predictors,
            indvar,
            rsquare: series(StepMetric::RSquare),
            adjr: series(StepMetric::AdjRSquare),
            aic: series(StepMetric::Aic),
            sbc: series(StepMetric::Sbc),
            sbic: series(StepMetric::Sbic),
            mallows_cp: series(StepMetric::MallowsCp),
            rmse: series(StepMetric::Rmse),
            records,
            penter,
            t_enter,
        }
    }

    /// Number of accepted steps.
    pub fn steps(&self) -> usize {
        self.records.len()
    }

    /// Selected predictors in admission order.
    pub fn predictors(&self) -> &[String] {
        &self.predictors
    }

    /// The full candidate set as originally given.
    pub fn indvar(&self) -> &[String] {
        &self.indvar
    }

    /// Candidates that were never admitted, in their original order.
    pub fn remaining(&self) -> Vec<&str> {
        self.indvar
            .iter()
            .filter(|name| !self.predictors.contains(name))
            .map(String::as_str)
            .collect()
    }

    /// One record per accepted step.
    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    /// Entry significance level the run used.
    pub fn penter(&self) -> f64 {
        self.penter
    }

    /// Two-tailed critical |t| a candidate had to reach to enter after step 1.
    pub fn t_enter(&self) -> f64 {
        self.t_enter
    }

    /// The per-step values of one metric.
    pub fn series(&self, metric: StepMetric) -> &[f64] {
        match metric {
            StepMetric::RSquare => &self.rsquare,
            StepMetric::AdjRSquare => &self.adjr,
            StepMetric::MallowsCp => &self.mallows_cp,
            StepMetric::Aic => &self.aic,
            StepMetric::Sbic => &self.sbic,
            StepMetric::Sbc => &self.sbc,
            StepMetric::Rmse => &self.rmse,
        }
    }

    pub fn rsquare(&self) -> &[f64] {
        &self.rsquare
    }

    pub fn adjr(&self) -> &[f64] {
        &self.adjr
    }

    pub fn aic(&self) -> &[f64] {
        &self.aic
    }

    pub fn sbc(&self) -> &[f64] {
        &self.sbc
    }

    pub fn sbic(&self) -> &[f64] {
        &self.sbic
    }

    pub fn mallows_cp(&self) -> &[f64] {
        &self.mallows_cp
    }

    pub fn rmse(&self) -> &[f64] {
        &self.rmse
    }
}

impl fmt::Display for SelectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.records.is_empty() {
            return writeln!(f, "No variables have been added to the model.");
        }

        let rule = "-".repeat(86);
        writeln!(f, "{:^86}", "Selection Summary")?;
        writeln!(f, "{rule}")?;
        writeln!(
            f,
            "{:<6}{:<18}{:>10}{:>10}{:>12}{:>14}{:>14}{:>10}",
            "", "Variable", "", "Adj.", "", "", "", ""
        )?;
        writeln!(
            f,
            "{:<6}{:<18}{:>10}{:>10}{:>12}{:>14}{:>14}{:>10}",
            "Step", "Entered", "R-Square", "R-Square", "C(p)", "AIC", "SBC", "RMSE"
        )?;
        writeln!(f, "{rule}")?;

        for record in &self.records {
            writeln!(
                f,
                "{:<6}{:<18}{:>10.4}{:>10.4}{:>12.4}{:>14.4}{:>14.4}{:>10.4}",
                record.step,
                record.entered.join(", "),
                record.r_squared,
                record.adj_r_squared,
                record.mallows_cp,
                record.aic,
                record.sbc,
                record.rmse
            )?;
        }

        writeln!(f, "{rule}")
    }
}
