use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One period's benchmark index return.
///
/// The loader's contract is to deliver these chronologically sorted with
/// finite values; the engine trusts the order it is given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnObservation {
    /// Calendar date of the period end.
    pub date: NaiveDate,
    /// Periodic fractional return (0.05 = 5%).
    pub value: f64,
}

/// One fully-simulated period of the portfolio path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodRecord {
    pub date: NaiveDate,
    /// The raw benchmark return for the period.
    pub index_return: f64,
    /// The hedged sleeve's mapped return for the period.
    pub hedged_return: f64,
    /// The unhedged sleeve's mapped return for the period.
    pub unhedged_return: f64,
    /// Cumulative benchmark growth, starting from 1.0.
    pub index_value: f64,
    pub hedged_value: f64,
    pub unhedged_value: f64,
    pub total_value: f64,
    /// Current sleeve weight shares. Both are 0 when the portfolio value
    /// has collapsed to (or below) zero.
    pub hedged_weight: f64,
    pub unhedged_weight: f64,
    /// The combined portfolio's own return for the period, derived from
    /// the change in total value.
    pub portfolio_return: f64,
}

/// The immutable output of one simulation run: one record per input period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioPath {
    pub records: Vec<PeriodRecord>,
}

impl PortfolioPath {
    pub fn new(records: Vec<PeriodRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The combined portfolio value column.
    pub fn total_values(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.total_value).collect()
    }

    /// The cumulative benchmark value column (starts at 1.0 growth units).
    pub fn index_values(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.index_value).collect()
    }

    pub fn hedged_values(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.hedged_value).collect()
    }

    pub fn unhedged_values(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.unhedged_value).collect()
    }

    /// The derived per-period portfolio return column.
    pub fn portfolio_returns(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.portfolio_return).collect()
    }

    pub fn final_record(&self) -> Option<&PeriodRecord> {
        self.records.last()
    }
}
