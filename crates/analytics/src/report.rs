use serde::{Deserialize, Serialize};

/// A standardized report of a value series' performance.
///
/// This struct is the final output of the `AnalyticsEngine` and is computed
/// independently and identically for the portfolio, the benchmark, and each
/// sleeve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    /// The last value of the series.
    pub final_value: f64,
    /// `final / initial - 1` over the full series.
    pub total_return: f64,
    /// Compound annual growth rate.
    pub cagr: f64,
    /// Annualized sample standard deviation of period returns.
    pub volatility: f64,
    /// Largest peak-to-trough decline; always <= 0.
    pub max_drawdown: f64,
    /// Annualized mean / stdev of period returns. Exactly 0 when the
    /// return volatility is zero (a deliberate policy, never NaN).
    pub sharpe_ratio: f64,
    /// Option<> because a series with no down periods has no downside
    /// deviation to divide by.
    pub sortino_ratio: Option<f64>,
    /// Option<> because a series with no drawdown has nothing to divide by.
    pub calmar_ratio: Option<f64>,
}
