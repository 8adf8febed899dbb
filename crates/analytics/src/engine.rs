use crate::error::AnalyticsError;
use crate::report::PerformanceReport;

/// A stateless calculator for deriving performance metrics from a
/// chronologically-ordered value series.
///
/// Every method is a pure function of its inputs; no state is shared
/// between the portfolio and benchmark computations.
#[derive(Debug, Default)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point: computes the full report for one value series.
    ///
    /// Period returns are derived from adjacent value ratios; the series
    /// itself is the source of truth for CAGR and drawdown.
    pub fn calculate(
        &self,
        values: &[f64],
        periods_per_year: u32,
    ) -> Result<PerformanceReport, AnalyticsError> {
        if values.is_empty() {
            return Err(AnalyticsError::InvalidInput(
                "value series is empty".to_string(),
            ));
        }

        let returns = period_returns(values);

        let cagr = self.cagr(values, periods_per_year)?;
        let max_drawdown = self.max_drawdown(values)?;
        let initial = values[0];
        let final_value = values[values.len() - 1];

        Ok(PerformanceReport {
            final_value,
            total_return: final_value / initial - 1.0,
            cagr,
            volatility: self.volatility(&returns, periods_per_year),
            max_drawdown,
            sharpe_ratio: self.sharpe_ratio(&returns, periods_per_year),
            sortino_ratio: self.sortino_ratio(&returns, periods_per_year),
            calmar_ratio: self.calmar_ratio(cagr, max_drawdown),
        })
    }

    /// Compound annual growth rate:
    /// `(final / initial)^(periods_per_year / n) - 1`.
    ///
    /// A non-positive start or end value makes the fractional power
    /// undefined, so both are rejected, as is an empty series.
    pub fn cagr(&self, values: &[f64], periods_per_year: u32) -> Result<f64, AnalyticsError> {
        let n = values.len();
        if n == 0 {
            return Err(AnalyticsError::InvalidInput(
                "CAGR needs at least one period".to_string(),
            ));
        }
        let initial = values[0];
        let final_value = values[n - 1];
        if initial <= 0.0 || final_value <= 0.0 {
            return Err(AnalyticsError::InvalidInput(format!(
                "CAGR needs positive start and end values, got {initial} and {final_value}"
            )));
        }

        let years = n as f64 / periods_per_year as f64;
        Ok((final_value / initial).powf(1.0 / years) - 1.0)
    }

    /// Maximum drawdown: the minimum over all periods of
    /// `value / running_peak - 1`. Always <= 0; exactly 0 for a
    /// non-decreasing series, including a series of length 1.
    pub fn max_drawdown(&self, values: &[f64]) -> Result<f64, AnalyticsError> {
        if values.is_empty() {
            return Err(AnalyticsError::InvalidInput(
                "drawdown needs at least one period".to_string(),
            ));
        }

        let mut peak = values[0];
        let mut max_drawdown = 0.0_f64;
        for &value in values {
            if value > peak {
                peak = value;
            }
            // A non-positive peak means the series never had a positive
            // value to draw down from; skip rather than divide by zero.
            if peak > 0.0 {
                max_drawdown = max_drawdown.min(value / peak - 1.0);
            }
        }

        Ok(max_drawdown)
    }

    /// Annualized Sharpe ratio over PERIOD RETURNS:
    /// `mean / stdev * sqrt(periods_per_year)`, with the sample standard
    /// deviation (N-1).
    ///
    /// Zero volatility (constant returns, or fewer than two returns) yields
    /// exactly 0.0 rather than NaN or infinity; callers rely on this.
    pub fn sharpe_ratio(&self, returns: &[f64], periods_per_year: u32) -> f64 {
        let stdev = sample_stdev(returns);
        if stdev == 0.0 {
            return 0.0;
        }
        mean(returns) / stdev * (periods_per_year as f64).sqrt()
    }

    /// Annualized sample standard deviation of period returns.
    pub fn volatility(&self, returns: &[f64], periods_per_year: u32) -> f64 {
        sample_stdev(returns) * (periods_per_year as f64).sqrt()
    }

    /// Annualized Sortino ratio: mean return over the root-mean-square of
    /// the negative returns. `None` when the series has no down periods.
    pub fn sortino_ratio(&self, returns: &[f64], periods_per_year: u32) -> Option<f64> {
        let downside: Vec<f64> = returns.iter().copied().filter(|r| *r < 0.0).collect();
        if downside.is_empty() {
            return None;
        }
        let downside_rms =
            (downside.iter().map(|r| r * r).sum::<f64>() / downside.len() as f64).sqrt();
        if downside_rms == 0.0 {
            return None;
        }
        Some(mean(returns) / downside_rms * (periods_per_year as f64).sqrt())
    }

    /// Calmar ratio: CAGR over the magnitude of the max drawdown. `None`
    /// when there was no drawdown to divide by.
    pub fn calmar_ratio(&self, cagr: f64, max_drawdown: f64) -> Option<f64> {
        if max_drawdown >= 0.0 {
            return None;
        }
        Some(cagr / max_drawdown.abs())
    }
}

/// Derives per-period returns from adjacent values. A non-positive prior
/// value has no meaningful ratio and contributes a 0 return.
fn period_returns(values: &[f64]) -> Vec<f64> {
    values
        .windows(2)
        .map(|w| if w[0] > 0.0 { w[1] / w[0] - 1.0 } else { 0.0 })
        .collect()
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (N-1 denominator, an explicit convention
/// choice). 0.0 for fewer than two values.
fn sample_stdev(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let mu = mean(values);
    let variance = values.iter().map(|v| (v - mu) * (v - mu)).sum::<f64>() / (n - 1) as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn engine() -> AnalyticsEngine {
        AnalyticsEngine::new()
    }

    #[test]
    fn cagr_of_a_doubling_year_is_exactly_one() {
        // A 12-entry monthly series that doubles: (2)^(12/12) - 1 = 1.0.
        let values = [
            100.0, 104.0, 111.0, 118.0, 124.0, 131.0, 140.0, 152.0, 165.0, 178.0, 190.0, 200.0,
        ];
        let cagr = engine().cagr(&values, 12).unwrap();
        assert_eq!(cagr, 1.0);
    }

    #[test]
    fn cagr_rejects_non_positive_values() {
        let e = engine();
        assert!(e.cagr(&[-100.0, 50.0], 12).is_err());
        assert!(e.cagr(&[100.0, 0.0], 12).is_err());
        assert!(e.cagr(&[], 12).is_err());
    }

    #[test]
    fn cagr_annualizes_with_periods_per_year() {
        // 6 monthly periods ending at 2x: (2)^(12/6) - 1 = 3.0.
        let values = [100.0, 110.0, 120.0, 140.0, 170.0, 200.0];
        let cagr = engine().cagr(&values, 12).unwrap();
        assert_relative_eq!(cagr, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn max_drawdown_is_zero_for_non_decreasing_series() {
        let e = engine();
        assert_eq!(e.max_drawdown(&[100.0]).unwrap(), 0.0);
        assert_eq!(e.max_drawdown(&[100.0, 100.0, 150.0, 150.0]).unwrap(), 0.0);
    }

    #[test]
    fn max_drawdown_finds_the_worst_peak_to_trough() {
        let values = [100.0, 120.0, 90.0, 105.0, 60.0, 80.0];
        let dd = engine().max_drawdown(&values).unwrap();
        assert_relative_eq!(dd, 60.0 / 120.0 - 1.0, max_relative = 1e-12);
        assert!(dd <= 0.0);
    }

    #[test]
    fn sharpe_is_exactly_zero_for_constant_returns() {
        let e = engine();
        assert_eq!(e.sharpe_ratio(&[0.01; 24], 12), 0.0);
        assert_eq!(e.sharpe_ratio(&[0.01], 12), 0.0);
        assert_eq!(e.sharpe_ratio(&[], 12), 0.0);
    }

    #[test]
    fn sharpe_uses_sample_stdev_and_annualizes() {
        let returns = [0.02, -0.01, 0.03, 0.00];
        let mu = 0.01;
        // Sample variance with N-1 = 3.
        let var = (0.01f64.powi(2) + 0.02f64.powi(2) + 0.02f64.powi(2) + 0.01f64.powi(2)) / 3.0;
        let expected = mu / var.sqrt() * 12f64.sqrt();
        assert_relative_eq!(
            engine().sharpe_ratio(&returns, 12),
            expected,
            max_relative = 1e-12
        );
    }

    #[test]
    fn sortino_is_none_without_down_periods() {
        assert_eq!(engine().sortino_ratio(&[0.01, 0.02, 0.0], 12), None);
    }

    #[test]
    fn calmar_is_none_without_drawdown() {
        let e = engine();
        assert_eq!(e.calmar_ratio(0.10, 0.0), None);
        assert_relative_eq!(e.calmar_ratio(0.10, -0.25).unwrap(), 0.4);
    }

    #[test]
    fn calculate_aggregates_all_metrics() {
        let values = [100.0, 105.0, 99.0, 110.0, 108.0];
        let report = engine().calculate(&values, 12).unwrap();

        assert_relative_eq!(report.final_value, 108.0);
        assert_relative_eq!(report.total_return, 0.08, max_relative = 1e-12);
        assert!(report.max_drawdown < 0.0);
        assert!(report.sharpe_ratio != 0.0);
        assert!(report.sortino_ratio.is_some());
        assert!(report.calmar_ratio.is_some());
    }

    #[test]
    fn calculate_rejects_empty_series() {
        assert!(matches!(
            engine().calculate(&[], 12),
            Err(AnalyticsError::InvalidInput(_))
        ));
    }
}
