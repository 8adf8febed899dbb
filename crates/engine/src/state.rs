use crate::sleeves::{hedged_return, unhedged_return};
use chrono::NaiveDate;
use configuration::StrategyConfig;
use core_types::PeriodRecord;

/// The evolving state of the two-sleeve portfolio.
///
/// Owned by the batch simulator, but public so a streaming caller can
/// advance the portfolio one period at a time with arithmetic identical
/// to the batch path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortfolioState {
    /// Cumulative benchmark growth, starting from 1.0.
    pub index_value: f64,
    pub hedged_value: f64,
    pub unhedged_value: f64,
}

impl PortfolioState {
    /// Seeds both sleeves from the initial capital and the target weights.
    pub fn new(config: &StrategyConfig) -> Self {
        Self {
            index_value: 1.0,
            hedged_value: config.initial_capital * config.hedged_weight,
            unhedged_value: config.initial_capital * config.unhedged_weight,
        }
    }

    pub fn total_value(&self) -> f64 {
        self.hedged_value + self.unhedged_value
    }

    /// Compounds one period of the given index return into both sleeves
    /// and returns the `(hedged, unhedged)` sleeve returns applied.
    pub fn advance(&mut self, r_index: f64, config: &StrategyConfig) -> (f64, f64) {
        let r_hedged = hedged_return(r_index, config);
        let r_unhedged = unhedged_return(r_index, config);

        self.index_value *= 1.0 + r_index;
        self.hedged_value *= 1.0 + r_hedged;
        self.unhedged_value *= 1.0 + r_unhedged;

        (r_hedged, r_unhedged)
    }

    /// Redistributes the combined value back to the configured target
    /// weights, discarding the drifted split. Total value is unchanged.
    pub fn rebalance(&mut self, config: &StrategyConfig) {
        let total = self.total_value();
        self.hedged_value = total * config.hedged_weight;
        self.unhedged_value = total * config.unhedged_weight;
    }

    /// Builds the period record for the current state. `previous_total` is
    /// the combined value before this period's compounding, used to derive
    /// the portfolio's own period return.
    pub fn snapshot(
        &self,
        date: NaiveDate,
        r_index: f64,
        r_hedged: f64,
        r_unhedged: f64,
        previous_total: f64,
    ) -> PeriodRecord {
        let total_value = self.total_value();
        let (hedged_weight, unhedged_weight) = if total_value > 0.0 {
            (
                self.hedged_value / total_value,
                self.unhedged_value / total_value,
            )
        } else {
            (0.0, 0.0)
        };
        let portfolio_return = if previous_total > 0.0 {
            total_value / previous_total - 1.0
        } else {
            0.0
        };

        PeriodRecord {
            date,
            index_return: r_index,
            hedged_return: r_hedged,
            unhedged_return: r_unhedged,
            index_value: self.index_value,
            hedged_value: self.hedged_value,
            unhedged_value: self.unhedged_value,
            total_value,
            hedged_weight,
            unhedged_weight,
            portfolio_return,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn new_state_splits_capital_by_target_weights() {
        let cfg = StrategyConfig::default();
        let state = PortfolioState::new(&cfg);
        assert_relative_eq!(state.hedged_value, 70_000.0);
        assert_relative_eq!(state.unhedged_value, 30_000.0);
        assert_relative_eq!(state.total_value(), 100_000.0);
    }

    #[test]
    fn advance_compounds_each_sleeve_independently() {
        let cfg = StrategyConfig::default();
        let mut state = PortfolioState::new(&cfg);
        let (r_hedged, r_unhedged) = state.advance(0.05, &cfg);

        assert_relative_eq!(state.index_value, 1.05, max_relative = 1e-12);
        assert_relative_eq!(
            state.hedged_value,
            70_000.0 * (1.0 + r_hedged),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            state.unhedged_value,
            30_000.0 * (1.0 + r_unhedged),
            max_relative = 1e-12
        );
    }

    #[test]
    fn rebalance_restores_target_split_without_changing_total() {
        let cfg = StrategyConfig::default();
        let mut state = PortfolioState::new(&cfg);
        for r in [0.08, -0.02, 0.11, -0.07] {
            state.advance(r, &cfg);
        }
        let total_before = state.total_value();

        state.rebalance(&cfg);

        assert_relative_eq!(state.total_value(), total_before, max_relative = 1e-12);
        assert_relative_eq!(
            state.hedged_value / state.total_value(),
            cfg.hedged_weight,
            epsilon = 1e-9
        );
    }

    #[test]
    fn snapshot_zeroes_weights_when_portfolio_is_wiped_out() {
        let cfg = StrategyConfig::default();
        let state = PortfolioState {
            index_value: 0.1,
            hedged_value: 0.0,
            unhedged_value: 0.0,
        };
        let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let record = state.snapshot(date, -0.9, -0.3, -1.17, 1000.0);
        assert_eq!(record.hedged_weight, 0.0);
        assert_eq!(record.unhedged_weight, 0.0);
    }
}
