use crate::error::EngineError;
use crate::state::PortfolioState;
use configuration::StrategyConfig;
use core_types::{PortfolioPath, RebalancePolicy, ReturnObservation};

/// The portfolio compounding engine.
///
/// One compounding primitive, [`Simulator::run`], parameterized by a
/// [`RebalancePolicy`]; the drifting and rebalanced entry points are thin
/// wrappers over it so the two can never diverge.
#[derive(Debug, Clone)]
pub struct Simulator {
    config: StrategyConfig,
}

impl Simulator {
    pub fn new(config: StrategyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StrategyConfig {
        &self.config
    }

    /// Simulates the portfolio over the full return series.
    ///
    /// Strictly sequential: each period's sleeve values compound on the
    /// prior period's. At every policy boundary the combined value is
    /// redistributed to the target weights before the period is recorded.
    /// The output has exactly one record per input observation.
    pub fn run(
        &self,
        returns: &[ReturnObservation],
        policy: RebalancePolicy,
    ) -> Result<PortfolioPath, EngineError> {
        if returns.is_empty() {
            return Err(EngineError::EmptyInput);
        }
        if policy == RebalancePolicy::EveryPeriods(0) {
            return Err(EngineError::Configuration(
                "rebalance frequency must be a positive period count".to_string(),
            ));
        }

        let mut state = PortfolioState::new(&self.config);
        let mut records = Vec::with_capacity(returns.len());

        for (i, observation) in returns.iter().enumerate() {
            let previous_total = state.total_value();
            let (r_hedged, r_unhedged) = state.advance(observation.value, &self.config);

            // Periods are counted from 1; boundary periods are recorded
            // post-rebalance.
            if policy.is_boundary(i + 1) {
                state.rebalance(&self.config);
            }

            records.push(state.snapshot(
                observation.date,
                observation.value,
                r_hedged,
                r_unhedged,
                previous_total,
            ));
        }

        Ok(PortfolioPath::new(records))
    }

    /// Buy-and-hold simulation: sleeve weights drift and are never reset.
    pub fn run_path(&self, returns: &[ReturnObservation]) -> Result<PortfolioPath, EngineError> {
        self.run(returns, RebalancePolicy::Never)
    }

    /// Simulation with the target weights re-established every
    /// `rebalance_frequency` periods.
    pub fn run_path_with_rebalancing(
        &self,
        returns: &[ReturnObservation],
        rebalance_frequency: u32,
    ) -> Result<PortfolioPath, EngineError> {
        self.run(returns, RebalancePolicy::EveryPeriods(rebalance_frequency))
    }
}
