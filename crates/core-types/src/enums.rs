use serde::{Deserialize, Serialize};

/// How the simulator treats sleeve weights over the life of a path.
///
/// Periods are counted from 1. With `EveryPeriods(n)`, the portfolio is
/// rebalanced back to its target weights immediately after compounding
/// periods n, 2n, 3n, ... (inclusive of the nth period), so the recorded
/// snapshot for a boundary period shows post-rebalance sleeve values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RebalancePolicy {
    /// Buy-and-hold: sleeve weights drift with differential compounding
    /// and are never reset.
    Never,
    /// Reset sleeve values to the configured target weights every n
    /// periods. A frequency of 0 is invalid and rejected by the engine.
    EveryPeriods(u32),
}

impl RebalancePolicy {
    /// Returns true when period `count` (1-based) is a rebalance boundary.
    pub fn is_boundary(&self, count: usize) -> bool {
        match self {
            RebalancePolicy::Never => false,
            RebalancePolicy::EveryPeriods(n) => *n > 0 && count % (*n as usize) == 0,
        }
    }
}
