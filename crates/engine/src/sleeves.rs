//! The two sleeve return transformers.
//!
//! Both are pure functions of a single period's index return and the
//! strategy parameters; no state survives between calls.
//!
//! Boundary convention for the hedged sleeve, pinned by the tests below:
//! the crash floor triggers only when the return is *strictly* below the
//! crash threshold, and `r == 0` takes the down-beta branch.

use configuration::StrategyConfig;

/// Maps one period's index return to the hedged sleeve's return.
///
/// - crash (`r < crash_threshold`): the flat `crash_floor_return`, with no
///   hedge-cost drag in this branch; the protection is absolute.
/// - down market (`crash_threshold <= r <= 0`): `hedged_down_beta * r`
///   minus the per-period hedge cost.
/// - up market (`r > 0`): `hedged_up_beta * r` minus the per-period
///   hedge cost.
pub fn hedged_return(r_index: f64, config: &StrategyConfig) -> f64 {
    if r_index < config.crash_threshold {
        config.crash_floor_return
    } else if r_index <= 0.0 {
        config.hedged_down_beta * r_index - config.period_hedge_cost()
    } else {
        config.hedged_up_beta * r_index - config.period_hedge_cost()
    }
}

/// Maps one period's index return to the unhedged sleeve's return:
/// plain leveraged exposure, `unhedged_leverage * r`, in every regime.
pub fn unhedged_return(r_index: f64, config: &StrategyConfig) -> f64 {
    config.unhedged_leverage * r_index
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn config() -> StrategyConfig {
        StrategyConfig::default()
    }

    #[test]
    fn up_market_applies_up_beta_minus_cost() {
        let cfg = config();
        let cost = cfg.period_hedge_cost();
        for r in [0.001, 0.05, 0.10, 0.42] {
            assert_relative_eq!(hedged_return(r, &cfg), 1.3 * r - cost, max_relative = 1e-12);
        }
    }

    #[test]
    fn down_market_applies_down_beta_minus_cost() {
        let cfg = config();
        let cost = cfg.period_hedge_cost();
        for r in [-0.30, -0.15, -0.001] {
            assert_relative_eq!(hedged_return(r, &cfg), 0.9 * r - cost, max_relative = 1e-12);
        }
    }

    #[test]
    fn crash_floor_is_flat_below_threshold() {
        let cfg = config();
        for r in [-0.300001, -0.35, -0.60, -0.99, -1.5] {
            assert_eq!(hedged_return(r, &cfg), -0.30);
        }
    }

    #[test]
    fn zero_return_takes_the_down_branch() {
        // At exactly r = 0 the down-beta branch applies, so the sleeve
        // still pays the hedge cost.
        let cfg = config();
        assert_eq!(hedged_return(0.0, &cfg), -cfg.period_hedge_cost());
    }

    #[test]
    fn threshold_return_is_not_a_crash() {
        // Crash requires strictly worse than the threshold; at exactly
        // -30% the down-beta branch (with cost drag) applies.
        let cfg = config();
        let expected = 0.9 * -0.30 - cfg.period_hedge_cost();
        assert_relative_eq!(hedged_return(-0.30, &cfg), expected, max_relative = 1e-12);
    }

    #[test]
    fn unhedged_is_pure_leverage_with_no_cost() {
        let cfg = config();
        for r in [-0.455, -0.35, -0.05, 0.0, 0.05, 0.25] {
            assert_eq!(unhedged_return(r, &cfg), 1.3 * r);
        }
    }
}
