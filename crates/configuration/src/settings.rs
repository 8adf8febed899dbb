use crate::error::ConfigError;
use core_types::RebalancePolicy;
use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub strategy: StrategyConfig,
    pub backtest: BacktestSettings,
}

/// Contains parameters for a single backtest run.
#[derive(Debug, Clone, Deserialize)]
pub struct BacktestSettings {
    /// Path to the CSV file holding the benchmark return series.
    pub data_path: PathBuf,
    /// Directory where the time series and summary files are written.
    pub output_dir: PathBuf,
    /// Rebalance back to target weights every N periods. Omit for a pure
    /// buy-and-hold (drifting) run. Zero is rejected at validation.
    pub rebalance_frequency: Option<u32>,
}

impl BacktestSettings {
    /// The rebalance policy these settings describe.
    pub fn rebalance_policy(&self) -> RebalancePolicy {
        match self.rebalance_frequency {
            Some(n) => RebalancePolicy::EveryPeriods(n),
            None => RebalancePolicy::Never,
        }
    }
}

/// All numeric parameters of the levered hedge strategy.
///
/// Constructed once at startup and passed by reference to every component;
/// nothing mutates it after validation.
#[derive(Debug, Clone, Deserialize)]
pub struct StrategyConfig {
    /// Starting combined portfolio value.
    pub initial_capital: f64,
    /// Target capital share of the hedged sleeve, in [0, 1].
    pub hedged_weight: f64,
    /// Target capital share of the unhedged sleeve, in [0, 1].
    ///
    /// The two weights are used exactly as given; the engine never
    /// normalizes them to sum to 1.
    pub unhedged_weight: f64,
    /// Leverage multiplier applied to every index return by the unhedged sleeve.
    pub unhedged_leverage: f64,
    /// Hedged sleeve multiplier for positive index returns.
    pub hedged_up_beta: f64,
    /// Hedged sleeve multiplier for index returns in [crash_threshold, 0].
    pub hedged_down_beta: f64,
    /// Index returns strictly below this trigger the crash floor
    /// (a negative fraction, e.g. -0.30).
    pub crash_threshold: f64,
    /// The flat sleeve return delivered in a crash period.
    pub crash_floor_return: f64,
    /// Annualized hedging drag, spread evenly over the year's periods.
    pub annual_hedge_cost: f64,
    /// Return periods per year (12 for monthly). Also the annualization
    /// factor for CAGR and Sharpe.
    pub periods_per_year: u32,
}

impl StrategyConfig {
    /// The hedge cost charged in each non-crash period.
    pub fn period_hedge_cost(&self) -> f64 {
        self.annual_hedge_cost / self.periods_per_year as f64
    }

    /// Checks every parameter against its stated domain.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capital <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "initial_capital must be positive, got {}",
                self.initial_capital
            )));
        }
        if !(0.0..=1.0).contains(&self.hedged_weight) {
            return Err(ConfigError::ValidationError(format!(
                "hedged_weight must be in [0, 1], got {}",
                self.hedged_weight
            )));
        }
        if !(0.0..=1.0).contains(&self.unhedged_weight) {
            return Err(ConfigError::ValidationError(format!(
                "unhedged_weight must be in [0, 1], got {}",
                self.unhedged_weight
            )));
        }
        if self.crash_threshold >= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "crash_threshold must be a negative fraction, got {}",
                self.crash_threshold
            )));
        }
        if self.annual_hedge_cost < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "annual_hedge_cost must not be negative, got {}",
                self.annual_hedge_cost
            )));
        }
        if self.periods_per_year == 0 {
            return Err(ConfigError::ValidationError(
                "periods_per_year must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for StrategyConfig {
    /// The reference parameter set for the strategy: 70/30 split, 1.3x
    /// leverage, 1.3 up / 0.9 down beta, -30% crash floor below -30%,
    /// 3% annual hedge cost on monthly data.
    fn default() -> Self {
        Self {
            initial_capital: 100_000.0,
            hedged_weight: 0.7,
            unhedged_weight: 0.3,
            unhedged_leverage: 1.3,
            hedged_up_beta: 1.3,
            hedged_down_beta: 0.9,
            crash_threshold: -0.30,
            crash_floor_return: -0.30,
            annual_hedge_cost: 0.03,
            periods_per_year: 12,
        }
    }
}

impl Config {
    /// Validates every section of the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.strategy.validate()?;
        if self.backtest.rebalance_frequency == Some(0) {
            return Err(ConfigError::ValidationError(
                "rebalance_frequency must be a positive period count; omit it to disable rebalancing"
                    .to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(StrategyConfig::default().validate().is_ok());
    }

    #[test]
    fn period_hedge_cost_divides_annual_cost() {
        let cfg = StrategyConfig::default();
        assert!((cfg.period_hedge_cost() - 0.03 / 12.0).abs() < 1e-15);
    }

    #[test]
    fn negative_capital_is_rejected() {
        let cfg = StrategyConfig {
            initial_capital: -1.0,
            ..StrategyConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn weights_outside_unit_interval_are_rejected() {
        let cfg = StrategyConfig {
            hedged_weight: 1.2,
            ..StrategyConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn weights_need_not_sum_to_one() {
        // Partial deployment is a legal configuration; the engine uses the
        // weights exactly as given.
        let cfg = StrategyConfig {
            hedged_weight: 0.5,
            unhedged_weight: 0.3,
            ..StrategyConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn nonnegative_crash_threshold_is_rejected() {
        let cfg = StrategyConfig {
            crash_threshold: 0.0,
            ..StrategyConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rebalance_policy_maps_the_optional_frequency() {
        let mut settings = BacktestSettings {
            data_path: "data/ndx_returns_sample.csv".into(),
            output_dir: "outputs".into(),
            rebalance_frequency: None,
        };
        assert_eq!(settings.rebalance_policy(), RebalancePolicy::Never);
        settings.rebalance_frequency = Some(12);
        assert_eq!(
            settings.rebalance_policy(),
            RebalancePolicy::EveryPeriods(12)
        );
    }

    #[test]
    fn zero_rebalance_frequency_is_rejected() {
        let config = Config {
            strategy: StrategyConfig::default(),
            backtest: BacktestSettings {
                data_path: "data/ndx_returns_sample.csv".into(),
                output_dir: "outputs".into(),
                rebalance_frequency: Some(0),
            },
        };
        assert!(config.validate().is_err());
    }
}
