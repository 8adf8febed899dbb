use analytics::{AnalyticsEngine, PerformanceReport};
use clap::{Parser, Subcommand};
use comfy_table::{Table, presets::UTF8_FULL};
use configuration::Config;
use engine::Simulator;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// The main entry point for the levered hedge backtesting application.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    match cli.command {
        Commands::Backtest(args) => {
            if let Err(e) = handle_backtest(args) {
                eprintln!("Error during backtest: {e:#}");
                std::process::exit(1);
            }
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A single-path backtester for the levered hedge portfolio strategy.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a backtest over a benchmark return series.
    Backtest(BacktestArgs),
}

#[derive(Parser)]
struct BacktestArgs {
    /// Path to the configuration file.
    #[arg(long, default_value = "config.toml")]
    config: String,

    /// Override the return series CSV configured in config.toml.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Override the output directory configured in config.toml.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Rebalance back to target weights every N periods.
    #[arg(long)]
    rebalance_every: Option<u32>,
}

// ==============================================================================
// Backtest Command Logic
// ==============================================================================

/// Handles the orchestration of a full backtest: configuration, data,
/// simulation, metrics, console summary, and persistence.
fn handle_backtest(args: BacktestArgs) -> anyhow::Result<()> {
    let mut config = configuration::load_config_from(&args.config)?;
    if let Some(data_path) = args.data {
        config.backtest.data_path = data_path;
    }
    if let Some(output_dir) = args.output {
        config.backtest.output_dir = output_dir;
    }
    if let Some(frequency) = args.rebalance_every {
        config.backtest.rebalance_frequency = Some(frequency);
    }
    // Re-validate after CLI overrides; a --rebalance-every of 0 must fail
    // here, not deep inside the engine.
    config.validate()?;

    let returns = data::load_return_series(&config.backtest.data_path)?;
    info!(
        periods = returns.len(),
        path = %config.backtest.data_path.display(),
        "loaded benchmark return series"
    );

    let policy = config.backtest.rebalance_policy();
    let simulator = Simulator::new(config.strategy.clone());
    let path = simulator.run(&returns, policy)?;

    // Score the portfolio, the raw benchmark, and each deployed sleeve
    // through the identical, independent metrics path.
    let analytics_engine = AnalyticsEngine::new();
    let periods_per_year = config.strategy.periods_per_year;
    let portfolio = analytics_engine.calculate(&path.total_values(), periods_per_year)?;
    let benchmark = analytics_engine.calculate(&path.index_values(), periods_per_year)?;
    let hedged = (config.strategy.hedged_weight > 0.0)
        .then(|| analytics_engine.calculate(&path.hedged_values(), periods_per_year))
        .transpose()?;
    let unhedged = (config.strategy.unhedged_weight > 0.0)
        .then(|| analytics_engine.calculate(&path.unhedged_values(), periods_per_year))
        .transpose()?;

    let summary = render_summary(
        &config,
        &portfolio,
        &benchmark,
        hedged.as_ref(),
        unhedged.as_ref(),
    );
    println!("{summary}");

    let output_dir = &config.backtest.output_dir;
    data::write_timeseries(&output_dir.join("portfolio_timeseries.csv"), &path)?;
    data::write_summary(&output_dir.join("summary.txt"), &summary)?;

    info!("backtest complete");
    Ok(())
}

/// Renders the console/summary-file report.
fn render_summary(
    config: &Config,
    portfolio: &PerformanceReport,
    benchmark: &PerformanceReport,
    hedged: Option<&PerformanceReport>,
    unhedged: Option<&PerformanceReport>,
) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);

    let mut header = vec!["Metric".to_string(), "Portfolio".to_string(), "Benchmark".to_string()];
    if hedged.is_some() {
        header.push("Hedged Sleeve".to_string());
    }
    if unhedged.is_some() {
        header.push("Unhedged Sleeve".to_string());
    }
    table.set_header(header);

    let row = |label: &str, f: &dyn Fn(&PerformanceReport) -> String| {
        let mut cells = vec![label.to_string(), f(portfolio), f(benchmark)];
        if let Some(report) = hedged {
            cells.push(f(report));
        }
        if let Some(report) = unhedged {
            cells.push(f(report));
        }
        cells
    };

    table.add_row(row("Final Value", &|r| format!("{:.4}", r.final_value)));
    table.add_row(row("Total Return", &|r| pct(r.total_return)));
    table.add_row(row("CAGR", &|r| pct(r.cagr)));
    table.add_row(row("Volatility", &|r| pct(r.volatility)));
    table.add_row(row("Max Drawdown", &|r| pct(r.max_drawdown)));
    table.add_row(row("Sharpe Ratio", &|r| format!("{:.2}", r.sharpe_ratio)));
    table.add_row(row("Sortino Ratio", &|r| opt_ratio(r.sortino_ratio)));
    table.add_row(row("Calmar Ratio", &|r| opt_ratio(r.calmar_ratio)));

    let strategy = &config.strategy;
    format!(
        "LEVERED HEDGE ENGINE - BACKTEST SUMMARY\n\n{table}\n\n\
         Outperformance vs benchmark:\n\
         - Alpha (CAGR):     {}\n\
         - Sharpe advantage: {:.2}\n\n\
         Configuration:\n\
         - Initial capital:  {:.2}\n\
         - Weights:          {:.0}% hedged / {:.0}% unhedged\n\
         - Hedge cost:       {} p.a.\n\
         - Crash floor:      {} below {}\n",
        pct(portfolio.cagr - benchmark.cagr),
        portfolio.sharpe_ratio - benchmark.sharpe_ratio,
        strategy.initial_capital,
        strategy.hedged_weight * 100.0,
        strategy.unhedged_weight * 100.0,
        pct(strategy.annual_hedge_cost),
        pct(strategy.crash_floor_return),
        pct(strategy.crash_threshold),
    )
}

fn pct(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

fn opt_ratio(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "n/a".to_string(),
    }
}
