use crate::error::DataError;
use core_types::PortfolioPath;
use std::path::Path;
use tracing::info;

/// Persists the simulated path as a CSV file, one row per period.
pub fn write_timeseries(path: &Path, portfolio_path: &PortfolioPath) -> Result<(), DataError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    for record in &portfolio_path.records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    info!(path = %path.display(), rows = portfolio_path.len(), "saved time series");
    Ok(())
}

/// Persists the already-rendered summary text next to the time series.
pub fn write_summary(path: &Path, summary: &str) -> Result<(), DataError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(path, summary)?;

    info!(path = %path.display(), "saved summary");
    Ok(())
}
