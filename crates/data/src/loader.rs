use crate::error::DataError;
use chrono::NaiveDate;
use core_types::ReturnObservation;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Shape of one row of the input file: a `date` column (ISO 8601) and a
/// `return` column (decimal fraction, 0.05 = 5%).
#[derive(Debug, Deserialize)]
struct ReturnRow {
    date: NaiveDate,
    #[serde(rename = "return")]
    value: f64,
}

/// Loads the benchmark return series from a CSV file and delivers it
/// chronologically sorted, with duplicate dates dropped (first occurrence
/// wins). This is the contract the simulation engine relies on; it does
/// not re-sort.
pub fn load_return_series(path: &Path) -> Result<Vec<ReturnObservation>, DataError> {
    if !path.exists() {
        return Err(DataError::FileNotFound(path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut observations = Vec::new();

    for (row, result) in reader.deserialize::<ReturnRow>().enumerate() {
        let record = result?;
        if !record.value.is_finite() {
            return Err(DataError::NonFiniteReturn {
                row: row + 1,
                value: record.value,
            });
        }
        observations.push(ReturnObservation {
            date: record.date,
            value: record.value,
        });
    }

    // Stable sort, then keep the first occurrence of any duplicated date.
    observations.sort_by_key(|obs| obs.date);
    observations.dedup_by_key(|obs| obs.date);

    debug!(
        periods = observations.len(),
        path = %path.display(),
        "loaded benchmark return series"
    );

    Ok(observations)
}
