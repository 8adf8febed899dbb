//! File IO for the levered hedge backtester: the benchmark return series
//! loader and the result writers. No simulation logic lives here; the
//! loader's one promise is to hand the engine a chronologically sorted,
//! finite return series.

pub mod error;
pub mod loader;
pub mod writer;

pub use error::DataError;
pub use loader::load_return_series;
pub use writer::{write_summary, write_timeseries};
