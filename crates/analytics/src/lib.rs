//! # Performance Analytics
//!
//! A stateless metrics calculator for chronologically-ordered value
//! series. The portfolio, the benchmark, and the individual sleeves are
//! all scored through the same entry point, independently of each other.

pub mod engine;
pub mod error;
pub mod report;

pub use engine::AnalyticsEngine;
pub use error::AnalyticsError;
pub use report::PerformanceReport;
