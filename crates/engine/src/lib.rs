//! # Portfolio Compounding Engine
//!
//! This crate is the numeric core of the levered hedge backtester: the
//! piecewise sleeve return transformers and the sequential compounding
//! simulator, with optional periodic rebalancing back to target weights.
//!
//! The engine is synchronous and deterministic. It never logs results or
//! touches IO; failures are raised as [`EngineError`] at the point of
//! detection, before any period is processed.

pub mod error;
pub mod simulator;
pub mod sleeves;
pub mod state;

pub use error::EngineError;
pub use simulator::Simulator;
pub use sleeves::{hedged_return, unhedged_return};
pub use state::PortfolioState;
