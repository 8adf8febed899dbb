use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Return series is empty; the simulation needs at least one period")]
    EmptyInput,

    #[error("Configuration error: {0}")]
    Configuration(String),
}
