use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Invalid metric input: {0}")]
    InvalidInput(String),
}
