use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Configuration error: {0}")]
    #[diagnostic(code(vuorovahti::config))]
    Config(String),

    #[error("Schedule data error: {0}")]
    #[diagnostic(code(vuorovahti::schedule_data))]
    ScheduleData(String),

    #[error(transparent)]
    #[diagnostic(code(vuorovahti::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(vuorovahti::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(vuorovahti::other))]
    Other(String),
}

// Implement From for JSON serialization errors
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type AppResult<T> = Result<T, Error>;

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create schedule data errors
pub fn schedule_data_error(message: &str) -> Error {
    Error::ScheduleData(message.to_string())
}
