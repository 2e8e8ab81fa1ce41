use std::io;
use thiserror::Error;

/// Crate-wide error type for everything around the responder.
///
/// The responder itself never fails; these cover loading tables,
/// configuration and invalid inputs to the companion helpers.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents malformed JSON in a tables file.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Represents data validation errors (e.g., empty template lists, bad durations).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., bad environment values).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}
