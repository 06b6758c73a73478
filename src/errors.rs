/*!
 * Error types for the subconv library.
 *
 * Format converters only ever fail with `SubtitleError`; the application
 * layer (CLI, config, file handling) wraps it in `AppError`.
 */

use thiserror::Error;

/// Errors that can occur while reading or choosing a subtitle format
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubtitleError {
    /// The text cannot be interpreted as the declared format
    #[error("Invalid subtitle contents: {0}")]
    InvalidContent(String),

    /// No converter is registered for the requested format name or extension
    #[error("Unknown subtitle format: {0}")]
    UnknownFormat(String),
}

impl SubtitleError {
    /// Shorthand for an `InvalidContent` error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidContent(message.into())
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error loading or validating the configuration
    #[error("Config error: {0}")]
    Config(String),

    /// Error from subtitle processing
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

/// Result alias used by the format converters
pub type SubtitleResult<T> = Result<T, SubtitleError>;
