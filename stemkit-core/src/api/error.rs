//! Error types for the API

use thiserror::Error;

/// Error type for API operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Unknown language code or name
    #[error("Invalid language: {0}")]
    InvalidLanguage(String),

    /// Reading fixture or word files failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Fixture files do not pair up line by line
    #[error("Fixture files differ in length: {input_lines} input lines, {expected_lines} expected lines")]
    FixtureMismatch {
        input_lines: usize,
        expected_lines: usize,
    },

    /// The worker pool for batch stemming could not be built
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
