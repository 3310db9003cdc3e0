//! Error types for scanpad

use std::io;
use thiserror::Error;

/// Main error type for scanpad
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Submission error: {0}")]
    Submit(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("INI parse error: {0}")]
    IniParse(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for scanpad operations
pub type Result<T> = std::result::Result<T, ScanError>;

impl From<String> for ScanError {
    fn from(s: String) -> Self {
        ScanError::Other(s)
    }
}

impl From<&str> for ScanError {
    fn from(s: &str) -> Self {
        ScanError::Other(s.to_string())
    }
}

impl From<serde_json::Error> for ScanError {
    fn from(e: serde_json::Error) -> Self {
        ScanError::Submit(format!("JSON error: {}", e))
    }
}
