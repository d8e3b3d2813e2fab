//! Error types for flick-core

use thiserror::Error;

/// Result type alias using flick-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in flick operations
///
/// The screen state transitions themselves are infallible; these variants
/// cover the ambient boundaries (config file I/O and parsing).
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config error
    #[error("Config error: {0}")]
    Config(String),
}
