//! Error types for tagwright operations.

use thiserror::Error;

/// Errors that can occur while parsing, validating or writing documents.
///
/// Problems *found in* a document are never errors: they surface as failed
/// rule results or as remediation fixes. Only a missing or malformed
/// precondition is reported here.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("UTF-8 decoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[cfg(feature = "cli")]
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
