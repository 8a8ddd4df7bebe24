//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when reading or writing the data file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File contents are not a valid address book document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File was written by an incompatible schema version
    #[error("Unsupported data file version: {0}")]
    UnsupportedVersion(u32),
}

/// Errors produced by assistant commands before they are turned into replies.
#[derive(Error, Debug)]
pub enum BotError {
    /// The command needs a contact name and none was given
    #[error("Missing contact name")]
    MissingKey,

    /// A field failed validation
    #[error(transparent)]
    InvalidValue(#[from] ValidationError),

    /// Saving the address book failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with BotError
pub type BotResult<T> = Result<T, BotError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
