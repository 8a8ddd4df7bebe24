//! Configuration management for the contact book.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. Nothing here prints to stdout, which belongs to the interactive session.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default location of the data file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "address_book.json";

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON data file (default: `address_book.json`)
    pub data_file: PathBuf,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_PATH`: Path of the data file (default: `address_book.json`)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let data_file = match env::var("CONTACT_BOOK_PATH") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACT_BOOK_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(env::VarError::NotPresent) => PathBuf::from(DEFAULT_DATA_FILE),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACT_BOOK_PATH".to_string(),
                    reason: "Must be valid UTF-8".to_string(),
                });
            }
        };

        let log_level = Self::parse_log_level("LOG_LEVEL", "warn")?;

        Ok(Config {
            data_file,
            log_level,
        })
    }

    /// Read a log level variable, accepting only the levels `tracing` knows.
    fn parse_log_level(var_name: &str, default: &str) -> ConfigResult<String> {
        match env::var(var_name) {
            Ok(val) => {
                let level = val.trim().to_lowercase();
                match level.as_str() {
                    "trace" | "debug" | "info" | "warn" | "error" | "off" => Ok(level),
                    _ => Err(ConfigError::InvalidValue {
                        var: var_name.to_string(),
                        reason: format!("Must be one of trace/debug/info/warn/error/off, got: {}", val),
                    }),
                }
            }
            Err(_) => Ok(default.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_level: "warn".to_string(),
        }
    }
}
