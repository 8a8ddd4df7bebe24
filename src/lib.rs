//! Contact Book - a command-line assistant for keeping contacts.
//!
//! Stores names, phone numbers and optional birthdays in a JSON file and offers
//! add/change/lookup/search/list operations through a line-oriented text
//! interface.
//!
//! # Architecture
//!
//! - **domain**: Validated contact fields (name, phone, birthday)
//! - **models**: The contact record
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: Storage abstraction and the JSON file implementation
//! - **services**: The address book
//! - **bot**: Command parsing, dispatch and the interactive session

pub mod bot;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;

pub use bot::{run_session, AssistantBot, Command, Reply};
pub use config::Config;
pub use domain::{Birthday, ContactName, Field, PhoneNumber, ValidationError};
pub use error::{BotError, ConfigError, StorageError};
pub use models::Record;
pub use repositories::{ContactRepository, JsonFileRepository};
pub use services::AddressBook;
