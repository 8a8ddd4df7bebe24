//! Contact Book - Main entry point
//!
//! Runs the interactive assistant on stdin/stdout. Logs go to stderr so they
//! never mix with the conversation.

use anyhow::Result;
use contact_book::{run_session, AddressBook, AssistantBot, Config, JsonFileRepository};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can drive the filter
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Using data file {}", config.data_file.display());

    let repository = JsonFileRepository::new(config.data_file.clone());
    let address_book = AddressBook::open(Box::new(repository));
    let mut bot = AssistantBot::new(address_book);

    let stdin = io::stdin();
    if let Err(e) = run_session(&mut bot, stdin.lock(), io::stdout()) {
        error!("Session ended with an error: {}", e);
        return Err(e);
    }

    info!("Contact Book shutdown complete");
    Ok(())
}
