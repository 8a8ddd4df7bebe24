//! Command handlers for the assistant.
//!
//! Each handler works on the address book and returns the text shown to the
//! user. Handlers that take arguments go through [`input_error`], which turns
//! user mistakes into fixed replies and lets only storage failures escape.

use super::command::Command;
use crate::error::{BotError, BotResult, StorageResult};
use crate::models::Record;
use crate::services::AddressBook;
use tracing::debug;

/// Reply to an unparseable `add`/`change`/`birthday`.
pub const INVALID_FORMAT: &str = "Invalid input format";
/// Reply when a contact name is missing.
pub const ENTER_USER_NAME: &str = "Enter user name";
/// Reply when a value fails validation.
pub const GIVE_NAME_AND_PHONE: &str = "Give me name and phone please";
/// Reply to unrecognised input.
pub const UNKNOWN_COMMAND: &str = "Unknown command";
/// Reply to `show all` on an empty book.
pub const NO_CONTACTS: &str = "No contacts found";
/// Reply to a search without matches.
pub const NO_RESULTS: &str = "No results found.";
/// Reply to `hello`.
pub const GREETING: &str = "How can I help you?";
/// Reply to the exit commands.
pub const FAREWELL: &str = "Good bye!";

/// What the session should do with the outcome of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Show the text and wait for the next command.
    Message(String),
    /// Ask for a search query, then call [`AssistantBot::search`].
    SearchPrompt,
    /// Show the text and end the session. The book has already been saved.
    Farewell(String),
}

/// Turn a handler result into reply text.
///
/// Missing names and invalid values become fixed replies; storage errors are
/// passed through.
pub fn input_error(result: BotResult<String>) -> StorageResult<String> {
    match result {
        Ok(message) => Ok(message),
        Err(BotError::MissingKey) => Ok(ENTER_USER_NAME.to_string()),
        Err(BotError::InvalidValue(e)) => {
            debug!("Rejected input: {}", e);
            Ok(GIVE_NAME_AND_PHONE.to_string())
        }
        Err(BotError::Storage(e)) => Err(e),
    }
}

/// Command dispatcher over an address book.
pub struct AssistantBot {
    address_book: AddressBook,
}

impl AssistantBot {
    /// Create a bot that works on `address_book`.
    pub fn new(address_book: AddressBook) -> Self {
        Self { address_book }
    }

    /// The address book the bot works on.
    pub fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    /// Give the address book back.
    pub fn into_address_book(self) -> AddressBook {
        self.address_book
    }

    /// Persist the address book.
    pub fn save(&self) -> StorageResult<()> {
        self.address_book.save()
    }

    /// Parse and execute one input line.
    pub fn handle_command(&mut self, line: &str) -> StorageResult<Reply> {
        let command = Command::parse(line);
        debug!("Dispatching {:?}", command);

        let reply = match command {
            Command::Hello => Reply::Message(GREETING.to_string()),
            Command::Add { name, phone } => {
                Reply::Message(input_error(self.add_contact(&name, &phone))?)
            }
            Command::Change { name, phone } => {
                Reply::Message(input_error(self.change_contact(&name, &phone))?)
            }
            Command::Phone { name } => Reply::Message(input_error(self.show_phone(&name))?),
            Command::Birthday { name, date } => {
                Reply::Message(input_error(self.set_birthday(&name, &date))?)
            }
            Command::Days { name } => {
                Reply::Message(input_error(self.days_to_birthday(&name))?)
            }
            Command::ShowAll => Reply::Message(self.show_all()),
            Command::Search => Reply::SearchPrompt,
            Command::Exit => {
                self.save()?;
                Reply::Farewell(FAREWELL.to_string())
            }
            Command::InvalidFormat => Reply::Message(INVALID_FORMAT.to_string()),
            Command::Unknown => Reply::Message(UNKNOWN_COMMAND.to_string()),
        };
        Ok(reply)
    }

    /// Add a phone to a contact, creating and saving the contact if it is new.
    ///
    /// A phone added to an existing contact is not saved until the next save.
    pub fn add_contact(&mut self, name: &str, phone: &str) -> BotResult<String> {
        require_name(name)?;
        if let Some(record) = self.address_book.find_mut(name) {
            record.add_phone(phone)?;
            return Ok(format!("Added {} to {}'s contact", phone, name));
        }

        let mut record = Record::new(name);
        record.add_phone(phone)?;
        self.address_book.add_record(record)?;
        Ok(format!("Added {} with phone number {}", name, phone))
    }

    /// Replace an existing contact's phones with `phone`. Not saved immediately.
    pub fn change_contact(&mut self, name: &str, phone: &str) -> BotResult<String> {
        require_name(name)?;
        match self.address_book.find_mut(name) {
            Some(record) => {
                record.replace_phones(phone)?;
                Ok(format!("Changed phone number for {} to {}", name, phone))
            }
            None => Ok(not_found(name)),
        }
    }

    /// List a contact's phones.
    pub fn show_phone(&self, name: &str) -> BotResult<String> {
        require_name(name)?;
        match self.address_book.find(name) {
            Some(record) => Ok(format!(
                "{}'s phone number is {}",
                name,
                record.phones_joined(", ")
            )),
            None => Ok(not_found(name)),
        }
    }

    /// Set an existing contact's birthday. Not saved immediately.
    pub fn set_birthday(&mut self, name: &str, date: &str) -> BotResult<String> {
        require_name(name)?;
        match self.address_book.find_mut(name) {
            Some(record) => {
                record.set_birthday(date)?;
                Ok(format!("Birthday for {} set to {}", name, date))
            }
            None => Ok(not_found(name)),
        }
    }

    /// Report the days left until a contact's birthday.
    pub fn days_to_birthday(&self, name: &str) -> BotResult<String> {
        require_name(name)?;
        let Some(record) = self.address_book.find(name) else {
            return Ok(not_found(name));
        };
        match record.days_to_birthday() {
            Some(days) => Ok(format!("{} days until {}'s birthday", days, name)),
            None => Ok(format!("No birthday set for {}", name)),
        }
    }

    /// One `<name>: <phones>` line per contact.
    pub fn show_all(&self) -> String {
        if self.address_book.is_empty() {
            return NO_CONTACTS.to_string();
        }
        self.address_book
            .records()
            .iter()
            .map(|r| format!("{}: {}", r.name, r.phones_joined(", ")))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Every matching record on its own line, or [`NO_RESULTS`].
    pub fn search(&self, query: &str) -> String {
        let results = self.address_book.search(query);
        debug!("Search {:?} matched {} contacts", query, results.len());
        if results.is_empty() {
            return NO_RESULTS.to_string();
        }
        results
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn require_name(name: &str) -> BotResult<()> {
    if name.is_empty() {
        Err(BotError::MissingKey)
    } else {
        Ok(())
    }
}

fn not_found(name: &str) -> String {
    format!("Contact {} not found", name)
}
