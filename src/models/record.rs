//! Record model representing one contact in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a name, any number of phone numbers and an optional birthday.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// Name of the contact, unique within an address book
    pub name: ContactName,

    /// Phone numbers in the order they were added (duplicates allowed)
    #[serde(default)]
    pub phones: Vec<PhoneNumber>,

    /// Birthday, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: ContactName::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Create a new record with a birthday.
    pub fn with_birthday(
        name: impl Into<String>,
        birthday: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let mut record = Self::new(name);
        record.set_birthday(birthday)?;
        Ok(record)
    }

    /// Validate and append a phone number.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        self.phones.push(PhoneNumber::new(phone)?);
        Ok(())
    }

    /// Replace `old` with `new`.
    ///
    /// Every entry equal to `old` is removed and `new` is appended once. Nothing
    /// happens if `old` is not present. If `new` is invalid the record is left
    /// untouched.
    pub fn edit_phone(&mut self, old: &str, new: impl Into<String>) -> Result<(), ValidationError> {
        if self.find_phone(old).is_none() {
            return Ok(());
        }
        let new = PhoneNumber::new(new)?;
        self.remove_phone(old);
        self.phones.push(new);
        Ok(())
    }

    /// Remove every phone equal to `phone`.
    pub fn remove_phone(&mut self, phone: &str) {
        self.phones.retain(|p| p.as_str() != phone);
    }

    /// Find the first phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Replace the whole phone list with a single validated number.
    pub fn replace_phones(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(phone)?;
        self.phones = vec![phone];
        Ok(())
    }

    /// Validate and set the birthday.
    pub fn set_birthday(&mut self, birthday: impl Into<String>) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }

    /// Days until the next birthday counted from the local date, if one is set.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days until the next birthday counted from `today`, if one is set.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.as_ref().map(|b| b.days_until(today))
    }

    /// Phone numbers joined with `separator`.
    pub fn phones_joined(&self, separator: &str) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Whether the name or any phone contains `query`.
    pub fn matches(&self, query: &str) -> bool {
        self.name.as_str().contains(query) || self.phones.iter().any(|p| p.as_str().contains(query))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_joined("; ")
        )?;
        if let Some(ref birthday) = self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
