//! ContactName value object.

use super::errors::ValidationError;
use super::field::Field;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The name of a contact, used as the unique key of a record.
///
/// Any string is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactName(String);

impl ContactName {
    /// Create a new ContactName.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Replace the stored name.
    pub fn set(&mut self, name: impl Into<String>) {
        self.0 = name.into();
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Field for ContactName {
    fn validate(_value: &str) -> Result<(), ValidationError> {
        Ok(())
    }

    fn value(&self) -> &str {
        &self.0
    }
}

impl Serialize for ContactName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContactName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(ContactName::new)
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
