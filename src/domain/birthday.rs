//! Birthday value object.

use super::errors::ValidationError;
use super::field::Field;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Date format accepted for birthdays.
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

/// A birthday stored as the text it was entered with plus the parsed date.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("1990-07-15").unwrap();
/// assert_eq!(birthday.as_str(), "1990-07-15");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday from a `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the value is not a real
    /// calendar date in that format.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let date = Self::parse(&raw)?;
        Ok(Self { raw, date })
    }

    /// Replace the stored birthday, validating the new one first.
    pub fn set(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let raw = value.into();
        self.date = Self::parse(&raw)?;
        self.raw = raw;
        Ok(())
    }

    /// Get the birthday as entered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Get the parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Days from `today` until the next occurrence of this birthday.
    ///
    /// Returns 0 when `today` is the birthday. A February 29 birthday falls on
    /// February 28 in non-leap years.
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        let this_year = self.occurrence_in(today.year());
        let next = if this_year < today {
            self.occurrence_in(today.year() + 1)
        } else {
            this_year
        };
        (next - today).num_days()
    }

    fn occurrence_in(&self, year: i32) -> NaiveDate {
        let (month, day) = (self.date.month(), self.date.day());
        NaiveDate::from_ymd_opt(year, month, day)
            .or_else(|| NaiveDate::from_ymd_opt(year, month, day - 1))
            .unwrap_or(self.date)
    }

    fn parse(raw: &str) -> Result<NaiveDate, ValidationError> {
        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map_err(|_| ValidationError::InvalidBirthday(raw.to_string()))
    }
}

impl Field for Birthday {
    fn validate(value: &str) -> Result<(), ValidationError> {
        Self::parse(value).map(|_| ())
    }

    fn value(&self) -> &str {
        &self.raw
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
