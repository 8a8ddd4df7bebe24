//! Domain validation errors.

use std::fmt;

/// Errors that can occur during field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The provided birthday is not a `YYYY-MM-DD` calendar date.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(phone) => {
                write!(f, "Invalid phone number: {} (expected 10 digits)", phone)
            }
            Self::InvalidBirthday(date) => {
                write!(f, "Invalid birthday: {} (expected YYYY-MM-DD)", date)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
