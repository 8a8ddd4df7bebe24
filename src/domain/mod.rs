//! Domain value objects and types.
//!
//! Every contact field is a validated wrapper around the text the user typed.
//! Values are checked at construction and on every assignment, so an invalid
//! phone number or birthday can never be stored in a record.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use field::Field;
pub use name::ContactName;
pub use phone::PhoneNumber;
