//! Service layer.
//!
//! Business logic over the repository: the address book itself.

pub mod address_book;

pub use address_book::AddressBook;
