//! The `Field` trait shared by every validated contact field.

use super::errors::ValidationError;

/// A single validated textual value.
///
/// Implementors run [`Field::validate`] from their constructor and from every
/// setter, so a value that exists always satisfies its rule.
pub trait Field {
    /// Check a raw value against this field's rule.
    fn validate(value: &str) -> Result<(), ValidationError>;

    /// Get the stored value.
    fn value(&self) -> &str;
}
