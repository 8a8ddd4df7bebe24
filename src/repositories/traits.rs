use crate::error::StorageResult;
use crate::models::Record;

/// Repository for persisting the address book.
///
/// Provides abstraction over where the records live, enabling different
/// implementations (JSON file, in-memory mock).
pub trait ContactRepository: Send + Sync {
    /// Read every stored record in insertion order.
    fn load(&self) -> StorageResult<Vec<Record>>;

    /// Overwrite the stored records with `records`.
    fn save(&self, records: &[Record]) -> StorageResult<()>;
}
