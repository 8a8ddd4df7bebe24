//! Address book service.
//!
//! Owns the in-memory records and decides when they reach the repository.

use crate::error::StorageResult;
use crate::models::Record;
use crate::repositories::ContactRepository;
use tracing::{debug, info, warn};

/// A name-keyed, insertion-ordered collection of records backed by a repository.
///
/// The repository only sees the records on [`AddressBook::save`] (called
/// automatically by [`AddressBook::add_record`]); other mutations stay in memory
/// until the next save.
pub struct AddressBook {
    records: Vec<Record>,
    repository: Box<dyn ContactRepository>,
}

impl AddressBook {
    /// Create an address book and load whatever the repository holds.
    pub fn open(repository: Box<dyn ContactRepository>) -> Self {
        let mut book = Self {
            records: Vec::new(),
            repository,
        };
        book.load();
        book
    }

    /// Replace the in-memory records with the repository contents.
    ///
    /// A missing, empty or unreadable data file yields an empty book.
    pub fn load(&mut self) {
        self.records.clear();
        match self.repository.load() {
            Ok(records) => {
                for record in records {
                    self.upsert(record);
                }
                info!("Loaded {} contacts", self.records.len());
            }
            Err(e) => {
                warn!("Starting with an empty address book: {}", e);
            }
        }
    }

    /// Write every record to the repository.
    pub fn save(&self) -> StorageResult<()> {
        self.repository.save(&self.records)?;
        info!("Saved {} contacts", self.records.len());
        Ok(())
    }

    /// Insert a record, replacing any record with the same name, then save.
    ///
    /// A replaced record keeps its original position.
    pub fn add_record(&mut self, record: Record) -> StorageResult<()> {
        debug!("Adding record for {}", record.name);
        self.upsert(record);
        self.save()
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name.as_str() == name)
    }

    /// Look up a record by exact name for modification.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name.as_str() == name)
    }

    /// Remove a record by name without saving.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let index = self.records.iter().position(|r| r.name.as_str() == name)?;
        Some(self.records.remove(index))
    }

    /// Records whose name or any phone contains `query` (case-sensitive).
    pub fn search(&self, query: &str) -> Vec<&Record> {
        self.records.iter().filter(|r| r.matches(query)).collect()
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of contacts.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book has no contacts.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn upsert(&mut self, record: Record) {
        match self.find_mut(record.name.as_str()) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }
}
