use contact_book::error::{StorageError, StorageResult};
use contact_book::models::Record;
use contact_book::repositories::ContactRepository;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that can be
/// seeded with records, made to fail on save, and tracks method calls for
/// verification. Clones share state, so a test can keep a handle after giving
/// one to an `AddressBook`.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    stored: Arc<Mutex<Option<Vec<Record>>>>,
    fail_saves: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a repository that behaves like a missing data file.
    pub fn new() -> Self {
        Self {
            stored: Arc::new(Mutex::new(None)),
            fail_saves: Arc::new(Mutex::new(false)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Create a repository already holding `records`.
    pub fn with_records(records: Vec<Record>) -> Self {
        let repo = Self::new();
        *repo.stored.lock().unwrap() = Some(records);
        repo
    }

    /// Make every following save fail with an I/O error.
    pub fn fail_saves(&self) {
        *self.fail_saves.lock().unwrap() = true;
    }

    /// Records from the last successful save (or the seed), if any.
    pub fn saved_records(&self) -> Option<Vec<Record>> {
        self.stored.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        let mut counts = self.call_counts.lock().unwrap();
        counts.clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactRepository for MockContactRepository {
    fn load(&self) -> StorageResult<Vec<Record>> {
        self.track_call("load");

        self.stored.lock().unwrap().clone().ok_or_else(|| {
            StorageError::Io(io::Error::new(io::ErrorKind::NotFound, "no data file"))
        })
    }

    fn save(&self, records: &[Record]) -> StorageResult<()> {
        self.track_call("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only data file",
            )));
        }

        *self.stored.lock().unwrap() = Some(records.to_vec());
        Ok(())
    }
}
