use crate::error::{StorageError, StorageResult};
use crate::models::Record;
use crate::repositories::traits::ContactRepository;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Schema version written to new data files.
pub const SCHEMA_VERSION: u32 = 1;

/// On-disk document as it is read back.
#[derive(Debug, Deserialize)]
struct AddressBookDocument {
    version: u32,
    #[serde(default)]
    records: Vec<Record>,
}

/// On-disk document as it is written, borrowing the records.
#[derive(Debug, Serialize)]
struct AddressBookDocumentRef<'a> {
    version: u32,
    records: &'a [Record],
}

/// Contact repository backed by a single pretty-printed JSON file.
///
/// The file holds `{"version": 1, "records": [...]}` with records in insertion
/// order. Every save rewrites the whole file in place.
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository for the file at `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the data file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse a data file's contents.
    pub fn decode(contents: &str) -> StorageResult<Vec<Record>> {
        let document: AddressBookDocument = serde_json::from_str(contents)?;
        if document.version != SCHEMA_VERSION {
            return Err(StorageError::UnsupportedVersion(document.version));
        }
        Ok(document.records)
    }

    /// Render records as data file contents.
    pub fn encode(records: &[Record]) -> StorageResult<String> {
        let document = AddressBookDocumentRef {
            version: SCHEMA_VERSION,
            records,
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }
}

impl ContactRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<Vec<Record>> {
        let contents = fs::read_to_string(&self.path)?;
        let records = Self::decode(&contents)?;
        debug!("Read {} records from {}", records.len(), self.path.display());
        Ok(records)
    }

    fn save(&self, records: &[Record]) -> StorageResult<()> {
        let contents = Self::encode(records)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, contents)?;
        debug!("Wrote {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_records() -> Vec<Record> {
        let mut alice = Record::with_birthday("alice", "1990-07-15").unwrap();
        alice.add_phone("1234567890").unwrap();
        alice.add_phone("0987654321").unwrap();
        let mut bob = Record::new("bob");
        bob.add_phone("5555555555").unwrap();
        vec![alice, bob]
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("book.json"));

        let records = sample_records();
        repo.save(&records).unwrap();
        assert_eq!(repo.load().unwrap(), records);
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("nested").join("book.json"));
        repo.save(&sample_records()).unwrap();
        assert!(repo.path().exists());
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("book.json"));
        repo.save(&sample_records()).unwrap();
        repo.save(&[]).unwrap();
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("absent.json"));
        assert!(matches!(repo.load(), Err(StorageError::Io(_))));
    }

    #[test]
    fn test_encode_format() {
        let json = JsonFileRepository::encode(&sample_records()[1..]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["version"], 1);
        assert_eq!(value["records"][0]["name"], "bob");
        assert_eq!(value["records"][0]["phones"][0], "5555555555");
        assert!(value["records"][0].get("birthday").is_none());
    }

    #[test]
    fn test_decode_rejects_other_versions() {
        let result = JsonFileRepository::decode(r#"{"version": 2, "records": []}"#);
        assert!(matches!(result, Err(StorageError::UnsupportedVersion(2))));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            JsonFileRepository::decode(""),
            Err(StorageError::Json(_))
        ));
        assert!(matches!(
            JsonFileRepository::decode("\u{80}binary"),
            Err(StorageError::Json(_))
        ));
    }
}
