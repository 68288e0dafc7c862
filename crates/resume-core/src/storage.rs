//! Durable blob storage behind the state store.
//!
//! The store persists exactly one JSON blob. Backends are injected so
//! tests construct isolated instances; the file backend mirrors how the
//! app keeps per-user data under the platform data directory.

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Could not determine data directory")]
    NoDataDir,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// One durable slot for the serialized résumé blob.
pub trait StorageBackend {
    /// Reads the stored blob, `None` when nothing was ever saved.
    fn load(&self) -> Result<Option<String>, StorageError>;
    /// Overwrites the stored blob.
    fn save(&self, json: &str) -> Result<(), StorageError>;
    /// Removes the stored blob.
    fn clear(&self) -> Result<(), StorageError>;
}

/// File-backed storage: one JSON file, overwritten on every save.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Storage at the platform-default location
    /// (e.g. `~/.local/share/vitae/resume.json` on Linux).
    pub fn default_location() -> Result<Self, StorageError> {
        let dirs = ProjectDirs::from("com", "vitae", "Vitae").ok_or(StorageError::NoDataDir)?;
        Ok(FileStorage {
            path: dirs.data_dir().join("resume.json"),
        })
    }

    pub fn at_path(path: PathBuf) -> Self {
        FileStorage { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl StorageBackend for FileStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, json: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory storage for tests and ephemeral sessions. The store runs on
/// a single logical thread, so interior mutability via `RefCell` is
/// sufficient.
#[derive(Default)]
pub struct MemoryStorage {
    blob: RefCell<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded storage, as if a previous session had saved `json`.
    pub fn with_blob(json: impl Into<String>) -> Self {
        MemoryStorage {
            blob: RefCell::new(Some(json.into())),
        }
    }

    pub fn blob(&self) -> Option<String> {
        self.blob.borrow().clone()
    }
}

impl StorageBackend for MemoryStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.blob.borrow().clone())
    }

    fn save(&self, json: &str) -> Result<(), StorageError> {
        *self.blob.borrow_mut() = Some(json.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.blob.borrow_mut() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::at_path(dir.path().join("nested").join("resume.json"));

        assert!(storage.load().unwrap().is_none());
        storage.save(r#"{"summary":"hi"}"#).unwrap();
        assert_eq!(storage.load().unwrap().unwrap(), r#"{"summary":"hi"}"#);

        storage.clear().unwrap();
        assert!(storage.load().unwrap().is_none());
        // Clearing an already-empty slot is not an error.
        storage.clear().unwrap();
    }

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert!(storage.load().unwrap().is_none());
        storage.save("{}").unwrap();
        assert_eq!(storage.load().unwrap().unwrap(), "{}");
        storage.clear().unwrap();
        assert!(storage.load().unwrap().is_none());
    }
}
