use crate::error::StorageError;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Key-value slot holding the serialized history
pub trait Storage {
    /// Returns `Ok(None)` when nothing has been saved yet
    fn load(&self) -> Result<Option<String>, StorageError>;
    fn save(&mut self, data: &str) -> Result<(), StorageError>;
    fn clear(&mut self) -> Result<(), StorageError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    data: Option<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(data: impl Into<String>) -> Self {
        Self {
            data: Some(data.into()),
        }
    }

    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.data.clone())
    }

    fn save(&mut self, data: &str) -> Result<(), StorageError> {
        self.data = Some(data.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.data = None;
        Ok(())
    }
}

/// Stores the history as a single JSON file
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Storage for FileStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn save(&mut self, data: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        fs::write(&self.path, data).map_err(|e| self.io_error(e))
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_clear_forgets_data() {
        let mut storage = MemoryStorage::with_data("[]");
        assert_eq!(storage.load().unwrap().as_deref(), Some("[]"));

        storage.clear().unwrap();
        assert_eq!(storage.load().unwrap(), None);
    }

    #[test]
    fn file_storage_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/dir/history.json");
        let mut storage = FileStorage::new(&path);

        assert_eq!(storage.load().unwrap(), None);
        storage.save("[]").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
        assert_eq!(storage.load().unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn clearing_a_missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path().join("history.json"));
        storage.clear().unwrap();
    }

    #[test]
    fn unreadable_path_reports_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be read as a file
        let storage = FileStorage::new(dir.path());
        match storage.load() {
            Err(StorageError::Io { path, .. }) => assert_eq!(path, dir.path()),
            other => panic!("expected an io error, got {other:?}"),
        }
    }
}
