//! In-memory FileSystem for tests and dry runs

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

#[derive(Debug, Default)]
pub struct MemoryFs {
    files: Mutex<BTreeMap<PathBuf, String>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        if let Ok(mut files) = self.files.lock() {
            files.insert(path.into(), content.into());
        }
        self
    }

    /// All stored paths, sorted
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files
            .lock()
            .map(|files| files.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl FileSystem for MemoryFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        let files = self
            .files
            .lock()
            .map_err(|_| FsError::Other("memory fs lock poisoned".to_string()))?;
        files
            .get(path)
            .cloned()
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let mut files = self
            .files
            .lock()
            .map_err(|_| FsError::Other("memory fs lock poisoned".to_string()))?;
        files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files
            .lock()
            .map(|files| files.contains_key(path))
            .unwrap_or(false)
    }
}
