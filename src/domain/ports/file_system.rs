//! FileSystem port - abstraction over file I/O operations
//!
//! Lets the output writer compare and write generated files without
//! depending on a concrete implementation (local disk, in-memory mock).

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug, thiserror::Error)]
pub enum FsError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("I/O error: {0}")]
    Io(std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl FsError {
    /// Map an I/O error, keeping the path for the common kinds
    pub fn from_io(err: std::io::Error, path: &Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with atomic writes
/// - `MemoryFs` - in-memory, for tests
pub trait FileSystem {
    /// Read file content as string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Write content to file atomically, creating parent directories
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    fn exists(&self, path: &Path) -> bool;

    /// Content hash (`sha256:<hex>`)
    fn hash(&self, path: &Path) -> FsResult<String> {
        self.read(path)
            .map(|content| crate::domain::entities::content_hash(&content))
    }
}
