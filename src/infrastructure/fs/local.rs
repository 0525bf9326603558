//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
///
/// Writes go to a temporary file in the target directory and are renamed
/// into place, so readers never see a half-written file.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::from_io(e, path))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        atomic_write(path, content.as_bytes())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Write `content` to `path` through a temp file + rename
pub fn atomic_write(path: &Path, content: &[u8]) -> FsResult<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(|e| FsError::from_io(e, parent))?;

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| FsError::from_io(e, parent))?;
    temp.write_all(content).map_err(|e| FsError::from_io(e, path))?;
    temp.flush().map_err(|e| FsError::from_io(e, path))?;
    temp.persist(path)
        .map_err(|e| FsError::from_io(e.error, path))?;

    Ok(())
}
