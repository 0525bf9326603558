//! JSON Graph Store
//!
//! Keeps one `<name>.json` snapshot per project under a directory
//! (default `~/.archlab/projects`).

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;

use crate::application::snapshot::import_graph;
use crate::domain::entities::{DomainGraph, ProjectEntry};
use crate::domain::ports::{validate_project_name, GraphStore, StoreError};
use crate::infrastructure::fs::atomic_write;

/// Overrides the default store directory
pub const STORE_DIR_VAR: &str = "ARCHLAB_STORE_DIR";

const EXTENSION: &str = "json";
const LOCK_FILE: &str = ".archlab-store.lock";

pub struct JsonGraphStore {
    dir: PathBuf,
}

impl JsonGraphStore {
    pub fn new() -> Self {
        Self {
            dir: default_store_dir(),
        }
    }

    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn project_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{EXTENSION}"))
    }

    /// Run `op` while holding the store's exclusive lock
    fn locked<T>(&self, op: impl FnOnce() -> Result<T, StoreError>) -> Result<T, StoreError> {
        fs::create_dir_all(&self.dir).map_err(access_error)?;

        let lock_file = fs::File::create(self.dir.join(LOCK_FILE)).map_err(access_error)?;
        lock_file.lock_exclusive().map_err(access_error)?;

        let result = op();

        let _ = lock_file.unlock();
        result
    }

    fn read_graph(&self, name: &str, path: &Path) -> Result<DomainGraph, StoreError> {
        let content = fs::read_to_string(path).map_err(access_error)?;
        // Same acceptance rules as a snapshot file on disk
        import_graph(&content).map_err(|e| StoreError::Corrupted {
            name: name.to_string(),
            message: e.to_string(),
        })
    }
}

impl Default for JsonGraphStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphStore for JsonGraphStore {
    fn save(&self, name: &str, graph: &DomainGraph) -> Result<(), StoreError> {
        validate_project_name(name)?;

        let content =
            serde_json::to_string_pretty(graph).map_err(|e| StoreError::SerializationError {
                name: name.to_string(),
                message: e.to_string(),
            })?;

        let path = self.project_path(name);
        self.locked(|| atomic_write(&path, content.as_bytes()).map_err(access_error))
    }

    fn load(&self, name: &str) -> Result<Option<DomainGraph>, StoreError> {
        validate_project_name(name)?;

        let path = self.project_path(name);
        if !path.exists() {
            return Ok(None);
        }
        self.read_graph(name, &path).map(Some)
    }

    fn entries(&self) -> Result<Vec<ProjectEntry>, StoreError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for dir_entry in fs::read_dir(&self.dir).map_err(access_error)? {
            let path = dir_entry.map_err(access_error)?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let saved_at = fs::metadata(&path)
                .and_then(|m| m.modified())
                .map(DateTime::<Utc>::from)
                .unwrap_or_else(|_| Utc::now());
            // Unreadable snapshots are still listed so they can be deleted
            let node_count = self
                .read_graph(name, &path)
                .map(|g| g.node_count())
                .unwrap_or(0);

            entries.push(ProjectEntry::new(name, saved_at, node_count));
        }

        ProjectEntry::sort(&mut entries);
        Ok(entries)
    }

    fn delete(&self, name: &str) -> Result<(), StoreError> {
        validate_project_name(name)?;

        let path = self.project_path(name);
        self.locked(|| match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(access_error(e)),
        })
    }
}

fn access_error(err: impl std::fmt::Display) -> StoreError {
    StoreError::AccessError {
        message: err.to_string(),
    }
}

fn default_store_dir() -> PathBuf {
    // Allow override for testing (dirs::home_dir cannot be redirected on
    // every platform)
    if let Ok(dir) = std::env::var(STORE_DIR_VAR) {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }
    dirs::home_dir()
        .map(|h| h.join(".archlab/projects"))
        .unwrap_or_else(|| PathBuf::from(".archlab/projects"))
}
