//! Error types for archlab
//!
//! Graph problems are findings, not errors. These variants cover the edges:
//! reading snapshots, writing output, the project store and the watcher.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{FsError, StoreError};

/// Result type alias for archlab operations
pub type ArchlabResult<T> = Result<T, ArchlabError>;

/// Main error type for archlab operations
#[derive(Error, Debug)]
pub enum ArchlabError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot text is not a valid graph
    #[error("invalid snapshot: {message}")]
    InvalidSnapshot { message: String },

    /// Snapshot has no `meta.name` (or it is empty)
    #[error("invalid snapshot: missing meta.name\n  → Fix: add \"meta\": {{ \"name\": \"...\", \"version\": 1 }}")]
    MissingMetaName,

    /// Snapshot file could not be read
    #[error("snapshot not found: {}", .path.display())]
    SnapshotNotFound { path: PathBuf },

    /// Configuration file failed to parse
    #[error("invalid config in {}: {message}", .file.display())]
    Config { file: PathBuf, message: String },

    /// Generated path would land outside the output directory
    #[error("path '{path}' escapes output directory '{}'", .root.display())]
    PathEscape { path: String, root: PathBuf },

    /// No stored project with this name
    #[error("project '{name}' not found\n  → Run: archlab project list")]
    ProjectNotFound { name: String },

    /// Project store failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// File system failure while writing output
    #[error(transparent)]
    Fs(#[from] FsError),

    /// File watcher failure
    #[error("watch error: {message}")]
    Watch { message: String },
}
