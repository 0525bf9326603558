//! GraphStore port
//!
//! Named snapshot persistence. Last write wins per name; no transactions.

use crate::domain::entities::{DomainGraph, ProjectEntry};

pub trait GraphStore: Send + Sync {
    fn save(&self, name: &str, graph: &DomainGraph) -> Result<(), StoreError>;

    /// `Ok(None)` when nothing is stored under `name`
    fn load(&self, name: &str) -> Result<Option<DomainGraph>, StoreError>;

    /// Stored projects, sorted by name
    fn entries(&self) -> Result<Vec<ProjectEntry>, StoreError>;

    /// Stored project names, sorted
    fn list(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.entries()?.into_iter().map(|e| e.name).collect())
    }

    /// Deleting a missing project is not an error
    fn delete(&self, name: &str) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("invalid project name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("failed to access project store: {message}")]
    AccessError { message: String },

    #[error("failed to serialize project '{name}': {message}")]
    SerializationError { name: String, message: String },

    #[error(
        "project '{name}' is corrupted\n  → Fix: re-save it or delete it\n  → Run: archlab project delete {name}\n  → Details: {message}"
    )]
    Corrupted { name: String, message: String },
}

/// Reject names that cannot safely become a single file name
pub fn validate_project_name(name: &str) -> Result<(), StoreError> {
    let invalid = |reason: &str| StoreError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.trim().is_empty() {
        return Err(invalid("name is empty"));
    }
    if name == "." || name == ".." {
        return Err(invalid("name is a relative path component"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(invalid("name contains a path separator"));
    }
    if name.chars().any(char::is_control) {
        return Err(invalid("name contains control characters"));
    }

    Ok(())
}
