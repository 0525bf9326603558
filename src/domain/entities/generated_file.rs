//! GeneratedFile entity - one emitted source file
//!
//! Paths are virtual and rooted at `/` (e.g. `/Domain/Entities/Ride.cs`);
//! the output writer maps them beneath a real directory.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// An emitted source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

impl GeneratedFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Path without the leading `/`, suitable for joining onto a directory
    pub fn relative_path(&self) -> &str {
        self.path.trim_start_matches('/')
    }

    /// SHA-256 of the content, formatted `sha256:<hex>`
    pub fn content_hash(&self) -> String {
        content_hash(&self.content)
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// SHA-256 of arbitrary text in the same format as [`GeneratedFile::content_hash`]
pub fn content_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("sha256:{:x}", hasher.finalize())
}
