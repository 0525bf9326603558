//! Snapshot codec
//!
//! A snapshot is the graph as pretty-printed JSON with camelCase keys. The
//! only structural requirement beyond the shape itself is a non-empty
//! `meta.name`.

use std::path::Path;

use crate::domain::entities::DomainGraph;
use crate::error::{ArchlabError, ArchlabResult};
use crate::infrastructure::fs::atomic_write;

/// Serialize a graph as a pretty-printed (2-space) JSON snapshot
pub fn export_graph(graph: &DomainGraph) -> ArchlabResult<String> {
    serde_json::to_string_pretty(graph).map_err(|e| ArchlabError::InvalidSnapshot {
        message: e.to_string(),
    })
}

/// Parse a snapshot
///
/// Fails with `InvalidSnapshot` on malformed JSON or a wrong shape, and with
/// `MissingMetaName` when `meta` or `meta.name` is absent or empty.
pub fn import_graph(text: &str) -> ArchlabResult<DomainGraph> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| ArchlabError::InvalidSnapshot {
            message: e.to_string(),
        })?;

    let has_name = value
        .get("meta")
        .and_then(|meta| meta.get("name"))
        .and_then(|name| name.as_str())
        .is_some_and(|name| !name.is_empty());
    if !has_name {
        return Err(ArchlabError::MissingMetaName);
    }

    serde_json::from_value(value).map_err(|e| ArchlabError::InvalidSnapshot {
        message: e.to_string(),
    })
}

/// Read and import a snapshot file
pub fn read_snapshot(path: &Path) -> ArchlabResult<DomainGraph> {
    let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ArchlabError::SnapshotNotFound {
            path: path.to_path_buf(),
        },
        _ => ArchlabError::Io(e),
    })?;
    import_graph(&text)
}

/// Export a graph to a file (atomic replace)
pub fn write_snapshot(path: &Path, graph: &DomainGraph) -> ArchlabResult<()> {
    let text = export_graph(graph)?;
    atomic_write(path, text.as_bytes())?;
    Ok(())
}
