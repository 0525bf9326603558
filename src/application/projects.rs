//! Project Use Case
//!
//! Named snapshots in a `GraphStore`: save from a file, load back out,
//! list, delete.

use std::path::Path;

use crate::domain::entities::{DomainGraph, ProjectEntry};
use crate::domain::ports::GraphStore;
use crate::error::{ArchlabError, ArchlabResult};

use super::snapshot::{read_snapshot, write_snapshot};

pub struct ProjectService<S: GraphStore> {
    store: S,
}

impl<S: GraphStore> ProjectService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn save(&self, name: &str, graph: &DomainGraph) -> ArchlabResult<()> {
        self.store.save(name, graph)?;
        Ok(())
    }

    /// Import a snapshot file and store it under `name`
    pub fn save_file(&self, name: &str, snapshot: &Path) -> ArchlabResult<DomainGraph> {
        let graph = read_snapshot(snapshot)?;
        self.save(name, &graph)?;
        Ok(graph)
    }

    /// Load a stored project; a missing project is an error here
    pub fn load(&self, name: &str) -> ArchlabResult<DomainGraph> {
        self.store
            .load(name)?
            .ok_or_else(|| ArchlabError::ProjectNotFound {
                name: name.to_string(),
            })
    }

    /// Load a stored project and export it to a file
    pub fn load_to_file(&self, name: &str, out: &Path) -> ArchlabResult<DomainGraph> {
        let graph = self.load(name)?;
        write_snapshot(out, &graph)?;
        Ok(graph)
    }

    pub fn exists(&self, name: &str) -> ArchlabResult<bool> {
        Ok(self.store.load(name)?.is_some())
    }

    pub fn list(&self) -> ArchlabResult<Vec<ProjectEntry>> {
        Ok(self.store.entries()?)
    }

    pub fn delete(&self, name: &str) -> ArchlabResult<()> {
        self.store.delete(name)?;
        Ok(())
    }
}
