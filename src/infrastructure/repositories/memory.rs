//! In-memory Graph Store

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use crate::domain::entities::{DomainGraph, ProjectEntry};
use crate::domain::ports::{validate_project_name, GraphStore, StoreError};

type Projects = BTreeMap<String, (DomainGraph, DateTime<Utc>)>;

#[derive(Debug, Default)]
pub struct InMemoryGraphStore {
    projects: Mutex<Projects>,
}

impl InMemoryGraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn projects(&self) -> Result<MutexGuard<'_, Projects>, StoreError> {
        self.projects.lock().map_err(|_| StoreError::AccessError {
            message: "project store lock poisoned".to_string(),
        })
    }
}

impl GraphStore for InMemoryGraphStore {
    fn save(&self, name: &str, graph: &DomainGraph) -> Result<(), StoreError> {
        validate_project_name(name)?;
        self.projects()?
            .insert(name.to_string(), (graph.clone(), Utc::now()));
        Ok(())
    }

    fn load(&self, name: &str) -> Result<Option<DomainGraph>, StoreError> {
        validate_project_name(name)?;
        Ok(self.projects()?.get(name).map(|(graph, _)| graph.clone()))
    }

    fn entries(&self) -> Result<Vec<ProjectEntry>, StoreError> {
        // BTreeMap iteration is already name-sorted
        Ok(self
            .projects()?
            .iter()
            .map(|(name, (graph, saved_at))| ProjectEntry::new(name, *saved_at, graph.node_count()))
            .collect())
    }

    fn delete(&self, name: &str) -> Result<(), StoreError> {
        validate_project_name(name)?;
        self.projects()?.remove(name);
        Ok(())
    }
}
