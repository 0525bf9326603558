//! UseCase building block

use serde::{Deserialize, Serialize};

use super::value_object::Field;
use crate::domain::value_objects::NodeId;

/// Named data shape used for use-case input and output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IoShape {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl IoShape {
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}

/// Application-level operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UseCase {
    pub id: NodeId,
    pub name: String,
    pub input: IoShape,
    pub output: IoShape,
    #[serde(default)]
    pub repo_ids: Vec<NodeId>,
    /// Entities or aggregates this use case reads
    #[serde(default)]
    pub reads: Vec<NodeId>,
    /// Entities or aggregates this use case writes
    #[serde(default)]
    pub writes: Vec<NodeId>,
}

impl UseCase {
    pub fn new(id: impl Into<NodeId>, name: impl Into<String>, input: IoShape, output: IoShape) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            input,
            output,
            repo_ids: Vec::new(),
            reads: Vec::new(),
            writes: Vec::new(),
        }
    }

    pub fn with_repos(mut self, repo_ids: impl IntoIterator<Item = impl Into<NodeId>>) -> Self {
        self.repo_ids = repo_ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_reads(mut self, reads: impl IntoIterator<Item = impl Into<NodeId>>) -> Self {
        self.reads = reads.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_writes(mut self, writes: impl IntoIterator<Item = impl Into<NodeId>>) -> Self {
        self.writes = writes.into_iter().map(Into::into).collect();
        self
    }

    /// Reads followed by writes
    pub fn targets(&self) -> impl Iterator<Item = &NodeId> {
        self.reads.iter().chain(self.writes.iter())
    }
}
