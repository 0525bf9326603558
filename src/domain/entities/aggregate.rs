//! Aggregate building block

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::NodeId;

/// Consistency boundary around a root entity
///
/// `invariants` are free-text business rules; they are carried through to
/// generated code as comments and never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aggregate {
    pub id: NodeId,
    pub name: String,
    pub root_entity_id: NodeId,
    #[serde(default)]
    pub entity_ids: Vec<NodeId>,
    #[serde(default)]
    pub invariants: Vec<String>,
}

impl Aggregate {
    pub fn new(
        id: impl Into<NodeId>,
        name: impl Into<String>,
        root_entity_id: impl Into<NodeId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            root_entity_id: root_entity_id.into(),
            entity_ids: Vec::new(),
            invariants: Vec::new(),
        }
    }

    pub fn with_members(mut self, entity_ids: impl IntoIterator<Item = impl Into<NodeId>>) -> Self {
        self.entity_ids = entity_ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_invariants(mut self, invariants: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.invariants = invariants.into_iter().map(Into::into).collect();
        self
    }
}
