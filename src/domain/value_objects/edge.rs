//! Edge value object - a derived relationship between two nodes

use serde::{Deserialize, Serialize};

use super::NodeId;

/// Relationship kind drawn between nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeKind {
    /// Value object used as an entity field type
    HasField,
    /// Entity acting as an aggregate root
    Root,
    /// Entity inside an aggregate boundary
    Member,
    /// Repository a use case depends on
    UsesRepo,
    Reads,
    Writes,
}

impl EdgeKind {
    pub fn label(&self) -> &'static str {
        match self {
            EdgeKind::HasField => "has-field",
            EdgeKind::Root => "root",
            EdgeKind::Member => "member",
            EdgeKind::UsesRepo => "uses",
            EdgeKind::Reads => "reads",
            EdgeKind::Writes => "writes",
        }
    }
}

/// Directed edge `source -> target`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    pub kind: EdgeKind,
}

impl Edge {
    pub fn new(source: &NodeId, target: &NodeId, kind: EdgeKind) -> Self {
        Self {
            source: source.clone(),
            target: target.clone(),
            kind,
        }
    }
}
