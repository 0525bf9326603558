//! NodeKind value object - the five building-block kinds

use serde::{Deserialize, Serialize};

/// Kind of building block a node represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    ValueObject,
    Entity,
    Aggregate,
    Repository,
    UseCase,
}

impl NodeKind {
    /// Kinds in emission order
    pub const ALL: [NodeKind; 5] = [
        NodeKind::ValueObject,
        NodeKind::Entity,
        NodeKind::Aggregate,
        NodeKind::Repository,
        NodeKind::UseCase,
    ];

    /// Serialized name
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::ValueObject => "valueObject",
            NodeKind::Entity => "entity",
            NodeKind::Aggregate => "aggregate",
            NodeKind::Repository => "repository",
            NodeKind::UseCase => "useCase",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            NodeKind::ValueObject => "Value Object",
            NodeKind::Entity => "Entity",
            NodeKind::Aggregate => "Aggregate",
            NodeKind::Repository => "Repository",
            NodeKind::UseCase => "Use Case",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
