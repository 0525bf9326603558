//! Repository (port) building block

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::NodeId;

/// A method declared on a repository port
///
/// `signature` is caller-supplied source text copied verbatim into the
/// generated interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryMethod {
    pub name: String,
    pub signature: String,
}

impl RepositoryMethod {
    pub fn new(name: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            signature: signature.into(),
        }
    }
}

/// Persistence contract decoupling the domain from storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub id: NodeId,
    pub name: String,
    #[serde(default)]
    pub methods: Vec<RepositoryMethod>,
}

impl Repository {
    pub fn new(
        id: impl Into<NodeId>,
        name: impl Into<String>,
        methods: Vec<RepositoryMethod>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            methods,
        }
    }
}
