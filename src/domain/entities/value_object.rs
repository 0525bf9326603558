//! ValueObject building block

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{NodeId, Primitive};

/// A named, primitive-typed field
///
/// Used by value objects and by use-case input/output shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Primitive,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: Primitive) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Immutable domain concept compared by value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueObject {
    pub id: NodeId,
    pub name: String,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl ValueObject {
    pub fn new(id: impl Into<NodeId>, name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            fields,
        }
    }
}
