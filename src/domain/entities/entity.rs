//! Entity building block

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{NodeId, Primitive};

/// A field of an entity: either a primitive or a reference to a value object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum EntityField {
    #[serde(rename = "primitive")]
    Primitive {
        name: String,
        #[serde(rename = "type")]
        ty: Primitive,
    },
    #[serde(rename = "vo")]
    ValueObject {
        name: String,
        #[serde(rename = "voId")]
        vo_id: NodeId,
    },
}

impl EntityField {
    pub fn primitive(name: impl Into<String>, ty: Primitive) -> Self {
        EntityField::Primitive {
            name: name.into(),
            ty,
        }
    }

    pub fn value_object(name: impl Into<String>, vo_id: impl Into<NodeId>) -> Self {
        EntityField::ValueObject {
            name: name.into(),
            vo_id: vo_id.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            EntityField::Primitive { name, .. } | EntityField::ValueObject { name, .. } => name,
        }
    }

    /// Referenced value object, for `vo` fields
    pub fn vo_id(&self) -> Option<&NodeId> {
        match self {
            EntityField::ValueObject { vo_id, .. } => Some(vo_id),
            EntityField::Primitive { .. } => None,
        }
    }
}

/// Domain concept with identity distinct from its field values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub id: NodeId,
    pub name: String,
    pub id_type: Primitive,
    #[serde(default)]
    pub fields: Vec<EntityField>,
}

impl Entity {
    pub fn new(
        id: impl Into<NodeId>,
        name: impl Into<String>,
        id_type: Primitive,
        fields: Vec<EntityField>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            id_type,
            fields,
        }
    }

    /// Ids of every value object referenced by this entity's fields
    pub fn referenced_value_objects(&self) -> impl Iterator<Item = &NodeId> {
        self.fields.iter().filter_map(EntityField::vo_id)
    }
}
