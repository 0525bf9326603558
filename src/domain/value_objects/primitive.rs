//! Primitive value object - the closed set of scalar field types

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Scalar type of a field
///
/// The serialized spelling matches the snapshot format exactly
/// (`"Guid"` and `"DateTime"` are capitalized, the rest are lowercase).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Primitive {
    #[serde(rename = "string")]
    String,
    #[serde(rename = "int")]
    Int,
    #[serde(rename = "decimal")]
    Decimal,
    #[serde(rename = "Guid")]
    Guid,
    #[serde(rename = "DateTime")]
    DateTime,
    #[serde(rename = "bool")]
    Bool,
}

impl Primitive {
    /// Every primitive, in declaration order
    pub const ALL: [Primitive; 6] = [
        Primitive::String,
        Primitive::Int,
        Primitive::Decimal,
        Primitive::Guid,
        Primitive::DateTime,
        Primitive::Bool,
    ];

    /// Spelling used in snapshots
    pub fn as_str(&self) -> &'static str {
        match self {
            Primitive::String => "string",
            Primitive::Int => "int",
            Primitive::Decimal => "decimal",
            Primitive::Guid => "Guid",
            Primitive::DateTime => "DateTime",
            Primitive::Bool => "bool",
        }
    }

    /// Whether values of this type are generated identifiers
    pub fn is_guid(&self) -> bool {
        matches!(self, Primitive::Guid)
    }
}

impl std::fmt::Display for Primitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text does not name a primitive
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown primitive type '{0}' (expected one of: string, int, decimal, Guid, DateTime, bool)")]
pub struct UnknownPrimitive(pub String);

impl FromStr for Primitive {
    type Err = UnknownPrimitive;

    /// Case-insensitive, so `guid` and `datetime` are accepted on the command line
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Primitive::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPrimitive(s.to_string()))
    }
}
