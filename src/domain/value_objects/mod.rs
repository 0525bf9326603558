//! Domain Value Objects
//!
//! Immutable value types shared by the graph model, validator and emitters.

mod edge;
mod finding;
mod node_id;
mod node_kind;
mod primitive;

pub use edge::{Edge, EdgeKind};
pub use finding::{Finding, Severity};
pub use node_id::NodeId;
pub use node_kind::NodeKind;
pub use primitive::{Primitive, UnknownPrimitive};
