//! Domain Entities
//!
//! The graph model and the files produced from it.
//! - `DomainGraph` - the five building-block collections plus metadata
//! - `ValueObject`, `Entity`, `Aggregate`, `Repository`, `UseCase` - graph nodes
//! - `GeneratedFile` - an emitted source file
//! - `ProjectEntry` - summary of a stored project

mod aggregate;
mod entity;
mod generated_file;
mod graph;
mod project_entry;
mod repository;
mod use_case;
mod value_object;

pub use aggregate::Aggregate;
pub use entity::{Entity, EntityField};
pub use generated_file::{content_hash, GeneratedFile};
pub use graph::{DomainGraph, GraphMeta, DEFAULT_GRAPH_NAME};
pub use project_entry::ProjectEntry;
pub use repository::{Repository, RepositoryMethod};
pub use use_case::{IoShape, UseCase};
pub use value_object::{Field, ValueObject};
