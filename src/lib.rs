//! archlab - domain-model compiler
//!
//! archlab takes a graph of domain-modeling building blocks (value objects,
//! entities, aggregates, repositories, use cases), validates its structure,
//! and emits C# source for every node from fixed templates.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    export_graph, import_graph, read_snapshot, write_snapshot, CompileService, GenerateOptions,
    GenerateResult, GenerateUseCase, ProjectService, WatchEvent, WatchUseCase,
};
pub use config::Config;
pub use domain::entities::{
    Aggregate, DomainGraph, Entity, EntityField, Field, GeneratedFile, GraphMeta, IoShape,
    ProjectEntry, Repository, RepositoryMethod, UseCase, ValueObject,
};
pub use domain::ports::{CodeEmitter, CompileEvent, CompileEventSink, GraphStore, StoreError};
pub use domain::services::{
    camel, generate_all_code, pascal, starter_graph, validate, IdGenerator,
    SequentialIdGenerator, UuidIdGenerator, ValidationReport,
};
pub use domain::value_objects::{Edge, EdgeKind, Finding, NodeId, NodeKind, Primitive, Severity};
pub use error::{ArchlabError, ArchlabResult};
pub use infrastructure::{CSharpEmitter, InMemoryGraphStore, JsonGraphStore};
