//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod code_emitter;
pub mod compile_events;
pub mod file_system;
pub mod graph_store;

pub use code_emitter::{kind_directory, CodeEmitter};
pub use compile_events::{CompileEvent, CompileEventSink, NoopEventSink};
pub use file_system::{FileSystem, FsError, FsResult};
pub use graph_store::{validate_project_name, GraphStore, StoreError};
