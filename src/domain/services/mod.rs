//! Domain Services
//!
//! Stateless operations over the graph model.
//! - `validator` - structural and modeling checks
//! - `generator` - whole-graph emission through a `CodeEmitter`
//! - `naming` - case transforms for generated identifiers
//! - `id_generator` - explicit id sources for new nodes
//! - `starter` - the sample graph new projects start from

pub mod generator;
pub mod id_generator;
pub mod naming;
pub mod starter;
pub mod validator;

pub use generator::{duplicate_paths, generate_all_code};
pub use id_generator::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use naming::{camel, pascal};
pub use starter::{starter_graph, STARTER_GRAPH_NAME};
pub use validator::{validate, ValidationReport};
