//! Repository Implementations
//!
//! Concrete implementations of the `GraphStore` port.

mod json_graph_store;
mod memory;

pub use json_graph_store::{JsonGraphStore, STORE_DIR_VAR};
pub use memory::InMemoryGraphStore;
