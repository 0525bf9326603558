//! Domain Layer
//!
//! The graph model, its validator and the emitter contract - pure logic
//! without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - the graph and its building blocks, plus generated files
//! - `value_objects/` - ids, primitives, findings, edges
//! - `services/` - validator, naming, id generation, starter graph
//! - `ports/` - interfaces implemented by infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Validation and emission are total and side-effect free
//! 3. **Ports & Adapters** - Emitters, storage and events go through traits

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
