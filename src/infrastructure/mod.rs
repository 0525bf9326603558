//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `emitters/` - code emitters (C#)
//! - `events/` - compile event sinks (JSON, console)
//! - `fs/` - file system implementations (local, in-memory)
//! - `repositories/` - project stores (JSON files, in-memory)

pub mod emitters;
pub mod events;
pub mod fs;
pub mod repositories;

// Re-export for convenience
pub use emitters::{all_emitters, get_emitter, CSharpEmitter};
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::{LocalFs, MemoryFs};
pub use repositories::{InMemoryGraphStore, JsonGraphStore};
