//! Event Sink Implementations
//!
//! Provides concrete implementations of CompileEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - ConsoleEventSink: human-readable progress on stderr

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::JsonEventSink;
