//! Compile Event Port
//!
//! Observable progress for validate / emit / write runs.
//! Enables console progress, JSON event streams, and debugging.

use crate::domain::value_objects::Severity;

/// Event emitted while compiling a graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileEvent {
    /// Compilation started
    Started { graph: String, node_count: usize },

    /// Validation finished
    Validated { errors: usize, warnings: usize },

    /// A single finding (only sent to sinks that want detail)
    Finding {
        node_id: String,
        severity: Severity,
        message: String,
    },

    /// A file was rendered
    FileEmitted { index: usize, path: String },

    /// A file was written to disk
    FileWritten { index: usize, path: String },

    /// A file on disk already had the generated content
    FileUnchanged { index: usize, path: String },

    /// Writing a file failed
    FileError {
        index: usize,
        path: String,
        error: String,
    },

    /// Run completed
    Completed {
        emitted: usize,
        written: usize,
        unchanged: usize,
        errors: usize,
    },
}

/// Trait for receiving compile events
///
/// Implementations:
/// - `ConsoleEventSink`: progress lines on stderr
/// - `JsonEventSink`: NDJSON event stream for CI
/// - `NoopEventSink`: silent operation
pub trait CompileEventSink: Send + Sync {
    fn on_event(&self, event: CompileEvent);

    /// Whether per-file and per-finding events should be sent
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// Sink that drops every event
pub struct NoopEventSink;

impl CompileEventSink for NoopEventSink {
    fn on_event(&self, _event: CompileEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
