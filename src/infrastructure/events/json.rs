//! JSON Event Sink
//!
//! Outputs compile events as NDJSON for CI/automation consumption.

use crate::domain::ports::{CompileEvent, CompileEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events
pub struct JsonEventSink {
    /// Command name stamped on every event
    command: &'static str,
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl CompileEventSink for JsonEventSink {
    fn on_event(&self, event: CompileEvent) {
        let command = self.command;
        let json = match event {
            CompileEvent::Started { graph, node_count } => {
                serde_json::json!({
                    "event": "start",
                    "command": command,
                    "graph": graph,
                    "node_count": node_count,
                })
            }

            CompileEvent::Validated { errors, warnings } => {
                serde_json::json!({
                    "event": "validated",
                    "command": command,
                    "errors": errors,
                    "warnings": warnings,
                })
            }

            CompileEvent::Finding {
                node_id,
                severity,
                message,
            } => {
                serde_json::json!({
                    "event": "finding",
                    "command": command,
                    "node_id": node_id,
                    "severity": severity.as_str(),
                    "message": message,
                })
            }

            CompileEvent::FileEmitted { index, path } => {
                serde_json::json!({
                    "event": "file_emitted",
                    "command": command,
                    "index": index,
                    "path": path,
                })
            }

            CompileEvent::FileWritten { index, path } => {
                serde_json::json!({
                    "event": "file_written",
                    "command": command,
                    "index": index,
                    "path": path,
                })
            }

            CompileEvent::FileUnchanged { index, path } => {
                serde_json::json!({
                    "event": "file_unchanged",
                    "command": command,
                    "index": index,
                    "path": path,
                })
            }

            CompileEvent::FileError { index, path, error } => {
                serde_json::json!({
                    "event": "file_error",
                    "command": command,
                    "index": index,
                    "path": path,
                    "error": error,
                })
            }

            CompileEvent::Completed {
                emitted,
                written,
                unchanged,
                errors,
            } => {
                let status = if errors == 0 { "success" } else { "partial" };
                serde_json::json!({
                    "event": "complete",
                    "command": command,
                    "status": status,
                    "emitted": emitted,
                    "written": written,
                    "unchanged": unchanged,
                    "errors": errors,
                })
            }
        };

        self.write_event(json);
    }
}
