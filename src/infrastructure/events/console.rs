//! Console Event Sink
//!
//! Plain progress lines on stderr. At verbosity 0 only failures are shown;
//! `-v` adds one line per file.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{CompileEvent, CompileEventSink};

pub struct ConsoleEventSink {
    verbosity: u8,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stderr(verbosity: u8) -> Self {
        Self::with_writer(verbosity, io::stderr())
    }

    pub fn with_writer<W: Write + Send + 'static>(verbosity: u8, writer: W) -> Self {
        Self {
            verbosity,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn line(&self, text: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{text}");
        }
    }

    /// Line for `event`, if it is shown at this verbosity
    fn render(&self, event: CompileEvent) -> Option<String> {
        let detailed = self.verbosity >= 1;
        match event {
            CompileEvent::FileError { path, error, .. } => {
                Some(format!("error: failed to write {path}: {error}"))
            }
            CompileEvent::Started { graph, node_count } if detailed => {
                Some(format!("compiling '{graph}' ({node_count} nodes)"))
            }
            CompileEvent::Validated { errors, warnings } if detailed => {
                Some(format!("validated: {errors} error(s), {warnings} warning(s)"))
            }
            CompileEvent::FileWritten { path, .. } if detailed => Some(format!("  wrote {path}")),
            CompileEvent::FileUnchanged { path, .. } if self.verbosity >= 2 => {
                Some(format!("  unchanged {path}"))
            }
            CompileEvent::FileEmitted { path, .. } if self.verbosity >= 3 => {
                Some(format!("  emitted {path}"))
            }
            _ => None,
        }
    }
}

impl CompileEventSink for ConsoleEventSink {
    fn on_event(&self, event: CompileEvent) {
        if let Some(text) = self.render(event) {
            self.line(text);
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbosity >= 1
    }
}
