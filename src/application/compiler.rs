//! Compile service
//!
//! Validation and emission in one pass. Both steps are pure; the service
//! only adds progress reporting through a `CompileEventSink`.

use std::sync::Arc;

use crate::domain::entities::{DomainGraph, GeneratedFile};
use crate::domain::ports::{CodeEmitter, CompileEvent, CompileEventSink, NoopEventSink};
use crate::domain::services::{generate_all_code, ValidationReport};

/// Findings and files for one graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOutcome {
    pub report: ValidationReport,
    pub files: Vec<GeneratedFile>,
}

impl CompileOutcome {
    /// Generated file with exactly this path (first match)
    pub fn file(&self, path: &str) -> Option<&GeneratedFile> {
        self.files.iter().find(|f| f.path == path)
    }
}

pub struct CompileService {
    emitter: Box<dyn CodeEmitter>,
}

impl CompileService {
    pub fn new(emitter: Box<dyn CodeEmitter>) -> Self {
        Self { emitter }
    }

    pub fn emitter(&self) -> &dyn CodeEmitter {
        self.emitter.as_ref()
    }

    pub fn compile(&self, graph: &DomainGraph) -> CompileOutcome {
        self.compile_with_events(graph, Arc::new(NoopEventSink))
    }

    /// Compile, reporting progress
    ///
    /// Emission runs regardless of findings; callers decide whether errors
    /// block writing.
    pub fn compile_with_events(
        &self,
        graph: &DomainGraph,
        events: Arc<dyn CompileEventSink>,
    ) -> CompileOutcome {
        events.on_event(CompileEvent::Started {
            graph: graph.meta.name.clone(),
            node_count: graph.node_count(),
        });

        let report = ValidationReport::of(graph);
        if events.wants_detailed_events() {
            for finding in &report.findings {
                events.on_event(CompileEvent::Finding {
                    node_id: finding.node_id.to_string(),
                    severity: finding.severity,
                    message: finding.message.clone(),
                });
            }
        }
        events.on_event(CompileEvent::Validated {
            errors: report.error_count(),
            warnings: report.warning_count(),
        });

        let files = generate_all_code(graph, self.emitter.as_ref());
        if events.wants_detailed_events() {
            for (index, file) in files.iter().enumerate() {
                events.on_event(CompileEvent::FileEmitted {
                    index,
                    path: file.path.clone(),
                });
            }
        }

        CompileOutcome { report, files }
    }
}
