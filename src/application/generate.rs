//! Generate Use Case
//!
//! Orchestrates the generate flow:
//! 1. Validate and emit (`CompileService`)
//! 2. Stop if findings reach the blocking severity
//! 3. Plan output against the output directory
//! 4. Write changed files (unless dry run)

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::entities::DomainGraph;
use crate::domain::ports::{CompileEvent, CompileEventSink, FileSystem, NoopEventSink};
use crate::domain::services::{duplicate_paths, ValidationReport};
use crate::domain::value_objects::Severity;
use crate::error::ArchlabResult;

use super::compiler::CompileService;
use super::output::{OutputPlan, OutputWriter, WriteResult};

/// Options for the generate operation
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub out_dir: PathBuf,
    /// Plan only, write nothing
    pub dry_run: bool,
    /// Findings at or above this severity block writing
    pub block_on: Option<Severity>,
    pub skip_unchanged: bool,
}

impl GenerateOptions {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            dry_run: false,
            block_on: None,
            skip_unchanged: true,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_block_on(mut self, block_on: Option<Severity>) -> Self {
        self.block_on = block_on;
        self
    }

    pub fn with_skip_unchanged(mut self, skip: bool) -> Self {
        self.skip_unchanged = skip;
        self
    }
}

/// Result of the generate operation
#[derive(Debug, Clone, Default)]
pub struct GenerateResult {
    pub report: ValidationReport,
    pub plan: OutputPlan,
    pub write: WriteResult,
    /// Findings reached `block_on`; nothing was planned or written
    pub blocked: bool,
    /// Paths produced by more than one node
    pub duplicate_paths: Vec<String>,
}

impl GenerateResult {
    pub fn is_success(&self) -> bool {
        !self.blocked && self.write.is_success()
    }
}

pub struct GenerateUseCase<FS: FileSystem> {
    compiler: CompileService,
    writer: OutputWriter<FS>,
}

impl<FS: FileSystem> GenerateUseCase<FS> {
    pub fn new(compiler: CompileService, file_system: FS) -> Self {
        Self {
            compiler,
            writer: OutputWriter::new(file_system),
        }
    }

    pub fn compiler(&self) -> &CompileService {
        &self.compiler
    }

    pub fn execute(
        &self,
        graph: &DomainGraph,
        options: &GenerateOptions,
    ) -> ArchlabResult<GenerateResult> {
        self.execute_with_events(graph, options, Arc::new(NoopEventSink))
    }

    pub fn execute_with_events(
        &self,
        graph: &DomainGraph,
        options: &GenerateOptions,
        events: Arc<dyn CompileEventSink>,
    ) -> ArchlabResult<GenerateResult> {
        let outcome = self.compiler.compile_with_events(graph, events.clone());
        let emitted = outcome.files.len();

        let mut result = GenerateResult {
            duplicate_paths: duplicate_paths(&outcome.files)
                .into_iter()
                .map(str::to_string)
                .collect(),
            report: outcome.report,
            ..GenerateResult::default()
        };

        if options
            .block_on
            .is_some_and(|threshold| result.report.fails(threshold))
        {
            result.blocked = true;
            events.on_event(CompileEvent::Completed {
                emitted,
                written: 0,
                unchanged: 0,
                errors: 0,
            });
            return Ok(result);
        }

        result.plan = self.writer.plan(&options.out_dir, &outcome.files)?;

        if !options.dry_run {
            result.write =
                self.writer
                    .write_with_events(&result.plan, options.skip_unchanged, events.clone());
        }

        events.on_event(CompileEvent::Completed {
            emitted,
            written: result.write.written.len(),
            unchanged: result.write.unchanged.len(),
            errors: result.write.errors.len(),
        });

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::output::FileChange;
    use crate::domain::entities::Aggregate;
    use crate::domain::ports::compile_events::testing::RecordingEventSink;
    use crate::domain::services::starter_graph;
    use crate::infrastructure::{CSharpEmitter, MemoryFs};
    use std::path::Path;

    fn use_case() -> GenerateUseCase<MemoryFs> {
        GenerateUseCase::new(
            CompileService::new(Box::new(CSharpEmitter::new())),
            MemoryFs::new(),
        )
    }

    fn broken_graph() -> DomainGraph {
        let mut graph = starter_graph();
        graph
            .aggregates
            .push(Aggregate::new("agg-2", "Broken", "nonexistent").with_invariants(["x"]));
        graph
    }

    #[test]
    fn writes_every_file_first_time() {
        let uc = use_case();
        let result = uc
            .execute(&starter_graph(), &GenerateOptions::new("gen"))
            .unwrap();

        assert!(result.is_success());
        assert_eq!(result.write.written.len(), 5);
        assert!(uc
            .writer
            .file_system()
            .exists(Path::new("gen/Domain/ValueObjects/Money.cs")));
    }

    #[test]
    fn second_run_is_all_unchanged() {
        let uc = use_case();
        let options = GenerateOptions::new("gen");
        uc.execute(&starter_graph(), &options).unwrap();

        let result = uc.execute(&starter_graph(), &options).unwrap();

        assert!(result.write.written.is_empty());
        assert_eq!(result.write.unchanged.len(), 5);
        assert_eq!(result.plan.count(FileChange::Unchanged), 5);
    }

    #[test]
    fn dry_run_writes_nothing() {
        let uc = use_case();
        let result = uc
            .execute(
                &starter_graph(),
                &GenerateOptions::new("gen").with_dry_run(true),
            )
            .unwrap();

        assert_eq!(result.plan.count(FileChange::New), 5);
        assert!(result.write.written.is_empty());
        assert!(uc.writer.file_system().paths().is_empty());
    }

    #[test]
    fn errors_block_when_requested() {
        let uc = use_case();
        let result = uc
            .execute(
                &broken_graph(),
                &GenerateOptions::new("gen").with_block_on(Some(Severity::Error)),
            )
            .unwrap();

        assert!(result.blocked);
        assert!(!result.is_success());
        assert!(uc.writer.file_system().paths().is_empty());
    }

    #[test]
    fn errors_do_not_block_by_default() {
        let result = use_case()
            .execute(&broken_graph(), &GenerateOptions::new("gen"))
            .unwrap();

        assert!(!result.blocked);
        assert!(result.report.has_errors());
        assert_eq!(result.write.written.len(), 6);
    }

    #[test]
    fn warnings_block_at_warning_threshold() {
        let mut graph = starter_graph();
        graph.repositories[0].methods.clear();

        let result = use_case()
            .execute(
                &graph,
                &GenerateOptions::new("gen").with_block_on(Some(Severity::Warning)),
            )
            .unwrap();

        assert!(result.blocked);
    }

    #[test]
    fn reports_duplicate_paths() {
        let mut graph = starter_graph();
        let mut twin = graph.entities[0].clone();
        twin.id = "entity-2".into();
        graph.entities.push(twin);

        let result = use_case()
            .execute(&graph, &GenerateOptions::new("gen"))
            .unwrap();

        assert_eq!(result.duplicate_paths, vec!["/Domain/Entities/Ride.cs"]);
    }

    #[test]
    fn duplicate_value_objects_settle_on_the_last_one() {
        use crate::domain::entities::{Field, ValueObject};
        use crate::domain::value_objects::Primitive;
        use crate::infrastructure::LocalFs;

        let dir = tempfile::tempdir().unwrap();
        let mut graph = DomainGraph::new("Shop");
        graph.value_objects.push(ValueObject::new(
            "vo-1",
            "Money",
            vec![Field::new("amount", Primitive::Decimal)],
        ));
        graph.value_objects.push(ValueObject::new(
            "vo-2",
            "Money",
            vec![Field::new("currency", Primitive::String)],
        ));
        let uc = GenerateUseCase::new(
            CompileService::new(Box::new(CSharpEmitter::new())),
            LocalFs::new(),
        );
        let options = GenerateOptions::new(dir.path());
        let target = dir.path().join("Domain/ValueObjects/Money.cs");

        for run in 1..=3 {
            let result = uc.execute(&graph, &options).unwrap();
            assert_eq!(result.duplicate_paths, vec!["/Domain/ValueObjects/Money.cs"]);

            let content = std::fs::read_to_string(&target).unwrap();
            assert!(content.contains("Currency"), "run {run}: {content}");
            assert!(!content.contains("Amount"), "run {run}: {content}");
        }
    }

    #[test]
    fn completed_event_counts_writes() {
        let (sink, events) = RecordingEventSink::new();
        use_case()
            .execute_with_events(&starter_graph(), &GenerateOptions::new("gen"), Arc::new(sink))
            .unwrap();

        let events = events.lock().unwrap();
        assert_eq!(
            events.last(),
            Some(&CompileEvent::Completed {
                emitted: 5,
                written: 5,
                unchanged: 0,
                errors: 0,
            })
        );
    }
}
