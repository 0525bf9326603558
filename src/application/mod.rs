//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CompileService` - validate and emit with progress events
//! - `GenerateUseCase` - compile, plan and write output files
//! - `WatchUseCase` - regenerate when a snapshot changes
//! - `ProjectService` - named snapshots in a project store
//!
//! ## Services
//!
//! - `export_graph` / `import_graph` - snapshot codec
//! - `OutputWriter` - plan and write generated files under an output directory

pub mod compiler;
pub mod generate;
pub mod output;
pub mod projects;
pub mod snapshot;
pub mod watch;

pub use compiler::{CompileOutcome, CompileService};
pub use generate::{GenerateOptions, GenerateResult, GenerateUseCase};
pub use output::{resolve_output_path, FileChange, OutputPlan, OutputWriter, PlannedFile, WriteResult};
pub use projects::ProjectService;
pub use snapshot::{export_graph, import_graph, read_snapshot, write_snapshot};
pub use watch::{WatchEvent, WatchUseCase, WatcherState, DEBOUNCE_MS};
