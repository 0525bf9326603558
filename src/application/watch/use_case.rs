//! Watch Use Case implementation

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::channel;
use std::sync::Arc;
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::application::generate::{GenerateOptions, GenerateUseCase};
use crate::application::snapshot::import_graph;
use crate::domain::entities::content_hash;
use crate::domain::ports::{CompileEventSink, FileSystem, NoopEventSink};
use crate::error::{ArchlabError, ArchlabResult};

use super::event::{WatchEvent, WatcherState};

/// Watch Use Case
///
/// Regenerates output whenever the snapshot file's content changes.
/// This is the main entry point for the `archlab watch` command.
pub struct WatchUseCase<FS: FileSystem> {
    snapshot: PathBuf,
    options: GenerateOptions,
    generate: GenerateUseCase<FS>,
    events: Arc<dyn CompileEventSink>,
}

impl<FS: FileSystem> WatchUseCase<FS> {
    pub fn new(snapshot: impl Into<PathBuf>, options: GenerateOptions, generate: GenerateUseCase<FS>) -> Self {
        Self {
            snapshot: snapshot.into(),
            options,
            generate,
            events: Arc::new(NoopEventSink),
        }
    }

    /// Forward compile events from each regeneration
    pub fn with_compile_events(mut self, events: Arc<dyn CompileEventSink>) -> Self {
        self.events = events;
        self
    }

    /// Start watching (blocking)
    ///
    /// Runs one generation immediately, then blocks until `running` is
    /// cleared. Snapshot errors are reported and the watch continues.
    pub fn start<F>(&self, running: Arc<AtomicBool>, on_event: F) -> ArchlabResult<()>
    where
        F: Fn(WatchEvent),
    {
        on_event(WatchEvent::WatchStarted {
            snapshot: self.snapshot.display().to_string(),
            out_dir: self.options.out_dir.display().to_string(),
        });

        let mut last_hash = self.run_once(&on_event);

        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                if let Ok(event) = res {
                    for path in event.paths {
                        let _ = tx.send(path);
                    }
                }
            },
            Config::default(),
        )
        .map_err(watch_error)?;

        // Editors often replace the file instead of writing it, so watch the
        // directory and filter by name.
        watcher
            .watch(watch_dir(&self.snapshot), RecursiveMode::NonRecursive)
            .map_err(watch_error)?;

        let mut state = WatcherState::new();
        while running.load(Ordering::SeqCst) {
            if let Ok(path) = rx.recv_timeout(Duration::from_millis(50)) {
                if is_same_file(&path, &self.snapshot) {
                    state.add_change();
                }
            }

            if state.should_run() {
                state.take();
                let Ok(text) = std::fs::read_to_string(&self.snapshot) else {
                    // Mid-replace; the next event will bring it back
                    continue;
                };
                let hash = content_hash(&text);
                if last_hash.as_deref() == Some(hash.as_str()) {
                    continue;
                }

                on_event(WatchEvent::SnapshotChanged {
                    path: self.snapshot.display().to_string(),
                });
                last_hash = self.run_once(&on_event);
            }
        }

        on_event(WatchEvent::Shutdown);
        Ok(())
    }

    /// Import and generate once; returns the hash of the text processed
    fn run_once(&self, on_event: &impl Fn(WatchEvent)) -> Option<String> {
        on_event(WatchEvent::GenerateStarted);

        let text = match std::fs::read_to_string(&self.snapshot) {
            Ok(text) => text,
            Err(e) => {
                on_event(WatchEvent::Error {
                    message: format!("{}: {}", self.snapshot.display(), e),
                });
                return None;
            }
        };
        let hash = content_hash(&text);

        let outcome = import_graph(&text).and_then(|graph| {
            self.generate
                .execute_with_events(&graph, &self.options, self.events.clone())
        });
        match outcome {
            Ok(result) => on_event(WatchEvent::GenerateComplete {
                errors: result.report.error_count(),
                warnings: result.report.warning_count(),
                written: result.write.written.len(),
                unchanged: result.write.unchanged.len(),
                blocked: result.blocked,
            }),
            Err(e) => on_event(WatchEvent::Error {
                message: e.to_string(),
            }),
        }

        Some(hash)
    }
}

fn watch_error(err: notify::Error) -> ArchlabError {
    ArchlabError::Watch {
        message: err.to_string(),
    }
}

fn watch_dir(snapshot: &Path) -> &Path {
    match snapshot.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn is_same_file(event_path: &Path, snapshot: &Path) -> bool {
    if event_path.file_name() != snapshot.file_name() {
        return false;
    }
    match (event_path.canonicalize(), snapshot.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        // The file may be gone for a moment during a replace
        _ => true,
    }
}
