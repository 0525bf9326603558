//! Output planning and writing
//!
//! Generated paths are rooted (`/Domain/Entities/Ride.cs`); they are placed
//! beneath an output directory. A path that would resolve outside that
//! directory fails the whole plan before anything is written.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use crate::domain::entities::{content_hash, GeneratedFile};
use crate::domain::ports::{CompileEvent, CompileEventSink, FileSystem, NoopEventSink};
use crate::error::{ArchlabError, ArchlabResult};

/// How a generated file relates to what is on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileChange {
    /// No file at the target path
    New,
    /// File exists with different content
    Modified,
    /// File exists with identical content
    Unchanged,
}

impl FileChange {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileChange::New => "new",
            FileChange::Modified => "modified",
            FileChange::Unchanged => "unchanged",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlannedFile {
    pub file: GeneratedFile,
    /// Absolute or out-dir-relative location on disk
    pub target: PathBuf,
    pub change: FileChange,
    /// Current content on disk, if any
    pub existing: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct OutputPlan {
    pub root: PathBuf,
    pub files: Vec<PlannedFile>,
}

impl OutputPlan {
    pub fn count(&self, change: FileChange) -> usize {
        self.files.iter().filter(|f| f.change == change).count()
    }

    pub fn has_changes(&self) -> bool {
        self.files.iter().any(|f| f.change != FileChange::Unchanged)
    }

    /// Planned file for a generated path
    pub fn find(&self, path: &str) -> Option<&PlannedFile> {
        self.files.iter().find(|f| f.file.path == path)
    }
}

/// Outcome of writing a plan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteResult {
    pub written: Vec<String>,
    pub unchanged: Vec<String>,
    /// `(path, error)` per failed write
    pub errors: Vec<(String, String)>,
}

impl WriteResult {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Map a generated path below `root`
///
/// Leading separators are dropped; `..`, drive prefixes and empty paths are
/// rejected.
pub fn resolve_output_path(root: &Path, generated: &str) -> ArchlabResult<PathBuf> {
    let escape = || ArchlabError::PathEscape {
        path: generated.to_string(),
        root: root.to_path_buf(),
    };

    let relative = generated.trim_start_matches(['/', '\\']);
    let mut resolved = root.to_path_buf();
    let mut depth = 0usize;
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => {
                resolved.push(part);
                depth += 1;
            }
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(escape());
            }
        }
    }

    if depth == 0 {
        return Err(escape());
    }
    Ok(resolved)
}

pub struct OutputWriter<FS: FileSystem> {
    fs: FS,
}

impl<FS: FileSystem> OutputWriter<FS> {
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    pub fn file_system(&self) -> &FS {
        &self.fs
    }

    /// Compare `files` with the contents of `root`
    ///
    /// A path generated more than once is planned once, at its first
    /// position, with the content of its last occurrence.
    pub fn plan(&self, root: &Path, files: &[GeneratedFile]) -> ArchlabResult<OutputPlan> {
        let mut planned: Vec<PlannedFile> = Vec::with_capacity(files.len());
        let mut slots: HashMap<&str, usize> = HashMap::new();

        for file in files {
            let target = resolve_output_path(root, &file.path)?;
            let existing = if self.fs.exists(&target) {
                Some(self.fs.read(&target)?)
            } else {
                None
            };
            let change = match &existing {
                None => FileChange::New,
                Some(current) if content_hash(current) == file.content_hash() => {
                    FileChange::Unchanged
                }
                Some(_) => FileChange::Modified,
            };

            let entry = PlannedFile {
                file: file.clone(),
                target,
                change,
                existing,
            };
            match slots.get(file.path.as_str()) {
                Some(&slot) => planned[slot] = entry,
                None => {
                    slots.insert(file.path.as_str(), planned.len());
                    planned.push(entry);
                }
            }
        }

        Ok(OutputPlan {
            root: root.to_path_buf(),
            files: planned,
        })
    }

    pub fn write(&self, plan: &OutputPlan, skip_unchanged: bool) -> WriteResult {
        self.write_with_events(plan, skip_unchanged, Arc::new(NoopEventSink))
    }

    /// Write every planned file in order; a failed write does not stop the rest
    pub fn write_with_events(
        &self,
        plan: &OutputPlan,
        skip_unchanged: bool,
        events: Arc<dyn CompileEventSink>,
    ) -> WriteResult {
        let mut result = WriteResult::default();
        let detailed = events.wants_detailed_events();

        for (index, planned) in plan.files.iter().enumerate() {
            let path = planned.file.path.clone();

            if skip_unchanged && planned.change == FileChange::Unchanged {
                if detailed {
                    events.on_event(CompileEvent::FileUnchanged {
                        index,
                        path: path.clone(),
                    });
                }
                result.unchanged.push(path);
                continue;
            }

            match self.fs.write(&planned.target, &planned.file.content) {
                Ok(()) => {
                    if detailed {
                        events.on_event(CompileEvent::FileWritten {
                            index,
                            path: path.clone(),
                        });
                    }
                    result.written.push(path);
                }
                Err(e) => {
                    // Errors are always reported, even to quiet sinks
                    events.on_event(CompileEvent::FileError {
                        index,
                        path: path.clone(),
                        error: e.to_string(),
                    });
                    result.errors.push((path, e.to_string()));
                }
            }
        }

        result
    }
}
