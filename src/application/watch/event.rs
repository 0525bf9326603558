//! Watch event types and debounce state

use std::time::{Duration, Instant};

/// Debounce duration in milliseconds
pub const DEBOUNCE_MS: u64 = 100;

/// Watch event types for NDJSON output
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    /// Watch started
    WatchStarted { snapshot: String, out_dir: String },
    /// Snapshot content changed
    SnapshotChanged { path: String },
    /// Regeneration started
    GenerateStarted,
    /// Regeneration completed
    GenerateComplete {
        errors: usize,
        warnings: usize,
        written: usize,
        unchanged: usize,
        blocked: bool,
    },
    /// Error occurred (the watch keeps running)
    Error { message: String },
    /// Watch stopped
    Shutdown,
}

impl WatchEvent {
    /// Convert to JSON string with "command": "watch" field included
    pub fn to_json(&self) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!("watch"));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Debounce state: a change is acted on once no further change has arrived
/// for `DEBOUNCE_MS`
#[derive(Debug, Default)]
pub struct WatcherState {
    last_change: Option<Instant>,
}

impl WatcherState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_change(&mut self) {
        self.last_change = Some(Instant::now());
    }

    pub fn has_pending(&self) -> bool {
        self.last_change.is_some()
    }

    /// Check if the debounce period has passed with a change pending
    pub fn should_run(&self) -> bool {
        self.last_change
            .is_some_and(|last| last.elapsed() >= Duration::from_millis(DEBOUNCE_MS))
    }

    pub fn take(&mut self) -> bool {
        self.last_change.take().is_some()
    }
}
