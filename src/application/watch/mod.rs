//! Watch Use Case
//!
//! Regenerates output whenever a snapshot file changes:
//! - File system monitoring (via `notify` crate)
//! - Debouncing (100ms default)
//! - Content hashing so saves without changes do nothing
//!
//! ## Usage
//!
//! ```ignore
//! let use_case = WatchUseCase::new(snapshot, options, generate);
//! use_case.start(running, |event| { ... });
//! ```

mod event;
mod use_case;

pub use event::{WatchEvent, WatcherState, DEBOUNCE_MS};
pub use use_case::WatchUseCase;
