//! Common test utilities for archlab scenario and CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated working, home and store directories plus a CLI runner
//! - Assertion macros: `assert_generated!`, `assert_not_generated!`
//! - Fixtures: snapshot documents used across tests

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
