//! Code emitters
//!
//! Implementations of the `CodeEmitter` port. Each emitter turns graph nodes
//! into source text for one target language.

pub mod csharp;

pub use csharp::CSharpEmitter;

use crate::domain::ports::CodeEmitter;

/// Get all available emitters
pub fn all_emitters() -> Vec<Box<dyn CodeEmitter>> {
    vec![Box::new(CSharpEmitter::new())]
}

/// Look up an emitter by language name or file extension (case-insensitive)
pub fn get_emitter(name: &str) -> Option<Box<dyn CodeEmitter>> {
    all_emitters().into_iter().find(|emitter| {
        emitter.language().eq_ignore_ascii_case(name)
            || emitter.file_extension().eq_ignore_ascii_case(name)
    })
}
