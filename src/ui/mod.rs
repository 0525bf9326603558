//! Terminal and JSON presentation for the CLI
//!
//! Views render to `String`s; commands decide where they go. Every view
//! takes `supports_color` / `supports_unicode` so output degrades to plain
//! ASCII.

pub mod blocks;
pub mod ci;
pub mod components;
pub mod context;
pub mod error;
pub mod json;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
