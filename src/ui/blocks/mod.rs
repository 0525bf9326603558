pub mod error;
pub mod finding;
pub mod header;
pub mod summary;
