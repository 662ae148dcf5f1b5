//! Configuration for goban rendering
//!
//! Provides types, discovery and loading for `goban.toml`.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
