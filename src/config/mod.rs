//! Configuration loading and merging
//!
//! This module handles parsing of torto.yml files and merging the
//! user-global definitions with the project-local ones.

pub mod parse;
pub mod store;
pub mod types;

// Re-export main types
pub use parse::*;
pub use store::*;
pub use types::*;
