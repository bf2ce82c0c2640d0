//! CLI interface and argument parsing
//!
//! This module handles command-line parsing, the `NAME=VALUE` argument
//! convention and shell completion output.

pub mod app;
pub mod run_spec;

// Re-export main types
pub use app::*;
pub use run_spec::*;
