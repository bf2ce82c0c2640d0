//! Torto - a tiny YAML-based target runner
//!
//! Targets are named lists of shell commands defined in a global
//! `~/torto.yml` and a project `torto.yml`. Commands may use `$NAME`
//! variables from the config files or from `NAME=value` arguments.

// Public modules
pub mod cli;
pub mod config;
pub mod error;
pub mod runner;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use error::{Result, TortoError};

/// Current version of Torto
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
