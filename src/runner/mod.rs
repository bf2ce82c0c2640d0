//! Target execution engine
//!
//! This module handles variable resolution, shell selection and the
//! sequential execution of target commands.

pub mod command;
pub mod context;
pub mod interpolate;
pub mod shell;
pub mod target;
pub mod vars;

// Re-export main types
pub use command::*;
pub use context::*;
pub use interpolate::*;
pub use shell::*;
pub use target::*;
pub use vars::*;
