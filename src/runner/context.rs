//! Execution context for target runs
//!
//! The context carries the run policy (force, debug), the shell and the
//! verbosity used for log messages.

use crate::runner::Shell;
use crate::ui;
use std::env;
use std::path::PathBuf;

/// Settings that apply to every command of a run
pub struct Context {
    /// Working directory for spawned shells
    pub working_dir: PathBuf,

    /// Keep going after a failing command
    pub force: bool,

    /// Print invocations instead of running them
    pub debug: bool,

    /// Shell used for every command
    pub shell: Shell,

    /// Verbosity level
    pub verbosity: Verbosity,
}

/// Verbosity levels for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Silent = 0,
    Quiet = 1,
    Normal = 2,
    Verbose = 3,
}

impl Context {
    /// Create a new context with default settings
    pub fn new() -> Self {
        Context {
            working_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            force: false,
            debug: false,
            shell: Shell::host(),
            verbosity: Verbosity::Normal,
        }
    }

    /// Create a context with a specific working directory
    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = dir;
        self
    }

    /// Tolerate failing commands
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Only print what would run
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Set the shell
    pub fn with_shell(mut self, shell: Shell) -> Self {
        self.shell = shell;
        self
    }

    /// Set verbosity level
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Print warning message
    pub fn print_warning(&self, message: &str) {
        if self.verbosity >= Verbosity::Normal {
            eprintln!("{} {}", ui::warning_prefix(), message);
        }
    }

    /// Print error message
    pub fn print_error(&self, message: &str) {
        if self.verbosity >= Verbosity::Quiet {
            eprintln!("{} {}", ui::error_prefix(), message);
        }
    }

    /// Print debug message (only in verbose mode)
    pub fn print_debug(&self, message: &str) {
        if self.verbosity >= Verbosity::Verbose {
            eprintln!("{} {}", ui::debug_prefix(), message);
        }
    }

    /// Print the failure line of a command
    ///
    /// Goes to stderr, so piping stdout only captures the commands' own output.
    pub fn print_command_failure(&self, target: &str, command: &str, stderr: &str) {
        if self.verbosity >= Verbosity::Quiet {
            eprint!("{}", ui::format_command_failure(target, command, stderr));
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
