//! Error types for Torto

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Torto operations
pub type Result<T> = std::result::Result<T, TortoError>;

/// Main error type for Torto
#[derive(Error, Debug)]
pub enum TortoError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Command-line argument errors
    #[error("{0}")]
    Args(#[from] ArgsError),

    /// Target execution errors
    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),

    /// Variable interpolation errors
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Configuration loading and lookup errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file {} not found", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("could not determine the home directory")]
    HomeDirUnavailable,

    #[error("target {0} does not exist")]
    UnknownTarget(String),
}

impl ConfigError {
    /// Whether this error only means the file is absent
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::NotFound(_))
    }
}

/// Errors raised while turning raw arguments into a run
#[derive(Error, Debug)]
pub enum ArgsError {
    #[error("target missing. check usage with -h")]
    MissingTarget,

    #[error("could not determine executable path: {0}")]
    ExecutablePath(#[source] io::Error),

    #[error("invalid assignment pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Why a shell invocation did not succeed
#[derive(Error, Debug)]
pub enum ProcessError {
    /// The shell ran and exited with a non-zero code
    #[error("exit status {0}")]
    Exit(i32),

    /// The shell was killed by a signal
    #[error("terminated by signal")]
    Signal,

    #[error("failed to start shell: {0}")]
    Launch(#[source] io::Error),
}

/// Target execution errors
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("{target}: command '{command}' failed: {source}")]
    CommandFailed {
        target: String,
        command: String,
        stderr: String,
        #[source]
        source: ProcessError,
    },

    #[error("{target}: {source}")]
    Resolution {
        target: String,
        #[source]
        source: InterpolationError,
    },
}

/// Variable interpolation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InterpolationError {
    #[error("resolving '${variable}' exceeded the maximum depth of {limit} (self-referential variable?)")]
    DepthExceeded { variable: String, limit: usize },
}

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for argument parsing
pub type ArgsResult<T> = std::result::Result<T, ArgsError>;

/// Specialized result type for execution operations
pub type ExecutionResult<T> = std::result::Result<T, ExecutionError>;

/// Specialized result type for interpolation operations
pub type InterpolationResult<T> = std::result::Result<T, InterpolationError>;
