//! Terminal message formatting

use colored::Colorize;

/// Prefix for warnings
pub fn warning_prefix() -> String {
    "[WARN]".yellow().bold().to_string()
}

/// Prefix for errors
pub fn error_prefix() -> String {
    "[ERROR]".red().bold().to_string()
}

/// Prefix for debug messages
pub fn debug_prefix() -> String {
    "[DEBUG]".dimmed().to_string()
}

/// Format a top-level error for the user
pub fn format_fatal(message: &str) -> String {
    format!("{} {}", "Error:".red().bold(), message)
}

/// Failure line for a command, as `<target>: error executing '<command>': <stderr>`.
///
/// A newline is appended unless the captured stderr already ends with one.
pub fn format_command_failure(target: &str, command: &str, stderr: &str) -> String {
    let mut line = format!("{}: error executing '{}': {}", target, command, stderr);
    if !stderr.ends_with('\n') {
        line.push('\n');
    }
    line
}
