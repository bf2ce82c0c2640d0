//! Command execution
//!
//! This module runs one already-resolved command string through the shell.

use crate::error::ProcessError;
use crate::runner::Context;
use std::process::{Command as StdCommand, Stdio};

/// A command that did not succeed
#[derive(Debug)]
pub struct CommandFailure {
    /// Everything the command wrote to stderr
    pub stderr: String,

    /// Exit status or launch error
    pub error: ProcessError,
}

/// Run `command` as `<shell> <flag> <command>`.
///
/// Stdin and stdout are inherited; stderr is captured and only surfaces in
/// the returned failure.
pub fn execute_command(command: &str, ctx: &Context) -> Result<(), CommandFailure> {
    let output = StdCommand::new(ctx.shell.program)
        .arg(ctx.shell.command_flag)
        .arg(command)
        .current_dir(&ctx.working_dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| CommandFailure {
            stderr: String::new(),
            error: ProcessError::Launch(e),
        })?;

    if !output.status.success() {
        let error = match output.status.code() {
            Some(code) => ProcessError::Exit(code),
            None => ProcessError::Signal,
        };
        return Err(CommandFailure {
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            error,
        });
    }

    Ok(())
}
