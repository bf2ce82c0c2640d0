//! Target execution
//!
//! A target is an ordered list of raw commands. Running it resolves and
//! executes each command in turn, applying the force/debug policy of the
//! context.

use crate::config::TargetStore;
use crate::error::{ConfigResult, ExecutionError, ExecutionResult, InterpolationResult};
use crate::runner::{execute_command, interpolate, Context, Variables};

/// Runtime target representation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Name as given on the command line, used for lookup
    pub name: String,

    /// Name after variable resolution, used in messages
    pub display_name: String,

    /// Raw commands in execution order
    pub commands: Vec<String>,
}

/// What happened to one command
#[derive(Debug)]
pub enum CommandOutcome {
    /// The command ran and exited successfully
    Succeeded(String),

    /// Debug mode: the invocation was printed, not run
    Printed(String),

    /// The command failed and force mode carried on
    Tolerated(ExecutionError),
}

/// Outcome of every command of a completed run
#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<CommandOutcome>,
}

impl RunReport {
    /// Failures that force mode let through
    pub fn tolerated(&self) -> impl Iterator<Item = &ExecutionError> {
        self.outcomes.iter().filter_map(|o| match o {
            CommandOutcome::Tolerated(e) => Some(e),
            _ => None,
        })
    }

    pub fn is_clean(&self) -> bool {
        self.tolerated().next().is_none()
    }
}

impl Target {
    /// Create a target from its literal name and raw commands
    pub fn new(name: impl Into<String>, commands: Vec<String>) -> Self {
        let name = name.into();
        Target {
            display_name: name.clone(),
            name,
            commands,
        }
    }

    /// Look a target up in the merged definitions by its literal name
    pub fn from_store(store: &TargetStore, name: &str) -> ConfigResult<Self> {
        Ok(Target::new(name, store.require(name)?.to_vec()))
    }

    /// Resolve variables in the target name for display
    pub fn resolve_name(mut self, vars: &Variables) -> InterpolationResult<Self> {
        self.display_name = interpolate(&self.name, vars)?;
        Ok(self)
    }

    /// Execute the target in the given context
    pub fn execute(&self, vars: &Variables, ctx: &Context) -> ExecutionResult<RunReport> {
        let mut report = RunReport::default();

        ctx.print_debug(&format!(
            "Running target '{}' ({} commands)",
            self.display_name,
            self.commands.len()
        ));

        for raw in &self.commands {
            let command = interpolate(raw, vars).map_err(|source| ExecutionError::Resolution {
                target: self.display_name.clone(),
                source,
            })?;

            if ctx.debug {
                println!("{}", ctx.shell.render(&command));
                report.outcomes.push(CommandOutcome::Printed(command));
                continue;
            }

            ctx.print_debug(&format!("Executing: {}", command));

            match execute_command(&command, ctx) {
                Ok(()) => report.outcomes.push(CommandOutcome::Succeeded(command)),
                Err(failure) => {
                    ctx.print_command_failure(&self.display_name, &command, &failure.stderr);
                    if ctx.force {
                        ctx.print_error(&failure.error.to_string());
                    }

                    let err = ExecutionError::CommandFailed {
                        target: self.display_name.clone(),
                        command,
                        stderr: failure.stderr,
                        source: failure.error,
                    };

                    if !ctx.force {
                        return Err(err);
                    }
                    report.outcomes.push(CommandOutcome::Tolerated(err));
                }
            }
        }

        ctx.print_debug(&format!("Target completed: {}", self.display_name));
        Ok(report)
    }
}
