//! Turning positional arguments into a target name and caller variables

use crate::error::{ArgsError, ArgsResult};
use crate::runner::{VarSource, Variables, BIN_VAR, CMD_VAR};
use regex::Regex;
use std::collections::HashMap;
use std::env;

/// `NAME=VALUE` with an alphanumeric name and a non-empty value
const ASSIGNMENT_PATTERN: &str = r"^([a-zA-Z0-9]+)=(.+)$";

/// What the positional arguments ask for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSpec {
    /// Literal target name (first non-assignment argument)
    pub target: String,

    /// `NAME=VALUE` arguments, last occurrence winning
    pub caller_vars: HashMap<String, String>,

    /// `CMD` and `BIN`
    pub reserved_vars: HashMap<String, String>,
}

impl RunSpec {
    /// Build the variable layers, with `file_vars` as the lowest layer
    pub fn variables(&self, file_vars: HashMap<String, String>) -> Variables {
        Variables::new()
            .with_layer(VarSource::Reserved, self.reserved_vars.clone())
            .with_layer(VarSource::Caller, self.caller_vars.clone())
            .with_layer(VarSource::File, file_vars)
    }
}

/// Parse positional arguments into a [`RunSpec`].
///
/// Arguments that look like `NAME=VALUE` become caller variables; the first
/// remaining argument is the target and the rest are joined with spaces into
/// `CMD`. `BIN` is the absolute path of the running executable.
pub fn parse_run_spec<S: AsRef<str>>(args: &[S]) -> ArgsResult<RunSpec> {
    let assignment = Regex::new(ASSIGNMENT_PATTERN)?;

    let mut caller_vars = HashMap::new();
    let mut residual = Vec::new();

    for arg in args {
        let arg = arg.as_ref();
        match assignment.captures(arg) {
            Some(caps) => {
                caller_vars.insert(caps[1].to_string(), caps[2].to_string());
            }
            None => residual.push(arg),
        }
    }

    let (target, rest) = residual.split_first().ok_or(ArgsError::MissingTarget)?;

    let bin = env::current_exe().map_err(ArgsError::ExecutablePath)?;

    let mut reserved_vars = HashMap::new();
    reserved_vars.insert(CMD_VAR.to_string(), rest.join(" "));
    reserved_vars.insert(BIN_VAR.to_string(), bin.to_string_lossy().into_owned());

    Ok(RunSpec {
        target: target.to_string(),
        caller_vars,
        reserved_vars,
    })
}
