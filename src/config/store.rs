//! Merged view of the global and project-local target definitions

use crate::config::types::TargetsFile;
use crate::error::{ConfigError, ConfigResult};
use std::collections::HashMap;

/// Targets and file variables after the global/local merge
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetStore {
    targets: HashMap<String, Vec<String>>,
    vars: HashMap<String, String>,
}

impl TargetStore {
    /// Overlay `local` on top of `global`, key by key.
    ///
    /// A local target replaces the global target of the same name as a whole;
    /// command lists are never concatenated. Variables follow the same rule.
    pub fn merge(global: TargetsFile, local: TargetsFile) -> Self {
        let mut targets = global.targets;
        targets.extend(local.targets);

        let mut vars = global.vars;
        vars.extend(local.vars);

        TargetStore { targets, vars }
    }

    /// Raw commands of a target, looked up by its literal name
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.targets.get(name).map(Vec::as_slice)
    }

    /// Like [`TargetStore::get`], failing with `UnknownTarget`
    pub fn require(&self, name: &str) -> ConfigResult<&[String]> {
        self.get(name)
            .ok_or_else(|| ConfigError::UnknownTarget(name.to_string()))
    }

    /// All target names, sorted
    pub fn target_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.targets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Merged file variables
    pub fn vars(&self) -> &HashMap<String, String> {
        &self.vars
    }

    /// Hand the merged file variables over to the variable layers
    pub fn into_vars(self) -> HashMap<String, String> {
        self.vars
    }
}
