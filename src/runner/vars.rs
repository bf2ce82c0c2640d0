//! Layered variable lookup
//!
//! Variables come from three places. Instead of overwriting one shared map in
//! a careful order, every source keeps its own layer and lookups walk the
//! layers from highest to lowest precedence.

use serde::Serialize;
use std::collections::HashMap;

/// Reserved key holding the residual free-text arguments
pub const CMD_VAR: &str = "CMD";

/// Reserved key holding the absolute path of the running executable
pub const BIN_VAR: &str = "BIN";

/// Where a variable layer comes from, highest precedence first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VarSource {
    /// `CMD` and `BIN`
    Reserved,
    /// `NAME=value` command-line arguments
    Caller,
    /// Merged `vars` of the config files
    File,
}

/// Ordered variable layers
#[derive(Debug, Clone, Default)]
pub struct Variables {
    // Kept sorted by source so index 0 is always the highest precedence.
    layers: Vec<(VarSource, HashMap<String, String>)>,
}

impl Variables {
    /// Create an empty set of layers
    pub fn new() -> Self {
        Variables { layers: Vec::new() }
    }

    /// Add (or replace) the layer for `source`
    pub fn with_layer(mut self, source: VarSource, vars: HashMap<String, String>) -> Self {
        self.layers.retain(|(s, _)| *s != source);
        self.layers.push((source, vars));
        self.layers.sort_by_key(|(s, _)| *s);
        self
    }

    /// Value of `name` from the highest layer that defines it
    pub fn get(&self, name: &str) -> Option<&str> {
        self.lookup(name).map(|(_, value)| value)
    }

    /// Like [`Variables::get`], also reporting which layer answered
    pub fn lookup(&self, name: &str) -> Option<(VarSource, &str)> {
        self.layers
            .iter()
            .find_map(|(source, vars)| vars.get(name).map(|v| (*source, v.as_str())))
    }

    /// Every defined name, each once.
    ///
    /// Longest names come first so that `$FOOBAR` is expanded before a
    /// shorter `$FOO` gets a chance to eat its prefix; ties are broken
    /// alphabetically to keep resolution deterministic.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .layers
            .iter()
            .flat_map(|(_, vars)| vars.keys().map(String::as_str))
            .collect();
        names.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        names.dedup();
        names
    }
}
