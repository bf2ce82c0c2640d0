//! Core configuration types
//!
//! This module defines the data structures that represent a torto.yml configuration file.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One configuration source (global `~/torto.yml` or project `torto.yml`)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TargetsFile {
    /// Target name to ordered list of raw commands
    #[serde(default, deserialize_with = "deserialize_targets")]
    pub targets: HashMap<String, Vec<String>>,

    /// Variable name to replacement value
    #[serde(default, deserialize_with = "deserialize_vars")]
    pub vars: HashMap<String, String>,
}

/// Render a YAML scalar as the text a variable or command should carry
fn scalar_to_string(value: serde_yaml::Value) -> Option<String> {
    use serde_yaml::Value;

    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Custom deserializer for targets that handles both single commands and lists
fn deserialize_targets<'de, D>(deserializer: D) -> Result<HashMap<String, Vec<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    use serde_yaml::Value;

    let value = Value::deserialize(deserializer)?;

    let mapping = match value {
        Value::Mapping(mapping) => mapping,
        // `targets:` with nothing under it
        Value::Null => return Ok(HashMap::new()),
        _ => return Err(D::Error::custom("targets must be a mapping")),
    };

    let mut targets = HashMap::new();
    for (name, commands) in mapping {
        let name = scalar_to_string(name)
            .ok_or_else(|| D::Error::custom("target names must be scalars"))?;

        let commands = match commands {
            Value::Sequence(seq) => {
                let mut cmds = Vec::with_capacity(seq.len());
                for item in seq {
                    let cmd = scalar_to_string(item).ok_or_else(|| {
                        D::Error::custom(format!("target '{}': commands must be strings", name))
                    })?;
                    cmds.push(cmd);
                }
                cmds
            }
            Value::Null => Vec::new(),
            other => vec![scalar_to_string(other).ok_or_else(|| {
                D::Error::custom(format!(
                    "target '{}' must be a command or a list of commands",
                    name
                ))
            })?],
        };

        targets.insert(name, commands);
    }

    Ok(targets)
}

/// Custom deserializer for vars that accepts any scalar value
fn deserialize_vars<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    use serde_yaml::Value;

    let value = Value::deserialize(deserializer)?;

    let mapping = match value {
        Value::Mapping(mapping) => mapping,
        Value::Null => return Ok(HashMap::new()),
        _ => return Err(D::Error::custom("vars must be a mapping")),
    };

    let mut vars = HashMap::new();
    for (name, val) in mapping {
        let name = scalar_to_string(name)
            .ok_or_else(|| D::Error::custom("variable names must be scalars"))?;
        let val = match val {
            Value::Null => String::new(),
            other => scalar_to_string(other).ok_or_else(|| {
                D::Error::custom(format!("variable '{}' must be a scalar value", name))
            })?,
        };
        vars.insert(name, val);
    }

    Ok(vars)
}
