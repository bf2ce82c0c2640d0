//! Configuration file loading and the global/local merge

use crate::config::store::TargetStore;
use crate::config::types::TargetsFile;
use crate::error::{ConfigError, ConfigResult};
use crate::utils::expand_home;
use std::fs;
use std::io;
use std::path::Path;

/// Project-local configuration file, relative to the working directory
pub const LOCAL_CONFIG_FILE: &str = "torto.yml";

/// User-global configuration file
pub const GLOBAL_CONFIG_FILE: &str = "~/torto.yml";

/// Which of the two sources a file was loaded as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Global,
    Local,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Global => write!(f, "global"),
            ConfigSource::Local => write!(f, "local"),
        }
    }
}

/// Result of loading both sources
#[derive(Debug)]
pub struct LoadReport {
    /// The merged definitions
    pub store: TargetStore,

    /// Sources that failed to load and were treated as empty
    pub skipped: Vec<(ConfigSource, ConfigError)>,
}

/// Parse one configuration source from a string
pub fn parse_targets(yaml: &str, path: &Path) -> ConfigResult<TargetsFile> {
    if yaml.trim().is_empty() {
        return Ok(TargetsFile::default());
    }

    serde_yaml::from_str(yaml).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load one configuration source; `~` in the path is expanded
pub fn load_targets_file(path: &Path) -> ConfigResult<TargetsFile> {
    let path = expand_home(path).ok_or(ConfigError::HomeDirUnavailable)?;

    let contents = fs::read_to_string(&path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ConfigError::NotFound(path.clone()),
        _ => ConfigError::Read {
            path: path.clone(),
            source: e,
        },
    })?;

    parse_targets(&contents, &path)
}

/// Load the global and local sources and merge them.
///
/// A source that fails to load counts as empty. When both fail, the local
/// error is returned.
pub fn load_target_store(local_path: &Path, global_path: &Path) -> ConfigResult<LoadReport> {
    let global = load_targets_file(global_path);
    let local = load_targets_file(local_path);

    let mut skipped = Vec::new();
    let (global, local) = match (global, local) {
        (Err(_), Err(local_err)) => return Err(local_err),
        (Ok(global), Ok(local)) => (global, local),
        (Err(e), Ok(local)) => {
            skipped.push((ConfigSource::Global, e));
            (TargetsFile::default(), local)
        }
        (Ok(global), Err(e)) => {
            skipped.push((ConfigSource::Local, e));
            (global, TargetsFile::default())
        }
    };

    Ok(LoadReport {
        store: TargetStore::merge(global, local),
        skipped,
    })
}
