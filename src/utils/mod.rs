//! Small filesystem helpers

use directories::BaseDirs;
use std::path::{Path, PathBuf};

/// Expand a leading `~` to the invoking user's home directory.
///
/// Paths without a leading `~` are returned unchanged. Returns `None` when the
/// path needs a home directory and none can be determined.
pub fn expand_home(path: &Path) -> Option<PathBuf> {
    let rest = match path.strip_prefix("~") {
        Ok(rest) => rest,
        Err(_) => return Some(path.to_path_buf()),
    };

    let base_dirs = BaseDirs::new()?;
    Some(base_dirs.home_dir().join(rest))
}
