//! Log file discovery
//!
//! Walks an input directory tree and yields every station log file in
//! lexical order, so repeated runs over the same tree produce identical
//! output.

use crate::constants::LOG_FILE_SUFFIX;
use crate::error::{ConvertError, Result};
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Check the input root is reachable before any work starts
pub fn check_input_root(root: &Path) -> Result<()> {
    std::fs::metadata(root)
        .map(|_| ())
        .map_err(|source| ConvertError::DirectoryAccess {
            path: root.to_path_buf(),
            source,
        })
}

/// Iterate over all station log files below `root`.
///
/// Entries that cannot be read below the root are logged and skipped.
/// Symlinks are not followed.
pub fn log_files(root: &Path) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Cannot access {}", e);
                None
            }
        })
        .filter(|entry| !entry.file_type().is_dir() && is_log_file(entry.path()))
        .map(|entry| entry.into_path())
}

/// Check if a path names a station log file
fn is_log_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(LOG_FILE_SUFFIX))
}
