//! # Log Discovery
//!
//! Finds the snapshot directories under the logs root and the data files
//! inside each of them.

use std::fs;
use std::path::{Path, PathBuf};

use logcmp_common::error::SetupError;
use tracing::warn;
use walkdir::WalkDir;

/// A snapshot directory directly below the logs root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogDir {
    pub name: String,
    pub path: PathBuf,
}

/// Lists the child directories of `root`, sorted by name.
pub fn list_log_dirs(root: &Path) -> Result<Vec<LogDir>, SetupError> {
    let unreadable = |source: std::io::Error| SetupError::LogRootUnreadable {
        path: root.to_path_buf(),
        source,
    };

    let mut dirs: Vec<LogDir> = Vec::new();
    for entry in fs::read_dir(root).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        if !entry.path().is_dir() {
            continue;
        }
        dirs.push(LogDir {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.path(),
        });
    }

    if dirs.is_empty() {
        return Err(SetupError::NoLogDirectories(root.to_path_buf()));
    }

    dirs.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(dirs)
}

/// Recursively collects the files below `dir` whose name ends with `extension`.
///
/// Entries that cannot be walked are logged and skipped.
pub fn data_file_paths(dir: &Path, extension: &str) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("An error occurred while finding data files: {e}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(extension))
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

/// Like [`data_file_paths`], but an empty result is an error.
pub fn require_data_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, SetupError> {
    let files = data_file_paths(dir, extension);
    if files.is_empty() {
        return Err(SetupError::NoDataFiles {
            dir: dir.to_path_buf(),
            extension: extension.to_string(),
        });
    }
    Ok(files)
}

/// `path` relative to `root`, for display. Falls back to the full path.
pub fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
