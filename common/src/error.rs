//! # Error Types
//!
//! Errors are split by how far they reach:
//!
//! * [`SetupError`] stops the run before any log file is read.
//! * [`FileError`] only costs the data of one file. The pipeline keeps going
//!   and surfaces it as a possible data loss.
//! * [`OrderingError`] concerns a single value inside a sort and is handled
//!   by the sorter itself.
//! * [`SelectionError`] rejects operator input so the prompt can ask again.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("cannot read log root {}: {source}", path.display())]
    LogRootUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no child directories found in {}", .0.display())]
    NoLogDirectories(PathBuf),

    #[error("no '{extension}' data files found in {}", dir.display())]
    NoDataFiles { dir: PathBuf, extension: String },

    #[error("unknown log directory '{0}'")]
    UnknownLogDirectory(String),

    #[error("old and new logs must be different directories, got '{0}' twice")]
    SameLogDirectory(String),
}

#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("error reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not valid UTF-8. `valid_up_to` is the byte offset of the
    /// first bad sequence.
    #[error("error decoding {} at byte {valid_up_to}: not valid UTF-8", path.display())]
    Decode { path: PathBuf, valid_up_to: usize },
}

impl FileError {
    pub fn path(&self) -> &PathBuf {
        match self {
            FileError::Read { path, .. } | FileError::Decode { path, .. } => path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderingError {
    #[error("'{value}' has non-numeric segment '{segment}'")]
    NonNumericSegment { value: String, segment: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("please enter an integer between 1 and {max}")]
    OutOfRange { max: usize },

    #[error("'{0}' is not a valid option")]
    Invalid(String),

    #[error("you have already chosen this option, please choose another")]
    AlreadyChosen,
}
