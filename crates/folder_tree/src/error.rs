use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures a scan can report to its caller.
///
/// Unreadable directories met during traversal are not errors, they only drop out of the tree.
#[derive(Error, Debug)]
pub enum ScanError {
    /// Source path is empty or not an existing directory.
    #[error("Please select a valid source folder.")]
    InvalidSource(PathBuf),

    #[error("Please select an output file path.")]
    MissingOutput,

    #[error("invalid exclude pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("unable to write `{}`", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    /// Whether the error was raised by input validation, before any scanning started.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidSource(_) | Self::MissingOutput)
    }
}
