use std::path::PathBuf;

use crate::error::ScanError;

/// Exclude patterns suggested when the user gives none: hash sidecar files and temporary files.
pub const DEFAULT_EXCLUDE: &str = "*.hash,*.tmp";

/// Everything one scan needs. Built once by the front end and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    /// The directory to scan. Also printed verbatim as the first line of the snapshot.
    pub root: PathBuf,
    /// Where the snapshot is written.
    pub output: PathBuf,
    /// Globs matched against bare entry names, in the order given.
    pub patterns: Vec<String>,
}

impl ScanRequest {
    pub fn new(root: impl Into<PathBuf>, output: impl Into<PathBuf>, patterns: Vec<String>) -> Self {
        Self {
            root: root.into(),
            output: output.into(),
            patterns,
        }
    }

    /// Checks the inputs before any scanning happens.
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.root.as_os_str().is_empty() || !self.root.is_dir() {
            return Err(ScanError::InvalidSource(self.root.clone()));
        }
        if self.output.as_os_str().is_empty() {
            return Err(ScanError::MissingOutput);
        }
        Ok(())
    }
}

/// Splits a comma separated list of globs, trimming each one and dropping the empty ones.
pub fn parse_patterns(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}
