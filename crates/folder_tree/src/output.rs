use std::fs;
use std::path::Path;

use crate::error::ScanError;

/// Writes `lines` to `path` as UTF-8 text, joined by `\n` with no trailing newline.
///
/// An existing file is overwritten.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<(), ScanError> {
    fs::write(path, lines.join("\n")).map_err(|source| ScanError::Write {
        path: path.to_path_buf(),
        source,
    })
}
