use std::fs::{self, DirEntry};
use std::io;
use std::path::Path;

use tracing::{debug, info, trace};

use crate::error::ScanError;
use crate::pattern::ExcludeSet;
use crate::request::ScanRequest;

/// Connector for an entry followed by more siblings.
pub const BRANCH: &str = "├── ";
/// Connector for the last entry of a listing.
pub const LAST_BRANCH: &str = "└── ";
/// Indent segment below an entry that has more siblings after it.
pub const PIPE_INDENT: &str = "│   ";
/// Indent segment below the last entry of a listing.
pub const BLANK_INDENT: &str = "    ";

/// Builds the full snapshot for `request`: the root path as given, then the rendered tree below it.
///
/// Does not validate the request, see [`ScanRequest::validate`].
pub fn snapshot(request: &ScanRequest) -> Result<Vec<String>, ScanError> {
    let excludes = ExcludeSet::new(request.patterns.as_slice())?;
    info!(root = %request.root.display(), patterns = ?request.patterns, "scanning");
    let mut lines = vec![request.root.display().to_string()];
    lines.extend(render(&request.root, &excludes));
    info!(lines = lines.len(), "scan finished");
    Ok(lines)
}

/// Renders the tree below `dir`, one line per visible entry, depth first in name order.
///
/// The root itself gets no line. Directories that cannot be listed contribute nothing.
///
/// Whether an entry is drawn as the last one is decided by its position in the full sorted
/// listing, before exclusions are applied. So when the last entry of a listing is excluded, the
/// last visible one keeps the [`BRANCH`] connector.
pub fn render(dir: &Path, excludes: &ExcludeSet) -> Vec<String> {
    let mut lines = vec![];
    render_into(dir, excludes, "", &mut lines);
    lines
}

fn render_into(dir: &Path, excludes: &ExcludeSet, prefix: &str, lines: &mut Vec<String>) {
    let entries = match sorted_entries(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            debug!(path = %dir.display(), "permission denied, skipping");
            return;
        }
        Err(e) => {
            debug!(path = %dir.display(), error = %e, "unable to list, skipping");
            return;
        }
    };
    let last = entries.len().saturating_sub(1);
    for (index, entry) in entries.iter().enumerate() {
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if excludes.is_match(&name) {
            trace!(path = %entry.path().display(), "excluded");
            continue;
        }
        let is_last = index == last;
        let connector = if is_last { LAST_BRANCH } else { BRANCH };
        lines.push(format!("{prefix}{connector}{name}"));

        // Follows symlinks.
        let path = entry.path();
        if path.is_dir() {
            let indent = if is_last { BLANK_INDENT } else { PIPE_INDENT };
            render_into(&path, excludes, &format!("{prefix}{indent}"), lines);
        }
    }
}

/// Lists `dir` sorted by raw name. Entries that fail to read are dropped.
fn sorted_entries(dir: &Path) -> io::Result<Vec<DirEntry>> {
    let mut entries = fs::read_dir(dir)?
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!(path = %dir.display(), error = %e, "unreadable entry");
                None
            }
        })
        .collect::<Vec<DirEntry>>();
    entries.sort_by_key(|entry| entry.file_name());
    Ok(entries)
}
