/*!
# Folder Tree
A program to write a text snapshot of a directory as an indented tree, the way the unix `tree` command draws it. Entries whose names match one of the given glob patterns are left out together with everything below them.

# Output
- First line is the scanned path exactly as given.
- Every entry below it gets one line: a prefix of `"│   "` / `"    "` segments (one per ancestor level), a connector (`"├── "` or `"└── "`) and the entry name.
- Entries are listed depth first, siblings sorted by name in code point order.
- The `"└── "` connector goes to the last entry of the full sorted listing. Exclusions are applied after that choice, so if the last entry is excluded the last visible one still shows `"├── "`.
- Directories that cannot be listed show up with no children, nothing else is reported about them.
- The file is UTF-8, lines joined with `\n`, no trailing newline.

# Example
```
use folder_tree::ScanRequest;

let dir = std::env::temp_dir().join("folder_tree_doc");
std::fs::create_dir_all(dir.join("src")).unwrap();
std::fs::write(dir.join("src").join("main.rs"), "").unwrap();
std::fs::write(dir.join("build.tmp"), "").unwrap();

let request = ScanRequest::new(
    &dir,
    dir.with_extension("txt"),
    folder_tree::parse_patterns("*.hash, *.tmp"),
);
let lines = folder_tree::scan_and_save(&request).expect("unable to write snapshot");
assert_eq!(lines[1..], ["└── src", "    └── main.rs"]);
```
*/

mod error;
mod output;
mod pattern;
mod request;
mod tree;

pub use error::ScanError;
pub use output::write_lines;
pub use pattern::{matches, ExcludeSet};
pub use request::{parse_patterns, ScanRequest, DEFAULT_EXCLUDE};
pub use tree::*;

/// Validates `request`, scans its root and writes the snapshot to its output path.
///
/// Returns the lines that were written.
pub fn scan_and_save(request: &ScanRequest) -> Result<Vec<String>, ScanError> {
    request.validate()?;
    let lines = snapshot(request)?;
    write_lines(&request.output, &lines)?;
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn writes_snapshot_file() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("proj");
        fs::create_dir_all(root.join("dir1")).unwrap();
        fs::write(root.join("dir1").join("fileA"), "").unwrap();
        fs::write(root.join("file2"), "").unwrap();
        let out = dir.path().join("tree.txt");

        let request = ScanRequest::new(&root, &out, vec![]);
        let lines = scan_and_save(&request).unwrap();

        let expected = format!(
            "{}\n├── dir1\n│   └── fileA\n└── file2",
            root.display()
        );
        assert_eq!(fs::read_to_string(&out).unwrap(), expected);
        assert_eq!(lines.join("\n"), expected);
    }

    #[test]
    fn excluded_last_entry_is_written_with_middle_connector() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("proj");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("a.txt"), "").unwrap();
        fs::write(root.join("b.tmp"), "").unwrap();
        let out = dir.path().join("tree.txt");

        let request = ScanRequest::new(&root, &out, parse_patterns("*.tmp"));
        scan_and_save(&request).unwrap();

        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            format!("{}\n├── a.txt", root.display())
        );
    }

    #[test]
    fn same_tree_gives_same_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("proj");
        fs::create_dir_all(root.join("x").join("y")).unwrap();
        fs::write(root.join("x").join("z.hash"), "").unwrap();
        let first = dir.path().join("first.txt");
        let second = dir.path().join("second.txt");

        scan_and_save(&ScanRequest::new(&root, &first, parse_patterns(DEFAULT_EXCLUDE))).unwrap();
        scan_and_save(&ScanRequest::new(&root, &second, parse_patterns(DEFAULT_EXCLUDE))).unwrap();

        assert_eq!(fs::read(first).unwrap(), fs::read(second).unwrap());
    }

    #[test]
    fn invalid_request_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("tree.txt");
        let request = ScanRequest::new(dir.path().join("missing"), &out, vec![]);
        let err = scan_and_save(&request).unwrap_err();
        assert!(err.is_input_error());
        assert!(!out.exists());
    }
}
