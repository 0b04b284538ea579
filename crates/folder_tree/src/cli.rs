use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use folder_tree::{ScanRequest, DEFAULT_EXCLUDE};
use tracing::Level;

/// Write a directory tree snapshot to a text file.
///
/// Example:
///   folder_tree ./project -o project.txt -e "*.hash,*.tmp,target"
#[derive(Parser, Debug)]
#[command(name = "folder_tree", version, about)]
pub struct Cli {
    /// Folder to scan
    // Raw OS strings, so an empty value reaches validation instead of failing parsing.
    #[arg(value_name = "SOURCE")]
    pub source: Option<OsString>,

    /// Text file the tree is written to (e.g. tree.txt)
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<OsString>,

    /// Comma separated globs matched against entry names
    #[arg(
        short,
        long,
        value_name = "PATTERNS",
        env = "FOLDER_TREE_EXCLUDE",
        default_value = DEFAULT_EXCLUDE
    )]
    pub exclude: String,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Do not print the confirmation message
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn build_request(&self) -> ScanRequest {
        ScanRequest::new(
            trimmed(self.source.as_ref()),
            trimmed(self.output.as_ref()),
            folder_tree::parse_patterns(&self.exclude),
        )
    }

    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

/// Missing and blank paths both become empty, so validation reports them the same way.
fn trimmed(path: Option<&OsString>) -> PathBuf {
    match path {
        Some(path) => match path.to_str() {
            Some(s) => PathBuf::from(s.trim()),
            None => PathBuf::from(path),
        },
        None => PathBuf::new(),
    }
}
