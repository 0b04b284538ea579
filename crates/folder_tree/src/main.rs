//!
//! # Folder Tree
//! Writes the tree structure of a directory to a text file, leaving out entries whose names match any of the exclude globs.
//!
//! # Arguments
//! - [Mandatory] Source - Folder to scan, first positional argument.
//! - [Mandatory] Output - [-o <path>] Text file to write the tree to.
//! - [Optional] Exclude - [-e <globs>] Comma separated globs matched against entry names. Defaults to `*.hash,*.tmp`, can also be set with `FOLDER_TREE_EXCLUDE`.
//! - [Optional] Verbose - [-v] Repeat for more log output on stderr. `RUST_LOG` takes precedence.
//! - [Optional] Quiet - [-q] No confirmation message on success.
//!
//! # Example
//! This command writes the tree of the current directory to `tree.txt`, skipping hidden entries and the `target` directory.
//! ```folder_tree . -o tree.txt -e ".*,target"```

mod cli;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use folder_tree::ScanRequest;
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    init_tracing(cli.log_level());

    let request = cli.build_request();
    match run(&request) {
        Ok(()) => {
            if !cli.quiet {
                println!("Directory tree written to:\n{}", request.output.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", describe(&e));
            ExitCode::FAILURE
        }
    }
}

fn run(request: &ScanRequest) -> Result<()> {
    // Bad input is reported as is, anything after that gets the generic prefix.
    request.validate()?;
    let lines = folder_tree::snapshot(request).context("An error occurred")?;
    folder_tree::write_lines(&request.output, &lines).context("An error occurred")?;
    Ok(())
}

/// Top message, then the chain of causes on the next line.
fn describe(e: &anyhow::Error) -> String {
    let causes = e
        .chain()
        .skip(1)
        .map(ToString::to_string)
        .collect::<Vec<String>>();
    if causes.is_empty() {
        e.to_string()
    } else {
        format!("{e}:\n{}", causes.join(": "))
    }
}

fn init_tracing(level: Level) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
