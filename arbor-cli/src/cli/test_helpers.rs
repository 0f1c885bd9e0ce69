//! Fixtures shared by the CLI tests.
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::TempDir;

use super::{Cli, CliError, Command, ExecutionSummary, RunCommand, RunOptions, run_cli_with};

pub(super) const TRIANGLE: &str =
    r#"{"nodes": [1, 2, 3], "edges": [[1, 2, 1.0], [2, 3, 2.0], [1, 3, 3.0]]}"#;

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_graph_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

pub(super) fn run_command(path: PathBuf, options: RunOptions) -> Cli {
    Cli {
        command: Command::Run(RunCommand {
            path,
            name: None,
            options,
        }),
    }
}

/// Runs `cli` against in-memory streams and returns the summary and the
/// narration text.
pub(super) fn execute(cli: Cli, input: &str) -> Result<(ExecutionSummary, String), CliError> {
    let mut output = Vec::new();
    let summary = run_cli_with(cli, &mut output, input.as_bytes())?;
    let narration = match String::from_utf8(output) {
        Ok(text) => text,
        Err(err) => panic!("narration must be UTF-8: {err}"),
    };
    Ok((summary, narration))
}

/// Runs `cli` and expects an error, panicking with `panic_msg` otherwise.
pub(super) fn execute_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match execute(cli, "") {
        Ok(_) => panic!("{}", panic_msg),
        Err(err) => err,
    }
}
