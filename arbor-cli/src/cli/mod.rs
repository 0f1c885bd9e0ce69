//! Command-line interface orchestration for `arbor`.
//!
//! `run` loads a JSON graph file and `demo` uses the bundled example graph.
//! Both build the spanning forest, narrate every step unless asked to be
//! quiet, and hand back a summary for rendering.

mod commands;
mod narration;

pub use self::commands::{
    Cli, CliError, Command, ExecutionSummary, RunCommand, RunOptions, SummaryFormat,
    render_summary, run_cli, run_cli_with,
};
pub use self::narration::Narrator;

#[cfg(test)]
mod test_helpers;
