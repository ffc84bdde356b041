//! CLI argument handling.
//!
//! The program takes no behavioural arguments; clap supplies `--help` and
//! `--version` and rejects anything else.

use std::process::ExitCode;

use clap::Parser;

use crate::runner::RenderError;

/// Print a few words slowly, then fill an ASCII progress bar.
///
/// Prints "this is one string" one word every 1.5 seconds, then redraws a
/// 22-column bar of '*' in place over 50 seconds.
#[derive(Parser, Debug)]
#[command(name = "slowprint")]
#[command(author, version = crate::VERSION, about, long_about = None)]
pub struct Cli {}

/// Result type for a full run.
pub type CliResult = Result<(), RenderError>;

/// Execute the program.
pub fn execute(_cli: &Cli) -> CliResult {
    crate::runner::run_to_stdout()
}

/// Convert a run result into a process exit code, reporting failures on stderr.
pub fn handle_result(result: CliResult) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Start on a fresh line in case the bar was mid-redraw.
            eprintln!();
            eprintln!("\x1b[31mError:\x1b[0m {e}");
            ExitCode::FAILURE
        }
    }
}
