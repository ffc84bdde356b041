//! slowprint - print a few words slowly, then fill an ASCII progress bar.

use clap::Parser;
use slowprint::cli::{execute, handle_result, Cli};

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    handle_result(execute(&cli))
}
