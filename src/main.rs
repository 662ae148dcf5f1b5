//! Goban - command-line tool for rendering Go board markup to PNG diagrams

use std::process::ExitCode;

use goban::cli;

fn main() -> ExitCode {
    cli::run()
}
