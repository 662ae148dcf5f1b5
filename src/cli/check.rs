//! Check command: parse inputs without rendering

use std::path::PathBuf;
use std::process::ExitCode;

use crate::parser::try_parse;

use super::{collect_inputs, display_name, read_source, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the check command
pub fn run_check(args: &[PathBuf]) -> ExitCode {
    let inputs = match collect_inputs(args) {
        Ok(inputs) if inputs.is_empty() => {
            eprintln!("Error: No markup files to check");
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let mut failures = 0;
    for path in &inputs {
        let name = display_name(path);
        let source = match read_source(path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Error: Cannot read '{}': {}", name, e);
                return ExitCode::from(EXIT_INVALID_ARGS);
            }
        };
        match try_parse(&source) {
            Ok(_) => println!("{}: ok", name),
            Err(e) => {
                println!("{}: {}", name, e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        eprintln!("{} of {} inputs failed", failures, inputs.len());
        ExitCode::from(EXIT_ERROR)
    } else {
        ExitCode::from(EXIT_SUCCESS)
    }
}
