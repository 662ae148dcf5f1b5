//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod check;
mod logging;
mod parse;
mod render;

use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use glob::glob;

use crate::output::is_stdin;

pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// File extensions picked up when an input is a directory
pub const MARKUP_EXTENSIONS: &[&str] = &["goban", "txt"];

/// Check if a path has a board markup file extension.
pub fn is_markup_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| MARKUP_EXTENSIONS.contains(&ext))
}

/// Find all markup files in a directory (recursively), sorted.
pub fn find_markup_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let dir_str = dir.display().to_string();

    for ext in MARKUP_EXTENSIONS {
        if let Ok(paths) = glob(&format!("{}/**/*.{}", dir_str, ext)) {
            files.extend(paths.filter_map(Result::ok));
        }
    }

    files.sort();
    files
}

/// Goban - render plain-text Go board markup to PNG diagrams
#[derive(Parser)]
#[command(name = "goban")]
#[command(about = "Goban - render plain-text Go board markup ($$ lines) to PNG diagrams")]
#[command(version)]
pub struct Cli {
    /// Print debug diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render diagrams to PNG
    Render {
        /// Markup files, directories (searched for *.goban and *.txt), or - for stdin
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output file or directory.
        /// If omitted: {input}.png beside the input
        /// If file (single input): output.png
        /// If file (multiple): output_{input}.png
        /// If directory (ends with /): dir/{input}.png
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Scale output by integer factor (1-16, default from goban.toml or 1)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=16))]
        scale: Option<u32>,

        /// Stop at the first diagram that fails
        #[arg(long)]
        strict: bool,

        /// Ignore goban.toml
        #[arg(long)]
        no_config: bool,
    },

    /// Parse one diagram and print its structure
    Parse {
        /// Markup file, or - for stdin
        input: PathBuf,

        /// Print the parsed diagram as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that inputs parse as board markup
    Check {
        /// Markup files, directories, or - for stdin
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Render {
            inputs,
            output,
            scale,
            strict,
            no_config,
        } => render::run_render(&inputs, output.as_deref(), scale, strict, no_config),
        Commands::Parse { input, json } => parse::run_parse(&input, json),
        Commands::Check { inputs } => check::run_check(&inputs),
    }
}

/// Expand directory arguments into the markup files they contain.
pub(crate) fn collect_inputs(args: &[PathBuf]) -> Result<Vec<PathBuf>, String> {
    let mut inputs = Vec::new();
    for arg in args {
        if is_stdin(arg) {
            inputs.push(arg.clone());
        } else if arg.is_dir() {
            let found = find_markup_files(arg);
            if found.is_empty() {
                tracing::warn!("no markup files in {}", arg.display());
            }
            inputs.extend(found);
        } else if arg.exists() {
            inputs.push(arg.clone());
        } else {
            return Err(format!("Input not found: '{}'", arg.display()));
        }
    }
    if inputs.iter().filter(|p| is_stdin(p)).count() > 1 {
        return Err("stdin (-) can only be given once".to_string());
    }
    Ok(inputs)
}

/// Read an input's text; `-` reads standard input.
pub(crate) fn read_source(path: &Path) -> std::io::Result<String> {
    if is_stdin(path) {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
    }
}

/// Name shown for an input in messages
pub(crate) fn display_name(path: &Path) -> String {
    if is_stdin(path) {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}
