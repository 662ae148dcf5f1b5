//! Render command implementation

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use rayon::prelude::*;

use crate::config::{load_config, merge_cli_overrides, CliOverrides, GobanConfig};
use crate::output::{generate_output_path, is_stdin, save_png, scale_image};
use crate::parser::try_parse;
use crate::renderer::Renderer;

use super::{collect_inputs, display_name, read_source, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// One input read and ready to render
struct Job {
    path: PathBuf,
    source: String,
}

/// A diagram written to disk
struct Rendered {
    input: String,
    output: PathBuf,
    caption: Option<String>,
}

/// Execute the render command
pub fn run_render(
    args: &[PathBuf],
    output: Option<&Path>,
    scale: Option<u32>,
    strict: bool,
    no_config: bool,
) -> ExitCode {
    let inputs = match collect_inputs(args) {
        Ok(inputs) if inputs.is_empty() => {
            eprintln!("Error: No markup files to render");
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let mut config = if no_config {
        GobanConfig::default()
    } else {
        match load_config(None, &config_start(&inputs[0])) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_INVALID_ARGS);
            }
        }
    };
    merge_cli_overrides(&mut config, &CliOverrides { scale });

    let mut jobs = Vec::with_capacity(inputs.len());
    for path in inputs {
        match read_source(&path) {
            Ok(source) => jobs.push(Job { path, source }),
            Err(e) => {
                eprintln!("Error: Cannot read '{}': {}", display_name(&path), e);
                return ExitCode::from(EXIT_INVALID_ARGS);
            }
        }
    }

    let renderer = Renderer::new().with_theme(config.theme.to_theme());
    let single = jobs.len() == 1;
    let scale = config.output.scale;
    let render = |job: &Job| render_job(&renderer, job, output, single, scale);

    let mut failed = false;
    if strict {
        for job in &jobs {
            match render(job) {
                Ok(rendered) => report(&rendered),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return ExitCode::from(EXIT_ERROR);
                }
            }
        }
    } else {
        let results: Vec<_> = jobs.par_iter().map(render).collect();
        for result in results {
            match result {
                Ok(rendered) => report(&rendered),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    failed = true;
                }
            }
        }
    }

    if failed {
        ExitCode::from(EXIT_ERROR)
    } else {
        ExitCode::from(EXIT_SUCCESS)
    }
}

/// Directory to start the goban.toml search from
fn config_start(input: &Path) -> PathBuf {
    if is_stdin(input) {
        return std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    }
    let absolute = std::fs::canonicalize(input).unwrap_or_else(|_| input.to_path_buf());
    absolute.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."))
}

fn render_job(
    renderer: &Renderer,
    job: &Job,
    output: Option<&Path>,
    single: bool,
    scale: u32,
) -> Result<Rendered, String> {
    let input = display_name(&job.path);
    let diagram = try_parse(&job.source).map_err(|e| format!("{}: {}", input, e))?;
    let result = renderer
        .render_parsed(&diagram)
        .ok_or_else(|| format!("{}: no drawing surface available", input))?;

    let caption = result.caption.clone();
    let image = scale_image(result.into_image(), scale);
    let out = generate_output_path(&job.path, output, single);
    save_png(&image, &out).map_err(|e| format!("{}: cannot write '{}': {}", input, out.display(), e))?;

    Ok(Rendered {
        input,
        output: out,
        caption,
    })
}

fn report(rendered: &Rendered) {
    tracing::debug!("{} -> {}", rendered.input, rendered.output.display());
    println!("Saved: {}", rendered.output.display());
    if let Some(caption) = &rendered.caption {
        println!("{}: {}", rendered.input, caption);
    }
}
