//! Parse command: show what a diagram parses to

use std::path::Path;
use std::process::ExitCode;

use crate::coords::column_letter;
use crate::models::ParsedDiagram;
use crate::parser::try_parse;

use super::{display_name, read_source, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the parse command
pub fn run_parse(input: &Path, json: bool) -> ExitCode {
    let name = display_name(input);
    let source = match read_source(input) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: Cannot read '{}': {}", name, e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let diagram = match try_parse(&source) {
        Ok(diagram) => diagram,
        Err(e) => {
            eprintln!("Error: {}: {}", name, e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if json {
        match serde_json::to_string_pretty(&diagram) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else {
        println!("{}", summary(&diagram));
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// One-line description of a parsed diagram
pub(crate) fn summary(diagram: &ParsedDiagram) -> String {
    let mut parts = vec![
        format!("{}x{}", diagram.width, diagram.height),
        format!("{} first", if diagram.white_first { "white" } else { "black" }),
    ];
    if diagram.move_delta != 0 {
        parts.push(format!("first move {}", diagram.move_delta + 1));
    }
    if let Some(size) = diagram.board_size {
        parts.push(format!("board {}", size));
    }
    match (diagram.coordinates, diagram.left_coordinate, diagram.top_coordinate) {
        (true, Some(left), Some(top)) => {
            let column = column_letter(left, 0).map_or_else(|| "?".to_string(), |c| c.to_string());
            parts.push(format!("top-left {}{}", column, top + 1));
        }
        _ => parts.push("no coordinates".to_string()),
    }
    if let Some(caption) = diagram.visible_caption() {
        parts.push(format!("caption {:?}", caption));
    }
    parts.join(", ")
}
