//! Goban - plain-text Go board markup to raster diagrams
//!
//! This library provides functionality to:
//! - Parse `$$`-prefixed board markup into a rectangular grid with header options
//! - Infer board coordinates from the drawn edges of a partial diagram
//! - Render diagrams (stones, marks, move numbers, coordinates) onto an RGBA surface
//! - Encode rendered diagrams as PNG

pub mod cli;
pub mod color;
pub mod config;
pub mod coords;
pub mod font;
pub mod grammar;
pub mod models;
pub mod output;
pub mod parser;
pub mod pieces;
pub mod renderer;
pub mod shapes;
pub mod stones;
pub mod surface;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use models::ParsedDiagram;
pub use parser::{parse, try_parse, ParseError};
pub use renderer::{render, RenderResult, Renderer, Theme};
