//! WASM API module for browser/JS interop
//!
//! Provides WebAssembly bindings for rendering board markup to images.

use wasm_bindgen::prelude::*;

use crate::output::encode_png;
use crate::parser::parse;
use crate::renderer::render as render_markup;

/// Route panics and warnings to the browser console
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    // a second init in the same page keeps the first logger
    console_log::init_with_level(log::Level::Warn).ok();
}

/// A rendered diagram as raw RGBA pixels.
#[wasm_bindgen]
pub struct Diagram {
    width: u32,
    height: u32,
    caption: Option<String>,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl Diagram {
    /// Width of the rendered image in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the rendered image in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Caption from the header line, if any
    #[wasm_bindgen(getter)]
    pub fn caption(&self) -> Option<String> {
        self.caption.clone()
    }

    /// Raw RGBA pixel data (4 bytes per pixel)
    #[wasm_bindgen(getter)]
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }
}

/// Render board markup, or `undefined` if it is not valid markup.
#[wasm_bindgen]
pub fn render(source: &str) -> Option<Diagram> {
    let result = render_markup(source)?;
    Some(Diagram {
        width: result.width,
        height: result.height,
        caption: result.caption.clone(),
        pixels: result.into_image().into_raw(),
    })
}

/// Render board markup to PNG bytes; empty if it is not valid markup.
#[wasm_bindgen]
pub fn render_to_png(source: &str) -> Vec<u8> {
    render_markup(source)
        .and_then(|result| encode_png(&result.into_image()).ok())
        .unwrap_or_default()
}

/// Check whether a string parses as board markup.
#[wasm_bindgen]
pub fn is_markup(source: &str) -> bool {
    parse(source).is_some()
}
