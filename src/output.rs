//! PNG output and file path generation

use image::codecs::png::PngEncoder;
use image::imageops::FilterType;
use image::{ColorType, ImageEncoder, RgbaImage};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Stem used for diagrams read from standard input
pub const STDIN_STEM: &str = "stdin";

/// Error type for output operations
#[derive(Debug, Error)]
pub enum OutputError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Image encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Save an RGBA image to a PNG file, creating parent directories.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(path, encode_png(image)?)?;
    Ok(())
}

/// Encode an RGBA image as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, OutputError> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ColorType::Rgba8,
    )?;
    Ok(bytes)
}

/// Scale image by an integer factor using nearest-neighbor interpolation.
///
/// Factors of 0 and 1 return the image unchanged.
pub fn scale_image(image: RgbaImage, factor: u32) -> RgbaImage {
    if factor <= 1 {
        return image;
    }
    let (w, h) = image.dimensions();
    image::imageops::resize(&image, w * factor, h * factor, FilterType::Nearest)
}

/// Generate the PNG path for one rendered input.
///
/// | Scenario | Output |
/// |----------|--------|
/// | No `-o` | `{input_stem}.png` beside the input |
/// | `-o out.png`, single input | `out.png` |
/// | `-o out.png`, several inputs | `out_{input_stem}.png` |
/// | `-o dir/` | `dir/{input_stem}.png` |
///
/// An input of `-` (standard input) uses the stem `stdin`.
pub fn generate_output_path(input: &Path, output_arg: Option<&Path>, is_single_input: bool) -> PathBuf {
    let stem = input_stem(input);
    match output_arg {
        Some(output) => {
            let is_dir = output.as_os_str().to_string_lossy().ends_with('/') || output.is_dir();
            if is_dir {
                output.join(format!("{}.png", stem))
            } else if is_single_input {
                output.to_path_buf()
            } else {
                let out_stem = output.file_stem().and_then(|s| s.to_str()).unwrap_or("output");
                sibling(output, &format!("{}_{}.png", out_stem, stem))
            }
        }
        None if is_stdin(input) => PathBuf::from(format!("{}.png", stem)),
        None => sibling(input, &format!("{}.png", stem)),
    }
}

/// Whether an input argument names standard input
pub fn is_stdin(input: &Path) -> bool {
    input.as_os_str() == "-"
}

fn input_stem(input: &Path) -> String {
    if is_stdin(input) {
        return STDIN_STEM.to_string();
    }
    input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("diagram")
        .to_string()
}

fn sibling(path: &Path, file_name: &str) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(file_name),
        _ => PathBuf::from(file_name),
    }
}
