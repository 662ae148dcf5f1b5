//! Colour parsing for theme overrides
//!
//! Accepts hex notation (`#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`) directly and
//! hands every other CSS colour form (`rgb()`, `rgba()`, `hsl()`, named
//! colours, ...) to lightningcss.

use image::Rgba;
use lightningcss::traits::Parse;
use lightningcss::values::color::CssColor;
use thiserror::Error;

/// Error type for colour parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("empty color string")]
    Empty,
    #[error("invalid color length {0}, expected 3, 4, 6, or 8")]
    InvalidLength(usize),
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
    #[error("CSS parse error: {0}")]
    CssParse(String),
}

/// Parse a CSS colour string into straight (non-premultiplied) RGBA.
///
/// # Examples
///
/// ```
/// use goban::color::parse_color;
/// use image::Rgba;
///
/// assert_eq!(parse_color("#d3823b").unwrap(), Rgba([0xd3, 0x82, 0x3b, 255]));
/// assert_eq!(parse_color("red").unwrap(), Rgba([255, 0, 0, 255]));
/// assert_eq!(parse_color("rgb(0, 0, 0)").unwrap(), Rgba([0, 0, 0, 255]));
/// ```
pub fn parse_color(s: &str) -> Result<Rgba<u8>, ColorError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ColorError::Empty);
    }
    match s.strip_prefix('#') {
        Some(hex) => parse_hex(hex),
        None => parse_css(s),
    }
}

/// Format a colour as `#RRGGBB`, or `#RRGGBBAA` when not opaque.
pub fn to_hex(color: Rgba<u8>) -> String {
    let [r, g, b, a] = color.0;
    if a == 255 {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }
}

fn parse_hex(hex: &str) -> Result<Rgba<u8>, ColorError> {
    if let Some(bad) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(bad));
    }

    // all ASCII from here on, so byte slicing is safe
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);

    let channels = match hex.len() {
        3 => [nibble(0), nibble(1), nibble(2), Ok(255)],
        4 => [nibble(0), nibble(1), nibble(2), nibble(3)],
        6 => [byte(0), byte(2), byte(4), Ok(255)],
        8 => [byte(0), byte(2), byte(4), byte(6)],
        len => return Err(ColorError::InvalidLength(len)),
    };

    let mut rgba = [0u8; 4];
    for (slot, channel) in rgba.iter_mut().zip(channels) {
        *slot = channel.map_err(|e| ColorError::CssParse(e.to_string()))?;
    }
    Ok(Rgba(rgba))
}

fn parse_css(s: &str) -> Result<Rgba<u8>, ColorError> {
    use lightningcss::values::color::FloatColor;

    let color = CssColor::parse_string(s).map_err(|e| ColorError::CssParse(e.to_string()))?;
    let rgb = color
        .to_rgb()
        .map_err(|_| ColorError::CssParse(format!("cannot convert '{}' to RGB", s)))?;

    match rgb {
        CssColor::RGBA(c) => Ok(Rgba([c.red, c.green, c.blue, c.alpha])),
        CssColor::Float(float) => match float.as_ref() {
            FloatColor::RGB(c) => Ok(Rgba([
                unit_to_byte(c.r),
                unit_to_byte(c.g),
                unit_to_byte(c.b),
                unit_to_byte(c.alpha),
            ])),
            _ => Err(ColorError::CssParse(format!("unexpected color space in '{}'", s))),
        },
        _ => Err(ColorError::CssParse(format!("'{}' did not resolve to RGB", s))),
    }
}

fn unit_to_byte(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
