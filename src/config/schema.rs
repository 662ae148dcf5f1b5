//! Configuration schema types for `goban.toml`
//!
//! Defines the structure and validation rules for diagram rendering settings.

use image::Rgba;
use serde::{Deserialize, Serialize};

use crate::color::{parse_color, to_hex};
use crate::renderer::Theme;

/// Largest accepted output scale factor
pub const MAX_SCALE: u32 = 16;

/// Root configuration structure for `goban.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GobanConfig {
    /// Diagram colours
    #[serde(default)]
    pub theme: ThemeConfig,
    /// PNG output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Colour overrides, as CSS colour strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default = "default_line")]
    pub line: String,
    #[serde(default = "default_mark")]
    pub mark: String,
    #[serde(default = "default_coordinate")]
    pub coordinate: String,
    #[serde(default = "default_letter")]
    pub letter: String,
    #[serde(default = "default_territory")]
    pub territory: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            line: default_line(),
            mark: default_mark(),
            coordinate: default_coordinate(),
            letter: default_letter(),
            territory: default_territory(),
        }
    }
}

fn default_background() -> String {
    to_hex(Theme::default().background)
}

fn default_line() -> String {
    to_hex(Theme::default().line)
}

fn default_mark() -> String {
    "red".to_string()
}

fn default_coordinate() -> String {
    to_hex(Theme::default().coordinate)
}

fn default_letter() -> String {
    to_hex(Theme::default().letter)
}

fn default_territory() -> String {
    to_hex(Theme::default().territory)
}

impl ThemeConfig {
    fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("background", &self.background),
            ("line", &self.line),
            ("mark", &self.mark),
            ("coordinate", &self.coordinate),
            ("letter", &self.letter),
            ("territory", &self.territory),
        ]
    }

    /// Resolve into renderer colours.
    ///
    /// A colour that does not parse keeps its default with a warning.
    pub fn to_theme(&self) -> Theme {
        let defaults = Theme::default();
        let resolve = |key: &str, value: &str, fallback: Rgba<u8>| match parse_color(value) {
            Ok(color) => color,
            Err(e) => {
                log::warn!("theme.{}: {} ({}), using default", key, value, e);
                fallback
            }
        };
        Theme {
            background: resolve("background", &self.background, defaults.background),
            line: resolve("line", &self.line, defaults.line),
            mark: resolve("mark", &self.mark, defaults.mark),
            coordinate: resolve("coordinate", &self.coordinate, defaults.coordinate),
            letter: resolve("letter", &self.letter, defaults.letter),
            territory: resolve("territory", &self.territory, defaults.territory),
        }
    }
}

/// PNG output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Integer up-scaling factor
    #[serde(default = "default_scale")]
    pub scale: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
        }
    }
}

fn default_scale() -> u32 {
    1
}

/// Validation error for a single field
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "theme.mark")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "goban.toml: '{}' {}", self.field, self.message)
    }
}

impl GobanConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if !(1..=MAX_SCALE).contains(&self.output.scale) {
            errors.push(ConfigValidationError {
                field: "output.scale".to_string(),
                message: format!("must be between 1 and {}", MAX_SCALE),
            });
        }

        for (key, value) in self.theme.entries() {
            if let Err(e) = parse_color(value) {
                errors.push(ConfigValidationError {
                    field: format!("theme.{}", key),
                    message: format!("is not a colour: {}", e),
                });
            }
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}
