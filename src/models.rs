//! Data model for parsed board markup
//!
//! A [`ParsedDiagram`] is a rectangular grid of [`Row`]s, each holding the
//! same number of [`Field`]s, plus the options read from the header line.

use serde::{Deserialize, Serialize};

/// One board cell: the raw markup symbol plus the vertical border flags
/// picked up from adjacent `|`, `+` or `-` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub piece: char,
    #[serde(default)]
    pub left: bool,
    #[serde(default)]
    pub right: bool,
}

impl Field {
    pub fn new(piece: char) -> Self {
        Self {
            piece,
            left: false,
            right: false,
        }
    }
}

/// One row of the grid with its horizontal border flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub fields: Vec<Field>,
    #[serde(default)]
    pub top: bool,
    #[serde(default)]
    pub bottom: bool,
}

impl Row {
    /// Number of fields in this row
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Options read from a consumed header line.
///
/// `caption` holds the trailing header text with trailing whitespace
/// removed; it may be empty when only options were given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderOptions {
    pub white_first: bool,
    pub coordinates: bool,
    pub board_size: Option<u32>,
    pub first_move: Option<i64>,
    pub caption: String,
}

/// Result of parsing board markup.
///
/// # Invariants
///
/// - `board` is non-empty
/// - every row holds exactly `width` fields
/// - `left_coordinate` / `top_coordinate` are only meaningful when
///   `coordinates` is true
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDiagram {
    pub board: Vec<Row>,
    pub width: usize,
    pub height: usize,
    /// Odd-numbered stones are white instead of black
    pub white_first: bool,
    /// Added to every numbered-stone label
    pub move_delta: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub coordinates: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_coordinate: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_coordinate: Option<i64>,
}

impl ParsedDiagram {
    /// Field at `(row, col)`, if inside the grid
    pub fn field(&self, row: usize, col: usize) -> Option<&Field> {
        self.board.get(row).and_then(|r| r.fields.get(col))
    }

    /// Caption if present and non-empty
    pub fn visible_caption(&self) -> Option<&str> {
        self.caption.as_deref().filter(|c| !c.is_empty())
    }
}
