//! Built-in bitmap font for diagram labels
//!
//! Move numbers, letter marks and coordinates only need digits, `-` and the
//! Latin alphabet, so the face is a 5x7 grid per glyph scaled to the
//! requested pixel size. Every host renders identical pixels.

use crate::shapes::Path;

/// Glyph grid columns
const GLYPH_COLS: u32 = 5;

/// Glyph grid rows; the last row sits on the baseline
const GLYPH_ROWS: u32 = 7;

/// Cap height as a fraction of the font size
const CAP_HEIGHT: f32 = 0.72;

/// Extra width of each lit cell in bold text, in grid units
const BOLD_SMEAR: f32 = 0.5;

/// Horizontal anchor of drawn text relative to its x coordinate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Font size in pixels plus weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub size: f32,
    pub bold: bool,
}

impl Default for Font {
    fn default() -> Self {
        Self::new(10.0)
    }
}

impl Font {
    pub fn new(size: f32) -> Self {
        Self { size, bold: false }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Side length of one glyph grid cell in pixels
    pub fn unit(&self) -> f32 {
        self.size * CAP_HEIGHT / GLYPH_ROWS as f32
    }

    fn cell_width(&self) -> f32 {
        if self.bold {
            self.unit() * (1.0 + BOLD_SMEAR)
        } else {
            self.unit()
        }
    }

    fn advance(&self) -> f32 {
        self.unit() * (GLYPH_COLS + 1) as f32 + self.cell_width() - self.unit()
    }

    /// Width of `text` in pixels, without trailing spacing.
    ///
    /// # Examples
    ///
    /// ```
    /// use goban::font::Font;
    ///
    /// let font = Font::new(14.0);
    /// assert_eq!(font.measure(""), 0.0);
    /// assert!(font.measure("10") > font.measure("1"));
    /// ```
    pub fn measure(&self, text: &str) -> f32 {
        let n = text.chars().count();
        if n == 0 {
            return 0.0;
        }
        n as f32 * self.advance() - self.unit()
    }

    /// Filled glyph outlines for `text` with its baseline at `y`.
    pub fn text_path(&self, text: &str, x: f32, y: f32, align: TextAlign) -> Path {
        self.glyph_cells(text, x, y, align, 0.0)
    }

    /// Glyph outlines grown by half of `line_width` on every side, for
    /// drawing a halo behind the text.
    pub fn outline_path(&self, text: &str, x: f32, y: f32, align: TextAlign, line_width: f32) -> Path {
        self.glyph_cells(text, x, y, align, line_width / 2.0)
    }

    fn glyph_cells(&self, text: &str, x: f32, y: f32, align: TextAlign, grow: f32) -> Path {
        let width = self.measure(text);
        let mut pen = match align {
            TextAlign::Left => x,
            TextAlign::Center => x - width / 2.0,
            TextAlign::Right => x - width,
        };
        let unit = self.unit();
        let mut path = Path::new();

        for c in text.chars() {
            if let Some(rows) = glyph(c) {
                for (r, bits) in rows.iter().enumerate() {
                    let top = y - (GLYPH_ROWS - r as u32) as f32 * unit;
                    for (start, len) in runs(*bits) {
                        let left = pen + start as f32 * unit;
                        let run_width = (len - 1) as f32 * unit + self.cell_width();
                        path.add_rect(
                            left - grow,
                            top - grow,
                            run_width + 2.0 * grow,
                            unit + 2.0 * grow,
                        );
                    }
                }
            }
            pen += self.advance();
        }

        path
    }
}

/// Runs of lit columns in a glyph row as `(first_column, length)`
fn runs(bits: u8) -> Vec<(u32, u32)> {
    let mut out = Vec::new();
    let mut col = 0;
    while col < GLYPH_COLS {
        if lit(bits, col) {
            let start = col;
            while col < GLYPH_COLS && lit(bits, col) {
                col += 1;
            }
            out.push((start, col - start));
        } else {
            col += 1;
        }
    }
    out
}

fn lit(bits: u8, col: u32) -> bool {
    bits & (1 << (GLYPH_COLS - 1 - col)) != 0
}

/// Returns true if the font can draw `c`
pub fn has_glyph(c: char) -> bool {
    glyph(c).is_some()
}

#[rustfmt::skip]
fn glyph(c: char) -> Option<[u8; 7]> {
    let rows = match c {
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        'a' => [0b00000, 0b00000, 0b01110, 0b00001, 0b01111, 0b10001, 0b01111],
        'b' => [0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b11110],
        'c' => [0b00000, 0b00000, 0b01110, 0b10000, 0b10000, 0b10001, 0b01110],
        'd' => [0b00001, 0b00001, 0b01101, 0b10011, 0b10001, 0b10001, 0b01111],
        'e' => [0b00000, 0b00000, 0b01110, 0b10001, 0b11111, 0b10000, 0b01110],
        'f' => [0b00110, 0b01001, 0b01000, 0b11100, 0b01000, 0b01000, 0b01000],
        'g' => [0b00000, 0b01111, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110],
        'h' => [0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001],
        'i' => [0b00100, 0b00000, 0b01100, 0b00100, 0b00100, 0b00100, 0b01110],
        'j' => [0b00010, 0b00000, 0b00110, 0b00010, 0b00010, 0b10010, 0b01100],
        'k' => [0b10000, 0b10000, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010],
        'l' => [0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'm' => [0b00000, 0b00000, 0b11010, 0b10101, 0b10101, 0b10001, 0b10001],
        'n' => [0b00000, 0b00000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001],
        'o' => [0b00000, 0b00000, 0b01110, 0b10001, 0b10001, 0b10001, 0b01110],
        'p' => [0b00000, 0b00000, 0b11110, 0b10001, 0b11110, 0b10000, 0b10000],
        'q' => [0b00000, 0b00000, 0b01101, 0b10011, 0b01111, 0b00001, 0b00001],
        'r' => [0b00000, 0b00000, 0b10110, 0b11001, 0b10000, 0b10000, 0b10000],
        's' => [0b00000, 0b00000, 0b01110, 0b10000, 0b01110, 0b00001, 0b11110],
        't' => [0b01000, 0b01000, 0b11100, 0b01000, 0b01000, 0b01001, 0b00110],
        'u' => [0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b10011, 0b01101],
        'v' => [0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'w' => [0b00000, 0b00000, 0b10001, 0b10001, 0b10101, 0b10101, 0b01010],
        'x' => [0b00000, 0b00000, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001],
        'y' => [0b00000, 0b00000, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110],
        'z' => [0b00000, 0b00000, 0b11111, 0b00010, 0b00100, 0b01000, 0b11111],
        _ => return None,
    };
    Some(rows)
}
