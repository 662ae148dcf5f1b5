//! Diagram rendering
//!
//! Draws a [`ParsedDiagram`] onto a fixed 22 pixel grid: background, board
//! lines, stones, marks, labels and coordinates.

use image::{Rgba, RgbaImage};

use crate::coords::{column_letters, row_labels};
use crate::font::{Font, TextAlign};
use crate::models::{Field, ParsedDiagram, Row};
use crate::parser::parse;
use crate::pieces::{draws_lines, numbered_stone_color, Mark, PieceStyle, Special, StoneColor};
use crate::shapes::Path;
use crate::stones::{StoneCache, STONE_CENTER};
use crate::surface::{Canvas, Paint, RasterBackend, Surface, SurfaceFactory};

/// Distance between adjacent intersections
pub const CELL: f32 = 22.0;

/// Extra width and height reserved for coordinate labels
pub const COORDINATE_MARGIN: u32 = 6;

/// Centre of cell (0, 0) without coordinate labels
const OFFSET: f32 = 22.5;

/// Centre of cell (0, 0) with coordinate labels
const OFFSET_WITH_COORDINATES: f32 = 28.5;

/// Half the length of a board line arm
const ARM: f32 = 11.0;

const MARK_RADIUS: f32 = 5.0;
const MARK_LINE_WIDTH: f32 = 2.0;
const STAR_POINT_RADIUS: f32 = 2.5;
const LETTER_OUTLINE_WIDTH: f32 = 6.0;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Colours used for everything that is not a stone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Rgba<u8>,
    pub line: Rgba<u8>,
    pub mark: Rgba<u8>,
    pub coordinate: Rgba<u8>,
    pub letter: Rgba<u8>,
    pub territory: Rgba<u8>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Rgba([0xd3, 0x82, 0x3b, 255]),
            line: BLACK,
            mark: Rgba([255, 0, 0, 255]),
            coordinate: Rgba([0x6b, 0x42, 0x1e, 255]),
            letter: BLACK,
            territory: Rgba([255, 255, 255, 128]),
        }
    }
}

/// A rendered diagram.
#[derive(Debug, Clone)]
pub struct RenderResult<S = Canvas> {
    pub surface: S,
    pub width: u32,
    pub height: u32,
    /// Header caption, only when non-empty
    pub caption: Option<String>,
}

impl RenderResult<Canvas> {
    pub fn into_image(self) -> RgbaImage {
        self.surface.into_image()
    }
}

/// Renders diagrams onto surfaces from one factory, sharing stone images
/// across calls.
pub struct Renderer<F: SurfaceFactory = RasterBackend> {
    factory: F,
    theme: Theme,
    stones: StoneCache<F::Surface>,
}

impl Renderer<RasterBackend> {
    pub fn new() -> Self {
        Self::with_factory(RasterBackend)
    }
}

impl Default for Renderer<RasterBackend> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: SurfaceFactory> Renderer<F> {
    pub fn with_factory(factory: F) -> Self {
        Self {
            factory,
            theme: Theme::default(),
            stones: StoneCache::default(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Parse and render markup.
    ///
    /// Returns `None` when the environment cannot draw (checked before
    /// parsing) or the text is not valid markup.
    pub fn render(&self, source: &str) -> Option<RenderResult<F::Surface>> {
        if !self.factory.is_supported() {
            log::debug!("no drawing surface available");
            return None;
        }
        let diagram = parse(source)?;
        self.render_parsed(&diagram)
    }

    /// Render an already parsed diagram.
    pub fn render_parsed(&self, diagram: &ParsedDiagram) -> Option<RenderResult<F::Surface>> {
        let (width, height) = surface_size(diagram);
        let mut surface = self.factory.create(width, height)?;

        surface.set_fill(Paint::Solid(self.theme.background));
        surface.fill_rect(0.0, 0.0, width as f32, height as f32);

        let offset = grid_offset(diagram);
        for (r, row) in diagram.board.iter().enumerate() {
            for (c, field) in row.fields.iter().enumerate() {
                let x = c as f32 * CELL + offset;
                let y = r as f32 * CELL + offset;
                self.draw_field(&mut surface, diagram, row, field, x, y);
            }
        }

        if diagram.coordinates {
            self.draw_coordinates(&mut surface, diagram);
        }

        Some(RenderResult {
            surface,
            width,
            height,
            caption: diagram.visible_caption().map(str::to_string),
        })
    }

    fn draw_field(&self, surface: &mut F::Surface, diagram: &ParsedDiagram, row: &Row, field: &Field, x: f32, y: f32) {
        if draws_lines(field.piece) {
            self.draw_lines(surface, row, field, x, y);
        }

        let style = PieceStyle::of(field.piece);
        if let Some(color) = style.stone {
            self.draw_stone(surface, color, x, y);
        }
        if let Some(mark) = style.mark {
            self.draw_mark(surface, mark, x, y);
        } else if let Some(special) = style.special {
            self.draw_special(surface, diagram, special, x, y);
        }
    }

    fn draw_lines(&self, surface: &mut F::Surface, row: &Row, field: &Field, x: f32, y: f32) {
        let mut path = Path::new();
        path.move_to(x, if row.top { y } else { y - ARM });
        path.line_to(x, if row.bottom { y } else { y + ARM });
        path.move_to(if field.left { x } else { x - ARM }, y);
        path.line_to(if field.right { x } else { x + ARM }, y);

        surface.save();
        surface.set_stroke(Paint::Solid(self.theme.line));
        surface.set_line_width(1.0);
        surface.stroke_path(&path);
        surface.restore();
    }

    fn draw_stone(&self, surface: &mut F::Surface, color: StoneColor, x: f32, y: f32) {
        if let Some(image) = self.stones.image(&self.factory, color) {
            surface.draw_image(image, x - STONE_CENTER, y - STONE_CENTER);
        }
    }

    fn draw_mark(&self, surface: &mut F::Surface, mark: Mark, x: f32, y: f32) {
        let paint = Paint::Solid(self.theme.mark);
        surface.save();
        surface.set_fill(paint.clone());
        surface.set_stroke(paint);
        surface.set_line_width(MARK_LINE_WIDTH);
        match mark {
            Mark::Circle => surface.stroke_path(&Path::circle(x, y, MARK_RADIUS)),
            Mark::Square => surface.fill_rect(
                x - MARK_RADIUS,
                y - MARK_RADIUS,
                2.0 * MARK_RADIUS,
                2.0 * MARK_RADIUS,
            ),
            Mark::Triangle => {
                surface.fill_path(&Path::polygon(&[(x, y - 6.0), (x + 6.0, y + 4.0), (x - 6.0, y + 4.0)]))
            }
            Mark::Cross => {
                let mut path = Path::new();
                path.move_to(x - MARK_RADIUS, y - MARK_RADIUS);
                path.line_to(x + MARK_RADIUS, y + MARK_RADIUS);
                path.move_to(x + MARK_RADIUS, y - MARK_RADIUS);
                path.line_to(x - MARK_RADIUS, y + MARK_RADIUS);
                surface.stroke_path(&path);
            }
        }
        surface.restore();
    }

    fn draw_special(&self, surface: &mut F::Surface, diagram: &ParsedDiagram, special: Special, x: f32, y: f32) {
        match special {
            Special::Composite => self.draw_stone(surface, StoneColor::Both, x, y),
            Special::Numbered(value) => {
                let color = numbered_stone_color(value, diagram.white_first);
                self.draw_stone(surface, color, x, y);
                let ink = if color == StoneColor::Black { WHITE } else { BLACK };
                let label = diagram.move_delta.saturating_add(i64::from(value)).to_string();
                surface.save();
                surface.set_fill(Paint::Solid(ink));
                surface.set_font(Font::new(12.0));
                surface.set_text_align(TextAlign::Center);
                surface.fill_text(&label, x, y + 4.0);
                surface.restore();
            }
            Special::Territory => {
                surface.save();
                surface.set_fill(Paint::Solid(self.theme.territory));
                surface.fill_rect(x - 11.5, y - 11.5, CELL, CELL);
                surface.restore();
            }
            Special::Letter(letter) => {
                let text = letter.to_string();
                surface.save();
                surface.set_font(Font::new(15.0).bold());
                surface.set_text_align(TextAlign::Center);
                surface.set_stroke(Paint::Solid(self.theme.background));
                surface.set_line_width(LETTER_OUTLINE_WIDTH);
                surface.stroke_text(&text, x, y + 5.0);
                surface.set_fill(Paint::Solid(self.theme.letter));
                surface.fill_text(&text, x, y + 5.0);
                surface.restore();
            }
            Special::StarPoint => {
                surface.save();
                surface.set_fill(Paint::Solid(self.theme.line));
                surface.fill_path(&Path::circle(x, y, STAR_POINT_RADIUS));
                surface.restore();
            }
        }
    }

    fn draw_coordinates(&self, surface: &mut F::Surface, diagram: &ParsedDiagram) {
        surface.save();
        surface.set_fill(Paint::Solid(self.theme.coordinate));
        surface.set_font(Font::new(10.0));

        surface.set_text_align(TextAlign::Right);
        for (r, label) in row_labels(diagram).into_iter().enumerate() {
            surface.fill_text(&label.to_string(), 16.0, r as f32 * CELL + 31.5);
        }

        surface.set_text_align(TextAlign::Center);
        for (c, letter) in column_letters(diagram).into_iter().enumerate() {
            if let Some(letter) = letter {
                surface.fill_text(&letter.to_string(), c as f32 * CELL + OFFSET_WITH_COORDINATES, 12.0);
            }
        }

        surface.restore();
    }
}

/// Pixel size of the surface a diagram renders onto.
///
/// # Examples
///
/// ```
/// use goban::parser::parse;
/// use goban::renderer::surface_size;
///
/// let diagram = parse("$$ X O X\n$$ O X O").unwrap();
/// assert_eq!(surface_size(&diagram), (88, 66));
/// ```
pub fn surface_size(diagram: &ParsedDiagram) -> (u32, u32) {
    let margin = if diagram.coordinates { COORDINATE_MARGIN } else { 0 };
    let cell = CELL as u32;
    (
        (diagram.width as u32 + 1) * cell + margin,
        (diagram.height as u32 + 1) * cell + margin,
    )
}

/// Centre of cell (0, 0) on both axes
pub fn grid_offset(diagram: &ParsedDiagram) -> f32 {
    if diagram.coordinates {
        OFFSET_WITH_COORDINATES
    } else {
        OFFSET
    }
}

/// Parse and render markup with the default raster backend and theme.
///
/// # Examples
///
/// ```
/// let result = goban::render("$$B Black to play\n$$ . X .\n$$ O . X").unwrap();
/// assert_eq!((result.width, result.height), (88, 66));
/// assert_eq!(result.caption.as_deref(), Some("Black to play"));
///
/// assert!(goban::render("not markup").is_none());
/// ```
pub fn render(source: &str) -> Option<RenderResult> {
    Renderer::new().render(source)
}
