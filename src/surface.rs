//! Drawing surfaces
//!
//! [`Surface`] is the immediate-mode drawing contract the renderer is written
//! against: rectangles, paths, images and text, with a save/restore stack
//! for paint, line width, shadow, font and alignment. [`Canvas`] implements
//! it over a [`tiny_skia::Pixmap`]. A [`SurfaceFactory`] hands out surfaces
//! and reports whether drawing is possible at all in the current environment.

use std::fmt;

use image::{ImageBuffer, Rgba, RgbaImage};
use tiny_skia::{
    Color, FillRule, GradientStop, LineCap, Pixmap, PixmapPaint, Point, Rect, Shader, SpreadMode, Stroke,
    Transform,
};

use crate::font::{Font, TextAlign};
use crate::shapes::Path;

/// Focal radial gradient.
///
/// Colour offset 0 sits on the focal point and offset 1 on the circle
/// around `center`; beyond the circle the last stop is padded.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    focal: (f32, f32),
    center: (f32, f32),
    radius: f32,
    stops: Vec<(f32, Rgba<u8>)>,
}

impl RadialGradient {
    pub fn new(focal: (f32, f32), center: (f32, f32), radius: f32) -> Self {
        Self {
            focal,
            center,
            radius,
            stops: Vec::new(),
        }
    }

    /// Add a colour stop; offsets are clamped to `0.0..=1.0`.
    pub fn add_stop(mut self, offset: f32, color: Rgba<u8>) -> Self {
        let offset = offset.clamp(0.0, 1.0);
        let at = self.stops.partition_point(|(o, _)| *o <= offset);
        self.stops.insert(at, (offset, color));
        self
    }

    /// `None` without stops or with a non-positive radius
    fn shader(&self) -> Option<Shader<'static>> {
        if self.stops.is_empty() {
            return None;
        }
        let stops = self
            .stops
            .iter()
            .map(|(offset, color)| GradientStop::new(*offset, skia_color(*color)))
            .collect();
        tiny_skia::RadialGradient::new(
            Point::from_xy(self.focal.0, self.focal.1),
            Point::from_xy(self.center.0, self.center.1),
            self.radius,
            stops,
            SpreadMode::Pad,
            Transform::identity(),
        )
    }
}

/// Fill or stroke source
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Rgba<u8>),
    Radial(RadialGradient),
}

impl Paint {
    fn to_skia(&self) -> Option<tiny_skia::Paint<'static>> {
        let shader = match self {
            Paint::Solid(color) => Shader::SolidColor(skia_color(*color)),
            Paint::Radial(gradient) => gradient.shader()?,
        };
        Some(tiny_skia::Paint {
            shader,
            anti_alias: true,
            ..tiny_skia::Paint::default()
        })
    }
}

impl From<Rgba<u8>> for Paint {
    fn from(color: Rgba<u8>) -> Self {
        Paint::Solid(color)
    }
}

impl From<RadialGradient> for Paint {
    fn from(gradient: RadialGradient) -> Self {
        Paint::Radial(gradient)
    }
}

fn skia_color(color: Rgba<u8>) -> Color {
    let [r, g, b, a] = color.0;
    Color::from_rgba8(r, g, b, a)
}

/// Drop shadow applied to subsequent shape and text drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub color: Rgba<u8>,
}

/// Immediate-mode 2-D drawing surface.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Push the current drawing state
    fn save(&mut self);
    /// Pop the most recently saved drawing state; no-op when none is saved
    fn restore(&mut self);

    fn set_fill(&mut self, paint: Paint);
    fn set_stroke(&mut self, paint: Paint);
    fn set_line_width(&mut self, width: f32);
    fn set_shadow(&mut self, shadow: Option<Shadow>);
    fn set_font(&mut self, font: Font);
    fn set_text_align(&mut self, align: TextAlign);

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_path(&mut self, path: &Path);
    fn stroke_path(&mut self, path: &Path);
    /// Composite another surface's pixels with its top-left corner at `(x, y)`
    fn draw_image(&mut self, image: &Self, x: f32, y: f32);
    /// Fill `text` with its baseline at `y`
    fn fill_text(&mut self, text: &str, x: f32, y: f32);
    /// Stroke the outline of `text` with the current line width
    fn stroke_text(&mut self, text: &str, x: f32, y: f32);
}

/// Source of drawing surfaces.
pub trait SurfaceFactory {
    type Surface: Surface;

    /// New transparent surface, or `None` if none can be created
    fn create(&self, width: u32, height: u32) -> Option<Self::Surface>;

    /// Whether this environment can draw at all
    fn is_supported(&self) -> bool {
        true
    }
}

/// In-memory RGBA raster backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct RasterBackend;

impl SurfaceFactory for RasterBackend {
    type Surface = Canvas;

    fn create(&self, width: u32, height: u32) -> Option<Canvas> {
        Canvas::new(width, height)
    }
}

/// Fallback for environments without any drawing surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unsupported;

impl SurfaceFactory for Unsupported {
    type Surface = Canvas;

    fn create(&self, _width: u32, _height: u32) -> Option<Canvas> {
        None
    }

    fn is_supported(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone)]
struct DrawState {
    fill: Paint,
    stroke: Paint,
    line_width: f32,
    shadow: Option<Shadow>,
    font: Font,
    align: TextAlign,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            fill: Paint::Solid(Rgba([0, 0, 0, 255])),
            stroke: Paint::Solid(Rgba([0, 0, 0, 255])),
            line_width: 1.0,
            shadow: None,
            font: Font::default(),
            align: TextAlign::Left,
        }
    }
}

/// Geometry handed to the pixmap, kept so a shadow can replay it
enum Shape {
    Rect(Rect),
    Fill(tiny_skia::Path),
    Stroke(tiny_skia::Path, Stroke),
}

impl Shape {
    fn draw(&self, pixmap: &mut Pixmap, paint: &tiny_skia::Paint) {
        let transform = Transform::identity();
        match self {
            Shape::Rect(rect) => pixmap.fill_rect(*rect, paint, transform, None),
            Shape::Fill(path) => pixmap.fill_path(path, paint, FillRule::Winding, transform, None),
            Shape::Stroke(path, stroke) => pixmap.stroke_path(path, paint, stroke, transform, None),
        }
    }
}

/// Raster surface backed by a [`Pixmap`].
#[derive(Clone)]
pub struct Canvas {
    pixmap: Pixmap,
    state: DrawState,
    saved: Vec<DrawState>,
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .field("saved", &self.saved.len())
            .finish()
    }
}

impl Canvas {
    /// Transparent canvas, `None` for a zero-sized one
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Some(Self {
            pixmap: Pixmap::new(width, height)?,
            state: DrawState::default(),
            saved: Vec::new(),
        })
    }

    /// Straight-alpha colour of one pixel
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Rgba([c.red(), c.green(), c.blue(), c.alpha()]))
    }

    /// Straight-alpha copy of the pixels
    pub fn to_image(&self) -> RgbaImage {
        let mut image = RgbaImage::new(self.pixmap.width(), self.pixmap.height());
        for (dst, src) in image.pixels_mut().zip(self.pixmap.pixels()) {
            let c = src.demultiply();
            *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
        }
        image
    }

    pub fn into_image(self) -> RgbaImage {
        self.to_image()
    }

    fn paint_shape(&mut self, shape: Option<Shape>, paint: &Paint) {
        let (Some(shape), Some(paint)) = (shape, paint.to_skia()) else {
            return;
        };
        if let Some(shadow) = self.state.shadow {
            self.paint_shadow(&shape, shadow);
        }
        shape.draw(&mut self.pixmap, &paint);
    }

    /// Blurred copy of `shape` in the shadow colour, composited at its offset
    fn paint_shadow(&mut self, shape: &Shape, shadow: Shadow) {
        if shadow.color.0[3] == 0 {
            return;
        }
        let Some(paint) = Paint::Solid(shadow.color).to_skia() else {
            return;
        };
        let Some(mut layer) = Pixmap::new(self.pixmap.width(), self.pixmap.height()) else {
            return;
        };
        shape.draw(&mut layer, &paint);
        blur(&mut layer, shadow.blur / 2.0);
        self.pixmap.draw_pixmap(
            shadow.offset_x.round() as i32,
            shadow.offset_y.round() as i32,
            layer.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
    }

    fn text_shape(&self, text: &str, x: f32, y: f32, grow: Option<f32>) -> Option<Shape> {
        let font = self.state.font;
        let path = match grow {
            Some(line_width) => font.outline_path(text, x, y, self.state.align, line_width),
            None => font.text_path(text, x, y, self.state.align),
        };
        path.to_skia().map(Shape::Fill)
    }
}

/// Gaussian blur of premultiplied pixels in place.
fn blur(layer: &mut Pixmap, sigma: f32) {
    if sigma <= 0.0 {
        return;
    }
    let (w, h) = (layer.width(), layer.height());
    let Some(buffer) = ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(w, h, layer.data().to_vec()) else {
        return;
    };
    let blurred = image::imageops::blur(&buffer, sigma);
    for (dst, src) in layer.data_mut().chunks_exact_mut(4).zip(blurred.pixels()) {
        // rounding can push a channel past its alpha, which premultiplied
        // storage forbids
        let a = src.0[3];
        dst.copy_from_slice(&[src.0[0].min(a), src.0[1].min(a), src.0[2].min(a), a]);
    }
}

impl Surface for Canvas {
    fn width(&self) -> u32 {
        self.pixmap.width()
    }

    fn height(&self) -> u32 {
        self.pixmap.height()
    }

    fn save(&mut self) {
        self.saved.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.state = state;
        }
    }

    fn set_fill(&mut self, paint: Paint) {
        self.state.fill = paint;
    }

    fn set_stroke(&mut self, paint: Paint) {
        self.state.stroke = paint;
    }

    fn set_line_width(&mut self, width: f32) {
        if width > 0.0 && width.is_finite() {
            self.state.line_width = width;
        }
    }

    fn set_shadow(&mut self, shadow: Option<Shadow>) {
        self.state.shadow = shadow;
    }

    fn set_font(&mut self, font: Font) {
        self.state.font = font;
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.state.align = align;
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let shape = Rect::from_xywh(x, y, w, h).map(Shape::Rect);
        let paint = self.state.fill.clone();
        self.paint_shape(shape, &paint);
    }

    fn fill_path(&mut self, path: &Path) {
        let shape = path.to_skia().map(Shape::Fill);
        let paint = self.state.fill.clone();
        self.paint_shape(shape, &paint);
    }

    fn stroke_path(&mut self, path: &Path) {
        let stroke = Stroke {
            width: self.state.line_width,
            line_cap: LineCap::Butt,
            ..Stroke::default()
        };
        let shape = path.to_skia().map(|p| Shape::Stroke(p, stroke));
        let paint = self.state.stroke.clone();
        self.paint_shape(shape, &paint);
    }

    fn draw_image(&mut self, image: &Self, x: f32, y: f32) {
        self.pixmap.draw_pixmap(
            x.round() as i32,
            y.round() as i32,
            image.pixmap.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        let shape = self.text_shape(text, x, y, None);
        let paint = self.state.fill.clone();
        self.paint_shape(shape, &paint);
    }

    fn stroke_text(&mut self, text: &str, x: f32, y: f32) {
        let shape = self.text_shape(text, x, y, Some(self.state.line_width));
        let paint = self.state.stroke.clone();
        self.paint_shape(shape, &paint);
    }
}
