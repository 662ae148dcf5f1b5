//! Vector paths for diagram drawing.
//!
//! [`Path`] is a thin owner of a [`tiny_skia::PathBuilder`] so that drawing
//! code can build geometry incrementally and hand it to any
//! [`Surface`](crate::surface::Surface), not only the raster one.

use tiny_skia::{PathBuilder, Rect};

/// Control point distance for a quarter circle drawn as one cubic
const QUARTER_KAPPA: f32 = 0.552_284_75;

/// A vector path made of one or more contours.
///
/// # Examples
///
/// ```
/// use goban::shapes::Path;
///
/// let mut path = Path::new();
/// path.move_to(0.0, 0.0);
/// path.line_to(10.0, 0.0);
/// path.line_to(10.0, 5.0);
/// path.close();
/// assert_eq!(path.bounds(), Some((0.0, 0.0, 10.0, 5.0)));
/// ```
#[derive(Debug, Clone)]
pub struct Path {
    builder: PathBuilder,
    /// Exact extent of every point passed in, curves by their bounding box
    extent: Option<(f32, f32, f32, f32)>,
}

impl Default for Path {
    fn default() -> Self {
        Self {
            builder: PathBuilder::new(),
            extent: None,
        }
    }
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Axis-aligned rectangle
    pub fn rect(x: f32, y: f32, w: f32, h: f32) -> Self {
        let mut path = Self::new();
        path.add_rect(x, y, w, h);
        path
    }

    /// Closed full circle
    pub fn circle(cx: f32, cy: f32, r: f32) -> Self {
        let mut path = Self::new();
        path.builder.push_circle(cx, cy, r);
        path.include(cx - r, cy - r);
        path.include(cx + r, cy + r);
        path
    }

    /// Closed right half of a circle, flat side on the vertical diameter.
    pub fn half_circle(cx: f32, cy: f32, r: f32) -> Self {
        let k = r * QUARTER_KAPPA;
        let mut path = Self::new();
        path.builder.move_to(cx, cy - r);
        path.builder.cubic_to(cx + k, cy - r, cx + r, cy - k, cx + r, cy);
        path.builder.cubic_to(cx + r, cy + k, cx + k, cy + r, cx, cy + r);
        path.builder.close();
        path.include(cx, cy - r);
        path.include(cx + r, cy + r);
        path
    }

    /// Closed polygon through the given vertices
    pub fn polygon(points: &[(f32, f32)]) -> Self {
        let mut path = Self::new();
        for (i, &(x, y)) in points.iter().enumerate() {
            if i == 0 {
                path.move_to(x, y);
            } else {
                path.line_to(x, y);
            }
        }
        path.close();
        path
    }

    /// Start a new contour
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(x, y);
        self.include(x, y);
    }

    /// Extend the current contour; an empty path starts one here instead.
    pub fn line_to(&mut self, x: f32, y: f32) {
        if self.builder.is_empty() {
            self.builder.move_to(x, y);
        } else {
            self.builder.line_to(x, y);
        }
        self.include(x, y);
    }

    pub fn close(&mut self) {
        self.builder.close();
    }

    /// Append a closed rectangle contour; degenerate rectangles are skipped.
    pub fn add_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        if let Some(rect) = Rect::from_xywh(x, y, w, h) {
            self.builder.push_rect(rect);
            self.include(rect.left(), rect.top());
            self.include(rect.right(), rect.bottom());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.builder.is_empty()
    }

    /// `(min_x, min_y, max_x, max_y)` of the geometry, `None` until the
    /// path has at least one segment.
    pub fn bounds(&self) -> Option<(f32, f32, f32, f32)> {
        self.to_skia().and(self.extent)
    }

    /// Finished path for rasterizing; `None` when nothing would be drawn.
    pub fn to_skia(&self) -> Option<tiny_skia::Path> {
        self.builder.clone().finish()
    }

    fn include(&mut self, x: f32, y: f32) {
        self.extent = Some(match self.extent {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }
}
