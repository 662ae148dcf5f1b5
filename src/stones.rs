//! Stone bitmap cache
//!
//! The three stone images (white, black and the half-and-half composite)
//! are drawn once per cache with the same surface primitives the renderer
//! uses, then stamped onto every diagram.

use std::sync::OnceLock;

use image::Rgba;

use crate::pieces::StoneColor;
use crate::shapes::Path;
use crate::surface::{Paint, RadialGradient, Shadow, Surface, SurfaceFactory};

/// Side length of a stone image in pixels
pub const STONE_SIZE: u32 = 29;

/// Centre of the stone disc inside its image
pub const STONE_CENTER: f32 = 14.5;

/// Radius of the stone disc
pub const STONE_RADIUS: f32 = 10.0;

/// Focal point of the shading, up and to the left of the centre
const HIGHLIGHT: (f32, f32) = (7.5, 7.5);

/// Part of the shading, measured inward from the rim, held at the base colour
const RIM_SHARE: f32 = 0.25;

const SHADOW: Shadow = Shadow {
    offset_x: 1.0,
    offset_y: 1.0,
    blur: 3.0,
    color: Rgba([0, 0, 0, 179]),
};

struct StoneImages<S> {
    white: S,
    black: S,
    both: S,
}

/// Lazily built stone images, shared by every render through one renderer.
pub struct StoneCache<S> {
    images: OnceLock<Option<StoneImages<S>>>,
}

impl<S> Default for StoneCache<S> {
    fn default() -> Self {
        Self {
            images: OnceLock::new(),
        }
    }
}

impl<S: Surface> StoneCache<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Image for a stone colour, building all three on first use.
    ///
    /// Returns `None` if the factory cannot create surfaces.
    pub fn image<F>(&self, factory: &F, color: StoneColor) -> Option<&S>
    where
        F: SurfaceFactory<Surface = S>,
    {
        let images = self.images.get_or_init(|| build(factory)).as_ref()?;
        Some(match color {
            StoneColor::White => &images.white,
            StoneColor::Black => &images.black,
            StoneColor::Both => &images.both,
        })
    }

    /// Whether the images have been built yet
    pub fn is_built(&self) -> bool {
        self.images.get().is_some()
    }
}

fn build<F: SurfaceFactory>(factory: &F) -> Option<StoneImages<F::Surface>> {
    log::debug!("building stone images");
    let white = draw_stone(factory, StoneColor::White)?;
    let black = draw_stone(factory, StoneColor::Black)?;
    let both = draw_stone(factory, StoneColor::Both)?;
    Some(StoneImages { white, black, both })
}

/// Base and highlight colours of a stone's shading
fn stone_colors(color: StoneColor) -> (Rgba<u8>, Rgba<u8>) {
    match color {
        StoneColor::White => (Rgba([0xe0, 0xe0, 0xe0, 255]), Rgba([255, 255, 255, 255])),
        StoneColor::Black | StoneColor::Both => (Rgba([0, 0, 0, 255]), Rgba([0x40, 0x40, 0x40, 255])),
    }
}

fn shading(color: StoneColor) -> Paint {
    let (base, highlight) = stone_colors(color);
    RadialGradient::new(HIGHLIGHT, (STONE_CENTER, STONE_CENTER), STONE_RADIUS)
        .add_stop(0.0, highlight)
        .add_stop(1.0 - RIM_SHARE, base)
        .add_stop(1.0, base)
        .into()
}

fn draw_stone<F: SurfaceFactory>(factory: &F, color: StoneColor) -> Option<F::Surface> {
    let mut surface = factory.create(STONE_SIZE, STONE_SIZE)?;
    let disc = Path::circle(STONE_CENTER, STONE_CENTER, STONE_RADIUS);

    surface.save();
    surface.set_shadow(Some(SHADOW));
    surface.set_fill(Paint::Solid(stone_colors(color).0));
    surface.fill_path(&disc);
    surface.restore();

    surface.set_fill(shading(color));
    surface.fill_path(&disc);

    if color == StoneColor::Both {
        surface.set_fill(shading(StoneColor::White));
        surface.fill_path(&Path::half_circle(STONE_CENTER, STONE_CENTER, STONE_RADIUS));
    }

    Some(surface)
}
