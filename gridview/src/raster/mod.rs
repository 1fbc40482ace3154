//! Off-screen bitmap surfaces and the immutable images they produce.
//!
//! [`BitmapSurface`] is the drawing primitive tiles are rasterized through.
//! [`SkiaSurface`] implements it in software on `tiny-skia`; a host with a
//! native bitmap API can provide its own implementation.

use std::fmt;
use std::sync::Arc;

use tiny_skia::{Color, LineCap, Paint, PathBuilder, Pixmap, Stroke, Transform};

use gridview_core::Rgba;

use crate::error::RenderError;

/// An immutable rasterized tile covering one coarse cell.
///
/// Pixels are premultiplied RGBA, row-major, top row first. Clones share
/// the pixel buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct TileImage {
    width: u32,
    height: u32,
    cell_units: i32,
    pixels: Arc<[u8]>,
}

impl TileImage {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Font units covered by one copy of the tile along each axis.
    pub fn cell_units(&self) -> i32 {
        self.cell_units
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Premultiplied RGBA at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        let px = self.pixels.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Returns true if every pixel is fully transparent.
    pub fn is_blank(&self) -> bool {
        self.pixels.chunks_exact(4).all(|px| px[3] == 0)
    }

    /// Returns true if both images share one pixel buffer.
    pub fn shares_pixels(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels)
    }
}

impl fmt::Debug for TileImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TileImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("cell_units", &self.cell_units)
            .finish_non_exhaustive()
    }
}

/// An off-screen RGBA surface lines can be stroked into.
pub trait BitmapSurface: Sized {
    /// Allocate a transparent surface. Fails for empty or oversized
    /// dimensions.
    fn allocate(width: u32, height: u32) -> Result<Self, RenderError>;

    /// Stroke a straight line between two pixel positions (origin top-left).
    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), color: Rgba, width: f32);

    /// Freeze the surface into an image covering `cell_units` font units.
    fn finish(self, cell_units: i32) -> TileImage;
}

/// Software surface backed by a `tiny_skia::Pixmap`.
pub struct SkiaSurface {
    pixmap: Pixmap,
}

impl BitmapSurface for SkiaSurface {
    fn allocate(width: u32, height: u32) -> Result<Self, RenderError> {
        Pixmap::new(width, height)
            .map(|pixmap| Self { pixmap })
            .ok_or(RenderError::SurfaceAllocation { width, height })
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), color: Rgba, width: f32) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.0, from.1);
        pb.line_to(to.0, to.1);
        let Some(path) = pb.finish() else {
            return;
        };
        let mut paint = Paint::default();
        paint.set_color(to_skia(color));
        paint.anti_alias = true;
        let stroke = Stroke {
            width,
            line_cap: LineCap::Butt,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    fn finish(self, cell_units: i32) -> TileImage {
        let width = self.pixmap.width();
        let height = self.pixmap.height();
        TileImage {
            width,
            height,
            cell_units,
            pixels: self.pixmap.take().into(),
        }
    }
}

fn to_skia(color: Rgba) -> Color {
    let c = color.clamped();
    Color::from_rgba(c.r, c.g, c.b, c.a).unwrap_or(Color::TRANSPARENT)
}
