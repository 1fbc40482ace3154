//! Per-tier tile rasterization and caching.
//!
//! A tile is one coarse cell rendered at the current zoom and device scale.
//! The host repeats it across the drawing extent, so memory and redraw cost
//! depend only on the tile size, never on how much of the plane is covered.
//!
//! Each tier keeps at most one live tile. A tile is regenerated when its
//! [`TileKey`] changes (zoom, color, line width, cell size) and replaced
//! wholesale, never patched. If regeneration fails the previous tile stays.

use gridview_core::{CellPlan, GridTier, Rgba};

use crate::error::RenderError;
use crate::raster::{BitmapSurface, TileImage};

/// Everything a tile's pixels depend on besides the cell plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileKey {
    /// Edge length in device pixels.
    pub pixels: u32,
    /// Edge length in font units.
    pub cell_units: i32,
    pub color: Rgba,
    /// Stroke width in device pixels.
    pub line_width: f32,
}

/// Device-pixel edge of a tile: `cell_units * scale * device_scale`,
/// rounded, capped at `max_pixels`.
///
/// Fails when the result would be empty or isn't a finite number.
pub fn tile_pixel_size(
    cell_units: i32,
    scale: f64,
    device_scale: f64,
    max_pixels: u32,
) -> Result<u32, RenderError> {
    let ideal = f64::from(cell_units) * scale * device_scale;
    if !ideal.is_finite() || ideal.round() < 1.0 {
        return Err(RenderError::InvalidTileSize(ideal));
    }
    let max = f64::from(max_pixels.max(1));
    Ok(ideal.round().min(max) as u32)
}

/// Rasterize `tier`'s lines for one cell.
///
/// Every cell-local offset is stroked on both axes. The coarse tier strokes
/// the cell's left and bottom edges; adjacent copies of the tile supply the
/// right and top edges, so each border line is drawn exactly once.
pub fn render_tier_tile<S: BitmapSurface>(
    tier: GridTier,
    plan: &CellPlan,
    key: &TileKey,
) -> Result<TileImage, RenderError> {
    let mut surface = S::allocate(key.pixels, key.pixels)?;
    let size = key.pixels as f32;
    let per_unit = size / key.cell_units.max(1) as f32;
    let width = key.line_width;

    if tier == GridTier::Coarse {
        let half = width / 2.0;
        surface.stroke_line((half, 0.0), (half, size), key.color, width);
        surface.stroke_line((0.0, size - half), (size, size - half), key.color, width);
    }

    for &offset in plan.offsets(tier) {
        let along = offset as f32 * per_unit;
        let x = snap(along, width);
        surface.stroke_line((x, 0.0), (x, size), key.color, width);
        // Image rows run top-down, font units bottom-up.
        let y = snap(size - along, width);
        surface.stroke_line((0.0, y), (size, y), key.color, width);
    }

    Ok(surface.finish(key.cell_units))
}

/// Center a stroke on whole device pixels so it stays crisp.
fn snap(position: f32, width: f32) -> f32 {
    let w = width.round().max(1.0) as i32;
    if w % 2 == 1 {
        position.floor() + 0.5
    } else {
        position.round()
    }
}

/// A rendered tile and the key it was rendered for.
#[derive(Debug, Clone)]
struct CachedTile {
    key: TileKey,
    image: TileImage,
}

/// At most one live tile per tier.
#[derive(Debug, Clone, Default)]
pub struct TileCache {
    slots: [Option<CachedTile>; 3],
}

impl TileCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure `tier`'s tile matches `key`, rendering it if needed.
    ///
    /// Returns `Ok(true)` if a new tile was rendered, `Ok(false)` if the
    /// cached tile already matched. On error the previous tile (if any) is
    /// kept untouched.
    pub fn ensure<S: BitmapSurface>(
        &mut self,
        tier: GridTier,
        plan: &CellPlan,
        key: TileKey,
    ) -> Result<bool, RenderError> {
        let slot = &mut self.slots[tier.index()];
        if slot.as_ref().is_some_and(|cached| cached.key == key) {
            return Ok(false);
        }
        let image = render_tier_tile::<S>(tier, plan, &key)?;
        log::debug!(
            "tile: rendered {:?} at {}px ({} bytes)",
            tier,
            key.pixels,
            image.pixels().len()
        );
        *slot = Some(CachedTile { key, image });
        Ok(true)
    }

    /// The live tile for `tier`.
    pub fn get(&self, tier: GridTier) -> Option<&TileImage> {
        self.slots[tier.index()].as_ref().map(|cached| &cached.image)
    }

    /// The key `tier`'s live tile was rendered for.
    pub fn key(&self, tier: GridTier) -> Option<&TileKey> {
        self.slots[tier.index()].as_ref().map(|cached| &cached.key)
    }

    /// Number of live tiles.
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every tile.
    pub fn clear(&mut self) {
        self.slots = Default::default();
    }
}
