//! Host editor collaborators.
//!
//! The overlay never talks to a concrete editor. It reaches the per-view
//! extension container, the glyph/font metrics and the stored preferences
//! through these traits; tests use a recording container, headless callers
//! use [`NullContainer`].

use gridview_core::{GlyphMetrics, Label, Rgba, ViewBounds};

use crate::config::Preferences;
use crate::raster::TileImage;

/// Opaque handle to a layer inside an [`OverlayContainer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId(pub u32);

/// What a layer displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    /// Repeats a single tile image across an extent.
    Tiled,
    /// Strokes vector line segments.
    Path,
    /// Holds text labels.
    Text,
}

/// A straight line in font units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub from: (f64, f64),
    pub to: (f64, f64),
}

/// Appearance of coordinate labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelStyle {
    pub point_size: f32,
    /// Horizontal and vertical padding around the text.
    pub padding: (f32, f32),
    pub fill: Rgba,
    pub background: Rgba,
}

/// The per-view extension container layers are installed into.
pub trait OverlayContainer {
    /// Remove every layer.
    fn clear(&mut self);

    /// Append a named child layer.
    fn append_layer(&mut self, name: &str, kind: LayerKind) -> LayerId;

    /// Remove a layer's content (tile, lines, or labels).
    fn clear_layer(&mut self, layer: LayerId);

    fn set_visible(&mut self, layer: LayerId, visible: bool);

    /// Repeat `tile` across `extent`, one copy per `tile.cell_units()` font
    /// units, starting at the extent's lower-left corner. Extent edges are
    /// multiples of the cell size.
    fn set_tile(&mut self, layer: LayerId, tile: &TileImage, extent: ViewBounds);

    /// Stroke `lines` with `color` at `width` logical pixels.
    fn set_lines(&mut self, layer: LayerId, lines: &[LineSegment], color: Rgba, width: f32);

    fn add_label(&mut self, layer: LayerId, label: &Label, style: &LabelStyle);

    /// Current pixels-per-font-unit from the cumulative view transform.
    fn cumulative_scale(&self) -> f64;
}

/// The glyph editor hosting the overlay.
pub trait EditorHost {
    type Container: OverlayContainer;

    /// The overlay's extension container for this view.
    fn container_mut(&mut self) -> &mut Self::Container;

    /// Metrics of the glyph being edited, or `None` when no glyph is open.
    fn glyph(&self) -> Option<GlyphMetrics>;

    /// Stored preference values. `None` means the host keeps no grid
    /// preferences and the configured fallbacks apply.
    fn preferences(&self) -> Option<Preferences> {
        None
    }

    /// Physical pixels per logical pixel of the output surface.
    fn device_scale_factor(&self) -> f64 {
        1.0
    }
}

/// Container that discards everything, for headless operation.
///
/// Reports a fixed zoom scale.
#[derive(Debug, Clone, Copy)]
pub struct NullContainer {
    pub scale: f64,
    next_layer: u32,
}

impl NullContainer {
    pub fn new(scale: f64) -> Self {
        Self {
            scale,
            next_layer: 0,
        }
    }
}

impl Default for NullContainer {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl OverlayContainer for NullContainer {
    fn clear(&mut self) {
        self.next_layer = 0;
    }

    fn append_layer(&mut self, _name: &str, _kind: LayerKind) -> LayerId {
        let id = LayerId(self.next_layer);
        self.next_layer += 1;
        id
    }

    fn clear_layer(&mut self, _layer: LayerId) {}

    fn set_visible(&mut self, _layer: LayerId, _visible: bool) {}

    fn set_tile(&mut self, _layer: LayerId, _tile: &TileImage, _extent: ViewBounds) {}

    fn set_lines(&mut self, _layer: LayerId, _lines: &[LineSegment], _color: Rgba, _width: f32) {}

    fn add_label(&mut self, _layer: LayerId, _label: &Label, _style: &LabelStyle) {}

    fn cumulative_scale(&self) -> f64 {
        self.scale
    }
}
