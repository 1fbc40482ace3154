//! Test doubles shared by the overlay and adapter tests.

use gridview_core::{GlyphMetrics, Label, Rgba, ViewBounds};

use crate::config::Preferences;
use crate::error::RenderError;
use crate::host::{EditorHost, LabelStyle, LayerId, LayerKind, LineSegment, OverlayContainer};
use crate::raster::{BitmapSurface, TileImage};

/// Everything the overlay did to one layer.
#[derive(Debug, Clone)]
pub(crate) struct RecordedLayer {
    pub name: String,
    pub kind: LayerKind,
    pub visible: bool,
    pub tile: Option<(TileImage, ViewBounds)>,
    pub tile_sets: usize,
    pub lines: Option<(Vec<LineSegment>, Rgba, f32)>,
    pub labels: Vec<(Label, LabelStyle)>,
    pub clears: usize,
}

/// Container that records every call.
#[derive(Debug)]
pub(crate) struct RecordingContainer {
    pub layers: Vec<RecordedLayer>,
    pub scale: f64,
    pub clears: usize,
    pub panic_on_set_tile: bool,
}

impl RecordingContainer {
    pub fn new(scale: f64) -> Self {
        Self {
            layers: Vec::new(),
            scale,
            clears: 0,
            panic_on_set_tile: false,
        }
    }

    pub fn layer(&self, name: &str) -> &RecordedLayer {
        self.layers
            .iter()
            .find(|layer| layer.name == name)
            .unwrap_or_else(|| panic!("no layer named {name}"))
    }

    pub fn names(&self) -> Vec<&str> {
        self.layers.iter().map(|layer| layer.name.as_str()).collect()
    }

    pub fn visible(&self) -> Vec<&str> {
        self.layers
            .iter()
            .filter(|layer| layer.visible)
            .map(|layer| layer.name.as_str())
            .collect()
    }

    fn get_mut(&mut self, id: LayerId) -> &mut RecordedLayer {
        &mut self.layers[id.0 as usize]
    }
}

impl OverlayContainer for RecordingContainer {
    fn clear(&mut self) {
        self.layers.clear();
        self.clears += 1;
    }

    fn append_layer(&mut self, name: &str, kind: LayerKind) -> LayerId {
        self.layers.push(RecordedLayer {
            name: name.to_owned(),
            kind,
            visible: true,
            tile: None,
            tile_sets: 0,
            lines: None,
            labels: Vec::new(),
            clears: 0,
        });
        LayerId(self.layers.len() as u32 - 1)
    }

    fn clear_layer(&mut self, layer: LayerId) {
        let layer = self.get_mut(layer);
        layer.tile = None;
        layer.lines = None;
        layer.labels.clear();
        layer.clears += 1;
    }

    fn set_visible(&mut self, layer: LayerId, visible: bool) {
        self.get_mut(layer).visible = visible;
    }

    fn set_tile(&mut self, layer: LayerId, tile: &TileImage, extent: ViewBounds) {
        assert!(!self.panic_on_set_tile, "set_tile rejected the tile");
        let layer = self.get_mut(layer);
        layer.tile = Some((tile.clone(), extent));
        layer.tile_sets += 1;
    }

    fn set_lines(&mut self, layer: LayerId, lines: &[LineSegment], color: Rgba, width: f32) {
        self.get_mut(layer).lines = Some((lines.to_vec(), color, width));
    }

    fn add_label(&mut self, layer: LayerId, label: &Label, style: &LabelStyle) {
        self.get_mut(layer).labels.push((label.clone(), *style));
    }

    fn cumulative_scale(&self) -> f64 {
        self.scale
    }
}

/// Host with a recording container and settable inputs.
#[derive(Debug)]
pub(crate) struct FakeHost {
    pub container: RecordingContainer,
    pub glyph: Option<GlyphMetrics>,
    pub prefs: Option<Preferences>,
    pub device_scale: f64,
}

impl FakeHost {
    pub fn new(scale: f64) -> Self {
        Self {
            container: RecordingContainer::new(scale),
            glyph: Some(sample_glyph()),
            prefs: Some(sample_prefs()),
            device_scale: 1.0,
        }
    }
}

impl EditorHost for FakeHost {
    type Container = RecordingContainer;

    fn container_mut(&mut self) -> &mut RecordingContainer {
        &mut self.container
    }

    fn glyph(&self) -> Option<GlyphMetrics> {
        self.glyph
    }

    fn preferences(&self) -> Option<Preferences> {
        self.prefs
    }

    fn device_scale_factor(&self) -> f64 {
        self.device_scale
    }
}

/// Surface that can never be allocated.
pub(crate) struct FailingSurface;

impl BitmapSurface for FailingSurface {
    fn allocate(width: u32, height: u32) -> Result<Self, RenderError> {
        Err(RenderError::SurfaceAllocation { width, height })
    }

    fn stroke_line(&mut self, _from: (f32, f32), _to: (f32, f32), _color: Rgba, _width: f32) {}

    fn finish(self, _cell_units: i32) -> TileImage {
        unreachable!("never allocated")
    }
}

/// 1000 UPM, descender -200, advance 600.
pub(crate) fn sample_glyph() -> GlyphMetrics {
    GlyphMetrics {
        units_per_em: 1000,
        descender: -200,
        width: 600,
    }
}

/// 200-unit margin, white background, opaque black grid.
pub(crate) fn sample_prefs() -> Preferences {
    Preferences {
        buffer_margin: 200,
        background: Rgba::WHITE,
        grid: Rgba::BLACK,
    }
}
