//! Per-view grid renderer.
//!
//! `GridOverlay` owns one layer per line tier plus two label layers, and
//! drives them through the lifecycle in [`OverlayState`]. Each rebuild pass
//! regenerates only what the pending [`Invalidation`] names:
//!
//! - zoom: tile resolution and tier visibility; geometry is left alone.
//! - color: tile pixels and label colors at the same resolution.
//! - content: bounds, cell plan and layer contents, then tiles.

mod paths;

use std::marker::PhantomData;

use gridview_core::{
    BoundsTracker, CellPlan, ContentKey, GlyphMetrics, GridTier, Invalidation, LabelTier,
    OverlayState, TierPalette, ViewBounds, Visibility, label_points,
};

use crate::config::{Config, Preferences, Strategy};
use crate::error::RenderError;
use crate::host::{LabelStyle, LayerId, LayerKind, OverlayContainer};
use crate::raster::{BitmapSurface, SkiaSurface};
use crate::tile::{TileCache, TileKey, tile_pixel_size};

pub use paths::path_segments;

/// Layer handles installed by [`GridOverlay::build`].
#[derive(Debug, Clone, Copy)]
struct Layers {
    tiers: [LayerId; 3],
    labels: [LayerId; 2],
}

impl Layers {
    fn all(&self) -> impl Iterator<Item = LayerId> + '_ {
        self.tiers.iter().chain(&self.labels).copied()
    }
}

/// Grid renderer for one glyph view.
///
/// `S` is the bitmap surface tiles are rasterized with.
pub struct GridOverlay<S: BitmapSurface = SkiaSurface> {
    config: Config,
    prefs: Preferences,
    palette: TierPalette,
    plan: CellPlan,
    bounds: BoundsTracker,
    tiles: TileCache,
    layers: Option<Layers>,
    state: OverlayState,
    scale: Option<f64>,
    visibility: Visibility,
    surface: PhantomData<fn() -> S>,
}

impl<S: BitmapSurface> GridOverlay<S> {
    /// Create an unbuilt overlay. `config` must already be validated.
    pub fn new(config: Config, prefs: Preferences) -> Self {
        let palette = resolve_palette(&config, &prefs);
        let plan = CellPlan::new(config.tiers);
        Self {
            config,
            prefs,
            palette,
            plan,
            bounds: BoundsTracker::new(),
            tiles: TileCache::new(),
            layers: None,
            state: OverlayState::Unbuilt,
            scale: None,
            visibility: Visibility::default(),
            surface: PhantomData,
        }
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    pub fn palette(&self) -> &TierPalette {
        &self.palette
    }

    pub fn plan(&self) -> &CellPlan {
        &self.plan
    }

    /// Content bounds of the last build.
    pub fn bounds(&self) -> Option<ViewBounds> {
        self.bounds.current()
    }

    pub fn tiles(&self) -> &TileCache {
        &self.tiles
    }

    /// Visibility applied by the last completed pass.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Zoom scale of the last completed pass.
    pub fn scale(&self) -> Option<f64> {
        self.scale
    }

    /// Clear the container and install fresh layers, all hidden.
    pub fn build<C: OverlayContainer>(&mut self, container: &mut C) {
        container.clear();
        let kind = match self.config.grid.strategy {
            Strategy::Tiled => LayerKind::Tiled,
            Strategy::Paths => LayerKind::Path,
        };
        let tiers = GridTier::ALL.map(|tier| container.append_layer(tier.name(), kind));
        let labels = LabelTier::ALL.map(|tier| container.append_layer(tier.name(), LayerKind::Text));
        let layers = Layers { tiers, labels };
        for id in layers.all() {
            container.set_visible(id, false);
        }
        self.layers = Some(layers);
        self.tiles.clear();
        self.bounds.reset();
        self.state.layers_built();
        self.state.invalidate(Invalidation::all());
        log::debug!("overlay: layers built ({:?})", self.config.grid.strategy);
    }

    /// Adopt a new preference snapshot.
    ///
    /// Colors are always re-resolved; a changed buffer margin also marks
    /// the content stale.
    pub fn set_preferences(&mut self, prefs: Preferences) {
        let mut flags = Invalidation::COLOR;
        if prefs.buffer_margin != self.prefs.buffer_margin {
            flags |= Invalidation::CONTENT;
        }
        self.prefs = prefs;
        self.palette = resolve_palette(&self.config, &self.prefs);
        self.state.invalidate(flags);
    }

    /// Replace the configuration. Layers are dropped so the next pass
    /// rebuilds them with the new strategy and tier units.
    pub fn reconfigure(&mut self, config: Config) {
        self.palette = resolve_palette(&config, &self.prefs);
        self.plan = CellPlan::new(config.tiers);
        self.config = config;
        self.layers = None;
        self.tiles.clear();
        self.bounds.reset();
        self.state.reset();
    }

    pub fn invalidate(&mut self, flags: Invalidation) {
        self.state.invalidate(flags);
    }

    /// Regenerate everything on the next pass, even if inputs look unchanged.
    pub fn force_redraw(&mut self) {
        self.bounds.reset();
        self.state.invalidate(Invalidation::all());
    }

    /// Run a rebuild pass for whatever is pending.
    ///
    /// With no glyph the overlay is cleared. Tile failures are handled here
    /// by keeping the previous tile; only a host-reported scale that can't be
    /// drawn at all is returned as an error, with every layer hidden and the
    /// pass left pending.
    pub fn refresh<C: OverlayContainer>(
        &mut self,
        container: &mut C,
        glyph: Option<GlyphMetrics>,
        device_scale: f64,
    ) -> Result<(), RenderError> {
        let Some(layers) = self.layers else {
            return Ok(());
        };
        let Some(metrics) = glyph else {
            self.clear(container);
            return Ok(());
        };
        if self.state == OverlayState::Cleared {
            self.state.invalidate(Invalidation::CONTENT);
        }
        let pending = self.state.pending();
        if pending.is_empty() {
            return Ok(());
        }

        let scale = container.cumulative_scale();
        if !scale.is_finite() || scale <= 0.0 {
            for id in layers.all() {
                container.set_visible(id, false);
            }
            self.visibility = Visibility::default();
            return Err(RenderError::InvalidScale(scale));
        }

        let mut content_rebuilt = false;
        if pending.contains(Invalidation::CONTENT) || self.bounds.current().is_none() {
            let key = ContentKey {
                metrics,
                buffer: self.prefs.buffer_margin,
                granularity: self.plan.cell_units(),
            };
            if self.bounds.update(key).is_some() {
                self.rebuild_content(container, &layers);
                content_rebuilt = true;
            }
        }
        let Some(bounds) = self.bounds.current() else {
            return Ok(());
        };
        let extent = bounds.clamped(
            self.config
                .grid
                .effective_max_extent(self.plan.cell_units()),
        );

        let recolor = content_rebuilt || pending.contains(Invalidation::COLOR);
        if recolor {
            self.populate_labels(container, &layers, &extent);
        }

        let visibility = self.config.thresholds.evaluate(scale);
        let device_scale = sanitize_device_scale(device_scale);
        match self.config.grid.strategy {
            Strategy::Tiled => {
                self.update_tiles(
                    container,
                    &layers,
                    extent,
                    visibility,
                    scale,
                    device_scale,
                    content_rebuilt,
                );
            }
            Strategy::Paths => {
                self.update_paths(container, &layers, &extent, visibility, recolor);
            }
        }
        for tier in LabelTier::ALL {
            container.set_visible(layers.labels[tier.index()], visibility.label(tier));
        }

        log::debug!(
            "overlay: pass {:?} at scale {scale:.3}: lines {:?} labels {:?}",
            pending,
            visibility.lines,
            visibility.labels
        );
        self.visibility = visibility;
        self.scale = Some(scale);
        self.state.finish_rebuild();
        Ok(())
    }

    /// Empty and hide every layer and drop all tiles (no glyph open).
    pub fn clear<C: OverlayContainer>(&mut self, container: &mut C) {
        if let Some(layers) = self.layers {
            for id in layers.all() {
                container.clear_layer(id);
                container.set_visible(id, false);
            }
        }
        self.tiles.clear();
        self.bounds.reset();
        self.visibility = Visibility::default();
        self.state.clear();
    }

    /// Drop all state after a failed pass and empty the container, so the
    /// next event rebuilds from scratch instead of drawing over a partial
    /// frame.
    pub fn fail_safe_reset<C: OverlayContainer>(&mut self, container: &mut C) {
        self.layers = None;
        self.tiles.clear();
        self.bounds.reset();
        self.visibility = Visibility::default();
        self.scale = None;
        self.state.reset();
        container.clear();
    }

    fn rebuild_content<C: OverlayContainer>(&mut self, container: &mut C, layers: &Layers) {
        self.plan = CellPlan::new(self.config.tiers);
        self.tiles.clear();
        for &id in &layers.tiers {
            container.clear_layer(id);
        }
    }

    fn populate_labels<C: OverlayContainer>(
        &self,
        container: &mut C,
        layers: &Layers,
        extent: &ViewBounds,
    ) {
        for &id in &layers.labels {
            container.clear_layer(id);
        }
        let style = self.label_style();
        for label in label_points(extent, self.plan.units()) {
            container.add_label(layers.labels[label.tier.index()], &label, &style);
        }
    }

    fn update_tiles<C: OverlayContainer>(
        &mut self,
        container: &mut C,
        layers: &Layers,
        extent: ViewBounds,
        visibility: Visibility,
        scale: f64,
        device_scale: f64,
        content_rebuilt: bool,
    ) {
        let cell = self.plan.cell_units();
        let line_width = self.config.grid.effective_line_width() * device_scale as f32;
        let pixels = tile_pixel_size(
            cell,
            scale,
            device_scale,
            self.config.grid.effective_max_tile_pixels(),
        );

        for tier in GridTier::ALL {
            let layer = layers.tiers[tier.index()];
            if !visibility.line(tier) {
                container.set_visible(layer, false);
                continue;
            }
            let rendered = pixels.clone().and_then(|pixels| {
                let key = TileKey {
                    pixels,
                    cell_units: cell,
                    color: self.palette.stroke(tier),
                    line_width,
                };
                self.tiles.ensure::<S>(tier, &self.plan, key)
            });
            let fresh = match rendered {
                Ok(fresh) => fresh,
                Err(e) => {
                    log::debug!("tile: keeping previous {tier:?} tile: {e}");
                    false
                }
            };
            match self.tiles.get(tier) {
                Some(tile) => {
                    if fresh || content_rebuilt {
                        container.set_tile(layer, tile, extent);
                    }
                    container.set_visible(layer, true);
                }
                None => container.set_visible(layer, false),
            }
        }
    }

    fn update_paths<C: OverlayContainer>(
        &self,
        container: &mut C,
        layers: &Layers,
        extent: &ViewBounds,
        visibility: Visibility,
        redraw: bool,
    ) {
        let width = self.config.grid.effective_line_width();
        for tier in GridTier::ALL {
            let layer = layers.tiers[tier.index()];
            if redraw {
                let segments = path_segments(tier, self.plan.units(), extent);
                container.set_lines(layer, &segments, self.palette.stroke(tier), width);
            }
            container.set_visible(layer, visibility.line(tier));
        }
    }

    /// Label appearance for the current palette.
    pub fn label_style(&self) -> LabelStyle {
        let labels = &self.config.labels;
        LabelStyle {
            point_size: labels.point_size,
            padding: (labels.padding[0], labels.padding[1]),
            fill: self.palette.text,
            background: self.palette.label_background,
        }
    }
}

fn resolve_palette(config: &Config, prefs: &Preferences) -> TierPalette {
    TierPalette::resolve(prefs.grid, prefs.background, config.colors.alpha_scales())
}

fn sanitize_device_scale(device_scale: f64) -> f64 {
    if device_scale.is_finite() && device_scale > 0.0 {
        device_scale
    } else {
        1.0
    }
}
