//! Configuration structures and loading logic.

mod io;
pub mod monitor;

pub use io::{config_dir, config_path};

use serde::{Deserialize, Serialize};

use gridview_core::{AlphaScales, GeometryError, Rgba, Thresholds, TierUnits};

/// Top-level configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub grid: GridConfig,
    pub tiers: TierUnits,
    pub thresholds: Thresholds,
    pub colors: ColorConfig,
    pub labels: LabelConfig,
}

/// How grid lines reach the display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// One rasterized coarse cell per tier, repeated by the host.
    #[default]
    Tiled,
    /// Vector lines in absolute coordinates across the whole extent.
    Paths,
}

/// Grid extent and rasterization settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Margin around the glyph box, in font units. Used when the host
    /// stores no margin of its own.
    pub buffer_margin: i32,
    pub strategy: Strategy,
    /// Largest absolute coordinate any layer extends to, in font units.
    pub max_extent: i32,
    /// Largest tile edge in device pixels. Bigger tiles are rendered at this
    /// size and stretched by the host.
    pub max_tile_pixels: u32,
    /// Stroke width in logical pixels.
    pub line_width: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            buffer_margin: 200,
            strategy: Strategy::Tiled,
            max_extent: 32_000,
            max_tile_pixels: 4096,
            line_width: 1.0,
        }
    }
}

impl GridConfig {
    /// Returns `max_extent` rounded down to a whole number of `cell` units
    /// so repeated tiles stay aligned to the coarse lattice.
    pub fn effective_max_extent(&self, cell: i32) -> i32 {
        let cell = cell.max(1);
        (self.max_extent.max(cell) / cell) * cell
    }

    /// Returns `max_tile_pixels`, at least 1.
    pub fn effective_max_tile_pixels(&self) -> u32 {
        self.max_tile_pixels.max(1)
    }

    /// Returns `line_width` clamped to [0.25, 8.0].
    pub fn effective_line_width(&self) -> f32 {
        if self.line_width.is_nan() {
            return 1.0;
        }
        self.line_width.clamp(0.25, 8.0)
    }
}

/// Fallback colors and per-tier alpha scaling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    /// Base grid color, used when the host stores none.
    pub grid: Rgba,
    /// Background color, used when the host stores none.
    pub background: Rgba,
    /// Alpha multiplier for the 1-unit tier (0.1–0.2).
    pub fine_alpha: f32,
    /// Alpha multiplier for the 10-unit tier.
    pub medium_alpha: f32,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            grid: Rgba::new(0.0, 0.0, 0.0, 0.4),
            background: Rgba::WHITE,
            fine_alpha: 0.1,
            medium_alpha: 0.3,
        }
    }
}

impl ColorConfig {
    pub fn alpha_scales(&self) -> AlphaScales {
        AlphaScales {
            fine: self.fine_alpha,
            medium: self.medium_alpha,
        }
    }
}

/// Coordinate label appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub point_size: f32,
    /// Horizontal and vertical padding around the label text.
    pub padding: [f32; 2],
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            point_size: 12.0,
            padding: [5.0, 2.0],
        }
    }
}

impl Config {
    /// Reject configurations the planner can't work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tiers.validate()?;
        Ok(())
    }
}

/// Preference values captured once per preferences-changed event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preferences {
    pub buffer_margin: i32,
    pub background: Rgba,
    pub grid: Rgba,
}

impl Preferences {
    /// Snapshot built from config fallbacks, for hosts without stored values.
    pub fn from_config(config: &Config) -> Self {
        Self {
            buffer_margin: config.grid.buffer_margin,
            background: config.colors.background,
            grid: config.colors.grid,
        }
    }
}

/// Why a configuration could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    #[error("parse error in {}: {source}", .path.display())]
    Parse {
        path: std::path::PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid tier units: {0}")]
    Tiers(#[from] GeometryError),
}
