//! Grid colors derived from the host's base grid color.
//!
//! Finer tiers are drawn more faintly by scaling the base alpha. The
//! resolver is a pure function of the base grid color, the background color
//! and the alpha scales.

use serde::{Deserialize, Serialize};

use crate::tier::GridTier;

/// Straight-alpha RGBA color, components in `0.0..=1.0`.
///
/// Serialized as a 4-element array, matching how hosts store preference
/// colors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Copy with every component clamped to `0.0..=1.0`. NaN becomes 0.
    pub fn clamped(self) -> Self {
        let c = |v: f32| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
        Self::new(c(self.r), c(self.g), c(self.b), c(self.a))
    }

    /// Copy with alpha multiplied by `factor`.
    pub fn with_alpha_scaled(self, factor: f32) -> Self {
        Self {
            a: self.a * factor,
            ..self
        }
        .clamped()
    }

    /// Copy with alpha replaced.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }.clamped()
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<[f32; 4]> for Rgba {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Rgba> for [f32; 4] {
    fn from(c: Rgba) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

/// Alpha multipliers for the finer tiers. The coarse tier uses the base
/// alpha unscaled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlphaScales {
    /// Clamped to `0.1..=0.2`.
    pub fine: f32,
    pub medium: f32,
}

impl Default for AlphaScales {
    fn default() -> Self {
        Self {
            fine: 0.1,
            medium: 0.3,
        }
    }
}

impl AlphaScales {
    pub fn effective_fine(&self) -> f32 {
        self.fine.clamp(0.1, 0.2)
    }

    pub fn effective_medium(&self) -> f32 {
        self.medium.clamp(0.0, 1.0)
    }
}

/// Resolved stroke and text colors for one preference snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierPalette {
    pub fine: Rgba,
    pub medium: Rgba,
    pub coarse: Rgba,
    /// Label text, full base color.
    pub text: Rgba,
    /// Fill behind label text so labels stay legible over lines.
    pub label_background: Rgba,
}

impl TierPalette {
    pub fn resolve(grid: Rgba, background: Rgba, scales: AlphaScales) -> Self {
        let grid = grid.clamped();
        Self {
            fine: grid.with_alpha_scaled(scales.effective_fine()),
            medium: grid.with_alpha_scaled(scales.effective_medium()),
            coarse: grid,
            text: grid,
            label_background: background.clamped(),
        }
    }

    /// Stroke color for `tier`.
    pub fn stroke(&self, tier: GridTier) -> Rgba {
        match tier {
            GridTier::Fine => self.fine,
            GridTier::Medium => self.medium,
            GridTier::Coarse => self.coarse,
        }
    }
}

#[cfg(test)]
mod tests;
