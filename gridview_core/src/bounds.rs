//! Content bounds the grid must cover, and rebuild tracking for them.
//!
//! Bounds are derived from the glyph's advance width and the font's vertical
//! metrics plus a buffer margin, then rounded outward to the coarse unit.
//! `BoundsTracker` remembers the inputs of the last build so bounds are only
//! recomputed when one of them actually changes.

use crate::coord::{round_down, round_up};

/// Metrics read from the glyph and its font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlyphMetrics {
    pub units_per_em: i32,
    pub descender: i32,
    /// Advance width of the glyph. May be negative in malformed fonts.
    pub width: i32,
}

/// Font-unit rectangle covered by the grid. Edges are multiples of the
/// rounding granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewBounds {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

impl ViewBounds {
    /// Bounds containing the advance box and vertical metrics plus `buffer`,
    /// rounded outward to `granularity`.
    pub fn from_metrics(metrics: GlyphMetrics, buffer: i32, granularity: i32) -> Self {
        let (left, right) = if metrics.width < 0 {
            (metrics.width, 0)
        } else {
            (0, metrics.width)
        };
        let (bottom, top) = if metrics.descender <= metrics.units_per_em {
            (metrics.descender, metrics.units_per_em)
        } else {
            (metrics.units_per_em, metrics.descender)
        };
        Self {
            x_min: round_down(left.saturating_sub(buffer), granularity),
            x_max: round_up(right.saturating_add(buffer), granularity),
            y_min: round_down(bottom.saturating_sub(buffer), granularity),
            y_max: round_up(top.saturating_add(buffer), granularity),
        }
    }

    pub fn width(&self) -> i32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> i32 {
        self.y_max - self.y_min
    }

    /// Returns true if the point lies inside the bounds (edges inclusive).
    pub fn contains(&self, x: i32, y: i32) -> bool {
        (self.x_min..=self.x_max).contains(&x) && (self.y_min..=self.y_max).contains(&y)
    }

    /// Drawing extent handed to layers: these bounds clamped to
    /// `[-max_extent, max_extent]` on both axes.
    pub fn clamped(&self, max_extent: i32) -> Self {
        let max_extent = max_extent.max(0);
        let clamp = |v: i32| v.clamp(-max_extent, max_extent);
        Self {
            x_min: clamp(self.x_min),
            x_max: clamp(self.x_max),
            y_min: clamp(self.y_min),
            y_max: clamp(self.y_max),
        }
    }
}

/// Every input that affects the bounds. Two equal keys produce equal bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentKey {
    pub metrics: GlyphMetrics,
    pub buffer: i32,
    pub granularity: i32,
}

impl ContentKey {
    pub fn bounds(&self) -> ViewBounds {
        ViewBounds::from_metrics(self.metrics, self.buffer, self.granularity)
    }
}

/// Remembers the content key of the last build.
///
/// A rebuild is needed when any of width, descender, units-per-em, buffer,
/// or granularity differs from the last built values.
#[derive(Debug, Clone, Default)]
pub struct BoundsTracker {
    built: Option<ContentKey>,
    bounds: Option<ViewBounds>,
}

impl BoundsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns freshly computed bounds if `key` differs from the last build,
    /// or `None` when the existing bounds are still valid.
    pub fn update(&mut self, key: ContentKey) -> Option<ViewBounds> {
        if self.built == Some(key) {
            return None;
        }
        let bounds = key.bounds();
        log::debug!(
            "bounds: rebuilt for {:?} -> x {}..{} y {}..{}",
            key,
            bounds.x_min,
            bounds.x_max,
            bounds.y_min,
            bounds.y_max
        );
        self.built = Some(key);
        self.bounds = Some(bounds);
        Some(bounds)
    }

    /// Bounds of the last build, if any.
    pub fn current(&self) -> Option<ViewBounds> {
        self.bounds
    }

    /// Forget the last build so the next `update` always recomputes.
    pub fn reset(&mut self) {
        self.built = None;
        self.bounds = None;
    }
}
