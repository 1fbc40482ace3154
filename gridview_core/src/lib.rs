//! Core grid overlay logic for the glyph editor.
//!
//! This crate provides the pure building blocks of the grid overlay:
//! coordinate rounding, tier geometry, content bounds tracking, zoom-based
//! visibility, tier colors and the per-view overlay state machine. It
//! contains no rendering, host, or platform-specific code.

#![deny(unsafe_code)]

pub mod bounds;
pub mod color;
pub mod coord;
pub mod geometry;
pub mod state;
pub mod tier;
pub mod visibility;

pub use bounds::{BoundsTracker, ContentKey, GlyphMetrics, ViewBounds};
pub use color::{AlphaScales, Rgba, TierPalette};
pub use coord::{cell_offset, round_down, round_up};
pub use geometry::{CellPlan, Label, axis_positions, label_points};
pub use state::{EditorEvent, Invalidation, OverlayState};
pub use tier::{GeometryError, GridTier, LabelSet, LabelTier, TierSet, TierUnits};
pub use visibility::{Thresholds, Visibility};
