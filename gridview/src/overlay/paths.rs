//! Vector-path rendering: every line of a tier in absolute coordinates.
//!
//! Cost grows with the extent divided by the tier unit, which is why tiles
//! are the default. Kept for hosts whose layers can't repeat images.

use gridview_core::{GridTier, TierUnits, ViewBounds, axis_positions};

use crate::host::LineSegment;

/// Vertical then horizontal segments spanning `extent` for `tier`.
pub fn path_segments(tier: GridTier, units: &TierUnits, extent: &ViewBounds) -> Vec<LineSegment> {
    let xs = axis_positions(tier, units, extent.x_min..extent.x_max);
    let ys = axis_positions(tier, units, extent.y_min..extent.y_max);
    let (bottom, top) = (f64::from(extent.y_min), f64::from(extent.y_max));
    let (left, right) = (f64::from(extent.x_min), f64::from(extent.x_max));

    let vertical = xs.into_iter().map(|x| {
        let x = f64::from(x);
        LineSegment {
            from: (x, bottom),
            to: (x, top),
        }
    });
    let horizontal = ys.into_iter().map(|y| {
        let y = f64::from(y);
        LineSegment {
            from: (left, y),
            to: (right, y),
        }
    });
    vertical.chain(horizontal).collect()
}
