//! Grid line placement for each tier.
//!
//! The tiled renderer draws a single coarse cell and repeats it, so the
//! primary output here is `CellPlan`: cell-local offsets per tier. Absolute
//! positions across a range are still available for the vector-path
//! strategy, and label points are laid out on the coarse lattice.
//!
//! Tiers never overlap: a position is emitted only by the coarsest tier whose
//! unit divides it. Exclusion is done with a modulus test on the tier's own
//! stepping, never by filtering a finer tier's output afterwards.

use std::ops::Range;

use crate::bounds::ViewBounds;
use crate::coord::round_up;
use crate::tier::{GridTier, LabelTier, TierUnits};

/// Cell-local line offsets for every tier within one coarse cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellPlan {
    units: TierUnits,
    offsets: [Vec<i32>; 3],
}

impl CellPlan {
    /// Plan the offsets of every tier in `(0, units.coarse)`.
    ///
    /// Zero is the cell border and belongs to no tier; it is drawn by the
    /// coarse tier's cell outline.
    pub fn new(units: TierUnits) -> Self {
        let offsets = GridTier::ALL.map(|tier| cell_offsets(tier, &units));
        Self { units, offsets }
    }

    /// Offsets for `tier`, ascending.
    pub fn offsets(&self, tier: GridTier) -> &[i32] {
        &self.offsets[tier.index()]
    }

    /// Size of the repeated cell in font units.
    pub fn cell_units(&self) -> i32 {
        self.units.coarse
    }

    pub fn units(&self) -> &TierUnits {
        &self.units
    }
}

impl Default for CellPlan {
    fn default() -> Self {
        Self::new(TierUnits::default())
    }
}

fn cell_offsets(tier: GridTier, units: &TierUnits) -> Vec<i32> {
    let unit = units.unit(tier);
    let cell = units.coarse;
    (unit..cell)
        .step_by(unit as usize)
        .filter(|&offset| !divisible_by_coarser(offset, tier, units))
        .collect()
}

fn divisible_by_coarser(position: i32, tier: GridTier, units: &TierUnits) -> bool {
    tier.coarser()
        .iter()
        .any(|&coarser| position % units.unit(coarser) == 0)
}

/// Absolute line positions of `tier` in the half-open `range`.
///
/// Fine and medium tiers skip the origin and any position owned by a coarser
/// tier. The coarse tier emits every multiple of its unit, origin included.
pub fn axis_positions(tier: GridTier, units: &TierUnits, range: Range<i32>) -> Vec<i32> {
    let unit = units.unit(tier);
    let start = round_up(range.start, unit);
    if start >= range.end {
        return Vec::new();
    }
    (start..range.end)
        .step_by(unit as usize)
        .filter(|&p| tier == GridTier::Coarse || (p != 0 && !divisible_by_coarser(p, tier, units)))
        .collect()
}

/// A coordinate label on the coarse lattice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub x: i32,
    pub y: i32,
    pub tier: LabelTier,
}

impl Label {
    /// Display text, `"x y"`.
    pub fn text(&self) -> String {
        format!("{} {}", self.x, self.y)
    }
}

/// Labels for every coarse lattice point inside `bounds` (half-open).
///
/// Points where both coordinates sit on the double-coarse lattice go to
/// `LabelTier::DoubleCoarse`; every other point is `LabelTier::Coarse`.
pub fn label_points(bounds: &ViewBounds, units: &TierUnits) -> Vec<Label> {
    let xs = axis_positions(GridTier::Coarse, units, bounds.x_min..bounds.x_max);
    let ys = axis_positions(GridTier::Coarse, units, bounds.y_min..bounds.y_max);
    let double = units.double_coarse();
    let mut labels = Vec::with_capacity(xs.len() * ys.len());
    for &x in &xs {
        for &y in &ys {
            let tier = if x % double == 0 && y % double == 0 {
                LabelTier::DoubleCoarse
            } else {
                LabelTier::Coarse
            };
            labels.push(Label { x, y, tier });
        }
    }
    labels
}
