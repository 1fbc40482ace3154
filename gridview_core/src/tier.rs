//! Grid resolution tiers and their unit sizes.
//!
//! Three nested tiers are drawn: `Fine` (1 unit), `Medium` (10 units) and
//! `Coarse` (100 units). Each finer unit must evenly divide the next coarser
//! one so a coarse cell contains a whole number of finer cells.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// One of the three nested grid resolutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GridTier {
    Fine,
    Medium,
    Coarse,
}

impl GridTier {
    /// All tiers, finest first.
    pub const ALL: [Self; 3] = [Self::Fine, Self::Medium, Self::Coarse];

    /// Layer name used when the tier is installed in a host container.
    pub fn name(self) -> &'static str {
        match self {
            Self::Fine => "lines.1",
            Self::Medium => "lines.10",
            Self::Coarse => "lines.100",
        }
    }

    /// Slot index (0 = fine) for per-tier arrays.
    pub fn index(self) -> usize {
        match self {
            Self::Fine => 0,
            Self::Medium => 1,
            Self::Coarse => 2,
        }
    }

    /// Tiers coarser than this one, whose positions this tier must skip.
    pub fn coarser(self) -> &'static [Self] {
        match self {
            Self::Fine => &[Self::Medium, Self::Coarse],
            Self::Medium => &[Self::Coarse],
            Self::Coarse => &[],
        }
    }

    /// Visibility bit for this tier.
    pub fn flag(self) -> TierSet {
        match self {
            Self::Fine => TierSet::FINE,
            Self::Medium => TierSet::MEDIUM,
            Self::Coarse => TierSet::COARSE,
        }
    }
}

/// Label text resolutions: every coarse point, and the double-coarse lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelTier {
    Coarse,
    DoubleCoarse,
}

impl LabelTier {
    pub const ALL: [Self; 2] = [Self::Coarse, Self::DoubleCoarse];

    pub fn name(self) -> &'static str {
        match self {
            Self::Coarse => "text.100",
            Self::DoubleCoarse => "text.200",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Coarse => 0,
            Self::DoubleCoarse => 1,
        }
    }

    pub fn flag(self) -> LabelSet {
        match self {
            Self::Coarse => LabelSet::COARSE,
            Self::DoubleCoarse => LabelSet::DOUBLE_COARSE,
        }
    }
}

bitflags! {
    /// Set of visible line tiers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TierSet: u8 {
        const FINE   = 1 << 0;
        const MEDIUM = 1 << 1;
        const COARSE = 1 << 2;
    }
}

bitflags! {
    /// Set of visible label tiers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LabelSet: u8 {
        const COARSE        = 1 << 0;
        const DOUBLE_COARSE = 1 << 1;
    }
}

/// Invalid tier unit configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    #[error("tier unit must be positive, got {0}")]
    NonPositiveUnit(i32),
    #[error("tier units must be strictly ascending, got {finer} then {coarser}")]
    NotAscending { finer: i32, coarser: i32 },
    #[error("tier unit {finer} does not evenly divide {coarser}")]
    NotDivisible { finer: i32, coarser: i32 },
}

/// Unit spacing of each tier, in font units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierUnits {
    pub fine: i32,
    pub medium: i32,
    pub coarse: i32,
}

impl Default for TierUnits {
    fn default() -> Self {
        Self {
            fine: 1,
            medium: 10,
            coarse: 100,
        }
    }
}

impl TierUnits {
    /// Build validated tier units.
    pub fn new(fine: i32, medium: i32, coarse: i32) -> Result<Self, GeometryError> {
        let units = Self {
            fine,
            medium,
            coarse,
        };
        units.validate()?;
        Ok(units)
    }

    /// Check that units are positive, ascending, and nest evenly.
    ///
    /// Needed for values that arrive through deserialization.
    pub fn validate(&self) -> Result<(), GeometryError> {
        for unit in [self.fine, self.medium, self.coarse] {
            if unit <= 0 {
                return Err(GeometryError::NonPositiveUnit(unit));
            }
        }
        for (finer, coarser) in [(self.fine, self.medium), (self.medium, self.coarse)] {
            if finer >= coarser {
                return Err(GeometryError::NotAscending { finer, coarser });
            }
            if coarser % finer != 0 {
                return Err(GeometryError::NotDivisible { finer, coarser });
            }
        }
        Ok(())
    }

    /// Unit spacing for `tier`.
    pub fn unit(&self, tier: GridTier) -> i32 {
        match tier {
            GridTier::Fine => self.fine,
            GridTier::Medium => self.medium,
            GridTier::Coarse => self.coarse,
        }
    }

    /// Spacing of the double-coarse label lattice.
    pub fn double_coarse(&self) -> i32 {
        self.coarse * 2
    }
}

#[cfg(test)]
mod tests;
