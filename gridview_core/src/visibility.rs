//! Zoom-dependent tier visibility.
//!
//! Each tier is drawn only while the view's zoom scale (pixels per font
//! unit) is strictly above its threshold. Above `suppress_above` every line
//! tier is hidden: the grid is too sparse to be useful there and aliases
//! badly. Labels ignore the suppression cutoff.

use serde::{Deserialize, Serialize};

use crate::tier::{GridTier, LabelSet, LabelTier, TierSet};

/// Exclusive lower bounds on zoom scale for each tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub fine: f64,
    pub medium: f64,
    pub coarse: f64,
    pub label_coarse: f64,
    pub label_double_coarse: f64,
    /// Empirical cutoff: no line tier is drawn above this scale.
    pub suppress_above: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            fine: 5.0,
            medium: 0.5,
            coarse: 0.1,
            label_coarse: 1.0,
            label_double_coarse: 0.3,
            suppress_above: 28.0,
        }
    }
}

/// Which tiers and label sets are drawn at a given scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Visibility {
    pub lines: TierSet,
    pub labels: LabelSet,
}

impl Visibility {
    pub fn line(&self, tier: GridTier) -> bool {
        self.lines.contains(tier.flag())
    }

    pub fn label(&self, tier: LabelTier) -> bool {
        self.labels.contains(tier.flag())
    }

    /// Returns true if nothing at all is drawn.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.labels.is_empty()
    }
}

impl Thresholds {
    /// Threshold for a line tier.
    pub fn line(&self, tier: GridTier) -> f64 {
        match tier {
            GridTier::Fine => self.fine,
            GridTier::Medium => self.medium,
            GridTier::Coarse => self.coarse,
        }
    }

    /// Threshold for a label tier.
    pub fn label(&self, tier: LabelTier) -> f64 {
        match tier {
            LabelTier::Coarse => self.label_coarse,
            LabelTier::DoubleCoarse => self.label_double_coarse,
        }
    }

    /// Evaluate visibility at `scale`.
    ///
    /// Non-finite and non-positive scales hide everything.
    pub fn evaluate(&self, scale: f64) -> Visibility {
        let mut vis = Visibility::default();
        if !scale.is_finite() || scale <= 0.0 {
            return vis;
        }
        if scale <= self.suppress_above {
            for tier in GridTier::ALL {
                if scale > self.line(tier) {
                    vis.lines |= tier.flag();
                }
            }
        }
        for tier in LabelTier::ALL {
            if scale > self.label(tier) {
                vis.labels |= tier.flag();
            }
        }
        vis
    }
}
