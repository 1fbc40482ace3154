//! Per-view overlay lifecycle.
//!
//! ```text
//! Unbuilt --layers_built--> Built --invalidate--> Dirty --finish_rebuild--> Built
//!                             \__________________/  \
//!                                   clear            `--clear--> Cleared
//! ```
//!
//! `Dirty` accumulates what needs regenerating until the next rebuild pass,
//! so several events between two passes cost a single rebuild.

use bitflags::bitflags;

bitflags! {
    /// Artifacts that must be regenerated on the next pass.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Invalidation: u8 {
        /// Zoom scale changed: re-rasterize tiles, re-evaluate visibility.
        const ZOOM    = 1 << 0;
        /// Colors changed: re-rasterize tiles at the same resolution.
        const COLOR   = 1 << 1;
        /// Glyph or font metrics changed: recompute bounds and rebuild layers.
        const CONTENT = 1 << 2;
    }
}

/// Lifecycle state of one view's overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    /// No layers exist yet.
    #[default]
    Unbuilt,
    /// Layers exist and reflect the current inputs.
    Built,
    /// Layers exist but some artifacts are stale.
    Dirty(Invalidation),
    /// No glyph is open: layers are emptied and no tiles are retained.
    Cleared,
}

impl OverlayState {
    /// Layers were (re)created for the view.
    pub fn layers_built(&mut self) {
        *self = Self::Built;
    }

    /// Mark artifacts stale. Returns true if a rebuild pass is now pending.
    ///
    /// Ignored while unbuilt. A cleared overlay only wakes up for content
    /// changes, which then require regenerating everything.
    pub fn invalidate(&mut self, flags: Invalidation) -> bool {
        if flags.is_empty() {
            return self.is_dirty();
        }
        *self = match *self {
            Self::Unbuilt => Self::Unbuilt,
            Self::Built => Self::Dirty(flags),
            Self::Dirty(pending) => Self::Dirty(pending | flags),
            Self::Cleared if flags.contains(Invalidation::CONTENT) => {
                Self::Dirty(Invalidation::all())
            }
            Self::Cleared => Self::Cleared,
        };
        self.is_dirty()
    }

    /// Artifacts awaiting regeneration.
    pub fn pending(&self) -> Invalidation {
        match self {
            Self::Dirty(flags) => *flags,
            _ => Invalidation::empty(),
        }
    }

    pub fn is_dirty(&self) -> bool {
        matches!(self, Self::Dirty(_))
    }

    /// Returns true if layers exist (anything but `Unbuilt`).
    pub fn has_layers(&self) -> bool {
        !matches!(self, Self::Unbuilt)
    }

    /// A rebuild pass completed.
    pub fn finish_rebuild(&mut self) {
        if self.is_dirty() {
            *self = Self::Built;
        }
    }

    /// The glyph went away.
    pub fn clear(&mut self) {
        if self.has_layers() {
            *self = Self::Cleared;
        }
    }

    /// Forget everything; the next event rebuilds layers from scratch.
    pub fn reset(&mut self) {
        *self = Self::Unbuilt;
    }
}

/// Host lifecycle notifications the overlay reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    /// The glyph view was constructed.
    ViewBuilt,
    /// First paint of the view.
    ViewStarted,
    /// Zoom changed.
    Scaled,
    /// A different glyph (or no glyph) is shown.
    GlyphChanged,
    /// The current glyph's width or the font's vertical metrics changed.
    MetricsChanged,
    /// Stored preferences (colors, buffer margin) changed.
    PreferencesChanged,
}

impl EditorEvent {
    /// Artifacts an event makes stale.
    ///
    /// A preferences change only implies `COLOR` here; the adapter adds
    /// `CONTENT` when the buffer margin is among the changed values.
    pub fn invalidation(self) -> Invalidation {
        match self {
            Self::ViewBuilt | Self::ViewStarted => Invalidation::all(),
            Self::Scaled => Invalidation::ZOOM,
            Self::GlyphChanged | Self::MetricsChanged => Invalidation::CONTENT,
            Self::PreferencesChanged => Invalidation::COLOR,
        }
    }

    /// Stable event name for log output.
    pub fn name(self) -> &'static str {
        match self {
            Self::ViewBuilt => "view_built",
            Self::ViewStarted => "view_started",
            Self::Scaled => "scaled",
            Self::GlyphChanged => "glyph_changed",
            Self::MetricsChanged => "metrics_changed",
            Self::PreferencesChanged => "preferences_changed",
        }
    }
}

#[cfg(test)]
mod tests;
