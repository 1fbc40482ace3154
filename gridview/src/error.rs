//! Rendering failures.
//!
//! None of these reach the user: the renderer logs them and keeps whatever
//! it drew last.

/// A tile or layer could not be produced for the current pass.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RenderError {
    /// Zoom scale and device scale produced an empty or non-finite tile.
    #[error("invalid tile size {0} px")]
    InvalidTileSize(f64),
    /// The off-screen surface could not be allocated.
    #[error("failed to allocate {width}x{height} surface")]
    SurfaceAllocation { width: u32, height: u32 },
    /// The host reported a zoom scale that is not a positive finite number.
    #[error("invalid zoom scale {0}")]
    InvalidScale(f64),
}
