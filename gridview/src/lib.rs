//! Adaptive multi-resolution grid overlay for a glyph editor.
//!
//! Draws 1-, 10- and 100-unit gridlines plus coordinate labels behind the
//! glyph being edited. Instead of stroking every line in absolute
//! coordinates, the overlay rasterizes one coarse cell per tier at the
//! current zoom and asks the host to repeat that tile across the content
//! extent, so redraw cost stays bounded however far the view is zoomed out.
//!
//! The host editor is reached only through the traits in [`host`]; the
//! pure geometry, visibility and color logic lives in `gridview_core`.

#![deny(unsafe_code)]

pub mod adapter;
pub mod config;
pub mod error;
pub mod host;
pub mod logging;
pub mod overlay;
pub mod raster;
pub mod tile;

#[cfg(test)]
mod test_support;

pub use adapter::{GridViewSubscriber, IDENTIFIER};
pub use config::{Config, ConfigError, Preferences, Strategy};
pub use error::RenderError;
pub use host::{EditorHost, LabelStyle, LayerId, LayerKind, LineSegment, NullContainer, OverlayContainer};
pub use overlay::GridOverlay;
pub use raster::{BitmapSurface, SkiaSurface, TileImage};
pub use tile::{TileCache, TileKey};
