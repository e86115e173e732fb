//! Coordinate types shared across the engine and map layers.
//!
//! Canonical CPU space for draw batches:
//! - Pixels
//! - Origin bottom-left
//! - +X right, +Y up
//!
//! The renderer converts to NDC in the shader using a viewport uniform.
//! (Grid-cell space is origin top-left; the map layer performs the flip.)

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
