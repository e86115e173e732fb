//! Paint model shared between the map layer and the renderer.
//!
//! Scope:
//! - color representation (premultiplied alpha)
//!
//! Geometry types remain in `coords`; batches carry exactly one color, so
//! there is no paint-source enum here.

pub mod color;

pub use color::Color;
