//! Depot engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the map layer:
//! window/event-loop bootstrapping, the wgpu device and surface, the
//! backend-agnostic draw-batch model, and the renderer that submits batches.

pub mod device;
pub mod window;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
