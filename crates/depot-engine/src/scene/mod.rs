//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw batches (one primitive kind + one color)
//! - keep submission order deterministic: batches paint in list order,
//!   later batches on top of earlier ones
//!
//! Batches are transient: rebuilt each frame by the map layer, consumed
//! by the renderer; nothing here retains GPU resources.

mod batch;

pub use batch::{DrawBatch, PrimitiveKind};
