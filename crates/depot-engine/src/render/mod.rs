//! GPU rendering subsystem.
//!
//! The renderer consumes `scene` draw batches and issues GPU commands via
//! wgpu, owning its own pipelines and buffers.
//!
//! Convention:
//! - CPU geometry is in pixels (bottom-left origin, +Y up).
//! - The vertex shader converts to NDC using a viewport uniform.

mod batch;
mod ctx;

pub use batch::BatchRenderer;
pub use ctx::{RenderCtx, RenderTarget};
