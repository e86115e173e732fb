//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating & configuring the Surface (swapchain)
//! - acquiring frames and providing encoders/views for rendering
//! - offscreen capture targets and pixel readback for image export

mod capture;
mod gpu;

pub use capture::FrameCapture;
pub use gpu::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
