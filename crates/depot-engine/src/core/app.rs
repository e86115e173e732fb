use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
///
/// The runtime drives exactly one window and invokes `on_frame` once per
/// displayed frame. There is no input callback: the engine hosts static,
/// non-interactive content and the runtime handles window lifecycle events
/// (close, resize) itself.
pub trait App {
    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
