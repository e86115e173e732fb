//! Map layer: turns a parsed warehouse layout into engine draw batches and
//! exports the rendered frame.
//!
//! Responsibilities:
//! - cell → pixel geometry ([`CellMetrics`], with the vertical flip between
//!   grid space and render space)
//! - the color table ([`MapPalette`])
//! - per-frame batch construction in fixed category order ([`MapScene`])
//! - writing the captured frame to disk ([`FrameExporter`])
//!
//! Parsing stays in `depot-layout`; GPU work stays in `depot-engine`.

pub mod batches;
pub mod export;
pub mod geometry;
pub mod metrics;
pub mod palette;

pub use batches::MapScene;
pub use export::FrameExporter;
pub use geometry::Quad;
pub use metrics::CellMetrics;
pub use palette::{MapPalette, Rgb8};
