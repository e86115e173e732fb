use depot_engine::coords::Vec2;

/// The four pixel-space corners of one grid cell.
///
/// Corner order is `tl, tr, br, bl`, the order the batch layer feeds quads
/// to the engine. Quads are transient: produced by [`CellMetrics`] during
/// batch construction and never persisted.
///
/// [`CellMetrics`]: crate::metrics::CellMetrics
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quad {
    pub tl: Vec2,
    pub tr: Vec2,
    pub br: Vec2,
    pub bl: Vec2,
}

impl Quad {
    #[inline]
    pub const fn new(tl: Vec2, tr: Vec2, br: Vec2, bl: Vec2) -> Self {
        Self { tl, tr, br, bl }
    }

    /// Corners in `[tl, tr, br, bl]` order, as the engine's quad batches expect.
    #[inline]
    pub const fn corners(self) -> [Vec2; 4] {
        [self.tl, self.tr, self.br, self.bl]
    }
}
