use crate::coords::Vec2;
use crate::paint::Color;

/// Primitive kind of one draw batch.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PrimitiveKind {
    /// Vertex pairs, rasterized as 1 px line segments.
    Lines,
    /// Vertex quadruples (tl, tr, br, bl), rasterized as filled quads.
    Quads,
}

/// One homogeneous draw batch: a primitive kind, a flat vertex buffer, and a
/// single color applied to every vertex.
///
/// The vertex grouping invariant (pairs for `Lines`, quadruples for `Quads`)
/// is maintained by the push helpers; the renderer relies on it when it
/// expands quads into triangles.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawBatch {
    primitive: PrimitiveKind,
    vertices: Vec<Vec2>,
    color: Color,
}

impl DrawBatch {
    /// Creates an empty line-segment batch.
    #[inline]
    pub fn lines(color: Color) -> Self {
        Self { primitive: PrimitiveKind::Lines, vertices: Vec::new(), color }
    }

    /// Creates an empty quad batch.
    #[inline]
    pub fn quads(color: Color) -> Self {
        Self { primitive: PrimitiveKind::Quads, vertices: Vec::new(), color }
    }

    /// Records one line segment from `a` to `b`.
    ///
    /// # Panics
    /// Panics (debug only) if called on a quad batch.
    #[inline]
    pub fn push_line(&mut self, a: Vec2, b: Vec2) {
        debug_assert_eq!(self.primitive, PrimitiveKind::Lines);
        self.vertices.push(a);
        self.vertices.push(b);
    }

    /// Records one quad as its four corners in `[tl, tr, br, bl]` order.
    ///
    /// # Panics
    /// Panics (debug only) if called on a line batch.
    #[inline]
    pub fn push_quad(&mut self, corners: [Vec2; 4]) {
        debug_assert_eq!(self.primitive, PrimitiveKind::Quads);
        self.vertices.extend_from_slice(&corners);
    }

    #[inline]
    pub fn primitive(&self) -> PrimitiveKind {
        self.primitive
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// An empty batch carries no geometry; the renderer skips it.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_come_in_pairs() {
        let mut batch = DrawBatch::lines(Color::from_srgb_u8(0, 0, 0, 255));
        batch.push_line(Vec2::new(0.0, 1.0), Vec2::new(10.0, 1.0));
        batch.push_line(Vec2::new(1.0, 0.0), Vec2::new(1.0, 10.0));
        assert_eq!(batch.vertices().len(), 4);
        assert_eq!(batch.primitive(), PrimitiveKind::Lines);
    }

    #[test]
    fn quads_come_in_quadruples() {
        let mut batch = DrawBatch::quads(Color::from_srgb_u8(60, 60, 60, 255));
        batch.push_quad([
            Vec2::new(1.0, 31.0),
            Vec2::new(31.0, 31.0),
            Vec2::new(31.0, 1.0),
            Vec2::new(1.0, 1.0),
        ]);
        assert_eq!(batch.vertices().len(), 4);
        assert!(!batch.is_empty());
    }

    #[test]
    fn fresh_batch_is_empty() {
        assert!(DrawBatch::quads(Color::transparent()).is_empty());
    }
}
