use depot_engine::coords::Vec2;
use depot_engine::paint::Color;
use depot_engine::scene::DrawBatch;
use depot_layout::{CategorizedCoordinates, CellKind, Layout};

use crate::metrics::CellMetrics;
use crate::palette::MapPalette;

/// A parsed layout together with everything needed to draw it.
///
/// Built once at startup and read-only afterwards; the per-frame draw batches
/// are produced fresh by [`frame_batches`] and discarded after submission.
///
/// [`frame_batches`]: MapScene::frame_batches
pub struct MapScene {
    layout: Layout,
    coords: CategorizedCoordinates,
    metrics: CellMetrics,
    palette: MapPalette,
}

impl MapScene {
    pub fn new(layout: Layout, metrics: CellMetrics, palette: MapPalette) -> Self {
        let coords = CategorizedCoordinates::from_layout(&layout);
        log::debug!(
            "map scene: {} x {} cells, {} categorized",
            layout.cols(),
            layout.rows(),
            coords.len()
        );
        Self {
            layout,
            coords,
            metrics,
            palette,
        }
    }

    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[inline]
    pub fn palette(&self) -> &MapPalette {
        &self.palette
    }

    /// Pixel size of the map surface (window and export image).
    pub fn surface_size(&self) -> (u32, u32) {
        self.metrics.surface_size(self.layout.cols(), self.layout.rows())
    }

    /// Frame clear color.
    pub fn background(&self) -> Color {
        self.palette.background.to_color()
    }

    /// Builds the frame's draw batches in paint order: grid lines first, then
    /// one quad batch per cell category.
    ///
    /// Later batches render on top of earlier ones, so a cell claimed by two
    /// categories resolves by list position, not by any explicit priority.
    /// Categories with no cells produce empty batches, which the renderer
    /// skips without affecting the rest.
    pub fn frame_batches(&self) -> Vec<DrawBatch> {
        let mut batches = Vec::with_capacity(1 + CellKind::CATEGORIES.len());
        batches.push(self.grid_lines());
        for kind in CellKind::CATEGORIES {
            batches.push(self.category_quads(kind));
        }
        batches
    }

    /// One line segment per row/column boundary, spanning the full grid.
    ///
    /// Lines sit at `pitch * n + margin`, inside the margin band the cell
    /// quads leave free.
    fn grid_lines(&self) -> DrawBatch {
        let mut batch = DrawBatch::lines(self.palette.grid_line.to_color());

        let pitch = self.metrics.pitch();
        let margin = self.metrics.cell_margin;
        let (cols, rows) = (self.layout.cols(), self.layout.rows());
        let width = pitch * cols as f32;
        let height = pitch * rows as f32;

        for r in 0..=rows {
            let y = pitch * r as f32 + margin;
            batch.push_line(Vec2::new(0.0, y), Vec2::new(width, y));
        }
        for c in 0..=cols {
            let x = pitch * c as f32 + margin;
            batch.push_line(Vec2::new(x, 0.0), Vec2::new(x, height));
        }

        batch
    }

    /// One quad per coordinate of `kind`, in the category's scan order.
    fn category_quads(&self, kind: CellKind) -> DrawBatch {
        let mut batch = DrawBatch::quads(self.palette.cell_fill(kind).to_color());
        for &pos in self.coords.coords_of(kind) {
            batch.push_quad(self.metrics.cell_quad(pos, self.layout.rows()).corners());
        }
        batch
    }
}

#[cfg(test)]
mod tests {
    use depot_engine::scene::PrimitiveKind;

    use super::*;

    fn scene(text: &str) -> MapScene {
        let layout = Layout::parse(text).unwrap();
        MapScene::new(layout, CellMetrics::default(), MapPalette::default())
    }

    // ── batch order ───────────────────────────────────────────────────────

    #[test]
    fn batches_follow_category_paint_order() {
        let s = scene("x@g\nw.h\n");
        let batches = s.frame_batches();
        assert_eq!(batches.len(), 6);

        let palette = MapPalette::default();
        assert_eq!(batches[0].primitive(), PrimitiveKind::Lines);
        assert_eq!(batches[0].color(), palette.grid_line.to_color());
        assert_eq!(batches[1].color(), palette.shelf.to_color());
        assert_eq!(batches[2].color(), palette.goal.to_color());
        assert_eq!(batches[3].color(), palette.endpoint.to_color());
        assert_eq!(batches[4].color(), palette.workstation.to_color());
        assert_eq!(batches[5].color(), palette.home.to_color());
    }

    #[test]
    fn rebuilding_batches_is_deterministic() {
        let s = scene("..x@..\n.g@wh.\n");
        assert_eq!(s.frame_batches(), s.frame_batches());
    }

    // ── grid lines ────────────────────────────────────────────────────────

    #[test]
    fn grid_line_count_spans_both_axes() {
        // (rows + 1) horizontals + (cols + 1) verticals, two vertices each.
        let s = scene("...\n...\n");
        let lines = &s.frame_batches()[0];
        assert_eq!(lines.vertices().len(), 2 * ((2 + 1) + (3 + 1)));
    }

    #[test]
    fn grid_lines_span_the_full_surface() {
        let s = scene("....\n....\n....\n");
        let (w, _) = s.surface_size();
        let lines = &s.frame_batches()[0];
        // First segment is the bottom horizontal boundary.
        assert_eq!(lines.vertices()[0], Vec2::new(0.0, 1.0));
        assert_eq!(lines.vertices()[1], Vec2::new(w as f32, 1.0));
    }

    // ── cell quads ────────────────────────────────────────────────────────

    #[test]
    fn one_quad_per_categorized_cell() {
        let s = scene("x.x\n.x.\n");
        let shelves = &s.frame_batches()[1];
        assert_eq!(shelves.primitive(), PrimitiveKind::Quads);
        assert_eq!(shelves.vertices().len(), 3 * 4);
    }

    #[test]
    fn absent_category_yields_empty_batch_without_disturbing_others() {
        // No workstations: slot 4 is empty, shelves unaffected.
        let s = scene("x@\n@x\n");
        let batches = s.frame_batches();
        assert!(batches[4].is_empty());
        assert_eq!(batches[1].vertices().len(), 2 * 4);
        assert_eq!(batches[3].vertices().len(), 2 * 4);
    }

    #[test]
    fn shelf_quad_in_unit_grid_matches_the_mapping() {
        let s = scene("x");
        let shelves = &s.frame_batches()[1];
        let v = shelves.vertices();
        assert_eq!(v[0], Vec2::new(1.0, 31.0)); // tl
        assert_eq!(v[1], Vec2::new(31.0, 31.0)); // tr
        assert_eq!(v[2], Vec2::new(31.0, 1.0)); // br
        assert_eq!(v[3], Vec2::new(1.0, 1.0)); // bl
    }
}
