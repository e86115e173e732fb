use depot_engine::coords::Vec2;
use depot_layout::GridPos;

use crate::geometry::Quad;

/// Pixel-space cell sizing: cell edge length plus the inter-cell margin that
/// grid lines render in.
///
/// The mapping from grid coordinates to pixels is pure and total. Grid space
/// is origin top-left with `y` down; pixel space is origin bottom-left with
/// `y` up, so every cell conversion applies the vertical flip
/// `y' = rows - y - 1`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CellMetrics {
    /// Cell edge length in pixels.
    pub cell_size: f32,
    /// Gap reserved between adjacent cells, in pixels.
    pub cell_margin: f32,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            cell_margin: 1.0,
        }
    }
}

impl CellMetrics {
    /// Distance between the origins of two adjacent cells.
    #[inline]
    pub fn pitch(&self) -> f32 {
        self.cell_size + self.cell_margin
    }

    /// Maps a grid cell to its pixel-space quad.
    ///
    /// The cell interior starts one margin in from the cell's pitch origin
    /// and extends to the next pitch boundary, leaving the margin band on
    /// the left/bottom for grid lines:
    ///
    /// ```text
    /// left   = pitch * x  + margin        right = pitch * (x + 1)
    /// bottom = pitch * y' + margin        top   = pitch * (y' + 1)
    /// ```
    pub fn cell_quad(&self, pos: GridPos, rows: usize) -> Quad {
        let pitch = self.pitch();
        let flipped = (rows - pos.y - 1) as f32;
        let x = pos.x as f32;

        let left = pitch * x + self.cell_margin;
        let right = pitch * (x + 1.0);
        let bottom = pitch * flipped + self.cell_margin;
        let top = pitch * (flipped + 1.0);

        Quad::new(
            Vec2::new(left, top),
            Vec2::new(right, top),
            Vec2::new(right, bottom),
            Vec2::new(left, bottom),
        )
    }

    /// Pixel size of the full map surface: `cols * pitch × rows * pitch`.
    pub fn surface_size(&self, cols: usize, rows: usize) -> (u32, u32) {
        (
            (cols as f32 * self.pitch()) as u32,
            (rows as f32 * self.pitch()) as u32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── cell_quad ─────────────────────────────────────────────────────────

    #[test]
    fn unit_grid_cell() {
        // 1×1 grid at the default 30 px cell / 1 px margin: the cell spans
        // from just inside the margin to the far pitch boundary.
        let m = CellMetrics::default();
        let q = m.cell_quad(GridPos::new(0, 0), 1);
        assert_eq!(q.bl, Vec2::new(1.0, 1.0));
        assert_eq!(q.tr, Vec2::new(31.0, 31.0));
    }

    #[test]
    fn top_row_maps_to_topmost_pixel_band() {
        // y = 0 is the top row of the text; after the flip it must occupy
        // the highest pixel band.
        let m = CellMetrics::default();
        let rows = 3;
        let top_row = m.cell_quad(GridPos::new(0, 0), rows);
        let bottom_row = m.cell_quad(GridPos::new(0, 2), rows);
        assert!(top_row.bl.y > bottom_row.tl.y);
        assert_eq!(top_row.tl.y, rows as f32 * m.pitch());
        assert_eq!(bottom_row.bl.y, m.cell_margin);
    }

    #[test]
    fn quads_stay_inside_the_surface() {
        let m = CellMetrics::default();
        let (cols, rows) = (14, 9);
        let (w, h) = m.surface_size(cols, rows);
        for y in 0..rows {
            for x in 0..cols {
                let q = m.cell_quad(GridPos::new(x, y), rows);
                for c in q.corners() {
                    assert!(c.x >= 0.0 && c.x <= w as f32, "{c:?}");
                    assert!(c.y >= 0.0 && c.y <= h as f32, "{c:?}");
                }
            }
        }
    }

    #[test]
    fn adjacent_cells_leave_one_margin_between_interiors() {
        let m = CellMetrics::default();
        let a = m.cell_quad(GridPos::new(0, 0), 1);
        let b = m.cell_quad(GridPos::new(1, 0), 1);
        assert_eq!(b.bl.x - a.br.x, m.cell_margin);
    }

    // ── surface_size ──────────────────────────────────────────────────────

    #[test]
    fn surface_size_is_pitch_times_cells() {
        let m = CellMetrics::default();
        assert_eq!(m.surface_size(14, 9), (14 * 31, 9 * 31));
    }
}
