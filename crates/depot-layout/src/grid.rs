use crate::cell::{CellKind, GridPos};
use crate::error::MalformedLayoutError;

/// An immutable rectangular grid of classified cells.
///
/// Parsed once from layout text and read-only afterwards. Cells are stored
/// row-major; `(x, y)` addressing is origin top-left with `y` increasing
/// downward, matching the text the grid came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    cols: usize,
    rows: usize,
    cells: Vec<CellKind>,
}

impl Layout {
    /// Parses multi-line layout text into a grid.
    ///
    /// Leading and trailing blank lines are stripped; each remaining line is
    /// one row. The first row fixes the grid width and every other row must
    /// match it exactly, otherwise [`MalformedLayoutError`] is returned.
    /// Characters outside the layout alphabet classify as `Empty`.
    pub fn parse(text: &str) -> Result<Self, MalformedLayoutError> {
        let mut cells = Vec::new();
        let mut cols = 0;
        let mut rows = 0;

        for line in text.trim().lines() {
            if rows == 0 {
                cols = line.chars().count();
            } else {
                let found = line.chars().count();
                if found != cols {
                    return Err(MalformedLayoutError::new(rows + 1, cols, found));
                }
            }
            cells.extend(line.chars().map(CellKind::from_char));
            rows += 1;
        }

        Ok(Self { cols, rows, cells })
    }

    /// Grid width in cells.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Grid height in cells.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the kind at `(x, y)`.
    ///
    /// # Panics
    /// Panics if the coordinate is outside the grid.
    #[inline]
    pub fn kind_at(&self, x: usize, y: usize) -> CellKind {
        assert!(x < self.cols && y < self.rows, "cell ({x}, {y}) out of bounds");
        self.cells[y * self.cols + x]
    }

    /// Iterates all cells in row-major scan order (top row first, left to
    /// right), yielding each position with its kind.
    pub fn cells(&self) -> impl Iterator<Item = (GridPos, CellKind)> + '_ {
        self.cells.iter().enumerate().map(|(i, &kind)| {
            (GridPos::new(i % self.cols, i / self.cols), kind)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── shape ─────────────────────────────────────────────────────────────

    #[test]
    fn dimensions_from_text() {
        let layout = Layout::parse("..x\n.g.\n@..\nw.h\n").unwrap();
        assert_eq!(layout.cols(), 3);
        assert_eq!(layout.rows(), 4);
    }

    #[test]
    fn surrounding_blank_lines_are_stripped() {
        let layout = Layout::parse("\n\n..x\n.@.\n\n").unwrap();
        assert_eq!(layout.rows(), 2);
        assert_eq!(layout.cols(), 3);
    }

    #[test]
    fn short_row_is_rejected() {
        let err = Layout::parse(".....\n...\n.....\n").unwrap_err();
        assert_eq!(err.row, 2);
        assert_eq!(err.expected, 5);
        assert_eq!(err.found, 3);
    }

    #[test]
    fn long_row_is_rejected() {
        assert!(Layout::parse("..\n....\n").is_err());
    }

    // ── classification ────────────────────────────────────────────────────

    #[test]
    fn classifies_each_alphabet_character() {
        let layout = Layout::parse(".x g@wh?").unwrap();
        let kinds: Vec<CellKind> = layout.cells().map(|(_, k)| k).collect();
        assert_eq!(
            kinds,
            vec![
                CellKind::Empty,
                CellKind::Shelf,
                CellKind::Empty,
                CellKind::Goal,
                CellKind::Endpoint,
                CellKind::Workstation,
                CellKind::Home,
                CellKind::Empty,
            ]
        );
    }

    #[test]
    fn dot_endpoint_shelf_row() {
        // ".@x" at y=0 → [Empty, Endpoint, Shelf] at x = 0, 1, 2.
        let layout = Layout::parse(".@x").unwrap();
        assert_eq!(layout.kind_at(0, 0), CellKind::Empty);
        assert_eq!(layout.kind_at(1, 0), CellKind::Endpoint);
        assert_eq!(layout.kind_at(2, 0), CellKind::Shelf);
    }

    #[test]
    fn scan_order_is_row_major() {
        let layout = Layout::parse("x.\n.x\n").unwrap();
        let positions: Vec<GridPos> = layout.cells().map(|(p, _)| p).collect();
        assert_eq!(
            positions,
            vec![
                GridPos::new(0, 0),
                GridPos::new(1, 0),
                GridPos::new(0, 1),
                GridPos::new(1, 1),
            ]
        );
    }
}
