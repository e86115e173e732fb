use crate::cell::{CellKind, GridPos};
use crate::grid::Layout;

/// Per-category coordinate lists, derived once from a [`Layout`].
///
/// Each non-Empty [`CellKind`] maps to the positions holding that kind, in
/// row-major scan order. The order is preserved for deterministic output;
/// it carries no rendering meaning since every member of a category shares
/// one color.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorizedCoordinates {
    shelves: Vec<GridPos>,
    goals: Vec<GridPos>,
    endpoints: Vec<GridPos>,
    workstations: Vec<GridPos>,
    homes: Vec<GridPos>,
}

impl CategorizedCoordinates {
    /// Scans the layout once and buckets every non-Empty cell.
    pub fn from_layout(layout: &Layout) -> Self {
        let mut coords = Self::default();
        for (pos, kind) in layout.cells() {
            match kind {
                CellKind::Empty => {}
                CellKind::Shelf => coords.shelves.push(pos),
                CellKind::Goal => coords.goals.push(pos),
                CellKind::Endpoint => coords.endpoints.push(pos),
                CellKind::Workstation => coords.workstations.push(pos),
                CellKind::Home => coords.homes.push(pos),
            }
        }
        coords
    }

    /// Returns the coordinates classified as `kind`.
    ///
    /// `Empty` has no coordinate list and yields an empty slice.
    pub fn coords_of(&self, kind: CellKind) -> &[GridPos] {
        match kind {
            CellKind::Empty => &[],
            CellKind::Shelf => &self.shelves,
            CellKind::Goal => &self.goals,
            CellKind::Endpoint => &self.endpoints,
            CellKind::Workstation => &self.workstations,
            CellKind::Home => &self.homes,
        }
    }

    /// Total number of categorized (non-Empty) cells.
    pub fn len(&self) -> usize {
        CellKind::CATEGORIES
            .iter()
            .map(|&k| self.coords_of(k).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categorize(text: &str) -> (Layout, CategorizedCoordinates) {
        let layout = Layout::parse(text).unwrap();
        let coords = CategorizedCoordinates::from_layout(&layout);
        (layout, coords)
    }

    #[test]
    fn buckets_by_kind() {
        let (_, coords) = categorize("x@\ngw\nh.\n");
        assert_eq!(coords.coords_of(CellKind::Shelf), &[GridPos::new(0, 0)]);
        assert_eq!(coords.coords_of(CellKind::Endpoint), &[GridPos::new(1, 0)]);
        assert_eq!(coords.coords_of(CellKind::Goal), &[GridPos::new(0, 1)]);
        assert_eq!(coords.coords_of(CellKind::Workstation), &[GridPos::new(1, 1)]);
        assert_eq!(coords.coords_of(CellKind::Home), &[GridPos::new(0, 2)]);
        assert_eq!(coords.coords_of(CellKind::Empty), &[] as &[GridPos]);
    }

    #[test]
    fn category_order_is_scan_order() {
        let (_, coords) = categorize("x.x\n.x.\n");
        assert_eq!(
            coords.coords_of(CellKind::Shelf),
            &[GridPos::new(0, 0), GridPos::new(2, 0), GridPos::new(1, 1)]
        );
    }

    #[test]
    fn derivation_is_deterministic() {
        let text = "..x@..\n.g@wh.\n";
        let (_, a) = categorize(text);
        let (_, b) = categorize(text);
        assert_eq!(a, b);
    }

    #[test]
    fn categories_partition_the_grid() {
        // Every cell lands in exactly one bucket; the Empty remainder plus
        // all category lists must cover the grid with no duplicates.
        let (layout, coords) = categorize("x@g\nw.h\n@xx\n");

        let empties = layout
            .cells()
            .filter(|&(_, k)| k == CellKind::Empty)
            .count();
        assert_eq!(coords.len() + empties, layout.cols() * layout.rows());

        let mut seen: Vec<GridPos> = CellKind::CATEGORIES
            .iter()
            .flat_map(|&k| coords.coords_of(k).iter().copied())
            .collect();
        seen.extend(
            layout
                .cells()
                .filter(|&(_, k)| k == CellKind::Empty)
                .map(|(p, _)| p),
        );
        seen.sort_by_key(|p| (p.y, p.x));
        seen.dedup();
        assert_eq!(seen.len(), layout.cols() * layout.rows());
    }

    #[test]
    fn missing_category_is_empty_not_absent() {
        let (_, coords) = categorize("x.x\n...\n");
        assert!(coords.coords_of(CellKind::Workstation).is_empty());
        assert_eq!(coords.coords_of(CellKind::Shelf).len(), 2);
    }
}
