use depot_engine::paint::Color;
use depot_layout::CellKind;

/// 8-bit RGB triple, as map colors are authored.
///
/// Conversion into the renderer's 0–1 range happens in [`to_color`] at batch
/// construction time; normalized values are never stored.
///
/// [`to_color`]: Rgb8::to_color
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Rgb8(pub u8, pub u8, pub u8);

impl Rgb8 {
    /// Normalizes into the engine's color type (opaque).
    #[inline]
    pub fn to_color(self) -> Color {
        Color::from_srgb_u8(self.0, self.1, self.2, 255)
    }
}

/// Color table for every semantic role on the map.
///
/// One fixed color per role; construct once and pass by reference. The agent
/// roles are part of the table for the animated render of a running
/// simulation; the still-map path never reads them.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MapPalette {
    pub background: Rgb8,
    pub grid_line: Rgb8,
    pub shelf: Rgb8,
    pub goal: Rgb8,
    pub endpoint: Rgb8,
    pub workstation: Rgb8,
    pub home: Rgb8,
    pub agent: Rgb8,
    pub agent_loaded: Rgb8,
    pub agent_direction: Rgb8,
}

impl Default for MapPalette {
    fn default() -> Self {
        Self {
            background: Rgb8(255, 255, 255),
            grid_line: Rgb8(0, 0, 0),
            shelf: Rgb8(0, 0, 0),
            goal: Rgb8(60, 60, 60),
            endpoint: Rgb8(135, 206, 235), // sky blue
            workstation: Rgb8(255, 192, 203), // pink
            home: Rgb8(255, 165, 0), // orange
            agent: Rgb8(255, 140, 0),
            agent_loaded: Rgb8(255, 0, 0),
            agent_direction: Rgb8(0, 0, 0),
        }
    }
}

impl MapPalette {
    /// Returns the fill color for cells of `kind`.
    ///
    /// `Empty` cells have no fill of their own; they show the background.
    pub fn cell_fill(&self, kind: CellKind) -> Rgb8 {
        match kind {
            CellKind::Empty => self.background,
            CellKind::Shelf => self.shelf,
            CellKind::Goal => self.goal,
            CellKind::Endpoint => self.endpoint,
            CellKind::Workstation => self.workstation,
            CellKind::Home => self.home,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_keeps_byte_ratios() {
        let c = Rgb8(135, 206, 235).to_color();
        assert_eq!(c.r, 135.0 / 255.0);
        assert_eq!(c.g, 206.0 / 255.0);
        assert_eq!(c.b, 235.0 / 255.0);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn every_category_has_a_fill() {
        let palette = MapPalette::default();
        for kind in CellKind::CATEGORIES {
            // Nothing semantic to assert beyond totality; the match itself
            // must cover every kind.
            let _ = palette.cell_fill(kind);
        }
        assert_eq!(palette.cell_fill(CellKind::Empty), palette.background);
    }
}
