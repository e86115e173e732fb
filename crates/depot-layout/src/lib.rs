//! Parser and typed grid model for **depot** warehouse layout text.
//!
//! A layout is a rectangular block of characters, one cell per character:
//! `x` shelf, `g` goal, `@` endpoint, `w` workstation, `h` home, anything
//! else empty floor. This crate turns that text into a [`Layout`] grid and
//! a [`CategorizedCoordinates`] index, and nothing more; geometry and
//! rendering live in the map and engine crates.
//!
//! This crate is intentionally dependency-free so it can be consumed by
//! generators and validation tooling without pulling in any GPU code.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`cell`] | `CellKind`, `GridPos` |
//! | [`error`] | `MalformedLayoutError` |
//! | [`grid`] | `Layout` and the parse entry point |
//! | [`categories`] | `CategorizedCoordinates` |
//!
//! # Quick start
//!
//! ```rust
//! use depot_layout::{CategorizedCoordinates, CellKind, Layout};
//!
//! let layout = Layout::parse("..x@\n.g..\n").unwrap();
//! let coords = CategorizedCoordinates::from_layout(&layout);
//! assert_eq!(coords.coords_of(CellKind::Shelf).len(), 1);
//! ```

pub mod categories;
pub mod cell;
pub mod error;
pub mod grid;

pub use categories::CategorizedCoordinates;
pub use cell::{CellKind, GridPos};
pub use error::MalformedLayoutError;
pub use grid::Layout;

#[cfg(test)]
mod parse_tests {
    use super::*;

    fn ok(src: &str) -> Layout { Layout::parse(src).unwrap() }
    fn err(src: &str) { Layout::parse(src).unwrap_err(); }

    #[test] fn single_cell() { assert_eq!(ok("x").rows(), 1); }
    #[test] fn single_row() { assert_eq!(ok("..@@xx..").cols(), 8); }
    #[test] fn square_grid() { ok("...\n...\n...\n"); }
    #[test] fn no_trailing_newline() { assert_eq!(ok("..\n..").rows(), 2); }
    #[test] fn crlf_input_parses_like_lf() {
        // `lines()` handles `\r\n` endings and surrounding-whitespace
        // stripping removes a trailing bare `\r`, so CRLF text yields the
        // same grid as LF text.
        let layout = ok(".x\r\n.g\r\n");
        assert_eq!(layout.cols(), 2);
        assert_eq!(layout.kind_at(1, 1), CellKind::Goal);
    }
    #[test] fn err_ragged_rows() { err("....\n..\n....\n"); }
    #[test] fn err_reports_first_bad_row() {
        let e = Layout::parse("...\n.\n.\n").unwrap_err();
        assert_eq!(e.row, 2);
    }
    #[test] fn display_names_the_widths() {
        let e = Layout::parse("...\n.....\n").unwrap_err();
        let msg = e.to_string();
        assert!(msg.contains('5') && msg.contains('3'), "{msg}");
    }
}
