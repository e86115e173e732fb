use std::fmt;

/// Layout text with inconsistent row lengths.
///
/// The grid must be rectangular: every row has to match the width of the
/// first row. This is the only parse failure; everything else in the layout
/// alphabet degrades to `Empty` cells.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MalformedLayoutError {
    /// 1-based row number (after blank-line stripping) that mismatched.
    pub row: usize,
    /// Width of the first row, in characters.
    pub expected: usize,
    /// Width of the offending row, in characters.
    pub found: usize,
}

impl MalformedLayoutError {
    pub(crate) fn new(row: usize, expected: usize, found: usize) -> Self {
        Self { row, expected, found }
    }
}

impl fmt::Display for MalformedLayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "malformed layout: row {} is {} characters wide, expected {}",
            self.row, self.found, self.expected
        )
    }
}

impl std::error::Error for MalformedLayoutError {}
