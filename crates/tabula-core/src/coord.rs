//! Board coordinate representation.
//!
//! Orientation contract: board row 0 is the first rank listed in a
//! position record (rank 8 of the printed board), and column 0 is file
//! 'a'. All coordinate math in this workspace follows that mapping.

use std::fmt;

/// A (column, row) coordinate on the 8x8 board.
///
/// Components are signed and unclamped so that destination validation
/// can inspect out-of-range values instead of panicking; use
/// [`Coord::in_bounds`] before indexing a board with one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    /// Column, 0 = file 'a'.
    pub col: i8,
    /// Row, 0 = first rank listed in a position record.
    pub row: i8,
}

impl Coord {
    /// Creates a coordinate. No bounds check is applied.
    #[inline]
    pub const fn new(col: i8, row: i8) -> Self {
        Coord { col, row }
    }

    /// Returns true if both components lie in 0..=7.
    #[inline]
    pub const fn in_bounds(self) -> bool {
        self.col >= 0 && self.col <= 7 && self.row >= 0 && self.row <= 7
    }

    /// Converts a rank index (0 = rank 1) to a board row under the
    /// orientation contract.
    #[inline]
    pub const fn row_from_rank(rank: u8) -> i8 {
        7 - rank as i8
    }
}

impl From<(i8, i8)> for Coord {
    #[inline]
    fn from((col, row): (i8, i8)) -> Self {
        Coord::new(col, row)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
