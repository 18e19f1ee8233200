//! The 8x8 board matrix.

use std::fmt;
use tabula_core::{Coord, Piece};

/// An 8x8 matrix of packed [`Piece`] values, one byte per square.
///
/// Row 0 holds the first rank listed in a position record and column 0
/// is file 'a' (the workspace orientation contract; see
/// [`tabula_core::Coord`]). In the standard starting position row 0 is
/// therefore the Black back rank and row 7 the White back rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board([[Piece; 8]; 8]);

impl Board {
    /// A board with every square empty.
    pub const EMPTY: Board = Board([[Piece::NONE; 8]; 8]);

    /// Creates a board from rows in listed-rank order.
    #[inline]
    pub const fn from_rows(rows: [[Piece; 8]; 8]) -> Self {
        Board(rows)
    }

    /// Returns the piece at the given coordinate.
    ///
    /// The coordinate must be in bounds; callers validate with
    /// [`Coord::in_bounds`] first.
    #[inline]
    pub fn get(&self, at: Coord) -> Piece {
        debug_assert!(at.in_bounds());
        self.0[at.row as usize][at.col as usize]
    }

    /// Places a piece at the given coordinate.
    ///
    /// The coordinate must be in bounds; callers validate with
    /// [`Coord::in_bounds`] first.
    #[inline]
    pub fn set(&mut self, at: Coord, piece: Piece) {
        debug_assert!(at.in_bounds());
        self.0[at.row as usize][at.col as usize] = piece;
    }

    /// Clears the given coordinate back to the empty square.
    #[inline]
    pub fn clear(&mut self, at: Coord) {
        self.set(at, Piece::NONE);
    }

    /// Returns the rows in listed-rank order.
    #[inline]
    pub fn rows(&self) -> &[[Piece; 8]; 8] {
        &self.0
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::EMPTY
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.0 {
            for piece in row {
                write!(f, "[{}]", piece.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
