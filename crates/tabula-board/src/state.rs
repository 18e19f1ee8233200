//! Assembled game state and its aggregate fields.

use crate::Board;
use tabula_core::{Color, Coord, Piece, PieceType};

/// Castling rights flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const WHITE_KINGSIDE: u8 = 0b0001;
    pub const WHITE_QUEENSIDE: u8 = 0b0010;
    pub const BLACK_KINGSIDE: u8 = 0b0100;
    pub const BLACK_QUEENSIDE: u8 = 0b1000;
    pub const ALL: CastlingRights = CastlingRights(0b1111);

    /// Creates new castling rights from flags.
    #[inline]
    pub const fn new(flags: u8) -> Self {
        CastlingRights(flags & 0b1111)
    }

    /// Returns true if the given side can castle kingside.
    #[inline]
    pub const fn can_castle_kingside(self, color: Color) -> bool {
        let flag = match color {
            Color::White => Self::WHITE_KINGSIDE,
            Color::Black => Self::BLACK_KINGSIDE,
        };
        (self.0 & flag) != 0
    }

    /// Returns true if the given side can castle queenside.
    #[inline]
    pub const fn can_castle_queenside(self, color: Color) -> bool {
        let flag = match color {
            Color::White => Self::WHITE_QUEENSIDE,
            Color::Black => Self::BLACK_QUEENSIDE,
        };
        (self.0 & flag) != 0
    }

    /// Grants kingside castling for a color.
    #[inline]
    pub fn grant_kingside(&mut self, color: Color) {
        self.0 |= match color {
            Color::White => Self::WHITE_KINGSIDE,
            Color::Black => Self::BLACK_KINGSIDE,
        };
    }

    /// Grants queenside castling for a color.
    #[inline]
    pub fn grant_queenside(&mut self, color: Color) {
        self.0 |= match color {
            Color::White => Self::WHITE_QUEENSIDE,
            Color::Black => Self::BLACK_QUEENSIDE,
        };
    }

    /// Returns the raw flags.
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

/// Per-color capture tallies, one counter per capturable piece type.
///
/// Kings are excluded: they are never captured under this model, so no
/// slot exists for them. Indexed by [`Color::index`] and
/// [`PieceType::index`] (Pawn through Queen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Captures([[u32; 5]; 2]);

impl Captures {
    /// Returns how many pieces of the given type the given color has
    /// captured. Zero for Kings, which have no slot.
    pub fn count(&self, by: Color, piece_type: PieceType) -> u32 {
        if !piece_type.is_capturable() {
            return 0;
        }
        self.0[by.index()][piece_type.index()]
    }

    /// Records one capture. The type must be capturable; the
    /// controller rejects King captures before reaching this point.
    pub(crate) fn record(&mut self, by: Color, piece_type: PieceType) {
        debug_assert!(piece_type.is_capturable());
        self.0[by.index()][piece_type.index()] += 1;
    }

    /// Returns the total number of pieces captured by the given color.
    pub fn total(&self, by: Color) -> u32 {
        self.0[by.index()].iter().sum()
    }
}

/// A recorded move in game history.
///
/// The full record format (notation, timing) is owned by a notation
/// collaborator; the core keeps the minimum needed to replay a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    /// The piece that moved.
    pub piece: Piece,
    /// Origin square.
    pub from: Coord,
    /// Destination square.
    pub to: Coord,
    /// The captured piece, if the move was a capture.
    pub captured: Option<Piece>,
}

/// Complete game state for a single chess game.
///
/// Built by [`crate::FenParser::parse`] through a
/// [`crate::GameStateBuilder`], or from [`GameState::startpos`].
/// A state is owned by exactly one mutating session at a time; there is
/// no internal locking, and [`crate::BoardController`] encodes that
/// single-writer discipline through its exclusive borrow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// The board matrix, row 0 = first listed rank.
    pub board: Board,
    /// The side to move.
    pub active_color: Color,
    /// Castling rights for both sides.
    pub castling: CastlingRights,
    /// En passant target as (file, rank-index), both zero-based; `None`
    /// when no en passant capture is available. Convert the rank index
    /// to a board row with [`Coord::row_from_rank`].
    pub en_passant: Option<Coord>,
    /// Moves since the last pawn advance or capture (50-move rule).
    pub half_move_clock: u32,
    /// Total move count, incremented after Black's move.
    pub full_move_clock: u32,
    /// Capture tallies for both sides.
    pub captures: Captures,
    /// Ordered history of committed moves.
    pub history: Vec<MoveRecord>,
}

impl GameState {
    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        crate::FenParser::parse(crate::FenParser::STARTPOS).expect("STARTPOS is valid")
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::startpos()
    }
}
