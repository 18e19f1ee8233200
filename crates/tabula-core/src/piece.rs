//! Packed chess piece representation.
//!
//! A [`Piece`] stores a piece type and color in a single byte so a full
//! board fits in 64 bytes. The packing is part of the type's contract:
//!
//! - bits 0-2: the type, `0` for an empty square or `1..=6` per
//!   [`PieceType`]
//! - bit 3: the color, `0` for White and `1` for Black
//!
//! The color bit is only meaningful when the type bits are non-zero.

use crate::Color;
use thiserror::Error;

/// The six types of chess pieces.
///
/// Discriminants start at 1 so they double as the type bits of the
/// packed [`Piece`] value; 0 is reserved for the empty square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceType {
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

impl PieceType {
    /// All piece types in order.
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];

    /// Returns a zero-based index (0-5), used for per-type tallies.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    /// Returns true if this piece type may be captured.
    ///
    /// Kings are never captured; checkmate ends a game instead.
    #[inline]
    pub const fn is_capturable(self) -> bool {
        !matches!(self, PieceType::King)
    }

    const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            1 => Some(PieceType::Pawn),
            2 => Some(PieceType::Knight),
            3 => Some(PieceType::Bishop),
            4 => Some(PieceType::Rook),
            5 => Some(PieceType::Queen),
            6 => Some(PieceType::King),
            _ => None,
        }
    }
}

impl std::fmt::Display for PieceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceType::Pawn => "Pawn",
            PieceType::Knight => "Knight",
            PieceType::Bishop => "Bishop",
            PieceType::Rook => "Rook",
            PieceType::Queen => "Queen",
            PieceType::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// Error returned when a character has no piece mapping.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("unknown piece symbol '{0}'")]
pub struct UnknownSymbol(pub char);

/// A piece type and color packed into one byte.
///
/// The canonical symbol alphabet maps uppercase to White and lowercase
/// to Black (`P N B R Q K` / `p n b r q k`), with `' '` for the empty
/// square. [`Piece::symbol`] and [`Piece::from_symbol`] are inverses
/// over those 13 variants.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece(u8);

impl Piece {
    const TYPE_MASK: u8 = 0b0111;
    const COLOR_MASK: u8 = 0b1000;

    /// The empty square.
    pub const NONE: Piece = Piece(0);

    /// Packs a piece type and color into one value.
    #[inline]
    pub const fn new(piece_type: PieceType, color: Color) -> Self {
        Piece(piece_type as u8 | ((color as u8) << 3))
    }

    /// Returns the type, or `None` for the empty square.
    #[inline]
    pub const fn piece_type(self) -> Option<PieceType> {
        PieceType::from_bits(self.0 & Self::TYPE_MASK)
    }

    /// Returns the color, or `None` for the empty square.
    #[inline]
    pub const fn color(self) -> Option<Color> {
        if self.is_none() {
            None
        } else if self.0 & Self::COLOR_MASK == 0 {
            Some(Color::White)
        } else {
            Some(Color::Black)
        }
    }

    /// Returns true for the empty square.
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 & Self::TYPE_MASK == 0
    }

    /// Returns true if this is a White piece; false for the empty square.
    #[inline]
    pub const fn is_white(self) -> bool {
        !self.is_none() && self.0 & Self::COLOR_MASK == 0
    }

    /// Returns true if this is a Black piece; false for the empty square.
    #[inline]
    pub const fn is_black(self) -> bool {
        !self.is_none() && self.0 & Self::COLOR_MASK != 0
    }

    /// Returns the canonical symbol for this piece.
    pub const fn symbol(self) -> char {
        let c = match self.piece_type() {
            None => return ' ',
            Some(PieceType::Pawn) => 'p',
            Some(PieceType::Knight) => 'n',
            Some(PieceType::Bishop) => 'b',
            Some(PieceType::Rook) => 'r',
            Some(PieceType::Queen) => 'q',
            Some(PieceType::King) => 'k',
        };
        if self.0 & Self::COLOR_MASK == 0 {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// Decodes a symbol from the canonical alphabet.
    ///
    /// `' '` decodes to [`Piece::NONE`]. Any character outside the
    /// alphabet is a hard [`UnknownSymbol`] failure, never a silent
    /// empty square.
    pub const fn from_symbol(c: char) -> Result<Self, UnknownSymbol> {
        if c == ' ' {
            return Ok(Piece::NONE);
        }
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let piece_type = match c.to_ascii_lowercase() {
            'p' => PieceType::Pawn,
            'n' => PieceType::Knight,
            'b' => PieceType::Bishop,
            'r' => PieceType::Rook,
            'q' => PieceType::Queen,
            'k' => PieceType::King,
            _ => return Err(UnknownSymbol(c)),
        };
        Ok(Piece::new(piece_type, color))
    }

    /// Returns the raw packed byte.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl Default for Piece {
    fn default() -> Self {
        Piece::NONE
    }
}

impl std::fmt::Debug for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece('{}')", self.symbol())
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn packing_layout() {
        assert_eq!(Piece::new(PieceType::Pawn, Color::White).bits(), 1);
        assert_eq!(Piece::new(PieceType::King, Color::White).bits(), 6);
        assert_eq!(Piece::new(PieceType::Pawn, Color::Black).bits(), 9);
        assert_eq!(Piece::new(PieceType::King, Color::Black).bits(), 14);
        assert_eq!(Piece::NONE.bits(), 0);
    }

    #[test]
    fn type_and_color_accessors() {
        let p = Piece::new(PieceType::Queen, Color::Black);
        assert_eq!(p.piece_type(), Some(PieceType::Queen));
        assert_eq!(p.color(), Some(Color::Black));
        assert_eq!(Piece::NONE.piece_type(), None);
        assert_eq!(Piece::NONE.color(), None);
    }

    #[test]
    fn color_predicates_false_for_empty() {
        assert!(!Piece::NONE.is_white());
        assert!(!Piece::NONE.is_black());
        assert!(Piece::new(PieceType::Rook, Color::White).is_white());
        assert!(Piece::new(PieceType::Rook, Color::Black).is_black());
    }

    #[test]
    fn symbol_round_trip_all_variants() {
        for piece_type in PieceType::ALL {
            for color in Color::ALL {
                let piece = Piece::new(piece_type, color);
                let decoded = Piece::from_symbol(piece.symbol()).unwrap();
                assert_eq!(decoded, piece);
            }
        }
        assert_eq!(Piece::from_symbol(' ').unwrap(), Piece::NONE);
        assert_eq!(Piece::NONE.symbol(), ' ');
    }

    #[test]
    fn symbol_case_encodes_color() {
        assert_eq!(Piece::new(PieceType::Pawn, Color::White).symbol(), 'P');
        assert_eq!(Piece::new(PieceType::Pawn, Color::Black).symbol(), 'p');
        assert_eq!(Piece::new(PieceType::King, Color::White).symbol(), 'K');
        assert_eq!(Piece::new(PieceType::Knight, Color::Black).symbol(), 'n');
    }

    #[test]
    fn unknown_symbol_is_an_error() {
        assert_eq!(Piece::from_symbol('x'), Err(UnknownSymbol('x')));
        assert_eq!(Piece::from_symbol('1'), Err(UnknownSymbol('1')));
        assert_eq!(Piece::from_symbol('/'), Err(UnknownSymbol('/')));
    }

    #[test]
    fn capturable_types() {
        assert!(PieceType::Pawn.is_capturable());
        assert!(PieceType::Queen.is_capturable());
        assert!(!PieceType::King.is_capturable());
    }

    #[test]
    fn type_index_is_zero_based() {
        assert_eq!(PieceType::Pawn.index(), 0);
        assert_eq!(PieceType::Queen.index(), 4);
        assert_eq!(PieceType::King.index(), 5);
    }

    proptest! {
        #[test]
        fn arbitrary_non_alphabet_chars_fail(c in any::<char>()) {
            if !"PNBRQKpnbrqk ".contains(c) {
                prop_assert_eq!(Piece::from_symbol(c), Err(UnknownSymbol(c)));
            }
        }
    }
}
