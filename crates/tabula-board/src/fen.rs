//! FEN (Forsyth-Edwards Notation) decoding.
//!
//! A position record holds six whitespace-separated fields: piece
//! placement, active color, castling availability, en passant target,
//! half-move clock, and full-move clock. [`FenParser::parse`] decodes
//! all six and assembles a [`GameState`] through a
//! [`GameStateBuilder`] local to the call.

use crate::{Board, CastlingRights, GameState, GameStateBuilder};
use tabula_core::{Color, Coord, Piece, UnknownSymbol};
use thiserror::Error;

/// Errors that can occur when decoding a position record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed position record: {0}")]
    MalformedRecord(String),

    #[error(transparent)]
    UnknownSymbol(#[from] UnknownSymbol),

    #[error("invalid en passant square: {0}")]
    InvalidSquare(String),
}

/// Decoder for position records.
pub struct FenParser;

impl FenParser {
    /// The standard starting position.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// Parses a position record into a fully assembled [`GameState`].
    ///
    /// A malformed record aborts the load entirely; no partial state is
    /// ever returned.
    pub fn parse(record: &str) -> Result<GameState, ParseError> {
        let fields: Vec<&str> = record.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(ParseError::MalformedRecord(format!(
                "expected 6 fields, got {}",
                fields.len()
            )));
        }

        let board = Self::parse_placement(fields[0])?;
        let active_color = Self::parse_active_color(fields[1])?;
        let castling = Self::parse_castling(fields[2])?;
        let en_passant = Self::parse_en_passant(fields[3])?;
        let half_move_clock = Self::parse_clock(fields[4], "half-move clock")?;
        let full_move_clock = Self::parse_clock(fields[5], "full-move clock")?;

        let mut builder = GameStateBuilder::new();
        builder
            .set_board(board)
            .and_then(|b| b.set_active_color(active_color))
            .and_then(|b| b.set_castling_rights(castling))
            .and_then(|b| b.set_en_passant(en_passant))
            .and_then(|b| b.set_half_move_clock(half_move_clock))
            .and_then(|b| b.set_full_move_clock(full_move_clock))
            .expect("fresh builder accepts each field once");
        Ok(builder.build().expect("all six fields were set"))
    }

    /// Decodes the placement field into board rows 0..=7 in listed
    /// order (row 0 = first listed rank).
    fn parse_placement(field: &str) -> Result<Board, ParseError> {
        let ranks: Vec<&str> = field.split('/').collect();
        if ranks.len() != 8 {
            return Err(ParseError::MalformedRecord(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        let mut rows = [[Piece::NONE; 8]; 8];
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for c in rank.chars() {
                let width = match c.to_digit(10) {
                    Some(n @ 1..=8) => n as usize,
                    Some(_) => {
                        return Err(ParseError::MalformedRecord(format!(
                            "invalid empty-square count '{}' in rank {}",
                            c,
                            row + 1
                        )))
                    }
                    None => {
                        let piece = Piece::from_symbol(c)?;
                        if col < 8 {
                            rows[row][col] = piece;
                        }
                        1
                    }
                };
                col += width;
                if col > 8 {
                    return Err(ParseError::MalformedRecord(format!(
                        "rank {} overflows 8 squares",
                        row + 1
                    )));
                }
            }
            if col != 8 {
                return Err(ParseError::MalformedRecord(format!(
                    "rank {} has {} squares, expected 8",
                    row + 1,
                    col
                )));
            }
        }

        Ok(Board::from_rows(rows))
    }

    fn parse_active_color(field: &str) -> Result<Color, ParseError> {
        match field {
            "w" => Ok(Color::White),
            "b" => Ok(Color::Black),
            other => Err(ParseError::MalformedRecord(format!(
                "active color must be 'w' or 'b', got '{}'",
                other
            ))),
        }
    }

    fn parse_castling(field: &str) -> Result<CastlingRights, ParseError> {
        if field == "-" {
            return Ok(CastlingRights::NONE);
        }

        let mut rights = CastlingRights::NONE;
        for c in field.chars() {
            match c {
                'K' => rights.grant_kingside(Color::White),
                'Q' => rights.grant_queenside(Color::White),
                'k' => rights.grant_kingside(Color::Black),
                'q' => rights.grant_queenside(Color::Black),
                other => {
                    return Err(ParseError::MalformedRecord(format!(
                        "invalid castling character '{}'",
                        other
                    )))
                }
            }
        }
        Ok(rights)
    }

    /// Decodes the en passant field into a (file, rank-index)
    /// coordinate: column = file letter - 'a', row = rank digit - 1.
    fn parse_en_passant(field: &str) -> Result<Option<Coord>, ParseError> {
        if field == "-" {
            return Ok(None);
        }

        let chars: Vec<char> = field.chars().collect();
        if chars.len() != 2 {
            return Err(ParseError::InvalidSquare(field.to_string()));
        }
        let col = match chars[0] {
            c @ 'a'..='h' => c as i8 - b'a' as i8,
            _ => return Err(ParseError::InvalidSquare(field.to_string())),
        };
        let row = match chars[1] {
            c @ '1'..='8' => c as i8 - b'1' as i8,
            _ => return Err(ParseError::InvalidSquare(field.to_string())),
        };
        Ok(Some(Coord::new(col, row)))
    }

    fn parse_clock(field: &str, name: &str) -> Result<u32, ParseError> {
        field.parse::<u32>().map_err(|_| {
            ParseError::MalformedRecord(format!("{} must be a non-negative integer, got '{}'", name, field))
        })
    }
}
