//! Staged assembly of a [`GameState`].

use crate::{Board, CastlingRights, Captures, GameState};
use tabula_core::{Color, Coord};
use thiserror::Error;

/// Errors that can occur while assembling a game state.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    #[error("{0} already set")]
    DoubleInitialization(&'static str),

    #[error("game state is not fully built: {0} missing")]
    IncompleteState(&'static str),
}

/// Staged, fail-fast builder for a [`GameState`].
///
/// Each field may be set at most once per construction; a repeated set
/// fails with [`BuildError::DoubleInitialization`], and [`build`]
/// fails with [`BuildError::IncompleteState`] until every field is
/// present. A builder is a per-construction local value — never share
/// one instance across unrelated parses.
///
/// [`build`]: GameStateBuilder::build
#[derive(Debug, Default)]
pub struct GameStateBuilder {
    board: Option<Board>,
    active_color: Option<Color>,
    castling: Option<CastlingRights>,
    // Double-Option: the outer layer tracks "was this field set",
    // the inner is the en passant value itself (which may be absent).
    en_passant: Option<Option<Coord>>,
    half_move_clock: Option<u32>,
    full_move_clock: Option<u32>,
}

impl GameStateBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the board matrix.
    pub fn set_board(&mut self, board: Board) -> Result<&mut Self, BuildError> {
        if self.board.is_some() {
            return Err(BuildError::DoubleInitialization("board"));
        }
        self.board = Some(board);
        Ok(self)
    }

    /// Sets the side to move.
    pub fn set_active_color(&mut self, color: Color) -> Result<&mut Self, BuildError> {
        if self.active_color.is_some() {
            return Err(BuildError::DoubleInitialization("active color"));
        }
        self.active_color = Some(color);
        Ok(self)
    }

    /// Sets the castling rights.
    pub fn set_castling_rights(&mut self, rights: CastlingRights) -> Result<&mut Self, BuildError> {
        if self.castling.is_some() {
            return Err(BuildError::DoubleInitialization("castling rights"));
        }
        self.castling = Some(rights);
        Ok(self)
    }

    /// Sets the en passant target, or `None` when no capture is
    /// available.
    pub fn set_en_passant(&mut self, target: Option<Coord>) -> Result<&mut Self, BuildError> {
        if self.en_passant.is_some() {
            return Err(BuildError::DoubleInitialization("en passant target"));
        }
        self.en_passant = Some(target);
        Ok(self)
    }

    /// Sets the half-move clock.
    pub fn set_half_move_clock(&mut self, clock: u32) -> Result<&mut Self, BuildError> {
        if self.half_move_clock.is_some() {
            return Err(BuildError::DoubleInitialization("half-move clock"));
        }
        self.half_move_clock = Some(clock);
        Ok(self)
    }

    /// Sets the full-move clock.
    pub fn set_full_move_clock(&mut self, clock: u32) -> Result<&mut Self, BuildError> {
        if self.full_move_clock.is_some() {
            return Err(BuildError::DoubleInitialization("full-move clock"));
        }
        self.full_move_clock = Some(clock);
        Ok(self)
    }

    /// Assembles the game state, seeding zeroed capture tallies and an
    /// empty move history.
    ///
    /// Fails unless every mandatory field was set. On success the
    /// builder is cleared and may be reused for a new construction.
    pub fn build(&mut self) -> Result<GameState, BuildError> {
        // Check completeness before taking anything, so a failed build
        // leaves the builder untouched.
        if self.board.is_none() {
            return Err(BuildError::IncompleteState("board"));
        }
        if self.active_color.is_none() {
            return Err(BuildError::IncompleteState("active color"));
        }
        if self.castling.is_none() {
            return Err(BuildError::IncompleteState("castling rights"));
        }
        if self.en_passant.is_none() {
            return Err(BuildError::IncompleteState("en passant target"));
        }
        if self.half_move_clock.is_none() {
            return Err(BuildError::IncompleteState("half-move clock"));
        }
        if self.full_move_clock.is_none() {
            return Err(BuildError::IncompleteState("full-move clock"));
        }

        Ok(GameState {
            board: self.board.take().expect("checked above"),
            active_color: self.active_color.take().expect("checked above"),
            castling: self.castling.take().expect("checked above"),
            en_passant: self.en_passant.take().expect("checked above"),
            half_move_clock: self.half_move_clock.take().expect("checked above"),
            full_move_clock: self.full_move_clock.take().expect("checked above"),
            captures: Captures::default(),
            history: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_all(builder: &mut GameStateBuilder) -> Result<(), BuildError> {
        builder
            .set_board(Board::EMPTY)?
            .set_active_color(Color::White)?
            .set_castling_rights(CastlingRights::ALL)?
            .set_en_passant(None)?
            .set_half_move_clock(0)?
            .set_full_move_clock(1)?;
        Ok(())
    }

    #[test]
    fn build_with_all_fields() {
        let mut builder = GameStateBuilder::new();
        set_all(&mut builder).unwrap();

        let state = builder.build().unwrap();
        assert_eq!(state.active_color, Color::White);
        assert_eq!(state.castling, CastlingRights::ALL);
        assert_eq!(state.full_move_clock, 1);
        assert!(state.history.is_empty());
        assert_eq!(state.captures, Captures::default());
    }

    #[test]
    fn build_fails_on_empty_builder() {
        let mut builder = GameStateBuilder::new();
        assert_eq!(
            builder.build(),
            Err(BuildError::IncompleteState("board"))
        );
    }

    #[test]
    fn build_fails_on_partial_builder() {
        let mut builder = GameStateBuilder::new();
        builder
            .set_board(Board::EMPTY)
            .unwrap()
            .set_active_color(Color::Black)
            .unwrap();
        assert_eq!(
            builder.build(),
            Err(BuildError::IncompleteState("castling rights"))
        );
    }

    #[test]
    fn each_field_rejects_double_initialization() {
        let mut builder = GameStateBuilder::new();
        set_all(&mut builder).unwrap();

        assert_eq!(
            builder.set_board(Board::EMPTY).unwrap_err(),
            BuildError::DoubleInitialization("board")
        );
        assert_eq!(
            builder.set_active_color(Color::Black).unwrap_err(),
            BuildError::DoubleInitialization("active color")
        );
        assert_eq!(
            builder.set_castling_rights(CastlingRights::NONE).unwrap_err(),
            BuildError::DoubleInitialization("castling rights")
        );
        assert_eq!(
            builder.set_en_passant(None).unwrap_err(),
            BuildError::DoubleInitialization("en passant target")
        );
        assert_eq!(
            builder.set_half_move_clock(5).unwrap_err(),
            BuildError::DoubleInitialization("half-move clock")
        );
        assert_eq!(
            builder.set_full_move_clock(5).unwrap_err(),
            BuildError::DoubleInitialization("full-move clock")
        );
    }

    #[test]
    fn failed_build_leaves_builder_intact() {
        let mut builder = GameStateBuilder::new();
        builder.set_board(Board::EMPTY).unwrap();
        assert!(builder.build().is_err());

        // The board field is still set from before the failed build.
        assert_eq!(
            builder.set_board(Board::EMPTY).unwrap_err(),
            BuildError::DoubleInitialization("board")
        );
    }

    #[test]
    fn builder_is_reusable_after_build() {
        let mut builder = GameStateBuilder::new();
        set_all(&mut builder).unwrap();
        builder.build().unwrap();

        // Cleared for a fresh construction.
        set_all(&mut builder).unwrap();
        assert!(builder.build().is_ok());
    }
}
