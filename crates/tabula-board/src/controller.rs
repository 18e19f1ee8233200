//! Validated mutation of a live [`GameState`].
//!
//! Every operation validates fully before touching the state: a failed
//! call leaves the board, tallies, and history exactly as they were.

use crate::{GameState, MoveRecord};
use tabula_core::{Coord, Piece, PieceType};
use thiserror::Error;

/// Errors that can occur when mutating the board.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("illegal move: {0}")]
    IllegalMove(String),

    #[error("illegal capture: {0}")]
    IllegalCapture(String),
}

/// The seam for a future move-generation collaborator.
///
/// An implementation returns the destination squares legal under full
/// chess rules for the given piece at the given origin, honoring check
/// avoidance, pins, castling, en passant execution, and promotion.
pub trait MoveGenerator {
    fn possible_moves(&self, state: &GameState, piece: Piece, origin: Coord) -> Vec<Coord>;
}

/// Mutates a live [`GameState`] through validated moves and captures.
///
/// The controller holds the state's only mutable borrow for its
/// lifetime, so one mutation is in flight at a time; callers that share
/// a state impose single-writer discipline by construction.
pub struct BoardController<'a> {
    state: &'a mut GameState,
}

impl<'a> BoardController<'a> {
    /// Creates a controller over the given state.
    pub fn new(state: &'a mut GameState) -> Self {
        BoardController { state }
    }

    /// Returns the state under control.
    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Returns true if `piece` may land on `to`: the square is on the
    /// board and either empty or held by the opposite color.
    pub fn is_valid_destination(&self, piece: Piece, to: Coord) -> bool {
        if !to.in_bounds() {
            return false;
        }
        let occupant = self.state.board.get(to);
        occupant.is_none() || occupant.color() != piece.color()
    }

    /// Moves `piece` from `from` to `to`, delegating to
    /// [`capture_piece`] when `to` holds an opposite-color piece.
    ///
    /// [`capture_piece`]: BoardController::capture_piece
    pub fn move_piece(&mut self, piece: Piece, from: Coord, to: Coord) -> Result<(), MoveError> {
        if piece.is_none() {
            return Err(MoveError::IllegalMove("cannot move an empty square".into()));
        }
        if !from.in_bounds() {
            return Err(MoveError::IllegalMove(format!("origin {} is off the board", from)));
        }
        if !self.is_valid_destination(piece, to) {
            return Err(MoveError::IllegalMove(format!(
                "{} is not a valid destination for '{}'",
                to,
                piece.symbol()
            )));
        }

        let occupant = self.state.board.get(to);
        if !occupant.is_none() {
            // Same-color occupants were already rejected above.
            return self.capture_piece(occupant, piece, to, from);
        }

        self.state.board.set(to, piece);
        self.state.board.clear(from);
        self.state.history.push(MoveRecord {
            piece,
            from,
            to,
            captured: None,
        });
        Ok(())
    }

    /// Captures `victim` at `victim_at` with `attacker` from
    /// `attacker_at`, updating the attacker's capture tally.
    ///
    /// Kings are never captured under this model; a game ends by
    /// checkmate instead, so a King victim is rejected outright.
    pub fn capture_piece(
        &mut self,
        victim: Piece,
        attacker: Piece,
        victim_at: Coord,
        attacker_at: Coord,
    ) -> Result<(), MoveError> {
        if victim.is_none() || attacker.is_none() {
            return Err(MoveError::IllegalCapture(
                "both pieces must be present".into(),
            ));
        }
        if !victim_at.in_bounds() || !attacker_at.in_bounds() {
            return Err(MoveError::IllegalCapture(
                "capture squares must be on the board".into(),
            ));
        }
        if self.state.board.get(victim_at) != victim {
            // Stale reference: the board moved on since the caller
            // looked at this square.
            return Err(MoveError::IllegalCapture(format!(
                "square {} does not hold '{}'",
                victim_at,
                victim.symbol()
            )));
        }
        if victim.color() == attacker.color() {
            return Err(MoveError::IllegalCapture(
                "pieces share a color".into(),
            ));
        }
        if victim.piece_type() == Some(PieceType::King) {
            return Err(MoveError::IllegalCapture("kings are never captured".into()));
        }

        let by = attacker.color().expect("attacker checked non-empty");
        let taken = victim.piece_type().expect("victim checked non-empty");
        self.state.captures.record(by, taken);
        self.state.board.set(victim_at, attacker);
        self.state.board.clear(attacker_at);
        self.state.history.push(MoveRecord {
            piece: attacker,
            from: attacker_at,
            to: victim_at,
            captured: Some(victim),
        });
        Ok(())
    }
}
