//! Chess game state: FEN decoding, staged assembly, validated mutation.
//!
//! The flow through this crate mirrors how a position comes to life:
//! a position record is decoded by [`FenParser`], assembled field by
//! field through a [`GameStateBuilder`], and the resulting
//! [`GameState`] is then mutated in place by a [`BoardController`].

mod board;
mod builder;
mod controller;
mod fen;
mod state;

pub use board::Board;
pub use builder::{BuildError, GameStateBuilder};
pub use controller::{BoardController, MoveError, MoveGenerator};
pub use fen::{FenParser, ParseError};
pub use state::{Captures, CastlingRights, GameState, MoveRecord};
