//! Leaf types for the chess position model.
//!
//! This crate provides the fundamental types used across the workspace:
//! - [`Piece`] and [`PieceType`] for the packed piece representation
//! - [`Color`] for the two players
//! - [`Coord`] for board coordinates and the orientation contract

mod color;
mod coord;
mod piece;

pub use color::Color;
pub use coord::Coord;
pub use piece::{Piece, PieceType, UnknownSymbol};
