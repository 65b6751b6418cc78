//! `reversi-engine` is the rules engine for Reversi/Othello.
//!
//! It owns the 8x8 board, decides whether a move is legal, flips the captured
//! discs and reports when the game is over. Everything is synchronous and
//! free of I/O: a [`Board`] is a plain value that callers pass around, so
//! independent games never share state.
//!
//!  - [`Board`] holds the cells and implements the move rules.
//!  - [`Position`], [`Direction`] and [`Side`] name the pieces of a move.
//!  - [`bitboard`] packs sets of positions, as returned by [`Board::legal_moves`].

pub mod bitboard;
pub mod test_utils;

mod board;
mod direction;
mod error;
mod game;
mod position;
mod utils;

pub use board::*;
pub use direction::*;
pub use error::*;
pub use game::*;
pub use position::*;

/// The number of spaces on one edge of a Reversi board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on a Reversi board.
pub const NUM_SPACES: usize = 64;
