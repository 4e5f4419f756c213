//! `reversi-engine` implements the rules of Reversi (Othello) for console play.
//!
//! This package implements three levels of abstraction:
//!
//!  - [`Board`] holds the 8×8 grid and implements legal-move detection and chip counting.
//!    Move application is internal: it trusts its caller to only play legal moves.
//!  - [`evaluate`] scores a single candidate move with a positional heuristic,
//!    which is what the computer opponent uses to pick its move.
//!  - [`Game`] is the safe, high-level turn state machine. It is the only public way
//!    to change a board, and it always draws moves from [`Board::legal_moves`].

pub mod evaluate;
pub mod test_utils;

mod board;
mod game;
mod location;
mod utils;

pub use board::*;
pub use evaluate::{best_move, Greedy};
pub use game::*;
pub use location::*;

/// The number of spaces on one edge of a Reversi board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on a Reversi board.
pub const NUM_SPACES: usize = 64;
