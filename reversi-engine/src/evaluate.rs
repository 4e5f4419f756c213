//! Single-move positional heuristic used by the computer opponent.
//!
//! There is no look-ahead: a move is scored only by what it changes on the board
//! right now, and the computer plays the best-scoring legal move.

use crate::board::Board;
use crate::game::{Chooser, Side};
use crate::location::{Location, MoveList};
use tracing::trace;

/// Score for each flipped chip on the outer ring.
pub const EDGE_FLIP: f64 = 1.0;

/// Score for each flipped chip away from the outer ring.
pub const INTERIOR_FLIP: f64 = 2.0;

/// Bonus for placing a chip in a corner.
pub const CORNER_PLACEMENT: f64 = 0.8;

/// Bonus for placing a chip on a non-corner edge space.
pub const EDGE_PLACEMENT: f64 = 0.4;

/// Score `side` placing a chip at `loc`, normally one of its legal moves.
/// A placement that flips nothing scores only its position bonus.
/// The move is simulated on a copy; `board` itself is untouched.
pub fn evaluate(board: &Board, loc: Location, side: Side) -> f64 {
    let mut after = *board;
    after.place(loc, side);

    let flips: f64 = Board::locations()
        .filter(|&changed| changed != loc && board.get(changed) != after.get(changed))
        .map(|flipped| {
            if flipped.is_edge() {
                EDGE_FLIP
            } else {
                INTERIOR_FLIP
            }
        })
        .sum();

    let placement = if loc.is_corner() {
        CORNER_PLACEMENT
    } else if loc.is_edge() {
        EDGE_PLACEMENT
    } else {
        0.0
    };

    flips + placement
}

/// Find the position in `moves` of the best-scoring move for `side`.
/// Ties go to the move listed first.
fn best_index(board: &Board, side: Side, moves: &MoveList) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, loc) in moves.iter().enumerate() {
        let score = evaluate(board, loc, side);
        trace!(%loc, score, "evaluated");
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((index, score)),
        }
    }
    best.map(|(index, _)| index)
}

/// Find the best-scoring legal move for `side`, or None if it has no legal move.
/// Ties go to the move found first in row-major order.
pub fn best_move(board: &Board, side: Side) -> Option<Location> {
    let moves = board.legal_moves(side);
    best_index(board, side, &moves).and_then(|index| moves.get(index))
}

/// The computer opponent: always plays the best move by [`evaluate`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Greedy;

impl Chooser for Greedy {
    fn choose(&mut self, board: &Board, side: Side, moves: &MoveList) -> Option<usize> {
        best_index(board, side, moves)
    }
}
