//! "Perft" move-path enumeration: count the number of leaves at a given depth.
//! Useful for checking move generation against published counts.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::board::Board;
use crate::game::Side;

/// Count the move paths of length `depth` from the starting position.
/// A pass counts as a move; a game that ends early counts as one leaf.
pub fn run_perft(depth: u64) -> u64 {
    leaves_below(Board::new(), Side::Dark, depth, false)
}

fn leaves_below(board: Board, side: Side, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = board.legal_moves(side);
    if all_moves.is_empty() {
        // Both sides passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, !side, depth - 1, true);
    }

    all_moves
        .into_iter()
        .map(|mv| {
            let mut next = board;
            next.apply_move(mv, side);
            leaves_below(next, !side, depth - 1, false)
        })
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), 244);
}

#[test]
fn perft_05() {
    assert_eq!(run_perft(5), 1396);
}
