//! Move generator validation by exhaustive tree counting.

use crate::board::Board;
use crate::move_list::MoveList;
use crate::types::Depth;

/// Runs perft from the standard initial position.
pub fn perft_root(depth: Depth) -> u64 {
    perft(&Board::new(), depth)
}

/// Counts the leaves of the game tree `depth` plies below `board`.
///
/// A forced pass does not consume depth and a finished game counts as one
/// leaf, which matches the published Othello perft tables.
pub fn perft(board: &Board, depth: Depth) -> u64 {
    if depth == 0 {
        return 1;
    }

    let side = board.side_to_move();
    let move_list = MoveList::new(board, side);

    if move_list.is_empty() {
        let next = board.switch_side();
        return if next.has_legal_moves(next.side_to_move()) {
            perft(&next, depth)
        } else {
            1
        };
    }

    if depth == 1 {
        return move_list.count() as u64;
    }

    move_list
        .iter()
        .map(|m| perft(&board.make_move_with_flipped(side, m.sq, m.flipped), depth - 1))
        .sum()
}
