//! Exhaustive fixed-depth minimax.

use crate::board::Board;
use crate::constants::SCORE_INF;
use crate::eval::Evaluator;
use crate::move_list::MoveList;
use crate::search::search_context::SearchContext;
use crate::search::search_result::SearchResult;
use crate::types::{Depth, Score};

/// Searches every root move to `depth` plies and returns the best one.
///
/// Returns `None` if `ctx.root_side` has no legal move.
pub fn search_root<E: Evaluator + ?Sized>(
    ctx: &mut SearchContext<'_, E>,
    board: &Board,
    depth: Depth,
) -> Option<SearchResult> {
    ctx.increment_nodes();
    let side = ctx.root_side;
    let move_list = MoveList::generate(board, side, ctx.ordering);
    let mut best_move = move_list.first()?.sq;

    let mut best_score = -SCORE_INF;
    for mv in move_list.iter() {
        let next = board.make_move_with_flipped(side, mv.sq, mv.flipped);
        let score = search(ctx, &next, depth - 1);
        log::trace!("minimax depth {depth}: {} = {score}", mv.sq);
        if score > best_score {
            best_score = score;
            best_move = mv.sq;
        }
    }

    Some(SearchResult::new(best_move, best_score, depth, ctx.n_nodes))
}

/// Minimax value of `board` searched to `depth` plies.
///
/// A forced pass consumes one ply; a finished game is scored exactly.
pub fn search<E: Evaluator + ?Sized>(
    ctx: &mut SearchContext<'_, E>,
    board: &Board,
    depth: Depth,
) -> Score {
    ctx.increment_nodes();

    if depth == 0 {
        return if board.is_terminal() {
            ctx.terminal(board)
        } else {
            ctx.evaluate(board)
        };
    }

    let side = board.side_to_move();
    let move_list = MoveList::generate(board, side, ctx.ordering);
    if move_list.is_empty() {
        let passed = board.switch_side();
        if !passed.has_legal_moves(passed.side_to_move()) {
            return ctx.terminal(board);
        }
        return search(ctx, &passed, depth - 1);
    }

    if ctx.is_maximizing(side) {
        let mut best = -SCORE_INF;
        for mv in move_list.iter() {
            let next = board.make_move_with_flipped(side, mv.sq, mv.flipped);
            best = best.max(search(ctx, &next, depth - 1));
        }
        best
    } else {
        let mut best = SCORE_INF;
        for mv in move_list.iter() {
            let next = board.make_move_with_flipped(side, mv.sq, mv.flipped);
            best = best.min(search(ctx, &next, depth - 1));
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disc::Disc;
    use crate::eval::Material;
    use crate::move_list::MoveOrdering;

    #[test]
    fn test_depth_one_counts_root_and_children() {
        let board = Board::new();
        let mut ctx = SearchContext::new(&Material, Disc::Black, MoveOrdering::Generation);
        let result = search_root(&mut ctx, &board, 1).unwrap();
        assert_eq!(result.n_nodes, 5);
        assert_eq!(result.score, 3);
    }

    #[test]
    fn test_depth_two_node_count() {
        // 1 root + 4 replies + 12 grandchildren
        let board = Board::new();
        let mut ctx = SearchContext::new(&Material, Disc::Black, MoveOrdering::Generation);
        let result = search_root(&mut ctx, &board, 2).unwrap();
        assert_eq!(result.n_nodes, 17);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_white_perspective() {
        let board = Board::new().apply_move(Disc::Black, crate::square::Square::D3).unwrap();
        let mut ctx = SearchContext::new(&Material, Disc::White, MoveOrdering::Generation);
        let result = search_root(&mut ctx, &board, 1).unwrap();
        // White flips one disc: 3 vs 3.
        assert_eq!(result.score, 0);
        assert!(board.is_legal_move(Disc::White, result.best_move));
    }
}
