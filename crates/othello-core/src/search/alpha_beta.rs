//! Fixed-depth minimax with alpha-beta pruning.
//!
//! The tree walk is fail-soft. At the root alpha tracks the best score so
//! far and a child only replaces the best move when it is strictly better,
//! so the chosen move and its score match plain minimax exactly.

use crate::board::Board;
use crate::constants::SCORE_INF;
use crate::eval::Evaluator;
use crate::move_list::MoveList;
use crate::search::search_context::SearchContext;
use crate::search::search_result::SearchResult;
use crate::types::{Depth, Score};

/// Searches every root move to `depth` plies and returns the best one.
///
/// Returns `None` if `ctx.root_side` has no legal move or the context's
/// deadline passed before all root moves were resolved.
pub fn search_root<E: Evaluator + ?Sized>(
    ctx: &mut SearchContext<'_, E>,
    board: &Board,
    depth: Depth,
) -> Option<SearchResult> {
    ctx.increment_nodes();
    let side = ctx.root_side;
    let move_list = MoveList::generate(board, side, ctx.ordering);
    let first = move_list.first()?.sq;

    let mut alpha = -SCORE_INF;
    let beta = SCORE_INF;
    let mut best_score = -SCORE_INF;
    let mut best_move = first;
    for mv in move_list.iter() {
        let next = board.make_move_with_flipped(side, mv.sq, mv.flipped);
        let score = search(ctx, &next, depth - 1, alpha, beta);
        if ctx.is_aborted() {
            return None;
        }

        log::trace!("alpha-beta depth {depth}: {} = {score}", mv.sq);
        if score > best_score {
            best_score = score;
            best_move = mv.sq;
        }
        alpha = alpha.max(best_score);
    }

    Some(SearchResult::new(best_move, best_score, depth, ctx.n_nodes))
}

/// Alpha-beta value of `board` searched to `depth` plies inside `(alpha, beta)`.
///
/// Returns 0 once the context is aborted; callers must check
/// [`SearchContext::is_aborted`] before trusting the score.
pub fn search<E: Evaluator + ?Sized>(
    ctx: &mut SearchContext<'_, E>,
    board: &Board,
    depth: Depth,
    mut alpha: Score,
    mut beta: Score,
) -> Score {
    ctx.increment_nodes();
    if ctx.is_aborted() {
        return 0;
    }

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
        return search(ctx, &passed, depth - 1, alpha, beta);
    }

    if ctx.is_maximizing(side) {
        let mut best = -SCORE_INF;
        for mv in move_list.iter() {
            let next = board.make_move_with_flipped(side, mv.sq, mv.flipped);
            let score = search(ctx, &next, depth - 1, alpha, beta);
            if ctx.is_aborted() {
                return 0;
            }
            best = best.max(score);
            alpha = alpha.max(best);
            if alpha >= beta {
                break;
            }
        }
        best
    } else {
        let mut best = SCORE_INF;
        for mv in move_list.iter() {
            let next = board.make_move_with_flipped(side, mv.sq, mv.flipped);
            let score = search(ctx, &next, depth - 1, alpha, beta);
            if ctx.is_aborted() {
                return 0;
            }
            best = best.min(score);
            beta = beta.min(best);
            if alpha >= beta {
                break;
            }
        }
        best
    }
}
