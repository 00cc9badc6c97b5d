//! Time-bounded iterative deepening over alpha-beta.
//!
//! Each iteration is a complete fixed-depth alpha-beta search, so a finished
//! iteration at depth `d` yields the same move and score as
//! `Strategy::AlphaBeta` at depth `d`. An iteration cut short by the
//! deadline is thrown away.

use std::time::{Duration, Instant};

use crate::board::Board;
use crate::eval::{Evaluator, terminal_score};
use crate::move_list::MoveList;
use crate::search::alpha_beta;
use crate::search::options::SearchConfig;
use crate::search::search_context::SearchContext;
use crate::search::search_result::SearchResult;
use crate::search::time_control::TimeBudget;
use crate::types::Depth;

/// Progress of the deepening loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DeepeningState {
    Idle,
    /// About to run the iteration at this depth.
    Deepening(Depth),
    Done,
}

/// Deepens from depth 1 until the budget, the depth cap or the end of the
/// game tree stops it, and returns the deepest completed result.
///
/// If no iteration completes, the first legal move is returned with depth 0.
/// Returns `None` only when the root side has no legal move.
pub fn search_root<E: Evaluator + ?Sized>(
    eval: &E,
    board: &Board,
    config: &SearchConfig,
    budget: &TimeBudget,
) -> Option<SearchResult> {
    let side = board.side_to_move();
    let max_depth = config.depth_cap();

    let mut best: Option<SearchResult> = None;
    let mut n_nodes = 0;
    let mut last_iteration = Duration::ZERO;
    let mut state = DeepeningState::Idle;

    loop {
        state = match state {
            DeepeningState::Idle => DeepeningState::Deepening(1),
            DeepeningState::Deepening(depth) => {
                if depth > max_depth || !budget.can_start_iteration(last_iteration) {
                    DeepeningState::Done
                } else {
                    let started = Instant::now();
                    let mut ctx =
                        SearchContext::new(eval, side, config.ordering).with_budget(budget);
                    let result = alpha_beta::search_root(&mut ctx, board, depth);
                    n_nodes += ctx.n_nodes;
                    last_iteration = started.elapsed();

                    match result {
                        Some(result) => {
                            log::debug!(
                                "depth {depth}: {} score {} nodes {} in {:?}",
                                result.best_move,
                                result.score,
                                ctx.n_nodes,
                                last_iteration
                            );
                            best = Some(result);
                            if ctx.horizon_reached() {
                                DeepeningState::Deepening(depth + 1)
                            } else {
                                log::debug!("game tree solved at depth {depth}");
                                DeepeningState::Done
                            }
                        }
                        None => {
                            log::debug!("depth {depth} aborted after {} nodes", ctx.n_nodes);
                            DeepeningState::Done
                        }
                    }
                }
            }
            DeepeningState::Done => break,
        };
    }

    match best {
        Some(mut result) => {
            result.n_nodes = n_nodes;
            Some(result)
        }
        None => {
            let move_list = MoveList::generate(board, side, config.ordering);
            let mv = move_list.first()?;
            log::warn!(
                "no search iteration completed within {:?}, playing {}",
                budget.limit(),
                mv.sq
            );
            let next = board.make_move_with_flipped(side, mv.sq, mv.flipped);
            let score = if next.is_terminal() {
                terminal_score(&next)
            } else {
                eval.evaluate(&next)
            } * side.sign();
            Some(SearchResult::new(mv.sq, score, 0, n_nodes))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disc::Disc;
    use crate::eval::Material;
    use crate::move_list::MoveOrdering;
    use crate::square::Square;

    #[test]
    fn test_expired_budget_falls_back_to_first_move() {
        let board = Board::new();
        let budget = TimeBudget::start(Duration::ZERO);
        let config = SearchConfig::iterative(1);
        let result = search_root(&Material, &board, &config, &budget).unwrap();
        assert_eq!(result.best_move, Square::D3);
        assert_eq!(result.depth, 0);
        assert_eq!(result.n_nodes, 0);
    }

    #[test]
    fn test_fallback_respects_ordering() {
        let board = Board::new();
        let budget = TimeBudget::start(Duration::ZERO);
        let config = SearchConfig::iterative(1).with_ordering(MoveOrdering::Heuristic);
        let first = MoveList::generate(&board, Disc::Black, MoveOrdering::Heuristic)
            .first()
            .unwrap()
            .sq;
        let result = search_root(&Material, &board, &config, &budget).unwrap();
        assert_eq!(result.best_move, first);
    }

    #[test]
    fn test_fallback_scores_game_ending_move_as_terminal() {
        // H8 is Black's only move and flips the last two white discs.
        let board = Board::from_string(
            "XXXXXXXX\
             XXXXXXXX\
             XXXXXXXX\
             XXXXXXXX\
             XXXXXXXX\
             XXXXXXXX\
             XXXXXXOO\
             XXXXXXX-",
            Disc::Black,
        )
        .unwrap();
        let budget = TimeBudget::start(Duration::ZERO);
        let config = SearchConfig::iterative(1);
        let result = search_root(&Material, &board, &config, &budget).unwrap();
        assert_eq!(result.best_move, Square::H8);
        assert_eq!(result.depth, 0);
        assert_eq!(result.score, crate::constants::WIN_SCORE + 64);
    }

    #[test]
    fn test_stops_at_max_depth() {
        let board = Board::new();
        let budget = TimeBudget::from_millis(60_000);
        let config = SearchConfig::iterative(60_000).with_max_depth(3);
        let result = search_root(&Material, &board, &config, &budget).unwrap();
        assert_eq!(result.depth, 3);

        let mut ctx = SearchContext::new(&Material, Disc::Black, MoveOrdering::Generation);
        let fixed = alpha_beta::search_root(&mut ctx, &board, 3).unwrap();
        assert_eq!(result.best_move, fixed.best_move);
        assert_eq!(result.score, fixed.score);
        // Nodes from depths 1 and 2 are included.
        assert!(result.n_nodes > fixed.n_nodes);
    }

    #[test]
    fn test_stops_when_tree_is_solved() {
        // Two empties left; the game ends within two plies.
        let board = Board::from_string(
            "XXXXXXXX\
             XXXXXXXX\
             XXXXXXXX\
             XXXXXXXX\
             XXXXXXXX\
             XXXXXXXX\
             XXXXXXOO\
             XXXXXX--",
            Disc::Black,
        )
        .unwrap();
        let budget = TimeBudget::from_millis(60_000);
        let config = SearchConfig::iterative(60_000);
        let result = search_root(&Material, &board, &config, &budget).unwrap();
        assert!(result.depth <= 3);
        assert!(result.score > crate::constants::WIN_SCORE);
    }
}
