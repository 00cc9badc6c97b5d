//! Game tree search engine.
//!
//! Three interchangeable strategies share one entry point, [`Search::run`]:
//! plain minimax, alpha-beta pruned minimax and time-bounded iterative
//! deepening over alpha-beta. Every call is single threaded and owns all of
//! its state; the chosen move is returned, never stored.

pub mod alpha_beta;
pub mod iterative;
pub mod minimax;
pub mod options;
pub mod search_context;
pub mod search_result;
pub mod time_control;

use std::time::Instant;

use crate::board::Board;
use crate::disc::Disc;
use crate::error::{OthelloError, Result};
use crate::eval::{Evaluator, Material};
use crate::search::search_context::SearchContext;
use crate::search::time_control::TimeBudget;

pub use options::{SearchConfig, Strategy};
pub use search_result::SearchResult;

/// Search engine bound to an evaluator.
pub struct Search<E: Evaluator = Material> {
    eval: E,
}

impl Default for Search<Material> {
    fn default() -> Self {
        Search::new(Material)
    }
}

impl<E: Evaluator> Search<E> {
    /// Creates a search engine that scores leaves with `eval`.
    pub fn new(eval: E) -> Search<E> {
        Search { eval }
    }

    /// Chooses a move for `side` on `board`.
    ///
    /// `side` is treated as the side to move and as the maximizing side; the
    /// returned score is from its point of view.
    ///
    /// # Errors
    ///
    /// * `InvalidDepth` / `InvalidTimeLimit` if `config` does not validate.
    /// * `NoLegalMove` if `side` has no placement (terminal board or forced pass).
    pub fn run(&self, board: &Board, side: Disc, config: &SearchConfig) -> Result<SearchResult> {
        config.validate()?;
        if !board.has_legal_moves(side) {
            return Err(OthelloError::NoLegalMove(side));
        }

        let start = Instant::now();
        let root = board.with_side_to_move(side);

        let mut result = match config.strategy {
            Strategy::Minimax => {
                let mut ctx = SearchContext::new(&self.eval, side, config.ordering);
                minimax::search_root(&mut ctx, &root, config.depth)
                    .ok_or(OthelloError::NoLegalMove(side))?
            }
            Strategy::AlphaBeta => {
                let mut ctx = SearchContext::new(&self.eval, side, config.ordering);
                alpha_beta::search_root(&mut ctx, &root, config.depth)
                    .ok_or(OthelloError::NoLegalMove(side))?
            }
            Strategy::IterativeDeepening => {
                let budget = TimeBudget::from_millis(config.time_limit_ms);
                iterative::search_root(&self.eval, &root, config, &budget)
                    .ok_or(OthelloError::NoLegalMove(side))?
            }
        };

        result.elapsed = start.elapsed();
        result.strategy = config.strategy;
        Ok(result)
    }
}

/// Chooses a move with the default material evaluator.
///
/// # Errors
///
/// See [`Search::run`].
pub fn choose_move(board: &Board, side: Disc, config: &SearchConfig) -> Result<SearchResult> {
    Search::default().run(board, side, config)
}
