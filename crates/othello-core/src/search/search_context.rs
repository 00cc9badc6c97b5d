//! Per-search mutable state shared by the tree walkers.

use crate::board::Board;
use crate::constants::CHECK_INTERVAL_NODES;
use crate::disc::Disc;
use crate::eval::{Evaluator, terminal_score};
use crate::move_list::MoveOrdering;
use crate::search::time_control::TimeBudget;
use crate::types::Score;

/// State for one root search.
///
/// Scores handed out by the context are from `root_side`'s point of view.
pub struct SearchContext<'a, E: Evaluator + ?Sized> {
    pub eval: &'a E,
    /// The maximizing side.
    pub root_side: Disc,
    pub ordering: MoveOrdering,
    /// Number of nodes searched in this context
    pub n_nodes: u64,
    budget: Option<&'a TimeBudget>,
    aborted: bool,
    horizon_reached: bool,
}

impl<'a, E: Evaluator + ?Sized> SearchContext<'a, E> {
    pub fn new(eval: &'a E, root_side: Disc, ordering: MoveOrdering) -> Self {
        SearchContext {
            eval,
            root_side,
            ordering,
            n_nodes: 0,
            budget: None,
            aborted: false,
            horizon_reached: false,
        }
    }

    /// Attaches a deadline polled every `CHECK_INTERVAL_NODES` nodes.
    #[must_use]
    pub fn with_budget(mut self, budget: &'a TimeBudget) -> Self {
        self.budget = Some(budget);
        self
    }

    /// Counts a visited node and polls the deadline.
    #[inline]
    pub fn increment_nodes(&mut self) {
        self.n_nodes += 1;
        if self.n_nodes % CHECK_INTERVAL_NODES == 0
            && let Some(budget) = self.budget
            && budget.is_expired()
        {
            self.aborted = true;
        }
    }

    /// True once the deadline passed during this search. Scores returned
    /// after that point are meaningless.
    #[inline]
    pub fn is_aborted(&self) -> bool {
        self.aborted
    }

    /// True if some line was cut by the depth limit rather than by game end.
    pub fn horizon_reached(&self) -> bool {
        self.horizon_reached
    }

    /// Heuristic value of a depth-limited leaf.
    #[inline]
    pub fn evaluate(&mut self, board: &Board) -> Score {
        self.horizon_reached = true;
        self.eval.evaluate(board) * self.root_side.sign()
    }

    /// Exact value of a finished game.
    #[inline]
    pub fn terminal(&self, board: &Board) -> Score {
        terminal_score(board) * self.root_side.sign()
    }

    /// Whether `side` is the maximizing player.
    #[inline]
    pub fn is_maximizing(&self, side: Disc) -> bool {
        side == self.root_side
    }
}
