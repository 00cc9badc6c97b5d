//! Search result types.

use std::time::Duration;

use crate::search::options::Strategy;
use crate::square::Square;
use crate::types::{Depth, Score};

/// Result of a search operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Square,
    /// Value of `best_move` from the searching side's point of view.
    pub score: Score,
    /// Deepest completed depth. Zero when iterative deepening fell back to
    /// the first legal move.
    pub depth: Depth,
    pub n_nodes: u64,
    pub elapsed: Duration,
    pub strategy: Strategy,
}

impl SearchResult {
    pub(crate) fn new(best_move: Square, score: Score, depth: Depth, n_nodes: u64) -> Self {
        SearchResult {
            best_move,
            score,
            depth,
            n_nodes,
            elapsed: Duration::ZERO,
            strategy: Strategy::default(),
        }
    }

    /// Nodes per second, or zero when no time was measured.
    pub fn nps(&self) -> u64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            (self.n_nodes as f64 / secs) as u64
        } else {
            0
        }
    }
}
