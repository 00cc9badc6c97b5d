//! Search configuration.

use std::fmt;
use std::str::FromStr;

use crate::constants::MAX_PLY;
use crate::error::{OthelloError, Result};
use crate::move_list::MoveOrdering;
use crate::types::Depth;

/// Search strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Exhaustive fixed-depth minimax.
    Minimax,
    /// Fixed-depth minimax with alpha-beta pruning.
    #[default]
    AlphaBeta,
    /// Alpha-beta at depth 1, 2, 3, ... until the time budget runs out.
    IterativeDeepening,
}

impl FromStr for Strategy {
    type Err = OthelloError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "minimax" => Ok(Strategy::Minimax),
            "alphabeta" | "alpha-beta" => Ok(Strategy::AlphaBeta),
            "iterative" | "id" => Ok(Strategy::IterativeDeepening),
            _ => Err(OthelloError::Parse(format!("unknown search strategy: {s}"))),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Minimax => "minimax",
            Strategy::AlphaBeta => "alphabeta",
            Strategy::IterativeDeepening => "iterative",
        };
        f.write_str(name)
    }
}

/// Parameters of a single move choice.
///
/// `depth` drives the fixed-depth strategies and `time_limit_ms` drives
/// iterative deepening; each strategy ignores the other field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    pub strategy: Strategy,
    /// Plies to search below the root. Must be at least 1.
    pub depth: Depth,
    /// Wall-clock budget in milliseconds. Must be at least 1.
    pub time_limit_ms: u64,
    /// Optional cap on iterative deepening, never above `MAX_PLY`.
    pub max_depth: Option<Depth>,
    pub ordering: MoveOrdering,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            strategy: Strategy::default(),
            depth: 3,
            time_limit_ms: 1000,
            max_depth: None,
            ordering: MoveOrdering::default(),
        }
    }
}

impl SearchConfig {
    /// Fixed-depth minimax.
    pub fn minimax(depth: Depth) -> Self {
        SearchConfig::default()
            .with_strategy(Strategy::Minimax)
            .with_depth(depth)
    }

    /// Fixed-depth alpha-beta.
    pub fn alpha_beta(depth: Depth) -> Self {
        SearchConfig::default()
            .with_strategy(Strategy::AlphaBeta)
            .with_depth(depth)
    }

    /// Time-limited iterative deepening.
    pub fn iterative(time_limit_ms: u64) -> Self {
        SearchConfig::default()
            .with_strategy(Strategy::IterativeDeepening)
            .with_time_limit_ms(time_limit_ms)
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    #[must_use]
    pub fn with_depth(mut self, depth: Depth) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub fn with_time_limit_ms(mut self, time_limit_ms: u64) -> Self {
        self.time_limit_ms = time_limit_ms;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: Depth) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    #[must_use]
    pub fn with_ordering(mut self, ordering: MoveOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    /// Deepest iteration iterative deepening may run.
    pub fn depth_cap(&self) -> Depth {
        self.max_depth.map_or(MAX_PLY, |d| d.min(MAX_PLY))
    }

    /// Checks the fields the selected strategy reads.
    ///
    /// # Errors
    ///
    /// `InvalidDepth` for a zero depth (or zero `max_depth`),
    /// `InvalidTimeLimit` for a zero time limit.
    pub fn validate(&self) -> Result<()> {
        match self.strategy {
            Strategy::Minimax | Strategy::AlphaBeta => {
                if self.depth == 0 {
                    return Err(OthelloError::InvalidDepth(self.depth));
                }
            }
            Strategy::IterativeDeepening => {
                if self.time_limit_ms == 0 {
                    return Err(OthelloError::InvalidTimeLimit(self.time_limit_ms));
                }
                if self.max_depth == Some(0) {
                    return Err(OthelloError::InvalidDepth(0));
                }
            }
        }
        Ok(())
    }
}
