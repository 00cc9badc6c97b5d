//! Global constants

use crate::types::{Depth, Score};

/// Number of squares on the Othello board.
pub const BOARD_SQUARES: usize = 64;

/// Deepest iteration the iterative-deepening search will attempt.
pub const MAX_PLY: Depth = 60;

/// Score bonus for a decided game. Dominates every heuristic evaluation.
pub const WIN_SCORE: Score = 1_000_000;

/// Infinity score for search bounds.
pub const SCORE_INF: Score = 100_000_000;

/// Nodes visited between two deadline polls inside the tree.
pub const CHECK_INTERVAL_NODES: u64 = 1024;
