//! Error types for the Othello core.
//!
//! Every failure is surfaced to the caller; nothing in the core retries or
//! silently corrects a request.

use thiserror::Error;

use crate::disc::Disc;
use crate::square::{Square, SquareError};
use crate::types::Depth;

/// Errors reported by board operations, searches and transcript parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OthelloError {
    /// The square is occupied or captures nothing for the given side.
    #[error("illegal move: {side:?} cannot play {sq}")]
    IllegalMove { side: Disc, sq: Square },

    /// A pass was requested while the side to move still has a placement,
    /// or while the game is already over.
    #[error("illegal pass: {0:?} has a legal move or the game is over")]
    IllegalPass(Disc),

    /// A search was requested for a side with no legal placement.
    #[error("no legal move for {0:?}")]
    NoLegalMove(Disc),

    /// Fixed-depth searches need at least one ply.
    #[error("invalid search depth {0}: must be at least 1")]
    InvalidDepth(Depth),

    /// Iterative deepening needs a positive time limit.
    #[error("invalid time limit {0} ms: must be at least 1")]
    InvalidTimeLimit(u64),

    /// A board, play or transcript could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<SquareError> for OthelloError {
    fn from(err: SquareError) -> Self {
        OthelloError::Parse(err.to_string())
    }
}

/// Convenience type alias for results carrying an [`OthelloError`].
pub type Result<T> = std::result::Result<T, OthelloError>;
