//! Move generation and ordering for Othello positions.

use arrayvec::ArrayVec;
use std::slice;
use std::str::FromStr;

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::disc::Disc;
use crate::error::OthelloError;
use crate::eval::SQUARE_WEIGHTS;
use crate::flip;
use crate::square::Square;

/// Maximum number of moves possible in an Othello position.
const MAX_MOVES: usize = 34;

/// Represents a single placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    /// The square where the disc is placed.
    pub sq: Square,
    /// Bitboard representing all opponent discs flipped by this move.
    pub flipped: Bitboard,
    /// Score for move ordering (higher = searched earlier).
    pub value: i32,
}

impl Move {
    /// Creates a new move with the specified square and flipped discs.
    #[inline]
    pub fn new(sq: Square, flipped: Bitboard) -> Move {
        debug_assert!(!flipped.is_empty(), "Move must flip at least one disc");
        Move {
            sq,
            flipped,
            value: 0,
        }
    }
}

/// Order in which generated moves are returned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MoveOrdering {
    /// Row-major, A1 first.
    #[default]
    Generation,
    /// Corners and edges first, squares next to an empty corner last.
    /// Equal weights keep row-major order.
    Heuristic,
}

impl FromStr for MoveOrdering {
    type Err = OthelloError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "generation" | "row-major" => Ok(MoveOrdering::Generation),
            "heuristic" => Ok(MoveOrdering::Heuristic),
            other => Err(OthelloError::Parse(format!("unknown move ordering '{other}'"))),
        }
    }
}

/// Container for all legal moves of one side, each with its flip set.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: ArrayVec<Move, MAX_MOVES>,
}

impl MoveList {
    /// Generates all legal moves for `side` in row-major order.
    #[inline]
    pub fn new(board: &Board, side: Disc) -> MoveList {
        let player = board.bitboard(side);
        let opponent = board.bitboard(side.opposite());
        let mut moves = ArrayVec::new();
        for sq in board.legal_moves(side) {
            let flipped = flip::flip(sq, player, opponent);
            moves.push(Move::new(sq, flipped));
        }
        MoveList { moves }
    }

    /// Generates all legal moves for `side` in the requested order.
    pub fn generate(board: &Board, side: Disc, ordering: MoveOrdering) -> MoveList {
        let mut move_list = MoveList::new(board, side);
        if ordering == MoveOrdering::Heuristic && move_list.count() > 1 {
            move_list.evaluate_moves();
            move_list.sort();
        }
        move_list
    }

    /// Returns the number of legal moves in this position.
    #[inline]
    pub fn count(&self) -> usize {
        self.moves.len()
    }

    /// Returns `true` if there are no legal moves.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns the first move in the list, if any exists.
    #[inline]
    pub fn first(&self) -> Option<&Move> {
        self.moves.first()
    }

    /// Returns an iterator over the moves in their current order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Assigns each move its static square weight as ordering value.
    fn evaluate_moves(&mut self) {
        for mv in self.moves.iter_mut() {
            mv.value = SQUARE_WEIGHTS[mv.sq.index()];
        }
    }

    /// Sorts by decreasing value. The sort is stable, so ties stay row-major.
    fn sort(&mut self) {
        self.moves.sort_by(|a, b| b.value.cmp(&a.value));
    }
}
