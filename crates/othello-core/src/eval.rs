//! Static position evaluation.
//!
//! Evaluators score a board from Black's point of view: positive favors Black,
//! negative favors White. The search rescales scores to the side it searches
//! for. Decided games are scored by [`terminal_score`], which dominates every
//! heuristic value.

use std::str::FromStr;

use crate::board::Board;
use crate::constants::WIN_SCORE;
use crate::disc::Disc;
use crate::error::OthelloError;
use crate::types::Score;

/// Static weight of each square, A1 to H8.
///
/// Corners are worth the most, edges next; the X and C squares next to a
/// corner are penalized because they tend to give the corner away.
#[rustfmt::skip]
pub const SQUARE_WEIGHTS: [i32; 64] = [
    100, -20,  10,   5,   5,  10, -20, 100,
    -20, -50,  -2,  -2,  -2,  -2, -50, -20,
     10,  -2,   1,   1,   1,   1,  -2,  10,
      5,  -2,   1,   0,   0,   1,  -2,   5,
      5,  -2,   1,   0,   0,   1,  -2,   5,
     10,  -2,   1,   1,   1,   1,  -2,  10,
    -20, -50,  -2,  -2,  -2,  -2, -50, -20,
    100, -20,  10,   5,   5,  10, -20, 100,
];

/// Weight of one legal move of mobility difference in [`Positional`].
pub const MOBILITY_WEIGHT: i32 = 10;

/// Scores a non-terminal position. Must be deterministic.
pub trait Evaluator {
    /// Returns the heuristic value of `board`, positive when Black is ahead.
    fn evaluate(&self, board: &Board) -> Score;
}

impl<E: Evaluator + ?Sized> Evaluator for &E {
    fn evaluate(&self, board: &Board) -> Score {
        (**self).evaluate(board)
    }
}

impl<E: Evaluator + ?Sized> Evaluator for Box<E> {
    fn evaluate(&self, board: &Board) -> Score {
        (**self).evaluate(board)
    }
}

/// Disc differential: Black discs minus White discs.
#[derive(Clone, Copy, Debug, Default)]
pub struct Material;

impl Evaluator for Material {
    #[inline]
    fn evaluate(&self, board: &Board) -> Score {
        board.disc_diff()
    }
}

/// Square-weighted material plus a mobility term.
#[derive(Clone, Copy, Debug)]
pub struct Positional {
    pub mobility_weight: i32,
}

impl Default for Positional {
    fn default() -> Self {
        Positional {
            mobility_weight: MOBILITY_WEIGHT,
        }
    }
}

impl Evaluator for Positional {
    fn evaluate(&self, board: &Board) -> Score {
        let weighted = |side: Disc| -> i32 {
            board
                .bitboard(side)
                .iter()
                .map(|sq| SQUARE_WEIGHTS[sq.index()])
                .sum()
        };
        let mobility = board.legal_moves(Disc::Black).count() as i32
            - board.legal_moves(Disc::White).count() as i32;

        weighted(Disc::Black) - weighted(Disc::White) + self.mobility_weight * mobility
    }
}

/// Scores a finished game from Black's point of view.
///
/// A win is worth `WIN_SCORE` plus the disc margin, a loss the negation, a draw zero.
/// The margin keeps bigger wins preferred over smaller ones.
#[inline]
pub fn terminal_score(board: &Board) -> Score {
    let diff = board.disc_diff();
    diff.signum() * WIN_SCORE + diff
}

/// Built-in evaluators, selectable by name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EvalKind {
    #[default]
    Material,
    Positional,
}

impl EvalKind {
    /// Creates the evaluator this kind names.
    pub fn build(self) -> Box<dyn Evaluator> {
        match self {
            EvalKind::Material => Box::new(Material),
            EvalKind::Positional => Box::new(Positional::default()),
        }
    }
}

impl FromStr for EvalKind {
    type Err = OthelloError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "material" => Ok(EvalKind::Material),
            "positional" => Ok(EvalKind::Positional),
            other => Err(OthelloError::Parse(format!("unknown evaluator '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::Square;

    #[test]
    fn test_material() {
        let board = Board::new();
        assert_eq!(Material.evaluate(&board), 0);
        let next = board.apply_move(Disc::Black, Square::D3).unwrap();
        assert_eq!(Material.evaluate(&next), 3);
    }

    #[test]
    fn test_square_weights_symmetric() {
        for sq in Square::iter() {
            let (r, c) = (sq.row(), sq.col());
            let w = SQUARE_WEIGHTS[sq.index()];
            assert_eq!(w, SQUARE_WEIGHTS[c * 8 + r]);
            assert_eq!(w, SQUARE_WEIGHTS[(7 - r) * 8 + c]);
            assert_eq!(w, SQUARE_WEIGHTS[r * 8 + (7 - c)]);
        }
    }

    #[test]
    fn test_positional_initial_is_balanced() {
        assert_eq!(Positional::default().evaluate(&Board::new()), 0);
    }

    #[test]
    fn test_positional_prefers_corner() {
        let with_corner = Board::from_bitboards(
            Square::A1.bitboard() | Square::D5.bitboard(),
            Square::D4.bitboard(),
            Disc::White,
        )
        .unwrap();
        let with_x_square = Board::from_bitboards(
            Square::B2.bitboard() | Square::D5.bitboard(),
            Square::D4.bitboard(),
            Disc::White,
        )
        .unwrap();
        let eval = Positional::default();
        assert!(eval.evaluate(&with_corner) > eval.evaluate(&with_x_square));
    }

    #[test]
    fn test_terminal_score() {
        let black_wins = Board::from_bitboards(u64::MAX >> 1, 1u64 << 63, Disc::Black).unwrap();
        assert_eq!(terminal_score(&black_wins), WIN_SCORE + 62);

        let white_wins = Board::from_bitboards(1u64, u64::MAX << 1, Disc::Black).unwrap();
        assert_eq!(terminal_score(&white_wins), -WIN_SCORE - 62);

        let draw = Board::from_bitboards(u64::MAX >> 32, u64::MAX << 32, Disc::Black).unwrap();
        assert_eq!(terminal_score(&draw), 0);
    }

    #[test]
    fn test_terminal_dominates_heuristics() {
        // Any position, any evaluator: heuristic magnitude stays below a narrow win.
        let eval = Positional::default();
        let full_white_corners = Board::from_bitboards(
            u64::MAX & !0x8100000000000081,
            0x8100000000000081u64,
            Disc::Black,
        )
        .unwrap();
        assert!(eval.evaluate(&full_white_corners).abs() < WIN_SCORE);
        assert!(terminal_score(&full_white_corners) > WIN_SCORE);
    }

    #[test]
    fn test_eval_kind() {
        assert_eq!("material".parse::<EvalKind>(), Ok(EvalKind::Material));
        assert_eq!("Positional".parse::<EvalKind>(), Ok(EvalKind::Positional));
        assert!("neural".parse::<EvalKind>().is_err());
        let board = Board::new().apply_move(Disc::Black, Square::F5).unwrap();
        assert_eq!(EvalKind::Material.build().evaluate(&board), Material.evaluate(&board));
    }
}
