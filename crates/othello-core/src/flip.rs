//! Disc flip calculation for move execution.

use crate::bitboard::Bitboard;
use crate::square::Square;

const NOT_FILE_A: u64 = 0xFEFEFEFEFEFEFEFE;
const NOT_FILE_H: u64 = 0x7F7F7F7F7F7F7F7F;

/// The eight ray directions as (shift, landing mask). A positive shift moves towards H8.
/// The mask drops bits that wrapped around a board edge.
const DIRECTIONS: [(i32, u64); 8] = [
    (1, NOT_FILE_A),
    (-1, NOT_FILE_H),
    (8, u64::MAX),
    (-8, u64::MAX),
    (9, NOT_FILE_A),
    (7, NOT_FILE_H),
    (-7, NOT_FILE_A),
    (-9, NOT_FILE_H),
];

#[inline(always)]
fn shift(bits: u64, dir: i32) -> u64 {
    if dir > 0 {
        bits << dir
    } else {
        bits >> -dir
    }
}

/// Calculates which opponent discs would be flipped by placing a disc at the given square.
///
/// A run is captured when it is a contiguous line of opponent discs terminated by one of
/// the player's discs. Rays are scanned independently, so the result is the union of every
/// captured run.
///
/// # Arguments
///
/// * `sq` - The square where the disc is being placed
/// * `p` - Bitboard representing the current player's discs
/// * `o` - Bitboard representing the opponent's discs
///
/// # Returns
///
/// A bitboard representing all opponent discs that would be flipped by this move.
/// Returns an empty bitboard if no discs would be flipped (invalid move).
#[inline]
pub fn flip(sq: Square, p: Bitboard, o: Bitboard) -> Bitboard {
    let (p, o) = (p.bits(), o.bits());
    let origin = sq.bitboard().bits();
    let mut flipped = 0;

    for (dir, mask) in DIRECTIONS {
        let mut run = 0;
        let mut cursor = shift(origin, dir) & mask;
        while cursor & o != 0 {
            run |= cursor;
            cursor = shift(cursor, dir) & mask;
        }
        if cursor & p != 0 {
            flipped |= run;
        }
    }

    Bitboard::new(flipped)
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::disc::Disc;

    use super::*;

    #[test]
    fn test_flip() {
        let p = Square::D5.bitboard() | Square::E4.bitboard();
        let o = Square::D4.bitboard() | Square::E5.bitboard();
        assert_eq!(flip(Square::C4, p, o), Square::D4.bitboard());
        assert_eq!(flip(Square::D3, p, o), Square::D4.bitboard());
        assert_eq!(flip(Square::E6, p, o), Square::E5.bitboard());
        assert_eq!(flip(Square::F5, p, o), Square::E5.bitboard());
        assert!(flip(Square::A1, p, o).is_empty());
    }

    #[test]
    fn test_flip_long_diagonal() {
        let board = Board::from_string(
            "XXXXXXXOXOOXXXXOXOXXXOXOXOOXOXXOXOXOOOXOXOOOOOXOXOOOXXXO-X-OXOOO",
            Disc::Black,
        )
        .unwrap();
        let flipped = flip(Square::A8, board.bitboard(Disc::Black), board.bitboard(Disc::White));
        let expected = Square::B7.bitboard()
            | Square::C6.bitboard()
            | Square::D5.bitboard()
            | Square::E4.bitboard()
            | Square::F3.bitboard();
        assert_eq!(flipped, expected);
    }

    #[test]
    fn test_flip_requires_closing_disc() {
        // A run of white discs running into the edge is not captured.
        let p = Square::A1.bitboard();
        let o = Square::C1.bitboard() | Square::D1.bitboard() | Square::E1.bitboard();
        assert!(flip(Square::B1, p, o).is_empty());
        assert!(flip(Square::F1, p, o).is_empty());

        let flipped = flip(Square::F1, Square::B1.bitboard(), o);
        assert_eq!(flipped, o);
    }

    #[test]
    fn test_flip_no_wrap_across_edge() {
        // H1 and A2 are adjacent in bit order but not on the board.
        let p = Square::B2.bitboard();
        let o = Square::A2.bitboard();
        assert!(flip(Square::H1, p, o).is_empty());
    }

    #[test]
    fn test_flip_multiple_directions() {
        let board = Board::from_string(
            "--------\
             --------\
             --X-X-X-\
             ---OOO--\
             --XO-OX-\
             ---OOO--\
             --X-X-X-\
             --------",
            Disc::Black,
        )
        .unwrap();
        let flipped = flip(Square::E5, board.bitboard(Disc::Black), board.bitboard(Disc::White));
        assert_eq!(flipped, board.bitboard(Disc::White));
        assert_eq!(flipped.count(), 8);
    }
}
