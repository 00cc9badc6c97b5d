use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::bitboard::Bitboard;

/// Represents a square on an Othello board, ranging from A1 to H8.
///
/// Files (columns) are labeled A-H and ranks (rows) are labeled 1-8. The board is
/// indexed row-major, so `index = row * 8 + col` with both coordinates 0-based:
///
/// ```text
///   A  B  C  D  E  F  G  H
/// 1 00 01 02 03 04 05 06 07
/// 2 08 09 10 11 12 13 14 15
/// 3 16 17 18 19 20 21 22 23
/// 4 24 25 26 27 28 29 30 31
/// 5 32 33 34 35 36 37 38 39
/// 6 40 41 42 43 44 45 46 47
/// 7 48 49 50 51 52 53 54 55
/// 8 56 57 58 59 60 61 62 63
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
#[rustfmt::skip]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

/// Constants for board dimensions
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

impl Square {
    /// Converts the `Square` into a single-bit bitboard.
    ///
    /// For example, A1 returns 0x1, B1 returns 0x2, H8 returns 0x8000000000000000.
    #[inline(always)]
    pub const fn bitboard(self) -> Bitboard {
        Bitboard::new(1 << self as u8)
    }

    /// Converts the `Square` into a `usize` index (0-63).
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Converts a `u32` index into a `Square` without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `index` >= 64.
    #[inline(always)]
    pub(crate) fn from_u32_unchecked(index: u32) -> Square {
        debug_assert!(
            index < TOTAL_SQUARES as u32,
            "Index out of bounds for Square enum. index: {index}"
        );
        // SAFETY: `Square` is `repr(u8)` with 64 contiguous variants starting at 0.
        unsafe { std::mem::transmute(index as u8) }
    }

    /// Safely converts a `usize` index into a `Square`.
    ///
    /// # Returns
    /// `Some(Square)` if the index is in 0..64, `None` otherwise.
    #[inline]
    pub fn from_index(index: usize) -> Option<Square> {
        (index < TOTAL_SQUARES).then(|| Square::from_u32_unchecked(index as u32))
    }

    /// Creates a `Square` from 0-based row and column coordinates.
    ///
    /// # Returns
    /// `Some(Square)` if both coordinates are in 0..8, `None` otherwise.
    #[inline]
    pub fn from_row_col(row: usize, col: usize) -> Option<Square> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square::from_u32_unchecked((row * BOARD_SIZE + col) as u32))
        } else {
            None
        }
    }

    /// Returns the 0-based row (rank 1 is row 0).
    #[inline]
    pub const fn row(self) -> usize {
        self.index() / BOARD_SIZE
    }

    /// Returns the 0-based column (file A is column 0).
    #[inline]
    pub const fn col(self) -> usize {
        self.index() % BOARD_SIZE
    }

    /// Returns an iterator over all 64 squares in row-major order.
    #[inline]
    pub fn iter() -> impl Iterator<Item = Square> {
        (0..TOTAL_SQUARES as u32).map(Square::from_u32_unchecked)
    }
}

/// Error type for square parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareError {
    /// Invalid square string format (must be 2 characters)
    #[error("invalid square format: must be 2 characters (e.g., 'd3')")]
    InvalidFormat,
    /// Invalid file character (must be a-h or A-H)
    #[error("invalid file '{0}': must be a-h or A-H")]
    InvalidFile(char),
    /// Invalid rank character (must be 1-8)
    #[error("invalid rank '{0}': must be 1-8")]
    InvalidRank(char),
}

impl FromStr for Square {
    type Err = SquareError;

    /// Parses algebraic notation such as `"d3"` or `"H8"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(SquareError::InvalidFormat);
        };

        let file = file_char.to_ascii_lowercase();
        if !('a'..='h').contains(&file) {
            return Err(SquareError::InvalidFile(file_char));
        }
        if !('1'..='8').contains(&rank_char) {
            return Err(SquareError::InvalidRank(rank_char));
        }

        let col = (file as u8 - b'a') as usize;
        let row = (rank_char as u8 - b'1') as usize;
        Ok(Square::from_u32_unchecked((row * BOARD_SIZE + col) as u32))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (self.col() as u8 + b'a') as char;
        let rank = (self.row() as u8 + b'1') as char;
        write!(f, "{file}{rank}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_bitboard() {
        assert_eq!(Square::A1.bitboard().bits(), 1);
        assert_eq!(Square::H8.bitboard().bits(), 0x8000000000000000);
    }

    #[test]
    fn test_row_col() {
        assert_eq!(Square::D3.row(), 2);
        assert_eq!(Square::D3.col(), 3);
        assert_eq!(Square::from_row_col(2, 3), Some(Square::D3));
        assert_eq!(Square::from_row_col(5, 4), Some(Square::E6));
        assert_eq!(Square::from_row_col(8, 0), None);
        assert_eq!(Square::from_row_col(0, 8), None);
    }

    #[test]
    fn test_from_index() {
        assert_eq!(Square::from_index(0), Some(Square::A1));
        assert_eq!(Square::from_index(8), Some(Square::A2));
        assert_eq!(Square::from_index(63), Some(Square::H8));
        assert_eq!(Square::from_index(64), None);
    }

    #[test]
    fn test_iter() {
        let squares: Vec<Square> = Square::iter().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::A1);
        assert_eq!(squares[63], Square::H8);
    }

    #[test]
    fn test_square_from_str() {
        assert_eq!("a1".parse::<Square>(), Ok(Square::A1));
        assert_eq!("H8".parse::<Square>(), Ok(Square::H8));
        assert_eq!(" d3 ".parse::<Square>(), Ok(Square::D3));
        assert_eq!("".parse::<Square>(), Err(SquareError::InvalidFormat));
        assert_eq!("abc".parse::<Square>(), Err(SquareError::InvalidFormat));
        assert_eq!("z1".parse::<Square>(), Err(SquareError::InvalidFile('z')));
        assert_eq!("a0".parse::<Square>(), Err(SquareError::InvalidRank('0')));
    }

    #[test]
    fn test_display() {
        assert_eq!(Square::A1.to_string(), "a1");
        assert_eq!(Square::F5.to_string(), "f5");
        for sq in Square::iter() {
            assert_eq!(sq.to_string().parse::<Square>(), Ok(sq));
        }
    }
}
