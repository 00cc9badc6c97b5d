//! Othello board representation using bitboards.

use std::fmt;
use std::str::FromStr;

use crate::bitboard::Bitboard;
use crate::constants::BOARD_SQUARES;
use crate::disc::Disc;
use crate::error::{OthelloError, Result};
use crate::flip;
use crate::square::Square;

/// An Othello position: disc ownership for both colors plus the side to move.
///
/// `Board` is a small `Copy` value. Every move produces a new board, so search
/// branches never share mutable state.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
    side_to_move: Disc,
}

impl Default for Board {
    /// Creates a board with the standard starting position.
    ///
    /// The initial position has:
    /// - Black discs on D5 and E4
    /// - White discs on D4 and E5
    /// - Black to move
    fn default() -> Self {
        Board {
            black: Square::D5.bitboard() | Square::E4.bitboard(),
            white: Square::D4.bitboard() | Square::E5.bitboard(),
            side_to_move: Disc::Black,
        }
    }
}

impl Board {
    /// Creates a new `Board` with the standard starting position.
    pub fn new() -> Board {
        Default::default()
    }

    /// Factory for the canonical starting position. Same as [`Board::new`].
    pub fn initial_standard() -> Board {
        Board::new()
    }

    /// Creates a `Board` from raw bitboards.
    ///
    /// # Errors
    ///
    /// Returns `OthelloError::Parse` if both colors claim a square or
    /// `side_to_move` is `Disc::Empty`.
    pub fn from_bitboards(
        black: impl Into<Bitboard>,
        white: impl Into<Bitboard>,
        side_to_move: Disc,
    ) -> Result<Board> {
        let (black, white) = (black.into(), white.into());
        if !(black & white).is_empty() {
            return Err(OthelloError::Parse(
                "a square cannot hold both a black and a white disc".to_string(),
            ));
        }
        if !side_to_move.is_side() {
            return Err(OthelloError::Parse(
                "side to move must be Black or White".to_string(),
            ));
        }
        Ok(Board {
            black,
            white,
            side_to_move,
        })
    }

    /// Creates a `Board` from a string of 64 cells, A1 to H8.
    ///
    /// Cells are `X` (Black), `O` (White) and `-` (empty); whitespace is ignored,
    /// so the grid may be written one row per line.
    ///
    /// # Errors
    ///
    /// Returns `OthelloError::Parse` on an unknown character or a wrong cell count.
    pub fn from_string(board_string: &str, side_to_move: Disc) -> Result<Board> {
        let mut black = Bitboard::default();
        let mut white = Bitboard::default();
        let mut n_cells = 0;

        for c in board_string.chars().filter(|c| !c.is_whitespace()) {
            let disc = Disc::from_char(c)
                .ok_or_else(|| OthelloError::Parse(format!("unknown cell character '{c}'")))?;
            let sq = Square::from_index(n_cells).ok_or_else(|| {
                OthelloError::Parse(format!("more than {BOARD_SQUARES} cells"))
            })?;
            match disc {
                Disc::Black => black = black.set(sq),
                Disc::White => white = white.set(sq),
                Disc::Empty => {}
            }
            n_cells += 1;
        }

        if n_cells != BOARD_SQUARES {
            return Err(OthelloError::Parse(format!(
                "expected {BOARD_SQUARES} cells, found {n_cells}"
            )));
        }
        Board::from_bitboards(black, white, side_to_move)
    }

    /// Returns the side whose turn it is.
    #[inline(always)]
    pub fn side_to_move(&self) -> Disc {
        self.side_to_move
    }

    /// Returns a copy of this board with a different side to move.
    #[inline]
    pub fn with_side_to_move(&self, side: Disc) -> Board {
        debug_assert!(side.is_side());
        Board {
            side_to_move: side,
            ..*self
        }
    }

    /// Returns the discs owned by `side`. `Disc::Empty` yields the empty squares.
    #[inline(always)]
    pub fn bitboard(&self, side: Disc) -> Bitboard {
        match side {
            Disc::Black => self.black,
            Disc::White => self.white,
            Disc::Empty => self.get_empty(),
        }
    }

    /// Gets the disc at a specific square.
    #[inline]
    pub fn disc_at(&self, sq: Square) -> Disc {
        if self.black.contains(sq) {
            Disc::Black
        } else if self.white.contains(sq) {
            Disc::White
        } else {
            Disc::Empty
        }
    }

    /// Gets the empty squares.
    #[inline(always)]
    pub fn get_empty(&self) -> Bitboard {
        !(self.black | self.white)
    }

    /// Returns the number of discs `side` has on the board.
    #[inline(always)]
    pub fn disc_count(&self, side: Disc) -> u32 {
        self.bitboard(side).count()
    }

    /// Returns the number of empty squares on the board.
    #[inline(always)]
    pub fn empty_count(&self) -> u32 {
        self.get_empty().count()
    }

    /// Black discs minus White discs.
    #[inline(always)]
    pub fn disc_diff(&self) -> i32 {
        self.black.count() as i32 - self.white.count() as i32
    }

    /// Returns a bitboard of the legal placements for `side`.
    #[inline(always)]
    pub fn legal_moves(&self, side: Disc) -> Bitboard {
        if !side.is_side() {
            return Bitboard::default();
        }
        self.bitboard(side).get_moves(self.bitboard(side.opposite()))
    }

    /// Checks if `side` has at least one legal placement.
    #[inline(always)]
    pub fn has_legal_moves(&self, side: Disc) -> bool {
        !self.legal_moves(side).is_empty()
    }

    /// Checks if a placement on `sq` is legal for `side`.
    ///
    /// True iff the square is empty and the placement flips at least one
    /// opposing line in one of the eight directions.
    #[inline]
    pub fn is_legal_move(&self, side: Disc, sq: Square) -> bool {
        !self.flips(side, sq).is_empty()
    }

    /// Returns the discs that a placement of `side` on `sq` would flip.
    ///
    /// Empty when the square is occupied or the placement captures nothing.
    #[inline]
    pub fn flips(&self, side: Disc, sq: Square) -> Bitboard {
        if !side.is_side() || !self.get_empty().contains(sq) {
            return Bitboard::default();
        }
        flip::flip(sq, self.bitboard(side), self.bitboard(side.opposite()))
    }

    /// Places a disc of `side` on `sq`, flips every captured run and passes the turn.
    ///
    /// # Errors
    ///
    /// Returns `OthelloError::IllegalMove` if the move is not legal. `self` is
    /// never modified.
    pub fn apply_move(&self, side: Disc, sq: Square) -> Result<Board> {
        let flipped = self.flips(side, sq);
        if flipped.is_empty() {
            return Err(OthelloError::IllegalMove { side, sq });
        }
        Ok(self.make_move_with_flipped(side, sq, flipped))
    }

    /// Makes a move for `side`, given the already calculated flipped discs.
    ///
    /// No legality check is performed; `flipped` must come from [`Board::flips`]
    /// or the move generator.
    #[inline(always)]
    pub fn make_move_with_flipped(&self, side: Disc, sq: Square, flipped: Bitboard) -> Board {
        debug_assert!(!flipped.is_empty());
        let (black, white) = match side {
            Disc::Black => (self.black.apply_move(flipped, sq), self.white.apply_flip(flipped)),
            _ => (self.black.apply_flip(flipped), self.white.apply_move(flipped, sq)),
        };
        Board {
            black,
            white,
            side_to_move: side.opposite(),
        }
    }

    /// Hands the turn to the opponent without placing a disc.
    #[inline(always)]
    pub fn switch_side(&self) -> Board {
        Board {
            side_to_move: self.side_to_move.opposite(),
            ..*self
        }
    }

    /// Performs a forced pass for the side to move.
    ///
    /// # Errors
    ///
    /// Returns `OthelloError::IllegalPass` unless the side to move has no
    /// placement while the opponent has one.
    pub fn apply_pass(&self) -> Result<Board> {
        let side = self.side_to_move;
        if self.has_legal_moves(side) || !self.has_legal_moves(side.opposite()) {
            return Err(OthelloError::IllegalPass(side));
        }
        Ok(self.switch_side())
    }

    /// Checks if the game is over (neither side can make a move).
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !self.has_legal_moves(Disc::Black) && !self.has_legal_moves(Disc::White)
    }

    /// Side with more discs, or `None` on equal counts.
    ///
    /// Only meaningful once [`Board::is_terminal`] holds.
    pub fn winner(&self) -> Option<Disc> {
        match self.disc_diff() {
            d if d > 0 => Some(Disc::Black),
            d if d < 0 => Some(Disc::White),
            _ => None,
        }
    }

    /// Serializes the board as 64 cells followed by a space and the side to move.
    ///
    /// The output parses back with [`str::parse`] into an identical `Board`.
    pub fn to_position_string(&self) -> String {
        let mut s = String::with_capacity(BOARD_SQUARES + 2);
        s.extend(Square::iter().map(|sq| self.disc_at(sq).to_char()));
        s.push(' ');
        s.push(self.side_to_move.to_char());
        s
    }

    /// Converts the board to an 8x8 grid with newlines between rows.
    pub fn to_string_as_board(&self) -> String {
        let mut s = String::with_capacity(BOARD_SQUARES + 8);
        for (i, sq) in Square::iter().enumerate() {
            if i > 0 && i % 8 == 0 {
                s.push('\n');
            }
            s.push(self.disc_at(sq).to_char());
        }
        s
    }
}

impl FromStr for Board {
    type Err = OthelloError;

    /// Parses the format produced by [`Board::to_position_string`].
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (cells, side) = s
            .rsplit_once(char::is_whitespace)
            .ok_or_else(|| OthelloError::Parse("missing side to move".to_string()))?;
        let mut side_chars = side.chars();
        let side = match (side_chars.next().and_then(Disc::from_char), side_chars.next()) {
            (Some(disc), None) if disc.is_side() => disc,
            _ => {
                return Err(OthelloError::Parse(format!("invalid side to move '{side}'")));
            }
        };
        Board::from_string(cells, side)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_as_board())
    }
}
