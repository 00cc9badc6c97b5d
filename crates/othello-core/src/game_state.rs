//! Game state management for Othello.
//!
//! `GameState` wraps a [`Board`] with the sequence of plays that led to it.
//! Passing is never automatic: when the side to move has no placement the
//! caller must play [`GameState::make_pass`] explicitly.

use std::fmt;

use crate::board::Board;
use crate::disc::Disc;
use crate::error::Result;
use crate::square::Square;
use crate::transcript::{Play, Transcript};

/// Outcome of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    BlackWin,
    WhiteWin,
    Draw,
}

impl GameResult {
    /// Outcome by disc count on `board`.
    pub fn from_board(board: &Board) -> GameResult {
        match board.winner() {
            Some(Disc::Black) => GameResult::BlackWin,
            Some(_) => GameResult::WhiteWin,
            None => GameResult::Draw,
        }
    }

    pub fn winner(self) -> Option<Disc> {
        match self {
            GameResult::BlackWin => Some(Disc::Black),
            GameResult::WhiteWin => Some(Disc::White),
            GameResult::Draw => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::BlackWin => write!(f, "Black wins"),
            GameResult::WhiteWin => write!(f, "White wins"),
            GameResult::Draw => write!(f, "Draw"),
        }
    }
}

/// Represents the state of an Othello game.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Position the game started from.
    initial: Board,
    /// The current board position, including the side to move.
    board: Board,
    /// Each play with the board it was played on.
    history: Vec<(Play, Board)>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a new game in the standard starting position, Black to move.
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Creates a game starting from an arbitrary position.
    pub fn from_board(board: Board) -> Self {
        Self {
            initial: board,
            board,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Disc {
        self.board.side_to_move()
    }

    /// True when the side to move has no placement but the game is not over.
    pub fn must_pass(&self) -> bool {
        let side = self.side_to_move();
        !self.board.has_legal_moves(side) && self.board.has_legal_moves(side.opposite())
    }

    /// Places a disc for the side to move.
    ///
    /// # Errors
    ///
    /// Returns `IllegalMove` if `sq` is not a legal placement; the state is
    /// left unchanged.
    pub fn make_move(&mut self, sq: Square) -> Result<()> {
        let next = self.board.apply_move(self.side_to_move(), sq)?;
        self.history.push((Play::Place(sq), self.board));
        self.board = next;
        Ok(())
    }

    /// Passes the turn.
    ///
    /// # Errors
    ///
    /// Returns `IllegalPass` if the side to move has a placement or the game
    /// is over.
    pub fn make_pass(&mut self) -> Result<()> {
        let next = self.board.apply_pass()?;
        self.history.push((Play::Pass, self.board));
        self.board = next;
        Ok(())
    }

    /// Applies either kind of play.
    ///
    /// # Errors
    ///
    /// See [`GameState::make_move`] and [`GameState::make_pass`].
    pub fn play(&mut self, play: Play) -> Result<()> {
        match play {
            Play::Place(sq) => self.make_move(sq),
            Play::Pass => self.make_pass(),
        }
    }

    /// Checks if the game has ended (neither side can place a disc).
    pub fn is_game_over(&self) -> bool {
        self.board.is_terminal()
    }

    /// Returns `(black_count, white_count)`.
    pub fn score(&self) -> (u32, u32) {
        (
            self.board.disc_count(Disc::Black),
            self.board.disc_count(Disc::White),
        )
    }

    /// Final outcome, or `None` while the game is still running.
    pub fn result(&self) -> Option<GameResult> {
        self.is_game_over().then(|| GameResult::from_board(&self.board))
    }

    /// Returns the last placement, or `None` after a pass or before any play.
    pub fn last_move(&self) -> Option<Square> {
        match self.history.last() {
            Some((Play::Place(sq), _)) => Some(*sq),
            _ => None,
        }
    }

    /// Number of plays made so far, passes included.
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    pub fn plays(&self) -> impl Iterator<Item = Play> + '_ {
        self.history.iter().map(|(play, _)| *play)
    }

    /// Undoes the last play. Returns `false` if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some((_, prev)) => {
                self.board = prev;
                true
            }
            None => false,
        }
    }

    /// Records the game so far.
    pub fn transcript(&self) -> Transcript {
        let start = (self.initial != Board::new()).then_some(self.initial);
        Transcript::new(start, self.plays().collect())
    }
}
