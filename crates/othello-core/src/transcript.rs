//! Plain-text game records.
//!
//! A transcript is a whitespace separated list of plays, `f5 d6 c3 ... pass`,
//! optionally preceded by a `position:` line when the game did not start
//! from the standard position:
//!
//! ```text
//! position: ---------------------------OX------XO--------------------------- X
//! f5 d6 c3
//! ```

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::error::{OthelloError, Result};
use crate::game_state::GameState;
use crate::square::Square;

const POSITION_TAG: &str = "position:";

/// A single turn: a placement or a pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Play {
    Place(Square),
    Pass,
}

impl fmt::Display for Play {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Play::Place(sq) => write!(f, "{sq}"),
            Play::Pass => f.write_str("pass"),
        }
    }
}

impl FromStr for Play {
    type Err = OthelloError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("pass") || s == "--" {
            return Ok(Play::Pass);
        }
        Ok(Play::Place(s.parse::<Square>()?))
    }
}

/// Start position plus the plays made from it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcript {
    start: Option<Board>,
    plays: Vec<Play>,
}

impl Transcript {
    /// `start` is `None` for the standard starting position.
    pub fn new(start: Option<Board>, plays: Vec<Play>) -> Self {
        Transcript { start, plays }
    }

    pub fn start(&self) -> Option<&Board> {
        self.start.as_ref()
    }

    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    /// Replays every play from the start position.
    ///
    /// # Errors
    ///
    /// Returns the first `IllegalMove` or `IllegalPass` encountered.
    pub fn replay(&self) -> Result<GameState> {
        let mut game = GameState::from_board(self.start.unwrap_or_default());
        for &play in &self.plays {
            game.play(play)?;
        }
        Ok(game)
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(board) = &self.start {
            writeln!(f, "{POSITION_TAG} {}", board.to_position_string())?;
        }
        for (i, play) in self.plays.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{play}")?;
        }
        Ok(())
    }
}

impl FromStr for Transcript {
    type Err = OthelloError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim_start();
        let (start, body) = match s.strip_prefix(POSITION_TAG) {
            Some(rest) => {
                let (line, body) = rest.split_once('\n').unwrap_or((rest, ""));
                (Some(line.parse::<Board>()?), body)
            }
            None => (None, s),
        };

        let plays = body
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Play>>>()?;
        Ok(Transcript { start, plays })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disc::Disc;

    #[test]
    fn test_play_parse() {
        assert_eq!("d3".parse::<Play>().unwrap(), Play::Place(Square::D3));
        assert_eq!("D3".parse::<Play>().unwrap(), Play::Place(Square::D3));
        assert_eq!("PASS".parse::<Play>().unwrap(), Play::Pass);
        assert_eq!("--".parse::<Play>().unwrap(), Play::Pass);
        assert!("z9".parse::<Play>().is_err());
    }

    #[test]
    fn test_parse_and_replay() {
        let transcript: Transcript = "f5 d6\nc3 d3".parse().unwrap();
        assert_eq!(transcript.plays().len(), 4);
        let game = transcript.replay().unwrap();
        assert_eq!(game.ply(), 4);
        assert_eq!(game.side_to_move(), Disc::Black);
        assert_eq!(game.last_move(), Some(Square::D3));
    }

    #[test]
    fn test_replay_reports_illegal_play() {
        let transcript: Transcript = "f5 f5".parse().unwrap();
        assert_eq!(
            transcript.replay().unwrap_err(),
            OthelloError::IllegalMove {
                side: Disc::White,
                sq: Square::F5
            }
        );
    }

    #[test]
    fn test_position_header_round_trip() {
        let board = Board::from_string(
            "XXXXXXXX\
             XXXXXXXX\
             XXXXXXXX\
             XXXXXXXX\
             XXXXXXXX\
             XXXXXXXX\
             XXXXXXOO\
             XXXXXX--",
            Disc::White,
        )
        .unwrap();
        let transcript = Transcript::new(Some(board), vec![Play::Pass, Play::Place(Square::G8)]);
        let text = transcript.to_string();
        assert!(text.starts_with("position: "));
        let parsed: Transcript = text.parse().unwrap();
        assert_eq!(parsed, transcript);

        let game = parsed.replay().unwrap();
        assert!(!game.is_game_over());
        assert_eq!(game.side_to_move(), Disc::White);
    }

    #[test]
    fn test_empty_transcript() {
        let transcript: Transcript = "".parse().unwrap();
        assert!(transcript.plays().is_empty());
        assert_eq!(transcript.replay().unwrap().board(), &Board::new());
    }
}
