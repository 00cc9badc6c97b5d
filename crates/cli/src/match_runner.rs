//! Batches of games between two agents, run in parallel.

use anyhow::{Result, bail};
use othello_core::game_state::{GameResult, GameState};
use rayon::prelude::*;

use crate::agent::{AgentKind, create_agent};
use crate::config::EngineParams;
use crate::display;
use crate::game::play_game;

/// Result of a completed game.
#[derive(Clone, Copy, Debug)]
pub struct MatchResult {
    pub result: GameResult,
    /// Disc difference, black minus white.
    pub disc_diff: i32,
}

/// Aggregated outcome of a match.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchStatistics {
    pub black_wins: u32,
    pub white_wins: u32,
    pub draws: u32,
    pub total_disc_diff: i64,
}

impl MatchStatistics {
    pub fn record(&mut self, result: &MatchResult) {
        match result.result {
            GameResult::BlackWin => self.black_wins += 1,
            GameResult::WhiteWin => self.white_wins += 1,
            GameResult::Draw => self.draws += 1,
        }
        self.total_disc_diff += i64::from(result.disc_diff);
    }

    pub fn total_games(&self) -> u32 {
        self.black_wins + self.white_wins + self.draws
    }

    pub fn average_disc_diff(&self) -> f64 {
        match self.total_games() {
            0 => 0.0,
            n => self.total_disc_diff as f64 / f64::from(n),
        }
    }
}

/// Plays `games` games with `black` and `white` agents on a rayon pool.
///
/// Game `i` seeds its random agents from `seed + 2i`, so a match replays
/// exactly given the same seed and deterministic agents.
pub fn run_match(
    black: AgentKind,
    white: AgentKind,
    games: usize,
    params: &EngineParams,
) -> Result<MatchStatistics> {
    if black == AgentKind::Human || white == AgentKind::Human {
        bail!("human agents cannot take part in a match");
    }

    let seed = params.seed();
    log::info!("match: {games} games, seed {seed}");

    let progress_bar = display::create_progress_bar(games as u64);
    let results = (0..games as u64)
        .into_par_iter()
        .map(|i| {
            let game_seed = seed.wrapping_add(2 * i);
            let mut black_agent = create_agent(black, params, game_seed)?;
            let mut white_agent = create_agent(white, params, game_seed.wrapping_add(1))?;
            let game = play_game(
                GameState::new(),
                black_agent.as_mut(),
                white_agent.as_mut(),
                false,
            )?;
            progress_bar.inc(1);
            Ok(MatchResult {
                result: game.result().unwrap_or(GameResult::Draw),
                disc_diff: game.board().disc_diff(),
            })
        })
        .collect::<Result<Vec<MatchResult>>>();
    progress_bar.finish_and_clear();

    let mut statistics = MatchStatistics::default();
    for result in &results? {
        statistics.record(result);
    }
    Ok(statistics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use othello_core::eval::EvalKind;
    use othello_core::move_list::MoveOrdering;

    fn params(seed: u64) -> EngineParams {
        EngineParams {
            depth: 1,
            time_ms: 10,
            max_depth: None,
            eval: EvalKind::Material,
            ordering: MoveOrdering::Generation,
            seed: Some(seed),
        }
    }

    #[test]
    fn test_statistics() {
        let mut stats = MatchStatistics::default();
        stats.record(&MatchResult {
            result: GameResult::BlackWin,
            disc_diff: 10,
        });
        stats.record(&MatchResult {
            result: GameResult::Draw,
            disc_diff: 0,
        });
        stats.record(&MatchResult {
            result: GameResult::WhiteWin,
            disc_diff: -4,
        });
        assert_eq!(stats.total_games(), 3);
        assert_eq!(stats.average_disc_diff(), 2.0);
    }

    #[test]
    fn test_match_is_reproducible() {
        let a = run_match(AgentKind::Random, AgentKind::Alphabeta, 4, &params(9)).unwrap();
        let b = run_match(AgentKind::Random, AgentKind::Alphabeta, 4, &params(9)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.total_games(), 4);
    }

    #[test]
    fn test_match_rejects_human() {
        assert!(run_match(AgentKind::Human, AgentKind::Random, 1, &params(0)).is_err());
    }
}
