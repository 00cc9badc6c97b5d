//! Players that pick a placement for the side to move.
//!
//! Agents are only asked for a move when one exists; passing is handled by
//! the game loop.

use anyhow::{Result, bail};
use clap::ValueEnum;
use othello_core::eval::Evaluator;
use othello_core::game_state::GameState;
use othello_core::search::{Search, SearchConfig, Strategy};
use othello_core::square::Square;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::config::EngineParams;

/// Agent kinds selectable on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentKind {
    Human,
    Random,
    Minimax,
    Alphabeta,
    Iterative,
}

impl AgentKind {
    fn strategy(self) -> Option<Strategy> {
        match self {
            AgentKind::Minimax => Some(Strategy::Minimax),
            AgentKind::Alphabeta => Some(Strategy::AlphaBeta),
            AgentKind::Iterative => Some(Strategy::IterativeDeepening),
            AgentKind::Human | AgentKind::Random => None,
        }
    }
}

pub trait Agent {
    fn name(&self) -> String;

    /// Picks a legal placement for the side to move in `game`.
    fn choose_move(&mut self, game: &GameState) -> Result<Square>;
}

/// Creates an agent of `kind`. `seed` only affects random agents.
pub fn create_agent(kind: AgentKind, params: &EngineParams, seed: u64) -> Result<Box<dyn Agent>> {
    let agent: Box<dyn Agent> = match (kind, kind.strategy()) {
        (AgentKind::Human, _) => Box::new(HumanAgent::new()?),
        (_, Some(strategy)) => {
            let config = params.search_config(strategy);
            config.validate()?;
            Box::new(SearchAgent::new(params.eval.build(), config))
        }
        (_, None) => Box::new(RandomAgent::new(seed)),
    };
    Ok(agent)
}

/// Reads moves from the terminal.
pub struct HumanAgent {
    editor: DefaultEditor,
}

impl HumanAgent {
    pub fn new() -> Result<Self> {
        Ok(HumanAgent {
            editor: DefaultEditor::new()?,
        })
    }
}

impl Agent for HumanAgent {
    fn name(&self) -> String {
        "human".to_string()
    }

    fn choose_move(&mut self, game: &GameState) -> Result<Square> {
        let side = game.side_to_move();
        let prompt = format!("{} to move> ", side.name());
        loop {
            let line = match self.editor.readline(&prompt) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => bail!("game aborted"),
                Err(err) => return Err(err.into()),
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let _ = self.editor.add_history_entry(line);

            if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
                bail!("game aborted");
            }
            match line.parse::<Square>() {
                Ok(sq) if game.board().is_legal_move(side, sq) => return Ok(sq),
                Ok(sq) => println!("{sq} is not a legal move."),
                Err(err) => println!("{err}"),
            }
        }
    }
}

/// Plays a uniformly random legal move.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> String {
        "random".to_string()
    }

    fn choose_move(&mut self, game: &GameState) -> Result<Square> {
        let side = game.side_to_move();
        match game.board().legal_moves(side).iter().choose(&mut self.rng) {
            Some(sq) => Ok(sq),
            None => bail!("{} has no legal move", side.name()),
        }
    }
}

/// Runs the search engine with a fixed configuration.
pub struct SearchAgent<E: Evaluator> {
    search: Search<E>,
    config: SearchConfig,
}

impl<E: Evaluator> SearchAgent<E> {
    pub fn new(eval: E, config: SearchConfig) -> Self {
        SearchAgent {
            search: Search::new(eval),
            config,
        }
    }
}

impl<E: Evaluator> Agent for SearchAgent<E> {
    fn name(&self) -> String {
        match self.config.strategy {
            Strategy::IterativeDeepening => format!("iterative({}ms)", self.config.time_limit_ms),
            strategy => format!("{strategy}({})", self.config.depth),
        }
    }

    fn choose_move(&mut self, game: &GameState) -> Result<Square> {
        let side = game.side_to_move();
        let result = self.search.run(game.board(), side, &self.config)?;
        log::debug!(
            "{} {}: {} score {} depth {} nodes {} ({} nps)",
            self.name(),
            side.name(),
            result.best_move,
            result.score,
            result.depth,
            result.n_nodes,
            result.nps()
        );
        Ok(result.best_move)
    }
}
