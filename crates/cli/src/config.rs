//! Engine settings shared by every subcommand.

use clap::Args;
use othello_core::eval::EvalKind;
use othello_core::move_list::MoveOrdering;
use othello_core::search::{SearchConfig, Strategy};
use othello_core::types::Depth;

#[derive(Args, Debug, Clone)]
pub struct EngineParams {
    /// Search depth for the minimax and alphabeta agents
    #[arg(short, long, default_value = "3")]
    pub depth: Depth,

    /// Time limit per move for the iterative agent
    #[arg(long = "time-ms", default_value = "1000")]
    pub time_ms: u64,

    /// Depth cap for the iterative agent
    #[arg(long)]
    pub max_depth: Option<Depth>,

    /// Leaf evaluator: material or positional
    #[arg(long, default_value = "material")]
    pub eval: EvalKind,

    /// Move ordering: generation or heuristic
    #[arg(long, default_value = "generation")]
    pub ordering: MoveOrdering,

    /// Seed for random agents; drawn at random when omitted
    #[arg(long)]
    pub seed: Option<u64>,
}

impl EngineParams {
    /// Search configuration for `strategy` built from these settings.
    pub fn search_config(&self, strategy: Strategy) -> SearchConfig {
        let config = SearchConfig::default()
            .with_strategy(strategy)
            .with_depth(self.depth)
            .with_time_limit_ms(self.time_ms)
            .with_ordering(self.ordering);
        match self.max_depth {
            Some(max_depth) => config.with_max_depth(max_depth),
            None => config,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
