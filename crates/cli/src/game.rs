//! Game loop between two agents.

use anyhow::{Context, Result};
use othello_core::disc::Disc;
use othello_core::game_state::GameState;

use crate::agent::Agent;
use crate::display;

/// Plays `game` to the end. Forced passes are made on the agents' behalf.
///
/// With `verbose` set the board is printed after every ply.
pub fn play_game(
    mut game: GameState,
    black: &mut dyn Agent,
    white: &mut dyn Agent,
    verbose: bool,
) -> Result<GameState> {
    loop {
        if verbose {
            display::print_board(&game);
            println!();
        }
        if game.is_game_over() {
            break;
        }

        let side = game.side_to_move();
        if game.must_pass() {
            if verbose {
                println!("{} has no legal move and passes.\n", side.name());
            }
            game.make_pass()?;
            continue;
        }

        let agent: &mut dyn Agent = match side {
            Disc::Black => &mut *black,
            _ => &mut *white,
        };
        let sq = agent.choose_move(&game)?;
        game.make_move(sq)
            .with_context(|| format!("{} played an illegal move", agent.name()))?;
        if verbose {
            println!("{} ({}) plays {sq}\n", side.name(), agent.name());
        }
    }

    if verbose {
        display::print_game_over(&game);
    }
    Ok(game)
}
