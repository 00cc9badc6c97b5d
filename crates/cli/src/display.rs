//! Terminal output: boards, search reports and match summaries.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use othello_core::disc::Disc;
use othello_core::game_state::{GameResult, GameState};
use othello_core::search::SearchResult;
use othello_core::square::Square;

use crate::match_runner::MatchStatistics;

/// Prints a colored board with legal moves, the last move and disc counts.
pub fn print_board(game: &GameState) {
    let board = game.board();
    let side_to_move = game.side_to_move();
    let last_move = game.last_move();
    let (black_count, white_count) = game.score();

    println!("      a   b   c   d   e   f   g   h");
    println!("    ┌───┬───┬───┬───┬───┬───┬───┬───┐");

    for row in 0..8 {
        print!("  {} │", row + 1);

        for col in 0..8 {
            let Some(sq) = Square::from_row_col(row, col) else {
                continue;
            };
            let is_last_move = Some(sq) == last_move;
            let symbol = match board.disc_at(sq) {
                Disc::Black if is_last_move => " X ".on_bright_black().bright_green(),
                Disc::White if is_last_move => " O ".on_bright_black().bright_yellow(),
                Disc::Black => " X ".bright_green(),
                Disc::White => " O ".bright_yellow(),
                Disc::Empty if board.is_legal_move(side_to_move, sq) => " · ".bright_cyan(),
                Disc::Empty => "   ".normal(),
            };
            print!("{symbol}│");
        }

        match row {
            2 if !game.is_game_over() => {
                let player_info = match side_to_move {
                    Disc::Black => "Black's turn (X)".bright_green(),
                    _ => "White's turn (O)".bright_yellow(),
                };
                println!("   {player_info}");
            }
            3 => println!("   Black: {}", format!("{black_count:2}").bright_green()),
            4 => println!("   White: {}", format!("{white_count:2}").bright_yellow()),
            6 => match game.result() {
                Some(result) => println!("   {}", result_text(result)),
                None => println!(),
            },
            _ => println!(),
        }

        if row < 7 {
            println!("    ├───┼───┼───┼───┼───┼───┼───┼───┤");
        }
    }

    println!("    └───┴───┴───┴───┴───┴───┴───┴───┘");
}

fn result_text(result: GameResult) -> colored::ColoredString {
    match result {
        GameResult::BlackWin => "Black wins!".bright_green(),
        GameResult::WhiteWin => "White wins!".bright_yellow(),
        GameResult::Draw => "Draw".bright_cyan(),
    }
}

/// Announces the end of a game with the final disc counts.
pub fn print_game_over(game: &GameState) {
    let (black, white) = game.score();
    let Some(result) = game.result() else {
        return;
    };
    println!("{}", "*** Game Over ***".bright_red());
    println!("{}  Black {black} - {white} White", result_text(result));
}

pub fn print_search_result(result: &SearchResult) {
    println!("{:<10}{}", "Move:", result.best_move.to_string().bright_green());
    println!("{:<10}{}", "Score:", result.score);
    println!("{:<10}{}", "Depth:", result.depth);
    println!("{:<10}{}", "Nodes:", result.n_nodes);
    println!("{:<10}{:.3}s", "Time:", result.elapsed.as_secs_f64());
    println!("{:<10}{}", "NPS:", result.nps());
}

/// Create a styled progress bar for match tracking.
pub fn create_progress_bar(total_games: u64) -> ProgressBar {
    let progress_bar = ProgressBar::new(total_games);
    if let Ok(style) =
        ProgressStyle::default_bar().template("{spinner:.cyan} [{bar:40.cyan}] {pos}/{len} ({percent}%)")
    {
        progress_bar.set_style(style.progress_chars("█▉▊▋▌▍▎▏ "));
    }
    progress_bar
}

pub fn print_match_summary(stats: &MatchStatistics, black_name: &str, white_name: &str) {
    let total = stats.total_games().max(1) as f64;
    let pct = |n: u32| 100.0 * f64::from(n) / total;

    println!("{}", "Match results".bold());
    println!(
        "  {:<20} {:>5} wins ({:5.1}%)",
        format!("{black_name} (Black)").bright_green(),
        stats.black_wins,
        pct(stats.black_wins)
    );
    println!(
        "  {:<20} {:>5} wins ({:5.1}%)",
        format!("{white_name} (White)").bright_yellow(),
        stats.white_wins,
        pct(stats.white_wins)
    );
    println!(
        "  {:<20} {:>5}      ({:5.1}%)",
        "Draws".bright_cyan(),
        stats.draws,
        pct(stats.draws)
    );
    println!("  Average disc difference (Black - White): {:+.2}", stats.average_disc_diff());
}
