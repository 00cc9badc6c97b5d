pub mod bitboard;
pub mod board;
pub mod constants;
pub mod disc;
pub mod error;
pub mod eval;
mod flip;
pub mod game_state;
pub mod move_list;
pub mod perft;
pub mod search;
pub mod square;
pub mod transcript;
pub mod types;

pub use board::Board;
pub use disc::Disc;
pub use error::{OthelloError, Result};
pub use search::{Search, choose_move};
pub use square::Square;
