#![allow(dead_code)]

use othello_core::board::Board;
use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand::rngs::StdRng;

/// Plays `plies` random plays from the start position, passing when forced.
/// Stops early if the game ends.
pub fn random_position(seed: u64, plies: usize) -> Board {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new();
    for _ in 0..plies {
        if board.is_terminal() {
            break;
        }
        let side = board.side_to_move();
        let moves: Vec<_> = board.legal_moves(side).iter().collect();
        board = match moves.choose(&mut rng) {
            Some(&sq) => board.apply_move(side, sq).unwrap(),
            None => board.apply_pass().unwrap(),
        };
    }
    board
}

/// Random mid-game positions where the side to move has a placement.
pub fn searchable_positions(count: usize, plies: usize) -> Vec<Board> {
    (0..)
        .map(|seed| random_position(seed, plies))
        .filter(|b| b.has_legal_moves(b.side_to_move()))
        .take(count)
        .collect()
}
