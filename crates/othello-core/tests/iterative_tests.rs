mod common;

use std::time::Duration;

use othello_core::board::Board;
use othello_core::disc::Disc;
use othello_core::eval::Positional;
use othello_core::search::{Search, SearchConfig, Strategy};
use othello_core::choose_move;

use common::searchable_positions;

#[test]
fn test_converges_to_alpha_beta_at_reached_depth() {
    let search = Search::new(Positional::default());
    for board in searchable_positions(6, 20) {
        let side = board.side_to_move();
        let config = SearchConfig::iterative(600_000).with_max_depth(4);
        let id = search.run(&board, side, &config).unwrap();
        assert_eq!(id.strategy, Strategy::IterativeDeepening);
        assert!(id.depth >= 1 && id.depth <= 4);

        let ab = search
            .run(&board, side, &SearchConfig::alpha_beta(id.depth))
            .unwrap();
        assert_eq!(id.best_move, ab.best_move);
        assert_eq!(id.score, ab.score);
    }
}

#[test]
fn test_tiny_time_limit_returns_legal_move() {
    for board in searchable_positions(5, 12) {
        let side = board.side_to_move();
        let result = choose_move(&board, side, &SearchConfig::iterative(1)).unwrap();
        assert!(board.is_legal_move(side, result.best_move));
    }
}

#[test]
fn test_deadline_is_respected() {
    let board = Board::new();
    let result = choose_move(&board, Disc::Black, &SearchConfig::iterative(50)).unwrap();
    assert!(board.is_legal_move(Disc::Black, result.best_move));
    // Generous slack for slow CI machines; an unbounded search would take minutes.
    assert!(result.elapsed < Duration::from_secs(5));
}

#[test]
fn test_partial_iteration_is_discarded() {
    // Whatever depth was reported must be a fully completed one.
    let search = Search::new(Positional::default());
    let board = Board::new();
    let id = search
        .run(&board, Disc::Black, &SearchConfig::iterative(30))
        .unwrap();
    if id.depth > 0 {
        let ab = search
            .run(&board, Disc::Black, &SearchConfig::alpha_beta(id.depth))
            .unwrap();
        assert_eq!(id.best_move, ab.best_move);
        assert_eq!(id.score, ab.score);
    }
}

#[test]
fn test_deadline_abort_keeps_last_completed_depth() {
    // Mid-game positions with no depth cap always run into the deadline,
    // so the final iteration is cut short and must not leak into the result.
    let search = Search::new(Positional::default());
    for time_limit_ms in [2, 5, 15, 40] {
        for board in searchable_positions(10, 16) {
            let side = board.side_to_move();
            let id = search
                .run(&board, side, &SearchConfig::iterative(time_limit_ms))
                .unwrap();
            assert!(board.is_legal_move(side, id.best_move));
            assert!(id.elapsed < Duration::from_secs(5));
            if id.depth == 0 {
                continue;
            }

            let ab = search
                .run(&board, side, &SearchConfig::alpha_beta(id.depth))
                .unwrap();
            assert_eq!(id.best_move, ab.best_move, "{time_limit_ms} ms, depth {}", id.depth);
            assert_eq!(id.score, ab.score, "{time_limit_ms} ms, depth {}", id.depth);
        }
    }
}
