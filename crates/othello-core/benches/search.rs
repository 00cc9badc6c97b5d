use std::hint::black_box;
use std::time::Duration;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use othello_core::board::Board;
use othello_core::eval::Positional;
use othello_core::move_list::{MoveList, MoveOrdering};
use othello_core::search::{Search, SearchConfig, Strategy};

/// Ten plies of heuristic-first play from the start position.
fn midgame_board() -> Board {
    let mut board = Board::new();
    for _ in 0..10 {
        let side = board.side_to_move();
        let moves = MoveList::generate(&board, side, MoveOrdering::Heuristic);
        board = match moves.first() {
            Some(mv) => board.make_move_with_flipped(side, mv.sq, mv.flipped),
            None => board.switch_side(),
        };
    }
    board
}

fn search_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(5));

    let board = midgame_board();
    let side = board.side_to_move();
    let search = Search::new(Positional::default());

    let cases = [
        (Strategy::Minimax, MoveOrdering::Generation, 4),
        (Strategy::AlphaBeta, MoveOrdering::Generation, 6),
        (Strategy::AlphaBeta, MoveOrdering::Heuristic, 6),
    ];
    for (strategy, ordering, depth) in cases {
        let config = SearchConfig::default()
            .with_strategy(strategy)
            .with_ordering(ordering)
            .with_depth(depth);
        let id = format!("{strategy}/{ordering:?}/{depth}");
        group.bench_with_input(BenchmarkId::from_parameter(id), &config, |b, config| {
            b.iter(|| black_box(search.run(black_box(&board), side, config)));
        });
    }

    group.finish();
}

criterion_group!(benches, search_benchmark);
criterion_main!(benches);
