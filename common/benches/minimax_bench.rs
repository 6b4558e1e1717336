use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use tictactoe_common::tictactoe::{best_move, score, Board, GameState, Side};

fn bench_best_move_empty_board() {
    let board = Board::new();
    black_box(best_move(&board, Side::Opponent).ok());
}

fn bench_best_move_mid_game() {
    use tictactoe_common::tictactoe::Mark::{Empty as E, O, X};
    let board = Board::from_marks([X, E, E, E, O, E, E, E, X]);
    black_box(best_move(&board, Side::Seeker).ok());
}

fn bench_score_after_corner_opening() {
    let mut board = Board::new();
    if board.place(0, Side::Opponent).is_ok() {
        black_box(score(&board, true));
    }
}

fn bench_self_play_game() {
    let mut state = GameState::new(Side::Opponent);
    while !state.is_over() {
        let side = state.to_move;
        if state.computer_move(side).is_err() {
            break;
        }
    }
    black_box(state.outcome);
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.sample_size(10);

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_best_move_empty_board)
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(bench_best_move_mid_game)
    });

    group.bench_function("score_corner_opening", |b| {
        b.iter(bench_score_after_corner_opening)
    });

    group.bench_function("self_play_game", |b| {
        b.iter(bench_self_play_game)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
