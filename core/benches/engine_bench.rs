use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use snake_core::{Direction, GameConfig, GameState, Point};
use std::hint::black_box;

/// Drives a 50x50 session through a ten-row serpentine, about 500 ticks.
/// The path never revisits a cell, so the run survives whatever the food
/// placement does.
fn bench_serpentine_run() {
    let mut config = GameConfig::with_grid(50, 50);
    config.initial_cell = Point::new(0, 0);
    let mut state = GameState::with_seed(config, 42).expect("config is valid");
    state.start();

    for row in 0..10 {
        let heading = if row % 2 == 0 {
            Direction::Right
        } else {
            Direction::Left
        };
        state.set_heading(heading);
        for _ in 0..49 {
            state.tick();
        }
        state.set_heading(Direction::Down);
        state.tick();
    }
    black_box(state.snapshot());
}

fn bench_restart_churn() {
    let mut state =
        GameState::with_seed(GameConfig::default(), 42).expect("config is valid");
    state.start();
    for _ in 0..100 {
        state.tick();
        state.restart();
    }
    black_box(state.snapshot());
}

fn bench_large_board_setup() {
    let state =
        GameState::with_seed(GameConfig::with_grid(256, 256), 42).expect("config is valid");
    black_box(state.snapshot());
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");
    group.sampling_mode(SamplingMode::Flat);
    group.sample_size(20);
    group.bench_function("serpentine_500_ticks", |b| b.iter(bench_serpentine_run));
    group.bench_function("restart_churn_100", |b| b.iter(bench_restart_churn));
    group.bench_function("large_board_setup", |b| b.iter(bench_large_board_setup));
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
