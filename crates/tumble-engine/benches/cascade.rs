//! Benchmarks for cascade resolution.
//!
//! # Benchmarks
//!
//! - **`settle`**: Creates an 8x8 board from a seeded generator and resolves
//!   every run in the initial layout.
//! - **`apply_move`**: Plays the hinted move on a settled 8x8 board,
//!   including the search for the move itself.
//! - **`legal_moves`**: Enumerates every legal move on a settled 8x8 board.
//!
//! # Test Data
//!
//! Uses three fixed seeds to ensure reproducibility while testing multiple cases:
//!
//! - **`seed_0`**: `c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1`
//! - **`seed_1`**: `a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3`
//! - **`seed_2`**: `1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef`
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench cascade
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use tumble_engine::Board;
use tumble_generator::{RandomTileGenerator, SharedGenerator, TileSeed};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

const PALETTE: [char; 5] = ['R', 'G', 'B', 'Y', 'P'];
const SIZE: usize = 8;

fn create_board(seed: TileSeed) -> Board<RandomTileGenerator<char>> {
    let generator = SharedGenerator::new(RandomTileGenerator::with_seed(PALETTE, seed));
    Board::create(&generator, SIZE, SIZE)
}

fn settled_board(seed: TileSeed) -> Board<RandomTileGenerator<char>> {
    create_board(seed).settle().unwrap().board
}

fn bench_settle(c: &mut Criterion) {
    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = TileSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("settle", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || create_board(hint::black_box(*seed)),
                    |board| board.settle().unwrap(),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_apply_move(c: &mut Criterion) {
    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = TileSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("apply_move", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || settled_board(hint::black_box(*seed)),
                    |board| {
                        let mv = board.find_move()?;
                        Some(board.apply_move(mv.first, mv.second).unwrap())
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_legal_moves(c: &mut Criterion) {
    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = TileSeed::from_str(seed).unwrap();
        let board = settled_board(seed);
        c.bench_with_input(
            BenchmarkId::new("legal_moves", format!("seed_{i}")),
            &board,
            |b, board| b.iter(|| hint::black_box(board).legal_moves()),
        );
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(8));
    targets =
        bench_settle,
        bench_apply_move,
        bench_legal_moves
);
criterion_main!(benches);
