//! Example playing random legal moves on seeded boards.
//!
//! This example shows how to:
//! - Create a board from a seeded `RandomTileGenerator`
//! - Settle the initial layout
//! - Pick legal moves and apply them
//! - Collect cascade statistics across many games in parallel
//!
//! # Usage
//!
//! ```sh
//! cargo run --example simulate
//! ```
//!
//! Play more games on a larger board:
//!
//! ```sh
//! cargo run --example simulate -- --games 1000 --width 9 --height 9
//! ```
//!
//! Replay a single game from a seed, printing every board:
//!
//! ```sh
//! RUST_LOG=tumble_engine=debug cargo run --example simulate -- --seed 1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef --verbose
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;
use rayon::prelude::*;
use tumble_engine::{Board, CascadeLimit, EngineError, EngineOptions, Move};
use tumble_generator::{RandomTileGenerator, SharedGenerator, TileSeed};

const PALETTE: [char; 8] = ['R', 'G', 'B', 'Y', 'P', 'O', 'W', 'K'];

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    /// Play the first hinted move.
    Hint,
    /// Play a uniformly chosen legal move.
    Random,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of games to play. Ignored when `--seed` is given.
    #[arg(long, value_name = "COUNT", default_value_t = 100)]
    games: usize,

    /// Moves per game.
    #[arg(long, value_name = "COUNT", default_value_t = 50)]
    moves: usize,

    /// Board width.
    #[arg(long, default_value_t = 8)]
    width: usize,

    /// Board height.
    #[arg(long, default_value_t = 8)]
    height: usize,

    /// Number of distinct tiles.
    #[arg(long, value_name = "COUNT", default_value_t = 5)]
    colors: usize,

    /// How moves are chosen.
    #[arg(long, value_name = "STRATEGY", default_value = "random")]
    strategy: Strategy,

    /// Maximum cascade passes per move (0 for no limit).
    #[arg(long, value_name = "PASSES", default_value_t = tumble_engine::DEFAULT_CASCADE_LIMIT)]
    cascade_limit: usize,

    /// Replay a single game from this seed (64 hex digits).
    #[arg(long, value_name = "SEED")]
    seed: Option<TileSeed>,

    /// Print the board after every move.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Default, Clone, Copy)]
struct GameStats {
    moves: usize,
    distant_moves: usize,
    matches: usize,
    cascades: usize,
    longest_cascade: usize,
    stuck: bool,
}

impl GameStats {
    fn merge(self, other: Self) -> Self {
        Self {
            moves: self.moves + other.moves,
            distant_moves: self.distant_moves + other.distant_moves,
            matches: self.matches + other.matches,
            cascades: self.cascades + other.cascades,
            longest_cascade: self.longest_cascade.max(other.longest_cascade),
            stuck: self.stuck || other.stuck,
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.width == 0 || args.height == 0 {
        eprintln!("--width and --height must be at least 1.");
        process::exit(1);
    }
    if !(2..=PALETTE.len()).contains(&args.colors) {
        eprintln!("--colors must be between 2 and {}.", PALETTE.len());
        process::exit(1);
    }

    if let Some(seed) = args.seed {
        match play(&args, seed) {
            Ok(stats) => print_stats(1, &stats, 0),
            Err(err) => {
                eprintln!("Seed {seed}: {err}");
                process::exit(1);
            }
        }
        return;
    }

    let results = (0..args.games)
        .into_par_iter()
        .map(|_| {
            let seed = TileSeed::random();
            play(&args, seed).map_err(|err| (seed, err))
        })
        .collect::<Vec<_>>();

    let mut total = GameStats::default();
    let mut stuck_games = 0;
    let mut failed = 0;
    for result in results {
        match result {
            Ok(stats) => {
                stuck_games += usize::from(stats.stuck);
                total = total.merge(stats);
            }
            Err((seed, err)) => {
                eprintln!("Seed {seed}: {err}");
                failed += 1;
            }
        }
    }
    print_stats(args.games - failed, &total, stuck_games);
    if failed > 0 {
        process::exit(1);
    }
}

fn play(args: &Args, seed: TileSeed) -> Result<GameStats, EngineError> {
    let limit = match args.cascade_limit {
        0 => CascadeLimit::Unbounded,
        n => CascadeLimit::AtMost(n),
    };
    let generator = SharedGenerator::new(RandomTileGenerator::with_seed(
        PALETTE[..args.colors].iter().copied(),
        seed,
    ));
    let mut board = Board::create(&generator, args.width, args.height)
        .with_options(EngineOptions::default().cascade_limit(limit))
        .settle()?
        .board;
    // Move choice uses its own stream so that tile generation stays reproducible.
    let mut rng = Pcg64::from_seed(*TileSeed::from_phrase(&seed.to_string()).as_bytes());

    if args.verbose {
        println!("Seed: {seed}");
        println!("{}", board.grid());
        println!();
    }

    let mut stats = GameStats::default();
    for _ in 0..args.moves {
        let Some(mv) = choose_move(&board, args.strategy, &mut rng) else {
            stats.stuck = true;
            break;
        };
        let result = board.apply_move(mv.first, mv.second)?;
        stats.moves += 1;
        stats.distant_moves += usize::from(!mv.is_adjacent());
        stats.matches += result.matches().count();
        stats.cascades += result.cascade_count();
        stats.longest_cascade = stats.longest_cascade.max(result.cascade_count());
        if args.verbose {
            println!(
                "Move {mv}: {} matches, {} passes",
                result.matches().count(),
                result.cascade_count()
            );
            println!("{}", result.board.grid());
            println!();
        }
        board = result.board;
    }
    Ok(stats)
}

fn choose_move(
    board: &Board<RandomTileGenerator<char>>,
    strategy: Strategy,
    rng: &mut Pcg64,
) -> Option<Move> {
    match strategy {
        Strategy::Hint => board.find_move(),
        Strategy::Random => {
            let moves = board.legal_moves();
            if moves.is_empty() {
                return None;
            }
            Some(moves[rng.random_range(0..moves.len())])
        }
    }
}

#[expect(clippy::cast_precision_loss)]
fn print_stats(games: usize, stats: &GameStats, stuck_games: usize) {
    println!("Games: {games}");
    println!("  moves: {}", stats.moves);
    println!("  non-adjacent moves: {}", stats.distant_moves);
    println!("  matches: {}", stats.matches);
    println!("  cascade passes: {}", stats.cascades);
    println!("  longest cascade: {}", stats.longest_cascade);
    if stats.moves > 0 {
        println!(
            "  passes per move: {:.2}",
            stats.cascades as f64 / stats.moves as f64
        );
    }
    println!("  stuck games: {stuck_games}");
}
