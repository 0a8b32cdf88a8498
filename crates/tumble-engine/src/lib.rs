//! Rules engine for match-3 boards.
//!
//! A [`Board`] holds a grid of tiles and a shared [`TileGenerator`] handle.
//! Players swap two tiles in the same row or column; a swap is legal when it
//! puts one of the two tiles into a run of at least three identical tiles.
//! Applying a legal move removes the runs, lets the remaining tiles fall,
//! refills the board from the generator, and repeats until no run is left.
//!
//! # Overview
//!
//! - [`Board`]: construction, bounds-checked reads, move validation
//!   ([`Board::can_move`]), cascade resolution ([`Board::apply_move`],
//!   [`Board::settle`]) and refilling ([`Board::refill`])
//! - [`matching`]: run detection on a [`Grid`](tumble_core::Grid)
//! - [`Effect`] and [`MoveResult`]: the chronological record of a move
//! - [`EngineOptions`]: per-board configuration such as the [`CascadeLimit`]
//! - [`testing`]: a chaining harness for board tests
//!
//! Boards are values: every operation returns a new board and leaves the
//! original untouched. The generator is shared by reference counting, so a
//! board is neither `Send` nor `Sync`.
//!
//! # Examples
//!
//! ```
//! use tumble_engine::Board;
//! use tumble_generator::{RandomTileGenerator, SharedGenerator, TileSeed};
//!
//! let seed = TileSeed::from_phrase("tumble");
//! let generator = SharedGenerator::new(RandomTileGenerator::with_seed(
//!     ['R', 'G', 'B', 'Y', 'P'],
//!     seed,
//! ));
//!
//! // Scrub the runs the random layout started with
//! let board = Board::create(&generator, 8, 8).settle()?.board;
//!
//! if let Some(mv) = board.find_move() {
//!     let result = board.apply_move(mv.first, mv.second)?;
//!     assert!(result.cascade_count() >= 1);
//!     assert!(result.board.grid().is_full());
//! }
//! # Ok::<(), tumble_engine::EngineError>(())
//! ```

pub use tumble_generator::TileGenerator;

pub use self::{
    board::Board,
    effect::{Effect, Match, MoveResult},
    error::EngineError,
    moves::Move,
    options::{CascadeLimit, DEFAULT_CASCADE_LIMIT, EngineOptions},
};

mod board;
mod cascade;
mod effect;
mod error;
pub mod matching;
mod moves;
mod options;
pub mod testing;
