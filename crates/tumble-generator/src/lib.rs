//! Tile generators for match-3 boards.
//!
//! The board engine never decides which tile appears in a new cell; it asks a
//! [`TileGenerator`]. This crate defines that capability and ships a few
//! ready-made generators:
//!
//! - [`SequenceGenerator`]: cycles through a fixed list, for reproducible
//!   layouts and tests
//! - [`FnGenerator`]: wraps a closure (see [`from_fn`])
//! - [`RandomTileGenerator`]: picks uniformly from a palette using a seeded
//!   PCG RNG, reproducible through its [`TileSeed`]
//!
//! A board keeps its generator behind a [`SharedGenerator`] handle, so every
//! board derived from it draws from the same generator state.
//!
//! # Examples
//!
//! ```
//! use tumble_generator::{RandomTileGenerator, TileGenerator as _, TileSeed};
//!
//! let seed = TileSeed::from_phrase("daily puzzle");
//! let mut first = RandomTileGenerator::with_seed(['R', 'G', 'B'], seed);
//! let mut second = RandomTileGenerator::with_seed(['R', 'G', 'B'], seed);
//!
//! // Same seed, same tiles
//! for _ in 0..16 {
//!     assert_eq!(first.next_tile(), second.next_tile());
//! }
//! ```

pub use self::{
    generator::{FnGenerator, SequenceGenerator, TileGenerator, from_fn},
    random::RandomTileGenerator,
    seed::{SeedParseError, TileSeed},
    shared::SharedGenerator,
};

mod generator;
mod random;
mod seed;
mod shared;
