//! Core geometry for match-3 boards.
//!
//! This crate provides the board-independent building blocks shared by tile
//! generation and the board engine.
//!
//! # Overview
//!
//! - [`position`]: [`Position`] coordinates, [`Compass`] directions and the
//!   run [`Axis`]
//! - [`line`]: [`Line`], a full row or column
//! - [`grid`]: [`Grid`], rectangular storage of optional tiles with gravity
//!   compaction, deterministic refilling and a text format for tests
//!
//! # Examples
//!
//! ```
//! use tumble_core::{Grid, Position};
//!
//! let mut grid: Grid<char> = "
//!     AB
//!     ..
//! "
//! .parse()?;
//!
//! // Gravity pulls the top row down
//! grid.collapse();
//! assert_eq!(grid.get(Position::new(1, 0)), Some(&'A'));
//! assert!(grid.is_empty_at(Position::new(0, 0)));
//! # Ok::<(), tumble_core::GridParseError>(())
//! ```

pub mod grid;
pub mod line;
pub mod position;

pub use self::{
    grid::{Grid, GridParseError, Positions},
    line::Line,
    position::{Axis, Compass, Position},
};
