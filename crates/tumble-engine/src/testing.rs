//! Test utilities for board operations.
//!
//! This module provides [`BoardTester`], a harness that builds a board from
//! the text grid format, applies moves, and checks the resulting layout and
//! effects.
//!
//! # Example
//!
//! ```
//! use tumble_core::{Axis, Position};
//! use tumble_engine::testing::BoardTester;
//!
//! BoardTester::from_str(
//!     "
//!     ABCD
//!     BCAD
//!     AADC
//! ",
//! )
//! .apply_move(Position::new(1, 2), Position::new(2, 2))
//! .assert_effect_sequence("HR")
//! .assert_match(
//!     0,
//!     'A',
//!     Axis::Horizontal,
//!     [Position::new(2, 0), Position::new(2, 1), Position::new(2, 2)],
//! )
//! .assert_quiescent();
//! ```

use tumble_core::{Axis, Grid, Position};
use tumble_generator::{SequenceGenerator, SharedGenerator};

use crate::{Board, Effect, EngineOptions, Match, matching::find_match};

/// Tiles used to refill boards unless [`BoardTester::with_refill`] says otherwise.
///
/// Lowercase letters never collide with the uppercase tiles tests usually
/// start from, so refills do not create accidental runs.
pub const DEFAULT_REFILL: &str = "abcdefghijklmnopqrstuvwxyz";

type TestBoard = Board<SequenceGenerator<char>>;

/// A test harness for board operations.
///
/// `BoardTester` keeps the initial board, the board before the last
/// operation, and the current board, together with the effects reported by
/// the last operation.
///
/// # Method Chaining
///
/// All methods return `self`, enabling fluent method chaining for readable tests.
///
/// # Panics
///
/// All assertion methods panic with detailed messages on failure, using
/// `#[track_caller]` to report the correct source location.
#[derive(Debug)]
pub struct BoardTester {
    initial: TestBoard,
    previous: TestBoard,
    current: TestBoard,
    effects: Vec<Effect<char>>,
}

impl BoardTester {
    /// Creates a new tester from an initial board.
    #[must_use]
    pub fn new(initial: TestBoard) -> Self {
        Self {
            previous: initial.clone(),
            current: initial.clone(),
            initial,
            effects: vec![],
        }
    }

    /// Creates a new tester from a grid string, refilled from [`DEFAULT_REFILL`].
    ///
    /// The string format matches [`Grid::from_str`](std::str::FromStr::from_str):
    /// - Each non-blank line is a row
    /// - `.` or `_` represent empty cells
    /// - Whitespace inside a line is ignored
    ///
    /// # Panics
    ///
    /// Panics if the string cannot be parsed as a grid.
    #[track_caller]
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        let grid = s.parse::<Grid<char>>().unwrap();
        let generator = SharedGenerator::new(SequenceGenerator::new(DEFAULT_REFILL.chars()));
        Self::new(Board::from_grid(&generator, grid))
    }

    /// Restarts from the initial layout with a generator cycling through `tiles`.
    ///
    /// # Panics
    ///
    /// Panics if `tiles` is empty.
    #[track_caller]
    #[must_use]
    pub fn with_refill(self, tiles: &str) -> Self {
        let generator = SharedGenerator::new(SequenceGenerator::new(tiles.chars()));
        let board = Board::from_grid(&generator, self.initial.grid().clone())
            .with_options(self.initial.options());
        Self::new(board)
    }

    /// Restarts from the initial layout with `options`.
    #[must_use]
    pub fn with_options(self, options: EngineOptions) -> Self {
        Self::new(self.initial.with_options(options))
    }

    /// Returns the current board.
    #[must_use]
    pub fn board(&self) -> &TestBoard {
        &self.current
    }

    /// Returns the effects reported by the last operation.
    #[must_use]
    pub fn effects(&self) -> &[Effect<char>] {
        &self.effects
    }

    /// Applies a move to the current board.
    ///
    /// # Panics
    ///
    /// Panics if the cascade limit is exceeded.
    #[track_caller]
    pub fn apply_move(mut self, first: Position, second: Position) -> Self {
        let result = self.current.apply_move(first, second).unwrap();
        self.previous = std::mem::replace(&mut self.current, result.board);
        self.effects = result.effects;
        self
    }

    /// Settles the current board.
    ///
    /// # Panics
    ///
    /// Panics if the cascade limit is exceeded.
    #[track_caller]
    pub fn settle(mut self) -> Self {
        let result = self.current.settle().unwrap();
        self.previous = std::mem::replace(&mut self.current, result.board);
        self.effects = result.effects;
        self
    }

    /// Asserts that the current layout equals `expected`, in the grid string format.
    ///
    /// # Panics
    ///
    /// Panics if `expected` cannot be parsed or the layouts differ.
    #[track_caller]
    pub fn assert_layout(self, expected: &str) -> Self {
        let expected = expected.parse::<Grid<char>>().unwrap();
        let current = self.current.grid();
        assert_eq!(
            current, &expected,
            "Expected layout\n{expected}\nbut found\n{current}"
        );
        self
    }

    /// Asserts that the last operation left the layout unchanged.
    ///
    /// # Panics
    ///
    /// Panics if any cell differs from the layout before the last operation.
    #[track_caller]
    pub fn assert_unchanged(self) -> Self {
        let previous = self.previous.grid();
        let current = self.current.grid();
        assert_eq!(
            previous, current,
            "Expected layout to stay\n{previous}\nbut found\n{current}"
        );
        self
    }

    /// Asserts that the last operation reported no effects.
    ///
    /// # Panics
    ///
    /// Panics if any effect was reported.
    #[track_caller]
    pub fn assert_no_effects(self) -> Self {
        assert!(
            self.effects.is_empty(),
            "Expected no effects, but found {:?}",
            self.effects
        );
        self
    }

    /// Asserts the kinds of the reported effects, in order.
    ///
    /// Each character stands for one effect: `H` for a horizontal match, `V`
    /// for a vertical match and `R` for a refill.
    ///
    /// # Panics
    ///
    /// Panics if the effect kinds differ.
    #[track_caller]
    pub fn assert_effect_sequence(self, expected: &str) -> Self {
        let actual = self
            .effects
            .iter()
            .map(|effect| match effect {
                Effect::Match(m) if m.axis().is_horizontal() => 'H',
                Effect::Match(_) => 'V',
                Effect::Refill => 'R',
            })
            .collect::<String>();
        assert_eq!(
            actual, expected,
            "Expected effect sequence {expected:?}, but found {actual:?}: {:?}",
            self.effects
        );
        self
    }

    /// Asserts the `index`-th reported match (refills not counted).
    ///
    /// # Panics
    ///
    /// Panics if there is no such match or it differs from the expectation.
    #[track_caller]
    pub fn assert_match<P>(self, index: usize, tile: char, axis: Axis, positions: P) -> Self
    where
        P: IntoIterator<Item = Position>,
    {
        let positions = positions.into_iter().collect::<Vec<_>>();
        let matches = self
            .effects
            .iter()
            .filter_map(Effect::as_match)
            .collect::<Vec<&Match<char>>>();
        let Some(actual) = matches.get(index) else {
            panic!(
                "Expected at least {} matches, but found {}: {matches:?}",
                index + 1,
                matches.len()
            );
        };
        assert_eq!(
            (*actual.tile(), actual.axis(), actual.positions()),
            (tile, axis, positions.as_slice()),
            "Unexpected match #{index}"
        );
        self
    }

    /// Asserts that the current board is full and contains no run.
    ///
    /// # Panics
    ///
    /// Panics if a cell is empty or a run remains.
    #[track_caller]
    pub fn assert_quiescent(self) -> Self {
        let grid = self.current.grid();
        assert!(grid.is_full(), "Expected a full board, but found\n{grid}");
        if let Some(pos) = find_match(grid) {
            panic!("Expected no run, but found one at {pos} in\n{grid}");
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CascadeLimit;

    #[test]
    fn test_rejected_move_is_unchanged() {
        BoardTester::from_str(
            "
            ABC
            BCA
            CAB
        ",
        )
        .apply_move(Position::new(0, 0), Position::new(0, 1))
        .assert_unchanged()
        .assert_no_effects()
        .assert_layout("ABC\nBCA\nCAB");
    }

    #[test]
    fn test_with_refill_restarts() {
        BoardTester::from_str("AAA\nBCB")
            .settle()
            .assert_layout("abc\nBCB")
            .with_refill("XY")
            .settle()
            .assert_effect_sequence("HR")
            .assert_layout("XYX\nBCB");
    }

    #[test]
    fn test_with_options_keeps_initial_layout() {
        let tester = BoardTester::from_str("ZZZ")
            .with_refill("Z")
            .with_options(EngineOptions::default().cascade_limit(CascadeLimit::AtMost(2)));
        assert_eq!(tester.board().options().cascade_limit, CascadeLimit::AtMost(2));
        assert!(tester.board().settle().is_err());
    }

    #[test]
    #[should_panic(expected = "Expected effect sequence")]
    fn test_assert_effect_sequence_fails() {
        BoardTester::from_str("AAA")
            .settle()
            .assert_effect_sequence("VR");
    }

    #[test]
    #[should_panic(expected = "Expected no run")]
    fn test_assert_quiescent_fails() {
        BoardTester::from_str("AAA").assert_quiescent();
    }

    #[test]
    #[should_panic(expected = "Expected at least 1 matches")]
    fn test_assert_match_without_matches() {
        BoardTester::from_str("ABC")
            .settle()
            .assert_match(0, 'A', Axis::Horizontal, []);
    }
}
