//! Run detection.
//!
//! Detection is split in two steps. [`any_matching_at`] answers "does this
//! cell sit in a run?" with two local counts, and [`match_positions`]
//! enumerates the exact run afterwards, only for cells that matched.
//!
//! # Examples
//!
//! ```
//! use tumble_core::{Axis, Grid, Position};
//! use tumble_engine::matching::{MatchState, any_matching_at, match_positions};
//!
//! let grid: Grid<char> = "
//!     ABCDE
//!     BCDEA
//!     CAAAB
//! "
//! .parse()?;
//!
//! let pos = Position::new(2, 2);
//! assert_eq!(any_matching_at(&grid, pos), MatchState::Horizontal);
//! assert_eq!(
//!     match_positions(&grid, Axis::Horizontal, pos),
//!     [Position::new(2, 1), Position::new(2, 2), Position::new(2, 3)]
//! );
//! # Ok::<(), tumble_core::GridParseError>(())
//! ```

use tumble_core::{Axis, Compass, Grid, Position};

use crate::Match;

/// Minimum number of identical tiles in a line that counts as a run.
pub const MIN_RUN: usize = 3;

/// Which runs pass through a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum MatchState {
    /// The cell is in no run (or is empty or out of bounds).
    None,
    /// The cell is in a horizontal run only.
    Horizontal,
    /// The cell is in a vertical run only.
    Vertical,
    /// The cell is in both a horizontal and a vertical run.
    Both,
}

impl MatchState {
    /// Builds a state from per-axis results.
    #[must_use]
    #[inline]
    pub const fn from_axes(horizontal: bool, vertical: bool) -> Self {
        match (horizontal, vertical) {
            (false, false) => Self::None,
            (true, false) => Self::Horizontal,
            (false, true) => Self::Vertical,
            (true, true) => Self::Both,
        }
    }

    /// Returns `true` if the cell is in at least one run.
    #[must_use]
    #[inline]
    pub const fn is_match(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns the axes of the runs, horizontal first.
    #[must_use]
    pub const fn axes(self) -> &'static [Axis] {
        match self {
            Self::None => &[],
            Self::Horizontal => &[Axis::Horizontal],
            Self::Vertical => &[Axis::Vertical],
            Self::Both => &Axis::ALL,
        }
    }
}

/// Counts the identical tiles from `pos` toward `direction`, including `pos`.
///
/// Stops at the grid edge or the first empty or different cell. Returns 0 if
/// `pos` holds no tile.
fn count_toward<T>(grid: &Grid<T>, pos: Position, direction: Compass) -> usize
where
    T: PartialEq,
{
    let Some(tile) = grid.get(pos) else {
        return 0;
    };
    let mut count = 1;
    let mut next = pos.step(direction);
    while grid.get(next) == Some(tile) {
        count += 1;
        next = next.step(direction);
    }
    count
}

/// Returns the length of the run through `pos` along `axis`.
///
/// A lone tile has length 1; an empty or out-of-bounds cell has length 0.
#[must_use]
pub fn run_length<T>(grid: &Grid<T>, pos: Position, axis: Axis) -> usize
where
    T: PartialEq,
{
    let backward = count_toward(grid, pos, axis.backward());
    let forward = count_toward(grid, pos, axis.forward());
    // The origin is counted by both walks.
    (backward + forward).saturating_sub(1)
}

/// Determines which runs of at least [`MIN_RUN`] tiles pass through `pos`.
///
/// Never panics: empty and out-of-bounds positions yield [`MatchState::None`].
#[must_use]
pub fn any_matching_at<T>(grid: &Grid<T>, pos: Position) -> MatchState
where
    T: PartialEq,
{
    if grid.get(pos).is_none() {
        return MatchState::None;
    }
    MatchState::from_axes(
        run_length(grid, pos, Axis::Horizontal) >= MIN_RUN,
        run_length(grid, pos, Axis::Vertical) >= MIN_RUN,
    )
}

/// Returns the maximal run of identical tiles through `reference` along `axis`.
///
/// Positions are in forward order (west to east, or north to south). The
/// caller is expected to have checked that a run exists; the result is the
/// contiguous line of equal tiles whatever its length, and empty if
/// `reference` holds no tile.
#[must_use]
pub fn match_positions<T>(grid: &Grid<T>, axis: Axis, reference: Position) -> Vec<Position>
where
    T: PartialEq,
{
    let Some(tile) = grid.get(reference) else {
        return Vec::new();
    };

    let mut start = reference;
    loop {
        let prev = start.step(axis.backward());
        if grid.get(prev) != Some(tile) {
            break;
        }
        start = prev;
    }

    let mut run = Vec::new();
    let mut pos = start;
    while grid.get(pos) == Some(tile) {
        run.push(pos);
        pos = pos.step(axis.forward());
    }
    run
}

/// Returns every run through `pos`, horizontal first.
#[must_use]
pub fn runs_at<T>(grid: &Grid<T>, pos: Position) -> Vec<Match<T>>
where
    T: Clone + PartialEq,
{
    let Some(tile) = grid.get(pos) else {
        return Vec::new();
    };
    any_matching_at(grid, pos)
        .axes()
        .iter()
        .map(|&axis| Match::new(tile.clone(), axis, match_positions(grid, axis, pos)))
        .collect()
}

/// Returns the first position, in row-major order, that sits in a run.
#[must_use]
pub fn find_match<T>(grid: &Grid<T>) -> Option<Position>
where
    T: PartialEq,
{
    grid.positions()
        .find(|&pos| any_matching_at(grid, pos).is_match())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Grid<char> {
        s.parse().expect("valid grid")
    }

    #[test]
    fn test_run_of_three_in_row() {
        let grid = parse(
            "
            ABCDE
            BCDEA
            CAAAB
            DEABC
        ",
        );
        let expected = [Position::new(2, 1), Position::new(2, 2), Position::new(2, 3)];
        for col in 1..=3 {
            let pos = Position::new(2, col);
            assert_eq!(any_matching_at(&grid, pos), MatchState::Horizontal);
            assert_eq!(match_positions(&grid, Axis::Horizontal, pos), expected);
        }
        // Neighbours of the run are not part of it
        assert_eq!(any_matching_at(&grid, Position::new(2, 0)), MatchState::None);
        assert_eq!(any_matching_at(&grid, Position::new(3, 2)), MatchState::None);
    }

    #[test]
    fn test_vertical_run_is_maximal() {
        let grid = parse(
            "
            AB
            AC
            AB
            AC
            BB
        ",
        );
        let pos = Position::new(3, 0);
        assert_eq!(any_matching_at(&grid, pos), MatchState::Vertical);
        assert_eq!(run_length(&grid, pos, Axis::Vertical), 4);
        assert_eq!(
            match_positions(&grid, Axis::Vertical, pos),
            [
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(2, 0),
                Position::new(3, 0),
            ]
        );
    }

    #[test]
    fn test_both_axes() {
        let grid = parse(
            "
            ..A..
            ..A..
            AAAAB
            ..C..
        ",
        );
        let pos = Position::new(2, 2);
        assert_eq!(any_matching_at(&grid, pos), MatchState::Both);
        let runs = runs_at(&grid, pos);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].axis(), Axis::Horizontal);
        assert_eq!(runs[0].len(), 4);
        assert_eq!(runs[1].axis(), Axis::Vertical);
        assert_eq!(
            runs[1].positions(),
            [Position::new(0, 2), Position::new(1, 2), Position::new(2, 2)]
        );
    }

    #[test]
    fn test_pair_is_not_a_match() {
        let grid = parse("AAB\nBBA");
        for pos in grid.positions() {
            assert_eq!(any_matching_at(&grid, pos), MatchState::None);
        }
        assert_eq!(find_match(&grid), None);
    }

    #[test]
    fn test_empty_cells_break_runs() {
        let grid = parse("AA.AA");
        assert_eq!(run_length(&grid, Position::new(0, 1), Axis::Horizontal), 2);
        assert_eq!(run_length(&grid, Position::new(0, 2), Axis::Horizontal), 0);
        assert_eq!(find_match(&grid), None);
    }

    #[test]
    fn test_empty_and_out_of_bounds_reference() {
        let grid = parse("A.A\nAAA");
        for pos in [
            Position::new(0, 1),
            Position::new(-1, 0),
            Position::new(2, 0),
            Position::new(0, 3),
        ] {
            assert_eq!(any_matching_at(&grid, pos), MatchState::None);
            assert!(match_positions(&grid, Axis::Horizontal, pos).is_empty());
            assert!(runs_at(&grid, pos).is_empty());
        }
    }

    #[test]
    fn test_find_match_is_row_major() {
        let grid = parse(
            "
            ABCB
            ABDB
            ACCB
        ",
        );
        // (0, 0) starts a vertical run and comes before the column at (0, 3)
        assert_eq!(find_match(&grid), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_state_axes() {
        assert!(MatchState::None.axes().is_empty());
        assert_eq!(MatchState::Both.axes(), [Axis::Horizontal, Axis::Vertical]);
        assert_eq!(MatchState::from_axes(false, true), MatchState::Vertical);
        assert!(MatchState::Horizontal.is_match());
        assert!(!MatchState::None.is_match());
    }
}
