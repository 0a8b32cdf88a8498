//! Board coordinates and directions.

use std::fmt::{self, Display};

/// A cell coordinate on a board.
///
/// Rows grow downward and columns grow rightward, both 0-indexed. A position
/// carries no notion of validity on its own: coordinates may be negative or
/// larger than any board, and every board or grid decides for itself whether
/// a position is in bounds.
///
/// Positions are ordered row-major, so sorting a list of positions yields the
/// same order as [`Grid::positions`](crate::Grid::positions).
///
/// # Examples
///
/// ```
/// use tumble_core::{Compass, Position};
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos.row(), 2);
/// assert_eq!(pos.col(), 3);
/// assert_eq!(pos.step(Compass::North), Position::new(1, 3));
/// assert!(Position::new(-1, 0) < Position::new(0, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: i32,
    col: i32,
}

impl Position {
    /// Creates a position from a row and a column.
    #[must_use]
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the row (0 is the top row).
    #[must_use]
    #[inline]
    pub const fn row(self) -> i32 {
        self.row
    }

    /// Returns the column (0 is the leftmost column).
    #[must_use]
    #[inline]
    pub const fn col(self) -> i32 {
        self.col
    }

    /// Returns the neighbouring position one step in `direction`.
    ///
    /// Coordinates saturate at the `i32` range, so stepping never overflows.
    #[must_use]
    #[inline]
    pub const fn step(self, direction: Compass) -> Self {
        let (d_row, d_col) = direction.offset();
        Self {
            row: self.row.saturating_add(d_row),
            col: self.col.saturating_add(d_col),
        }
    }

    /// Returns `true` if both positions lie on the same row or the same column
    /// without being the same position.
    ///
    /// The distance between the positions does not matter.
    ///
    /// # Examples
    ///
    /// ```
    /// use tumble_core::Position;
    ///
    /// let pos = Position::new(1, 1);
    /// assert!(pos.is_aligned_with(Position::new(1, 4)));
    /// assert!(pos.is_aligned_with(Position::new(0, 1)));
    /// assert!(!pos.is_aligned_with(Position::new(2, 2)));
    /// assert!(!pos.is_aligned_with(pos));
    /// ```
    #[must_use]
    pub fn is_aligned_with(self, other: Self) -> bool {
        self != other && (self.row == other.row || self.col == other.col)
    }

    /// Returns `true` if `other` is one orthogonal step away.
    #[must_use]
    pub fn is_adjacent_to(self, other: Self) -> bool {
        Compass::ALL.into_iter().any(|dir| self.step(dir) == other)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four orthogonal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Compass {
    /// Toward row 0.
    #[display("north")]
    North,
    /// Toward the last row.
    #[display("south")]
    South,
    /// Toward the last column.
    #[display("east")]
    East,
    /// Toward column 0.
    #[display("west")]
    West,
}

impl Compass {
    /// All four directions.
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Returns the `(row, col)` offset of a single step in this direction.
    #[must_use]
    #[inline]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (-1, 0),
            Self::South => (1, 0),
            Self::East => (0, 1),
            Self::West => (0, -1),
        }
    }
}

/// The orientation of a run of tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum Axis {
    /// Along a row (west to east).
    #[display("horizontal")]
    Horizontal,
    /// Along a column (north to south).
    #[display("vertical")]
    Vertical,
}

impl Axis {
    /// Both axes, horizontal first.
    pub const ALL: [Self; 2] = [Self::Horizontal, Self::Vertical];

    /// Returns the direction that walks toward the start of a run.
    #[must_use]
    #[inline]
    pub const fn backward(self) -> Compass {
        match self {
            Self::Horizontal => Compass::West,
            Self::Vertical => Compass::North,
        }
    }

    /// Returns the direction that walks toward the end of a run.
    #[must_use]
    #[inline]
    pub const fn forward(self) -> Compass {
        match self {
            Self::Horizontal => Compass::East,
            Self::Vertical => Compass::South,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_follows_offsets() {
        let pos = Position::new(3, 3);
        assert_eq!(pos.step(Compass::North), Position::new(2, 3));
        assert_eq!(pos.step(Compass::South), Position::new(4, 3));
        assert_eq!(pos.step(Compass::East), Position::new(3, 4));
        assert_eq!(pos.step(Compass::West), Position::new(3, 2));
    }

    #[test]
    fn test_step_saturates() {
        let pos = Position::new(i32::MIN, i32::MAX);
        assert_eq!(pos.step(Compass::North), pos);
        assert_eq!(pos.step(Compass::East), pos);
    }

    #[test]
    fn test_axis_directions() {
        for axis in Axis::ALL {
            let (d_row, d_col) = axis.backward().offset();
            assert_eq!(axis.forward().offset(), (-d_row, -d_col));
        }
        assert_eq!(Axis::Horizontal.backward(), Compass::West);
        assert_eq!(Axis::Vertical.forward(), Compass::South);
    }

    #[test]
    fn test_adjacency() {
        let pos = Position::new(0, 0);
        assert!(pos.is_adjacent_to(Position::new(0, 1)));
        assert!(pos.is_adjacent_to(Position::new(1, 0)));
        assert!(!pos.is_adjacent_to(Position::new(1, 1)));
        assert!(!pos.is_adjacent_to(Position::new(0, 2)));
        assert!(!pos.is_adjacent_to(pos));
    }

    #[test]
    fn test_row_major_order() {
        let mut positions = vec![
            Position::new(1, 0),
            Position::new(0, 2),
            Position::new(0, 0),
            Position::new(1, 1),
        ];
        positions.sort();
        assert_eq!(
            positions,
            [
                Position::new(0, 0),
                Position::new(0, 2),
                Position::new(1, 0),
                Position::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(2, -1).to_string(), "(2, -1)");
        assert_eq!(Axis::Vertical.to_string(), "vertical");
        assert_eq!(Compass::West.to_string(), "west");
    }
}
