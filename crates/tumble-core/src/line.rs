//! Rows and columns of a board.

use crate::Position;

/// A full row or column of a board.
///
/// Lines are the only places where runs can form and the only pairs of
/// positions that can be swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Line {
    /// A row identified by its index.
    Row {
        /// Row index.
        row: i32,
    },
    /// A column identified by its index.
    Column {
        /// Column index.
        col: i32,
    },
}

impl Line {
    /// Converts an offset along the line into an absolute [`Position`].
    ///
    /// Offset 0 is the west end of a row or the north end of a column.
    ///
    /// # Examples
    ///
    /// ```
    /// use tumble_core::{Line, Position};
    ///
    /// assert_eq!(Line::Row { row: 2 }.position_at(5), Position::new(2, 5));
    /// assert_eq!(Line::Column { col: 2 }.position_at(5), Position::new(5, 2));
    /// ```
    #[must_use]
    #[inline]
    pub const fn position_at(self, offset: i32) -> Position {
        match self {
            Self::Row { row } => Position::new(row, offset),
            Self::Column { col } => Position::new(offset, col),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_at_walks_forward() {
        let row = Line::Row { row: 3 };
        assert_eq!(row.position_at(0), Position::new(3, 0));
        assert_eq!(row.position_at(4), Position::new(3, 4));

        let col = Line::Column { col: 1 };
        assert_eq!(col.position_at(0), Position::new(0, 1));
        assert_eq!(col.position_at(2), Position::new(2, 1));
    }
}
