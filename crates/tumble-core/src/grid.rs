//! Rectangular tile storage.
//!
//! [`Grid`] stores `width × height` cells, each holding either a tile or
//! nothing. Cells are addressed by [`Position`] only; the flat row-major
//! buffer behind it is an implementation detail.
//!
//! # Text format
//!
//! `Grid<char>` implements [`FromStr`] and [`Display`] for a compact text
//! format used throughout tests and examples:
//!
//! - each non-blank line is one row, top row first
//! - whitespace inside a line is ignored
//! - `.` or `_` is an empty cell, any other character is a tile
//!
//! ```
//! use tumble_core::{Grid, Position};
//!
//! let grid: Grid<char> = "
//!     ABA
//!     B.B
//! "
//! .parse()?;
//! assert_eq!(grid.width(), 3);
//! assert_eq!(grid.height(), 2);
//! assert_eq!(grid.get(Position::new(0, 1)), Some(&'B'));
//! assert_eq!(grid.get(Position::new(1, 1)), None);
//! assert_eq!(grid.to_string(), "ABA\nB.B");
//! # Ok::<(), tumble_core::GridParseError>(())
//! ```

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
    str::FromStr,
};

use crate::{Line, Position};

/// Errors returned when building a grid from rows or text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// The input contains no rows, or its rows contain no cells.
    #[display("grid has no cells")]
    Empty,
    /// A row's length differs from the first row's.
    #[display("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
}

/// A `width × height` grid of optional tiles.
///
/// # Examples
///
/// ```
/// use tumble_core::{Grid, Position};
///
/// let mut grid = Grid::new(3, 2);
/// assert_eq!(grid.empty_count(), 6);
///
/// grid.set(Position::new(0, 2), 'X');
/// assert_eq!(grid.get(Position::new(0, 2)), Some(&'X'));
///
/// // Out-of-bounds reads are absent, not errors
/// assert_eq!(grid.get(Position::new(-1, 0)), None);
/// assert_eq!(grid.get(Position::new(0, 3)), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<Option<T>>,
}

impl<T> Grid<T> {
    /// Creates a grid with every cell empty.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero, or does not fit in an `i32`
    /// coordinate.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid must have at least one cell");
        assert!(
            i32::try_from(width).is_ok() && i32::try_from(height).is_ok(),
            "grid dimensions exceed coordinate range"
        );
        let cells = (0..width * height).map(|_| None).collect();
        Self {
            width,
            height,
            cells,
        }
    }

    /// Builds a grid from rows of optional tiles, top row first.
    ///
    /// # Errors
    ///
    /// Returns [`GridParseError::Empty`] if there are no cells, and
    /// [`GridParseError::RaggedRow`] if the rows differ in length.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, GridParseError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = Option<T>>,
    {
        let mut width = None;
        let mut height = 0;
        let mut cells = Vec::new();
        for (row, tiles) in rows.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(tiles);
            let found = cells.len() - before;
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(GridParseError::RaggedRow {
                        row,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }
        let width = width.unwrap_or_default();
        if width == 0 || height == 0 {
            return Err(GridParseError::Empty);
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Returns the number of columns.
    #[must_use]
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index_of(&self, pos: Position) -> Option<usize> {
        let row = usize::try_from(pos.row()).ok()?;
        let col = usize::try_from(pos.col()).ok()?;
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    #[track_caller]
    fn expect_index(&self, pos: Position) -> usize {
        match self.index_of(pos) {
            Some(index) => index,
            None => panic!(
                "position {pos} is outside a {}x{} grid",
                self.width, self.height
            ),
        }
    }

    /// Returns `true` if `pos` is inside the grid.
    #[must_use]
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        self.index_of(pos).is_some()
    }

    /// Returns the tile at `pos`, or `None` if the cell is empty or out of bounds.
    #[must_use]
    #[inline]
    pub fn get(&self, pos: Position) -> Option<&T> {
        self.index_of(pos).and_then(|i| self.cells[i].as_ref())
    }

    /// Returns `true` if `pos` is inside the grid and holds no tile.
    #[must_use]
    #[inline]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.index_of(pos).is_some_and(|i| self.cells[i].is_none())
    }

    /// Places `tile` at `pos` and returns the previous tile.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    #[track_caller]
    pub fn set(&mut self, pos: Position, tile: T) -> Option<T> {
        let index = self.expect_index(pos);
        self.cells[index].replace(tile)
    }

    /// Empties the cell at `pos` and returns its tile.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    #[track_caller]
    pub fn take(&mut self, pos: Position) -> Option<T> {
        let index = self.expect_index(pos);
        self.cells[index].take()
    }

    /// Exchanges the contents of two cells.
    ///
    /// # Panics
    ///
    /// Panics if either position is out of bounds.
    #[track_caller]
    pub fn swap(&mut self, first: Position, second: Position) {
        let first = self.expect_index(first);
        let second = self.expect_index(second);
        self.cells.swap(first, second);
    }

    /// Returns all positions of the grid in row-major order.
    #[must_use]
    #[inline]
    pub fn positions(&self) -> Positions {
        Positions::new(self.width, self.height)
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Returns `true` if every cell holds a tile.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns every row, top to bottom, followed by every column, left to right.
    pub fn lines(&self) -> impl Iterator<Item = Line> {
        let rows = (0..to_coord(self.height)).map(|row| Line::Row { row });
        let cols = (0..to_coord(self.width)).map(|col| Line::Column { col });
        rows.chain(cols)
    }

    /// Returns the positions of `line` inside the grid, west to east or north to south.
    ///
    /// A line outside the grid yields nothing.
    pub fn line_positions(&self, line: Line) -> impl Iterator<Item = Position> + '_ {
        let len = match line {
            Line::Row { .. } => self.width,
            Line::Column { .. } => self.height,
        };
        (0..to_coord(len))
            .map(move |offset| line.position_at(offset))
            .filter(|pos| self.contains(*pos))
    }

    /// Moves every tile down its column as far as it goes.
    ///
    /// Tiles keep their relative order within the column and never change
    /// column; all empty cells end up at the top. Returns the number of tiles
    /// that moved.
    ///
    /// # Examples
    ///
    /// ```
    /// use tumble_core::Grid;
    ///
    /// let mut grid: Grid<char> = "
    ///     A.
    ///     .B
    ///     C.
    ///     ..
    /// "
    /// .parse()?;
    /// assert_eq!(grid.collapse(), 3);
    /// assert_eq!(grid.to_string(), "..\n..\nA.\nCB");
    /// # Ok::<(), tumble_core::GridParseError>(())
    /// ```
    pub fn collapse(&mut self) -> usize {
        let mut moved = 0;
        for col in 0..self.width {
            // Next free slot, counted from the bottom.
            let mut target = self.height;
            for row in (0..self.height).rev() {
                let index = row * self.width + col;
                if self.cells[index].is_some() {
                    target -= 1;
                    if target != row {
                        self.cells.swap(index, target * self.width + col);
                        moved += 1;
                    }
                }
            }
        }
        moved
    }

    /// Fills every empty cell with a tile produced by `next_tile`.
    ///
    /// Cells are visited bottom row first and left to right within a row, so
    /// the call order of `next_tile` is deterministic. Returns the number of
    /// cells filled.
    pub fn fill_empty_with<F>(&mut self, mut next_tile: F) -> usize
    where
        F: FnMut() -> T,
    {
        let mut filled = 0;
        for row in (0..self.height).rev() {
            for cell in &mut self.cells[row * self.width..(row + 1) * self.width] {
                if cell.is_none() {
                    *cell = Some(next_tile());
                    filled += 1;
                }
            }
        }
        filled
    }
}

impl FromStr for Grid<char> {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(|line| {
                line.chars()
                    .filter(|ch| !ch.is_whitespace())
                    .map(|ch| match ch {
                        '.' | '_' => None,
                        ch => Some(ch),
                    })
                    .collect::<Vec<_>>()
            })
            .filter(|row| !row.is_empty());
        Self::from_rows(rows)
    }
}

impl<T> Display for Grid<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.width).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                match cell {
                    Some(tile) => write!(f, "{tile}")?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}

#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
#[inline]
fn to_coord(n: usize) -> i32 {
    // Grid dimensions are checked against the i32 range on construction.
    n as i32
}

/// Iterator over the positions of a grid in row-major order.
///
/// Returned by [`Grid::positions`].
#[derive(Debug, Clone)]
pub struct Positions {
    width: usize,
    front: usize,
    back: usize,
}

impl Positions {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            front: 0,
            back: width * height,
        }
    }

    #[inline]
    fn item_at(&self, index: usize) -> Position {
        Position::new(to_coord(index / self.width), to_coord(index % self.width))
    }
}

impl Iterator for Positions {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.item_at(self.front);
        self.front += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back.saturating_sub(self.front);
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Positions {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.item_at(self.back))
    }
}

impl FusedIterator for Positions {}
impl ExactSizeIterator for Positions {}
