use std::fmt::{self, Debug};

use tumble_core::{Grid, Position, Positions};
use tumble_generator::{SharedGenerator, TileGenerator};

use crate::EngineOptions;

/// A match-3 board: a grid of tiles plus the generator that refills it.
///
/// Boards are values. Every operation that changes the layout
/// ([`apply_move`](Self::apply_move), [`settle`](Self::settle),
/// [`refill`](Self::refill)) leaves `self` untouched and returns a new board.
/// The new board shares the same generator, so tile sequences continue across
/// successive boards.
///
/// # Example
///
/// ```
/// use tumble_core::Position;
/// use tumble_engine::Board;
/// use tumble_generator::{SequenceGenerator, SharedGenerator};
///
/// let generator = SharedGenerator::new(SequenceGenerator::new(0..6));
/// let board = Board::create(&generator, 3, 2);
///
/// // Cells are filled row by row
/// assert_eq!(board.piece(Position::new(0, 2)), Some(&2));
/// assert_eq!(board.piece(Position::new(1, 0)), Some(&3));
///
/// // Out-of-bounds reads are absent
/// assert_eq!(board.piece(Position::new(-1, 0)), None);
/// ```
pub struct Board<G>
where
    G: TileGenerator,
{
    generator: SharedGenerator<G>,
    grid: Grid<G::Tile>,
    options: EngineOptions,
}

impl<G> Board<G>
where
    G: TileGenerator,
{
    /// Creates a `width × height` board filled from `generator`.
    ///
    /// The generator is called once per cell, row 0 left to right first, then
    /// row 1, and so on. The initial layout may contain runs; use
    /// [`settle`](Self::settle) to clear them.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    #[must_use]
    pub fn create(generator: &SharedGenerator<G>, width: usize, height: usize) -> Self {
        let mut grid = Grid::new(width, height);
        for pos in grid.positions() {
            grid.set(pos, generator.next_tile());
        }
        log::debug!("created {width}x{height} board");
        Self::from_grid(generator, grid)
    }

    /// Wraps an existing grid, empty cells included.
    #[must_use]
    pub fn from_grid(generator: &SharedGenerator<G>, grid: Grid<G::Tile>) -> Self {
        Self {
            generator: generator.clone(),
            grid,
            options: EngineOptions::default(),
        }
    }

    /// Replaces the options of this board and of every board derived from it.
    #[must_use]
    pub fn with_options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns a board sharing this board's generator and options.
    pub(crate) fn with_grid(&self, grid: Grid<G::Tile>) -> Self {
        Self {
            generator: self.generator.clone(),
            grid,
            options: self.options,
        }
    }

    /// Returns the options in effect.
    #[must_use]
    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// Returns the shared generator handle.
    #[must_use]
    pub fn generator(&self) -> &SharedGenerator<G> {
        &self.generator
    }

    /// Returns the underlying grid.
    #[must_use]
    pub fn grid(&self) -> &Grid<G::Tile> {
        &self.grid
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Returns the tile at `pos`.
    ///
    /// Returns `None` for empty cells and for positions outside the board.
    #[must_use]
    pub fn piece(&self, pos: Position) -> Option<&G::Tile> {
        self.grid.get(pos)
    }

    /// Returns every position of the board in row-major order.
    #[must_use]
    pub fn positions(&self) -> Positions {
        self.grid.positions()
    }
}

impl<G> Board<G>
where
    G: TileGenerator,
    G::Tile: Clone,
{
    /// Returns a board with every empty cell filled from the generator.
    ///
    /// Cells are filled bottom row first, left to right within a row. Tiles are
    /// not moved and runs are not resolved.
    ///
    /// # Example
    ///
    /// ```
    /// use tumble_core::Grid;
    /// use tumble_engine::Board;
    /// use tumble_generator::{SequenceGenerator, SharedGenerator};
    ///
    /// let generator = SharedGenerator::new(SequenceGenerator::new("xyz".chars()));
    /// let grid: Grid<char> = "A.\n.B".parse()?;
    /// let board = Board::from_grid(&generator, grid);
    ///
    /// let refilled = board.refill();
    /// assert_eq!(refilled.grid().to_string(), "Ay\nxB");
    /// // The original board is unchanged
    /// assert_eq!(board.grid().to_string(), "A.\n.B");
    /// # Ok::<(), tumble_core::GridParseError>(())
    /// ```
    #[must_use]
    pub fn refill(&self) -> Self {
        let mut grid = self.grid.clone();
        let filled = grid.fill_empty_with(|| self.generator.next_tile());
        log::trace!("refilled {filled} cells");
        self.with_grid(grid)
    }
}

impl<G> Clone for Board<G>
where
    G: TileGenerator,
    G::Tile: Clone,
{
    fn clone(&self) -> Self {
        self.with_grid(self.grid.clone())
    }
}

impl<G> Debug for Board<G>
where
    G: TileGenerator + Debug,
    G::Tile: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("generator", &self.generator)
            .field("grid", &self.grid)
            .field("options", &self.options)
            .finish()
    }
}
