//! Move validation and hint search.

use tumble_core::{Compass, Grid, Position};
use tumble_generator::TileGenerator;

use crate::{Board, matching::any_matching_at};

/// A swap of the tiles at two positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("{first} <-> {second}")]
pub struct Move {
    /// The first position of the swap.
    pub first: Position,
    /// The second position of the swap.
    pub second: Position,
}

impl Move {
    /// Creates a move swapping `first` and `second`.
    #[must_use]
    #[inline]
    pub const fn new(first: Position, second: Position) -> Self {
        Self { first, second }
    }

    /// Returns `true` if the two positions are direct neighbours.
    #[must_use]
    pub fn is_adjacent(self) -> bool {
        self.first.is_adjacent_to(self.second)
    }
}

/// Swaps two cells of `grid`, checks for a run at either one, and swaps back.
fn swap_makes_match<T>(grid: &mut Grid<T>, first: Position, second: Position) -> bool
where
    T: PartialEq,
{
    grid.swap(first, second);
    let found =
        any_matching_at(grid, first).is_match() || any_matching_at(grid, second).is_match();
    grid.swap(first, second);
    found
}

impl<G> Board<G>
where
    G: TileGenerator,
    G::Tile: Clone + PartialEq,
{
    /// Returns `true` if swapping `first` and `second` is a legal move.
    ///
    /// A move is legal when both positions hold a tile, they share a row or a
    /// column (they need not be neighbours), and the swap puts at least one of
    /// the two tiles into a run. Runs elsewhere on the board do not make a
    /// swap legal. The board itself is never modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use tumble_core::{Grid, Position};
    /// use tumble_engine::Board;
    /// use tumble_generator::{SequenceGenerator, SharedGenerator};
    ///
    /// let generator = SharedGenerator::new(SequenceGenerator::new("xyz".chars()));
    /// let grid: Grid<char> = "
    ///     ABAA
    ///     CDEF
    /// "
    /// .parse()?;
    /// let board = Board::from_grid(&generator, grid);
    ///
    /// assert!(board.can_move(Position::new(0, 0), Position::new(0, 1)));
    /// assert!(!board.can_move(Position::new(0, 0), Position::new(1, 0)));
    /// // Diagonal swaps are never legal
    /// assert!(!board.can_move(Position::new(0, 1), Position::new(1, 0)));
    /// # Ok::<(), tumble_core::GridParseError>(())
    /// ```
    #[must_use]
    pub fn can_move(&self, first: Position, second: Position) -> bool {
        if self.piece(first).is_none() || self.piece(second).is_none() {
            return false;
        }
        if !first.is_aligned_with(second) {
            return false;
        }
        let mut grid = self.grid().clone();
        swap_makes_match(&mut grid, first, second)
    }

    /// Returns every legal move, with `first < second`, sorted row-major.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut grid = self.grid().clone();
        let mut moves = vec![];
        for line in self.grid().lines() {
            let occupied = self
                .grid()
                .line_positions(line)
                .filter(|&pos| self.piece(pos).is_some())
                .collect::<Vec<_>>();
            for (i, &first) in occupied.iter().enumerate() {
                for &second in &occupied[i + 1..] {
                    if swap_makes_match(&mut grid, first, second) {
                        moves.push(Move::new(first, second));
                    }
                }
            }
        }
        moves.sort_unstable();
        moves
    }

    /// Returns a legal move, if any exists.
    ///
    /// Swaps between direct neighbours are preferred, scanning the board
    /// row-major and trying the eastern neighbour before the southern one.
    #[must_use]
    pub fn find_move(&self) -> Option<Move> {
        let adjacent = self.positions().find_map(|pos| {
            [Compass::East, Compass::South]
                .into_iter()
                .map(|direction| pos.step(direction))
                .find(|&other| self.can_move(pos, other))
                .map(|other| Move::new(pos, other))
        });
        adjacent.or_else(|| self.legal_moves().into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use tumble_generator::{SequenceGenerator, SharedGenerator};

    use super::*;

    fn parse_board(s: &str) -> Board<SequenceGenerator<char>> {
        let generator = SharedGenerator::new(SequenceGenerator::new("xyz".chars()));
        Board::from_grid(&generator, s.parse().unwrap())
    }

    #[test]
    fn test_adjacent_swap_creating_run() {
        let board = parse_board(
            "
            ABCD
            BCAD
            AADC
        ",
        );
        // (1, 2) 'A' into (2, 2) completes "AAA" in row 2
        assert!(board.can_move(Position::new(1, 2), Position::new(2, 2)));
        assert!(board.can_move(Position::new(2, 2), Position::new(1, 2)));
        // (2, 2) 'D' into (2, 3) completes a column of 'D's
        assert!(board.can_move(Position::new(2, 2), Position::new(2, 3)));
        assert!(!board.can_move(Position::new(0, 0), Position::new(0, 1)));
    }

    #[test]
    fn test_swap_without_new_run_is_illegal() {
        let board = parse_board(
            "
            ABCD
            BCDA
            CDAB
            DABC
        ",
        );
        for pos in board.positions() {
            for direction in Compass::ALL {
                assert!(!board.can_move(pos, pos.step(direction)));
            }
        }
        assert!(board.legal_moves().is_empty());
        assert_eq!(board.find_move(), None);
    }

    #[test]
    fn test_existing_run_does_not_legalize_swap() {
        let board = parse_board(
            "
            ABCD
            ACDB
            ADBC
            CBDA
        ",
        );
        assert!(!board.can_move(Position::new(3, 0), Position::new(3, 1)));
    }

    #[test]
    fn test_non_adjacent_swap_in_line() {
        let board = parse_board(
            "
            BCDEB
            CDEBC
            AAXYA
        ",
        );
        assert!(board.can_move(Position::new(2, 2), Position::new(2, 4)));
        assert!(board.can_move(Position::new(2, 4), Position::new(2, 2)));
        // Neither neighbour of (2, 2) brings an 'A' in
        assert!(!board.can_move(Position::new(2, 2), Position::new(2, 3)));
    }

    #[test]
    fn test_diagonal_and_identical_positions() {
        let board = parse_board(
            "
            ABAA
            BAAB
        ",
        );
        assert!(!board.can_move(Position::new(0, 1), Position::new(1, 0)));
        assert!(!board.can_move(Position::new(1, 1), Position::new(0, 0)));
        for pos in board.positions() {
            assert!(!board.can_move(pos, pos));
        }
    }

    #[test]
    fn test_empty_and_out_of_bounds_positions() {
        let board = parse_board(
            "
            A.AA
            BBCB
        ",
        );
        assert!(!board.can_move(Position::new(0, 1), Position::new(0, 0)));
        assert!(!board.can_move(Position::new(0, 3), Position::new(0, 4)));
        assert!(!board.can_move(Position::new(-1, 0), Position::new(0, 0)));
    }

    #[test]
    fn test_can_move_does_not_modify_board() {
        let board = parse_board(
            "
            ABAA
            CDEF
        ",
        );
        let before = board.grid().clone();
        assert!(board.can_move(Position::new(0, 0), Position::new(0, 1)));
        assert_eq!(board.grid(), &before);
        let _ = board.legal_moves();
        assert_eq!(board.grid(), &before);
    }

    #[test]
    fn test_legal_moves_sorted_and_consistent() {
        let board = parse_board(
            "
            ABAC
            DABD
            BCAD
        ",
        );
        let moves = board.legal_moves();
        assert!(!moves.is_empty());
        assert!(moves.windows(2).all(|w| w[0] < w[1]));
        for mv in &moves {
            assert!(mv.first < mv.second);
            assert!(board.can_move(mv.first, mv.second));
        }
        for first in board.positions() {
            for second in board.positions() {
                if first < second && board.can_move(first, second) {
                    assert!(moves.contains(&Move::new(first, second)));
                }
            }
        }
    }

    #[test]
    fn test_find_move_prefers_neighbours() {
        let board = parse_board(
            "
            BCDEB
            CDEBC
            AAXYA
            CDEBC
        ",
        );
        // The only legal move is the distant swap
        let mv = board.find_move().unwrap();
        assert_eq!(mv, Move::new(Position::new(2, 2), Position::new(2, 4)));
        assert!(!mv.is_adjacent());

        let board = parse_board(
            "
            ABAA
            CDEF
        ",
        );
        let mv = board.find_move().unwrap();
        assert_eq!(mv, Move::new(Position::new(0, 0), Position::new(0, 1)));
        assert!(mv.is_adjacent());
    }

    #[test]
    fn test_move_display() {
        let mv = Move::new(Position::new(1, 2), Position::new(1, 3));
        assert_eq!(mv.to_string(), "(1, 2) <-> (1, 3)");
    }
}
