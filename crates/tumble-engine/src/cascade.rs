//! Cascade resolution: remove runs, apply gravity, refill, repeat.

use std::collections::BTreeSet;

use tumble_core::{Grid, Position};
use tumble_generator::TileGenerator;

use crate::{
    Board, Effect, EngineError, MoveResult,
    matching::{find_match, runs_at},
};

impl<G> Board<G>
where
    G: TileGenerator,
    G::Tile: Clone + PartialEq,
{
    /// Swaps the tiles at `first` and `second` and resolves every cascade.
    ///
    /// An illegal move (see [`can_move`](Self::can_move)) returns the board
    /// unchanged with no effects. A legal move removes the runs through both
    /// swapped positions, lets the remaining tiles fall, refills the board
    /// from the generator, and repeats from the first run found in row-major
    /// order until no run is left.
    ///
    /// Each pass reports the removed runs, a run through both axes as a
    /// horizontal then a vertical [`Effect::Match`], followed by one
    /// [`Effect::Refill`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CascadeLimitExceeded`] if the board is still
    /// producing runs after the configured number of passes. The effects of
    /// the passes already run are discarded and this board is left unchanged,
    /// but the shared generator keeps every tile drawn for the refills, so
    /// repeating the call does not reproduce the same cascade.
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
    ///     BCA
    ///     AAB
    /// "
    /// .parse()?;
    /// let board = Board::from_grid(&generator, grid);
    ///
    /// let result = board.apply_move(Position::new(0, 2), Position::new(1, 2))?;
    /// assert_eq!(result.matches().count(), 1);
    /// assert_eq!(result.board.grid().to_string(), "xyz\nBCB");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn apply_move(
        &self,
        first: Position,
        second: Position,
    ) -> Result<MoveResult<G>, EngineError> {
        if !self.can_move(first, second) {
            log::debug!("rejected move {first} <-> {second}");
            return Ok(MoveResult::unchanged(self.clone()));
        }
        let mut grid = self.grid().clone();
        grid.swap(first, second);
        self.cascade(grid, vec![first, second])
    }

    /// Resolves every run already on the board.
    ///
    /// Useful right after [`create`](Self::create), whose layout may contain
    /// runs. A board without runs is returned unchanged with no effects.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CascadeLimitExceeded`] if the board is still
    /// producing runs after the configured number of passes. The effects of
    /// the passes already run are discarded and this board is left unchanged,
    /// but the shared generator keeps every tile drawn for the refills, so
    /// repeating the call does not reproduce the same cascade.
    pub fn settle(&self) -> Result<MoveResult<G>, EngineError> {
        let Some(seed) = find_match(self.grid()) else {
            return Ok(MoveResult::unchanged(self.clone()));
        };
        self.cascade(self.grid().clone(), vec![seed])
    }

    fn cascade(
        &self,
        mut grid: Grid<G::Tile>,
        mut seeds: Vec<Position>,
    ) -> Result<MoveResult<G>, EngineError> {
        let mut effects = vec![];
        let mut passes = 0;

        loop {
            let mut pending = BTreeSet::new();
            for &seed in &seeds {
                for run in runs_at(&grid, seed) {
                    if run.positions().iter().all(|pos| pending.contains(pos)) {
                        continue;
                    }
                    log::trace!(
                        "pass {passes}: {} run of {} at {}",
                        run.axis(),
                        run.len(),
                        run.positions()[0]
                    );
                    pending.extend(run.positions().iter().copied());
                    effects.push(Effect::Match(run));
                }
            }
            if pending.is_empty() {
                break;
            }
            if let Some(limit) = self.options().cascade_limit.reached(passes) {
                log::debug!("cascade still active after {limit} passes");
                return Err(EngineError::CascadeLimitExceeded { limit });
            }
            passes += 1;

            for &pos in &pending {
                grid.take(pos);
            }
            effects.push(Effect::Refill);
            grid.collapse();
            let filled = grid.fill_empty_with(|| self.generator().next_tile());
            log::trace!("pass {passes}: removed {} tiles, refilled {filled}", pending.len());

            match find_match(&grid) {
                Some(seed) => seeds = vec![seed],
                None => break,
            }
        }

        log::debug!(
            "cascade settled after {passes} passes with {} effects",
            effects.len()
        );
        Ok(MoveResult {
            board: self.with_grid(grid),
            effects,
        })
    }
}
