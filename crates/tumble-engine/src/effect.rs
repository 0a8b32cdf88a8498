use std::fmt::{self, Debug};

use tumble_core::{Axis, Position};
use tumble_generator::TileGenerator;

use crate::Board;

/// A run of identical tiles that was removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Match<T> {
    tile: T,
    axis: Axis,
    positions: Vec<Position>,
}

impl<T> Match<T> {
    pub(crate) fn new(tile: T, axis: Axis, positions: Vec<Position>) -> Self {
        Self {
            tile,
            axis,
            positions,
        }
    }

    /// Returns the tile value shared by the run.
    #[must_use]
    pub fn tile(&self) -> &T {
        &self.tile
    }

    /// Returns the orientation of the run.
    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Returns the run's positions in forward order (west to east or north to south).
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Returns the number of tiles in the run.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if the run has no positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// One observable step of a cascade, reported for presentation.
///
/// Each cascade pass reports one [`Effect::Match`] per removed run followed
/// by a single [`Effect::Refill`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Effect<T> {
    /// A run was matched and its tiles removed.
    Match(Match<T>),
    /// Removed tiles were compacted by gravity and empty cells refilled.
    Refill,
}

impl<T> Effect<T> {
    /// Returns the match if this is a [`Effect::Match`].
    #[must_use]
    pub fn as_match(&self) -> Option<&Match<T>> {
        match self {
            Self::Match(m) => Some(m),
            Self::Refill => None,
        }
    }
}

/// The outcome of a move: the resulting board and everything that happened.
pub struct MoveResult<G>
where
    G: TileGenerator,
{
    /// The board after all cascades settled.
    pub board: Board<G>,
    /// Effects in chronological order. Empty when the move was rejected.
    pub effects: Vec<Effect<G::Tile>>,
}

impl<G> MoveResult<G>
where
    G: TileGenerator,
{
    pub(crate) fn unchanged(board: Board<G>) -> Self {
        Self {
            board,
            effects: Vec::new(),
        }
    }

    /// Returns `true` if nothing happened.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.effects.is_empty()
    }

    /// Returns the number of cascade passes (one per refill).
    #[must_use]
    pub fn cascade_count(&self) -> usize {
        self.effects.iter().filter(|e| e.is_refill()).count()
    }

    /// Returns every removed run in chronological order.
    pub fn matches(&self) -> impl Iterator<Item = &Match<G::Tile>> + '_ {
        self.effects.iter().filter_map(Effect::as_match)
    }
}

impl<G> Debug for MoveResult<G>
where
    G: TileGenerator + Debug,
    G::Tile: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MoveResult")
            .field("board", &self.board)
            .field("effects", &self.effects)
            .finish()
    }
}
