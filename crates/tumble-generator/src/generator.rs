/// A source of new tiles.
///
/// The engine calls [`next_tile`](Self::next_tile) exactly once for every cell
/// it creates, in a documented deterministic order. Implementations may be
/// stateful and return anything; no distribution is assumed.
///
/// # Examples
///
/// ```
/// use tumble_generator::TileGenerator;
///
/// struct Alternating(bool);
///
/// impl TileGenerator for Alternating {
///     type Tile = char;
///
///     fn next_tile(&mut self) -> char {
///         self.0 = !self.0;
///         if self.0 { 'X' } else { 'O' }
///     }
/// }
///
/// let mut generator = Alternating(false);
/// assert_eq!(generator.next_tile(), 'X');
/// assert_eq!(generator.next_tile(), 'O');
/// ```
pub trait TileGenerator {
    /// The tile type produced.
    type Tile;

    /// Produces the next tile.
    fn next_tile(&mut self) -> Self::Tile;
}

/// A generator that cycles through a fixed list of tiles.
///
/// # Examples
///
/// ```
/// use tumble_generator::{SequenceGenerator, TileGenerator as _};
///
/// let mut generator = SequenceGenerator::new("AB".chars());
/// assert_eq!(generator.next_tile(), 'A');
/// assert_eq!(generator.next_tile(), 'B');
/// assert_eq!(generator.next_tile(), 'A');
/// assert_eq!(generator.produced(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceGenerator<T> {
    tiles: Vec<T>,
    produced: usize,
}

impl<T> SequenceGenerator<T> {
    /// Creates a generator that repeats `tiles` forever.
    ///
    /// # Panics
    ///
    /// Panics if `tiles` is empty.
    #[must_use]
    pub fn new<I>(tiles: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let tiles = tiles.into_iter().collect::<Vec<_>>();
        assert!(!tiles.is_empty(), "tile sequence must not be empty");
        Self { tiles, produced: 0 }
    }

    /// Returns how many tiles have been produced so far.
    #[must_use]
    pub fn produced(&self) -> usize {
        self.produced
    }
}

impl<T> TileGenerator for SequenceGenerator<T>
where
    T: Clone,
{
    type Tile = T;

    fn next_tile(&mut self) -> T {
        let tile = self.tiles[self.produced % self.tiles.len()].clone();
        self.produced += 1;
        tile
    }
}

/// A generator backed by a closure.
///
/// Created by [`from_fn`].
#[derive(Debug, Clone)]
pub struct FnGenerator<F> {
    next: F,
}

/// Creates a generator that calls `next` for every tile.
///
/// # Examples
///
/// ```
/// use tumble_generator::{TileGenerator as _, from_fn};
///
/// let mut n = 0;
/// let mut generator = from_fn(move || {
///     n += 1;
///     n
/// });
/// assert_eq!(generator.next_tile(), 1);
/// assert_eq!(generator.next_tile(), 2);
/// ```
pub fn from_fn<T, F>(next: F) -> FnGenerator<F>
where
    F: FnMut() -> T,
{
    FnGenerator { next }
}

impl<T, F> TileGenerator for FnGenerator<F>
where
    F: FnMut() -> T,
{
    type Tile = T;

    fn next_tile(&mut self) -> T {
        (self.next)()
    }
}
