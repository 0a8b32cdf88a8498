use std::{cell::RefCell, rc::Rc};

use crate::TileGenerator;

/// A shared handle to a single generator.
///
/// Boards hold their generator through this handle. Cloning the handle never
/// clones the generator: every clone draws from the same underlying state, so
/// successive boards continue the same tile sequence.
///
/// The handle is single-threaded (`!Send`). Hosts that simulate boards in
/// parallel create one generator per thread.
///
/// # Examples
///
/// ```
/// use tumble_generator::{SequenceGenerator, SharedGenerator};
///
/// let shared = SharedGenerator::new(SequenceGenerator::new("ABC".chars()));
/// let other = shared.clone();
///
/// assert_eq!(shared.next_tile(), 'A');
/// assert_eq!(other.next_tile(), 'B');
/// assert!(shared.ptr_eq(&other));
/// assert_eq!(shared.with(|generator| generator.produced()), 2);
/// ```
#[derive(Debug)]
pub struct SharedGenerator<G> {
    inner: Rc<RefCell<G>>,
}

impl<G> SharedGenerator<G> {
    /// Wraps `generator` in a new shared handle.
    #[must_use]
    pub fn new(generator: G) -> Self {
        Self {
            inner: Rc::new(RefCell::new(generator)),
        }
    }

    /// Runs `f` with a shared borrow of the generator.
    ///
    /// Useful for inspecting generator state such as a seed or a call count.
    pub fn with<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&G) -> R,
    {
        f(&self.inner.borrow())
    }

    /// Returns `true` if both handles point to the same generator.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<G> SharedGenerator<G>
where
    G: TileGenerator,
{
    /// Produces the next tile from the shared generator.
    pub fn next_tile(&self) -> G::Tile {
        self.inner.borrow_mut().next_tile()
    }
}

impl<G> Clone for SharedGenerator<G> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}
