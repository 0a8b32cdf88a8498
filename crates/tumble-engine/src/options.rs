/// Default maximum number of cascade passes in a single call.
pub const DEFAULT_CASCADE_LIMIT: usize = 256;

/// Upper bound on the number of cascade passes a single move may trigger.
///
/// The engine trusts the generator to eventually produce a quiescent board.
/// A generator that keeps recreating runs would cascade forever; the limit
/// turns that into [`EngineError::CascadeLimitExceeded`](crate::EngineError::CascadeLimitExceeded).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum CascadeLimit {
    /// Cascade until the board settles, however long it takes.
    Unbounded,
    /// Fail once this many passes have run without settling.
    AtMost(usize),
}

impl Default for CascadeLimit {
    fn default() -> Self {
        Self::AtMost(DEFAULT_CASCADE_LIMIT)
    }
}

impl CascadeLimit {
    /// Returns the pass limit if one is set and `passes` has reached it.
    #[must_use]
    #[inline]
    pub const fn reached(self, passes: usize) -> Option<usize> {
        match self {
            Self::AtMost(limit) if passes >= limit => Some(limit),
            Self::AtMost(_) | Self::Unbounded => None,
        }
    }
}

/// Options controlling board operations.
///
/// Options are stored on a [`Board`](crate::Board) and inherited by every
/// board derived from it.
///
/// # Examples
///
/// ```
/// use tumble_engine::{CascadeLimit, EngineOptions};
///
/// let options = EngineOptions::default().cascade_limit(CascadeLimit::AtMost(16));
/// assert_eq!(options.cascade_limit, CascadeLimit::AtMost(16));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineOptions {
    /// Limit on cascade passes per move.
    pub cascade_limit: CascadeLimit,
}

impl EngineOptions {
    /// Sets the cascade limit.
    #[must_use]
    pub fn cascade_limit(mut self, cascade_limit: CascadeLimit) -> Self {
        self.cascade_limit = cascade_limit;
        self
    }
}
