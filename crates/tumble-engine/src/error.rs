/// Errors returned by board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EngineError {
    /// The board was still producing matches after the configured number of
    /// cascade passes.
    #[display("cascade did not settle within {limit} passes")]
    CascadeLimitExceeded {
        /// The configured limit.
        limit: usize,
    },
}
