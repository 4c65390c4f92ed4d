use thiserror::Error;

use crate::safety::BlockedMatch;

#[derive(Error, Debug)]
pub enum LeadSignalError {
    /// Malformed or missing required input. Rejected before any network call.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Content-safety gate tripped for this resolution request.
    #[error("Blocked source: {} ({})", .0.reason, .0.matched)]
    Blocked(BlockedMatch),

    /// Missing or broken configuration (e.g. no search credentials).
    /// Fatal for the invocation: reported immediately, never degraded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The search/content provider was unreachable in a way that prevented
    /// any evidence gathering. Individual call failures are not this.
    #[error("Upstream unavailable: {0}")]
    Upstream(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
