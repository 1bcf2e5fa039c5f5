//! Error types for the Trivium domain.
//!
//! Uses `thiserror` for ergonomic error definitions. The remote adapter has
//! its own error enum so the engine's fallback decision is an explicit
//! branch on error kind rather than a blanket catch.

use thiserror::Error;

/// The top-level error type for Trivium engine operations.
///
/// Callers working fully offline never see an error at all: the engine
/// absorbs [`RemoteError::Unavailable`] by falling back to local
/// processing. What can escape is a protocol mismatch
/// ([`RemoteError::Malformed`]) or a bad pattern name.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown pattern: {0}")]
    UnknownPattern(String),

    #[error("Remote service error: {0}")]
    Remote(#[from] RemoteError),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures reported by the remote lens service adapter.
///
/// Every failure mode of the three wire calls collapses into one of these
/// two signals. `Clone` so mock services in tests can replay a stored error.
#[derive(Debug, Clone, Error)]
pub enum RemoteError {
    /// Transport failure, timeout, or non-2xx status. Always recoverable
    /// by falling back to local computation.
    #[error("Remote service unavailable: {0}")]
    Unavailable(String),

    /// A 2xx response whose body violates the expected shape or names a
    /// lens this client does not recognize. Not recoverable by fallback:
    /// client and service disagree on protocol, and local stub data must
    /// not paper over that.
    #[error("Malformed response from remote service: {0}")]
    Malformed(String),
}

impl RemoteError {
    /// Whether the engine may substitute local computation for this failure.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, RemoteError::Unavailable(_))
    }
}
