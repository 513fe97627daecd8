//! Error types for the scheduling engine.
//!
//! Only conditions the caller or the platform must react to are errors.
//! Infeasibility and per-solve timeouts are ordinary outcomes and surface
//! through the response status instead.

use crate::catalog::CatalogError;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Error type for timetable generation.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Caller-fixable request problems, rejected before model construction:
    /// an empty selection list, or a catalog record with malformed
    /// time-block data.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The course catalog provider is unreachable or returned malformed
    /// data. Always short-circuits before any solving begins.
    #[error("course catalog unavailable: {0}")]
    CatalogUnavailable(#[from] CatalogError),

    /// Unexpected runtime failure (e.g. a solve worker died).
    #[error("internal error: {0}")]
    Internal(String),
}

impl EngineError {
    /// Create an invalid-request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        EngineError::InvalidRequest(message.into())
    }

    /// Whether the error is the caller's to fix (HTTP 400 class) rather
    /// than an upstream availability problem (HTTP 502 class).
    pub fn is_bad_request(&self) -> bool {
        matches!(self, EngineError::InvalidRequest(_))
    }
}
