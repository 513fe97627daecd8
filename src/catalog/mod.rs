//! Course catalog provider port.
//!
//! The engine consumes normalized course records; fetching and normalizing
//! raw registrar data (time-string parsing, day-label mapping) is the
//! upstream catalog service's responsibility. This module defines the port
//! the engine talks to and the error class for upstream failures, which
//! always short-circuit before any solving begins.

use crate::api::Course;
use async_trait::async_trait;

#[cfg(feature = "local-catalog")]
mod local;

#[cfg(feature = "local-catalog")]
pub use local::LocalCatalogProvider;

/// Error type for catalog provider operations.
///
/// Both variants are a distinct failure class from modeling errors: the
/// scheduler is never invoked when the catalog cannot be trusted.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog service could not be reached.
    #[error("catalog service unavailable: {0}")]
    Unavailable(String),

    /// The catalog service responded with data the engine cannot use.
    #[error("catalog data malformed: {0}")]
    Malformed(String),
}

/// Port for fetching the course catalog snapshot of one request.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch all course offerings, normalized to weekday indices and
    /// fractional-hour time bounds.
    async fn fetch_catalog(&self) -> Result<Vec<Course>, CatalogError>;
}
