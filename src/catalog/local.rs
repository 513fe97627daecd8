//! In-memory catalog backend for testing and development.

use super::{CatalogError, CatalogProvider};
use crate::api::Course;
use async_trait::async_trait;
use std::fs;
use std::path::Path;

/// Catalog provider serving a fixed in-memory snapshot.
///
/// Used by tests and the CLI; the production deployment points the engine
/// at the platform's course service instead.
#[derive(Debug, Clone, Default)]
pub struct LocalCatalogProvider {
    courses: Vec<Course>,
}

impl LocalCatalogProvider {
    /// Create a provider over an already-loaded snapshot.
    pub fn new(courses: Vec<Course>) -> Self {
        LocalCatalogProvider { courses }
    }

    /// Load a snapshot from a JSON array of course records.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let courses: Vec<Course> = serde_json::from_str(json)
            .map_err(|e| CatalogError::Malformed(format!("invalid course JSON: {}", e)))?;
        Ok(LocalCatalogProvider::new(courses))
    }

    /// Load a snapshot from a JSON file on disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            CatalogError::Unavailable(format!(
                "cannot read catalog file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_json_str(&content)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

#[async_trait]
impl CatalogProvider for LocalCatalogProvider {
    async fn fetch_catalog(&self) -> Result<Vec<Course>, CatalogError> {
        Ok(self.courses.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::LocalCatalogProvider;
    use crate::catalog::{CatalogError, CatalogProvider};

    #[tokio::test]
    async fn test_fetch_returns_snapshot() {
        let provider = LocalCatalogProvider::from_json_str(
            r#"[{"id": "CS101", "credits": 3, "times": [{"day": 0, "start": 9.0, "end": 10.5}]}]"#,
        )
        .unwrap();
        let catalog = provider.fetch_catalog().await.unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].id.value(), "CS101");
        assert_eq!(catalog[0].times[0].start, 9.0);
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let err = LocalCatalogProvider::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let err = LocalCatalogProvider::from_file("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, CatalogError::Unavailable(_)));
    }
}
