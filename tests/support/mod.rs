//! Shared helpers for integration tests.
#![allow(dead_code)]

use crp_rust::api::{Course, CourseId, Preferences, TimeBlock};
use crp_rust::catalog::{CatalogError, CatalogProvider};
use async_trait::async_trait;

/// Build a course from compact block tuples `(day, start, end)`.
pub fn course(id: &str, credits: u32, blocks: &[(u8, f64, f64)]) -> Course {
    Course::new(
        id,
        credits,
        blocks
            .iter()
            .map(|&(d, s, e)| TimeBlock::new(d, s, e))
            .collect(),
    )
}

pub fn ids(raw: &[&str]) -> Vec<CourseId> {
    raw.iter().map(|s| CourseId::from(*s)).collect()
}

/// Preferences with an explicit credit window and everything else default.
pub fn prefs(min_credits: u32, max_credits: u32) -> Preferences {
    Preferences {
        min_credits,
        max_credits,
        ..Preferences::default()
    }
}

/// The scenario catalog used across flow tests: three 3-credit courses on
/// separate days, no overlaps.
pub fn weekday_catalog() -> Vec<Course> {
    vec![
        course("A", 3, &[(0, 9.0, 10.0)]),
        course("B", 3, &[(1, 9.0, 10.0)]),
        course("C", 3, &[(2, 9.0, 10.0)]),
    ]
}

/// A provider standing in for an unreachable upstream catalog service.
pub struct UnavailableProvider;

#[async_trait]
impl CatalogProvider for UnavailableProvider {
    async fn fetch_catalog(&self) -> Result<Vec<Course>, CatalogError> {
        Err(CatalogError::Unavailable("course service is down".to_string()))
    }
}
