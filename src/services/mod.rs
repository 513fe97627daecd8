//! Service layer for business logic and orchestration.
//!
//! Services sit between the catalog port and the solver: they resolve the
//! student's explicit picks, compute objective coefficients, and run the
//! seeded solves that produce the final plans.

pub mod conflict;
pub mod fixed_selection;
pub mod plan_service;
pub mod scoring;
pub mod telemetry;

pub use fixed_selection::{resolve_fixed_selection, ResolvedSelection};
pub use plan_service::{generate_plans, schedule_request};
pub use telemetry::RequestTracker;

#[cfg(test)]
mod scoring_tests;
