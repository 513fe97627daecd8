//! Timetable plan orchestration.
//!
//! Runs the full pipeline for one request: validate the inputs, resolve the
//! student's picks into the fixed set once, then solve the model three
//! times under different seeds to produce three labeled candidate plans.
//! The three solves share nothing but read-only inputs and run concurrently
//! on the blocking pool; the orchestrator waits for all of them before
//! assembling the response.

use crate::api::{Course, CourseId, PlanSet, Preferences, ScheduleRequest, ScheduleResponse};
use crate::catalog::{CatalogError, CatalogProvider};
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::services::fixed_selection::resolve_fixed_selection;
use crate::services::scoring::score_catalog;
use crate::services::telemetry::{RequestTracker, SolveRecord, SolveStatus};
use crate::solver::{BranchAndBound, ConstraintModel, Optimizer, SolveOutcome};
use sha2::{Digest, Sha256};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Seeds of the three solves, in plan order.
pub const PLAN_SEEDS: [u64; 3] = [10, 20, 30];

/// Response labels, matching [`PLAN_SEEDS`] by position.
pub const PLAN_LABELS: [&str; 3] = ["PLAN A", "PLAN B", "PLAN C"];

const INFEASIBLE_MESSAGE: &str =
    "No feasible timetable could be generated for the requested constraints. \
     Try adjusting the credit range.";

/// Handle one timetable generation request end to end.
///
/// Fetches the catalog snapshot from the provider, rejects empty selections
/// and malformed snapshots, then delegates to [`generate_plans`]. Provider
/// failures surface as [`EngineError::CatalogUnavailable`] before any
/// solving begins.
pub async fn schedule_request(
    provider: &dyn CatalogProvider,
    request: &ScheduleRequest,
    config: &EngineConfig,
    tracker: &RequestTracker,
) -> EngineResult<ScheduleResponse> {
    let catalog = provider.fetch_catalog().await?;
    if let Err(reason) = validate_catalog(&catalog) {
        return Err(CatalogError::Malformed(reason).into());
    }
    if request.selected_course_ids.is_empty() {
        return Err(EngineError::invalid_request(
            "at least one course must be selected",
        ));
    }
    generate_plans(
        catalog,
        &request.selected_course_ids,
        &request.preferences,
        config,
        tracker,
    )
    .await
}

/// Produce the three labeled plans for an already-loaded catalog snapshot.
///
/// The fixed set is resolved once; each seed then gets its own scoring pass
/// and its own solver run with the configured wall-clock budget. Overall
/// success is gated solely on PLAN A being non-empty; PLAN B and PLAN C may
/// come back empty without affecting the reported status.
pub async fn generate_plans(
    catalog: Vec<Course>,
    selected_ids: &[CourseId],
    preferences: &Preferences,
    config: &EngineConfig,
    tracker: &RequestTracker,
) -> EngineResult<ScheduleResponse> {
    validate_catalog(&catalog).map_err(EngineError::InvalidRequest)?;

    let checksum = catalog_checksum(&catalog);
    let request_id = tracker.start_request(checksum.as_str());
    info!(
        request_id = %request_id,
        catalog_checksum = %checksum,
        courses = catalog.len(),
        "starting timetable generation"
    );

    let resolved = resolve_fixed_selection(&catalog, selected_ids);
    for dropped in &resolved.dropped {
        // Distinct from solver infeasibility: the pick never reached the model
        warn!(
            request_id = %request_id,
            course_id = %dropped.course_id,
            reason = %dropped.reason,
            "selection dropped during resolution"
        );
        tracker.record_drop(&request_id, dropped.clone());
    }

    let catalog = Arc::new(catalog);
    let fixed = Arc::new(resolved.fixed);
    let preferences = Arc::new(preferences.clone());

    let jobs: Vec<(u64, &'static str)> =
        PLAN_SEEDS.iter().copied().zip(PLAN_LABELS).collect();
    let mut plans: Vec<Vec<Course>> = Vec::with_capacity(jobs.len());

    for batch in jobs.chunks(config.max_parallel_solves.max(1)) {
        let handles: Vec<_> = batch
            .iter()
            .map(|&(seed, label)| {
                let catalog = Arc::clone(&catalog);
                let fixed = Arc::clone(&fixed);
                let preferences = Arc::clone(&preferences);
                let budget = config.solve_timeout();
                tokio::task::spawn_blocking(move || {
                    let started = Instant::now();
                    let scores = score_catalog(&catalog, &fixed, &preferences, seed);
                    let model = ConstraintModel::build(&catalog, &fixed, scores, &preferences);
                    let outcome = BranchAndBound::with_budget(budget).solve(&model);
                    (seed, label, outcome, started.elapsed())
                })
            })
            .collect();

        for joined in futures::future::join_all(handles).await {
            let (seed, label, outcome, elapsed) = joined
                .map_err(|e| EngineError::Internal(format!("solve worker failed: {}", e)))?;

            let plan: Vec<Course> = outcome
                .selection()
                .iter()
                .map(|&i| catalog[i].clone())
                .collect();
            match &outcome {
                SolveOutcome::Optimal(_) => info!(
                    request_id = %request_id,
                    label,
                    seed,
                    courses = plan.len(),
                    elapsed_ms = elapsed.as_millis() as u64,
                    "solve finished"
                ),
                SolveOutcome::Infeasible => info!(
                    request_id = %request_id,
                    label,
                    seed,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "solve proved infeasible"
                ),
                SolveOutcome::TimedOut => warn!(
                    request_id = %request_id,
                    label,
                    seed,
                    budget_ms = config.solve_timeout_ms,
                    "solve exceeded its time budget, reporting no plan"
                ),
            }
            tracker.record_solve(
                &request_id,
                SolveRecord {
                    label: label.to_string(),
                    seed,
                    status: SolveStatus::from(&outcome),
                    duration_ms: elapsed.as_millis() as u64,
                    plan_size: plan.len(),
                },
            );
            plans.push(plan);
        }
    }

    let mut plans = plans.into_iter();
    let data = PlanSet {
        plan_a: plans.next().unwrap_or_default(),
        plan_b: plans.next().unwrap_or_default(),
        plan_c: plans.next().unwrap_or_default(),
    };

    if data.plan_a.is_empty() {
        info!(request_id = %request_id, "no feasible primary plan");
        return Ok(ScheduleResponse::Fail {
            message: INFEASIBLE_MESSAGE.to_string(),
        });
    }
    Ok(ScheduleResponse::Success { data })
}

/// Reject catalog records the model cannot represent.
pub(crate) fn validate_catalog(catalog: &[Course]) -> Result<(), String> {
    for course in catalog {
        for block in &course.times {
            if block.day > 6 {
                return Err(format!(
                    "course {}: weekday index {} out of range",
                    course.id, block.day
                ));
            }
            if !(block.start < block.end) {
                return Err(format!(
                    "course {}: time block must start before it ends ({} >= {})",
                    course.id, block.start, block.end
                ));
            }
        }
    }
    Ok(())
}

/// SHA-256 fingerprint of the catalog snapshot, for logs and telemetry.
pub(crate) fn catalog_checksum(catalog: &[Course]) -> String {
    let mut hasher = Sha256::new();
    for course in catalog {
        hasher.update(course.id.value().as_bytes());
        hasher.update([0u8]);
        hasher.update(course.credits.to_le_bytes());
        for block in &course.times {
            hasher.update([block.day]);
            hasher.update(block.start.to_le_bytes());
            hasher.update(block.end.to_le_bytes());
        }
    }
    hex::encode(hasher.finalize())
}
