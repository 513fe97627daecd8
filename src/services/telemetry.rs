//! Per-request tracing for timetable generation.
//!
//! This module provides a simple in-memory trace store that records what
//! happened to each request: which picks the resolver dropped (and why) and
//! how each seeded solve ended. Resolution drops and solver infeasibility
//! are separate record kinds so operators can tell them apart when a
//! student asks where a course went.

use crate::services::fixed_selection::DroppedSelection;
use crate::solver::SolveOutcome;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Terminal state of one seeded solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveStatus {
    Optimal,
    Infeasible,
    TimedOut,
}

impl From<&SolveOutcome> for SolveStatus {
    fn from(outcome: &SolveOutcome) -> Self {
        match outcome {
            SolveOutcome::Optimal(_) => SolveStatus::Optimal,
            SolveOutcome::Infeasible => SolveStatus::Infeasible,
            SolveOutcome::TimedOut => SolveStatus::TimedOut,
        }
    }
}

/// Record of one seeded solve within a request.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SolveRecord {
    pub label: String,
    pub seed: u64,
    pub status: SolveStatus,
    pub duration_ms: u64,
    pub plan_size: usize,
}

/// Everything recorded about one request.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RequestTrace {
    pub request_id: String,
    /// SHA-256 fingerprint of the catalog snapshot the request saw
    pub catalog_checksum: String,
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub dropped: Vec<DroppedSelection>,
    pub solves: Vec<SolveRecord>,
}

/// In-memory request trace store.
#[derive(Clone)]
pub struct RequestTracker {
    traces: Arc<RwLock<HashMap<String, RequestTrace>>>,
}

impl RequestTracker {
    /// Create a new tracker.
    pub fn new() -> Self {
        Self {
            traces: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Open a trace for a new request and return its ID.
    pub fn start_request(&self, catalog_checksum: impl Into<String>) -> String {
        let request_id = Uuid::new_v4().to_string();
        let trace = RequestTrace {
            request_id: request_id.clone(),
            catalog_checksum: catalog_checksum.into(),
            started_at: chrono::Utc::now(),
            dropped: Vec::new(),
            solves: Vec::new(),
        };
        self.traces.write().insert(request_id.clone(), trace);
        request_id
    }

    /// Record a pick dropped by the resolver.
    pub fn record_drop(&self, request_id: &str, drop: DroppedSelection) {
        let mut traces = self.traces.write();
        if let Some(trace) = traces.get_mut(request_id) {
            trace.dropped.push(drop);
        }
    }

    /// Record the outcome of one seeded solve.
    pub fn record_solve(&self, request_id: &str, record: SolveRecord) {
        let mut traces = self.traces.write();
        if let Some(trace) = traces.get_mut(request_id) {
            trace.solves.push(record);
        }
    }

    /// Get a trace by request ID.
    pub fn get_trace(&self, request_id: &str) -> Option<RequestTrace> {
        self.traces.read().get(request_id).cloned()
    }

    /// All traces recorded so far, oldest first.
    pub fn traces(&self) -> Vec<RequestTrace> {
        let mut traces: Vec<RequestTrace> = self.traces.read().values().cloned().collect();
        traces.sort_by_key(|t| t.started_at);
        traces
    }
}

impl Default for RequestTracker {
    fn default() -> Self {
        Self::new()
    }
}
