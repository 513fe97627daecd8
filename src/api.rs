//! Public API surface for the scheduling engine.
//!
//! This file consolidates the DTO types of the request/response contract.
//! All types derive Serialize/Deserialize for JSON serialization. Courses
//! arrive already normalized (weekday index + fractional-hour bounds);
//! parsing raw registrar data is the catalog service's job, not ours.

use serde::{Deserialize, Serialize};

/// Maximum number of courses in any plan, and the cut-off applied to the
/// student's explicit selection list.
pub const MAX_PLAN_COURSES: usize = 7;

/// Course identifier (registrar course code, e.g. "CS3320-01").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CourseId(pub String);

impl CourseId {
    pub fn new(value: impl Into<String>) -> Self {
        CourseId(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CourseId {
    fn from(value: &str) -> Self {
        CourseId(value.to_string())
    }
}

/// Weekday labels in index order. Index 0 = Monday .. 6 = Sunday.
pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Map a weekday label to its index (0 = Monday .. 6 = Sunday).
///
/// Matching is case-insensitive. Unknown labels return `None` and are
/// ignored by callers, matching the preference contract.
pub fn weekday_index(label: &str) -> Option<u8> {
    WEEKDAY_LABELS
        .iter()
        .position(|l| l.eq_ignore_ascii_case(label.trim()))
        .map(|i| i as u8)
}

/// One weekly occupied interval of a course.
///
/// `start` and `end` are fractional hours (9.5 = 09:30). Invariant:
/// `start < end`; records violating it are rejected before solving.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeBlock {
    /// Weekday index, 0 = Monday .. 6 = Sunday
    pub day: u8,
    /// Start of the interval in fractional hours
    pub start: f64,
    /// End of the interval in fractional hours
    pub end: f64,
}

impl TimeBlock {
    pub fn new(day: u8, start: f64, end: f64) -> Self {
        TimeBlock { day, start, end }
    }
}

/// A normalized course offering from the catalog snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    /// Display name; optional on the wire
    #[serde(default)]
    pub name: String,
    /// Credit-hours awarded by the course
    pub credits: u32,
    /// Weekly occupied intervals; may be empty (e.g. online self-paced)
    #[serde(default)]
    pub times: Vec<TimeBlock>,
}

impl Course {
    pub fn new(id: impl Into<String>, credits: u32, times: Vec<TimeBlock>) -> Self {
        Course {
            id: CourseId::new(id),
            name: String::new(),
            credits,
            times,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// Student scheduling preferences.
///
/// Every field is optional on the wire and falls back to the platform
/// defaults below. `min_credits > max_credits` is not rejected; it simply
/// makes the credit window empty and the request infeasible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default = "default_min_credits")]
    pub min_credits: u32,
    #[serde(default = "default_max_credits")]
    pub max_credits: u32,
    #[serde(default)]
    pub avoid_morning: bool,
    #[serde(default)]
    pub avoid_evening: bool,
    #[serde(default)]
    pub prefer_long_break: bool,
    /// Weekday labels the student wants free of classes
    #[serde(default)]
    pub preferred_days: Vec<String>,
}

fn default_min_credits() -> u32 {
    12
}

fn default_max_credits() -> u32 {
    21
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            min_credits: default_min_credits(),
            max_credits: default_max_credits(),
            avoid_morning: false,
            avoid_evening: false,
            prefer_long_break: false,
            preferred_days: Vec::new(),
        }
    }
}

impl Preferences {
    /// Preferred-free days resolved to weekday indices, unknown labels dropped.
    pub fn preferred_day_indices(&self) -> Vec<u8> {
        self.preferred_days
            .iter()
            .filter_map(|label| weekday_index(label))
            .collect()
    }
}

/// A timetable generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Student-chosen course ids in selection-priority order
    pub selected_course_ids: Vec<CourseId>,
    #[serde(default)]
    pub preferences: Preferences,
}

/// The three labeled candidate plans of one successful request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanSet {
    #[serde(rename = "PLAN A")]
    pub plan_a: Vec<Course>,
    #[serde(rename = "PLAN B")]
    pub plan_b: Vec<Course>,
    #[serde(rename = "PLAN C")]
    pub plan_c: Vec<Course>,
}

/// Response contract for timetable generation.
///
/// Serializes as `{"status":"success","data":{...}}` or
/// `{"status":"fail","message":"..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ScheduleResponse {
    Success { data: PlanSet },
    Fail { message: String },
}

impl ScheduleResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, ScheduleResponse::Success { .. })
    }
}
