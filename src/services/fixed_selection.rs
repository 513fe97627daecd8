//! Resolution of the student's explicit picks into the fixed set.
//!
//! The resolver confirms picks greedily, first-seen-wins: a later pick that
//! conflicts with an earlier confirmed one is dropped even if dropping the
//! earlier pick would have allowed both. This tie-break is part of the
//! platform contract and must not be "improved" into a backtracking search.

use crate::api::{Course, CourseId, MAX_PLAN_COURSES};
use crate::services::conflict::has_conflict;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Why a pick did not make it into the fixed set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    /// The id does not exist in the catalog snapshot.
    UnknownCourse,
    /// The pick overlaps a pick confirmed earlier in the list.
    ConflictsWithEarlierPick(CourseId),
}

impl std::fmt::Display for DropReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DropReason::UnknownCourse => write!(f, "unknown course"),
            DropReason::ConflictsWithEarlierPick(id) => {
                write!(f, "conflicts with earlier pick {}", id)
            }
        }
    }
}

/// A pick excluded during resolution. Not an error: recorded for logs and
/// telemetry so drops stay distinguishable from solver infeasibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroppedSelection {
    pub course_id: CourseId,
    pub reason: DropReason,
}

/// Outcome of resolving the student's selection list.
#[derive(Debug, Clone, Default)]
pub struct ResolvedSelection {
    /// Confirmed picks in selection order; forced into every plan.
    pub fixed: Vec<CourseId>,
    /// Picks excluded by resolution, with reasons.
    pub dropped: Vec<DroppedSelection>,
}

impl ResolvedSelection {
    pub fn is_fixed(&self, id: &CourseId) -> bool {
        self.fixed.contains(id)
    }
}

/// Resolve the selection list against the catalog.
///
/// Only the first [`MAX_PLAN_COURSES`] entries are considered at all;
/// entries beyond the cap are ignored without a drop record, regardless of
/// their feasibility.
pub fn resolve_fixed_selection(catalog: &[Course], selected: &[CourseId]) -> ResolvedSelection {
    let by_id: HashMap<&CourseId, &Course> = catalog.iter().map(|c| (&c.id, c)).collect();

    let mut resolved = ResolvedSelection::default();
    for id in selected.iter().take(MAX_PLAN_COURSES) {
        let course = match by_id.get(id) {
            Some(course) => *course,
            None => {
                resolved.dropped.push(DroppedSelection {
                    course_id: id.clone(),
                    reason: DropReason::UnknownCourse,
                });
                continue;
            }
        };

        let clash = resolved.fixed.iter().find(|accepted| {
            by_id
                .get(accepted)
                .is_some_and(|earlier| has_conflict(course, earlier))
        });

        match clash {
            Some(earlier) => resolved.dropped.push(DroppedSelection {
                course_id: id.clone(),
                reason: DropReason::ConflictsWithEarlierPick(earlier.clone()),
            }),
            None => resolved.fixed.push(id.clone()),
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::{resolve_fixed_selection, DropReason};
    use crate::api::{Course, CourseId, TimeBlock};

    fn course(id: &str, day: u8, start: f64, end: f64) -> Course {
        Course::new(id, 3, vec![TimeBlock::new(day, start, end)])
    }

    fn ids(raw: &[&str]) -> Vec<CourseId> {
        raw.iter().map(|s| CourseId::from(*s)).collect()
    }

    #[test]
    fn test_accepts_non_conflicting_picks_in_order() {
        let catalog = vec![
            course("A", 0, 9.0, 10.0),
            course("B", 1, 9.0, 10.0),
            course("C", 2, 9.0, 10.0),
        ];
        let resolved = resolve_fixed_selection(&catalog, &ids(&["C", "A"]));
        assert_eq!(resolved.fixed, ids(&["C", "A"]));
        assert!(resolved.dropped.is_empty());
    }

    #[test]
    fn test_unknown_id_is_dropped_silently() {
        let catalog = vec![course("A", 0, 9.0, 10.0)];
        let resolved = resolve_fixed_selection(&catalog, &ids(&["ZZ", "A"]));
        assert_eq!(resolved.fixed, ids(&["A"]));
        assert_eq!(resolved.dropped.len(), 1);
        assert_eq!(resolved.dropped[0].reason, DropReason::UnknownCourse);
    }

    #[test]
    fn test_first_seen_wins_on_conflict() {
        let catalog = vec![course("A", 0, 9.0, 11.0), course("B", 0, 10.0, 12.0)];
        let resolved = resolve_fixed_selection(&catalog, &ids(&["A", "B"]));
        assert_eq!(resolved.fixed, ids(&["A"]));
        assert_eq!(
            resolved.dropped[0].reason,
            DropReason::ConflictsWithEarlierPick(CourseId::from("A"))
        );
    }

    #[test]
    fn test_no_backtracking_even_when_swap_would_fit_both() {
        // B conflicts with A; C conflicts with A but not B. Dropping A would
        // have admitted both B and C, but A was first.
        let catalog = vec![
            course("A", 0, 9.0, 12.0),
            course("B", 0, 9.0, 10.0),
            course("C", 0, 11.0, 12.0),
        ];
        let resolved = resolve_fixed_selection(&catalog, &ids(&["A", "B", "C"]));
        assert_eq!(resolved.fixed, ids(&["A"]));
        assert_eq!(resolved.dropped.len(), 2);
    }

    #[test]
    fn test_selection_list_capped_at_seven() {
        let catalog: Vec<Course> = (0..9u8)
            .map(|i| course(&format!("C{}", i), i % 5, 8.0 + f64::from(i), 9.0 + f64::from(i)))
            .collect();
        let selected: Vec<CourseId> =
            (0..9).map(|i| CourseId::new(format!("C{}", i))).collect();
        let resolved = resolve_fixed_selection(&catalog, &selected);
        // Entries 8 and 9 are never considered, feasible or not
        assert_eq!(resolved.fixed.len(), 7);
        assert!(resolved.dropped.is_empty());
        assert!(!resolved.is_fixed(&CourseId::from("C7")));
        assert!(!resolved.is_fixed(&CourseId::from("C8")));
    }
}
