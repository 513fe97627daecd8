//! Constraint model assembly for one seeded solve.

use crate::api::{Course, CourseId, Preferences, MAX_PLAN_COURSES};
use crate::services::conflict::has_conflict;

/// The optimization problem for one seeded solve: one binary selection
/// variable per catalog course, hard constraints, and an integer objective.
///
/// Conflict exclusions (`x_i + x_j <= 1` for every overlapping pair) are
/// stored as per-course bitset rows over catalog indices, which the search
/// combines into a running "blocked" mask in O(words) per step.
#[derive(Debug, Clone)]
pub struct ConstraintModel {
    pub(crate) scores: Vec<i64>,
    pub(crate) credits: Vec<u64>,
    pub(crate) conflict_rows: Vec<Vec<u64>>,
    /// Catalog indices of the resolved fixed set; variable fixed to 1
    pub(crate) forced: Vec<usize>,
    pub(crate) min_credits: u64,
    pub(crate) max_credits: u64,
    pub(crate) max_courses: usize,
    conflict_pairs: usize,
}

impl ConstraintModel {
    /// Assemble the model from the catalog, the resolved fixed set, and the
    /// per-course objective coefficients of this solve's seed.
    ///
    /// `scores` must be indexed like `catalog` (one coefficient per course
    /// in catalog order). Fixed ids absent from the catalog are ignored;
    /// the resolver never produces them.
    pub fn build(
        catalog: &[Course],
        fixed: &[CourseId],
        scores: Vec<i64>,
        preferences: &Preferences,
    ) -> Self {
        debug_assert_eq!(catalog.len(), scores.len());
        let n = catalog.len();
        let words = n.div_ceil(64);

        let mut conflict_rows = vec![vec![0u64; words]; n];
        let mut conflict_pairs = 0;
        for i in 0..n {
            for j in (i + 1)..n {
                if has_conflict(&catalog[i], &catalog[j]) {
                    conflict_rows[i][j / 64] |= 1u64 << (j % 64);
                    conflict_rows[j][i / 64] |= 1u64 << (i % 64);
                    conflict_pairs += 1;
                }
            }
        }

        // Forcing the same variable twice is a no-op, not a double count
        let mut forced: Vec<usize> = Vec::new();
        for id in fixed {
            if let Some(i) = catalog.iter().position(|c| &c.id == id) {
                if !forced.contains(&i) {
                    forced.push(i);
                }
            }
        }

        ConstraintModel {
            scores,
            credits: catalog.iter().map(|c| c.credits as u64).collect(),
            conflict_rows,
            forced,
            min_credits: preferences.min_credits as u64,
            max_credits: preferences.max_credits as u64,
            max_courses: MAX_PLAN_COURSES,
            conflict_pairs,
        }
    }

    /// Number of decision variables (catalog courses).
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Number of conflict-exclusion constraints in the model.
    pub fn conflict_pair_count(&self) -> usize {
        self.conflict_pairs
    }

    /// Whether courses `i` and `j` are mutually exclusive.
    pub(crate) fn conflicts(&self, i: usize, j: usize) -> bool {
        self.conflict_rows[i][j / 64] & (1u64 << (j % 64)) != 0
    }
}
