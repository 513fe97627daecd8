//! Depth-first branch-and-bound over the course-selection model.
//!
//! The search pre-commits the forced set, then explores the remaining
//! courses in descending-score order, branching include-first. Two
//! admissible bounds prune subtrees: an optimistic score bound (current
//! score plus the largest remaining positive coefficients that still fit
//! under the count cap) and a credit-reachability bound (the largest
//! remaining credit values cannot lift the total into the credit window).
//! Neither bound can cut off an improving completion, so the search is
//! exact: it terminates with a proven optimum or proven infeasibility —
//! unless the wall-clock deadline expires first, in which case the whole
//! solve is reported as timed out, incumbent discarded.

use super::{ConstraintModel, Optimizer, SolveOutcome};
use std::time::{Duration, Instant};

/// Nodes between deadline checks; keeps `Instant::now` off the hot path.
const DEADLINE_CHECK_INTERVAL: u64 = 1024;

/// Exact solver for the course-selection model.
#[derive(Debug, Clone, Default)]
pub struct BranchAndBound {
    deadline: Option<Instant>,
}

impl BranchAndBound {
    /// Solver without a time limit.
    pub fn new() -> Self {
        BranchAndBound { deadline: None }
    }

    /// Solver that gives up at `deadline`.
    pub fn with_deadline(deadline: Instant) -> Self {
        BranchAndBound {
            deadline: Some(deadline),
        }
    }

    /// Solver with a wall-clock budget starting now.
    pub fn with_budget(budget: Duration) -> Self {
        BranchAndBound {
            deadline: Some(Instant::now() + budget),
        }
    }
}

impl Optimizer for BranchAndBound {
    fn solve(&self, model: &ConstraintModel) -> SolveOutcome {
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return SolveOutcome::TimedOut;
            }
        }

        // Forced set feasibility: the resolver hands over a conflict-free
        // set, but the model stands on its own.
        if model.forced.len() > model.max_courses {
            return SolveOutcome::Infeasible;
        }
        for (pos, &i) in model.forced.iter().enumerate() {
            for &j in &model.forced[pos + 1..] {
                if model.conflicts(i, j) {
                    return SolveOutcome::Infeasible;
                }
            }
        }
        let forced_credits: u64 = model.forced.iter().map(|&i| model.credits[i]).sum();
        if forced_credits > model.max_credits {
            return SolveOutcome::Infeasible;
        }
        let forced_score: i64 = model.forced.iter().map(|&i| model.scores[i]).sum();

        let n = model.len();
        let words = n.div_ceil(64);
        let mut blocked = vec![0u64; words];
        let mut is_forced = vec![false; n];
        for &i in &model.forced {
            is_forced[i] = true;
            or_row(&mut blocked, &model.conflict_rows[i]);
        }

        // Candidates: everything not forced and not excluded by a forced
        // pick, highest score first (ties broken by catalog order).
        let mut order: Vec<usize> = (0..n)
            .filter(|&i| !is_forced[i] && !bit(&blocked, i))
            .collect();
        order.sort_by(|&a, &b| model.scores[b].cmp(&model.scores[a]).then(a.cmp(&b)));

        let cap = model.max_courses - model.forced.len();
        let (suffix_score, suffix_credit) = suffix_bounds(model, &order, cap);

        let mut search = Search {
            model,
            order: &order,
            cap,
            suffix_score: &suffix_score,
            suffix_credit: &suffix_credit,
            deadline: self.deadline,
            nodes: 0,
            timed_out: false,
            chosen: Vec::with_capacity(cap),
            best_score: None,
            best: Vec::new(),
        };
        search.dfs(0, 0, forced_credits, forced_score, &mut blocked);

        if search.timed_out {
            return SolveOutcome::TimedOut;
        }
        match search.best_score {
            Some(_) => {
                let mut selection = model.forced.clone();
                selection.extend_from_slice(&search.best);
                selection.sort_unstable();
                SolveOutcome::Optimal(selection)
            }
            None => SolveOutcome::Infeasible,
        }
    }
}

struct Search<'a> {
    model: &'a ConstraintModel,
    order: &'a [usize],
    cap: usize,
    suffix_score: &'a [[i64; 8]],
    suffix_credit: &'a [[u64; 8]],
    deadline: Option<Instant>,
    nodes: u64,
    timed_out: bool,
    chosen: Vec<usize>,
    best_score: Option<i64>,
    best: Vec<usize>,
}

impl Search<'_> {
    fn dfs(&mut self, pos: usize, used: usize, credits: u64, score: i64, blocked: &mut Vec<u64>) {
        if self.timed_out {
            return;
        }
        self.nodes += 1;
        if self.nodes % DEADLINE_CHECK_INTERVAL == 0 {
            if let Some(deadline) = self.deadline {
                if Instant::now() >= deadline {
                    self.timed_out = true;
                    return;
                }
            }
        }

        let slots = self.cap - used;
        let bound = score + self.suffix_score[pos][slots];
        if let Some(best) = self.best_score {
            if bound <= best {
                return;
            }
        }
        if credits + self.suffix_credit[pos][slots] < self.model.min_credits {
            return;
        }

        if pos == self.order.len() {
            // The reachability bound above guarantees the credit window,
            // and the score bound guarantees strict improvement.
            self.best_score = Some(score);
            self.best = self.chosen.clone();
            return;
        }

        let idx = self.order[pos];
        let course_credits = self.model.credits[idx];
        if slots > 0
            && !bit(blocked, idx)
            && credits + course_credits <= self.model.max_credits
        {
            let saved = blocked.clone();
            or_row(blocked, &self.model.conflict_rows[idx]);
            self.chosen.push(idx);
            self.dfs(
                pos + 1,
                used + 1,
                credits + course_credits,
                score + self.model.scores[idx],
                blocked,
            );
            self.chosen.pop();
            *blocked = saved;
        }
        if self.timed_out {
            return;
        }
        self.dfs(pos + 1, used, credits, score, blocked);
    }
}

/// For every suffix of `order`, the best score sum and the largest credit
/// sum achievable with up to `k` picks (0 <= k <= cap), ignoring conflicts.
/// Both overestimate what any real completion can do, which is exactly what
/// makes them safe to prune with.
fn suffix_bounds(
    model: &ConstraintModel,
    order: &[usize],
    cap: usize,
) -> (Vec<[i64; 8]>, Vec<[u64; 8]>) {
    let len = order.len();
    let mut suffix_score = vec![[0i64; 8]; len + 1];
    let mut suffix_credit = vec![[0u64; 8]; len + 1];

    // Largest-first running top lists, at most `cap` entries each
    let mut top_scores: Vec<i64> = Vec::with_capacity(cap + 1);
    let mut top_credits: Vec<u64> = Vec::with_capacity(cap + 1);

    for pos in (0..len).rev() {
        let score = model.scores[order[pos]];
        if score > 0 {
            insert_top(&mut top_scores, score, cap);
        }
        insert_top(&mut top_credits, model.credits[order[pos]], cap);

        let mut acc_score = 0i64;
        let mut acc_credit = 0u64;
        for k in 1..=cap {
            if let Some(&s) = top_scores.get(k - 1) {
                acc_score += s;
            }
            if let Some(&c) = top_credits.get(k - 1) {
                acc_credit += c;
            }
            suffix_score[pos][k] = acc_score;
            suffix_credit[pos][k] = acc_credit;
        }
    }
    (suffix_score, suffix_credit)
}

/// Insert into a descending top list, keeping at most `cap` entries.
fn insert_top<T: Ord + Copy>(top: &mut Vec<T>, value: T, cap: usize) {
    let at = top.partition_point(|&v| v >= value);
    top.insert(at, value);
    top.truncate(cap);
}

fn bit(words: &[u64], i: usize) -> bool {
    words[i / 64] & (1u64 << (i % 64)) != 0
}

fn or_row(dst: &mut [u64], src: &[u64]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d |= s;
    }
}
