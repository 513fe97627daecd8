//! Objective coefficients for the seeded solves.
//!
//! Every course gets one integer score per solve. The seed drives both the
//! jitter sequence and the "lucky day" bonus, so different seeds steer the
//! optimizer toward different — but always valid — plans, while the same
//! seed reproduces the same coefficients on every run.

use crate::api::{Course, CourseId, Preferences};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Points per credit-hour.
const CREDIT_WEIGHT: i64 = 10;
/// Jitter bounds for non-fixed courses, inclusive.
const JITTER_MIN: i64 = -30;
const JITTER_MAX: i64 = 30;
/// Bonus per time block falling on the solve's lucky day.
const LUCKY_DAY_BONUS: i64 = 20;
/// Penalty per block starting before [`MORNING_END`].
const MORNING_PENALTY: i64 = 50;
const MORNING_END: f64 = 11.0;
/// Penalty per block ending after [`EVENING_START`].
const EVENING_PENALTY: i64 = 50;
const EVENING_START: f64 = 18.0;
/// One-off penalty for courses stretching the day when a compact
/// schedule is preferred.
const EXTREME_TIME_PENALTY: i64 = 80;
const EARLY_EXTREME: f64 = 10.0;
const LATE_EXTREME: f64 = 17.0;
/// Penalty per block on a day the student wants free.
const PREFERRED_DAY_PENALTY: i64 = 100;

/// The weekday favored by a seed (0 = Monday .. 4 = Friday).
pub fn lucky_day(seed: u64) -> u8 {
    (seed % 5) as u8
}

/// Compute one objective coefficient per catalog course, in catalog order.
///
/// The jitter generator is re-seeded with `seed` here, at the start of each
/// solve, and consumes exactly one draw per non-fixed course in catalog
/// iteration order; fixed courses draw nothing. Courses without time blocks
/// receive only the base and jitter terms.
pub fn score_catalog(
    catalog: &[Course],
    fixed: &[CourseId],
    preferences: &Preferences,
    seed: u64,
) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let lucky = lucky_day(seed);
    let free_days = preferences.preferred_day_indices();

    catalog
        .iter()
        .map(|course| {
            let mut score = course.credits as i64 * CREDIT_WEIGHT;

            if !fixed.contains(&course.id) {
                score += rng.gen_range(JITTER_MIN..=JITTER_MAX);
            }

            for block in &course.times {
                if block.day == lucky {
                    score += LUCKY_DAY_BONUS;
                }
            }

            if preferences.avoid_morning {
                for block in &course.times {
                    if block.start < MORNING_END {
                        score -= MORNING_PENALTY;
                    }
                }
            }

            if preferences.avoid_evening {
                for block in &course.times {
                    if block.end > EVENING_START {
                        score -= EVENING_PENALTY;
                    }
                }
            }

            if preferences.prefer_long_break
                && course
                    .times
                    .iter()
                    .any(|b| b.start < EARLY_EXTREME || b.end > LATE_EXTREME)
            {
                score -= EXTREME_TIME_PENALTY;
            }

            if !free_days.is_empty() {
                for block in &course.times {
                    if free_days.contains(&block.day) {
                        score -= PREFERRED_DAY_PENALTY;
                    }
                }
            }

            score
        })
        .collect()
}
