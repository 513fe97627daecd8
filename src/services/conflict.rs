//! Pairwise time-conflict detection between courses.

use crate::api::Course;

/// True iff some time block of `a` and some time block of `b` fall on the
/// same weekday and strictly overlap. Touching endpoints (one block ending
/// exactly when the other starts) do not conflict.
///
/// Cost is O(|a.times| × |b.times|); the model builder invokes this for
/// every course pair, O(n²) over the catalog.
pub fn has_conflict(a: &Course, b: &Course) -> bool {
    for ta in &a.times {
        for tb in &b.times {
            if ta.day == tb.day && ta.start < tb.end && ta.end > tb.start {
                return true;
            }
        }
    }
    false
}
