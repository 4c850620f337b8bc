//! # Worker
//!
//! One worker per [`Assignment`], run on its own thread.
//! All three methods compute the same `Σ sqrt(x)`; they only differ in how the result reaches the accumulator.
//!
//! `sqrt` of a negative `x` is NaN, and that NaN is added like any other term.

use crate::accumulator::Accumulator;
use crate::method::Method;
use crate::partition::Assignment;
use tracing::debug;

/// The square-root term contributed by one element of the range.
#[inline]
pub fn term(x: i64) -> f64 {
    (x as f64).sqrt()
}

/// Private, unsynchronized sum of one assignment, in ascending order of `x`.
pub fn assignment_sum(assignment: &Assignment) -> f64 {
    assignment.iter().map(term).fold(0.0, |acc, t| acc + t)
}

/// Runs worker `id` on `assignment` and applies its result to `accumulator` as `method` prescribes.
pub fn run_worker(id: usize, assignment: Assignment, method: Method, accumulator: &Accumulator) {
    debug!(
        worker = id,
        start = assignment.start,
        end = assignment.end,
        %method,
        "running"
    );

    match method {
        Method::Unsynchronized => {
            for x in assignment.iter() {
                accumulator.add_unsynchronized(term(x));
            }
        }
        Method::LockPerElement => {
            for x in assignment.iter() {
                accumulator.add_locked(term(x));
            }
        }
        Method::LocalThenLock => {
            let local = assignment_sum(&assignment);
            debug!(worker = id, local, "local sum ready");
            accumulator.lock().add(local);
        }
    }

    debug!(worker = id, elements = assignment.len(), "done");
}
