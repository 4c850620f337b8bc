//! # Range Partitioner
//!
//! Splits `[a, b]` into `num_threads` contiguous, inclusive slices of width `(b - a) / num_threads`.
//!
//! The slices are *not* an exact tiling of the range:
//! - neighbouring slices share their boundary point, which is therefore summed twice;
//! - when `num_threads` doesn't divide `b - a`, the last slice stops `(b - a) % num_threads` short of `b`.
//!
//! Results are compared against [`reference_sum()`](crate::engine::reference_sum),
//! which walks the same slices, so they stay consistent with this formula.

/// An inclusive sub-range `[start, end]` owned by one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    pub start: i64,
    pub end: i64,
}

impl Assignment {
    /// Number of integers in the slice; zero when `end < start`.
    pub fn len(&self) -> u64 {
        if self.end < self.start {
            0
        } else {
            (i128::from(self.end) - i128::from(self.start) + 1) as u64
        }
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    pub fn iter(&self) -> std::ops::RangeInclusive<i64> {
        self.start..=self.end
    }
}

/// Computes `num_threads` assignments starting at `a`.
///
/// The arithmetic runs in `i128`, so `b - a` can't overflow.
/// All bounds end up between `a` and `b`, which is why the narrowing back to `i64` can't fail.
pub fn partition(a: i64, b: i64, num_threads: usize) -> Vec<Assignment> {
    assert!(num_threads > 0, "at least one worker is required");

    let step = width(a, b, num_threads);

    (0..num_threads)
        .map(|i| {
            let start = i128::from(a) + i as i128 * step;
            let end = start + step;
            Assignment {
                start: start as i64,
                end: end as i64,
            }
        })
        .collect()
}

/// How far the last assignment stops short of `b`.
pub fn shortfall(a: i64, b: i64, num_threads: usize) -> i64 {
    let last_end = i128::from(a) + num_threads as i128 * width(a, b, num_threads);
    (i128::from(b) - last_end) as i64
}

fn width(a: i64, b: i64, num_threads: usize) -> i128 {
    // Truncates toward zero, like the integer division of the range width in C.
    (i128::from(b) - i128::from(a)) / num_threads as i128
}
