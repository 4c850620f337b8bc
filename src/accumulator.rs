//! # Global Accumulator
//!
//! The one shared `f64` of a run, together with the one mutex that guards it.
//!
//! The value lives as a bit pattern in an [`AtomicU64`].
//! That is what lets [`Accumulator::add_unsynchronized()`] reproduce the classic lost-update race
//! without undefined behaviour: it does a separate `Relaxed` load and `Relaxed` store,
//! so two workers can read the same old value and one of their additions disappears.
//!
//! The locked paths go through the same atomic, but only while holding [`Accumulator::lock()`],
//! whose `Acquire`/`Release` ordering makes the `Relaxed` accesses inside it sufficient.

use crate::lock::{Mutex, MutexGuard};
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering::Relaxed;

#[derive(Debug)]
pub struct Accumulator {
    bits: AtomicU64,
    lock: Mutex<()>,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Accumulator {
    pub const fn new() -> Self {
        Self {
            // 0.0_f64 has an all-zero bit pattern.
            bits: AtomicU64::new(0),
            lock: Mutex::new(()),
        }
    }

    /// Read-add-write with no exclusion. Concurrent callers lose updates.
    pub fn add_unsynchronized(&self, value: f64) {
        let current = f64::from_bits(self.bits.load(Relaxed));
        self.bits.store((current + value).to_bits(), Relaxed);
    }

    /// Takes the accumulator lock, adds `value` and releases the lock.
    pub fn add_locked(&self, value: f64) {
        let mut guard = self.lock();
        guard.add(value);
    }

    pub fn lock(&self) -> AccumulatorGuard<'_> {
        AccumulatorGuard {
            bits: &self.bits,
            _guard: self.lock.lock(),
        }
    }

    /// Reads the current value. Meant for after all workers have been joined.
    pub fn load(&self) -> f64 {
        f64::from_bits(self.bits.load(Relaxed))
    }

    pub fn into_inner(self) -> f64 {
        f64::from_bits(self.bits.into_inner())
    }
}

/// Exclusive access to the accumulator for as long as it lives.
pub struct AccumulatorGuard<'a> {
    bits: &'a AtomicU64,
    _guard: MutexGuard<'a, ()>,
}

impl AccumulatorGuard<'_> {
    pub fn add(&mut self, value: f64) {
        let current = f64::from_bits(self.bits.load(Relaxed));
        self.bits.store((current + value).to_bits(), Relaxed);
    }

    pub fn get(&self) -> f64 {
        f64::from_bits(self.bits.load(Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn starts_at_zero() {
        assert_eq!(0.0, Accumulator::new().load());
        assert_eq!(0.0, Accumulator::default().into_inner());
    }

    #[test]
    fn locked_adds_are_never_lost() {
        let acc = Accumulator::new();

        thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    for _ in 0..10_000 {
                        acc.add_locked(1.0);
                    }
                });
            }
        });

        // Integers below 2^53 are exact in f64.
        assert_eq!(80_000.0, acc.into_inner());
    }

    #[test]
    fn unsynchronized_adds_never_exceed_the_total() {
        let acc = Accumulator::new();

        thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    for _ in 0..10_000 {
                        acc.add_unsynchronized(1.0);
                    }
                });
            }
        });

        let total = acc.into_inner();
        assert!(total >= 1.0);
        assert!(total <= 80_000.0);
    }

    #[test]
    fn guard_sees_its_own_writes() {
        let acc = Accumulator::new();
        {
            let mut guard = acc.lock();
            guard.add(1.5);
            guard.add(2.0);
            assert_eq!(3.5, guard.get());
        }
        assert_eq!(3.5, acc.load());
    }

    #[test]
    fn nan_propagates() {
        let acc = Accumulator::new();
        acc.add_locked(1.0);
        acc.add_locked((-1.0_f64).sqrt());
        acc.add_locked(2.0);
        assert!(acc.load().is_nan());
    }
}
