//! # Accumulator Lock
//!
//! The single exclusion primitive of a run: a three-state mutex on top of `atomic_wait`.
//!
//! The states are kept in an enum rather than as magic numbers.
//! An uncontended `lock()` and an uncontended drop of the guard never touch the futex,
//! which matters for [`Method::LockPerElement`](crate::method::Method::LockPerElement),
//! where every element of the range takes the lock once.
//!
//! There is no reader/writer distinction and no reentrancy.

use atomic_wait::{wait, wake_one};
use std::cell::UnsafeCell;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::AtomicU32;
use std::sync::atomic::Ordering::{Acquire, Relaxed, Release};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
enum State {
    Unlocked = 0,
    /// Locked, nobody is sleeping on the futex.
    Locked = 1,
    /// Locked, and at least one thread may be sleeping on the futex.
    Contended = 2,
}

impl From<State> for u32 {
    fn from(value: State) -> Self {
        value as Self
    }
}

#[derive(Debug)]
pub struct Mutex<T> {
    state: AtomicU32,
    value: UnsafeCell<T>,
}

// SAFETY: The value is only reachable through a guard, and a guard exists only while the state is locked.
unsafe impl<T: Send> Sync for Mutex<T> {}

impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self {
            state: AtomicU32::new(State::Unlocked as u32),
            value: UnsafeCell::new(value),
        }
    }

    /// Blocks until the mutex is ours and returns a guard that unlocks on drop.
    pub fn lock(&self) -> MutexGuard<'_, T> {
        if self
            .state
            .compare_exchange(State::Unlocked.into(), State::Locked.into(), Acquire, Relaxed)
            .is_err()
        {
            lock_contended(&self.state);
        }

        MutexGuard { mutex: self }
    }

    /// Returns `None` instead of blocking if somebody else holds the lock.
    pub fn try_lock(&self) -> Option<MutexGuard<'_, T>> {
        self.state
            .compare_exchange(State::Unlocked.into(), State::Locked.into(), Acquire, Relaxed)
            .ok()
            .map(|_| MutexGuard { mutex: self })
    }

    pub fn into_inner(self) -> T {
        self.value.into_inner()
    }
}

#[cold]
fn lock_contended(state: &AtomicU32) {
    // Spin briefly first: critical sections here are a single float addition.
    let mut spins = 0;
    while state.load(Relaxed) == State::Locked.into() && spins < 100 {
        spins += 1;
        std::hint::spin_loop();
    }

    if state
        .compare_exchange(State::Unlocked.into(), State::Locked.into(), Acquire, Relaxed)
        .is_ok()
    {
        return;
    }

    // Marking the state as contended before sleeping makes the holder wake us on unlock.
    // `wait()` re-checks the state, so a wake-up between `swap()` and `wait()` is not lost.
    while state.swap(State::Contended.into(), Acquire) != State::Unlocked.into() {
        wait(state, State::Contended.into());
    }
}

#[derive(Debug)]
pub struct MutexGuard<'a, T> {
    mutex: &'a Mutex<T>,
}

unsafe impl<T: Sync> Sync for MutexGuard<'_, T> {}

impl<T> Drop for MutexGuard<'_, T> {
    fn drop(&mut self) {
        if self.mutex.state.swap(State::Unlocked.into(), Release) == State::Contended.into() {
            wake_one(&self.mutex.state);
        }
    }
}

impl<T> Deref for MutexGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        // SAFETY: Existence of guard means that we have exclusively locked the mutex.
        unsafe { &*self.mutex.value.get() }
    }
}

impl<T> DerefMut for MutexGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        // SAFETY: Existence of guard means that we have exclusively locked the mutex.
        unsafe { &mut *self.mutex.value.get() }
    }
}
