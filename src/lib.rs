//! # Range Square-Root Sum
//!
//! ### Shared State Across Threads, Three Ways
//!
//! Sums `sqrt(x)` over an inclusive range `[a, b]` with up to [`MAX_THREADS`] workers,
//! and lets the caller pick how the workers publish their results:
//!
//! - [`Method::Unsynchronized`]: no lock at all. Updates get lost, and the sum comes out too low.
//! - [`Method::LockPerElement`]: correct, but the lock is taken once per element.
//! - [`Method::LocalThenLock`]: correct, and the lock is taken once per worker.
//!
//! **Important note:** Compare timings in the *Release* profile.
//!
//! ```shell
//! cargo run --release -- 1 100000000 8 2
//! cargo run --release -- 1 100000000 8 3
//! ```

pub mod accumulator;
pub mod engine;
pub mod lock;
pub mod method;
pub mod partition;
pub mod report;
pub mod worker;

pub use engine::{reference_sum, run, Outcome, SumConfig, MAX_THREADS};
pub use method::Method;
pub use partition::{partition, Assignment};
