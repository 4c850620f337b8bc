//! # Orchestrator
//!
//! Validates a run, spawns one scoped thread per [`Assignment`], joins them all and reads the sum.
//!
//! [`run()`] owns the [`Accumulator`] and lends it to the workers by reference.
//! The scope ends only after every worker has been joined, which is the single synchronization point
//! between the orchestrator and the workers.

use crate::accumulator::Accumulator;
use crate::method::Method;
use crate::partition::{partition, Assignment};
use crate::worker::{run_worker, term};
use anyhow::{anyhow, bail, Context, Result};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Upper bound on the number of workers of a run.
pub const MAX_THREADS: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SumConfig {
    pub a: i64,
    pub b: i64,
    pub num_threads: usize,
    pub method: Method,
}

impl SumConfig {
    /// Rejects thread counts outside `1..=MAX_THREADS`.
    ///
    /// `a > b` and negative bounds are accepted as they are.
    pub fn new(a: i64, b: i64, num_threads: i64, method: Method) -> Result<Self> {
        if num_threads > MAX_THREADS as i64 {
            bail!("number of threads {num_threads} exceeds the maximum allowed ({MAX_THREADS})");
        }
        if num_threads < 1 {
            bail!("number of threads must be at least 1, got {num_threads}");
        }

        Ok(Self {
            a,
            b,
            num_threads: num_threads as usize,
            method,
        })
    }

    pub fn assignments(&self) -> Vec<Assignment> {
        partition(self.a, self.b, self.num_threads)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Outcome {
    pub sum: f64,
    /// Wall-clock time from the first spawn to the last join.
    pub elapsed: Duration,
}

pub fn run(config: &SumConfig) -> Result<Outcome> {
    let assignments = config.assignments();
    let accumulator = Accumulator::new();

    let start = Instant::now();

    thread::scope(|s| -> Result<()> {
        let mut handles = Vec::with_capacity(assignments.len());
        for (id, &assignment) in assignments.iter().enumerate() {
            let accumulator = &accumulator;
            let method = config.method;
            let handle = thread::Builder::new()
                .name(format!("worker-{id}"))
                .spawn_scoped(s, move || run_worker(id, assignment, method, accumulator))
                .with_context(|| format!("failed to spawn worker {id}"))?;
            handles.push(handle);
        }
        debug!(workers = handles.len(), "all workers spawned");

        // Join everything before reporting a failure, so no worker outlives the run.
        let mut failed = Vec::new();
        for (id, handle) in handles.into_iter().enumerate() {
            if handle.join().is_err() {
                failed.push(id);
            }
        }
        if !failed.is_empty() {
            return Err(anyhow!("worker(s) {failed:?} panicked"));
        }

        Ok(())
    })?;

    let elapsed = start.elapsed();
    let sum = accumulator.into_inner();

    info!(
        a = config.a,
        b = config.b,
        threads = config.num_threads,
        method = %config.method,
        sum,
        elapsed = ?elapsed,
        "run finished"
    );

    Ok(Outcome { sum, elapsed })
}

/// The single-threaded sum over the same assignments the workers get, boundary overlaps included.
///
/// Elements are added one by one, in assignment order, to a running total that starts at `0.0`.
pub fn reference_sum(a: i64, b: i64, num_threads: usize) -> f64 {
    partition(a, b, num_threads)
        .iter()
        .flat_map(Assignment::iter)
        .map(term)
        .fold(0.0, |acc, t| acc + t)
}
