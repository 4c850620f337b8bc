//! # Synchronization Methods
//!
//! How a worker's partial results reach the shared accumulator.
//!
//! On the command line the methods are selected by the codes `1`, `2` and `3`.
//! Any other code is rejected while the arguments are parsed, so no worker ever sees an invalid method.

use anyhow::{bail, Result};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Read-add-write of the shared value per element, with no lock. Loses updates.
    Unsynchronized,
    /// Lock, add one element, unlock. Correct, but every addition is serialized.
    LockPerElement,
    /// Sum privately, then lock once per worker to add the partial sum.
    LocalThenLock,
}

impl Method {
    pub const ALL: [Method; 3] = [
        Method::Unsynchronized,
        Method::LockPerElement,
        Method::LocalThenLock,
    ];

    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            1 => Ok(Method::Unsynchronized),
            2 => Ok(Method::LockPerElement),
            3 => Ok(Method::LocalThenLock),
            other => bail!("invalid method {other}: expected 1, 2 or 3"),
        }
    }

    pub fn code(self) -> i64 {
        match self {
            Method::Unsynchronized => 1,
            Method::LockPerElement => 2,
            Method::LocalThenLock => 3,
        }
    }

    /// Whether the final sum is independent of thread interleaving (up to float rounding).
    pub fn is_synchronized(self) -> bool {
        !matches!(self, Method::Unsynchronized)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Unsynchronized => "unsynchronized",
            Method::LockPerElement => "lock-per-element",
            Method::LocalThenLock => "local-then-lock",
        };
        f.write_str(name)
    }
}

/// `clap` value parser for the method positional.
pub fn parse_method(arg: &str) -> Result<Method, String> {
    let code: i64 = arg
        .trim()
        .parse()
        .map_err(|_| format!("invalid method `{arg}`: expected an integer"))?;
    Method::from_code(code).map_err(|err| err.to_string())
}
