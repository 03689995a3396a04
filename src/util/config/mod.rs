//! Benchmark configuration
//!
//! The workload is fixed at build time: [`BenchConfig::default`] is the
//! benchmark (`fibonacci(1000)` called 10,000 times). The reporting binary
//! may override the fields from the command line; the driver never does.
//!
//! # Usage
//!
//! ```rust
//! use fibbench::util::config::BenchConfig;
//!
//! let config = BenchConfig::default();
//! assert_eq!(config.n, 1000);
//! assert_eq!(config.iterations, 10_000);
//! config.validate().unwrap();
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fibonacci index used by the benchmark.
pub const DEFAULT_N: i64 = 1000;

/// Number of calls per benchmark run.
pub const DEFAULT_ITERATIONS: u64 = 10_000;

/// Workload description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Fibonacci index passed on every call
    #[serde(default = "default_n")]
    pub n: i64,
    /// Number of calls
    #[serde(default = "default_iterations")]
    pub iterations: u64,
}

fn default_n() -> i64 {
    DEFAULT_N
}

fn default_iterations() -> u64 {
    DEFAULT_ITERATIONS
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            n: DEFAULT_N,
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl BenchConfig {
    /// Create a config for an arbitrary workload
    pub fn new(
        n: i64,
        iterations: u64,
    ) -> Self {
        Self { n, iterations }
    }

    /// Check that the workload can be measured.
    ///
    /// A zero-iteration run has no per-call time, so the report path rejects
    /// it. The driver itself accepts it and simply returns 0.
    pub fn validate(&self) -> Result<(), BenchError> {
        if self.iterations == 0 {
            return Err(BenchError::ZeroIterations);
        }
        Ok(())
    }
}

/// 基准测试配置错误
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BenchError {
    /// Nothing to time
    #[error("iteration count must be greater than zero")]
    ZeroIterations,

    /// No timed runs requested
    #[error("repeat count must be greater than zero")]
    ZeroRepeat,
}
