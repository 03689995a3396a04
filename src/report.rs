//! Timing and reporting
//!
//! Wraps the driver in a wall-clock measurement so the Rust port can be
//! compared against the same workload in other languages. Output is either a
//! single text line or JSON records.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::driver::run_with;
use crate::fibonacci::{fibonacci, fibonacci_checked};
use crate::util::config::{BenchConfig, BenchError};

/// Benchmark name used in reports
pub const BENCH_NAME: &str = "fibonacci_iterative";

/// One timed run of the driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub name: String,
    pub n: i64,
    pub iterations: u64,
    /// Value returned by the last call
    pub last: i64,
    /// `false` when `last` is a wrapped bit pattern rather than F(n)
    pub exact: bool,
    pub total_ms: f64,
    pub per_call_ns: f64,
}

impl Measurement {
    fn from_elapsed(
        config: &BenchConfig,
        last: i64,
        elapsed: Duration,
    ) -> Self {
        let total_ms = elapsed.as_secs_f64() * 1000.0;
        let per_call_ns = elapsed.as_nanos() as f64 / config.iterations as f64;
        Self {
            name: BENCH_NAME.to_string(),
            n: config.n,
            iterations: config.iterations,
            last,
            exact: fibonacci_checked(config.n).is_some(),
            total_ms,
            per_call_ns,
        }
    }

    /// Human-readable one-liner
    pub fn render_text(&self) -> String {
        let wrapped = if self.exact { "" } else { " (wrapped)" };
        format!(
            "{}: fib({}) x {} = {}{} in {:.3} ms ({:.1} ns/call)",
            self.name,
            self.n,
            self.iterations,
            self.last,
            wrapped,
            self.total_ms,
            self.per_call_ns
        )
    }
}

/// Time one driver run over `config`.
pub fn measure(config: &BenchConfig) -> Result<Measurement, BenchError> {
    config.validate()?;
    debug!(n = config.n, iterations = config.iterations, "measuring");
    let start = Instant::now();
    let last = run_with(config, fibonacci);
    let elapsed = start.elapsed();
    let m = Measurement::from_elapsed(config, last, elapsed);
    info!("{}", m.render_text());
    Ok(m)
}

/// Time `repeat` independent driver runs.
pub fn measure_repeated(
    config: &BenchConfig,
    repeat: u32,
) -> Result<Vec<Measurement>, BenchError> {
    if repeat == 0 {
        return Err(BenchError::ZeroRepeat);
    }
    (0..repeat).map(|_| measure(config)).collect()
}

/// Fastest run of a set, the usual figure for cross-language comparison
pub fn best(measurements: &[Measurement]) -> Option<&Measurement> {
    measurements
        .iter()
        .min_by(|a, b| a.total_ms.total_cmp(&b.total_ms))
}
