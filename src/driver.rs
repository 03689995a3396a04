//! Benchmark driver
//!
//! Calls the workload function a fixed number of times, overwriting a single
//! result slot, and hands back the last value. Argument and result both pass
//! through [`black_box`] so the optimizer cannot hoist the call out of the
//! loop or fold it to a constant.

use std::hint::black_box;

use tracing::debug;

use crate::fibonacci::fibonacci;
use crate::util::config::BenchConfig;

/// Run the benchmark: `fibonacci(1000)` called 10,000 times.
pub fn run() -> i64 {
    run_with(&BenchConfig::default(), fibonacci)
}

/// Run `f(config.n)` exactly `config.iterations` times.
///
/// Returns the result of the last call, or 0 when no call was made.
pub fn run_with<F>(
    config: &BenchConfig,
    mut f: F,
) -> i64
where
    F: FnMut(i64) -> i64,
{
    debug!(n = config.n, iterations = config.iterations, "driver start");
    let mut result = 0;
    for _ in 0..config.iterations {
        result = black_box(f(black_box(config.n)));
    }
    debug!(result, "driver done");
    result
}
