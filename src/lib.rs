//! fibbench
//!
//! Iterative Fibonacci micro-benchmark used to compare raw loop and
//! arithmetic performance across languages: `fibonacci(1000)` is computed
//! 10,000 times and every result but the last is discarded.
//!
//! # Example
//!
//! ```
//! use fibbench::{fibonacci, run};
//!
//! assert_eq!(fibonacci(20), 6765);
//! // F(1000) does not fit in 64 bits; the wrapped value is reproducible.
//! assert_eq!(run(), fibonacci(1000));
//! ```

#![doc(html_root_url = "https://docs.rs/fibbench")]
#![warn(rust_2018_idioms)]

pub mod driver;
pub mod fibonacci;
pub mod report;

// Utility modules
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};
pub use driver::{run, run_with};
pub use fibonacci::{fibonacci, fibonacci_checked, MAX_EXACT_INDEX};
pub use util::config::{BenchConfig, BenchError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Benchmark name
pub const NAME: &str = "fibbench";
