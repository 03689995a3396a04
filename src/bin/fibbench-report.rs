//! fibbench - timing report CLI

use anyhow::{Context, Result};
use clap::Parser;
use fibbench::report::{best, measure_repeated};
use fibbench::util::config::{BenchConfig, DEFAULT_ITERATIONS, DEFAULT_N};
use fibbench::util::logger::{self, LogLevel};
use fibbench::{NAME, VERSION};
use tracing::debug;

/// Time the iterative Fibonacci benchmark and print the result
#[derive(Parser, Debug)]
#[command(name = "fibbench-report")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
struct Args {
    /// Fibonacci index computed on every call
    #[arg(long, default_value_t = DEFAULT_N, allow_negative_numbers = true)]
    n: i64,

    /// Calls per timed run
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_ITERATIONS)]
    iterations: u64,

    /// Number of timed runs
    #[arg(long, default_value_t = 1)]
    repeat: u32,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_with_level(LogLevel::from_verbose(args.verbose));

    debug!("{} {} on {}", NAME, VERSION, std::env::consts::OS);

    let config = BenchConfig::new(args.n, args.iterations);
    let runs = measure_repeated(&config, args.repeat).context("Invalid benchmark config")?;

    if args.json {
        let out = serde_json::to_string_pretty(&runs).context("Failed to serialize report")?;
        println!("{}", out);
    } else {
        for m in &runs {
            println!("{}", m.render_text());
        }
        if runs.len() > 1 {
            if let Some(fastest) = best(&runs) {
                println!("best: {:.3} ms", fastest.total_ms);
            }
        }
    }

    Ok(())
}
