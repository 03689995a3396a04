use std::process::{Command, Output, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Spawn a built binary and wait for it, killing it after `timeout`.
fn run_with_timeout(
    mut cmd: Command,
    timeout: Duration,
) -> Output {
    let mut child = cmd
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");

    let start = Instant::now();
    loop {
        match child.try_wait() {
            Ok(Some(_status)) => {
                return child
                    .wait_with_output()
                    .expect("Failed to collect child output");
            }
            Ok(None) => {
                if start.elapsed() > timeout {
                    let _ = child.kill();
                    panic!("Process timed out");
                }
                thread::sleep(Duration::from_millis(20));
            }
            Err(e) => panic!("Error waiting for child process: {}", e),
        }
    }
}

#[test]
fn test_driver_binary_exits_silently() {
    let cmd = Command::new(env!("CARGO_BIN_EXE_fibbench"));
    let output = run_with_timeout(cmd, Duration::from_secs(60));

    assert!(output.status.success(), "fibbench exited with {}", output.status);
    assert!(output.stdout.is_empty(), "unexpected stdout");
    assert!(output.stderr.is_empty(), "unexpected stderr");
}

#[test]
fn test_driver_binary_ignores_arguments_and_env() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fibbench"));
    cmd.arg("--n").arg("5").env("RUST_LOG", "trace");
    let output = run_with_timeout(cmd, Duration::from_secs(60));

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
}

#[test]
fn test_report_binary_text() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fibbench-report"));
    cmd.args(["--n", "20", "--iterations", "5"]);
    let output = run_with_timeout(cmd, Duration::from_secs(60));

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("fibonacci_iterative: fib(20) x 5 = 6765 in "));
    assert!(!stdout.contains("(wrapped)"));
}

#[test]
fn test_report_binary_json() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fibbench-report"));
    cmd.args(["--iterations", "10", "--repeat", "2", "--json"]);
    let output = run_with_timeout(cmd, Duration::from_secs(60));

    assert!(output.status.success());
    let runs: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("report is not JSON");
    let runs = runs.as_array().expect("report is not a list");
    assert_eq!(runs.len(), 2);
    for run in runs {
        assert_eq!(run["n"], 1000);
        assert_eq!(run["iterations"], 10);
        assert_eq!(run["last"], 817_770_325_994_397_771i64);
        assert_eq!(run["exact"], false);
    }
}

#[test]
fn test_report_binary_rejects_zero_iterations() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fibbench-report"));
    cmd.args(["--iterations", "0"]);
    let output = run_with_timeout(cmd, Duration::from_secs(60));

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("iteration count must be greater than zero"));
}
