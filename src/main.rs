//! fibbench - benchmark driver
//!
//! Reads nothing, prints nothing, exits 0.

fn main() {
    let _ = fibbench::run();
}
