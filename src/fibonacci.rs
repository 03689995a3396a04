//! Iterative Fibonacci
//!
//! Two rolling accumulators, O(n) time and O(1) space. Arithmetic is
//! fixed-width `i64` and wraps silently on overflow in every build profile,
//! so `fibonacci(1000)` yields the same bit pattern as any other
//! two's-complement 64-bit port.

/// Largest index whose Fibonacci number fits in an `i64`.
pub const MAX_EXACT_INDEX: i64 = 92;

/// Returns F(n), wrapping modulo 2^64 once the value leaves the `i64` range.
///
/// `n <= 1` is returned unchanged.
///
/// # Example
///
/// ```
/// use fibbench::fibonacci;
///
/// assert_eq!(fibonacci(10), 55);
/// assert_eq!(fibonacci(92), 7_540_113_804_746_346_429);
/// ```
#[inline(never)]
pub fn fibonacci(n: i64) -> i64 {
    if n <= 1 {
        return n;
    }
    let mut a: i64 = 0;
    let mut b: i64 = 1;
    for _ in 2..=n {
        let next = a.wrapping_add(b);
        a = b;
        b = next;
    }
    b
}

/// Like [`fibonacci`], but `None` when F(n) does not fit in an `i64`.
pub fn fibonacci_checked(n: i64) -> Option<i64> {
    if n <= 1 {
        return Some(n);
    }
    let mut a: i64 = 0;
    let mut b: i64 = 1;
    for _ in 2..=n {
        let next = a.checked_add(b)?;
        a = b;
        b = next;
    }
    Some(b)
}
