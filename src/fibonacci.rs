//! The workload being measured.

/// Computes the `n`th Fibonacci number by direct double recursion.
///
/// Nothing is cached, so every call for `n > 1` branches into two more calls and the total
/// number of calls grows like `2^n`. Results overflow `u64` past `n = 93`, long after the running
/// time has become impractical.
///
/// ```
/// assert_eq!(fib_growth::fibonacci(10), 55);
/// ```
pub fn fibonacci(n: u64) -> u64 {
    match n {
        0 | 1 => n,
        n => fibonacci(n - 1) + fibonacci(n - 2),
    }
}

/// Number of invocations `fibonacci(n)` performs, itself included.
///
/// Satisfies `C(n) = 1 + C(n - 1) + C(n - 2)` with `C(0) = C(1) = 1`, which works out to
/// `2 * F(n + 1) - 1`. Computed iteratively in `u128`, which holds every count for inputs whose
/// result fits in `u64`; larger inputs saturate.
///
/// ```
/// assert_eq!(fib_growth::call_count(10), 177);
/// ```
pub fn call_count(n: u64) -> u128 {
    let (mut prev, mut curr) = (1u128, 1u128);
    for _ in 1..n {
        let next = prev.saturating_add(curr).saturating_add(1);
        prev = curr;
        curr = next;
    }
    curr
}
