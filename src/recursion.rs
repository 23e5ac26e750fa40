//! Direct recursion, base case first.

/// Largest `n` whose factorial fits in a `u64`.
pub const MAX_FACTORIAL_INPUT: u32 = 20;

/// `n!`, or `None` once the product no longer fits in a `u64` (from `21!`).
///
/// Base case: `0! = 1`. Recursive case: `n! = n * (n - 1)!`. Inputs past
/// [`MAX_FACTORIAL_INPUT`] return `None` before recursing, so the depth never
/// exceeds 21 frames.
pub fn factorial(n: u32) -> Option<u64> {
    if n > MAX_FACTORIAL_INPUT {
        return None;
    }
    if n == 0 {
        return Some(1);
    }
    factorial(n - 1)?.checked_mul(u64::from(n))
}

/// `base^exp` by repeated squaring, or `None` on overflow.
///
/// Base case: `x^0 = 1`. Recursive case: compute `x^(exp/2)` once, square
/// it, and multiply by `x` again when `exp` is odd. Depth is `log2(exp)`.
pub fn power(base: i64, exp: u32) -> Option<i64> {
    if exp == 0 {
        return Some(1);
    }
    let half = power(base, exp / 2)?;
    let squared = half.checked_mul(half)?;
    if exp % 2 == 0 {
        Some(squared)
    } else {
        squared.checked_mul(base)
    }
}
