/// Largest `n` whose factorial fits in a `u64` (20! = 2432902008176640000).
pub const MAX_EXACT_FACTORIAL_INPUT: u64 = 20;

/// Computes `n!`, or `None` if the product exceeds `u64::MAX`.
pub fn checked_factorial(n: u32) -> Option<u64> {
    if n == 0 || n == 1 {
        return Some(1);
    }

    let mut result: u64 = 1;
    for i in 2..=u64::from(n) {
        if result > u64::MAX / i {
            return None;
        }
        result *= i;
    }
    Some(result)
}

/// Computes `n!`, returning the sentinel `0` on overflow.
///
/// No factorial is ever zero, so the sentinel cannot collide with a real result.
pub fn factorial(n: u32) -> u64 {
    checked_factorial(n).unwrap_or(0)
}
