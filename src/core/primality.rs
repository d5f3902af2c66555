/// Trial-division primality test.
///
/// The divisor bound is checked as `d <= n / d`, which equals `d * d <= n`
/// without overflowing near `u64::MAX`.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }

    let mut d: u64 = 3;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}
