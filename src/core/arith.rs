//! Integer helpers for divisor arithmetic.

/// Greatest common divisor by the Euclidean algorithm.
///
/// Both inputs are expected to be positive. Zero follows the usual
/// convention (`gcd(a, 0) == a`), so the loop always terminates.
///
/// # Examples
///
/// ```
/// use fizzbuzz_rs::core::gcd;
///
/// assert_eq!(gcd(6, 8), 2);
/// assert_eq!(gcd(8, 6), 2);
/// assert_eq!(gcd(7, 13), 1);
/// ```
#[must_use]
pub const fn gcd(a: u64, b: u64) -> u64 {
    let (mut dividend, mut divisor) = if a >= b { (a, b) } else { (b, a) };
    while divisor != 0 {
        let remainder = dividend % divisor;
        dividend = divisor;
        divisor = remainder;
    }
    dividend
}

/// Least common multiple, computed with integer division only.
///
/// Returns `None` when either input is zero or the result does not fit
/// in a `u64`.
///
/// # Examples
///
/// ```
/// use fizzbuzz_rs::core::lcm;
///
/// assert_eq!(lcm(6, 8), Some(24));
/// assert_eq!(lcm(4, 4), Some(4));
/// assert_eq!(lcm(0, 4), None);
/// ```
#[must_use]
pub const fn lcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return None;
    }
    // a / gcd is exact; dividing first keeps the product in range longer
    (a / gcd(a, b)).checked_mul(b)
}
