//! Overflow-checked integer helpers used by scale canonicalization.

use crate::error::ScaleError;

/// `base^exp`, failing with [`ScaleError::Overflow`] instead of wrapping.
pub const fn checked_pow(base: i64, exp: u32) -> Result<i64, ScaleError> {
    match base.checked_pow(exp) {
        Some(value) => Ok(value),
        None => Err(ScaleError::Overflow),
    }
}

pub const fn checked_mul(a: i64, b: i64) -> Result<i64, ScaleError> {
    match a.checked_mul(b) {
        Some(value) => Ok(value),
        None => Err(ScaleError::Overflow),
    }
}

pub const fn checked_mul_u32(a: u32, b: u32) -> Result<u32, ScaleError> {
    match a.checked_mul(b) {
        Some(value) => Ok(value),
        None => Err(ScaleError::Overflow),
    }
}

/// Exact integer `index`-th root of a positive `value`.
///
/// Returns `None` when no integer root exists. Candidates are verified by
/// re-exponentiation, so a root is only reported when `root^index == value`.
pub const fn exact_root(value: i64, index: u32) -> Option<i64> {
    if value <= 0 || index == 0 {
        return None;
    }
    if index == 1 || value == 1 {
        return Some(value);
    }
    // 2^63 overflows i64, so only 1 has a root of index >= 63.
    if index >= 63 {
        return None;
    }

    let (mut lo, mut hi) = (1i64, value);
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        match mid.checked_pow(index) {
            Some(p) if p == value => return Some(mid),
            Some(p) if p < value => lo = mid + 1,
            _ => hi = mid - 1,
        }
    }
    None
}

/// Smallest prime factor of `n` (for `n >= 2`).
pub const fn smallest_prime_factor(n: u32) -> u32 {
    if n % 2 == 0 {
        return 2;
    }
    let mut d = 3u32;
    while (d as u64) * (d as u64) <= n as u64 {
        if n % d == 0 {
            return d;
        }
        d += 2;
    }
    n
}

pub const fn gcd_u32(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Least common multiple, checked.
pub const fn lcm_u32(a: u32, b: u32) -> Result<u32, ScaleError> {
    let g = gcd_u32(a, b);
    if g == 0 {
        return Ok(0);
    }
    checked_mul_u32(a / g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_root_finds_perfect_powers() {
        assert_eq!(exact_root(100, 2), Some(10));
        assert_eq!(exact_root(27, 3), Some(3));
        assert_eq!(exact_root(1 << 62, 62), Some(2));
        assert_eq!(exact_root(1, 1000), Some(1));
        assert_eq!(exact_root(7, 1), Some(7));
    }

    #[test]
    fn exact_root_rejects_non_powers() {
        assert_eq!(exact_root(10, 2), None);
        assert_eq!(exact_root(26, 3), None);
        assert_eq!(exact_root(2, 63), None);
        assert_eq!(exact_root(0, 2), None);
        assert_eq!(exact_root(-8, 3), None);
    }

    #[test]
    fn exact_root_handles_large_values() {
        let square = 3_037_000_499i64 * 3_037_000_499i64;
        assert_eq!(exact_root(square, 2), Some(3_037_000_499));
        assert_eq!(exact_root(i64::MAX, 2), None);
    }

    #[test]
    fn checked_pow_reports_overflow() {
        assert_eq!(checked_pow(10, 18), Ok(1_000_000_000_000_000_000));
        assert_eq!(checked_pow(10, 19), Err(ScaleError::Overflow));
    }

    #[test]
    fn prime_factor_and_lcm() {
        assert_eq!(smallest_prime_factor(2), 2);
        assert_eq!(smallest_prime_factor(9), 3);
        assert_eq!(smallest_prime_factor(97), 97);
        assert_eq!(smallest_prime_factor(u32::MAX), 3);
        assert_eq!(lcm_u32(4, 6), Ok(12));
        assert_eq!(lcm_u32(1, 7), Ok(7));
    }
}
