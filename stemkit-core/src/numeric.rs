//! Arithmetic helpers that never trap
//!
//! Division and modulus by zero yield zero instead of panicking; callers such
//! as accuracy reporting treat an empty denominator as "nothing to measure".

/// `numerator / denominator`, or 0 when the denominator is 0
#[inline]
pub fn safe_divide(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// `value % modulus`, or 0 when the modulus is 0
#[inline]
pub fn safe_modulus(value: usize, modulus: usize) -> usize {
    value.checked_rem(modulus).unwrap_or(0)
}

/// Check whether two values differ by at most `tolerance`
#[inline]
pub fn within_tolerance(a: f64, b: f64, tolerance: f64) -> bool {
    debug_assert!(tolerance >= 0.0, "tolerance must not be negative");
    (a - b).abs() <= tolerance
}
