//! Integer rounding helpers for grid coordinates.
//!
//! The grid extends below the baseline and left of the origin, so every
//! helper here is defined for negative inputs as well. Results are always
//! exact multiples of the unit.

/// Smallest multiple of `unit` that is greater than or equal to `n`.
///
/// Saturates to the largest representable multiple near `i32::MAX`.
pub fn round_up(n: i32, unit: i32) -> i32 {
    let unit = sanitize(unit);
    let rem = n.rem_euclid(unit);
    if rem == 0 {
        return n;
    }
    n.checked_add(unit - rem)
        .unwrap_or_else(|| round_down(n, unit))
}

/// Largest multiple of `unit` that is less than or equal to `n`.
///
/// Saturates to the smallest representable multiple near `i32::MIN`.
pub fn round_down(n: i32, unit: i32) -> i32 {
    let unit = sanitize(unit);
    let rem = n.rem_euclid(unit);
    n.checked_sub(rem).unwrap_or(n + (unit - rem))
}

/// Position of `n` inside its `unit`-sized cell, in `0..unit`.
pub fn cell_offset(n: i32, unit: i32) -> i32 {
    n.rem_euclid(sanitize(unit))
}

fn sanitize(unit: i32) -> i32 {
    debug_assert!(unit > 0, "grid unit must be positive, got {unit}");
    unit.max(1)
}

#[cfg(test)]
mod tests;
