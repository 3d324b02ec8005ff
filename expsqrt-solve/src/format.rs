//! Display formatting for solver results.
//!
//! Rust's float formatting is locale-independent, so the decimal point is
//! always `.` regardless of the user's environment.

/// Renders a value in scientific notation when its magnitude calls for it.
///
/// Rules, in order: zero renders as `"0"`, NaN as `"undefined"`, magnitudes
/// at or beyond `1e4`/`1e-4` in scientific notation with four fractional
/// digits and the exponent marker rendered as `" × 10^"`, and everything
/// else in fixed notation with eight fractional digits.
#[must_use]
pub fn scientific(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "undefined".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e4 || magnitude <= 1e-4 {
        format!("{value:.4e}").replace('e', " × 10^")
    } else {
        format!("{value:.8}")
    }
}

/// Renders a value in fixed notation with eight fractional digits.
///
/// Used for displaying roots, which always fall inside the clamped search
/// interval and never need an exponent.
#[must_use]
pub fn fixed(value: f64) -> String {
    if value.is_nan() {
        return "undefined".to_string();
    }
    format!("{value:.8}")
}
