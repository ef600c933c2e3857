//! Ratio arithmetic.
//!
//! Ratios are exposed as `f64` in analysis results and as i64 basis
//! points (SCALE = 10_000) wherever a value must be byte-stable, such as
//! the canonical report digest.

/// Fixed-point scale factor. A basis-point ratio is `real * SCALE`.
pub const SCALE: i64 = 10_000;

/// `count / total` as a float. Returns 0.0 when `total` is 0.
pub fn ratio(count: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    f64::from(count) / f64::from(total)
}

/// Convert a ratio in `[0, 1]` to basis points, rounding to nearest.
/// Non-finite input maps to 0.
pub fn to_bp(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    (value * SCALE as f64).round() as i64
}
