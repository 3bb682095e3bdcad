use libm::{pow, round};

/// Rounds `value` to `decimals` decimal places, halves away from zero.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = pow(10.0, decimals as f64);
    round(value * factor) / factor
}

/// Expresses a fraction as a percentage rounded to `decimals` places.
///
/// The scaling happens in a single multiplication (`value * 10^(decimals + 2)`)
/// so that, for example, `0.40379` becomes `40.38` without an intermediate
/// `x 100` step introducing a second rounding error.
pub fn to_percent(value: f64, decimals: i32) -> f64 {
    let scale = pow(10.0, (decimals + 2) as f64);
    let factor = pow(10.0, decimals as f64);
    round(value * scale) / factor
}
