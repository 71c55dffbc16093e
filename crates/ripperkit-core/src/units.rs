//! Fixed-point number formatting
//!
//! Coordinates shown in the overlay label and written to part files use a
//! fixed number of decimals with exact halfway values rounded away from zero.
//! `format!("{:.N}")` rounds those ties to even, so `0.125` would print as
//! `0.12` instead of `0.13`.

/// Largest supported decimal count
pub const MAX_DECIMALS: u32 = 20;

/// 2^53; above this every f64 is an integer and never a tie.
const EXACT_INT_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Format `value` with exactly `decimals` digits after the point.
///
/// * Exact halfway values round away from zero
/// * Negative zero prints as zero, tiny negatives keep the sign (`-0.00`)
/// * `NaN` and infinities print as `NaN`, `Infinity`, `-Infinity`
///
/// `decimals` is clamped to [`MAX_DECIMALS`].
pub fn format_fixed(value: f64, decimals: u32) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let decimals = decimals.min(MAX_DECIMALS);
    let magnitude = value.abs();
    let digits = match halfway_numerator(magnitude, decimals) {
        Some(j) => {
            // magnitude = j / 2^(d+1), so magnitude * 10^d = j * 5^d / 2
            let n = (j * 5u128.pow(decimals) + 1) / 2;
            if decimals == 0 {
                n.to_string()
            } else {
                let unit = 10u128.pow(decimals);
                format!(
                    "{}.{:0width$}",
                    n / unit,
                    n % unit,
                    width = decimals as usize
                )
            }
        }
        None => format!("{:.*}", decimals as usize, magnitude),
    };

    if value < 0.0 {
        format!("-{}", digits)
    } else {
        digits
    }
}

/// A value sits exactly between two `decimals`-digit neighbours only when it
/// is an odd multiple of `1 / 2^(decimals + 1)`. Returns that odd multiple.
fn halfway_numerator(magnitude: f64, decimals: u32) -> Option<u128> {
    let scaled = magnitude * 2f64.powi(decimals as i32 + 1);
    if scaled.fract() != 0.0 || scaled >= EXACT_INT_LIMIT {
        return None;
    }
    let j = scaled as u64;
    (j % 2 == 1).then_some(u128::from(j))
}
