//! Fixed-point number formatting for the display strings.

/// Format `value` with `digits` fractional digits, rounding exact ties away
/// from zero (`Number.prototype.toFixed` behaviour).
///
/// `format!("{:.N}")` picks the even neighbour on an exact tie, so 18.25
/// would print as 18.2. Ties are only possible when the value is an odd
/// multiple of 2^-(digits+1); those are nudged one ulp outwards first.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    let formatted = if is_tie(magnitude, digits) {
        format!("{:.*}", digits, f64::from_bits(magnitude.to_bits() + 1))
    } else {
        format!("{:.*}", digits, magnitude)
    };

    if value.is_sign_negative() && value != 0.0 {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

/// Whether `magnitude` lies exactly halfway between two `digits`-place decimals.
fn is_tie(magnitude: f64, digits: usize) -> bool {
    let Ok(exp) = i32::try_from(digits) else {
        return false;
    };
    let scaled = magnitude * 2f64.powi(exp + 1);
    scaled.is_finite() && scaled.fract() == 0.0 && (scaled / 2.0).fract() != 0.0
}
