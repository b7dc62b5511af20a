//! Rounding and fixed-point rendering shared by every numeric helper
//!
//! Rounding is always half away from zero. Before rounding, the scaled value is
//! cut to 15 significant digits so that values such as `1.005` (stored as
//! `1.00499999…`) round the way they read.

/// Significant digits kept before the final rounding step
const PRE_ROUNDING_DIGITS: usize = 15;

/// Upper bound on fractional digits; an f64 carries no information past this
pub const MAX_DECIMALS: usize = 20;

/// Round `value` to `decimals` fractional digits, half away from zero
///
/// # Examples
///
/// ```
/// use readable::rounding::round_half_away;
///
/// assert_eq!(round_half_away(2.5, 0), 3.0);
/// assert_eq!(round_half_away(-2.5, 0), -3.0);
/// assert_eq!(round_half_away(1.005, 2), 1.01);
/// ```
pub fn round_half_away(value: f64, decimals: usize) -> f64 {
    let factor = pow10(decimals);
    let scaled = value * factor;
    // Magnitudes this large carry no fractional digits to round
    if !scaled.is_finite() {
        return value;
    }
    pre_round(scaled).round() / factor
}

fn pre_round(value: f64) -> f64 {
    if value == 0.0 {
        return value;
    }
    format!("{:.*e}", PRE_ROUNDING_DIGITS - 1, value)
        .parse()
        .unwrap_or(value)
}

fn pow10(decimals: usize) -> f64 {
    10f64.powi(decimals.min(MAX_DECIMALS) as i32)
}

/// Insert `delimiter` every three digits, counting from the right
///
/// `digits` must be plain ASCII digits without a sign.
pub fn group_thousands(digits: &str, delimiter: &str) -> String {
    if delimiter.is_empty() || digits.len() <= 3 {
        return digits.to_string();
    }

    let first_group = match digits.len() % 3 {
        0 => 3,
        n => n,
    };

    let mut out = String::with_capacity(digits.len() + delimiter.len() * (digits.len() / 3));
    out.push_str(&digits[..first_group]);
    let mut idx = first_group;
    while idx < digits.len() {
        out.push_str(delimiter);
        out.push_str(&digits[idx..idx + 3]);
        idx += 3;
    }
    out
}

/// Render `value` with exactly `decimals` fractional digits
///
/// The integer part is grouped with `delimiter` and joined to the fraction with
/// `point`. A minus sign is only written when a nonzero digit survives rounding,
/// so `-0.001` renders as `0.00`, never `-0.00`. `decimals` is capped at
/// [`MAX_DECIMALS`]. NaN and infinities have no digits to group and render as
/// `NaN`, `inf` or `-inf`.
///
/// # Examples
///
/// ```
/// use readable::rounding::format_fixed;
///
/// assert_eq!(format_fixed(1234.56, 1, ",", "."), "1.234,6");
/// assert_eq!(format_fixed(-1234567.891, 2, ".", ","), "-1,234,567.89");
/// ```
pub fn format_fixed(value: f64, decimals: usize, point: &str, delimiter: &str) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let decimals = decimals.min(MAX_DECIMALS);
    let rounded = round_half_away(value.abs(), decimals);

    // Every digit of the whole part is printed, at any magnitude
    let text = format!("{:.*}", decimals, rounded);
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut out = String::with_capacity(text.len() + point.len() + 8);
    if value.is_sign_negative() && text.bytes().any(|b| (b'1'..=b'9').contains(&b)) {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part, delimiter));
    if decimals > 0 {
        out.push_str(point);
        out.push_str(frac_part);
    }
    out
}
