//! Human-abbreviated ("social") numbers: 1.2K, 3.4M, 5B
//!
//! The magnitude is picked from a static ascending table; the largest threshold
//! not above the absolute value wins, so values sitting exactly on a threshold
//! move to the upper bucket (`1000` is `1.0K`, never `1000.0`). Values under
//! one thousand have no suffix and count whole units, so `999.7` is `999.0`.

use crate::error::Result;
use crate::input::NumericInput;
use crate::rounding::format_fixed;

/// (threshold, suffix) pairs in ascending order
pub const MAGNITUDES: &[(f64, &str)] = &[
    (1.0, ""),
    (1e3, "K"),
    (1e6, "M"),
    (1e9, "B"),
    (1e12, "T"),
];

/// Pick the bucket for a non-negative magnitude (`None` below 1)
pub fn select_magnitude(abs: f64) -> Option<(f64, &'static str)> {
    MAGNITUDES
        .iter()
        .rev()
        .find(|(threshold, _)| abs >= *threshold)
        .copied()
}

/// Format a number as an abbreviated magnitude
///
/// - `show_decimal`: keep the fraction of the magnitude; with `decimals == 0`
///   this means exactly one fractional digit
/// - `decimals`: explicit precision; without `show_decimal` the magnitude is
///   floored first and then padded to this many digits
///
/// # Errors
/// [`FormatError::NotNumeric`](crate::FormatError::NotNumeric) when the input is
/// neither a number nor a numeric string.
///
/// # Examples
///
/// ```
/// use readable::format_human_number;
///
/// assert_eq!(format_human_number(1000, true, 0).unwrap(), "1.0K");
/// assert_eq!(format_human_number(1524999, true, 2).unwrap(), "1.52M");
/// assert_eq!(format_human_number(-3400000, false, 0).unwrap(), "-3M");
/// assert_eq!(format_human_number("12345", true, 0).unwrap(), "12.3K");
/// ```
pub fn format_human_number(
    value: impl Into<NumericInput>,
    show_decimal: bool,
    decimals: usize,
) -> Result<String> {
    let value = value.into().resolve()?;

    let precision = if show_decimal && decimals == 0 {
        1
    } else {
        decimals
    };

    let Some((threshold, suffix)) = select_magnitude(value.abs()) else {
        return Ok("0".to_string());
    };

    let mut magnitude = value.abs() / threshold;
    // The unit bucket only ever shows whole units
    if !show_decimal || threshold == 1.0 {
        magnitude = magnitude.floor();
    }

    let rendered = format_fixed(magnitude, precision, ".", ",");
    if value < 0.0 {
        Ok(format!("-{}{}", rendered, suffix))
    } else {
        Ok(format!("{}{}", rendered, suffix))
    }
}
