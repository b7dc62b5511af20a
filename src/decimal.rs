//! Fixed-precision decimals and decimal-or-integer collapsing

use crate::error::Result;
use crate::input::Number;
use crate::rounding::format_fixed;

/// Tolerance under which a float's fractional part counts as zero
///
/// Fixed, not scaled by magnitude: `200.0000000001` collapses, `200.001` does not.
pub const WHOLE_NUMBER_EPSILON: f64 = 1e-9;

/// Format a number with a fixed number of decimals and custom separators
///
/// Rounds half away from zero.
///
/// # Errors
/// [`FormatError::InvalidNumericType`](crate::FormatError::InvalidNumericType)
/// for NaN or infinite floats.
///
/// # Examples
///
/// ```
/// use readable::format_decimal;
///
/// assert_eq!(format_decimal(1000, 2, ".", ",").unwrap(), "1,000.00");
/// assert_eq!(format_decimal(1234.56, 1, ",", ".").unwrap(), "1.234,6");
/// ```
pub fn format_decimal(
    value: impl Into<Number>,
    decimals: usize,
    point: &str,
    delimiter: &str,
) -> Result<String> {
    let value = value.into().finite()?;
    Ok(format_fixed(value, decimals, point, delimiter))
}

/// Like [`format_decimal`], but whole-valued floats drop their decimals
///
/// Only floats collapse: an integer input keeps the requested precision, the
/// same way `100` renders as `100.00` while `200.0` renders as `200`.
///
/// # Examples
///
/// ```
/// use readable::format_decimal_or_integer;
///
/// assert_eq!(format_decimal_or_integer(200.0, 2, ".", ",").unwrap(), "200");
/// assert_eq!(format_decimal_or_integer(123.45, 2, ".", ",").unwrap(), "123.45");
/// ```
pub fn format_decimal_or_integer(
    value: impl Into<Number>,
    decimals: usize,
    point: &str,
    delimiter: &str,
) -> Result<String> {
    let number = value.into();
    let value = number.finite()?;

    let decimals = if number.is_float() && is_whole(value) {
        0
    } else {
        decimals
    };

    Ok(format_fixed(value, decimals, point, delimiter))
}

/// True when `value` is within [`WHOLE_NUMBER_EPSILON`] of the nearest integer
pub fn is_whole(value: f64) -> bool {
    (value - value.round()).abs() < WHOLE_NUMBER_EPSILON
}
