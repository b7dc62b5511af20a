//! Percentages of a total

use crate::error::{FormatError, Result};
use crate::input::NumericInput;
use crate::rounding::format_fixed;

/// Format `value / total * 100` followed by `%`
///
/// Both arguments are validated before anything is computed. A zero `total`
/// has nothing to show and yields `Ok(None)` rather than an error.
///
/// # Errors
/// [`FormatError::NotNumeric`] when either argument is not a number or
/// numeric string, [`FormatError::InvalidNumericType`] when the ratio
/// overflows to infinity.
///
/// # Examples
///
/// ```
/// use readable::format_percentage;
///
/// assert_eq!(format_percentage(50, 200, 2, ".", ",").unwrap().as_deref(), Some("25.00%"));
/// assert_eq!(format_percentage("25", "100", 0, ".", ",").unwrap().as_deref(), Some("25%"));
/// assert_eq!(format_percentage(5, 0, 2, ".", ",").unwrap(), None);
/// ```
pub fn format_percentage(
    value: impl Into<NumericInput>,
    total: impl Into<NumericInput>,
    decimals: usize,
    point: &str,
    delimiter: &str,
) -> Result<Option<String>> {
    let value = value.into().resolve()?;
    let total = total.into().resolve()?;

    if total == 0.0 {
        tracing::trace!(value, "percentage of a zero total");
        return Ok(None);
    }

    let percent = value / total * 100.0;
    if !percent.is_finite() {
        tracing::debug!(value, total, "percentage overflows");
        return Err(FormatError::invalid_type(percent));
    }

    Ok(Some(format!(
        "{}%",
        format_fixed(percent, decimals, point, delimiter)
    )))
}
