//! Grouped integers

use crate::rounding::group_thousands;

/// Format an integer with a thousands delimiter
///
/// Output is exact: no rounding, no decimal point. An empty delimiter disables
/// grouping.
///
/// # Examples
///
/// ```
/// use readable::format_integer;
///
/// assert_eq!(format_integer(1234567, ","), "1,234,567");
/// assert_eq!(format_integer(-12345, " "), "-12 345");
/// assert_eq!(format_integer(0, ","), "0");
/// ```
pub fn format_integer(value: i64, delimiter: &str) -> String {
    // unsigned_abs keeps i64::MIN representable
    let digits = value.unsigned_abs().to_string();
    let grouped = group_thousands(&digits, delimiter);
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
