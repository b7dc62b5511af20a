//! English ordinal suffixes

/// Suffix for a non-negative integer: 11-13 are always "th"
pub fn ordinal_suffix(n: u64) -> &'static str {
    if (11..=13).contains(&(n % 100)) {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Append the English ordinal suffix to an integer
///
/// The suffix comes from the absolute value; a leading `-` is kept.
///
/// # Examples
///
/// ```
/// use readable::format_ordinal;
///
/// assert_eq!(format_ordinal(21), "21st");
/// assert_eq!(format_ordinal(112), "112th");
/// assert_eq!(format_ordinal(-1), "-1st");
/// ```
pub fn format_ordinal(value: i64) -> String {
    format!("{}{}", value, ordinal_suffix(value.unsigned_abs()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ordinal() {
        let cases = [
            (1, "1st"),
            (2, "2nd"),
            (3, "3rd"),
            (4, "4th"),
            (11, "11th"),
            (12, "12th"),
            (13, "13th"),
            (21, "21st"),
            (102, "102nd"),
            (111, "111th"),
            (1013, "1013th"),
            (-1, "-1st"),
            (-12, "-12th"),
            (0, "0th"),
        ];
        for (input, expected) in cases {
            assert_eq!(format_ordinal(input), expected, "input {}", input);
        }
    }

    #[test]
    fn test_teens_always_th() {
        for n in 0..2_000u64 {
            if (11..=13).contains(&(n % 100)) {
                assert_eq!(ordinal_suffix(n), "th", "n = {}", n);
            }
        }
    }

    #[test]
    fn test_extremes() {
        assert_eq!(format_ordinal(i64::MAX), "9223372036854775807th");
        assert_eq!(format_ordinal(i64::MIN), "-9223372036854775808th");
    }
}
