//! Byte sizes in decimal (kB = 1000) or binary (KiB = 1024) units

use crate::rounding::format_fixed;
use serde::{Deserialize, Serialize};

const DECIMAL_UNITS: [&str; 7] = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];
const BINARY_UNITS: [&str; 7] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];

/// Which unit family to scale with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitBase {
    /// SI units, base 1000
    #[default]
    Decimal,
    /// IEC units, base 1024
    Binary,
}

impl UnitBase {
    /// `true` selects decimal units, `false` binary ones
    pub fn from_decimal_flag(decimal: bool) -> Self {
        if decimal {
            Self::Decimal
        } else {
            Self::Binary
        }
    }

    pub fn base(self) -> u64 {
        match self {
            Self::Decimal => 1000,
            Self::Binary => 1024,
        }
    }

    pub fn units(self) -> &'static [&'static str; 7] {
        match self {
            Self::Decimal => &DECIMAL_UNITS,
            Self::Binary => &BINARY_UNITS,
        }
    }
}

/// floor(log_base(bytes)), capped at the last unit
///
/// Integer division keeps exact powers (1000000, 1024^3…) from slipping into the
/// lower unit the way `ln(x) / ln(base)` can.
fn unit_exponent(bytes: u64, base: u64, max: u32) -> u32 {
    let mut exponent = 0;
    let mut rest = bytes;
    while exponent < max && rest >= base {
        rest /= base;
        exponent += 1;
    }
    exponent
}

/// Format a byte count as `"<value> <unit>"`
///
/// The value is rounded to at most two decimals with trailing zeros dropped.
/// Counts of zero or less have nothing to show and return `None`.
///
/// # Examples
///
/// ```
/// use readable::{format_byte_size, UnitBase};
///
/// assert_eq!(format_byte_size(1500, UnitBase::Decimal).as_deref(), Some("1.5 KB"));
/// assert_eq!(format_byte_size(1024, UnitBase::Binary).as_deref(), Some("1 KiB"));
/// assert_eq!(format_byte_size(0, UnitBase::Decimal), None);
/// ```
pub fn format_byte_size(bytes: i64, base: UnitBase) -> Option<String> {
    if bytes <= 0 {
        return None;
    }

    let bytes = bytes as u64;
    let units = base.units();
    let exponent = unit_exponent(bytes, base.base(), (units.len() - 1) as u32);

    let scaled = bytes as f64 / (base.base() as f64).powi(exponent as i32);
    let rendered = format_fixed(scaled, 2, ".", "");
    let rendered = rendered.trim_end_matches('0').trim_end_matches('.');

    Some(format!("{} {}", rendered, units[exponent as usize]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decimal(bytes: i64) -> String {
        format_byte_size(bytes, UnitBase::Decimal).unwrap()
    }

    fn binary(bytes: i64) -> String {
        format_byte_size(bytes, UnitBase::Binary).unwrap()
    }

    #[test]
    fn test_non_positive_is_no_result() {
        assert_eq!(format_byte_size(0, UnitBase::Decimal), None);
        assert_eq!(format_byte_size(-10, UnitBase::Decimal), None);
        assert_eq!(format_byte_size(i64::MIN, UnitBase::Binary), None);
    }

    #[test]
    fn test_decimal_units() {
        assert_eq!(decimal(1), "1 B");
        assert_eq!(decimal(999), "999 B");
        assert_eq!(decimal(1000), "1 KB");
        assert_eq!(decimal(1500), "1.5 KB");
        assert_eq!(decimal(1_234_567), "1.23 MB");
        assert_eq!(decimal(1_000_000), "1 MB");
        assert_eq!(decimal(1_000_000_000), "1 GB");
        assert_eq!(decimal(2_500_000_000_000), "2.5 TB");
    }

    #[test]
    fn test_binary_units() {
        assert_eq!(binary(1023), "1023 B");
        assert_eq!(binary(1024), "1 KiB");
        assert_eq!(binary(1536), "1.5 KiB");
        assert_eq!(binary(1024 * 1024), "1 MiB");
        assert_eq!(binary(1024 * 1024 * 1024), "1 GiB");
    }

    #[test]
    fn test_top_unit_is_capped() {
        assert_eq!(decimal(i64::MAX), "9.22 EB");
        assert_eq!(binary(i64::MAX), "8 EiB");
        assert_eq!(unit_exponent(u64::MAX, 1000, 6), 6);
    }

    #[test]
    fn test_rounding_stays_in_unit() {
        // 999.999 KB rounds to 1000 within the same unit
        assert_eq!(decimal(999_999), "1000 KB");
        assert_eq!(decimal(1_005), "1.01 KB");
    }

    #[test]
    fn test_unit_tables() {
        assert_eq!(UnitBase::Decimal.units()[6], "EB");
        assert_eq!(UnitBase::Binary.units()[6], "EiB");
        assert_eq!(UnitBase::from_decimal_flag(false), UnitBase::Binary);
    }
}
