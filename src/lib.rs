//! readable - numbers, byte sizes, dates and durations for humans
//!
//! The number helpers are pure functions: every formatting option (decimal
//! point, thousands delimiter, precision) is an argument, and "nothing to
//! show" is `None` rather than an error.
//!
//! ```
//! use readable::{format_byte_size, format_human_number, format_integer, UnitBase};
//!
//! assert_eq!(format_integer(1234567, ","), "1,234,567");
//! assert_eq!(format_human_number(1524999, true, 2).unwrap(), "1.52M");
//! assert_eq!(format_byte_size(1500, UnitBase::Decimal).as_deref(), Some("1.5 KB"));
//! ```
//!
//! Date helpers go through a [`DateTimeProvider`]; [`ChronoProvider`] is the
//! default one.
//!
//! ```
//! use readable::{format_date, ChronoProvider};
//!
//! assert_eq!(format_date(&ChronoProvider, "2003-05-25", None).unwrap(), "25 May 2003");
//! ```

// ─────────────────────────────────────────────────────────────────────────────
// Formatting core
// ─────────────────────────────────────────────────────────────────────────────

pub mod datetime;
pub mod decimal;
pub mod error;
pub mod human;
pub mod input;
pub mod number;
pub mod ordinal;
pub mod percentage;
pub mod rounding;
pub mod size;
pub mod words;

// ─────────────────────────────────────────────────────────────────────────────
// Command-line front end
// ─────────────────────────────────────────────────────────────────────────────

pub mod cli;
pub mod config;
pub mod demo;
pub mod logging;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use datetime::{
    format_date, format_date_time, format_date_time_length, format_diff, format_time,
    format_time_length, ChronoProvider, DateInput, DateStyle, DateTimeProvider, Interval, Zone,
};
pub use decimal::{format_decimal, format_decimal_or_integer};
pub use error::{FormatError, Result};
pub use human::format_human_number;
pub use input::{is_numeric, Number, NumericInput};
pub use number::format_integer;
pub use ordinal::format_ordinal;
pub use percentage::format_percentage;
pub use size::{format_byte_size, UnitBase};
pub use words::spell_out;
