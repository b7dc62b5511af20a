//! Error taxonomy for the formatting helpers
//!
//! "Nothing to show" cases (zero byte sizes, a zero percentage total) are not
//! errors: those operations return `Option::None` instead.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A value that may be a number or a numeric string is neither
    #[error("The value must be numeric! (got {input:?})")]
    NotNumeric { input: String },

    /// A value that must be a strict integer or float is something else
    #[error("Wrong input type: expected an integer or float, got {input:?}")]
    InvalidNumericType { input: String },

    /// Date/time text the provider cannot make sense of
    #[error("Could not parse {input:?} as a date/time")]
    InvalidDateTime { input: String },

    /// Timezone identifier that is neither UTC nor a fixed offset
    #[error("Unknown timezone {tz:?} (use UTC or an offset like +02:00)")]
    InvalidTimezone { tz: String },
}

impl FormatError {
    pub(crate) fn not_numeric(input: impl ToString) -> Self {
        Self::NotNumeric {
            input: input.to_string(),
        }
    }

    pub(crate) fn invalid_type(input: impl ToString) -> Self {
        Self::InvalidNumericType {
            input: input.to_string(),
        }
    }
}

/// Convenience Result type using our error
pub type Result<T> = std::result::Result<T, FormatError>;
