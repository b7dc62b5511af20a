//! Boundary types for numeric arguments
//!
//! Two shapes exist because the helpers disagree on what they accept:
//! - [`NumericInput`]: integer, float or numeric string (human numbers, percentages)
//! - [`Number`]: strictly an integer or a float (decimals, spelled-out words)
//!
//! Both are resolved once, at the start of an operation, into plain `f64`/`i64`.

use crate::error::{FormatError, Result};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Loose numeric string grammar: optional whitespace and sign, digits with an
/// optional fraction (or a bare `.5`), optional exponent.
static NUMERIC_STRING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?\s*$").expect("static pattern")
});

/// Returns true when `text` is a finite numeric string
pub fn is_numeric(text: &str) -> bool {
    parse_numeric_str(text).is_some()
}

fn parse_numeric_str(text: &str) -> Option<f64> {
    if !NUMERIC_STRING.is_match(text) {
        return None;
    }
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

// ─────────────────────────────────────────────────────────────────────────────
// NumericInput
// ─────────────────────────────────────────────────────────────────────────────

/// A number or something that might spell one
#[derive(Debug, Clone, PartialEq)]
pub enum NumericInput {
    Int(i64),
    Float(f64),
    Text(String),
}

impl NumericInput {
    /// Resolve to a finite `f64`, failing with [`FormatError::NotNumeric`]
    pub fn resolve(&self) -> Result<f64> {
        let resolved = match self {
            Self::Int(n) => Some(*n as f64),
            Self::Float(f) if f.is_finite() => Some(*f),
            Self::Float(_) => None,
            Self::Text(text) => parse_numeric_str(text),
        };

        resolved.ok_or_else(|| {
            tracing::debug!(input = %self, "rejected non-numeric input");
            FormatError::not_numeric(self)
        })
    }
}

impl fmt::Display for NumericInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::Float(v) => write!(f, "{}", v),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for NumericInput {
    fn from(value: f32) -> Self {
        Self::Float(value as f64)
    }
}

impl From<u64> for NumericInput {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(n) => Self::Int(n),
            Err(_) => Self::Float(value as f64),
        }
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Number> for NumericInput {
    fn from(value: Number) -> Self {
        match value {
            Number::Int(n) => Self::Int(n),
            Number::Float(f) => Self::Float(f),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Number
// ─────────────────────────────────────────────────────────────────────────────

/// Strict integer-or-float value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Parse a textual literal: `"12"` is an integer, `"12.0"` or `"1e3"` a float.
    ///
    /// Anything else is [`FormatError::InvalidNumericType`]; this is the
    /// boundary used by callers that only hold text (the CLI).
    pub fn parse_literal(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if let Ok(n) = trimmed.parse::<i64>() {
            return Ok(Self::Int(n));
        }
        match parse_numeric_str(trimmed) {
            Some(f) => Ok(Self::Float(f)),
            None => {
                tracing::debug!(input = text, "rejected non-numeric literal");
                Err(FormatError::invalid_type(text))
            }
        }
    }

    /// The value as a finite `f64`, failing with [`FormatError::InvalidNumericType`]
    pub fn finite(self) -> Result<f64> {
        match self {
            Self::Int(n) => Ok(n as f64),
            Self::Float(f) if f.is_finite() => Ok(f),
            Self::Float(f) => Err(FormatError::invalid_type(f)),
        }
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::Float(v) => write!(f, "{}", v),
        }
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Self::Float(value as f64)
    }
}

impl TryFrom<NumericInput> for Number {
    type Error = FormatError;

    fn try_from(value: NumericInput) -> Result<Self> {
        match value {
            NumericInput::Int(n) => Ok(Self::Int(n)),
            NumericInput::Float(f) if f.is_finite() => Ok(Self::Float(f)),
            other => Err(FormatError::invalid_type(other)),
        }
    }
}

/// Integer primitives convert losslessly into both input shapes
macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NumericInput {
                fn from(value: $t) -> Self {
                    Self::Int(value as i64)
                }
            }

            impl From<$t> for Number {
                fn from(value: $t) -> Self {
                    Self::Int(value as i64)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);
