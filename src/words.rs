//! Numbers spelled out as English words
//!
//! Output follows the usual spell-out conventions: hyphenated tens
//! ("forty-two"), no "and", short-scale names, "minus" for negatives and
//! digit-by-digit fractions after "point".

use crate::error::Result;
use crate::input::Number;

const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Short-scale names, one per group of three digits
const SCALES: [&str; 12] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion",
    "decillion",
];

/// Returned for magnitudes past the scale table
pub const UNKNOWN: &str = "unknown";

/// Spell a number out in English words
///
/// # Errors
/// [`FormatError::InvalidNumericType`](crate::FormatError::InvalidNumericType)
/// for NaN or infinite floats.
///
/// # Examples
///
/// ```
/// use readable::spell_out;
///
/// assert_eq!(spell_out(123).unwrap(), "one hundred twenty-three");
/// assert_eq!(spell_out(-42).unwrap(), "minus forty-two");
/// assert_eq!(spell_out(1.5).unwrap(), "one point five");
/// ```
pub fn spell_out(value: impl Into<Number>) -> Result<String> {
    let number = value.into();
    let value = number.finite()?;

    let negative = value < 0.0;
    // Integers go through their exact digits; floats through the shortest
    // representation that round-trips
    let text = match number {
        Number::Int(n) => n.unsigned_abs().to_string(),
        Number::Float(f) => format!("{}", f.abs()),
    };
    let (int_digits, frac_digits) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let Some(mut words) = spell_digits(int_digits) else {
        tracing::debug!(value, "number too large to spell out");
        return Ok(UNKNOWN.to_string());
    };

    if !frac_digits.is_empty() {
        words.push_str(" point");
        for digit in frac_digits.bytes() {
            words.push(' ');
            words.push_str(ONES[(digit - b'0') as usize]);
        }
    }

    if negative {
        words.insert_str(0, "minus ");
    }
    Ok(words)
}

/// Spell a whole number given as ASCII digits (`None` past the scale table)
fn spell_digits(digits: &str) -> Option<String> {
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Some(ONES[0].to_string());
    }

    let group_count = digits.len().div_ceil(3);
    if group_count > SCALES.len() {
        return None;
    }

    let mut parts: Vec<String> = Vec::new();
    let first_len = digits.len() - (group_count - 1) * 3;
    let mut start = 0;
    for scale in (0..group_count).rev() {
        let end = if start == 0 { first_len } else { start + 3 };
        let group: u32 = digits[start..end].parse().ok()?;
        start = end;

        if group == 0 {
            continue;
        }
        let mut part = spell_below_thousand(group);
        if scale > 0 {
            part.push(' ');
            part.push_str(SCALES[scale]);
        }
        parts.push(part);
    }

    Some(parts.join(" "))
}

fn spell_below_thousand(n: u32) -> String {
    let hundreds = n / 100;
    let rest = n % 100;

    let mut out = String::new();
    if hundreds > 0 {
        out.push_str(ONES[hundreds as usize]);
        out.push_str(" hundred");
    }
    if rest > 0 {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&spell_below_hundred(rest));
    }
    out
}

fn spell_below_hundred(n: u32) -> String {
    if n < 20 {
        return ONES[n as usize].to_string();
    }
    let tens = TENS[(n / 10) as usize];
    match n % 10 {
        0 => tens.to_string(),
        ones => format!("{}-{}", tens, ONES[ones as usize]),
    }
}
