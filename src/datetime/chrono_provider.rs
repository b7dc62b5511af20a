//! chrono-backed [`DateTimeProvider`]

use super::{parse_timezone, DateTimeProvider};
use crate::error::{FormatError, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

/// Wall-clock formats, tried in order (two-digit years before four-digit ones
/// so `04/17/27` reads as 2027)
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d-%m-%Y %H:%M",
    "%m/%d/%y %H:%M:%S",
    "%m/%d/%y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Date-only formats; midnight is assumed
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y", "%m/%d/%y", "%m/%d/%Y"];

/// Parses with chrono and reads the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoProvider;

impl DateTimeProvider for ChronoProvider {
    fn parse(&self, input: &str, tz: Option<&str>) -> Result<DateTime<FixedOffset>> {
        let target = tz.map(parse_timezone).transpose()?;

        let parsed = parse_instant(input.trim()).ok_or_else(|| {
            tracing::debug!(input, "unrecognised date/time");
            FormatError::InvalidDateTime {
                input: input.to_string(),
            }
        })?;

        Ok(match target {
            Some(zone) => zone.convert(&parsed),
            None => parsed,
        })
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

fn parse_instant(text: &str) -> Option<DateTime<FixedOffset>> {
    if let Some(seconds) = text.strip_prefix('@') {
        let seconds: i64 = seconds.parse().ok()?;
        return DateTime::from_timestamp(seconds, 0).map(|dt| dt.fixed_offset());
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant);
    }

    // "2020-08-26 17:38 +02:00", "2020-08-26 UTC", "2020-08-26 09:00 Asia/Tokyo"
    if let Some((head, zone)) = text.rsplit_once(' ') {
        if let Ok(zone) = parse_timezone(zone) {
            return zone.localize(&parse_naive(head.trim_end())?);
        }
    }

    parse_naive(text).map(|naive| naive.and_utc().fixed_offset())
}

fn parse_naive(text: &str) -> Option<NaiveDateTime> {
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}
