//! Dates, times and durations for humans
//!
//! These helpers are thin pass-throughs: parsing, clock access and calendar
//! arithmetic come from a [`DateTimeProvider`]. [`ChronoProvider`] is the
//! implementation backed by chrono; tests swap in a provider with a frozen
//! clock.
//!
//! Timezones are `UTC`/`GMT`/`Z`, fixed offsets (`+02:00`, `-0500`, `+09`) or
//! IANA names (`Europe/London`), which follow their daylight-saving rules.
//! Inputs without a zone are read as UTC and then converted to the requested
//! zone.

use crate::error::{FormatError, Result};
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

mod chrono_provider;
pub mod interval;

pub use chrono_provider::ChronoProvider;
pub use interval::Interval;

// ─────────────────────────────────────────────────────────────────────────────
// Inputs and styles
// ─────────────────────────────────────────────────────────────────────────────

/// Something that can be resolved to an instant
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    /// Text to be parsed by the provider
    Text(String),
    /// An already-parsed instant
    Instant(DateTime<FixedOffset>),
    /// The provider's current time
    Now,
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<DateTime<FixedOffset>> for DateInput {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::Instant(value)
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Instant(value.fixed_offset())
    }
}

impl<T: Into<DateInput>> From<Option<T>> for DateInput {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Now)
    }
}

/// How an instant is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `25 May 2003`
    Date,
    /// `17:38`
    Time,
    /// `17:38:23`
    TimeWithSeconds,
    /// `Wednesday, August 26, 2020 05:38 PM`
    DateTime,
    /// `Wednesday, August 26, 2020 05:38:23 PM`
    DateTimeWithSeconds,
}

impl DateStyle {
    pub fn pattern(self) -> &'static str {
        match self {
            Self::Date => "%-d %B %Y",
            Self::Time => "%H:%M",
            Self::TimeWithSeconds => "%H:%M:%S",
            Self::DateTime => "%A, %B %d, %Y %I:%M %p",
            Self::DateTimeWithSeconds => "%A, %B %d, %Y %I:%M:%S %p",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Timezones
// ─────────────────────────────────────────────────────────────────────────────

/// A timezone the helpers can convert into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// Constant offset from UTC
    Fixed(FixedOffset),
    /// IANA zone; its offset depends on the instant
    Named(Tz),
}

impl Zone {
    /// `instant` as seen on a wall clock in this zone
    pub fn convert(&self, instant: &DateTime<FixedOffset>) -> DateTime<FixedOffset> {
        match self {
            Self::Fixed(offset) => instant.with_timezone(offset),
            Self::Named(tz) => instant.with_timezone(tz).fixed_offset(),
        }
    }

    /// Pin a wall-clock time to this zone
    ///
    /// A time repeated when clocks go back takes its earlier reading; a time
    /// skipped when clocks go forward does not exist and yields `None`.
    pub fn localize(&self, naive: &NaiveDateTime) -> Option<DateTime<FixedOffset>> {
        match self {
            Self::Fixed(offset) => offset.from_local_datetime(naive).single(),
            Self::Named(tz) => tz
                .from_local_datetime(naive)
                .earliest()
                .map(|local| local.fixed_offset()),
        }
    }
}

/// Parse `UTC`/`GMT`/`Z`, a fixed `±HH[:MM]` offset, or an IANA zone name
pub fn parse_timezone(tz: &str) -> Result<Zone> {
    let trimmed = tz.trim();
    if let Some(offset) = parse_fixed_offset(trimmed) {
        return Ok(Zone::Fixed(offset));
    }

    trimmed.parse::<Tz>().map(Zone::Named).map_err(|_| {
        tracing::debug!(tz, "unknown timezone");
        FormatError::InvalidTimezone { tz: tz.to_string() }
    })
}

fn parse_fixed_offset(trimmed: &str) -> Option<FixedOffset> {
    if ["utc", "gmt", "z"].contains(&trimmed.to_ascii_lowercase().as_str()) {
        return FixedOffset::east_opt(0);
    }

    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'+') => (1, &trimmed[1..]),
        Some(b'-') => (-1, &trimmed[1..]),
        _ => return None,
    };

    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) || !(digits.len() == 2 || digits.len() == 4) {
        return None;
    }

    let hours: i32 = digits[..2].parse().ok()?;
    let minutes: i32 = if digits.len() == 4 {
        digits[2..].parse().ok()?
    } else {
        0
    };
    if hours > 23 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

// ─────────────────────────────────────────────────────────────────────────────
// Provider seam
// ─────────────────────────────────────────────────────────────────────────────

/// Parsing, clock and rendering capabilities the date helpers rely on
///
/// Only `parse` and `now` are required; rendering and relative descriptions
/// have chrono-based defaults.
pub trait DateTimeProvider {
    /// Parse text into an instant, converted to `tz` when given
    fn parse(&self, input: &str, tz: Option<&str>) -> Result<DateTime<FixedOffset>>;

    /// Current time
    fn now(&self) -> DateTime<Utc>;

    /// Resolve any [`DateInput`] to an instant in `tz` (or its own zone)
    fn resolve(&self, input: DateInput, tz: Option<&str>) -> Result<DateTime<FixedOffset>> {
        let instant = match input {
            DateInput::Text(text) => return self.parse(&text, tz),
            DateInput::Instant(instant) => instant,
            DateInput::Now => self.now().fixed_offset(),
        };
        match tz {
            Some(tz) => Ok(parse_timezone(tz)?.convert(&instant)),
            None => Ok(instant),
        }
    }

    /// Render an instant as calendar date, clock time, or both
    fn render(&self, instant: &DateTime<FixedOffset>, style: DateStyle) -> String {
        instant.format(style.pattern()).to_string()
    }

    /// Describe `old` relative to `new`: `"1 minute before"`, `"2 days after"`
    ///
    /// `parts` limits how many units are shown (largest first).
    fn relative(
        &self,
        old: &DateTime<FixedOffset>,
        new: &DateTime<FixedOffset>,
        parts: Option<usize>,
        joiner: &str,
    ) -> String {
        // Compare wall-clock times in one zone so calendar months line up
        let new_local = new.with_timezone(&old.timezone()).naive_local();
        let interval = Interval::between(old.naive_local(), new_local);
        let direction = if old < new { "before" } else { "after" };
        format!("{} {}", interval.for_humans(joiner, false, parts), direction)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// `25 May 2003`
pub fn format_date(
    provider: &impl DateTimeProvider,
    input: impl Into<DateInput>,
    tz: Option<&str>,
) -> Result<String> {
    let instant = provider.resolve(input.into(), tz)?;
    Ok(provider.render(&instant, DateStyle::Date))
}

/// `17:38` or `17:38:23`
pub fn format_time(
    provider: &impl DateTimeProvider,
    input: impl Into<DateInput>,
    with_seconds: bool,
    tz: Option<&str>,
) -> Result<String> {
    let instant = provider.resolve(input.into(), tz)?;
    let style = if with_seconds {
        DateStyle::TimeWithSeconds
    } else {
        DateStyle::Time
    };
    Ok(provider.render(&instant, style))
}

/// `Wednesday, August 26, 2020 05:38 PM`
pub fn format_date_time(
    provider: &impl DateTimeProvider,
    input: impl Into<DateInput>,
    with_seconds: bool,
    tz: Option<&str>,
) -> Result<String> {
    let instant = provider.resolve(input.into(), tz)?;
    let style = if with_seconds {
        DateStyle::DateTimeWithSeconds
    } else {
        DateStyle::DateTime
    };
    Ok(provider.render(&instant, style))
}

/// Largest unit between two instants: `"1 minute before"`
///
/// Pass [`DateInput::Now`] (or `None`) as `new` to compare against the clock.
pub fn format_diff(
    provider: &impl DateTimeProvider,
    old: impl Into<DateInput>,
    new: impl Into<DateInput>,
    tz: Option<&str>,
) -> Result<String> {
    let old = provider.resolve(old.into(), tz)?;
    let new = provider.resolve(new.into(), tz)?;
    Ok(provider.relative(&old, &new, Some(1), " "))
}

/// Every unit between two instants: `"1 hour • 30 minutes after"`
pub fn format_date_time_length(
    provider: &impl DateTimeProvider,
    old: impl Into<DateInput>,
    new: impl Into<DateInput>,
    joiner: &str,
    tz: Option<&str>,
) -> Result<String> {
    let old = provider.resolve(old.into(), tz)?;
    let new = provider.resolve(new.into(), tz)?;
    Ok(provider.relative(&old, &new, None, joiner))
}

/// Break a number of seconds into years, months, days, hours, minutes, seconds
///
/// Years are 360 days and months 30 days; zero parts are left out.
///
/// # Examples
///
/// ```
/// use readable::format_time_length;
///
/// assert_eq!(format_time_length(123, " ", false), "2 minutes 3 seconds");
/// assert_eq!(format_time_length(3661, ", ", true), "1h, 1m, 1s");
/// ```
pub fn format_time_length(seconds: u64, joiner: &str, short: bool) -> String {
    Interval::from_seconds(seconds).for_humans(joiner, short, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    /// Chrono parsing with a frozen clock
    struct FrozenClock(DateTime<Utc>);

    impl DateTimeProvider for FrozenClock {
        fn parse(&self, input: &str, tz: Option<&str>) -> Result<DateTime<FixedOffset>> {
            ChronoProvider.parse(input, tz)
        }

        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn frozen() -> FrozenClock {
        FrozenClock(Utc.with_ymd_and_hms(2020, 1, 23, 5, 58, 0).unwrap())
    }

    fn offset_of(tz: &str) -> i32 {
        match parse_timezone(tz).unwrap() {
            Zone::Fixed(offset) => offset.local_minus_utc(),
            Zone::Named(named) => panic!("{:?} parsed as {:?}", tz, named),
        }
    }

    #[test]
    fn test_parse_timezone() {
        assert_eq!(offset_of("UTC"), 0);
        assert_eq!(offset_of("z"), 0);
        assert_eq!(offset_of("+02:00"), 7200);
        assert_eq!(offset_of("-0430"), -16200);
        assert_eq!(offset_of("+09"), 32400);
    }

    #[test]
    fn test_parse_timezone_named() {
        assert_eq!(
            parse_timezone("Europe/London").unwrap(),
            Zone::Named(chrono_tz::Europe::London)
        );
        assert_eq!(
            parse_timezone(" America/New_York ").unwrap(),
            Zone::Named(chrono_tz::America::New_York)
        );
    }

    #[test]
    fn test_parse_timezone_rejects_unknown() {
        for tz in ["Mars/Olympus", "+25:00", "0200", "+2", ""] {
            assert!(
                matches!(parse_timezone(tz), Err(FormatError::InvalidTimezone { .. })),
                "tz {:?}",
                tz
            );
        }
    }

    #[test]
    fn test_named_zone_follows_daylight_saving() {
        let london = Some("Europe/London");
        let summer = format_time(&ChronoProvider, "2020-07-01 12:00:00", false, london);
        assert_eq!(summer.unwrap(), "13:00");

        let winter = format_time(&ChronoProvider, "2020-01-15 12:00:00", false, london);
        assert_eq!(winter.unwrap(), "12:00");

        let instant = Utc.with_ymd_and_hms(2020, 7, 1, 23, 30, 0).unwrap();
        let date = format_date(&ChronoProvider, instant, london);
        assert_eq!(date.unwrap(), "2 July 2020");
    }

    #[test]
    fn test_zone_localize() {
        let london = Zone::Named(chrono_tz::Europe::London);
        let naive = |text: &str| NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M").unwrap();

        let summer = london.localize(&naive("2020-07-01 13:00")).unwrap();
        assert_eq!(summer.offset().local_minus_utc(), 3600);

        // 01:30 happens twice on 2020-10-25; the first (BST) reading wins
        let fold = london.localize(&naive("2020-10-25 01:30")).unwrap();
        assert_eq!(fold.offset().local_minus_utc(), 3600);

        // 01:30 never happens on 2020-03-29
        assert_eq!(london.localize(&naive("2020-03-29 01:30")), None);
    }

    #[test]
    fn test_format_date() {
        let cases = [
            ("2003-05-25", "25 May 2003"),
            ("2038-02-28", "28 February 2038"),
            ("29-05-2008", "29 May 2008"),
            ("2020-08-26 17:38:23", "26 August 2020"),
            ("2019/04/17", "17 April 2019"),
            ("04/17/27", "17 April 2027"),
        ];
        for (input, expected) in cases {
            assert_eq!(format_date(&ChronoProvider, input, None).unwrap(), expected);
        }
    }

    #[test]
    fn test_format_date_converts_timezone() {
        let date = format_date(&ChronoProvider, "2020-08-26 01:00:00 UTC", Some("-04:00"));
        assert_eq!(date.unwrap(), "25 August 2020");
    }

    #[test]
    fn test_format_date_rejects_garbage() {
        let err = format_date(&ChronoProvider, "not-a-date", None).unwrap_err();
        assert!(matches!(err, FormatError::InvalidDateTime { .. }));
    }

    #[test]
    fn test_format_time() {
        let input = "2020-08-26 17:38:23";
        assert_eq!(format_time(&ChronoProvider, input, false, None).unwrap(), "17:38");
        assert_eq!(format_time(&ChronoProvider, input, true, None).unwrap(), "17:38:23");
    }

    #[test]
    fn test_format_time_with_instant_and_timezone() {
        let instant = Utc.with_ymd_and_hms(2020, 8, 26, 17, 38, 23).unwrap();
        let time = format_time(&ChronoProvider, instant, false, Some("+01:00"));
        assert_eq!(time.unwrap(), "18:38");
    }

    #[test]
    fn test_format_date_time() {
        let input = "2020-08-26 17:38:23";
        assert_eq!(
            format_date_time(&ChronoProvider, input, false, None).unwrap(),
            "Wednesday, August 26, 2020 05:38 PM"
        );
        assert_eq!(
            format_date_time(&ChronoProvider, input, true, None).unwrap(),
            "Wednesday, August 26, 2020 05:38:23 PM"
        );
        assert_eq!(
            format_date_time(&ChronoProvider, input, false, Some("+02:00")).unwrap(),
            "Wednesday, August 26, 2020 07:38 PM"
        );
    }

    #[test]
    fn test_format_diff() {
        let diff = format_diff(
            &ChronoProvider,
            "2020-01-22 05:58:00",
            "2020-01-22 05:59:00",
            None,
        );
        assert_eq!(diff.unwrap(), "1 minute before");

        let diff = format_diff(
            &ChronoProvider,
            "2020-01-23 05:58:00",
            "2020-01-22 05:58:00",
            Some("+01:00"),
        );
        assert_eq!(diff.unwrap(), "1 day after");
    }

    #[test]
    fn test_format_diff_against_now() {
        let diff = format_diff(&frozen(), "2020-01-22 05:58:00", DateInput::Now, None);
        assert_eq!(diff.unwrap(), "1 day before");

        let diff = format_diff(&frozen(), "2020-01-21 05:58:00", None::<&str>, None);
        assert_eq!(diff.unwrap(), "2 days before");
    }

    #[test]
    fn test_format_diff_keeps_largest_unit_only() {
        let diff = format_diff(
            &ChronoProvider,
            "2020-01-02 13:46:12",
            "2020-01-02 13:48:14",
            None,
        );
        assert_eq!(diff.unwrap(), "2 minutes before");
    }

    #[test]
    fn test_format_date_time_length() {
        let length = format_date_time_length(
            &ChronoProvider,
            "2020-01-02 13:46:12",
            "2020-01-02 13:48:14",
            " ",
            None,
        );
        assert_eq!(length.unwrap(), "2 minutes 2 seconds before");

        let length = format_date_time_length(
            &ChronoProvider,
            "2020-01-02 14:48:14",
            "2020-01-02 13:18:14",
            " • ",
            Some("+00:00"),
        );
        assert_eq!(length.unwrap(), "1 hour • 30 minutes after");
    }

    #[test]
    fn test_format_time_length() {
        assert_eq!(format_time_length(123, " ", false), "2 minutes 3 seconds");
        assert_eq!(format_time_length(3661, ", ", true), "1h, 1m, 1s");
        assert_eq!(format_time_length(0, " ", false), "0 seconds");
        assert_eq!(
            format_time_length(31_104_000 + 86_400, " ", false),
            "1 year 1 day"
        );
    }
}
