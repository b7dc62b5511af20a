//! Durations broken down into calendar units and rendered as words

use chrono::{Datelike, Months, NaiveDateTime};
use serde::Serialize;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_DAY: u64 = 86_400;
/// Flat 30-day month used when only a number of seconds is known
const SECONDS_PER_MONTH: u64 = 2_592_000;
/// Twelve flat months
const SECONDS_PER_YEAR: u64 = 31_104_000;

/// (singular, plural, short) labels in breakdown order
const UNITS: [(&str, &str, &str); 7] = [
    ("year", "years", "y"),
    ("month", "months", "mo"),
    ("week", "weeks", "w"),
    ("day", "days", "d"),
    ("hour", "hours", "h"),
    ("minute", "minutes", "m"),
    ("second", "seconds", "s"),
];

/// A duration split into calendar-ish parts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Interval {
    pub years: u64,
    pub months: u64,
    pub weeks: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Interval {
    /// Decompose a plain number of seconds (360-day years, 30-day months, no weeks)
    pub fn from_seconds(total: u64) -> Self {
        let mut rest = total;
        let mut take = |unit: u64| {
            let count = rest / unit;
            rest -= count * unit;
            count
        };

        let years = take(SECONDS_PER_YEAR);
        let months = take(SECONDS_PER_MONTH);
        let days = take(SECONDS_PER_DAY);
        let hours = take(SECONDS_PER_HOUR);
        let minutes = take(SECONDS_PER_MINUTE);

        Self {
            years,
            months,
            weeks: 0,
            days,
            hours,
            minutes,
            seconds: rest,
        }
    }

    /// Calendar difference between two wall-clock times (order does not matter)
    ///
    /// Whole months are counted on the calendar first (so Jan 15 to Mar 15 is
    /// exactly two months), the remainder is split into weeks, days, hours,
    /// minutes and seconds.
    pub fn between(a: NaiveDateTime, b: NaiveDateTime) -> Self {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };

        let mut months = (end.year() - start.year()) * 12 + end.month() as i32
            - start.month() as i32;
        let shifted = |m: i32| start.checked_add_months(Months::new(m.max(0) as u32));
        while months > 0 && shifted(months).map_or(true, |anchor| anchor > end) {
            months -= 1;
        }
        let anchor = shifted(months).unwrap_or(start);

        let mut rest = (end - anchor).num_seconds().max(0) as u64;
        let mut take = |unit: u64| {
            let count = rest / unit;
            rest -= count * unit;
            count
        };

        let days_total = take(SECONDS_PER_DAY);
        let hours = take(SECONDS_PER_HOUR);
        let minutes = take(SECONDS_PER_MINUTE);

        let months = months.max(0) as u64;
        Self {
            years: months / 12,
            months: months % 12,
            weeks: days_total / 7,
            days: days_total % 7,
            hours,
            minutes,
            seconds: rest,
        }
    }

    fn counts(&self) -> [u64; 7] {
        [
            self.years,
            self.months,
            self.weeks,
            self.days,
            self.hours,
            self.minutes,
            self.seconds,
        ]
    }

    pub fn is_zero(&self) -> bool {
        self.counts().iter().all(|&c| c == 0)
    }

    /// Render the non-zero parts, largest first
    ///
    /// - `joiner`: placed between parts
    /// - `short`: `1h` instead of `1 hour`
    /// - `parts`: keep only the largest N non-zero parts (`None` keeps all)
    ///
    /// An empty interval reads `0 seconds` (`0s`).
    pub fn for_humans(&self, joiner: &str, short: bool, parts: Option<usize>) -> String {
        let limit = parts.unwrap_or(UNITS.len()).max(1);

        let rendered: Vec<String> = self
            .counts()
            .iter()
            .zip(UNITS.iter())
            .filter(|(count, _)| **count > 0)
            .take(limit)
            .map(|(&count, unit)| render_unit(count, unit, short))
            .collect();

        if rendered.is_empty() {
            return render_unit(0, &UNITS[UNITS.len() - 1], short);
        }
        rendered.join(joiner)
    }
}

fn render_unit(
    count: u64,
    (singular, plural, short_label): &(&str, &str, &str),
    short: bool,
) -> String {
    if short {
        format!("{}{}", count, short_label)
    } else if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_from_seconds() {
        let interval = Interval::from_seconds(3661);
        assert_eq!(interval.hours, 1);
        assert_eq!(interval.minutes, 1);
        assert_eq!(interval.seconds, 1);

        let interval = Interval::from_seconds(SECONDS_PER_YEAR + SECONDS_PER_MONTH * 2 + 5);
        assert_eq!(interval.years, 1);
        assert_eq!(interval.months, 2);
        assert_eq!(interval.seconds, 5);
    }

    #[test]
    fn test_for_humans_long() {
        assert_eq!(
            Interval::from_seconds(123).for_humans(" ", false, None),
            "2 minutes 3 seconds"
        );
        assert_eq!(
            Interval::from_seconds(86_401).for_humans(", ", false, None),
            "1 day, 1 second"
        );
    }

    #[test]
    fn test_for_humans_short() {
        assert_eq!(
            Interval::from_seconds(3661).for_humans(", ", true, None),
            "1h, 1m, 1s"
        );
    }

    #[test]
    fn test_for_humans_parts_limit() {
        let interval = Interval::from_seconds(3661);
        assert_eq!(interval.for_humans(" ", false, Some(1)), "1 hour");
        assert_eq!(interval.for_humans(" ", false, Some(2)), "1 hour 1 minute");
    }

    #[test]
    fn test_for_humans_empty() {
        assert!(Interval::default().is_zero());
        assert_eq!(Interval::default().for_humans(" ", false, None), "0 seconds");
        assert_eq!(Interval::default().for_humans(" ", true, None), "0s");
    }

    #[test]
    fn test_between_short_span() {
        let interval = Interval::between(at(2020, 1, 2, 13, 46, 12), at(2020, 1, 2, 13, 48, 14));
        assert_eq!(interval.for_humans(" ", false, None), "2 minutes 2 seconds");
    }

    #[test]
    fn test_between_is_symmetric() {
        let a = at(2020, 1, 2, 14, 48, 14);
        let b = at(2020, 1, 2, 13, 18, 14);
        assert_eq!(Interval::between(a, b), Interval::between(b, a));
    }

    #[test]
    fn test_between_calendar_months() {
        let interval = Interval::between(at(2020, 1, 15, 0, 0, 0), at(2021, 3, 25, 0, 0, 0));
        assert_eq!(interval.years, 1);
        assert_eq!(interval.months, 2);
        assert_eq!(interval.weeks, 1);
        assert_eq!(interval.days, 3);
    }

    #[test]
    fn test_between_month_end() {
        // Jan 31 + 1 month clamps to Feb 29 (2020 is a leap year)
        let interval = Interval::between(at(2020, 1, 31, 0, 0, 0), at(2020, 3, 1, 0, 0, 0));
        assert_eq!(interval.months, 1);
        assert_eq!(interval.days, 1);
    }

    #[test]
    fn test_between_not_a_full_month() {
        let interval = Interval::between(at(2020, 1, 20, 0, 0, 0), at(2020, 2, 10, 0, 0, 0));
        assert_eq!(interval.months, 0);
        assert_eq!(interval.weeks, 3);
        assert_eq!(interval.days, 0);
    }
}
