//! Calendar date source
//!
//! The renderer never reads wall-clock time directly. It asks a [`Clock`],
//! so tests can pin the date with [`FixedClock`].

use chrono::{Local, NaiveDate};

/// Date format used in titles, changelogs and file metadata
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Source of "today"
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local calendar date of the running machine
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock that always reports the same date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns `None` for impossible dates
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Format a date as `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_reports_pinned_date() {
        let clock = FixedClock::from_ymd(2026, 1, 15).unwrap();
        assert_eq!(format_date(clock.today()), "2026-01-15");
    }

    #[test]
    fn test_fixed_clock_rejects_impossible_date() {
        assert!(FixedClock::from_ymd(2026, 2, 30).is_none());
    }

    #[test]
    fn test_format_date_pads_components() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(format_date(date), "2026-03-07");
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date(" 2026-10-16 ").unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
        );
        assert!(parse_date("16/10/2026").is_err());
    }
}
