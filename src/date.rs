//! Calendar days: parsing, ordering and day-of-year ordinals

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::error::ParseError;

/// Year assumed for sources that only carry day and month
pub const REFERENCE_YEAR: i32 = 2019;

/// A calendar day.
///
/// Ordering is chronological, i.e. lexicographic on (year, month, day). Two
/// dates written differently ("07/05/2019" and "7/5/2019") are the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date from its parts, `None` if the day does not exist
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parse a `day/month/year` string (zero padding optional)
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let err = || ParseError::Date(raw.to_string());
        let mut parts = raw.trim().split('/');
        let (Some(d), Some(m), Some(y), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(err());
        };

        let day: u32 = d.trim().parse().map_err(|_| err())?;
        let month: u32 = m.trim().parse().map_err(|_| err())?;
        let year: i32 = y.trim().parse().map_err(|_| err())?;
        Self::from_ymd(year, month, day).ok_or_else(err)
    }

    /// Parse a `day/month` string, placing it in [`REFERENCE_YEAR`]
    pub fn parse_month_day(raw: &str) -> Result<Self, ParseError> {
        let err = || ParseError::MonthDay(raw.to_string());
        let mut parts = raw.trim().split('/');
        let (Some(d), Some(m), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(err());
        };

        let day: u32 = d.trim().parse().map_err(|_| err())?;
        let month: u32 = m.trim().parse().map_err(|_| err())?;
        Self::from_ymd(REFERENCE_YEAR, month, day).ok_or_else(err)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// 1-based ordinal within the year (1..=366)
    pub fn day_of_year(&self) -> u32 {
        self.0.ordinal()
    }

    /// e.g. "Sunday, February 17th, 2019"
    pub fn long_label(&self) -> String {
        format!(
            "{}, {} {}{}, {}",
            self.0.format("%A"),
            self.0.format("%B"),
            self.day(),
            ordinal_suffix(self.day()),
            self.year()
        )
    }

    /// e.g. "Sun, 17th February"
    pub fn short_label(&self) -> String {
        format!(
            "{}, {}{} {}",
            self.0.format("%a"),
            self.day(),
            ordinal_suffix(self.day()),
            self.0.format("%B")
        )
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{}", self.day(), self.month(), self.year())
    }
}

/// English ordinal suffix for a day of month
pub fn ordinal_suffix(day: u32) -> &'static str {
    if (4..=20).contains(&day) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Deduplicate and sort days ascending (slider and axis domains)
pub fn sorted_unique_days<I>(days: I) -> Vec<CalendarDate>
where
    I: IntoIterator<Item = CalendarDate>,
{
    let mut days: Vec<CalendarDate> = days.into_iter().collect();
    days.sort_unstable();
    days.dedup();
    days
}

/// Day-of-year of a month/day in the reference year
pub(crate) fn reference_day_of_year(month: u32, day: u32) -> f64 {
    CalendarDate::from_ymd(REFERENCE_YEAR, month, day)
        .map(|d| d.day_of_year() as f64)
        .unwrap_or(1.0)
}
