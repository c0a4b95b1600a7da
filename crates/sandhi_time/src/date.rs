//! Proleptic Gregorian civil date.
//!
//! Provides `CalendarDate`, the date type every engine accepts. It carries
//! no time of day: each engine applies its own fixed anchor hour, so the
//! date → position mapping stays pure and reproducible.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::leap::is_leap_year;

/// A civil calendar date (proleptic Gregorian).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Earliest representable date.
    pub const MIN: Self = Self(NaiveDate::MIN);
    /// Latest representable date.
    pub const MAX: Self = Self(NaiveDate::MAX);

    /// Build a date from a year/month/day triple.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(TimeError::InvalidDate { year, month, day })
    }

    /// Wrap an existing chrono date.
    pub const fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The underlying chrono date.
    pub const fn naive(self) -> NaiveDate {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Whether this date is February 29.
    pub fn is_leap_day(self) -> bool {
        self.month() == 2 && self.day() == 29
    }

    /// Whether the date's year is a Gregorian leap year.
    pub fn in_leap_year(self) -> bool {
        is_leap_year(self.year())
    }

    /// Civil weekday, 0 = Sunday .. 6 = Saturday.
    pub fn weekday_index(self) -> u8 {
        self.0.weekday().num_days_from_sunday() as u8
    }

    /// 1-based week ordinal within the month: days 1-7 → 1, 8-14 → 2, ...
    pub fn week_of_month(self) -> u32 {
        (self.day() - 1) / 7 + 1
    }

    /// Signed whole days from `self` to `other` (positive when `other` is later).
    pub fn days_until(self, other: CalendarDate) -> i64 {
        other.0.signed_duration_since(self.0).num_days()
    }

    /// Shift by a signed number of days.
    pub fn add_days(self, days: i64) -> Result<Self, TimeError> {
        let shifted = if days >= 0 {
            self.0.checked_add_days(Days::new(days as u64))
        } else {
            self.0.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        shifted.map(Self).ok_or(TimeError::OutOfRange)
    }

    /// The following calendar day.
    pub fn succ(self) -> Result<Self, TimeError> {
        self.0.succ_opt().map(Self).ok_or(TimeError::OutOfRange)
    }

    /// Fractional days since J2000.0 (2000-01-01 12:00) for this date at
    /// `hour` (0.0..24.0) on the same clock.
    pub fn days_since_j2000(self, hour: f64) -> f64 {
        let whole = (self.0.num_days_from_ce() - J2000_DAYS_FROM_CE) as f64;
        whole + (hour - 12.0) / 24.0
    }

    /// The same month/day in another year, or `None` when it does not exist
    /// (February 29 in a common year).
    pub fn with_year(self, year: i32) -> Option<Self> {
        self.0.with_year(year).map(Self)
    }
}

/// Day number (days from CE, 0001-01-01 = 1) of 2000-01-01, the civil date
/// of the J2000.0 epoch. The epoch itself is at noon.
pub const J2000_DAYS_FROM_CE: i32 = 730_120;

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for CalendarDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`. A trailing `T...` time part is ignored so
    /// ISO timestamps resolve to their civil date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let date_part = s.split_once('T').map_or(s, |(date, _)| date);
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            .map(Self)
            .map_err(|e| TimeError::Parse(format!("date '{s}': {e}")))
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = TimeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_string()
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year(),
            self.month(),
            self.day()
        )
    }
}
