//! Gregorian leap-year rules and leap-day counting.
//!
//! Leap days (February 29) have no position in the ritual count or the
//! 13-moon calendar, so every elapsed-day computation in the engines
//! subtracts the leap days lying strictly between its two endpoints.

use crate::date::CalendarDate;

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of February 29 dates strictly between `a` and `b`, endpoints
/// excluded. Symmetric in its arguments.
pub fn leap_days_between(a: CalendarDate, b: CalendarDate) -> i64 {
    let (start, end) = if a <= b { (a, b) } else { (b, a) };
    let mut count = 0;
    for year in start.year()..=end.year() {
        if !is_leap_year(year) {
            continue;
        }
        if let Ok(leap_day) = CalendarDate::new(year, 2, 29) {
            if leap_day > start && leap_day < end {
                count += 1;
            }
        }
    }
    count
}

/// Signed day offset from `from` to `to` with interior leap days removed.
///
/// The leap-day count is subtracted in the direction of travel, so the
/// magnitude shrinks whether `to` lies before or after `from`.
pub fn leap_free_offset(from: CalendarDate, to: CalendarDate) -> i64 {
    let raw = from.days_until(to);
    raw - raw.signum() * leap_days_between(from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> CalendarDate {
        CalendarDate::new(y, m, day).unwrap()
    }

    #[test]
    fn leap_year_rule() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(-4));
    }

    #[test]
    fn no_leap_days_in_short_span() {
        assert_eq!(leap_days_between(d(2025, 1, 1), d(2025, 12, 31)), 0);
    }

    #[test]
    fn counts_interior_leap_day() {
        assert_eq!(leap_days_between(d(2024, 2, 28), d(2024, 3, 1)), 1);
    }

    #[test]
    fn endpoints_are_excluded() {
        assert_eq!(leap_days_between(d(2024, 2, 29), d(2024, 3, 5)), 0);
        assert_eq!(leap_days_between(d(2024, 1, 1), d(2024, 2, 29)), 0);
    }

    #[test]
    fn symmetric() {
        let a = d(2019, 6, 1);
        let b = d(2026, 1, 10);
        assert_eq!(leap_days_between(a, b), leap_days_between(b, a));
        // 2020 and 2024
        assert_eq!(leap_days_between(a, b), 2);
    }

    #[test]
    fn century_rule_applies() {
        // 1900 is not a leap year, 2000 is
        assert_eq!(leap_days_between(d(1899, 1, 1), d(1901, 1, 1)), 0);
        assert_eq!(leap_days_between(d(1999, 1, 1), d(2001, 1, 1)), 1);
    }

    #[test]
    fn offset_forward_and_backward() {
        assert_eq!(leap_free_offset(d(2024, 2, 28), d(2024, 3, 1)), 1);
        assert_eq!(leap_free_offset(d(2024, 3, 1), d(2024, 2, 28)), -1);
        assert_eq!(leap_free_offset(d(2024, 3, 1), d(2024, 3, 1)), 0);
    }
}
