//! Digit-reduction numerology.
//!
//! Every value is produced by [`reduce`], which sums decimal digits until a
//! single digit remains, stopping early on the master numbers 11, 22, 33.
//!
//! Component pre-reduction differs between operations and is deliberate:
//! life path and personal year reduce month, day and year separately before
//! summing; the daily vibration adds the raw calendar month and day to the
//! personal year. Changing either side changes which master numbers surface.

pub mod meaning;

use serde::Serialize;

use sandhi_time::CalendarDate;

pub use meaning::day_meaning;

/// Master numbers exempt from further reduction.
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// Whether `n` is a master number (11, 22, 33).
pub const fn is_master(n: u32) -> bool {
    matches!(n, 11 | 22 | 33)
}

fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Reduce `n` by repeated digit summing while it exceeds 9.
///
/// With `allow_master`, any value above 9 that equals 11, 22 or 33 is
/// returned as-is; this is checked on every intermediate sum, not only on
/// the input. Values of 9 or less are returned unchanged.
pub fn reduce(mut n: u32, allow_master: bool) -> u32 {
    while n > 9 {
        if allow_master && is_master(n) {
            return n;
        }
        n = digit_sum(n);
    }
    n
}

/// [`reduce`] with master numbers preserved.
pub fn reduce_master(n: u32) -> u32 {
    reduce(n, true)
}

fn year_digits(year: i32) -> u32 {
    year.unsigned_abs()
}

/// Life path: month, day and year each reduced, then summed and reduced.
pub fn life_path(birth: CalendarDate) -> u32 {
    let m = reduce_master(birth.month());
    let d = reduce_master(birth.day());
    let y = reduce_master(year_digits(birth.year()));
    reduce_master(m + d + y)
}

/// Personal year for `target_year`: birth month and day plus the target
/// year, each reduced, then summed and reduced.
pub fn personal_year(birth: CalendarDate, target_year: i32) -> u32 {
    let m = reduce_master(birth.month());
    let d = reduce_master(birth.day());
    let y = reduce_master(year_digits(target_year));
    reduce_master(m + d + y)
}

/// Personal month: personal year plus the calendar month, reduced.
pub fn personal_month(birth: CalendarDate, target_year: i32, target_month: u32) -> u32 {
    reduce_master(personal_year(birth, target_year) + target_month)
}

/// Personal week: personal month plus the week-of-month ordinal, reduced.
pub fn personal_week(
    birth: CalendarDate,
    target_year: i32,
    target_month: u32,
    week_of_month: u32,
) -> u32 {
    reduce_master(personal_month(birth, target_year, target_month) + week_of_month)
}

/// Personal week for the week containing `target`.
pub fn personal_week_for(birth: CalendarDate, target: CalendarDate) -> u32 {
    personal_week(birth, target.year(), target.month(), target.week_of_month())
}

/// Daily vibration: personal year of the target's year plus the raw target
/// month and day, reduced once at the end.
pub fn daily_vibration(birth: CalendarDate, target: CalendarDate) -> u32 {
    let py = personal_year(birth, target.year());
    reduce_master(target.month() + target.day() + py)
}

/// Universal day: year + month + day of the date, reduced.
pub fn universal_day(target: CalendarDate) -> u32 {
    reduce_master(year_digits(target.year()) + target.month() + target.day())
}

/// Full personal numerology profile for one target date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumerologyProfile {
    pub life_path: u32,
    pub personal_year: u32,
    pub personal_month: u32,
    pub personal_week: u32,
    pub daily_vibration: u32,
    pub universal_day: u32,
}

/// Compute every personal value for `birth` at `target`.
pub fn profile(birth: CalendarDate, target: CalendarDate) -> NumerologyProfile {
    NumerologyProfile {
        life_path: life_path(birth),
        personal_year: personal_year(birth, target.year()),
        personal_month: personal_month(birth, target.year(), target.month()),
        personal_week: personal_week_for(birth, target),
        daily_vibration: daily_vibration(birth, target),
        universal_day: universal_day(target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> CalendarDate {
        CalendarDate::new(y, m, day).unwrap()
    }

    #[test]
    fn single_digits_unchanged() {
        for n in 0..=9 {
            assert_eq!(reduce_master(n), n);
        }
    }

    #[test]
    fn master_input_preserved() {
        assert_eq!(reduce_master(11), 11);
        assert_eq!(reduce_master(22), 22);
        assert_eq!(reduce_master(33), 33);
    }

    #[test]
    fn master_intermediate_preserved() {
        // 2+9 = 11
        assert_eq!(reduce_master(29), 11);
        // 3+8 = 11
        assert_eq!(reduce_master(38), 11);
        // 9+9+4 = 22
        assert_eq!(reduce_master(994), 22);
        // 1+9+9+4 = 23 -> 5
        assert_eq!(reduce_master(1994), 5);
    }

    #[test]
    fn without_master_reduces_fully() {
        assert_eq!(reduce(11, false), 2);
        assert_eq!(reduce(38, false), 2);
        assert_eq!(reduce(33, false), 6);
    }

    #[test]
    fn reduce_idempotent() {
        for n in 0..5000 {
            let r = reduce_master(n);
            assert_eq!(reduce_master(r), r, "n = {n}");
            assert!(r <= 9 || is_master(r), "n = {n} -> {r}");
        }
    }

    #[test]
    fn life_path_pre_reduces_components() {
        // 1990-11-29: month 11 (master), day 29 -> 11, year 1990 -> 19 -> 10 -> 1
        // 11 + 11 + 1 = 23 -> 5
        assert_eq!(life_path(d(1990, 11, 29)), 5);
        // 1985-07-15: 7 + 6 + (23 -> 5) = 18 -> 9
        assert_eq!(life_path(d(1985, 7, 15)), 9);
    }

    #[test]
    fn personal_year_uses_target_year() {
        // birth 07-15: 7 + 6 + 2026 (10 -> 1) = 14 -> 5
        assert_eq!(personal_year(d(1985, 7, 15), 2026), 5);
        // 2027 -> 11 (master): 7 + 6 + 11 = 24 -> 6
        assert_eq!(personal_year(d(1985, 7, 15), 2027), 6);
    }

    #[test]
    fn personal_month_and_week() {
        let birth = d(1985, 7, 15);
        // PY 5 + month 6 = 11 (master)
        assert_eq!(personal_month(birth, 2026, 6), 11);
        // 11 + week 2 = 13 -> 4
        assert_eq!(personal_week(birth, 2026, 6, 2), 4);
        assert_eq!(personal_week_for(birth, d(2026, 6, 10)), 4);
    }

    #[test]
    fn daily_vibration_sums_raw_components() {
        let birth = d(1985, 7, 15);
        // PY(2026) = 5; 1 + 10 + 5 = 16 -> 7
        assert_eq!(daily_vibration(birth, d(2026, 1, 10)), 7);
        // 1 + 5 + 5 = 11: master surfaces because day 5 was not pre-reduced away
        assert_eq!(daily_vibration(birth, d(2026, 1, 5)), 11);
        // raw month 11: 11 + 6 + 5 = 22; a pre-reduced month would give 2 + 6 + 5 = 13 -> 4
        assert_eq!(daily_vibration(birth, d(2026, 11, 6)), 22);
    }

    #[test]
    fn universal_day_value() {
        // 2026 + 1 + 10 = 2037 -> 12 -> 3
        assert_eq!(universal_day(d(2026, 1, 10)), 3);
    }

    #[test]
    fn profile_matches_individual_calls() {
        let birth = d(1985, 7, 15);
        let target = d(2026, 6, 10);
        let p = profile(birth, target);
        assert_eq!(p.life_path, life_path(birth));
        assert_eq!(p.personal_year, personal_year(birth, 2026));
        assert_eq!(p.personal_month, personal_month(birth, 2026, 6));
        assert_eq!(p.personal_week, personal_week(birth, 2026, 6, 2));
        assert_eq!(p.daily_vibration, daily_vibration(birth, target));
        assert_eq!(p.universal_day, universal_day(target));
    }
}
