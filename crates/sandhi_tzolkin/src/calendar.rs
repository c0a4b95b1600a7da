//! Date → ritual count and 13-moon position.
//!
//! Both counts skip February 29: day offsets have the leap days lying
//! strictly between their endpoints removed, and the leap day itself maps
//! to a sentinel. The kin is anchored to a fixed reference date, so results
//! are pure functions of the date and the configuration.

use sandhi_time::{CalendarDate, leap_free_offset};

use crate::error::TzolkinError;
use crate::kin::Kin;
use crate::moon::{DAYS_PER_MOON, Moon};
use crate::ritual_types::{MoonDay, RitualDay, RitualPosition};

/// Length of a 13-moon year without its leap day.
const MOON_YEAR_DAYS: i64 = 365;

/// Anchor and year-start settings of the ritual calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TzolkinConfig {
    anchor_date: CalendarDate,
    anchor_kin: Kin,
    year_start_month: u32,
    year_start_day: u32,
}

impl TzolkinConfig {
    /// Validated configuration.
    ///
    /// The anchor may not be February 29 and the moon-year start must exist
    /// in every year.
    pub fn new(
        anchor_date: CalendarDate,
        anchor_kin: u16,
        year_start_month: u32,
        year_start_day: u32,
    ) -> Result<Self, TzolkinError> {
        let anchor_kin = Kin::new(anchor_kin).ok_or(TzolkinError::InvalidKin(anchor_kin))?;
        if anchor_date.is_leap_day() {
            return Err(TzolkinError::InvalidConfig("anchor date is February 29"));
        }
        // A common year rejects Feb 29 as well as impossible dates.
        CalendarDate::new(2001, year_start_month, year_start_day)
            .map_err(|_| TzolkinError::InvalidConfig("moon-year start must exist in every year"))?;
        Ok(Self {
            anchor_date,
            anchor_kin,
            year_start_month,
            year_start_day,
        })
    }

    pub fn anchor_date(&self) -> CalendarDate {
        self.anchor_date
    }

    pub fn anchor_kin(&self) -> Kin {
        self.anchor_kin
    }

    /// Month and day the moon year begins on.
    pub fn year_start(&self) -> (u32, u32) {
        (self.year_start_month, self.year_start_day)
    }

    /// Start of the moon year in the civil year of `date`.
    ///
    /// The start month/day exists in every common year and every
    /// representable date lies in a complete civil year, so this never
    /// leaves the supported range.
    fn year_start_of(&self, date: CalendarDate) -> CalendarDate {
        match CalendarDate::new(date.year(), self.year_start_month, self.year_start_day) {
            Ok(start) => start,
            Err(e) => unreachable!("moon-year start validated on construction: {e}"),
        }
    }
}

impl Default for TzolkinConfig {
    /// 2026-01-10 is kin 32 (Yellow Rhythmic Human); the year starts July 26.
    fn default() -> Self {
        match CalendarDate::new(2026, 1, 10) {
            Ok(anchor_date) => Self {
                anchor_date,
                anchor_kin: DEFAULT_ANCHOR_KIN,
                year_start_month: 7,
                year_start_day: 26,
            },
            Err(e) => unreachable!("default anchor is a valid date: {e}"),
        }
    }
}

const DEFAULT_ANCHOR_KIN: Kin = match Kin::new(32) {
    Some(k) => k,
    None => panic!("kin 32 is in range"),
};

/// Kin for `date`, or `None` for February 29.
pub fn kin_for_date(date: CalendarDate, config: &TzolkinConfig) -> Option<Kin> {
    if date.is_leap_day() {
        return None;
    }
    let offset = leap_free_offset(config.anchor_date, date);
    Some(config.anchor_kin.advance(offset))
}

/// Position of `date` in the 13-moon year.
///
/// # Panics
/// If the leap-free offset from the year start leaves 0..=364, which would
/// mean the year-start selection is broken.
pub fn moon_day(date: CalendarDate, config: &TzolkinConfig) -> MoonDay {
    if date.is_leap_day() {
        return MoonDay::LeapDay;
    }
    // A moon year is MOON_YEAR_DAYS leap-free days long; dates before this
    // year's start count back from it.
    let since_start = leap_free_offset(config.year_start_of(date), date);
    let elapsed = if since_start < 0 {
        MOON_YEAR_DAYS + since_start
    } else {
        since_start
    };
    assert!(
        (0..MOON_YEAR_DAYS).contains(&elapsed),
        "moon-year offset {elapsed} out of range for {date}"
    );
    if elapsed == MOON_YEAR_DAYS - 1 {
        return MoonDay::DayOutOfTime;
    }
    let per_moon = i64::from(DAYS_PER_MOON);
    MoonDay::Day {
        moon: Moon::from_number((elapsed / per_moon) as u8 + 1),
        day: (elapsed % per_moon) as u8 + 1,
    }
}

/// Kin of the first day of the moon year containing a day with `kin` at
/// `moon_day`. `None` when the moon day is a sentinel.
pub fn year_bearer(kin: Kin, moon_day: &MoonDay) -> Option<Kin> {
    moon_day.elapsed().map(|e| kin.advance(-i64::from(e)))
}

/// Full ritual-calendar lookup for `date`.
pub fn ritual_day(date: CalendarDate, config: &TzolkinConfig) -> RitualDay {
    let Some(kin) = kin_for_date(date, config) else {
        log::trace!("{date} is a leap day, outside the ritual count");
        return RitualDay::LeapDay { date };
    };
    let moon_day = moon_day(date, config);
    RitualDay::Normal(RitualPosition {
        date,
        kin: kin.info(),
        moon_day,
        year_bearer: year_bearer(kin, &moon_day).map(Kin::info),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> CalendarDate {
        CalendarDate::new(y, m, day).unwrap()
    }

    fn kin(date: CalendarDate) -> u16 {
        kin_for_date(date, &TzolkinConfig::default())
            .unwrap()
            .number()
    }

    #[test]
    fn anchor_is_kin_32() {
        assert_eq!(kin(d(2026, 1, 10)), 32);
    }

    #[test]
    fn consecutive_days_step_by_one() {
        assert_eq!(kin(d(2026, 1, 11)), 33);
        assert_eq!(kin(d(2026, 1, 9)), 31);
        assert_eq!(kin(d(2025, 12, 31)), 22);
    }

    #[test]
    fn leap_day_has_no_kin() {
        assert!(kin_for_date(d(2024, 2, 29), &TzolkinConfig::default()).is_none());
    }

    #[test]
    fn leap_day_is_skipped_before_anchor() {
        assert_eq!(kin(d(2024, 3, 1)), kin(d(2024, 2, 28)) % 260 + 1);
    }

    #[test]
    fn config_rejects_bad_values() {
        let anchor = d(2026, 1, 10);
        assert_eq!(
            TzolkinConfig::new(anchor, 0, 7, 26),
            Err(TzolkinError::InvalidKin(0))
        );
        assert!(matches!(
            TzolkinConfig::new(d(2024, 2, 29), 1, 7, 26),
            Err(TzolkinError::InvalidConfig(_))
        ));
        assert!(matches!(
            TzolkinConfig::new(anchor, 32, 2, 29),
            Err(TzolkinError::InvalidConfig(_))
        ));
        assert!(matches!(
            TzolkinConfig::new(anchor, 32, 13, 1),
            Err(TzolkinError::InvalidConfig(_))
        ));
    }

    #[test]
    fn default_matches_explicit() {
        let explicit = TzolkinConfig::new(d(2026, 1, 10), 32, 7, 26).unwrap();
        assert_eq!(explicit, TzolkinConfig::default());
    }

    #[test]
    fn moon_year_boundaries() {
        let cfg = TzolkinConfig::default();
        assert_eq!(
            moon_day(d(2026, 7, 26), &cfg),
            MoonDay::Day {
                moon: Moon::from_number(1),
                day: 1
            }
        );
        assert_eq!(moon_day(d(2026, 7, 25), &cfg), MoonDay::DayOutOfTime);
        assert_eq!(
            moon_day(d(2026, 7, 24), &cfg),
            MoonDay::Day {
                moon: Moon::from_number(13),
                day: 28
            }
        );
    }

    #[test]
    fn before_year_start_spanning_leap_day() {
        let cfg = TzolkinConfig::default();
        assert_eq!(moon_day(d(2024, 7, 25), &cfg), MoonDay::DayOutOfTime);
        assert_eq!(
            moon_day(d(2024, 3, 1), &cfg),
            moon_day(d(2025, 3, 1), &cfg)
        );
        assert_eq!(
            moon_day(d(2024, 2, 28), &cfg),
            MoonDay::Day {
                moon: Moon::from_number(8),
                day: 22
            }
        );
    }

    #[test]
    fn representable_range_edges() {
        let cfg = TzolkinConfig::default();
        for date in [CalendarDate::MIN, CalendarDate::MAX] {
            let day = ritual_day(date, &cfg);
            let p = day.position().unwrap();
            let elapsed = p.moon_day.elapsed().unwrap_or(364);
            assert!(elapsed < 365, "{date}: {elapsed}");
            assert!((1..=260).contains(&p.kin.kin.number()));
        }
        // January 1 sits before the July 26 start, in the year's last moons.
        assert!(matches!(
            moon_day(CalendarDate::MIN, &cfg),
            MoonDay::Day { day: 1..=28, .. }
        ));
    }

    #[test]
    fn year_bearer_sentinels() {
        let k = Kin::new(10).unwrap();
        assert_eq!(year_bearer(k, &MoonDay::DayOutOfTime), None);
        assert_eq!(year_bearer(k, &MoonDay::LeapDay), None);
    }

    #[test]
    fn custom_anchor_shifts_count() {
        let cfg = TzolkinConfig::new(d(2000, 1, 1), 1, 7, 26).unwrap();
        assert_eq!(kin_for_date(d(2000, 1, 1), &cfg).unwrap().number(), 1);
        assert_eq!(kin_for_date(d(2000, 9, 17), &cfg).unwrap().number(), 260);
    }
}
