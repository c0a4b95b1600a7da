//! Sunrise-based day divisions: inauspicious periods, Brahma and Abhijit
//! muhurtas, and planetary horas.
//!
//! Sunrise and sunset are supplied by the caller; they depend on a
//! geographic location, which this crate does not model. All instants are
//! naive local times on the same clock.

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

use sandhi_time::CalendarDate;

use crate::error::PanchangaError;
use crate::graha::Graha;
use crate::vara::Vara;

/// Horas per vedic day (12 by day, 12 by night).
pub const HORA_COUNT: u8 = 24;

/// Hora lords in descending orbital-period order, from the Sun.
pub const HORA_SEQUENCE: [Graha; 7] = [
    Graha::Surya,
    Graha::Shukra,
    Graha::Buddh,
    Graha::Chandra,
    Graha::Shani,
    Graha::Guru,
    Graha::Mangal,
];

/// Rahu Kala day part (of 8) per weekday, Sunday first.
const RAHU_PART: [u8; 7] = [7, 1, 6, 4, 5, 3, 2];
/// Gulika Kala day part (of 8) per weekday.
const GULIKA_PART: [u8; 7] = [6, 5, 4, 3, 2, 1, 0];
/// Yamaganda day part (of 8) per weekday.
const YAMAGANDA_PART: [u8; 7] = [4, 3, 2, 1, 0, 6, 5];

const MUHURTA_MINUTES: i64 = 48;

/// Sunrise and sunset of one civil day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SunTimes {
    sunrise: NaiveDateTime,
    sunset: NaiveDateTime,
}

impl SunTimes {
    /// Sunset must follow sunrise by less than 24 hours.
    pub fn new(sunrise: NaiveDateTime, sunset: NaiveDateTime) -> Result<Self, PanchangaError> {
        if sunset <= sunrise {
            return Err(PanchangaError::InvalidSunTimes("sunset is not after sunrise"));
        }
        if sunset - sunrise >= Duration::hours(24) {
            return Err(PanchangaError::InvalidSunTimes("day longer than 24 hours"));
        }
        Ok(Self { sunrise, sunset })
    }

    pub fn sunrise(&self) -> NaiveDateTime {
        self.sunrise
    }

    pub fn sunset(&self) -> NaiveDateTime {
        self.sunset
    }

    pub fn day_length(&self) -> Duration {
        self.sunset - self.sunrise
    }

    /// 24 hours minus the day length.
    pub fn night_length(&self) -> Duration {
        Duration::hours(24) - self.day_length()
    }

    /// Weekday of the sunrise.
    pub fn vara(&self) -> Vara {
        Vara::from_weekday(CalendarDate::from_naive(self.sunrise.date()).weekday_index())
    }
}

/// Half-open `[start, end)` period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Interval {
    pub fn contains(&self, t: NaiveDateTime) -> bool {
        self.start <= t && t < self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

/// `part` of `parts` equal divisions of the span starting at `start`.
fn division(start: NaiveDateTime, span: Duration, parts: i32, part: i32) -> Interval {
    let step_ms = span.num_milliseconds() / i64::from(parts);
    Interval {
        start: start + Duration::milliseconds(step_ms * i64::from(part)),
        end: start + Duration::milliseconds(step_ms * i64::from(part + 1)),
    }
}

/// Day divisions for one civil day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Muhurta {
    pub vara: Vara,
    pub rahu_kala: Interval,
    pub gulika_kala: Interval,
    pub yamaganda: Interval,
    /// The muhurta starting 96 minutes before sunrise.
    pub brahma_muhurta: Interval,
    /// 8th of 15 day parts, around local noon.
    pub abhijit: Interval,
}

/// Day divisions for the day described by `sun`.
pub fn muhurta(sun: &SunTimes) -> Muhurta {
    let vara = sun.vara();
    let day = sun.day_length();
    let w = vara.index() as usize;
    let eighth = |parts: &[u8; 7]| division(sun.sunrise, day, 8, i32::from(parts[w]));
    let brahma_start = sun.sunrise - Duration::minutes(2 * MUHURTA_MINUTES);
    Muhurta {
        vara,
        rahu_kala: eighth(&RAHU_PART),
        gulika_kala: eighth(&GULIKA_PART),
        yamaganda: eighth(&YAMAGANDA_PART),
        brahma_muhurta: Interval {
            start: brahma_start,
            end: brahma_start + Duration::minutes(MUHURTA_MINUTES),
        },
        abhijit: division(sun.sunrise, day, 15, 7),
    }
}

/// Hora lord for the `index`-th hora counted from sunrise of a day ruled
/// by `vara`.
pub fn hora_lord(vara: Vara, index: u8) -> Graha {
    let start = HORA_SEQUENCE
        .iter()
        .position(|g| *g == vara.lord())
        .unwrap_or(0);
    HORA_SEQUENCE[(start + index as usize) % HORA_SEQUENCE.len()]
}

/// Planetary hour at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HoraInfo {
    pub lord: Graha,
    /// 0-based hora within the vedic day (0..24); 0..12 are day horas.
    pub index: u8,
    /// Weekday of the vedic day, which begins at sunrise.
    pub vara: Vara,
    pub interval: Interval,
}

/// Hora containing `instant`.
///
/// Before sunrise the instant belongs to the previous vedic day, whose
/// night is taken to start 24 hours before this day's sunset.
pub fn hora_at(instant: NaiveDateTime, sun: &SunTimes) -> Result<HoraInfo, PanchangaError> {
    let day = sun.day_length();
    let night = sun.night_length();
    let prev_sunset = sun.sunset - Duration::hours(24);

    let (vara, span_start, span, base) = if instant < sun.sunrise {
        if instant < prev_sunset {
            return Err(PanchangaError::InstantOutsideDay);
        }
        (sun.vara().pred(), prev_sunset, night, 12)
    } else if instant < sun.sunset {
        (sun.vara(), sun.sunrise, day, 0)
    } else if instant < sun.sunset + night {
        (sun.vara(), sun.sunset, night, 12)
    } else {
        return Err(PanchangaError::InstantOutsideDay);
    };

    let step_ms = span.num_milliseconds() / 12;
    let elapsed_ms = (instant - span_start).num_milliseconds();
    let within = (elapsed_ms / step_ms.max(1)).clamp(0, 11) as u8;
    let index = base + within;
    let interval = division(span_start, span, 12, i32::from(within));
    Ok(HoraInfo {
        lord: hora_lord(vara, index),
        index,
        vara,
        interval,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    // 2026-01-11 is a Sunday
    fn sunday_6_to_18() -> SunTimes {
        SunTimes::new(at(2026, 1, 11, 6, 0), at(2026, 1, 11, 18, 0)).unwrap()
    }

    #[test]
    fn rejects_inverted_sun_times() {
        let r = SunTimes::new(at(2026, 1, 11, 18, 0), at(2026, 1, 11, 6, 0));
        assert!(matches!(r, Err(PanchangaError::InvalidSunTimes(_))));
        let r = SunTimes::new(at(2026, 1, 11, 6, 0), at(2026, 1, 11, 6, 0));
        assert!(r.is_err());
    }

    #[test]
    fn sunday_periods() {
        let m = muhurta(&sunday_6_to_18());
        assert_eq!(m.vara, Vara::Ravivara);
        assert_eq!(m.rahu_kala.start, at(2026, 1, 11, 16, 30));
        assert_eq!(m.rahu_kala.end, at(2026, 1, 11, 18, 0));
        assert_eq!(m.gulika_kala.start, at(2026, 1, 11, 15, 0));
        assert_eq!(m.yamaganda.start, at(2026, 1, 11, 12, 0));
    }

    #[test]
    fn monday_rahu_kala() {
        let sun = SunTimes::new(at(2026, 1, 12, 6, 0), at(2026, 1, 12, 18, 0)).unwrap();
        let m = muhurta(&sun);
        assert_eq!(m.rahu_kala.start, at(2026, 1, 12, 7, 30));
        assert_eq!(m.rahu_kala.end, at(2026, 1, 12, 9, 0));
    }

    #[test]
    fn brahma_and_abhijit() {
        let m = muhurta(&sunday_6_to_18());
        assert_eq!(m.brahma_muhurta.start, at(2026, 1, 11, 4, 24));
        assert_eq!(m.brahma_muhurta.end, at(2026, 1, 11, 5, 12));
        // 12 h / 15 = 48 min; 8th part starts 5 h 36 min after sunrise
        assert_eq!(m.abhijit.start, at(2026, 1, 11, 11, 36));
        assert_eq!(m.abhijit.end, at(2026, 1, 11, 12, 24));
        assert_eq!(m.abhijit.duration(), Duration::minutes(48));
    }

    #[test]
    fn first_hora_is_day_lord() {
        let h = hora_at(at(2026, 1, 11, 6, 10), &sunday_6_to_18()).unwrap();
        assert_eq!(h.index, 0);
        assert_eq!(h.lord, Graha::Surya);
        let h = hora_at(at(2026, 1, 11, 7, 5), &sunday_6_to_18()).unwrap();
        assert_eq!(h.lord, Graha::Shukra);
    }

    #[test]
    fn night_horas() {
        let sun = sunday_6_to_18();
        let h = hora_at(at(2026, 1, 11, 18, 0), &sun).unwrap();
        assert_eq!(h.index, 12);
        assert_eq!(h.vara, Vara::Ravivara);
        // Sunday hora 12: (0 + 12) % 7 = 5 -> Guru
        assert_eq!(h.lord, Graha::Guru);
        let h = hora_at(at(2026, 1, 12, 5, 30), &sun).unwrap();
        assert_eq!(h.index, 23);
    }

    #[test]
    fn before_sunrise_is_previous_day() {
        let h = hora_at(at(2026, 1, 11, 5, 0), &sunday_6_to_18()).unwrap();
        assert_eq!(h.vara, Vara::Shanivara);
        assert_eq!(h.index, 23);
        // Saturday starts at Shani (index 4); (4 + 23) % 7 = 6 -> Mangal
        assert_eq!(h.lord, Graha::Mangal);
    }

    #[test]
    fn next_day_lord_follows_last_hora() {
        // 24 horas advance the sequence by 3: Sunday -> Monday
        assert_eq!(hora_lord(Vara::Ravivara, HORA_COUNT), Graha::Chandra);
        for v in crate::vara::ALL_VARAS {
            let next = crate::vara::ALL_VARAS[((v.index() + 1) % 7) as usize];
            assert_eq!(hora_lord(v, 0), v.lord());
            assert_eq!(hora_lord(v, 24), next.lord());
        }
    }

    #[test]
    fn outside_day_is_error() {
        let sun = sunday_6_to_18();
        assert_eq!(
            hora_at(at(2026, 1, 12, 6, 0), &sun),
            Err(PanchangaError::InstantOutsideDay)
        );
        assert_eq!(
            hora_at(at(2026, 1, 10, 17, 0), &sun),
            Err(PanchangaError::InstantOutsideDay)
        );
    }
}
