//! Result types for ritual-calendar lookups.

use serde::Serialize;

use sandhi_locale::{Locale, Localized, Named, resolve};
use sandhi_time::CalendarDate;

use crate::color::Color;
use crate::kin::{Kin, KinInfo};
use crate::moon::{DAYS_PER_MOON, Moon};
use crate::seal::en_ru_column;

const HUNAB_KU: [&str; 2] = ["Hunab Ku", "Хунаб Ку"];
const DAY_OUT_OF_TIME: [&str; 2] = ["Day Out of Time", "День Вне Времени"];

/// Position in the 13-moon year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MoonDay {
    /// Day 1..=28 of moon 1..=13.
    Day { moon: Moon, day: u8 },
    /// The 365th day of the moon year; belongs to no moon.
    DayOutOfTime,
    /// February 29; outside the count.
    LeapDay,
}

impl MoonDay {
    /// Days since the moon-year start (0..=363) for an ordinary moon day.
    pub fn elapsed(&self) -> Option<u16> {
        match *self {
            Self::Day { moon, day } => {
                Some(u16::from(moon.number() - 1) * u16::from(DAYS_PER_MOON) + u16::from(day) - 1)
            }
            Self::DayOutOfTime | Self::LeapDay => None,
        }
    }

    pub fn moon(&self) -> Option<Moon> {
        match *self {
            Self::Day { moon, .. } => Some(moon),
            _ => None,
        }
    }

    pub fn day_of_moon(&self) -> Option<u8> {
        match *self {
            Self::Day { day, .. } => Some(day),
            _ => None,
        }
    }

    /// Colour of the 7-day week inside the moon.
    pub fn week_color(&self) -> Option<Color> {
        self.day_of_moon().map(Color::of_moon_week)
    }

    pub fn is_sentinel(&self) -> bool {
        !matches!(self, Self::Day { .. })
    }

    /// "Resonant Moon of Attunement 1", or the sentinel's name.
    pub fn label(&self, locale: Locale) -> String {
        match *self {
            Self::Day { moon, day } => format!("{} {day}", moon.name(locale)),
            Self::DayOutOfTime => sentinel_name(&DAY_OUT_OF_TIME, locale).to_string(),
            Self::LeapDay => sentinel_name(&HUNAB_KU, locale).to_string(),
        }
    }
}

fn sentinel_name(row: &[&'static str; 2], locale: Locale) -> Localized {
    resolve("calendar sentinel", locale, |l| en_ru_column(l).map(|c| row[c]))
}

/// Full ritual-calendar position of an ordinary (non leap) date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RitualPosition {
    pub date: CalendarDate,
    pub kin: KinInfo,
    /// Moon position; the Day Out of Time still carries a kin.
    pub moon_day: MoonDay,
    /// Kin of the current moon year's first day. `None` on the Day Out of Time.
    pub year_bearer: Option<KinInfo>,
}

/// Ritual-calendar lookup result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RitualDay {
    Normal(RitualPosition),
    /// February 29 (Hunab Ku, "0.0"): no kin, no moon, no year bearer.
    LeapDay { date: CalendarDate },
}

impl RitualDay {
    pub fn date(&self) -> CalendarDate {
        match self {
            Self::Normal(p) => p.date,
            Self::LeapDay { date } => *date,
        }
    }

    pub fn position(&self) -> Option<&RitualPosition> {
        match self {
            Self::Normal(p) => Some(p),
            Self::LeapDay { .. } => None,
        }
    }

    pub fn kin(&self) -> Option<Kin> {
        self.position().map(|p| p.kin.kin)
    }

    /// Tone number 1..=13, or `None` on the leap day.
    pub fn tone_number(&self) -> Option<u8> {
        self.position().map(|p| p.kin.tone.number())
    }

    pub fn moon_day(&self) -> MoonDay {
        match self {
            Self::Normal(p) => p.moon_day,
            Self::LeapDay { .. } => MoonDay::LeapDay,
        }
    }

    /// Kin colour; the leap day is green.
    pub fn color(&self) -> Color {
        self.position().map_or(Color::Green, |p| p.kin.color)
    }

    pub fn is_leap_day(&self) -> bool {
        matches!(self, Self::LeapDay { .. })
    }

    /// "Yellow Rhythmic Human", or "Hunab Ku" for the leap day.
    pub fn title(&self, locale: Locale) -> String {
        match self {
            Self::Normal(p) => p.kin.full_title(locale),
            Self::LeapDay { .. } => sentinel_name(&HUNAB_KU, locale).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_from_moon_and_day() {
        let md = MoonDay::Day {
            moon: Moon::from_number(1),
            day: 1,
        };
        assert_eq!(md.elapsed(), Some(0));
        let md = MoonDay::Day {
            moon: Moon::from_number(13),
            day: 28,
        };
        assert_eq!(md.elapsed(), Some(363));
        assert_eq!(MoonDay::DayOutOfTime.elapsed(), None);
    }

    #[test]
    fn sentinel_labels() {
        assert_eq!(MoonDay::DayOutOfTime.label(Locale::En), "Day Out of Time");
        assert_eq!(MoonDay::LeapDay.label(Locale::Ru), "Хунаб Ку");
        assert_eq!(MoonDay::LeapDay.label(Locale::He), "Hunab Ku");
        assert!(MoonDay::LeapDay.week_color().is_none());
    }

    #[test]
    fn day_label_and_week_color() {
        let md = MoonDay::Day {
            moon: Moon::from_number(7),
            day: 9,
        };
        assert_eq!(md.label(Locale::En), "Resonant Moon of Attunement 9");
        assert_eq!(md.week_color(), Some(Color::White));
    }

    #[test]
    fn leap_day_is_green() {
        let day = RitualDay::LeapDay {
            date: CalendarDate::new(2024, 2, 29).unwrap(),
        };
        assert_eq!(day.color(), Color::Green);
        assert_eq!(day.tone_number(), None);
        assert_eq!(day.moon_day(), MoonDay::LeapDay);
        assert_eq!(day.title(Locale::En), "Hunab Ku");
    }
}
