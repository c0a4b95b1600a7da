//! Vara (weekday) and its planetary lord.

use serde::Serialize;

use sandhi_locale::{Locale, Localized, Named, resolve};

use crate::graha::Graha;
use crate::util::en_ru;

/// Weekday, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Vara {
    Ravivara,
    Somavara,
    Mangalavara,
    Budhavara,
    Guruvara,
    Shukravara,
    Shanivara,
}

/// All 7 varas, index 0 = Sunday.
pub const ALL_VARAS: [Vara; 7] = [
    Vara::Ravivara,
    Vara::Somavara,
    Vara::Mangalavara,
    Vara::Budhavara,
    Vara::Guruvara,
    Vara::Shukravara,
    Vara::Shanivara,
];

#[rustfmt::skip]
const VARA_NAMES: [[&str; 2]; 7] = [
    ["Ravivara", "Равивара"],
    ["Somavara", "Сомавара"],
    ["Mangalavara", "Мангалавара"],
    ["Budhavara", "Будхавара"],
    ["Guruvara", "Гурувара"],
    ["Shukravara", "Шукравара"],
    ["Shanivara", "Шанивара"],
];

// en, ru, he
#[rustfmt::skip]
const DAY_NAMES: [[&str; 3]; 7] = [
    ["Sunday", "Воскресенье", "יום ראשון"],
    ["Monday", "Понедельник", "יום שני"],
    ["Tuesday", "Вторник", "יום שלישי"],
    ["Wednesday", "Среда", "יום רביעי"],
    ["Thursday", "Четверг", "יום חמישי"],
    ["Friday", "Пятница", "יום שישי"],
    ["Saturday", "Суббота", "שבת"],
];

impl Vara {
    /// Vara for a civil weekday index, 0 = Sunday.
    ///
    /// # Panics
    /// If `weekday >= 7`.
    pub fn from_weekday(weekday: u8) -> Self {
        assert!(weekday < 7, "weekday index out of range: {weekday}");
        ALL_VARAS[weekday as usize]
    }

    /// 0 = Sunday .. 6 = Saturday.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Ruling graha of the day.
    pub const fn lord(self) -> Graha {
        match self {
            Self::Ravivara => Graha::Surya,
            Self::Somavara => Graha::Chandra,
            Self::Mangalavara => Graha::Mangal,
            Self::Budhavara => Graha::Buddh,
            Self::Guruvara => Graha::Guru,
            Self::Shukravara => Graha::Shukra,
            Self::Shanivara => Graha::Shani,
        }
    }

    /// Civil day name ("Sunday").
    pub fn day_name(self, locale: Locale) -> Localized {
        let row = &DAY_NAMES[self.index() as usize];
        resolve("weekday", locale, |l| {
            Some(match l {
                Locale::En => row[0],
                Locale::Ru => row[1],
                Locale::He => row[2],
            })
        })
    }

    /// Previous weekday.
    pub fn pred(self) -> Self {
        ALL_VARAS[((self.index() + 6) % 7) as usize]
    }
}

impl Named for Vara {
    const CONCEPT: &'static str = "vara";

    fn name_in(&self, locale: Locale) -> Option<&'static str> {
        en_ru(&VARA_NAMES[self.index() as usize], locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lords() {
        assert_eq!(Vara::from_weekday(0).lord(), Graha::Surya);
        assert_eq!(Vara::from_weekday(6).lord(), Graha::Shani);
        assert_eq!(Vara::Guruvara.lord(), Graha::Guru);
    }

    #[test]
    fn names() {
        assert_eq!(Vara::Somavara.name(Locale::Ru).text, "Сомавара");
        assert_eq!(Vara::Shanivara.day_name(Locale::He).text, "שבת");
        assert_eq!(Vara::Ravivara.day_name(Locale::En).text, "Sunday");
    }

    #[test]
    fn pred_wraps() {
        assert_eq!(Vara::Ravivara.pred(), Vara::Shanivara);
        assert_eq!(Vara::Somavara.pred(), Vara::Ravivara);
    }

    #[test]
    #[should_panic]
    fn weekday_seven_panics() {
        Vara::from_weekday(7);
    }
}
