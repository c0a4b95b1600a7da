//! The nine grahas, as weekday, nakshatra and hora lords.

use serde::Serialize;

use sandhi_locale::{Locale, Named};

use crate::util::en_ru;

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

// en, ru
#[rustfmt::skip]
const GRAHA_NAMES: [[&str; 2]; 9] = [
    ["Sun", "Солнце"],
    ["Moon", "Луна"],
    ["Mars", "Марс"],
    ["Mercury", "Меркурий"],
    ["Jupiter", "Юпитер"],
    ["Venus", "Венера"],
    ["Saturn", "Сатурн"],
    ["Rahu", "Раху"],
    ["Ketu", "Кету"],
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index in [`ALL_GRAHAS`].
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl Named for Graha {
    const CONCEPT: &'static str = "graha";

    fn name_in(&self, locale: Locale) -> Option<&'static str> {
        en_ru(&GRAHA_NAMES[self.index() as usize], locale)
    }
}
