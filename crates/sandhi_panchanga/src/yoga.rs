//! Yoga: 27 equal sectors of the summed Sun and Moon sidereal longitudes.

use serde::Serialize;

use sandhi_locale::{Locale, Named};

use crate::nakshatra::NAKSHATRA_SPAN_27;
use crate::util::{en_ru, normalize_360};

/// The 27 yogas from Vishkumbha to Vaidhriti.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Yoga {
    Vishkumbha,
    Priti,
    Ayushman,
    Saubhagya,
    Shobhana,
    Atiganda,
    Sukarma,
    Dhriti,
    Shula,
    Ganda,
    Vriddhi,
    Dhruva,
    Vyaghata,
    Harshana,
    Vajra,
    Siddhi,
    Vyatipata,
    Variyana,
    Parigha,
    Shiva,
    Siddha,
    Sadhya,
    Shubha,
    Shukla,
    Brahma,
    Indra,
    Vaidhriti,
}

/// All 27 yogas in order.
pub const ALL_YOGAS: [Yoga; 27] = [
    Yoga::Vishkumbha,
    Yoga::Priti,
    Yoga::Ayushman,
    Yoga::Saubhagya,
    Yoga::Shobhana,
    Yoga::Atiganda,
    Yoga::Sukarma,
    Yoga::Dhriti,
    Yoga::Shula,
    Yoga::Ganda,
    Yoga::Vriddhi,
    Yoga::Dhruva,
    Yoga::Vyaghata,
    Yoga::Harshana,
    Yoga::Vajra,
    Yoga::Siddhi,
    Yoga::Vyatipata,
    Yoga::Variyana,
    Yoga::Parigha,
    Yoga::Shiva,
    Yoga::Siddha,
    Yoga::Sadhya,
    Yoga::Shubha,
    Yoga::Shukla,
    Yoga::Brahma,
    Yoga::Indra,
    Yoga::Vaidhriti,
];

#[rustfmt::skip]
const YOGA_NAMES: [[&str; 2]; 27] = [
    ["Vishkumbha", "Вишкумбха"],
    ["Priti", "Прити"],
    ["Ayushman", "Аюшман"],
    ["Saubhagya", "Саубхагья"],
    ["Shobhana", "Шобхана"],
    ["Atiganda", "Атиганда"],
    ["Sukarma", "Сукарма"],
    ["Dhriti", "Дхрити"],
    ["Shula", "Шула"],
    ["Ganda", "Ганда"],
    ["Vriddhi", "Вриддхи"],
    ["Dhruva", "Дхрува"],
    ["Vyaghata", "Вьягхата"],
    ["Harshana", "Харшана"],
    ["Vajra", "Ваджра"],
    ["Siddhi", "Сиддхи"],
    ["Vyatipata", "Вьятипата"],
    ["Variyana", "Варияна"],
    ["Parigha", "Паригха"],
    ["Shiva", "Шива"],
    ["Siddha", "Сиддха"],
    ["Sadhya", "Садхья"],
    ["Shubha", "Шубха"],
    ["Shukla", "Шукла"],
    ["Brahma", "Брахма"],
    ["Indra", "Индра"],
    ["Vaidhriti", "Вайдхрити"],
];

impl Yoga {
    /// 0-based index (Vishkumbha=0 .. Vaidhriti=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based number.
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// Yogas traditionally avoided for new undertakings.
    pub const fn is_inauspicious(self) -> bool {
        matches!(
            self,
            Self::Vishkumbha
                | Self::Atiganda
                | Self::Shula
                | Self::Ganda
                | Self::Vyaghata
                | Self::Vajra
                | Self::Vyatipata
                | Self::Parigha
                | Self::Vaidhriti
        )
    }
}

impl Named for Yoga {
    const CONCEPT: &'static str = "yoga";

    fn name_in(&self, locale: Locale) -> Option<&'static str> {
        en_ru(&YOGA_NAMES[self.index() as usize], locale)
    }
}

/// Result of yoga lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YogaInfo {
    pub yoga: Yoga,
    /// 1-based number.
    pub number: u8,
    /// Summed longitude, [0, 360).
    pub sum_deg: f64,
}

/// Yoga from the sum of Sun and Moon sidereal longitudes.
pub fn yoga_from_sum(sum_deg: f64) -> YogaInfo {
    let sum = normalize_360(sum_deg);
    let idx = ((sum / NAKSHATRA_SPAN_27).floor() as u8).min(26);
    let yoga = ALL_YOGAS[idx as usize];
    YogaInfo {
        yoga,
        number: yoga.number(),
        sum_deg: sum,
    }
}
