//! Tithi (lunar day), paksha and tithi group.
//!
//! A tithi is a 12 deg step of Moon-minus-Sun elongation, 30 per synodic
//! month. Tithis 16..=29 are displayed as 1..=14 of the waning half; 15
//! (Purnima) and 30 (Amavasya) keep their own identity.

use serde::Serialize;

use sandhi_locale::{Locale, Named};

use crate::util::{en_ru, normalize_360};

/// Elongation span of one tithi, degrees.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Paksha {
    /// Waxing half, tithis 1..=15.
    Shukla,
    /// Waning half, tithis 16..=30.
    Krishna,
}

// en, ru, he
#[rustfmt::skip]
const PAKSHA_NAMES: [[&str; 3]; 2] = [
    ["Shukla Paksha (Waxing)", "Шукла Пакша (Растущая)", "שוקלה פקשה (מתמלא)"],
    ["Krishna Paksha (Waning)", "Кришна Пакша (Убывающая)", "קרישנה פקשה (מתמעט)"],
];

impl Named for Paksha {
    const CONCEPT: &'static str = "paksha";

    fn name_in(&self, locale: Locale) -> Option<&'static str> {
        let row = &PAKSHA_NAMES[*self as usize];
        Some(match locale {
            Locale::En => row[0],
            Locale::Ru => row[1],
            Locale::He => row[2],
        })
    }
}

/// Five-fold classification of tithis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TithiGroup {
    Nanda,
    Bhadra,
    Jaya,
    Rikta,
    Purna,
}

const GROUPS: [TithiGroup; 5] = [
    TithiGroup::Nanda,
    TithiGroup::Bhadra,
    TithiGroup::Jaya,
    TithiGroup::Rikta,
    TithiGroup::Purna,
];

#[rustfmt::skip]
const GROUP_NAMES: [[&str; 2]; 5] = [
    ["Nanda (Joyful)", "Нанда (Радостная)"],
    ["Bhadra (Auspicious)", "Бхадра (Благоприятная)"],
    ["Jaya (Victorious)", "Джая (Победная)"],
    ["Rikta (Empty)", "Рикта (Пустая)"],
    ["Purna (Full)", "Пурна (Полная)"],
];

impl Named for TithiGroup {
    const CONCEPT: &'static str = "tithi group";

    fn name_in(&self, locale: Locale) -> Option<&'static str> {
        en_ru(&GROUP_NAMES[*self as usize], locale)
    }
}

// Indexed by display id 1..=15, then Amavasya for tithi 30.
#[rustfmt::skip]
const TITHI_NAMES: [[&str; 2]; 16] = [
    ["Pratipada", "Пратипада"],
    ["Dwitiya", "Двитья"],
    ["Tritiya", "Тритья"],
    ["Chaturthi", "Чатуртхи"],
    ["Panchami", "Панчами"],
    ["Shashthi", "Шаштхи"],
    ["Saptami", "Саптами"],
    ["Ashtami", "Аштами"],
    ["Navami", "Навами"],
    ["Dashami", "Дашами"],
    ["Ekadashi", "Экадаши"],
    ["Dwadashi", "Двадаши"],
    ["Trayodashi", "Трайодаши"],
    ["Chaturdashi", "Чатурдаши"],
    ["Purnima", "Пурнима"],
    ["Amavasya", "Амавасья"],
];

/// Tithi number 1..=30 within the synodic month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Tithi(u8);

impl Tithi {
    /// Tithi for a number 1..=30.
    ///
    /// # Panics
    /// If `number` is outside 1..=30.
    pub fn from_number(number: u8) -> Self {
        assert!(
            (1..=30).contains(&number),
            "tithi number out of range: {number}"
        );
        Self(number)
    }

    pub const fn number(self) -> u8 {
        self.0
    }

    /// Display id: the number within the paksha (1..=15), except that the
    /// new-moon tithi 30 stays 30.
    pub const fn id(self) -> u8 {
        if self.0 > 15 && self.0 != 30 {
            self.0 - 15
        } else {
            self.0
        }
    }

    pub const fn paksha(self) -> Paksha {
        if self.0 <= 15 {
            Paksha::Shukla
        } else {
            Paksha::Krishna
        }
    }

    /// Nanda (1, 6, 11), Bhadra (2, 7, 12), Jaya (3, 8, 13), Rikta
    /// (4, 9, 14), Purna (5, 10, 15, 30) by display id.
    pub fn group(self) -> TithiGroup {
        let id = self.id();
        if id == 30 {
            TithiGroup::Purna
        } else {
            GROUPS[((id - 1) % 5) as usize]
        }
    }

    pub const fn is_purnima(self) -> bool {
        self.0 == 15
    }

    pub const fn is_amavasya(self) -> bool {
        self.0 == 30
    }

    fn name_row(self) -> usize {
        match self.id() {
            30 => 15,
            id => (id - 1) as usize,
        }
    }
}

impl Named for Tithi {
    const CONCEPT: &'static str = "tithi";

    fn name_in(&self, locale: Locale) -> Option<&'static str> {
        en_ru(&TITHI_NAMES[self.name_row()], locale)
    }
}

/// Tithi classification of an elongation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TithiInfo {
    pub tithi: Tithi,
    /// Display id (1..=15, or 30 for Amavasya).
    pub id: u8,
    pub paksha: Paksha,
    pub group: TithiGroup,
    /// Degrees of elongation already traversed in this tithi, [0, 12).
    pub degrees_in_tithi: f64,
}

/// Tithi from Moon-minus-Sun elongation in degrees, bucketed by floor
/// division: `floor(elongation / 12) + 1`. An elongation exactly on a 12°
/// line belongs to the bucket whose lower edge it is, so 12.0° is tithi 2.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiInfo {
    let elong = normalize_360(elongation_deg);
    let idx = ((elong / TITHI_SEGMENT_DEG).floor() as u8).min(29);
    let tithi = Tithi::from_number(idx + 1);
    TithiInfo {
        tithi,
        id: tithi.id(),
        paksha: tithi.paksha(),
        group: tithi.group(),
        degrees_in_tithi: elong - f64::from(idx) * TITHI_SEGMENT_DEG,
    }
}
