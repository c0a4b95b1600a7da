//! Moons of the 13-moon year and their totems.

use serde::{Serialize, Serializer};

use sandhi_locale::{Locale, Localized, Named, resolve};

use crate::seal::en_ru_column;
use crate::tone::{ALL_TONES, Tone};

/// One of the 13 moons of 28 days. Moon `n` carries tone `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Moon(Tone);

/// Days in every moon.
pub const DAYS_PER_MOON: u8 = 28;

/// Moons in a 13-moon year (the Day Out of Time follows the last).
pub const MOONS_PER_YEAR: u8 = 13;

#[rustfmt::skip]
const MOON_NAMES: [[&str; 2]; 13] = [
    ["Magnetic Moon of Purpose", "Магнитная Луна Цели"],
    ["Lunar Moon of Challenge", "Лунная Луна Вызова"],
    ["Electric Moon of Service", "Электрическая Луна Служения"],
    ["Self-Existing Moon of Form", "Самосущная Луна Формы"],
    ["Overtone Moon of Radiance", "Обертонная Луна Сияния"],
    ["Rhythmic Moon of Equality", "Ритмическая Луна Равенства"],
    ["Resonant Moon of Attunement", "Резонансная Луна Настройки"],
    ["Galactic Moon of Integrity", "Галактическая Луна Целостности"],
    ["Solar Moon of Intention", "Солнечная Луна Намерения"],
    ["Planetary Moon of Manifestation", "Планетарная Луна Проявления"],
    ["Spectral Moon of Liberation", "Спектральная Луна Освобождения"],
    ["Crystal Moon of Cooperation", "Кристаллическая Луна Сотрудничества"],
    ["Cosmic Moon of Presence", "Космическая Луна Присутствия"],
];

#[rustfmt::skip]
const TOTEMS: [[&str; 2]; 13] = [
    ["Bat", "Летучая Мышь"],
    ["Scorpion", "Скорпион"],
    ["Deer", "Олень"],
    ["Owl", "Сова"],
    ["Peacock", "Павлин"],
    ["Lizard", "Ящерица"],
    ["Monkey", "Обезьяна"],
    ["Hawk", "Ястреб"],
    ["Jaguar", "Ягуар"],
    ["Dog", "Собака"],
    ["Serpent", "Змея"],
    ["Rabbit", "Кролик"],
    ["Turtle", "Черепаха"],
];

impl Moon {
    /// Moon for a number 1..=13.
    ///
    /// # Panics
    /// If `number` is outside 1..=13. Moon numbers are derived from an
    /// elapsed-day count below 364, so overflow is a calendar bug.
    pub fn from_number(number: u8) -> Self {
        assert!(
            (1..=MOONS_PER_YEAR).contains(&number),
            "moon number out of range: {number}"
        );
        Self(ALL_TONES[(number - 1) as usize])
    }

    /// Moon number 1..=13.
    pub const fn number(self) -> u8 {
        self.0.number()
    }

    /// Tone sharing this moon's position.
    pub const fn tone(self) -> Tone {
        self.0
    }

    /// Totem animal of the moon.
    pub fn totem(self, locale: Locale) -> Localized {
        let row = &TOTEMS[self.0.index() as usize];
        resolve("moon totem", locale, |l| en_ru_column(l).map(|c| row[c]))
    }

    /// Reflective question of the moon.
    pub fn question(self, locale: Locale) -> Localized {
        self.0.question(locale)
    }
}

impl Serialize for Moon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.number())
    }
}

impl Named for Moon {
    const CONCEPT: &'static str = "moon";

    fn name_in(&self, locale: Locale) -> Option<&'static str> {
        en_ru_column(locale).map(|c| MOON_NAMES[self.0.index() as usize][c])
    }
}
