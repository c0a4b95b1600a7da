//! The 13 galactic tones.
//!
//! Tone number is `(kin - 1) mod 13 + 1`. The same 13-step sequence names
//! the moons of the 13-moon year, so moon questions come from this table.

use serde::Serialize;

use sandhi_locale::{Locale, Localized, Named, resolve};

use crate::seal::en_ru_column;

/// Tones 1 (Magnetic) through 13 (Cosmic).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[allow(missing_docs)]
pub enum Tone {
    Magnetic,
    Lunar,
    Electric,
    SelfExisting,
    Overtone,
    Rhythmic,
    Resonant,
    Galactic,
    Solar,
    Planetary,
    Spectral,
    Crystal,
    Cosmic,
}

/// All 13 tones in order (index 0 = Magnetic, tone number 1).
pub const ALL_TONES: [Tone; 13] = [
    Tone::Magnetic,
    Tone::Lunar,
    Tone::Electric,
    Tone::SelfExisting,
    Tone::Overtone,
    Tone::Rhythmic,
    Tone::Resonant,
    Tone::Galactic,
    Tone::Solar,
    Tone::Planetary,
    Tone::Spectral,
    Tone::Crystal,
    Tone::Cosmic,
];

#[rustfmt::skip]
const TONE_NAMES: [[&str; 2]; 13] = [
    ["Magnetic", "Магнитный"],
    ["Lunar", "Лунный"],
    ["Electric", "Электрический"],
    ["Self-Existing", "Самосущный"],
    ["Overtone", "Обертонный"],
    ["Rhythmic", "Ритмический"],
    ["Resonant", "Резонансный"],
    ["Galactic", "Галактический"],
    ["Solar", "Солнечный"],
    ["Planetary", "Планетарный"],
    ["Spectral", "Спектральный"],
    ["Crystal", "Кристаллический"],
    ["Cosmic", "Космический"],
];

const MAYAN_NAMES: [&str; 13] = [
    "Hun", "Ca", "Ox", "Can", "Ho", "Uac", "Uuk", "Vaxac", "Bolon", "Lahun", "Buluk", "Lahac",
    "Oxlahun",
];

// [action, power, essence] x [en, ru]
#[rustfmt::skip]
const TONE_ATTRIBUTES: [[[&str; 2]; 3]; 13] = [
    [["Attract", "Привлечение"], ["Unify", "Единство"], ["Purpose", "Цель"]],
    [["Stabilize", "Стабилизация"], ["Polarize", "Полярность"], ["Challenge", "Вызов"]],
    [["Bond", "Связь"], ["Activate", "Активация"], ["Service", "Служение"]],
    [["Measure", "Измерение"], ["Define", "Определение"], ["Form", "Форма"]],
    [["Command", "Управление"], ["Empower", "Наделение силой"], ["Radiance", "Сияние"]],
    [["Balance", "Баланс"], ["Organize", "Организация"], ["Equality", "Равенство"]],
    [["Channel", "Проводимость"], ["Inspire", "Вдохновение"], ["Attunement", "Настройка"]],
    [["Harmonize", "Гармонизация"], ["Model", "Моделирование"], ["Integrity", "Целостность"]],
    [["Pulse", "Пульсация"], ["Realize", "Реализация"], ["Intention", "Намерение"]],
    [["Perfect", "Совершенствование"], ["Produce", "Производство"], ["Manifestation", "Проявление"]],
    [["Dissolve", "Растворение"], ["Release", "Высвобождение"], ["Liberation", "Освобождение"]],
    [["Dedicate", "Посвящение"], ["Universalize", "Универсализация"], ["Cooperation", "Сотрудничество"]],
    [["Endure", "Выносливость"], ["Transcend", "Трансцендентность"], ["Presence", "Присутствие"]],
];

#[rustfmt::skip]
const TONE_QUESTIONS: [[&str; 2]; 13] = [
    ["What is my purpose?", "Какова моя цель?"],
    ["What is my challenge?", "Каков мой вызов?"],
    ["How can I best serve?", "Как я могу лучше всего служить?"],
    ["What is the form of my service?", "Какова форма моего служения?"],
    ["How can I best empower myself?", "Как мне лучше всего наделить себя силой?"],
    ["How can I extend my equality to others?", "Как мне распространить равенство на других?"],
    ["How can I attune my service to others?", "Как мне настроить свое служение другим?"],
    ["Do I live what I believe?", "Живу ли я тем, во что верю?"],
    ["How do I attain my purpose?", "Как мне достичь своей цели?"],
    ["How do I perfect what I do?", "Как мне усовершенствовать то, что я делаю?"],
    ["How do I release and let go?", "Как мне освободиться и отпустить?"],
    ["How can I dedicate myself to all that lives?", "Как мне посвятить себя всему живому?"],
    ["How can I expand my joy and love?", "Как мне расширить свою радость и любовь?"],
];

impl Tone {
    /// 0-based index (Magnetic=0 .. Cosmic=12).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Tone number 1..=13.
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// Tone for a number 1..=13.
    ///
    /// # Panics
    /// If `number` is outside 1..=13.
    pub fn from_number(number: u8) -> Self {
        assert!(
            (1..=13).contains(&number),
            "tone number out of range: {number}"
        );
        ALL_TONES[(number - 1) as usize]
    }

    /// Yucatec numeral name.
    pub fn mayan_name(self) -> &'static str {
        MAYAN_NAMES[self.index() as usize]
    }

    fn attribute(self, which: usize, concept: &'static str, locale: Locale) -> Localized {
        let row = &TONE_ATTRIBUTES[self.index() as usize][which];
        resolve(concept, locale, |l| en_ru_column(l).map(|c| row[c]))
    }

    pub fn action(self, locale: Locale) -> Localized {
        self.attribute(0, "tone action", locale)
    }

    pub fn power(self, locale: Locale) -> Localized {
        self.attribute(1, "tone power", locale)
    }

    pub fn essence(self, locale: Locale) -> Localized {
        self.attribute(2, "tone essence", locale)
    }

    /// Reflective question of the tone (also the question of its moon).
    pub fn question(self, locale: Locale) -> Localized {
        let row = &TONE_QUESTIONS[self.index() as usize];
        resolve("tone question", locale, |l| en_ru_column(l).map(|c| row[c]))
    }

    /// All 13 tones in order.
    pub const fn all() -> &'static [Tone; 13] {
        &ALL_TONES
    }
}

impl Named for Tone {
    const CONCEPT: &'static str = "tone";

    fn name_in(&self, locale: Locale) -> Option<&'static str> {
        en_ru_column(locale).map(|c| TONE_NAMES[self.index() as usize][c])
    }
}
