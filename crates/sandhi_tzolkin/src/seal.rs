//! The 20 solar seals of the ritual count.
//!
//! Seal index is `(kin - 1) mod 20`; seal colour cycles red, white, blue,
//! yellow on `index mod 4`.

use serde::Serialize;

use sandhi_locale::{Locale, Localized, Named, resolve};

use crate::color::{ALL_CYCLE_COLORS, Color};

/// The 20 seals from Dragon to Sun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[allow(missing_docs)]
pub enum Seal {
    Dragon,
    Wind,
    Night,
    Seed,
    Serpent,
    WorldBridger,
    Hand,
    Star,
    Moon,
    Dog,
    Monkey,
    Human,
    Skywalker,
    Wizard,
    Eagle,
    Warrior,
    Earth,
    Mirror,
    Storm,
    Sun,
}

/// All 20 seals in order (index 0 = Dragon).
pub const ALL_SEALS: [Seal; 20] = [
    Seal::Dragon,
    Seal::Wind,
    Seal::Night,
    Seal::Seed,
    Seal::Serpent,
    Seal::WorldBridger,
    Seal::Hand,
    Seal::Star,
    Seal::Moon,
    Seal::Dog,
    Seal::Monkey,
    Seal::Human,
    Seal::Skywalker,
    Seal::Wizard,
    Seal::Eagle,
    Seal::Warrior,
    Seal::Earth,
    Seal::Mirror,
    Seal::Storm,
    Seal::Sun,
];

// Columns: en, ru
#[rustfmt::skip]
const SEAL_NAMES: [[&str; 2]; 20] = [
    ["Dragon", "Дракон"],
    ["Wind", "Ветер"],
    ["Night", "Ночь"],
    ["Seed", "Семя"],
    ["Serpent", "Змей"],
    ["World-Bridger", "Соединитель Миров"],
    ["Hand", "Рука"],
    ["Star", "Звезда"],
    ["Moon", "Луна"],
    ["Dog", "Собака"],
    ["Monkey", "Обезьяна"],
    ["Human", "Человек"],
    ["Skywalker", "Странник"],
    ["Wizard", "Волшебник"],
    ["Eagle", "Орел"],
    ["Warrior", "Воин"],
    ["Earth", "Земля"],
    ["Mirror", "Зеркало"],
    ["Storm", "Буря"],
    ["Sun", "Солнце"],
];

const MAYAN_NAMES: [&str; 20] = [
    "Imix", "Ik", "Akbal", "Kan", "Chicchan", "Cimi", "Manik", "Lamat", "Muluc", "Oc", "Chuen",
    "Eb", "Ben", "Ix", "Men", "Cib", "Caban", "Etznab", "Cauac", "Ahau",
];

// Columns: [action, power, essence] x [en, ru]
#[rustfmt::skip]
const SEAL_ATTRIBUTES: [[[&str; 2]; 3]; 20] = [
    [["Nurtures", "Питает"], ["Birth", "Рождение"], ["Being", "Бытие"]],
    [["Communicates", "Сообщает"], ["Spirit", "Дух"], ["Breath", "Дыхание"]],
    [["Dreams", "Мечтает"], ["Abundance", "Изобилие"], ["Intuition", "Интуиция"]],
    [["Targets", "Нацеливает"], ["Flowering", "Цветение"], ["Awareness", "Осознанность"]],
    [["Survives", "Выживает"], ["Life Force", "Жизненная сила"], ["Instinct", "Инстинкт"]],
    [["Equalizes", "Уравнивает"], ["Death", "Смерть"], ["Opportunity", "Возможность"]],
    [["Knows", "Узнает"], ["Accomplishment", "Свершение"], ["Healing", "Исцеление"]],
    [["Beautifies", "Украшает"], ["Elegance", "Изящество"], ["Art", "Искусство"]],
    [["Purifies", "Очищает"], ["Universal Water", "Вода"], ["Flow", "Поток"]],
    [["Loves", "Любит"], ["Heart", "Сердце"], ["Loyalty", "Преданность"]],
    [["Plays", "Играет"], ["Magic", "Магия"], ["Illusion", "Иллюзия"]],
    [["Influences", "Влияет"], ["Free Will", "Свободная воля"], ["Wisdom", "Мудрость"]],
    [["Explores", "Исследует"], ["Space", "Пространство"], ["Wakefulness", "Пробужденность"]],
    [["Enchants", "Очаровывает"], ["Timelessness", "Вневременность"], ["Receptivity", "Восприимчивость"]],
    [["Creates", "Творит"], ["Vision", "Видение"], ["Mind", "Разум"]],
    [["Questions", "Вопрошает"], ["Intelligence", "Интеллект"], ["Fearlessness", "Бесстрашие"]],
    [["Evolves", "Эволюционирует"], ["Navigation", "Навигация"], ["Synchronicity", "Синхронность"]],
    [["Reflects", "Отражает"], ["Endlessness", "Бесконечность"], ["Order", "Порядок"]],
    [["Catalyzes", "Ускоряет"], ["Self-Generation", "Самопорождение"], ["Energy", "Энергия"]],
    [["Enlightens", "Просветляет"], ["Universal Fire", "Вселенский огонь"], ["Life", "Жизнь"]],
];

/// Column of a two-locale (en, ru) table; other locales have no column.
pub(crate) const fn en_ru_column(locale: Locale) -> Option<usize> {
    match locale {
        Locale::En => Some(0),
        Locale::Ru => Some(1),
        Locale::He => None,
    }
}

impl Seal {
    /// 0-based index (Dragon=0 .. Sun=19).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Seal at a 0-based index.
    ///
    /// # Panics
    /// If `index >= 20`; indices come from `(kin - 1) mod 20`.
    pub fn from_index(index: u8) -> Self {
        assert!(index < 20, "seal index out of range: {index}");
        ALL_SEALS[index as usize]
    }

    /// Yucatec day name.
    pub fn mayan_name(self) -> &'static str {
        MAYAN_NAMES[self.index() as usize]
    }

    /// Seal colour (red, white, blue, yellow cycling from Dragon).
    pub fn color(self) -> Color {
        ALL_CYCLE_COLORS[(self.index() % 4) as usize]
    }

    fn attribute(self, which: usize, concept: &'static str, locale: Locale) -> Localized {
        let row = &SEAL_ATTRIBUTES[self.index() as usize][which];
        resolve(concept, locale, |l| en_ru_column(l).map(|c| row[c]))
    }

    /// Action verb ("Nurtures").
    pub fn action(self, locale: Locale) -> Localized {
        self.attribute(0, "seal action", locale)
    }

    /// Power ("Birth").
    pub fn power(self, locale: Locale) -> Localized {
        self.attribute(1, "seal power", locale)
    }

    /// Essence ("Being").
    pub fn essence(self, locale: Locale) -> Localized {
        self.attribute(2, "seal essence", locale)
    }

    /// All 20 seals in order.
    pub const fn all() -> &'static [Seal; 20] {
        &ALL_SEALS
    }
}

impl Named for Seal {
    const CONCEPT: &'static str = "seal";

    fn name_in(&self, locale: Locale) -> Option<&'static str> {
        en_ru_column(locale).map(|c| SEAL_NAMES[self.index() as usize][c])
    }
}
