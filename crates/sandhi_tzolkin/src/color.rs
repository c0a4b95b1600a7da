//! Colours of seals, kins and moon weeks.

use serde::Serialize;

use sandhi_locale::{Locale, Named};

use crate::seal::en_ru_column;

/// Seal colour. `Green` belongs only to the leap-day (Hunab Ku) record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[allow(missing_docs)]
pub enum Color {
    Red,
    White,
    Blue,
    Yellow,
    Green,
}

/// The four colours of the seal cycle, in seal order.
pub const ALL_CYCLE_COLORS: [Color; 4] = [Color::Red, Color::White, Color::Blue, Color::Yellow];

#[rustfmt::skip]
const COLOR_NAMES: [[&str; 2]; 5] = [
    ["Red", "Красный"],
    ["White", "Белый"],
    ["Blue", "Синий"],
    ["Yellow", "Желтый"],
    ["Green", "Зеленый"],
];

impl Color {
    const fn index(self) -> usize {
        self as usize
    }

    /// Colour of a day-of-moon week: 1-7 red, 8-14 white, 15-21 blue,
    /// 22-28 yellow.
    ///
    /// # Panics
    /// If `day_of_moon` is outside 1..=28.
    pub fn of_moon_week(day_of_moon: u8) -> Self {
        assert!(
            (1..=28).contains(&day_of_moon),
            "day of moon out of range: {day_of_moon}"
        );
        ALL_CYCLE_COLORS[((day_of_moon - 1) / 7) as usize]
    }
}

impl Named for Color {
    const CONCEPT: &'static str = "color";

    fn name_in(&self, locale: Locale) -> Option<&'static str> {
        en_ru_column(locale).map(|c| COLOR_NAMES[self.index()][c])
    }
}
