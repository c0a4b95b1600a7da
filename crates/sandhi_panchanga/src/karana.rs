//! Karana (half-tithi): 60 six-degree segments of elongation per month.
//!
//! The 60 positions do not follow a single period: position 1 is
//! Kimstughna, positions 2..=57 cycle through the seven movable karanas,
//! and positions 58..=60 are Shakuni, Chatushpada and Naga. The mapping is
//! kept as an explicit 60-entry table.

use serde::Serialize;

use sandhi_locale::{Locale, Named};

use crate::util::{en_ru, normalize_360};

/// Elongation span of one karana, degrees.
pub const KARANA_SEGMENT_DEG: f64 = 6.0;

/// The 11 karanas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Karana {
    Kimstughna,
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garaja,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
}

/// The seven movable karanas, in cycle order.
pub const MOVABLE_KARANAS: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
];

/// Karana at each of the 60 positions (index 0 = position 1).
pub const KARANA_SEQUENCE: [Karana; 60] = build_sequence();

const fn build_sequence() -> [Karana; 60] {
    let mut seq = [Karana::Bava; 60];
    seq[0] = Karana::Kimstughna;
    let mut i = 1;
    while i < 57 {
        seq[i] = MOVABLE_KARANAS[(i - 1) % 7];
        i += 1;
    }
    seq[57] = Karana::Shakuni;
    seq[58] = Karana::Chatushpada;
    seq[59] = Karana::Naga;
    seq
}

#[rustfmt::skip]
const KARANA_NAMES: [[&str; 2]; 11] = [
    ["Kimstughna", "Кимстугхна"],
    ["Bava", "Бава"],
    ["Balava", "Балава"],
    ["Kaulava", "Каулава"],
    ["Taitila", "Тайтила"],
    ["Garaja", "Гараджа"],
    ["Vanija", "Ваниджа"],
    ["Vishti", "Вишти"],
    ["Shakuni", "Шакуни"],
    ["Chatushpada", "Чатушпада"],
    ["Naga", "Нага"],
];

impl Karana {
    /// True for the four karanas that occur once per month.
    pub const fn is_fixed(self) -> bool {
        matches!(
            self,
            Self::Kimstughna | Self::Shakuni | Self::Chatushpada | Self::Naga
        )
    }

    /// Karana at a 1-based position 1..=60.
    ///
    /// # Panics
    /// If `position` is outside 1..=60.
    pub fn at_position(position: u8) -> Self {
        assert!(
            (1..=60).contains(&position),
            "karana position out of range: {position}"
        );
        KARANA_SEQUENCE[(position - 1) as usize]
    }
}

impl Named for Karana {
    const CONCEPT: &'static str = "karana";

    fn name_in(&self, locale: Locale) -> Option<&'static str> {
        en_ru(&KARANA_NAMES[*self as usize], locale)
    }
}

/// Result of karana lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KaranaInfo {
    pub karana: Karana,
    /// 1-based position within the synodic month, 1..=60.
    pub position: u8,
}

/// Karana from Moon-minus-Sun elongation in degrees.
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaInfo {
    let elong = normalize_360(elongation_deg);
    let position = ((elong / KARANA_SEGMENT_DEG).floor() as u8).min(59) + 1;
    KaranaInfo {
        karana: Karana::at_position(position),
        position,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_endpoints() {
        assert_eq!(Karana::at_position(1), Karana::Kimstughna);
        assert_eq!(Karana::at_position(58), Karana::Shakuni);
        assert_eq!(Karana::at_position(59), Karana::Chatushpada);
        assert_eq!(Karana::at_position(60), Karana::Naga);
    }

    #[test]
    fn movable_cycle() {
        assert_eq!(Karana::at_position(2), Karana::Bava);
        assert_eq!(Karana::at_position(8), Karana::Vishti);
        assert_eq!(Karana::at_position(9), Karana::Bava);
        assert_eq!(Karana::at_position(57), Karana::Vishti);
        for p in 2..=57u8 {
            assert_eq!(
                Karana::at_position(p),
                MOVABLE_KARANAS[((p - 2) % 7) as usize]
            );
        }
    }

    #[test]
    fn each_movable_occurs_eight_times() {
        for k in MOVABLE_KARANAS {
            let n = KARANA_SEQUENCE.iter().filter(|&&x| x == k).count();
            assert_eq!(n, 8, "{k:?}");
        }
    }

    #[test]
    fn from_elongation() {
        assert_eq!(karana_from_elongation(0.0).position, 1);
        assert_eq!(karana_from_elongation(6.0).position, 2);
        assert_eq!(karana_from_elongation(359.9).karana, Karana::Naga);
    }

    #[test]
    #[should_panic(expected = "karana position out of range")]
    fn position_zero_panics() {
        Karana::at_position(0);
    }
}
