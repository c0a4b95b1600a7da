//! Kin numbers of the 260-day count.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use sandhi_locale::{Locale, Named};

use crate::color::Color;
use crate::seal::Seal;
use crate::tone::Tone;

/// Length of the ritual count.
pub const KIN_COUNT: u16 = 260;

/// Position 1..=260 in the ritual count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Kin(u16);

impl Kin {
    /// Kin for a number in 1..=260.
    pub const fn new(number: u16) -> Option<Self> {
        if number >= 1 && number <= KIN_COUNT {
            Some(Self(number))
        } else {
            None
        }
    }

    pub const fn number(self) -> u16 {
        self.0
    }

    /// Kin `days` positions away, wrapping in both directions.
    pub fn advance(self, days: i64) -> Self {
        let zero_based = (i64::from(self.0) - 1 + days).rem_euclid(i64::from(KIN_COUNT));
        Self(zero_based as u16 + 1)
    }

    pub fn seal(self) -> Seal {
        Seal::from_index(((self.0 - 1) % 20) as u8)
    }

    pub fn tone(self) -> Tone {
        Tone::from_number(((self.0 - 1) % 13) as u8 + 1)
    }

    pub fn color(self) -> Color {
        self.seal().color()
    }

    /// Seal, tone and colour of this kin.
    pub fn info(self) -> KinInfo {
        KinInfo {
            kin: self,
            seal: self.seal(),
            tone: self.tone(),
            color: self.color(),
        }
    }
}

impl Display for Kin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Kin {}", self.0)
    }
}

/// A kin with its derived seal, tone and colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KinInfo {
    pub kin: Kin,
    pub seal: Seal,
    pub tone: Tone,
    pub color: Color,
}

impl KinInfo {
    /// "Tone Seal", e.g. "Rhythmic Human".
    pub fn title(&self, locale: Locale) -> String {
        format!("{} {}", self.tone.name(locale), self.seal.name(locale))
    }

    /// "Color Tone Seal", e.g. "Yellow Rhythmic Human".
    pub fn full_title(&self, locale: Locale) -> String {
        format!("{} {}", self.color.name(locale), self.title(locale))
    }
}
