//! Five-level day status derived from the integer score.

use serde::Serialize;

use sandhi_locale::{Locale, Named};

/// Day status, worst first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Status {
    Critical,
    Caution,
    Neutral,
    Good,
    Excellent,
}

/// All statuses, worst first.
pub const ALL_STATUSES: [Status; 5] = [
    Status::Critical,
    Status::Caution,
    Status::Neutral,
    Status::Good,
    Status::Excellent,
];

// en, ru, he
#[rustfmt::skip]
const STATUS_NAMES: [[&str; 3]; 5] = [
    ["Critical", "Критический", "קריטי"],
    ["Caution", "Осторожно", "זהירות"],
    ["Neutral", "Нейтральный", "ניטרלי"],
    ["Good", "Хороший", "טוב"],
    ["Excellent", "Отличный", "מצוין"],
];

impl Status {
    /// Status for a final score. Thresholds are checked in order:
    /// `<= -2` Critical, `< 0` Caution, `>= 3` Excellent, `> 0` Good,
    /// otherwise Neutral.
    pub const fn from_score(score: i32) -> Self {
        if score <= -2 {
            Self::Critical
        } else if score < 0 {
            Self::Caution
        } else if score >= 3 {
            Self::Excellent
        } else if score > 0 {
            Self::Good
        } else {
            Self::Neutral
        }
    }

    /// Stable key ("Critical", ...), independent of locale.
    pub const fn key(self) -> &'static str {
        STATUS_NAMES[self as usize][0]
    }
}

impl Named for Status {
    const CONCEPT: &'static str = "status";

    fn name_in(&self, locale: Locale) -> Option<&'static str> {
        let row = &STATUS_NAMES[*self as usize];
        Some(match locale {
            Locale::En => row[0],
            Locale::Ru => row[1],
            Locale::He => row[2],
        })
    }
}
