//! Forecast output record.

use serde::Serialize;

use sandhi_locale::{Locale, Localized};
use sandhi_panchanga::LunisolarDay;
use sandhi_time::CalendarDate;
use sandhi_tzolkin::RitualDay;

use crate::note::Note;
use crate::status::Status;

/// One analysed day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastRecord {
    pub date: CalendarDate,
    pub status: Status,
    pub score: i32,
    /// Rendered notes, in rule order.
    pub notes: Vec<String>,
    /// The rule outcomes behind `notes`.
    pub triggers: Vec<Note>,
    /// First two notes joined by a space, or the neutral sentence.
    pub summary: String,
    pub ritual: RitualDay,
    pub lunisolar: LunisolarDay,
    /// Daily numerology value; `None` without a birth date.
    pub numerology: Option<u32>,
    pub meaning: Option<Localized>,
    pub locale: Locale,
    /// True when any rendered text came from the default locale instead
    /// of `locale`.
    pub locale_fallback: bool,
}

impl ForecastRecord {
    /// Tone of the ritual day, if any.
    pub fn tone(&self) -> Option<u8> {
        self.ritual.tone_number()
    }
}
