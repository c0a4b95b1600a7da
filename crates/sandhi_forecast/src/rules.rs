//! Scoring rule table.
//!
//! Rules are applied in a fixed order (tithi, yoga, tone, numerology) and
//! notes are collected in that order; the summary depends on it.

use serde::Serialize;

use sandhi_numerology::is_master;
use sandhi_panchanga::{Tithi, Yoga};

use crate::note::Note;
use crate::status::Status;

/// Display ids of rikta tithis plus the new moon.
pub const CRITICAL_TITHI_IDS: [u8; 4] = [4, 9, 14, 30];

/// Display ids that add a point.
pub const FAVORABLE_TITHI_IDS: [u8; 7] = [2, 3, 5, 7, 10, 11, 13];

/// What the rules look at for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayFactors {
    pub tithi: Tithi,
    pub yoga: Yoga,
    /// Ritual tone 1..=13; `None` on the leap day.
    pub tone: Option<u8>,
    /// Daily numerology value; `None` without a birth date.
    pub vibration: Option<u32>,
}

/// Score, status and notes produced by [`score_day`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scoring {
    pub score: i32,
    pub status: Status,
    pub notes: Vec<Note>,
}

/// Apply the rule table to one day.
pub fn score_day(factors: &DayFactors) -> Scoring {
    let mut score = 0;
    let mut notes = Vec::new();

    let id = factors.tithi.id();
    if CRITICAL_TITHI_IDS.contains(&id) {
        score -= 2;
        notes.push(Note::CriticalTithi {
            tithi: factors.tithi,
        });
    } else if FAVORABLE_TITHI_IDS.contains(&id) {
        score += 1;
    }

    if factors.yoga.is_inauspicious() {
        score -= 1;
        notes.push(Note::InauspiciousYoga { yoga: factors.yoga });
    }

    match factors.tone {
        Some(13) => {
            score += 2;
            notes.push(Note::CosmicTone);
        }
        Some(1) => {
            score += 2;
            notes.push(Note::MagneticTone);
        }
        Some(7) => score += 1,
        _ => {}
    }

    if let Some(v) = factors.vibration {
        if is_master(v) {
            score += 1;
            notes.push(Note::MasterNumber { number: v });
        }
        match v {
            9 => notes.push(Note::CleansingDay),
            1 => notes.push(Note::StartDay),
            _ => {}
        }
    }

    Scoring {
        score,
        status: Status::from_score(score),
        notes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factors(tithi: u8, yoga: Yoga, tone: Option<u8>, vibration: Option<u32>) -> DayFactors {
        DayFactors {
            tithi: Tithi::from_number(tithi),
            yoga,
            tone,
            vibration,
        }
    }

    #[test]
    fn quiet_day_is_neutral() {
        let s = score_day(&factors(8, Yoga::Siddhi, Some(4), Some(6)));
        assert_eq!(s.score, 0);
        assert_eq!(s.status, Status::Neutral);
        assert!(s.notes.is_empty());
    }

    #[test]
    fn waning_rikta_uses_display_id() {
        // tithi 19 displays as 4
        let s = score_day(&factors(19, Yoga::Siddhi, Some(4), None));
        assert_eq!(s.score, -2);
        assert_eq!(s.status, Status::Critical);
        assert_eq!(
            s.notes,
            vec![Note::CriticalTithi {
                tithi: Tithi::from_number(19)
            }]
        );
    }

    #[test]
    fn new_moon_is_critical_but_full_moon_is_not() {
        assert_eq!(score_day(&factors(30, Yoga::Siddhi, None, None)).score, -2);
        assert_eq!(score_day(&factors(15, Yoga::Siddhi, None, None)).score, 0);
    }

    #[test]
    fn favorable_tithi_adds_without_note() {
        let s = score_day(&factors(17, Yoga::Siddhi, None, None));
        assert_eq!(s.score, 1);
        assert_eq!(s.status, Status::Good);
        assert!(s.notes.is_empty());
    }

    #[test]
    fn tone_rules() {
        let s = score_day(&factors(8, Yoga::Siddhi, Some(13), None));
        assert_eq!((s.score, s.notes.as_slice()), (2, &[Note::CosmicTone][..]));
        let s = score_day(&factors(8, Yoga::Siddhi, Some(1), None));
        assert_eq!((s.score, s.notes.as_slice()), (2, &[Note::MagneticTone][..]));
        let s = score_day(&factors(8, Yoga::Siddhi, Some(7), None));
        assert_eq!((s.score, s.notes.len()), (1, 0));
    }

    #[test]
    fn numerology_notes() {
        let s = score_day(&factors(8, Yoga::Siddhi, None, Some(33)));
        assert_eq!(s.score, 1);
        assert_eq!(s.notes, vec![Note::MasterNumber { number: 33 }]);
        let s = score_day(&factors(8, Yoga::Siddhi, None, Some(9)));
        assert_eq!((s.score, s.notes.as_slice()), (0, &[Note::CleansingDay][..]));
        let s = score_day(&factors(8, Yoga::Siddhi, None, Some(1)));
        assert_eq!(s.notes, vec![Note::StartDay]);
    }

    #[test]
    fn excellent_needs_three() {
        // favorable tithi + tone 13 = 3
        let s = score_day(&factors(2, Yoga::Siddhi, Some(13), Some(5)));
        assert_eq!(s.score, 3);
        assert_eq!(s.status, Status::Excellent);
    }

    #[test]
    fn notes_keep_rule_order() {
        let s = score_day(&factors(14, Yoga::Vajra, Some(1), Some(1)));
        assert_eq!(s.score, -1);
        assert_eq!(s.status, Status::Caution);
        assert_eq!(
            s.notes,
            vec![
                Note::CriticalTithi {
                    tithi: Tithi::from_number(14)
                },
                Note::InauspiciousYoga { yoga: Yoga::Vajra },
                Note::MagneticTone,
                Note::StartDay,
            ]
        );
    }
}
