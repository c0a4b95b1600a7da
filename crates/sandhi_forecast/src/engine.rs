//! Forecast engine: runs the three calendars for a date and scores it.

use rayon::prelude::*;

use sandhi_locale::Locale;
use sandhi_numerology::{daily_vibration, day_meaning};
use sandhi_panchanga::{PanchangaConfig, panchanga};
use sandhi_time::CalendarDate;
use sandhi_tzolkin::{TzolkinConfig, ritual_day};

use crate::error::ForecastError;
use crate::note::neutral_summary;
use crate::record::ForecastRecord;
use crate::rules::{DayFactors, score_day};

/// Default length of a rolling forecast, days.
pub const DEFAULT_FORECAST_DAYS: u32 = 30;

/// Notes joined into the summary.
const SUMMARY_NOTES: usize = 2;

/// Forecast settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastConfig {
    /// Days produced by [`ForecastEngine::monthly_forecast`].
    pub days: u32,
}

impl ForecastConfig {
    pub fn validate(&self) -> Result<(), ForecastError> {
        if self.days == 0 {
            return Err(ForecastError::InvalidConfig(
                "days must be greater than zero",
            ));
        }
        Ok(())
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_FORECAST_DAYS,
        }
    }
}

/// Forecast engine.
///
/// Holds only configuration, so it is `Send + Sync` and can be shared by
/// reference across threads. Every record is a pure function of the date,
/// the birth date and the configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastEngine {
    config: ForecastConfig,
    tzolkin: TzolkinConfig,
    panchanga: PanchangaConfig,
    locale: Locale,
}

impl ForecastEngine {
    pub fn new(
        config: ForecastConfig,
        tzolkin: TzolkinConfig,
        panchanga: PanchangaConfig,
        locale: Locale,
    ) -> Result<Self, ForecastError> {
        config.validate()?;
        Ok(Self {
            config,
            tzolkin,
            panchanga,
            locale,
        })
    }

    /// Same engine rendering text in another locale.
    pub fn with_locale(self, locale: Locale) -> Self {
        Self { locale, ..self }
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    pub fn tzolkin_config(&self) -> &TzolkinConfig {
        &self.tzolkin
    }

    pub fn panchanga_config(&self) -> &PanchangaConfig {
        &self.panchanga
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Analyse one day. Without a birth date the numerology rules and the
    /// meaning are skipped.
    pub fn analyze_day(&self, date: CalendarDate, birth: Option<CalendarDate>) -> ForecastRecord {
        let ritual = ritual_day(date, &self.tzolkin);
        let lunisolar = panchanga(date, &self.panchanga);
        let numerology = birth.map(|b| daily_vibration(b, date));

        let scoring = score_day(&DayFactors {
            tithi: lunisolar.tithi.tithi,
            yoga: lunisolar.yoga.yoga,
            tone: ritual.tone_number(),
            vibration: numerology,
        });

        let mut locale_fallback = false;
        let notes: Vec<String> = scoring
            .notes
            .iter()
            .map(|n| {
                let r = n.render(self.locale);
                locale_fallback |= r.fallback;
                r.text
            })
            .collect();

        let summary = if notes.is_empty() {
            let s = neutral_summary(self.locale);
            locale_fallback |= s.is_fallback();
            s.text.to_string()
        } else {
            notes[..notes.len().min(SUMMARY_NOTES)].join(" ")
        };

        let meaning = numerology.and_then(|v| day_meaning(v, self.locale));
        if let Some(m) = meaning {
            locale_fallback |= m.is_fallback();
        }

        log::debug!(
            "{date}: score {} ({:?}), {} notes",
            scoring.score,
            scoring.status,
            notes.len()
        );

        ForecastRecord {
            date,
            status: scoring.status,
            score: scoring.score,
            notes,
            triggers: scoring.notes,
            summary,
            ritual,
            lunisolar,
            numerology,
            meaning,
            locale: self.locale,
            locale_fallback,
        }
    }

    /// Forecast for the configured number of days from `start`.
    pub fn monthly_forecast(
        &self,
        start: CalendarDate,
        birth: Option<CalendarDate>,
    ) -> Result<Vec<ForecastRecord>, ForecastError> {
        self.forecast_range(start, birth, self.config.days)
    }

    /// One record per consecutive day, `days` days from `start`.
    pub fn forecast_range(
        &self,
        start: CalendarDate,
        birth: Option<CalendarDate>,
        days: u32,
    ) -> Result<Vec<ForecastRecord>, ForecastError> {
        Ok(day_range(start, days)?
            .into_iter()
            .map(|date| self.analyze_day(date, birth))
            .collect())
    }

    /// [`forecast_range`](Self::forecast_range) evaluated on the rayon
    /// pool. Records come back in date order.
    pub fn forecast_range_parallel(
        &self,
        start: CalendarDate,
        birth: Option<CalendarDate>,
        days: u32,
    ) -> Result<Vec<ForecastRecord>, ForecastError> {
        Ok(day_range(start, days)?
            .par_iter()
            .map(|&date| self.analyze_day(date, birth))
            .collect())
    }
}

impl Default for ForecastEngine {
    fn default() -> Self {
        Self {
            config: ForecastConfig::default(),
            tzolkin: TzolkinConfig::default(),
            panchanga: PanchangaConfig::default(),
            locale: Locale::default(),
        }
    }
}

fn day_range(start: CalendarDate, days: u32) -> Result<Vec<CalendarDate>, ForecastError> {
    (0..i64::from(days))
        .map(|i| start.add_days(i).map_err(ForecastError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> CalendarDate {
        CalendarDate::new(y, m, day).unwrap()
    }

    #[test]
    fn rejects_zero_days() {
        let r = ForecastEngine::new(
            ForecastConfig { days: 0 },
            TzolkinConfig::default(),
            PanchangaConfig::default(),
            Locale::En,
        );
        assert!(matches!(r, Err(ForecastError::InvalidConfig(_))));
    }

    #[test]
    fn default_engine_matches_new() {
        let e = ForecastEngine::new(
            ForecastConfig::default(),
            TzolkinConfig::default(),
            PanchangaConfig::default(),
            Locale::En,
        )
        .unwrap();
        assert_eq!(e, ForecastEngine::default());
        assert_eq!(e.config().days, 30);
    }

    #[test]
    fn without_birth_date_numerology_is_skipped() {
        let r = ForecastEngine::default().analyze_day(d(2026, 1, 10), None);
        assert_eq!(r.numerology, None);
        assert_eq!(r.meaning, None);
    }

    #[test]
    fn summary_uses_first_two_notes() {
        let r = ForecastEngine::default().analyze_day(d(2026, 1, 17), Some(d(1985, 7, 15)));
        assert!(r.notes.len() >= 3);
        assert_eq!(r.summary, format!("{} {}", r.notes[0], r.notes[1]));
    }

    #[test]
    fn analyses_first_and_last_representable_dates() {
        let engine = ForecastEngine::default();
        for date in [CalendarDate::MIN, CalendarDate::MAX] {
            let r = engine.analyze_day(date, Some(d(1985, 7, 15)));
            assert_eq!(r.date, date);
            assert!(r.tone().is_some());
            assert!(!r.summary.is_empty());
        }
    }

    #[test]
    fn range_is_consecutive() {
        let recs = ForecastEngine::default()
            .forecast_range(d(2024, 2, 27), None, 5)
            .unwrap();
        let dates: Vec<String> = recs.iter().map(|r| r.date.to_string()).collect();
        assert_eq!(
            dates,
            ["2024-02-27", "2024-02-28", "2024-02-29", "2024-03-01", "2024-03-02"]
        );
        assert!(recs[2].ritual.is_leap_day());
        assert_eq!(recs[2].tone(), None);
    }
}
