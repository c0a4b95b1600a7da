//! Configured entry point taking string inputs.

use sandhi_config::SandhiConfig;
use sandhi_forecast::{ForecastEngine, ForecastRecord};
use sandhi_locale::Locale;
use sandhi_numerology::{NumerologyProfile, profile};
use sandhi_panchanga::{HoraInfo, LunisolarDay, Muhurta, SunTimes, hora_at, muhurta, panchanga};
use sandhi_tzolkin::{RitualDay, ritual_day};

use crate::error::SandhiError;
use crate::input::{at_time, parse_date, parse_locale, parse_optional_date};

/// All engines wired from one configuration.
///
/// `Sandhi` is a small `Copy` value; build it once and share it freely.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sandhi {
    engine: ForecastEngine,
}

impl Sandhi {
    /// Engines configured from `config`.
    pub fn new(config: &SandhiConfig) -> Result<Self, SandhiError> {
        Ok(Self {
            engine: config.forecast_engine()?,
        })
    }

    /// Wrap an already configured forecast engine.
    pub fn from_engine(engine: ForecastEngine) -> Self {
        Self { engine }
    }

    /// Same engines rendering text for the language `tag`.
    pub fn with_locale_tag(self, tag: &str) -> Result<Self, SandhiError> {
        Ok(self.with_locale(parse_locale(tag)?))
    }

    pub fn with_locale(self, locale: Locale) -> Self {
        Self {
            engine: self.engine.with_locale(locale),
        }
    }

    pub fn engine(&self) -> &ForecastEngine {
        &self.engine
    }

    pub fn locale(&self) -> Locale {
        self.engine.locale()
    }

    /// Daily numerology value for `birth` on `target`.
    pub fn daily_vibration(&self, birth: &str, target: &str) -> Result<u32, SandhiError> {
        Ok(sandhi_numerology::daily_vibration(
            parse_date(birth)?,
            parse_date(target)?,
        ))
    }

    /// Every personal numerology value for `birth` on `target`.
    pub fn numerology(&self, birth: &str, target: &str) -> Result<NumerologyProfile, SandhiError> {
        Ok(profile(parse_date(birth)?, parse_date(target)?))
    }

    /// Ritual-calendar position of `target`.
    pub fn position(&self, target: &str) -> Result<RitualDay, SandhiError> {
        Ok(ritual_day(parse_date(target)?, self.engine.tzolkin_config()))
    }

    /// Lunisolar descriptor of `target`.
    pub fn panchanga(&self, target: &str) -> Result<LunisolarDay, SandhiError> {
        Ok(panchanga(parse_date(target)?, self.engine.panchanga_config()))
    }

    /// Day divisions for `date` with sunrise and sunset as `HH:MM`.
    pub fn muhurta(&self, date: &str, sunrise: &str, sunset: &str) -> Result<Muhurta, SandhiError> {
        Ok(muhurta(&sun_times(date, sunrise, sunset)?))
    }

    /// Hora at clock time `at` on `date`. Times before sunrise belong to the
    /// previous vedic day.
    pub fn hora(
        &self,
        date: &str,
        sunrise: &str,
        sunset: &str,
        at: &str,
    ) -> Result<HoraInfo, SandhiError> {
        let sun = sun_times(date, sunrise, sunset)?;
        let instant = at_time(parse_date(date)?, at)?;
        Ok(hora_at(instant, &sun)?)
    }

    /// Forecast record for `target`; `birth` may be absent.
    pub fn analyze_day(
        &self,
        target: &str,
        birth: Option<&str>,
    ) -> Result<ForecastRecord, SandhiError> {
        let target = parse_date(target)?;
        let birth = parse_optional_date(birth)?;
        Ok(self.engine.analyze_day(target, birth))
    }

    /// Rolling forecast of the configured length from `start`.
    pub fn monthly_forecast(
        &self,
        start: &str,
        birth: Option<&str>,
    ) -> Result<Vec<ForecastRecord>, SandhiError> {
        let start = parse_date(start)?;
        let birth = parse_optional_date(birth)?;
        Ok(self.engine.monthly_forecast(start, birth)?)
    }

    /// Rolling forecast of `days` days, evaluated in parallel.
    pub fn forecast(
        &self,
        start: &str,
        birth: Option<&str>,
        days: u32,
    ) -> Result<Vec<ForecastRecord>, SandhiError> {
        let start = parse_date(start)?;
        let birth = parse_optional_date(birth)?;
        Ok(self.engine.forecast_range_parallel(start, birth, days)?)
    }
}

fn sun_times(date: &str, sunrise: &str, sunset: &str) -> Result<SunTimes, SandhiError> {
    let date = parse_date(date)?;
    Ok(SunTimes::new(at_time(date, sunrise)?, at_time(date, sunset)?)?)
}
