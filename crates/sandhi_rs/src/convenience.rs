//! Free functions over the default configuration.
//!
//! Each call builds a default [`Sandhi`]; use [`Sandhi::new`] to apply a
//! loaded configuration instead.

use sandhi_forecast::ForecastRecord;
use sandhi_panchanga::LunisolarDay;
use sandhi_tzolkin::RitualDay;

use crate::context::Sandhi;
use crate::error::SandhiError;

/// Daily numerology value for `birth` on `target` (`YYYY-MM-DD`).
pub fn daily_vibration(birth: &str, target: &str) -> Result<u32, SandhiError> {
    Sandhi::default().daily_vibration(birth, target)
}

/// Ritual-calendar position of `target`.
pub fn position(target: &str) -> Result<RitualDay, SandhiError> {
    Sandhi::default().position(target)
}

/// Lunisolar descriptor of `target`.
pub fn panchanga(target: &str) -> Result<LunisolarDay, SandhiError> {
    Sandhi::default().panchanga(target)
}

/// Forecast record for `target` rendered in language `locale_tag`.
pub fn analyze_day(
    target: &str,
    birth: Option<&str>,
    locale_tag: &str,
) -> Result<ForecastRecord, SandhiError> {
    Sandhi::default()
        .with_locale_tag(locale_tag)?
        .analyze_day(target, birth)
}

/// 30-day forecast from `start` rendered in language `locale_tag`.
pub fn monthly_forecast(
    start: &str,
    birth: Option<&str>,
    locale_tag: &str,
) -> Result<Vec<ForecastRecord>, SandhiError> {
    Sandhi::default()
        .with_locale_tag(locale_tag)?
        .monthly_forecast(start, birth)
}
