//! Convenience wrapper for the sandhi calendar engines.
//!
//! Accepts dates as `YYYY-MM-DD` strings and clock times as `HH:MM`, and
//! returns the engines' plain records.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use sandhi_rs::*;
//!
//! let kin = position("2026-01-10")?.kin();
//! let day = analyze_day("2026-01-10", Some("1985-07-15"), "ru")?;
//! println!("{:?}: {}", day.status, day.summary);
//! ```

pub mod context;
pub mod convenience;
pub mod error;
pub mod input;

pub use context::Sandhi;
pub use convenience::{analyze_day, daily_vibration, monthly_forecast, panchanga, position};
pub use error::SandhiError;
pub use input::{parse_date, parse_locale, parse_optional_date, parse_time};

// Re-export record types so callers need only this crate.
pub use sandhi_config::{ConfigError, SandhiConfig};
pub use sandhi_forecast::{ForecastConfig, ForecastEngine, ForecastRecord, Note, Status};
pub use sandhi_locale::{Locale, Localized, Named};
pub use sandhi_numerology::{NumerologyProfile, day_meaning};
pub use sandhi_panchanga::{
    HoraInfo, Interval, LunisolarDay, Muhurta, Nakshatra, Paksha, PanchangaConfig, Tithi, Vara,
    Yoga,
};
pub use sandhi_time::CalendarDate;
pub use sandhi_tzolkin::{KinInfo, MoonDay, RitualDay, RitualPosition, TzolkinConfig};
