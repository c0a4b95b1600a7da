//! Daily forecasts built from the numerology, ritual-calendar and
//! lunisolar engines.
//!
//! [`ForecastEngine::analyze_day`] runs the three engines independently for
//! one date, applies the rule table in [`rules`] and renders notes in the
//! engine's locale. Rolling forecasts are a loop over single days with no
//! cross-day state.

pub mod engine;
pub mod error;
pub mod note;
pub mod record;
pub mod rules;
pub mod status;

pub use engine::{DEFAULT_FORECAST_DAYS, ForecastConfig, ForecastEngine};
pub use error::ForecastError;
pub use note::{Note, RenderedText, neutral_summary};
pub use record::ForecastRecord;
pub use rules::{CRITICAL_TITHI_IDS, DayFactors, FAVORABLE_TITHI_IDS, Scoring, score_day};
pub use status::{ALL_STATUSES, Status};
