//! Unified error type for the convenience wrapper.

use std::error::Error;
use std::fmt::{Display, Formatter};

use sandhi_config::ConfigError;
use sandhi_forecast::ForecastError;
use sandhi_locale::LocaleError;
use sandhi_panchanga::PanchangaError;
use sandhi_time::TimeError;

/// Errors surfaced by `sandhi_rs`.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SandhiError {
    /// Malformed or impossible date or time string.
    InvalidDateInput(TimeError),
    /// Unknown language tag or strict lookup miss.
    Locale(LocaleError),
    Config(ConfigError),
    Forecast(ForecastError),
    Panchanga(PanchangaError),
}

impl Display for SandhiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateInput(e) => write!(f, "invalid date input: {e}"),
            Self::Locale(e) => write!(f, "{e}"),
            Self::Config(e) => write!(f, "{e}"),
            Self::Forecast(e) => write!(f, "{e}"),
            Self::Panchanga(e) => write!(f, "{e}"),
        }
    }
}

impl Error for SandhiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDateInput(e) => Some(e),
            Self::Locale(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Forecast(e) => Some(e),
            Self::Panchanga(e) => Some(e),
        }
    }
}

impl From<TimeError> for SandhiError {
    fn from(e: TimeError) -> Self {
        Self::InvalidDateInput(e)
    }
}

impl From<LocaleError> for SandhiError {
    fn from(e: LocaleError) -> Self {
        Self::Locale(e)
    }
}

impl From<ConfigError> for SandhiError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<ForecastError> for SandhiError {
    fn from(e: ForecastError) -> Self {
        Self::Forecast(e)
    }
}

impl From<PanchangaError> for SandhiError {
    fn from(e: PanchangaError) -> Self {
        Self::Panchanga(e)
    }
}
