//! Error types for configuration loading.

use std::error::Error;
use std::fmt::{Display, Formatter};

use sandhi_forecast::ForecastError;
use sandhi_locale::LocaleError;
use sandhi_panchanga::PanchangaError;
use sandhi_tzolkin::TzolkinError;

/// Errors from reading, parsing or validating a configuration.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    /// The file could not be read.
    Io(String),
    /// The file is not valid TOML for this schema.
    Parse(String),
    /// A value is out of range.
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "config read error: {msg}"),
            Self::Parse(msg) => write!(f, "config parse error: {msg}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for ConfigError {}

impl From<TzolkinError> for ConfigError {
    fn from(e: TzolkinError) -> Self {
        Self::Invalid(format!("[tzolkin] {e}"))
    }
}

impl From<PanchangaError> for ConfigError {
    fn from(e: PanchangaError) -> Self {
        Self::Invalid(format!("[panchanga] {e}"))
    }
}

impl From<ForecastError> for ConfigError {
    fn from(e: ForecastError) -> Self {
        Self::Invalid(format!("[forecast] {e}"))
    }
}

impl From<LocaleError> for ConfigError {
    fn from(e: LocaleError) -> Self {
        Self::Invalid(format!("locale: {e}"))
    }
}
