//! Error types for forecast generation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use sandhi_time::TimeError;

/// Errors from forecast configuration or range generation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ForecastError {
    /// Forecast settings rejected.
    InvalidConfig(&'static str),
    /// The requested range left the representable calendar.
    Time(TimeError),
}

impl Display for ForecastError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid forecast config: {msg}"),
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for ForecastError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::InvalidConfig(_) => None,
        }
    }
}

impl From<TimeError> for ForecastError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
