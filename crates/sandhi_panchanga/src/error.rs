//! Error types for lunisolar and muhurta calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from lunisolar configuration and muhurta calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PanchangaError {
    /// Configuration value out of range.
    InvalidConfig(&'static str),
    /// Sunrise/sunset pair unusable (sunset not after sunrise, or a day
    /// longer than 24 hours).
    InvalidSunTimes(&'static str),
    /// Instant more than a day away from the given sunrise.
    InstantOutsideDay,
}

impl Display for PanchangaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid panchanga config: {msg}"),
            Self::InvalidSunTimes(msg) => write!(f, "invalid sun times: {msg}"),
            Self::InstantOutsideDay => write!(f, "instant lies outside the vedic day"),
        }
    }
}

impl Error for PanchangaError {}
