//! Error types for ritual-calendar configuration.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from building a ritual-calendar configuration.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TzolkinError {
    /// Anchor kin outside 1..=260.
    InvalidKin(u16),
    /// Anchor date or moon-year start rejected.
    InvalidConfig(&'static str),
}

impl Display for TzolkinError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidKin(n) => write!(f, "kin {n} outside 1..=260"),
            Self::InvalidConfig(msg) => write!(f, "invalid ritual calendar config: {msg}"),
        }
    }
}

impl Error for TzolkinError {}
