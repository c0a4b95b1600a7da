//! Error types for calendar date handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from date parsing, construction, or arithmetic.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Date string did not match `YYYY-MM-DD`.
    Parse(String),
    /// Year/month/day triple does not name a proleptic Gregorian date.
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Day arithmetic left the representable calendar range.
    OutOfRange,
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "date parse error: {msg}"),
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid calendar date: {year:04}-{month:02}-{day:02}")
            }
            Self::OutOfRange => write!(f, "date outside representable range"),
        }
    }
}

impl Error for TimeError {}
