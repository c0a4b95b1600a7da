//! String inputs: dates, clock times, language tags.

use chrono::{NaiveDateTime, NaiveTime};

use sandhi_locale::Locale;
use sandhi_time::{CalendarDate, TimeError};

use crate::error::SandhiError;

/// Parse `YYYY-MM-DD` (a trailing `T...` time part is ignored).
pub fn parse_date(s: &str) -> Result<CalendarDate, SandhiError> {
    Ok(s.parse::<CalendarDate>()?)
}

/// Parse an optional date; `None` and blank strings mean "absent".
pub fn parse_optional_date(s: Option<&str>) -> Result<Option<CalendarDate>, SandhiError> {
    match s.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_date(s).map(Some),
    }
}

/// Parse a 24-hour `HH:MM` or `HH:MM:SS` clock time.
pub fn parse_time(s: &str) -> Result<NaiveTime, SandhiError> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|e| SandhiError::InvalidDateInput(TimeError::Parse(format!("time '{s}': {e}"))))
}

/// `date` at clock time `time`.
pub fn at_time(date: CalendarDate, time: &str) -> Result<NaiveDateTime, SandhiError> {
    Ok(date.naive().and_time(parse_time(time)?))
}

/// Parse a language tag ("en", "ru-RU", ...).
pub fn parse_locale(tag: &str) -> Result<Locale, SandhiError> {
    Ok(Locale::from_tag(tag)?)
}
