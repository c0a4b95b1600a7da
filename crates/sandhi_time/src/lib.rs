//! Civil calendar dates and day arithmetic.
//!
//! This crate provides:
//! - `CalendarDate`, a proleptic Gregorian date with `YYYY-MM-DD` parsing
//! - Signed day offsets and leap-day-free offsets between dates
//! - Day counts relative to the J2000.0 epoch for the orbital models

pub mod date;
pub mod error;
pub mod leap;

pub use date::{CalendarDate, J2000_DAYS_FROM_CE};
pub use error::TimeError;
pub use leap::{is_leap_year, leap_days_between, leap_free_offset};
