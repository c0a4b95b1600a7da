//! 260-day ritual count (Tzolkin) and 13-moon calendar.
//!
//! Provides:
//! - 20 seals, 13 tones and their colours, with en/ru display tables
//! - kin lookup anchored to a reference date, skipping February 29
//! - 13-moon year position with the Day Out of Time and leap-day sentinels
//! - year bearer (kin of the moon year's first day)

pub mod calendar;
pub mod color;
pub mod error;
pub mod kin;
pub mod moon;
pub mod ritual_types;
pub mod seal;
pub mod tone;

pub use calendar::{TzolkinConfig, kin_for_date, moon_day, ritual_day, year_bearer};
pub use color::{ALL_CYCLE_COLORS, Color};
pub use error::TzolkinError;
pub use kin::{KIN_COUNT, Kin, KinInfo};
pub use moon::{DAYS_PER_MOON, MOONS_PER_YEAR, Moon};
pub use ritual_types::{MoonDay, RitualDay, RitualPosition};
pub use seal::{ALL_SEALS, Seal};
pub use tone::{ALL_TONES, Tone};
