//! Simplified lunisolar day descriptors.
//!
//! Provides:
//! - low-precision Sun and Moon longitudes with a linear ayanamsha
//! - tithi, nakshatra, yoga, vara and karana for a civil date
//! - muhurta day divisions and planetary horas from caller-supplied
//!   sunrise and sunset

pub mod ayanamsha;
pub mod error;
pub mod graha;
pub mod karana;
pub mod lunisolar;
pub mod muhurta;
pub mod nakshatra;
pub mod orbit;
pub mod tithi;
pub mod util;
pub mod vara;
pub mod yoga;

pub use ayanamsha::LinearAyanamsha;
pub use error::PanchangaError;
pub use graha::{ALL_GRAHAS, Graha};
pub use karana::{KARANA_SEQUENCE, Karana, KaranaInfo, karana_from_elongation};
pub use lunisolar::{Longitudes, LunisolarDay, PanchangaConfig, longitudes, panchanga};
pub use muhurta::{HORA_COUNT, HoraInfo, Interval, Muhurta, SunTimes, hora_at, hora_lord, muhurta};
pub use nakshatra::{ALL_NAKSHATRAS, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, nakshatra_from_longitude};
pub use tithi::{Paksha, Tithi, TithiGroup, TithiInfo, tithi_from_elongation};
pub use util::normalize_360;
pub use vara::{ALL_VARAS, Vara};
pub use yoga::{ALL_YOGAS, Yoga, YogaInfo, yoga_from_sum};
