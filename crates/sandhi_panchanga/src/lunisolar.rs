//! Five-limb lunisolar day descriptor for a civil date.
//!
//! The date is evaluated at a fixed proxy hour standing in for local
//! sunrise (06:00 by default), so the same date always yields the same
//! descriptor regardless of the caller's timezone.

use serde::Serialize;

use sandhi_time::CalendarDate;

use crate::ayanamsha::LinearAyanamsha;
use crate::error::PanchangaError;
use crate::karana::{KaranaInfo, karana_from_elongation};
use crate::nakshatra::{NakshatraInfo, nakshatra_from_longitude};
use crate::orbit::{moon_longitude, sun_longitude};
use crate::tithi::{TithiInfo, tithi_from_elongation};
use crate::util::normalize_360;
use crate::vara::Vara;
use crate::yoga::{YogaInfo, yoga_from_sum};

/// Evaluation settings for [`panchanga`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanchangaConfig {
    anchor_hour: f64,
    ayanamsha: LinearAyanamsha,
}

impl PanchangaConfig {
    pub fn new(anchor_hour: f64, ayanamsha: LinearAyanamsha) -> Result<Self, PanchangaError> {
        if !(0.0..24.0).contains(&anchor_hour) {
            return Err(PanchangaError::InvalidConfig("anchor hour outside [0, 24)"));
        }
        Ok(Self {
            anchor_hour,
            ayanamsha,
        })
    }

    /// Hour of day (on the civil date) used for evaluation.
    pub fn anchor_hour(&self) -> f64 {
        self.anchor_hour
    }

    pub fn ayanamsha(&self) -> LinearAyanamsha {
        self.ayanamsha
    }
}

impl Default for PanchangaConfig {
    fn default() -> Self {
        Self {
            anchor_hour: 6.0,
            ayanamsha: LinearAyanamsha::LAHIRI,
        }
    }
}

/// Intermediate longitudes, degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Longitudes {
    pub days_since_j2000: f64,
    pub ayanamsha: f64,
    pub sun_tropical: f64,
    pub moon_tropical: f64,
    pub sun_sidereal: f64,
    pub moon_sidereal: f64,
}

impl Longitudes {
    /// Moon minus Sun, [0, 360).
    pub fn elongation(&self) -> f64 {
        normalize_360(self.moon_sidereal - self.sun_sidereal)
    }

    /// Moon plus Sun, [0, 360).
    pub fn sum(&self) -> f64 {
        normalize_360(self.moon_sidereal + self.sun_sidereal)
    }
}

/// Sun and Moon positions for `date` at the configured hour.
pub fn longitudes(date: CalendarDate, config: &PanchangaConfig) -> Longitudes {
    let d = date.days_since_j2000(config.anchor_hour);
    let sun_tropical = sun_longitude(d);
    let moon_tropical = moon_longitude(d);
    Longitudes {
        days_since_j2000: d,
        ayanamsha: config.ayanamsha.at(d),
        sun_tropical,
        moon_tropical,
        sun_sidereal: config.ayanamsha.to_sidereal(sun_tropical, d),
        moon_sidereal: config.ayanamsha.to_sidereal(moon_tropical, d),
    }
}

/// The five day descriptors plus the longitudes they came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LunisolarDay {
    pub date: CalendarDate,
    pub tithi: TithiInfo,
    pub nakshatra: NakshatraInfo,
    pub yoga: YogaInfo,
    pub vara: Vara,
    pub karana: KaranaInfo,
    pub longitudes: Longitudes,
}

/// Lunisolar descriptor of `date`.
pub fn panchanga(date: CalendarDate, config: &PanchangaConfig) -> LunisolarDay {
    let lon = longitudes(date, config);
    let elongation = lon.elongation();
    let day = LunisolarDay {
        date,
        tithi: tithi_from_elongation(elongation),
        nakshatra: nakshatra_from_longitude(lon.moon_sidereal),
        yoga: yoga_from_sum(lon.sum()),
        vara: Vara::from_weekday(date.weekday_index()),
        karana: karana_from_elongation(elongation),
        longitudes: lon,
    };
    log::trace!(
        "{date}: tithi {} nakshatra {} yoga {} karana {}",
        day.tithi.tithi.number(),
        day.nakshatra.number,
        day.yoga.number,
        day.karana.position
    );
    day
}
