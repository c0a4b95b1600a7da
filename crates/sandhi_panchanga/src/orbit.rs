//! Low-precision tropical Sun and Moon longitudes.
//!
//! Mean elements linear in days since J2000.0 plus a handful of periodic
//! terms. Accuracy is around a degree for the Moon and a few hundredths of
//! a degree for the Sun, enough to bucket 12 deg tithis and 13 deg 20'
//! nakshatras away from their boundaries. Not an ephemeris.

use crate::util::{normalize_360, sin_deg};

/// Sun mean anomaly, degrees (unnormalized).
pub fn sun_mean_anomaly(d: f64) -> f64 {
    357.529 + 0.985_600_28 * d
}

/// Sun mean longitude, degrees (unnormalized).
pub fn sun_mean_longitude(d: f64) -> f64 {
    280.459 + 0.985_647_36 * d
}

/// Apparent tropical longitude of the Sun, [0, 360).
///
/// Mean longitude plus the two-term equation of centre.
pub fn sun_longitude(d: f64) -> f64 {
    let m = sun_mean_anomaly(d);
    let c = 1.915 * sin_deg(m) + 0.020 * sin_deg(2.0 * m);
    normalize_360(sun_mean_longitude(d) + c)
}

/// Tropical longitude of the Moon, [0, 360).
///
/// Terms: principal elliptic (6.289), evection (1.274), variation (0.658)
/// and annual equation (0.185).
pub fn moon_longitude(d: f64) -> f64 {
    let l = 218.316 + 13.176_396 * d;
    let m = 134.963 + 13.064_993 * d;
    let elong = 297.850 + 12.190_749 * d;
    let sun_m = sun_mean_anomaly(d);
    normalize_360(
        l + 6.289 * sin_deg(m) - 1.274 * sin_deg(m - 2.0 * elong) + 0.658 * sin_deg(2.0 * elong)
            - 0.185 * sin_deg(sun_m),
    )
}
