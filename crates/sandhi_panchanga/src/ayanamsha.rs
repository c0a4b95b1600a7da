//! Linear precession (ayanamsha) model.
//!
//! The sidereal offset is a value at J2000.0 plus a constant yearly rate.
//! Defaults approximate Lahiri: 23.85 deg at J2000.0, 0.01397 deg/year
//! (about 50.3 arcsec/year).

use serde::{Deserialize, Serialize};

use crate::error::PanchangaError;
use crate::util::normalize_360;

/// Days per Julian year.
pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

/// Linear-in-time ayanamsha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearAyanamsha {
    /// Ayanamsha at J2000.0, degrees.
    pub epoch_deg: f64,
    /// Drift in degrees per Julian year.
    pub rate_deg_per_year: f64,
}

impl LinearAyanamsha {
    /// Lahiri-like defaults.
    pub const LAHIRI: Self = Self {
        epoch_deg: 23.85,
        rate_deg_per_year: 0.01397,
    };

    pub fn new(epoch_deg: f64, rate_deg_per_year: f64) -> Result<Self, PanchangaError> {
        if !epoch_deg.is_finite() || !rate_deg_per_year.is_finite() {
            return Err(PanchangaError::InvalidConfig("ayanamsha must be finite"));
        }
        Ok(Self {
            epoch_deg,
            rate_deg_per_year,
        })
    }

    /// Ayanamsha in degrees at `days` since J2000.0.
    pub fn at(&self, days_since_j2000: f64) -> f64 {
        self.epoch_deg + (days_since_j2000 / DAYS_PER_JULIAN_YEAR) * self.rate_deg_per_year
    }

    /// Tropical → sidereal longitude, normalized to [0, 360).
    pub fn to_sidereal(&self, tropical_deg: f64, days_since_j2000: f64) -> f64 {
        normalize_360(tropical_deg - self.at(days_since_j2000))
    }
}

impl Default for LinearAyanamsha {
    fn default() -> Self {
        Self::LAHIRI
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_value() {
        assert!((LinearAyanamsha::LAHIRI.at(0.0) - 23.85).abs() < 1e-12);
    }

    #[test]
    fn one_century_drift() {
        let a = LinearAyanamsha::LAHIRI.at(36_525.0);
        assert!((a - (23.85 + 1.397)).abs() < 1e-9, "got {a}");
    }

    #[test]
    fn sidereal_wraps_below_zero() {
        let s = LinearAyanamsha::LAHIRI.to_sidereal(10.0, 0.0);
        assert!((s - 346.15).abs() < 1e-9, "got {s}");
    }

    #[test]
    fn rejects_nan() {
        assert!(LinearAyanamsha::new(f64::NAN, 0.0).is_err());
        assert!(LinearAyanamsha::new(24.0, 0.014).is_ok());
    }
}
