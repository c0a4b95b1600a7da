//! TOML configuration for the sandhi engines.
//!
//! Every section and key is optional; missing values take the engine
//! defaults. A complete file looks like:
//!
//! ```toml
//! locale = "en"
//!
//! [forecast]
//! days = 30
//!
//! [tzolkin]
//! anchor_date = "2026-01-10"
//! anchor_kin = 32
//! moon_year_start_month = 7
//! moon_year_start_day = 26
//!
//! [panchanga]
//! anchor_hour = 6.0
//! ayanamsha_epoch_deg = 23.85
//! ayanamsha_rate_deg_per_year = 0.01397
//! ```

pub mod error;

use std::path::Path;

use serde::{Deserialize, Serialize};

use sandhi_forecast::{DEFAULT_FORECAST_DAYS, ForecastConfig, ForecastEngine};
use sandhi_locale::Locale;
use sandhi_panchanga::{LinearAyanamsha, PanchangaConfig};
use sandhi_time::CalendarDate;
use sandhi_tzolkin::TzolkinConfig;

pub use error::ConfigError;

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SandhiConfig {
    /// Display language tag.
    pub locale: String,
    pub forecast: ForecastSection,
    pub tzolkin: TzolkinSection,
    pub panchanga: PanchangaSection,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ForecastSection {
    pub days: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TzolkinSection {
    pub anchor_date: CalendarDate,
    pub anchor_kin: u16,
    pub moon_year_start_month: u32,
    pub moon_year_start_day: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PanchangaSection {
    pub anchor_hour: f64,
    pub ayanamsha_epoch_deg: f64,
    pub ayanamsha_rate_deg_per_year: f64,
}

impl Default for SandhiConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default().tag().to_string(),
            forecast: ForecastSection::default(),
            tzolkin: TzolkinSection::default(),
            panchanga: PanchangaSection::default(),
        }
    }
}

impl Default for ForecastSection {
    fn default() -> Self {
        Self {
            days: DEFAULT_FORECAST_DAYS,
        }
    }
}

impl Default for TzolkinSection {
    fn default() -> Self {
        let cfg = TzolkinConfig::default();
        let (month, day) = cfg.year_start();
        Self {
            anchor_date: cfg.anchor_date(),
            anchor_kin: cfg.anchor_kin().number(),
            moon_year_start_month: month,
            moon_year_start_day: day,
        }
    }
}

impl Default for PanchangaSection {
    fn default() -> Self {
        let cfg = PanchangaConfig::default();
        let ayanamsha = cfg.ayanamsha();
        Self {
            anchor_hour: cfg.anchor_hour(),
            ayanamsha_epoch_deg: ayanamsha.epoch_deg,
            ayanamsha_rate_deg_per_year: ayanamsha.rate_deg_per_year,
        }
    }
}

impl SandhiConfig {
    /// Load and validate a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
        let config = Self::from_toml_str(&content)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Check every section by building the engine configs from it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.locale()?;
        self.forecast_config()?;
        self.tzolkin_config()?;
        self.panchanga_config()?;
        Ok(())
    }

    pub fn locale(&self) -> Result<Locale, ConfigError> {
        Ok(Locale::from_tag(&self.locale)?)
    }

    pub fn forecast_config(&self) -> Result<ForecastConfig, ConfigError> {
        let cfg = ForecastConfig {
            days: self.forecast.days,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn tzolkin_config(&self) -> Result<TzolkinConfig, ConfigError> {
        let t = &self.tzolkin;
        Ok(TzolkinConfig::new(
            t.anchor_date,
            t.anchor_kin,
            t.moon_year_start_month,
            t.moon_year_start_day,
        )?)
    }

    pub fn panchanga_config(&self) -> Result<PanchangaConfig, ConfigError> {
        let p = &self.panchanga;
        let ayanamsha = LinearAyanamsha::new(p.ayanamsha_epoch_deg, p.ayanamsha_rate_deg_per_year)?;
        Ok(PanchangaConfig::new(p.anchor_hour, ayanamsha)?)
    }

    /// Forecast engine wired with every section of this configuration.
    pub fn forecast_engine(&self) -> Result<ForecastEngine, ConfigError> {
        Ok(ForecastEngine::new(
            self.forecast_config()?,
            self.tzolkin_config()?,
            self.panchanga_config()?,
            self.locale()?,
        )?)
    }
}
