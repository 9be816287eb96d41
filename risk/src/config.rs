//! Settings for the historical analytics that accompany option pricing.
//!
//! ```yaml
//! lookback_days: 730
//! volatility_window: 60
//! periods_per_year: 252
//! short_average_window: 50
//! long_average_window: 200
//! default_risk_free_rate: 0.05
//! ```
//!
//! Every field is optional and falls back to the values above.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config YAML: {0}")]
    Parse(#[from] serde_yaml_bw::Error),

    #[error("config validation failed: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Calendar days of daily history requested from the market-data provider.
    #[serde(default = "default_lookback_days")]
    pub lookback_days: u32,
    /// Number of log returns per rolling volatility estimate.
    #[serde(default = "default_volatility_window")]
    pub volatility_window: usize,
    /// Trading periods used to annualize volatility.
    #[serde(default = "default_periods_per_year")]
    pub periods_per_year: f64,
    #[serde(default = "default_short_average_window")]
    pub short_average_window: usize,
    #[serde(default = "default_long_average_window")]
    pub long_average_window: usize,
    /// Annualized rate suggested to callers that have no rate of their own.
    #[serde(default = "default_risk_free_rate")]
    pub default_risk_free_rate: f64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            lookback_days: default_lookback_days(),
            volatility_window: default_volatility_window(),
            periods_per_year: default_periods_per_year(),
            short_average_window: default_short_average_window(),
            long_average_window: default_long_average_window(),
            default_risk_free_rate: default_risk_free_rate(),
        }
    }
}

const fn default_lookback_days() -> u32 {
    730
}

const fn default_volatility_window() -> usize {
    60
}

const fn default_periods_per_year() -> f64 {
    252.0
}

const fn default_short_average_window() -> usize {
    50
}

const fn default_long_average_window() -> usize {
    200
}

const fn default_risk_free_rate() -> f64 {
    0.05
}

impl AnalyticsConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml_bw::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_yaml_str(&contents)?;
        tracing::debug!(path = %path.display(), ?config, "loaded analytics config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lookback_days == 0 {
            return Err(ConfigError::Validation("lookback_days must be positive".into()));
        }
        if self.volatility_window < 2 {
            return Err(ConfigError::Validation(
                "volatility_window needs at least 2 returns".into(),
            ));
        }
        if !(self.periods_per_year > 0.0) {
            return Err(ConfigError::Validation("periods_per_year must be positive".into()));
        }
        if self.short_average_window == 0 {
            return Err(ConfigError::Validation(
                "short_average_window must be positive".into(),
            ));
        }
        if self.short_average_window >= self.long_average_window {
            return Err(ConfigError::Validation(format!(
                "short_average_window ({}) must be below long_average_window ({})",
                self.short_average_window, self.long_average_window
            )));
        }
        if !self.default_risk_free_rate.is_finite() {
            return Err(ConfigError::Validation(
                "default_risk_free_rate must be finite".into(),
            ));
        }
        Ok(())
    }
}
