//! Configuration structures for snapshot analysis.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Main configuration for loading and analysing a snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Loader configuration.
    pub loader: LoaderConfig,
    /// Metric engine configuration.
    pub metrics: MetricsConfig,
}

impl Config {
    /// Decode a configuration from JSON. Missing sections use defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check all sections.
    pub fn validate(&self) -> Result<()> {
        self.metrics.validate()
    }
}

/// Book loader configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Whether the first line is a header. When true it is discarded
    /// unconditionally, whatever it contains.
    pub has_header: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self { has_header: true }
    }
}

/// Metric engine parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Half-width of the depth window around mid, in percent (0.5 = ±0.5%).
    pub depth_pct: f64,
    /// Quantity to fill for the VWAP walks.
    pub target_qty: f64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            depth_pct: 0.5,
            target_qty: 40.0,
        }
    }
}

impl MetricsConfig {
    /// Reject parameters that would make the metrics meaningless.
    pub fn validate(&self) -> Result<()> {
        if !self.depth_pct.is_finite() || self.depth_pct < 0.0 {
            return Err(Error::config(format!(
                "depth_pct must be finite and >= 0, got {}",
                self.depth_pct
            )));
        }
        if !self.target_qty.is_finite() || self.target_qty <= 0.0 {
            return Err(Error::InvalidQuantity {
                qty: self.target_qty,
            });
        }
        Ok(())
    }
}
