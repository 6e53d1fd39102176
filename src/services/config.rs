use std::fs;

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("unsupported percentile {0}, expected one of 50, 85, 95")]
    UnsupportedPercentile(u8),
}

/// Forecast settings document. The layout mirrors the historical config
/// files: a `source_data` section naming the history CSV and a
/// `projections` section with the forecast parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub source_data: SourceData,
    pub projections: Projections,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceData {
    pub data_file: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Projections {
    pub future_event_count: usize,
    /// Which of the three reported percentiles to emphasize, if any.
    #[serde(default)]
    pub percentile: Option<u8>,
    #[serde(default = "default_simulations")]
    pub simulations: usize,
}

fn default_simulations() -> usize {
    10000
}

impl Settings {
    pub fn from_yaml_file(filepath: &str) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(filepath)?;
        let settings: Settings = serde_yaml::from_str(&contents)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(percentile) = self.projections.percentile {
            if !matches!(percentile, 50 | 85 | 95) {
                return Err(ConfigError::UnsupportedPercentile(percentile));
            }
        }
        Ok(())
    }
}
