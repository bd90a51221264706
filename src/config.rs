use crate::logging;
use crate::store::DEFAULT_SWEEP_INTERVAL;
use crate::{Result, TrackerError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".component-tracker.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub tracking: TrackingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingConfig {
    /// Pin the mode instead of asking the host framework
    #[serde(default)]
    pub production_mode: Option<bool>,
    /// Extra type path prefixes treated as internal frames
    #[serde(default)]
    pub skip_prefixes: Vec<String>,
    /// Use only `skip_prefixes`, dropping the built-in list
    #[serde(default)]
    pub replace_default_prefixes: bool,
    /// Type path of the router class that instantiates route targets
    #[serde(default)]
    pub navigation_class: Option<String>,
    /// Records between automatic sweeps, 0 to disable
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval: usize,
}

fn default_sweep_interval() -> usize {
    DEFAULT_SWEEP_INTERVAL
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            production_mode: None,
            skip_prefixes: Vec::new(),
            replace_default_prefixes: false,
            navigation_class: None,
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
        }
    }
}

impl Config {
    /// Load configuration from the working directory
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Load configuration from `config_path`; a missing file yields defaults
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            TrackerError::FileError(format!(
                "Failed to read config file {:?}: {}",
                config_path, e
            ))
        })?;

        Self::parse(&content).map_err(|e| {
            TrackerError::ConfigError(format!(
                "Failed to parse TOML config from {:?}: {}",
                config_path, e
            ))
            .into()
        })
    }

    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load default config if file is missing, otherwise return error on parse failure
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                logging::log_config_fallback(&e);
                Config::default()
            }
        }
    }
}
