// Configuration module for bannerkit
// This module handles loading and parsing configuration from ~/.config/bannerkit/config.toml

mod types;

pub use types::{Config, IndicatorsConfig};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::BannerError;

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/bannerkit/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    load_config_or_default(&get_config_path())
}

/// Loads configuration from `path`, falling back to defaults with a warning
pub fn load_config_or_default(config_path: &Path) -> ConfigResult {
    #[cfg(debug_assertions)]
    log::debug!("Loading config from {:?}", config_path);

    // If file doesn't exist, return defaults silently
    if !config_path.exists() {
        #[cfg(debug_assertions)]
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    match load_config_from(config_path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("{}", e);
            let warning = match e {
                BannerError::ConfigRead { source, .. } => {
                    format!("Failed to read config: {}", source)
                }
                BannerError::ConfigParse { message, .. } => format!("Invalid config: {}", message),
                other => other.to_string(),
            };
            ConfigResult {
                config: Config::default(),
                warning: Some(warning),
            }
        }
    }
}

/// Loads configuration from an explicit path.
///
/// Unlike [`load_config`], a missing or malformed file is an error.
pub fn load_config_from(config_path: &Path) -> Result<Config, BannerError> {
    let contents = fs::read_to_string(config_path).map_err(|source| BannerError::ConfigRead {
        path: config_path.to_path_buf(),
        source,
    })?;

    #[cfg(debug_assertions)]
    log::debug!("Config file read successfully, {} bytes", contents.len());

    let config =
        toml::from_str::<Config>(&contents).map_err(|e| BannerError::ConfigParse {
            path: config_path.to_path_buf(),
            message: e.message().to_string(),
        })?;

    #[cfg(debug_assertions)]
    log::debug!("Config parsed successfully: {:?}", config.indicators);

    Ok(config)
}

/// Render `config` as TOML text
pub fn to_toml(config: &Config) -> Result<String, BannerError> {
    toml::to_string(config).map_err(|e| BannerError::ConfigSerialize(e.to_string()))
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/bannerkit/config.toml on all platforms for consistency.
pub fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("bannerkit")
        .join("config.toml")
}
