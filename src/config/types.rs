// Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::indicator::{BannerPosition, DEFAULT_REFRESH_MESSAGE, DEFAULT_RESTORE_MESSAGE};

/// Indicator configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct IndicatorsConfig {
    /// How long the timed banner stays up, in milliseconds
    #[serde(default = "default_auto_hide_ms")]
    pub auto_hide_ms: u64,
    #[serde(default = "default_refresh_message")]
    pub refresh_message: String,
    #[serde(default = "default_restore_message")]
    pub restore_message: String,
    #[serde(default)]
    pub position: BannerPosition,
}

fn default_auto_hide_ms() -> u64 {
    2000
}

fn default_refresh_message() -> String {
    DEFAULT_REFRESH_MESSAGE.to_string()
}

fn default_restore_message() -> String {
    DEFAULT_RESTORE_MESSAGE.to_string()
}

impl Default for IndicatorsConfig {
    fn default() -> Self {
        IndicatorsConfig {
            auto_hide_ms: default_auto_hide_ms(),
            refresh_message: default_refresh_message(),
            restore_message: default_restore_message(),
            position: BannerPosition::default(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub indicators: IndicatorsConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
