//! bannerkit library - transient status banners for terminal UIs
//!
//! This library exposes the indicators and the demo host for reuse and testing.

pub mod app;
pub mod config;
pub mod error;
pub mod indicator;

#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use indicator::{IndicatorProps, PersistentIndicator, TimedIndicator};
