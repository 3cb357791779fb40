use std::time::{Duration, Instant};

use crate::config::Config;
use crate::indicator::{BannerPosition, IndicatorProps, PersistentIndicator, TimedIndicator};

/// Milliseconds per spinner animation frame
const SPINNER_FRAME_MS: u128 = 10;

pub struct App {
    /// Props fed to the refreshing banner
    pub refreshing: IndicatorProps,
    /// Props fed to the restored banner
    pub restore: IndicatorProps,
    pub persistent: PersistentIndicator,
    pub timed: TimedIndicator,
    pub position: BannerPosition,
    /// One-line message under the key hints (config warnings)
    pub status: Option<String>,
    pub should_quit: bool,
    started_at: Instant,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self::new_at(config, Instant::now())
    }

    pub fn new_at(config: &Config, now: Instant) -> Self {
        let indicators = &config.indicators;

        Self {
            refreshing: IndicatorProps::hidden(),
            restore: IndicatorProps::hidden(),
            persistent: PersistentIndicator::with_default_message(
                indicators.refresh_message.clone(),
            ),
            timed: TimedIndicator::new()
                .with_auto_hide(Duration::from_millis(indicators.auto_hide_ms))
                .with_default_message(indicators.restore_message.clone()),
            position: indicators.position,
            status: None,
            should_quit: false,
            started_at: now,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    /// Spinner animation frame at `now`
    pub fn spinner_frame(&self, now: Instant) -> u64 {
        let elapsed = now.saturating_duration_since(self.started_at).as_millis();
        (elapsed / SPINNER_FRAME_MS) as u64
    }

    /// Whether any banner is currently on screen
    pub fn any_banner_shown(&self) -> bool {
        self.refreshing.is_visible || self.timed.is_shown()
    }
}
