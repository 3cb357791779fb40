//! Banner that hides itself after a fixed window
//!
//! The banner appears on a rising edge of `is_visible` and disappears when
//! either the auto-hide window elapses or `is_visible` falls, whichever
//! comes first. The pending timer lives inside the `Shown` phase, so leaving
//! that phase (or dropping the indicator) cancels it.

use std::time::{Duration, Instant};

use ratatui::Frame;

use super::auto_hide::{AutoHideTimer, DEFAULT_AUTO_HIDE};
use super::indicator_props::IndicatorProps;
use super::indicator_render::{Banner, BannerKind, BannerLayout, render_banner};

pub const DEFAULT_RESTORE_MESSAGE: &str = "Restoring your data...";

/// Display phase of a timed indicator
#[derive(Debug, Default, PartialEq, Eq)]
pub enum IndicatorPhase {
    #[default]
    Hidden,
    Shown(AutoHideTimer),
}

impl IndicatorPhase {
    pub fn is_shown(&self) -> bool {
        matches!(self, IndicatorPhase::Shown(_))
    }

    pub fn timer(&self) -> Option<&AutoHideTimer> {
        match self {
            IndicatorPhase::Hidden => None,
            IndicatorPhase::Shown(timer) => Some(timer),
        }
    }
}

#[derive(Debug)]
pub struct TimedIndicator {
    default_message: String,
    window: Duration,
    phase: IndicatorPhase,
    /// `is_visible` as of the last update; edges are detected against it
    last_visible: bool,
    /// Number of activations so far; the current one when shown
    activation: u64,
}

impl Default for TimedIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl TimedIndicator {
    pub fn new() -> Self {
        Self {
            default_message: DEFAULT_RESTORE_MESSAGE.to_string(),
            window: DEFAULT_AUTO_HIDE,
            phase: IndicatorPhase::Hidden,
            last_visible: false,
            activation: 0,
        }
    }

    pub fn with_auto_hide(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    pub fn with_default_message(mut self, message: impl Into<String>) -> Self {
        self.default_message = message.into();
        self
    }

    pub fn auto_hide(&self) -> Duration {
        self.window
    }

    pub fn default_message(&self) -> &str {
        &self.default_message
    }

    pub fn phase(&self) -> &IndicatorPhase {
        &self.phase
    }

    pub fn is_shown(&self) -> bool {
        self.phase.is_shown()
    }

    pub fn activation(&self) -> u64 {
        self.activation
    }

    /// When the pending auto-hide fires, if one is pending.
    ///
    /// Hosts use this to bound how long they wait for input.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.phase.timer().map(AutoHideTimer::deadline)
    }

    /// Time left before the banner hides itself
    pub fn remaining_at(&self, now: Instant) -> Option<Duration> {
        self.phase.timer().map(|timer| timer.remaining(now))
    }

    /// React to new props. Only an edge of `is_visible` changes anything.
    pub fn update(&mut self, props: &IndicatorProps) {
        self.update_at(props, Instant::now());
    }

    pub fn update_at(&mut self, props: &IndicatorProps, now: Instant) {
        if props.is_visible == self.last_visible {
            return;
        }
        self.last_visible = props.is_visible;

        if props.is_visible {
            self.activate(now);
        } else {
            self.hide("visibility flag cleared");
        }
    }

    /// Restart the window while the flag is still set.
    ///
    /// Shows the banner again if its window already ran out. Does nothing
    /// while the flag is clear.
    pub fn retrigger(&mut self) {
        self.retrigger_at(Instant::now());
    }

    pub fn retrigger_at(&mut self, now: Instant) {
        if self.last_visible {
            self.activate(now);
        }
    }

    /// Fire the auto-hide if its deadline has passed.
    ///
    /// Returns true if this call hid the banner.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> bool {
        let elapsed = self
            .phase
            .timer()
            .is_some_and(|timer| timer.is_elapsed(now));

        if elapsed {
            self.hide("auto-hide window elapsed");
        }
        elapsed
    }

    /// Apply `props` as of `now` and return the banner to draw, if any
    pub fn banner_at(&mut self, props: &IndicatorProps, now: Instant) -> Option<Banner> {
        self.update_at(props, now);
        self.tick_at(now);

        self.is_shown().then(|| {
            Banner::new(
                BannerKind::Restored,
                props.message_or(&self.default_message),
            )
        })
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        props: &IndicatorProps,
        layout: &BannerLayout,
        now: Instant,
    ) {
        if let Some(banner) = self.banner_at(props, now) {
            render_banner(frame, &banner, layout);
        }
    }

    /// Dispose of the indicator and any pending timer.
    ///
    /// Equivalent to dropping it.
    pub fn unmount(self) {
        #[cfg(debug_assertions)]
        log::debug!(
            "Timed indicator unmounted after {} activation(s)",
            self.activation
        );
    }

    fn activate(&mut self, now: Instant) {
        self.activation += 1;

        #[cfg(debug_assertions)]
        log::debug!("Timed indicator activation {}", self.activation);

        // Assigning drops the previous phase, cancelling its timer first
        self.phase = IndicatorPhase::Shown(AutoHideTimer::start(self.activation, now, self.window));
    }

    #[cfg_attr(not(debug_assertions), allow(unused_variables))]
    fn hide(&mut self, reason: &str) {
        if self.phase.is_shown() {
            #[cfg(debug_assertions)]
            log::debug!(
                "Timed indicator activation {} hidden: {}",
                self.activation,
                reason
            );
        }
        self.phase = IndicatorPhase::Hidden;
    }
}

#[cfg(test)]
#[path = "timed_indicator_tests.rs"]
mod timed_indicator_tests;
