//! Auto-hide timer for a single banner activation
//!
//! The timer is a plain deadline. It has no callback of its own: the owner
//! polls it with `is_elapsed`. Cancelling means dropping it, so a timer that
//! belongs to a superseded activation simply no longer exists.

use std::time::{Duration, Instant};

/// Default time a timed banner stays visible
pub const DEFAULT_AUTO_HIDE: Duration = Duration::from_millis(2000);

/// Deadline for one activation of a timed banner
#[derive(Debug, PartialEq, Eq)]
pub struct AutoHideTimer {
    activation: u64,
    deadline: Instant,
}

impl AutoHideTimer {
    /// Start a timer for `activation` that elapses `window` after `now`
    pub fn start(activation: u64, now: Instant, window: Duration) -> Self {
        #[cfg(debug_assertions)]
        log::debug!(
            "Auto-hide timer started for activation {} ({}ms)",
            activation,
            window.as_millis()
        );

        Self {
            activation,
            deadline: now + window,
        }
    }

    pub fn activation(&self) -> u64 {
        self.activation
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Whether the window has fully elapsed at `now`
    pub fn is_elapsed(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Time left until the deadline, zero once elapsed
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }
}

impl Drop for AutoHideTimer {
    fn drop(&mut self) {
        #[cfg(debug_assertions)]
        log::trace!("Auto-hide timer released for activation {}", self.activation);
    }
}
