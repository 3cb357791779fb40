use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::{Duration, Instant};

use super::app_state::App;

/// Redraw interval while a spinner is animating
const ANIMATION_POLL_TIMEOUT: Duration = Duration::from_millis(80);

/// Poll interval when nothing on screen is moving
const IDLE_POLL_TIMEOUT: Duration = Duration::from_millis(250);

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_timeout(Instant::now()))? {
            // Check that it's a key press event to avoid duplicates
            if let Event::Key(key_event) = event::read()?
                && key_event.kind == KeyEventKind::Press
            {
                self.handle_key_event(key_event, Instant::now());
            }
        }

        self.timed.tick_at(Instant::now());
        Ok(())
    }

    /// How long the event loop may block before the screen needs a redraw.
    ///
    /// Never longer than the time left on a pending auto-hide, so the
    /// restored banner disappears on schedule.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        let base = if self.any_banner_shown() {
            ANIMATION_POLL_TIMEOUT
        } else {
            IDLE_POLL_TIMEOUT
        };

        match self.timed.remaining_at(now) {
            Some(remaining) => base.min(remaining),
            None => base,
        }
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('r') => {
                self.refreshing.is_visible = !self.refreshing.is_visible;

                #[cfg(debug_assertions)]
                log::debug!("Refreshing flag set to {}", self.refreshing.is_visible);
            }
            KeyCode::Char('c') => {
                self.restore.is_visible = !self.restore.is_visible;

                #[cfg(debug_assertions)]
                log::debug!("Restore flag set to {}", self.restore.is_visible);

                // Apply the edge now rather than on the next draw
                self.timed.update_at(&self.restore, now);
            }
            KeyCode::Enter => {
                self.timed.retrigger_at(now);
            }
            _ => {}
        }
    }
}
