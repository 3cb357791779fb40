//! Animated spinner glyph shown at the start of a banner

use ratatui::style::Color;

use crate::theme;

/// Braille spinner frames
pub const SPINNER_CHARS: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Render frames each glyph stays on screen
const FRAMES_PER_GLYPH: u64 = 8;

pub use theme::banner::SPINNER_COLORS;

/// Glyph and color for the given animation frame.
///
/// Both advance once every 8 frames; the glyph cycles through 10 frames and
/// the color through 8, so the pair only repeats every 40 glyph steps.
pub fn get_spinner(frame: u64) -> (char, Color) {
    let step = frame / FRAMES_PER_GLYPH;
    let char = SPINNER_CHARS[(step % SPINNER_CHARS.len() as u64) as usize];
    let color = SPINNER_COLORS[(step % SPINNER_COLORS.len() as u64) as usize];
    (char, color)
}

#[cfg(test)]
#[path = "spinner_tests.rs"]
mod spinner_tests;
