//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
/// Only use these directly when a component truly shares the same color.
/// Otherwise, define component-specific constants that reference these.
pub mod palette {
    use super::*;

    // Text colors - softer than pure white
    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    // Background colors - deep space blue tints
    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_SURFACE: Color = Color::Rgb(35, 35, 58);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(55, 55, 85);

    // Semantic colors
    pub const SUCCESS: Color = Color::Rgb(107, 203, 119);
    pub const INFO: Color = Color::Rgb(0, 217, 255);
}

/// Banner overlay styles
pub mod banner {
    use super::*;

    pub struct BannerColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
    }

    /// Shown while data is being refreshed
    pub const REFRESHING: BannerColors = BannerColors {
        fg: palette::TEXT,
        bg: palette::BG_HIGHLIGHT,
        border: palette::INFO,
    };

    /// Shown briefly after cached data was restored
    pub const RESTORED: BannerColors = BannerColors {
        fg: palette::BG_DARK,
        bg: palette::SUCCESS,
        border: palette::SUCCESS,
    };

    // Spinner animation colors (galaxy rainbow)
    pub const SPINNER_COLORS: &[Color] = &[
        Color::Rgb(255, 107, 157), // Pink
        Color::Rgb(255, 184, 108), // Orange
        Color::Rgb(255, 217, 61),  // Yellow
        Color::Rgb(107, 203, 119), // Green
        Color::Rgb(0, 217, 255),   // Cyan
        Color::Rgb(189, 147, 249), // Purple
        Color::Rgb(198, 120, 221), // Magenta
        Color::Rgb(224, 108, 117), // Red
    ];
}

/// Demo screen styles
pub mod demo {
    use super::*;

    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const BORDER: Color = palette::TEXT_DIM;
    pub const TITLE: Style = Style::new().fg(palette::INFO).add_modifier(Modifier::BOLD);
    pub const TEXT: Color = palette::TEXT;
    pub const HINT_KEY: Color = palette::INFO;
    pub const HINT_DESCRIPTION: Color = palette::TEXT_MUTED;
    pub const FLAG_ON: Color = palette::SUCCESS;
    pub const FLAG_OFF: Color = palette::TEXT_DIM;
    pub const PANEL_BG: Color = palette::BG_SURFACE;
}
