//! Banner that mirrors its visibility flag
//!
//! Shown exactly while `is_visible` is true. Holds no state besides its
//! default message, so every render is a pure function of the props.

use ratatui::Frame;

use super::indicator_props::IndicatorProps;
use super::indicator_render::{Banner, BannerKind, BannerLayout, render_banner};

pub const DEFAULT_REFRESH_MESSAGE: &str = "Refreshing data...";

/// Visibility of a persistent indicator for one set of props
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Shown,
}

impl Visibility {
    pub fn from_flag(is_visible: bool) -> Self {
        if is_visible {
            Visibility::Shown
        } else {
            Visibility::Hidden
        }
    }
}

#[derive(Debug, Clone)]
pub struct PersistentIndicator {
    default_message: String,
}

impl Default for PersistentIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl PersistentIndicator {
    pub fn new() -> Self {
        Self::with_default_message(DEFAULT_REFRESH_MESSAGE)
    }

    pub fn with_default_message(message: impl Into<String>) -> Self {
        Self {
            default_message: message.into(),
        }
    }

    pub fn default_message(&self) -> &str {
        &self.default_message
    }

    pub fn visibility(&self, props: &IndicatorProps) -> Visibility {
        Visibility::from_flag(props.is_visible)
    }

    /// The banner for these props, if any
    pub fn banner(&self, props: &IndicatorProps) -> Option<Banner> {
        match self.visibility(props) {
            Visibility::Hidden => None,
            Visibility::Shown => Some(Banner::new(
                BannerKind::Refreshing,
                props.message_or(&self.default_message),
            )),
        }
    }

    pub fn render(&self, frame: &mut Frame, props: &IndicatorProps, layout: &BannerLayout) {
        if let Some(banner) = self.banner(props) {
            render_banner(frame, &banner, layout);
        }
    }
}

#[cfg(test)]
#[path = "persistent_indicator_tests.rs"]
mod persistent_indicator_tests;
