//! Banner rendering
//!
//! Provides functions for drawing a banner overlay into a frame. Both
//! indicators draw through here so they look the same.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use serde::{Deserialize, Serialize};

use crate::theme;
use crate::widgets::popup::{self, HAnchor, VAnchor};
use crate::widgets::spinner::get_spinner;

/// 1 line content + 2 borders
pub const BANNER_HEIGHT: u16 = 3;

/// Distance kept from the anchored frame edges
const BANNER_MARGIN: u16 = 2;

/// Below this the border and spinner no longer fit
const MIN_BANNER_WIDTH: u16 = 5;

/// Which indicator produced a banner; selects its colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Refreshing,
    Restored,
}

impl BannerKind {
    fn colors(self) -> &'static theme::banner::BannerColors {
        match self {
            BannerKind::Refreshing => &theme::banner::REFRESHING,
            BannerKind::Restored => &theme::banner::RESTORED,
        }
    }
}

/// A banner ready to draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
}

impl Banner {
    pub fn new(kind: BannerKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Where on screen banners are anchored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BannerPosition {
    #[default]
    TopRight,
    TopCenter,
    BottomRight,
}

impl BannerPosition {
    fn anchors(self) -> (HAnchor, VAnchor) {
        match self {
            BannerPosition::TopRight => (HAnchor::Right, VAnchor::Top),
            BannerPosition::TopCenter => (HAnchor::Center, VAnchor::Top),
            BannerPosition::BottomRight => (HAnchor::Right, VAnchor::Bottom),
        }
    }
}

/// Placement and animation inputs for one draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BannerLayout {
    pub position: BannerPosition,
    /// Stacking slot; slot N sits N banner-heights away from the anchored edge
    pub slot: u16,
    pub spinner_frame: u64,
}

impl BannerLayout {
    pub fn new(position: BannerPosition) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn slot(mut self, slot: u16) -> Self {
        self.slot = slot;
        self
    }

    pub fn spinner_frame(mut self, frame: u64) -> Self {
        self.spinner_frame = frame;
        self
    }
}

fn banner_line(banner: &Banner, spinner_frame: u64) -> Line<'static> {
    let colors = banner.kind.colors();
    let (glyph, spinner_color) = get_spinner(spinner_frame);
    let glyph_color = match banner.kind {
        BannerKind::Refreshing => spinner_color,
        BannerKind::Restored => colors.fg,
    };
    let text_style = Style::default().fg(colors.fg).bg(colors.bg);

    Line::from(vec![
        Span::styled(" ", text_style),
        Span::styled(glyph.to_string(), text_style.fg(glyph_color)),
        Span::styled(format!(" {} ", banner.message), text_style),
    ])
}

/// Compute where a banner would be drawn inside `frame_area`.
///
/// Returns `None` if the frame is too small to show it.
pub fn banner_area(frame_area: Rect, banner: &Banner, layout: &BannerLayout) -> Option<Rect> {
    let content_width = banner_line(banner, layout.spinner_frame).width();
    let banner_width = u16::try_from(content_width)
        .unwrap_or(u16::MAX)
        .saturating_add(2);

    let (h, v) = layout.position.anchors();
    let area = popup::anchored_rect(
        frame_area,
        banner_width,
        BANNER_HEIGHT,
        BANNER_MARGIN,
        layout.slot.saturating_mul(BANNER_HEIGHT),
        h,
        v,
    );

    if area.width < MIN_BANNER_WIDTH || area.height < BANNER_HEIGHT {
        return None;
    }
    Some(area)
}

/// Draw `banner` as a floating overlay.
///
/// Call after the main UI has been drawn so the banner sits on top.
pub fn render_banner(frame: &mut Frame, banner: &Banner, layout: &BannerLayout) {
    let Some(area) = banner_area(frame.area(), banner, layout) else {
        return;
    };

    // Clear background for floating effect
    popup::clear_area(frame, area);

    let colors = banner.kind.colors();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border).bg(colors.bg))
        .style(Style::default().bg(colors.bg));

    let paragraph = Paragraph::new(banner_line(banner, layout.spinner_frame)).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
#[path = "indicator_render_tests.rs"]
mod indicator_render_tests;
