use ratatui::{
    Frame,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::time::Instant;

use super::app_state::App;
use crate::indicator::BannerLayout;
use crate::theme;

const KEY_HINTS: &[(&str, &str)] = &[
    ("r", "toggle refreshing"),
    ("c", "toggle restore"),
    ("Enter", "restart restore window"),
    ("q", "quit"),
];

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.render_at(frame, Instant::now());
    }

    pub fn render_at(&mut self, frame: &mut Frame, now: Instant) {
        self.render_body(frame);

        // Banners are drawn last so they float above the body
        let layout = BannerLayout::new(self.position).spinner_frame(self.spinner_frame(now));
        self.persistent.render(frame, &self.refreshing, &layout);

        let timed_slot = if self.refreshing.is_visible { 1 } else { 0 };
        self.timed
            .render(frame, &self.restore, &layout.slot(timed_slot), now);
    }

    fn render_body(&self, frame: &mut Frame) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" bannerkit ", theme::demo::TITLE))
            .border_style(Style::default().fg(theme::demo::BORDER))
            .style(Style::default().bg(theme::demo::BACKGROUND));

        let mut lines = vec![
            flag_line("refreshing", self.refreshing.is_visible),
            flag_line("restore", self.restore.is_visible),
            Line::default(),
        ];

        lines.extend(KEY_HINTS.iter().map(|(key, description)| {
            Line::from(vec![
                Span::styled(format!(" {:>5} ", key), Style::default().fg(theme::demo::HINT_KEY)),
                Span::styled(
                    description.to_string(),
                    Style::default().fg(theme::demo::HINT_DESCRIPTION),
                ),
            ])
        }));

        if let Some(status) = &self.status {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!(" {}", status),
                Style::default().fg(theme::demo::TEXT),
            )));
        }

        frame.render_widget(Paragraph::new(lines).block(block), frame.area());
    }
}

fn flag_line(name: &str, on: bool) -> Line<'static> {
    let (value, color) = if on {
        ("on", theme::demo::FLAG_ON)
    } else {
        ("off", theme::demo::FLAG_OFF)
    };

    Line::from(vec![
        Span::styled(
            format!(" {:<11}", name),
            Style::default().fg(theme::demo::TEXT).bg(theme::demo::PANEL_BG),
        ),
        Span::styled(value, Style::default().fg(color).bg(theme::demo::PANEL_BG)),
    ])
}
