//! One-line status bar: deck name, "N/total" position, shuffle indicator,
//! and the latest status message

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::core::AppCore;

pub struct StatusBar<'a> {
    core: &'a AppCore,
}

impl<'a> StatusBar<'a> {
    pub fn new(core: &'a AppCore) -> Self {
        Self { core }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let core = self.core;
        let mut spans = Vec::new();

        if let Some(name) = &core.deck_name {
            spans.push(Span::styled(
                format!(" {} ", name),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        }

        if !core.session.is_empty() {
            spans.push(Span::raw(format!(
                " {}/{} ",
                core.session.position(),
                core.session.len()
            )));
        }

        if core.session.shuffled() {
            spans.push(Span::styled(
                "[shuffled] ",
                Style::default().fg(Color::Yellow),
            ));
        }

        if !core.status.is_empty() {
            spans.push(Span::styled(
                format!(" {}", core.status),
                Style::default().fg(Color::Gray),
            ));
        }

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(Color::DarkGray).fg(Color::White))
            .render(area, buf);
    }
}
