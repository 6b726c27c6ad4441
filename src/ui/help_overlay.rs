//! Help popup: active key bindings plus the deck file format
//!
//! Rendered from the live keybind map so custom bindings show up correctly.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::config::Config;
use crate::ui::centered_rect;

pub struct HelpOverlay<'a> {
    config: &'a Config,
}

impl<'a> HelpOverlay<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let heading = Style::default().add_modifier(Modifier::UNDERLINED);
        let delimiter = self.config.deck.delimiter;

        let mut lines = vec![Line::from(Span::styled("Key bindings", heading))];
        for (combo, action) in self.config.keybinds_sorted() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:>6}  ", combo), key_style),
                Span::raw(action.describe()),
            ]));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Creating a set", heading)));
        lines.push(Line::from(format!(
            "  One card per line, front and back separated by '{}':",
            delimiter
        )));
        lines.push(Line::from(format!("      hi{}a friendly greeting", delimiter)));
        lines.push(Line::from(format!("      bye{}a farewell", delimiter)));
        lines.push(Line::from(format!(
            "  Lines without '{}' are dropped; blank lines are skipped.",
            delimiter
        )));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "  Press any key to close",
            Style::default().fg(Color::DarkGray),
        )));

        let height = lines.len() as u16 + 2;
        let width = lines
            .iter()
            .map(|line| line.width() as u16)
            .max()
            .unwrap_or(0)
            + 4;
        let popup = centered_rect(width, height, area);

        // Clear the popup area to prevent bleed-through
        Clear.render(popup, buf);

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help ")
                    .title_alignment(Alignment::Center),
            )
            .render(popup, buf);
    }
}
