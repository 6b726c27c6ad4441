//! The card itself: current face text centered in a card-shaped box

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::core::AppCore;
use crate::ui::centered_rect;

pub struct CardSurface<'a> {
    core: &'a AppCore,
}

impl<'a> CardSurface<'a> {
    pub fn new(core: &'a AppCore) -> Self {
        Self { core }
    }
}

impl Widget for CardSurface<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let core = self.core;
        let ui = &core.config.ui;
        let card_area = centered_rect(ui.card_width, ui.card_height, area);
        if card_area.width < 3 || card_area.height < 3 {
            return;
        }

        let (title, text, text_style) = match core.display_text() {
            Some(text) => {
                let title = if core.session.on_front() { " Front " } else { " Back " };
                let style = Style::default().add_modifier(Modifier::BOLD);
                (title, text, style)
            }
            None => (
                "",
                "Press 'o' to open a deck",
                Style::default().fg(Color::DarkGray),
            ),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .title_alignment(Alignment::Center);
        let inner = block.inner(card_area);
        block.render(card_area, buf);

        // Vertically center by padding the paragraph area down by the
        // estimated wrapped line count
        let text_width = inner.width.max(1) as usize;
        let line_count: usize = text
            .lines()
            .map(|line| line.chars().count().div_ceil(text_width).max(1))
            .sum();
        let top_pad = ((inner.height as usize).saturating_sub(line_count) / 2) as u16;
        let text_area = Rect {
            y: inner.y + top_pad,
            height: inner.height - top_pad,
            ..inner
        };

        Paragraph::new(text)
            .style(text_style)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .render(text_area, buf);
    }
}
