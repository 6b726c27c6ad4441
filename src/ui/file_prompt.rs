//! Open-deck prompt: a one-line path input popup
//!
//! Drawn through the frame (not as a plain widget) so the cursor can be
//! placed at the end of the typed path.

use ratatui::{
    layout::Position,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::core::AppCore;
use crate::ui::centered_rect;

pub fn draw(frame: &mut Frame, core: &AppCore) {
    let area = frame.area();
    let width = area.width.saturating_sub(8).min(72).max(20);
    let popup = centered_rect(width, 3, area);

    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Open deck (Enter to load, Esc to cancel) ");
    let inner = block.inner(popup);

    // Keep the tail of long paths visible
    let visible_width = inner.width.saturating_sub(1) as usize;
    let input: String = core
        .prompt_input
        .chars()
        .rev()
        .take(visible_width)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();

    frame.render_widget(Paragraph::new(input.as_str()).block(block), popup);

    let cursor_x = inner.x + input.chars().count() as u16;
    frame.set_cursor_position(Position::new(cursor_x.min(inner.right()), inner.y));
}
