//! Rendering layer: widgets that read `AppCore` and draw one frame
//!
//! One widget per module, with the card surface filling the window, a
//! one-line status bar underneath, and the two overlays (help, open-deck
//! prompt) on top when active.

pub mod card_surface;
pub mod file_prompt;
pub mod help_overlay;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use crate::core::{AppCore, InputMode};
use card_surface::CardSurface;
use help_overlay::HelpOverlay;
use status_bar::StatusBar;

/// Draw the whole frame: card surface, status bar, then any active overlay
pub fn draw(frame: &mut Frame, core: &AppCore) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(frame.area());

    frame.render_widget(CardSurface::new(core), chunks[0]);
    frame.render_widget(StatusBar::new(core), chunks[1]);

    match core.mode {
        InputMode::Help => frame.render_widget(HelpOverlay::new(&core.config), frame.area()),
        InputMode::FilePrompt => file_prompt::draw(frame, core),
        InputMode::Normal => {}
    }
}

/// A rect of at most `width` x `height`, centered in `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
