//! Closed action vocabulary for the viewer
//!
//! Translates raw `KeyEvent`s into combo strings for keybind lookup, and
//! defines the `DeckAction` enum those keybinds resolve to. Using a closed
//! enum instead of action-command strings keeps every reachable operation
//! visible in one place.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Everything the viewer can be asked to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeckAction {
    PreviousCard,
    NextCard,
    FlipCard,
    ToggleShuffle,
    OpenDeck,
    ToggleHelp,
    Quit,
}

impl DeckAction {
    /// Short description for the help overlay
    pub fn describe(&self) -> &'static str {
        match self {
            DeckAction::PreviousCard => "go back one card",
            DeckAction::NextCard => "go forward one card",
            DeckAction::FlipCard => "flip the card over",
            DeckAction::ToggleShuffle => "shuffle / un-shuffle",
            DeckAction::OpenDeck => "open a deck file",
            DeckAction::ToggleHelp => "show this help",
            DeckAction::Quit => "quit",
        }
    }
}

/// Convert a `KeyEvent` to its combo-string form for keybind matching
///
/// Character keys already carry the effect of Shift, so Shift is only
/// spelled out for non-character keys ("Shift+Up" but "?" not "Shift+?").
/// Returns an empty string for keys the viewer does not recognize.
pub fn key_event_to_string(key: KeyEvent) -> String {
    let mut parts: Vec<String> = Vec::new();

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if key.modifiers.contains(KeyModifiers::SHIFT) && !matches!(key.code, KeyCode::Char(_)) {
        parts.push("Shift".to_string());
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }

    let key_str = match key.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => return String::new(),
    };

    parts.push(key_str);
    parts.join("+")
}
