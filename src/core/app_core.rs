//! Frontend-agnostic application state
//!
//! `AppCore` owns the configuration, the loaded card set, and the viewing
//! session, and consumes `DeckAction`s regardless of which frontend produced
//! them. Frontends read from it and render; they never mutate it directly.

use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent};

use crate::config::Config;
use crate::core::actions::DeckAction;
use crate::core::deck::CardSet;
use crate::core::session::{Direction, Session};

/// What keyboard input is currently directed at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Card viewing: keys resolve through the keybind map
    Normal,
    /// Typing a path into the open-deck prompt
    FilePrompt,
    /// Help overlay is up; any key dismisses it
    Help,
}

/// Core application state (frontend-agnostic)
pub struct AppCore {
    /// Application configuration
    pub config: Config,

    /// Currently loaded deck (empty until a file is opened)
    pub deck: CardSet,

    /// Navigation/shuffle state over `deck`
    pub session: Session,

    /// Current input mode
    pub mode: InputMode,

    /// File stem of the loaded deck, for the status bar
    pub deck_name: Option<String>,

    /// One-line status message
    pub status: String,

    /// Text typed so far into the open-deck prompt
    pub prompt_input: String,

    /// Application running flag
    pub running: bool,
}

impl AppCore {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            deck: CardSet::new(),
            session: Session::new(0),
            mode: InputMode::Normal,
            deck_name: None,
            status: String::from("No deck loaded. Press 'o' to open one, '?' for help."),
            prompt_input: String::new(),
            running: true,
        }
    }

    /// Open a deck file, replacing the current set wholesale
    ///
    /// On read failure the previous deck and session stay exactly as they
    /// were and the error lands in the status line.
    pub fn open_deck(&mut self, path: &Path) {
        match CardSet::load(path, self.config.deck.delimiter) {
            Ok(deck) => {
                self.session.reset(deck.len());
                self.deck = deck;
                self.deck_name = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned());
                self.status = format!("Loaded {} card(s)", self.deck.len());
                tracing::info!("Opened deck {:?} with {} cards", path, self.deck.len());
            }
            Err(e) => {
                tracing::warn!("{}", e);
                self.status = e.to_string();
            }
        }
    }

    /// Text of the face currently showing, if any
    pub fn display_text(&self) -> Option<&str> {
        self.session.display_text(&self.deck)
    }

    /// Route one key press according to the current input mode
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.mode {
            InputMode::Normal => {
                if let Some(action) = self.config.resolve_action(key) {
                    self.handle_action(action);
                }
            }
            InputMode::FilePrompt => self.handle_prompt_key(key),
            InputMode::Help => self.mode = InputMode::Normal,
        }
    }

    /// Apply one viewer action
    pub fn handle_action(&mut self, action: DeckAction) {
        match action {
            DeckAction::PreviousCard => self.session.advance(Direction::Backward),
            DeckAction::NextCard => self.session.advance(Direction::Forward),
            DeckAction::FlipCard => self.session.flip(),
            DeckAction::ToggleShuffle => {
                self.session.toggle_shuffle(&mut self.deck);
                if !self.session.is_empty() {
                    self.status = if self.session.shuffled() {
                        String::from("Shuffled")
                    } else {
                        format!("Shuffle off, resumed at card {}", self.session.position())
                    };
                }
            }
            DeckAction::OpenDeck => {
                self.prompt_input.clear();
                self.mode = InputMode::FilePrompt;
            }
            DeckAction::ToggleHelp => {
                self.mode = match self.mode {
                    InputMode::Help => InputMode::Normal,
                    _ => InputMode::Help,
                };
            }
            DeckAction::Quit => self.running = false,
        }
    }

    /// Line editing for the open-deck prompt
    fn handle_prompt_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                let path = expand_home(self.prompt_input.trim());
                self.mode = InputMode::Normal;
                if !path.as_os_str().is_empty() {
                    self.open_deck(&path);
                }
            }
            KeyCode::Esc => {
                self.mode = InputMode::Normal;
                self.status = String::from("Open cancelled");
            }
            KeyCode::Backspace => {
                self.prompt_input.pop();
            }
            KeyCode::Char(c) => self.prompt_input.push(c),
            _ => {}
        }
    }
}

/// Expand a leading `~/` to the user's home directory
fn expand_home(input: &str) -> PathBuf {
    if let Some(rest) = input.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use std::io::Write;

    fn core_with_deck() -> AppCore {
        let mut core = AppCore::new(Config::default());
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "a|1\nb|2\nc|3").unwrap();
        core.open_deck(file.path());
        core
    }

    #[test]
    fn test_open_deck_resets_session() {
        let mut core = core_with_deck();
        core.handle_action(DeckAction::NextCard);
        core.handle_action(DeckAction::FlipCard);
        assert_eq!(core.session.position(), 2);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "x|y").unwrap();
        core.open_deck(file.path());

        assert_eq!(core.deck.len(), 1);
        assert_eq!(core.session.position(), 1);
        assert!(core.session.on_front());
        assert!(!core.session.shuffled());
    }

    #[test]
    fn test_open_failure_keeps_previous_deck() {
        let mut core = core_with_deck();
        core.handle_action(DeckAction::NextCard);
        let before = core.session;

        let dir = tempfile::tempdir().unwrap();
        core.open_deck(&dir.path().join("missing.txt"));

        assert_eq!(core.deck.len(), 3);
        assert_eq!(core.session, before);
        assert!(core.status.contains("missing.txt"));
    }

    #[test]
    fn test_actions_drive_session() {
        let mut core = core_with_deck();

        core.handle_action(DeckAction::NextCard);
        assert_eq!(core.display_text(), Some("b"));

        core.handle_action(DeckAction::FlipCard);
        assert_eq!(core.display_text(), Some("2"));

        core.handle_action(DeckAction::PreviousCard);
        core.handle_action(DeckAction::FlipCard);
        assert_eq!(core.display_text(), Some("a"));
    }

    #[test]
    fn test_default_keybinds_route_actions() {
        let mut core = core_with_deck();

        core.handle_key(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE));
        assert_eq!(core.session.position(), 2);

        core.handle_key(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE));
        assert!(!core.session.on_front());

        core.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(!core.running);
    }

    #[test]
    fn test_prompt_flow() {
        let mut core = AppCore::new(Config::default());
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "a|1").unwrap();

        core.handle_key(KeyEvent::new(KeyCode::Char('o'), KeyModifiers::NONE));
        assert_eq!(core.mode, InputMode::FilePrompt);

        for c in file.path().to_string_lossy().chars() {
            core.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        core.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        assert_eq!(core.mode, InputMode::Normal);
        assert_eq!(core.deck.len(), 1);
    }

    #[test]
    fn test_prompt_cancel() {
        let mut core = core_with_deck();
        core.handle_action(DeckAction::OpenDeck);
        core.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
        core.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));

        assert_eq!(core.mode, InputMode::Normal);
        assert_eq!(core.deck.len(), 3);
    }

    #[test]
    fn test_help_dismissed_by_any_key() {
        let mut core = core_with_deck();
        core.handle_key(KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE));
        assert_eq!(core.mode, InputMode::Help);

        core.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
        assert_eq!(core.mode, InputMode::Normal);
    }

    #[test]
    fn test_empty_deck_actions_are_noops() {
        let mut core = AppCore::new(Config::default());
        core.handle_action(DeckAction::NextCard);
        core.handle_action(DeckAction::FlipCard);
        core.handle_action(DeckAction::ToggleShuffle);

        assert!(core.deck.is_empty());
        assert_eq!(core.display_text(), None);
        assert!(!core.session.shuffled());
    }
}
