//! Configuration loader plus strongly typed settings structures
//!
//! Deserializes the TOML blobs we ship (config and keybinds), resolves the
//! `~/.flipdeck/` paths, and falls back to compile-time embedded defaults
//! when no user file exists.

use anyhow::{Context, Result};
use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::actions::{key_event_to_string, DeckAction};

// Embed default configuration files at compile time
const DEFAULT_CONFIG: &str = include_str!("../defaults/config.toml");
const DEFAULT_KEYBINDS: &str = include_str!("../defaults/keybinds.toml");

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub deck: DeckSettings,
    pub ui: UiSettings,

    #[serde(skip)] // Loaded from separate keybinds.toml file
    pub keybinds: HashMap<String, DeckAction>,
}

/// Deck file parsing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckSettings {
    /// Single character separating front and back on each line
    pub delimiter: char,
}

/// Card surface dimensions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    pub card_width: u16,
    pub card_height: u16,
}

impl Default for DeckSettings {
    fn default() -> Self {
        Self { delimiter: '|' }
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            card_width: 64,
            card_height: 14,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            deck: DeckSettings::default(),
            ui: UiSettings::default(),
            keybinds: default_keybinds(),
        }
    }
}

impl Config {
    /// Load configuration, preferring an explicit path, then
    /// `~/.flipdeck/config.toml`, then the embedded defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path()?,
        };

        let mut config: Config = if config_path.exists() {
            let contents = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse {}", config_path.display()))?
        } else {
            toml::from_str(DEFAULT_CONFIG).context("Invalid embedded default config")?
        };

        config.keybinds = Self::load_keybinds()?;
        Ok(config)
    }

    /// Load keybinds from keybinds.toml, falling back to embedded defaults
    fn load_keybinds() -> Result<HashMap<String, DeckAction>> {
        let keybinds_path = Self::keybinds_path()?;

        if keybinds_path.exists() {
            let contents = fs::read_to_string(&keybinds_path)
                .context("Failed to read keybinds.toml")?;
            Ok(toml::from_str(&contents).context("Failed to parse keybinds.toml")?)
        } else {
            Ok(toml::from_str(DEFAULT_KEYBINDS).unwrap_or_else(|_| default_keybinds()))
        }
    }

    /// Resolve a key press to an action through the keybind map
    pub fn resolve_action(&self, key: KeyEvent) -> Option<DeckAction> {
        let combo = key_event_to_string(key);
        if combo.is_empty() {
            return None;
        }
        self.keybinds.get(&combo).copied()
    }

    /// Keybinds sorted by combo string, for the help overlay
    pub fn keybinds_sorted(&self) -> Vec<(&str, DeckAction)> {
        let mut binds: Vec<(&str, DeckAction)> = self
            .keybinds
            .iter()
            .map(|(combo, action)| (combo.as_str(), *action))
            .collect();
        binds.sort_by(|a, b| a.0.cmp(b.0));
        binds
    }

    fn base_dir() -> Result<PathBuf> {
        Ok(dirs::home_dir()
            .context("Could not determine home directory")?
            .join(".flipdeck"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("config.toml"))
    }

    fn keybinds_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("keybinds.toml"))
    }
}

/// Hardcoded fallback mirroring defaults/keybinds.toml
fn default_keybinds() -> HashMap<String, DeckAction> {
    let mut binds = HashMap::new();
    binds.insert("Left".to_string(), DeckAction::PreviousCard);
    binds.insert("Right".to_string(), DeckAction::NextCard);
    binds.insert("Space".to_string(), DeckAction::FlipCard);
    binds.insert("Up".to_string(), DeckAction::FlipCard);
    binds.insert("Down".to_string(), DeckAction::FlipCard);
    binds.insert("s".to_string(), DeckAction::ToggleShuffle);
    binds.insert("o".to_string(), DeckAction::OpenDeck);
    binds.insert("?".to_string(), DeckAction::ToggleHelp);
    binds.insert("F1".to_string(), DeckAction::ToggleHelp);
    binds.insert("q".to_string(), DeckAction::Quit);
    binds
}
