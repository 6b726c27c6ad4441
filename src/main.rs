//! flipdeck - terminal flashcard viewer
//!
//! Loads a delimited text file into front/back cards and shows them one at a
//! time; flip, navigate, and shuffle from the keyboard.

mod config;
mod core;
mod frontend;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::KeyEvent;
use std::path::PathBuf;

use crate::config::Config;
use crate::core::AppCore;
use crate::frontend::{Frontend, FrontendEvent, TuiFrontend};

#[derive(Parser)]
#[command(name = "flipdeck")]
#[command(about = "Terminal flashcard viewer", long_about = None)]
struct Cli {
    /// Deck file to open at startup
    #[arg(value_name = "DECK")]
    deck: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the card delimiter character
    #[arg(short, long, value_name = "CHAR")]
    delimiter: Option<char>,
}

fn main() -> Result<()> {
    // Log to a file (use RUST_LOG to control level); the TUI owns stdout
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("flipdeck.log")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false) // No color codes in log file
        .init();

    let cli = Cli::parse();

    let mut config =
        Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(delimiter) = cli.delimiter {
        config.deck.delimiter = delimiter;
    }

    let mut core = AppCore::new(config);
    if let Some(path) = &cli.deck {
        core.open_deck(path);
    }

    let mut frontend = TuiFrontend::new()?;
    let result = run(&mut core, &mut frontend);
    frontend.cleanup()?;
    result
}

/// Event loop: render, poll, hand key presses to the core
fn run(core: &mut AppCore, frontend: &mut impl Frontend) -> Result<()> {
    while core.running {
        frontend.render(core)?;

        for event in frontend.poll_events()? {
            match event {
                FrontendEvent::Key { code, modifiers } => {
                    core.handle_key(KeyEvent::new(code, modifiers));
                }
                // Redrawn at the top of the loop anyway
                FrontendEvent::Resize { .. } => {}
            }
        }
    }
    Ok(())
}
