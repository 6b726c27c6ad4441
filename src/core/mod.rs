//! Core business logic layer
//!
//! The card set, the viewing session, and the action vocabulary that drives
//! them. NO imports from frontend/ or rendering code: the core updates
//! state, frontends read and render.

pub mod actions;
pub mod app_core;
pub mod deck;
pub mod session;

pub use actions::DeckAction;
pub use app_core::{AppCore, InputMode};
pub use deck::{CardSet, DeckError, Flashcard};
pub use session::{Direction, Session};
