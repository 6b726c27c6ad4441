//! Frontend-agnostic input events
//!
//! The frontend translates its native event stream (crossterm) into this
//! enum so the core never sees toolkit-specific event types beyond the key
//! codes themselves.

use crossterm::event::{KeyCode, KeyModifiers};

/// Events delivered from the frontend to the application loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontendEvent {
    /// Key press
    Key {
        code: KeyCode,
        modifiers: KeyModifiers,
    },

    /// Terminal resized
    Resize { width: u16, height: u16 },
}
