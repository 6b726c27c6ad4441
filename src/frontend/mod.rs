//! Frontend abstraction layer
//!
//! Defines the `Frontend` trait the presentation layer implements. The core
//! never calls into a concrete toolkit; the event loop polls a `Frontend`
//! for input and hands it the core state to render.

pub mod events;
pub mod tui;

use anyhow::Result;
pub use events::FrontendEvent;
pub use tui::TuiFrontend;

use crate::core::AppCore;

/// Presentation-layer contract
pub trait Frontend {
    /// Return all pending input events (empty if none arrived in time)
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>>;

    /// Render the current application state as one frame
    fn render(&mut self, core: &AppCore) -> Result<()>;

    /// Restore the terminal and release any resources
    fn cleanup(&mut self) -> Result<()>;
}
