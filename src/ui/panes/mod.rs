//! TUI pane rendering modules
//!
//! This module provides the rendering logic for all visual panes in the TUI,
//! organized by responsibility for maintainability.
//!
//! # Pane Modules
//!
//! - [`navigation`]: Grouped list of bonding types with the active selection
//! - [`detail`]: Title, category badge, description and example text
//! - [`model`]: The mounted illustrative widget, its toggle button and caption
//! - [`status`]: Status bar with keybindings and reveal state
//!
//! # Architecture
//!
//! Each pane module exports a primary `render_*` function taking the frame,
//! its area and read-only application state. Panes hold no state of their
//! own; everything they show is owned by [`App`].
//!
//! [`App`]: crate::ui::app::App

pub mod detail;
pub mod model;
pub mod navigation;
pub mod status;

// Re-export render functions for convenience
pub use detail::render_detail_pane;
pub use model::render_model_pane;
pub use navigation::{nav_rows, render_navigation_pane, NavRow};
pub use status::render_status_bar;
