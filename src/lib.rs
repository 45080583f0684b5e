//! # Introduction
//!
//! bondtty is an interactive terminal visualization of the six classic
//! chemical bonding types, rendered with [ratatui](https://docs.rs/ratatui).
//! A static catalog provides the descriptive text; one illustrative widget
//! per bonding type layers animated decorations over a fixed scene of atom
//! badges when its toggle is revealed.
//!
//! ## Structure
//!
//! ```text
//! Catalog → App (selection + mounted widget) → Panes
//! ```
//!
//! 1. [`catalog`] — immutable display metadata for the six bonding types,
//!    grouped into intramolecular and intermolecular bonds.
//! 2. [`model`] — per-widget state machines: a two-state reveal toggle per
//!    widget, plus the metallic model's electron-gas particles.
//! 3. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Interaction
//!
//! Up/Down (or j/k) and the digit keys change the selection; Space, Enter
//! or t toggle the mounted widget; q quits. Switching the selection mounts
//! a fresh widget, so reveal state never survives a selection change.

pub mod catalog;
pub mod model;
pub mod ui;
