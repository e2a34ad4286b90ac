//! flatdeck-tui - Terminal UI for flatdeck
//!
//! This crate provides the ratatui-based terminal interface: event polling,
//! layout, widgets for the three panels, and the main run loop driving the
//! TEA engine from flatdeck-app.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
