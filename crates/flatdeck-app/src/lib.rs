//! # flatdeck-app - Application state and orchestration for flatdeck
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: [`AppState`] is the model, [`Message`] the input alphabet,
//! [`handler::update`] the pure transition function, and [`UpdateAction`]
//! the side effects it requests. The action dispatcher in [`actions`]
//! performs those effects (spawning command runners, opening the catalog
//! URL, probing tools) and feeds results back as messages.

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use process::process_message;
pub use state::{AppState, PanelKind};

// Re-export runner types for the TUI
pub use flatdeck_runner::{CommandRunner, CommandSpec, ToolAvailability};
