//! # flatdeck-runner - External Command Execution
//!
//! Owns the child processes flatdeck spawns. Each [`CommandRunner`] runs one
//! [`CommandSpec`] and streams its combined stdout/stderr as
//! [`flatdeck_core::CommandEvent`]s over an mpsc channel: zero or more line
//! events, in order, then exactly one exit event with the real exit code.
//!
//! Also provides [`ToolAvailability`], the startup probe that reports
//! whether the configured flatpak binary resolves on PATH.

pub mod command;
pub mod process;
pub mod tools;

pub use command::CommandSpec;
pub use process::CommandRunner;
pub use tools::ToolAvailability;
