//! # flatdeck-core - Core Domain Types
//!
//! Foundation crate for flatdeck. Provides the panel console types, the
//! command event definitions, error handling, and the logging bootstrap.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`ConsoleLine`] - One line of panel console text with kind and timestamp
//! - [`LineKind`] - How a console line should be presented
//! - [`PanelPhase`] - Panel state machine phase (Idle or Running)
//!
//! ### Events (`events`)
//! - [`CommandEvent`] - Notifications emitted by a running external command
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use flatdeck_core::prelude::*;
//! ```

pub mod error;
pub mod events;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all flatdeck crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use events::CommandEvent;
pub use types::{ConsoleLine, LineKind, PanelPhase};
