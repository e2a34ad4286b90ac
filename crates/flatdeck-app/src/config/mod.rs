//! Configuration loading for flatdeck
//!
//! Settings live in `<config-dir>/flatdeck/config.toml`. Every key is
//! optional; a missing file means defaults. The file is never written.

mod settings;
mod types;

pub use settings::{config_path, load, load_from, CONFIG_FILENAME};
pub use types::{CatalogSettings, FlatpakSettings, Overrides, Settings, SetupSettings};
