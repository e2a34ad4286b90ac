//! Settings parser for flatdeck/config.toml

use std::path::{Path, PathBuf};

use url::Url;

use super::types::Settings;
use flatdeck_core::prelude::*;

pub const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "flatdeck";

/// The user-level config path, if a config directory exists on this platform
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from the user config file, falling back to defaults.
///
/// Parse or validation problems never abort startup; the offending values
/// are replaced by defaults and a warning is logged.
pub fn load() -> Settings {
    match config_path() {
        Some(path) => load_from(&path),
        None => Settings::default(),
    }
}

/// Load settings from a specific file path
pub fn load_from(path: &Path) -> Settings {
    match std::fs::read_to_string(path) {
        Ok(raw) => parse(&raw, path),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Settings::default(),
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            Settings::default()
        }
    }
}

fn parse(raw: &str, path: &Path) -> Settings {
    match toml::from_str::<Settings>(raw) {
        Ok(settings) => validate(settings),
        Err(e) => {
            warn!("Invalid config {}: {}", path.display(), e);
            Settings::default()
        }
    }
}

/// Replace malformed URL fields with their defaults
fn validate(mut settings: Settings) -> Settings {
    let defaults = Settings::default();

    if Url::parse(&settings.catalog.url).is_err() {
        warn!(
            "Invalid catalog.url '{}', using default",
            settings.catalog.url
        );
        settings.catalog.url = defaults.catalog.url;
    }

    if Url::parse(&settings.flatpak.remote_url).is_err() {
        warn!(
            "Invalid flatpak.remote_url '{}', using default",
            settings.flatpak.remote_url
        );
        settings.flatpak.remote_url = defaults.flatpak.remote_url;
    }

    settings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_from(&dir.path().join("nope.toml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let (_dir, path) = write_config(
            r#"
            [flatpak]
            remote = "flathub-beta"
            "#,
        );
        let settings = load_from(&path);
        assert_eq!(settings.flatpak.remote, "flathub-beta");
        assert_eq!(settings.flatpak.bin, "flatpak");
        assert_eq!(settings.catalog.url, "https://flathub.org");
    }

    #[test]
    fn test_full_file_parses() {
        let (_dir, path) = write_config(
            r#"
            [catalog]
            url = "https://beta.flathub.org"

            [flatpak]
            bin = "/opt/flatpak/bin/flatpak"
            remote = "beta"
            remote_url = "https://beta.flathub.org/repo/flathub-beta.flatpakrepo"

            [setup]
            install_command = ["doas", "pkg", "install", "flatpak"]
            "#,
        );
        let settings = load_from(&path);
        assert_eq!(settings.catalog.url, "https://beta.flathub.org");
        assert_eq!(settings.flatpak.bin, "/opt/flatpak/bin/flatpak");
        let setup = settings.setup_install_spec().unwrap();
        assert_eq!(setup.program, "doas");
    }

    #[test]
    fn test_malformed_toml_yields_defaults() {
        let (_dir, path) = write_config("this is not toml [");
        assert_eq!(load_from(&path), Settings::default());
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let (_dir, path) = write_config(
            r#"
            [catalog]
            url = "https://flathub.org"
            colour = "mauve"
            "#,
        );
        // deny_unknown_fields makes this a parse error, so defaults win
        assert_eq!(load_from(&path), Settings::default());
    }

    #[test]
    fn test_invalid_urls_fall_back_to_defaults() {
        let (_dir, path) = write_config(
            r#"
            [catalog]
            url = "not a url"

            [flatpak]
            remote = "kept"
            remote_url = "also not a url"
            "#,
        );
        let settings = load_from(&path);
        assert_eq!(settings.catalog.url, "https://flathub.org");
        assert_eq!(
            settings.flatpak.remote_url,
            "https://flathub.org/repo/flathub.flatpakrepo"
        );
        // Non-URL fields from the same file survive validation
        assert_eq!(settings.flatpak.remote, "kept");
    }

    #[test]
    fn test_config_path_ends_with_expected_components() {
        if let Some(path) = config_path() {
            assert!(path.ends_with("flatdeck/config.toml"));
        }
    }
}
