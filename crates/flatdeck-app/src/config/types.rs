//! Settings types and the command invocations they describe

use serde::Deserialize;

use flatdeck_runner::CommandSpec;

/// Top-level settings, deserialized from config.toml
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub catalog: CatalogSettings,
    pub flatpak: FlatpakSettings,
    pub setup: SetupSettings,
}

/// `[catalog]` section
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogSettings {
    /// Address the Browse panel opens in the system browser
    pub url: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            url: "https://flathub.org".to_string(),
        }
    }
}

/// `[flatpak]` section
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FlatpakSettings {
    /// Binary invoked for installs and remote registration
    pub bin: String,
    /// Remote name used for installs and registered by setup
    pub remote: String,
    /// Manifest URL registered by setup
    pub remote_url: String,
}

impl Default for FlatpakSettings {
    fn default() -> Self {
        Self {
            bin: "flatpak".to_string(),
            remote: "flathub".to_string(),
            remote_url: "https://flathub.org/repo/flathub.flatpakrepo".to_string(),
        }
    }
}

/// `[setup]` section
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SetupSettings {
    /// Privileged command vector that installs the flatpak tooling itself
    pub install_command: Vec<String>,
}

impl Default for SetupSettings {
    fn default() -> Self {
        Self {
            install_command: ["sudo", "apt", "install", "-y", "flatpak"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Values from the command line that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub catalog_url: Option<String>,
    pub remote: Option<String>,
    pub remote_url: Option<String>,
    pub flatpak_bin: Option<String>,
}

impl Settings {
    /// Apply CLI overrides on top of file/default values
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(url) = overrides.catalog_url {
            self.catalog.url = url;
        }
        if let Some(remote) = overrides.remote {
            self.flatpak.remote = remote;
        }
        if let Some(url) = overrides.remote_url {
            self.flatpak.remote_url = url;
        }
        if let Some(bin) = overrides.flatpak_bin {
            self.flatpak.bin = bin;
        }
        self
    }

    // ─────────────────────────────────────────────────────────
    // Command builders
    // ─────────────────────────────────────────────────────────

    /// `flatpak install -y <remote> <app-id>`
    pub fn install_spec(&self, app_id: &str) -> CommandSpec {
        CommandSpec::new(
            &self.flatpak.bin,
            ["install", "-y", self.flatpak.remote.as_str(), app_id],
        )
    }

    /// `flatpak remote-add --if-not-exists <remote> <remote-url>`
    pub fn remote_add_spec(&self) -> CommandSpec {
        CommandSpec::new(
            &self.flatpak.bin,
            [
                "remote-add",
                "--if-not-exists",
                self.flatpak.remote.as_str(),
                self.flatpak.remote_url.as_str(),
            ],
        )
    }

    /// The privileged system install of the flatpak tooling, or `None`
    /// when the configured vector is empty.
    pub fn setup_install_spec(&self) -> Option<CommandSpec> {
        CommandSpec::from_argv(&self.setup.install_command)
    }
}
