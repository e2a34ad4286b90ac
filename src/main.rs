//! flatdeck - A terminal shell for browsing and installing Flatpak applications
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use clap::Parser;
use flatdeck_app::config::{self, Overrides};

/// flatdeck - A terminal shell for browsing and installing Flatpak applications
#[derive(Parser, Debug)]
#[command(name = "flatdeck")]
#[command(
    about = "Browse Flathub, install apps by ID, and bootstrap the Flatpak tooling",
    long_about = None
)]
struct Args {
    /// Software catalog URL for the Browse panel
    #[arg(long, value_name = "URL")]
    catalog_url: Option<String>,

    /// Flatpak remote name used for installs and registered by setup
    #[arg(long, value_name = "NAME")]
    remote: Option<String>,

    /// Manifest URL registered by the Setup panel
    #[arg(long, value_name = "URL")]
    remote_url: Option<String>,

    /// Flatpak binary to invoke
    #[arg(long, value_name = "BIN")]
    flatpak_bin: Option<String>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    if let Err(e) = flatdeck_core::logging::init() {
        // A read-only home dir shouldn't keep the shell from starting
        eprintln!("⚠️  File logging disabled: {}", e);
    }

    let settings = config::load().with_overrides(Overrides {
        catalog_url: args.catalog_url,
        remote: args.remote,
        remote_url: args.remote_url,
        flatpak_bin: args.flatpak_bin,
    });
    tracing::info!(
        "Using remote '{}' via '{}'",
        settings.flatpak.remote,
        settings.flatpak.bin
    );

    flatdeck_tui::run(settings).await?;
    Ok(())
}
