#![allow(non_snake_case)]

mod app;
pub mod context;
mod theme;

use std::path::PathBuf;

use anyhow::Context;
use biolink_core::{
    CardOptions, HostConfig, SecondaryPanel, StaticPanelConfig, TiltOrigin, CONFIG_FILE_NAME,
};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Biolink - hover-reactive profile card
#[derive(Parser, Debug)]
#[command(name = "biolink-desktop")]
#[command(about = "Biolink - a single tilting profile card")]
struct Args {
    /// Host config file (defaults to ./biolink.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Profile image URL, overrides the config file
    #[arg(short, long)]
    profile_image_url: Option<String>,

    /// Show the static label panel instead of simulated presence
    #[arg(long)]
    static_panel: bool,

    /// Pivot the tilt on the card's measured center instead of (150, 200)
    #[arg(long)]
    measured_tilt: bool,

    /// Print the resolved card options and exit without opening a window
    #[arg(long)]
    check: bool,
}

impl Args {
    fn load_host_config(&self) -> anyhow::Result<HostConfig> {
        match &self.config {
            Some(path) => HostConfig::load(path)
                .with_context(|| format!("failed to load config {}", path.display())),
            None => HostConfig::load_or_default(CONFIG_FILE_NAME)
                .with_context(|| format!("failed to load {}", CONFIG_FILE_NAME)),
        }
    }

    /// Config file options with command line overrides applied
    fn card_options(&self, host: &HostConfig) -> CardOptions {
        let mut options = host.card_options();
        if let Some(ref url) = self.profile_image_url {
            options.profile_image_url = url.clone();
        }
        if self.static_panel && matches!(options.secondary_panel, SecondaryPanel::Simulated(_)) {
            options.secondary_panel = SecondaryPanel::Static(StaticPanelConfig::default());
        }
        if self.measured_tilt {
            options.tilt_origin = TiltOrigin::Measured;
        }
        options
    }
}

/// Image URLs the card will load
fn image_urls(options: &CardOptions) -> Vec<&str> {
    let secondary = match &options.secondary_panel {
        SecondaryPanel::Static(cfg) => cfg.image_url.as_str(),
        SecondaryPanel::Simulated(cfg) => cfg.initial.avatar_url.as_str(),
    };
    vec![options.profile_image_url.as_str(), secondary]
}

fn print_summary(host: &HostConfig, options: &CardOptions) {
    println!("Biolink card");
    println!("  profile_image_url: {}", options.profile_image_url);
    match &options.secondary_panel {
        SecondaryPanel::Static(cfg) => {
            println!("  secondary_panel: static ({}, {})", cfg.label, cfg.image_url)
        }
        SecondaryPanel::Simulated(cfg) => {
            println!("  secondary_panel: simulated (every {}s)", cfg.period.as_secs())
        }
    }
    println!("  tilt_origin: {:?}", options.tilt_origin);
    println!("  image domains: {}", host.images.domains.join(", "));
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let host = args.load_host_config()?;
    let options = args.card_options(&host);

    // Disallowed hosts only warn; the image just fails to load
    for url in image_urls(&options) {
        host.images.check(url);
    }

    if args.check {
        print_summary(&host, &options);
        return Ok(());
    }

    tracing::info!(
        strict_mode = host.strict_mode,
        tilt_origin = ?options.tilt_origin,
        "starting biolink card"
    );

    context::set_card_options(options);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Biolink")
            .with_inner_size(dioxus::desktop::LogicalSize::new(520.0, 760.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
