#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;

use agency_core::AccessConfig;
use anyhow::{Context, Result};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Agency Access - two-agent access code screen
#[derive(Parser, Debug)]
#[command(name = "agency-access-desktop")]
#[command(about = "Secret agency access screen - two agents, one code")]
struct Args {
    /// JSON configuration file (secret, message, agent names, timing)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Milliseconds between revealed characters
    #[arg(long)]
    reveal_interval_ms: Option<u64>,

    /// Start with the secret code panel open
    #[arg(long)]
    show_secret: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Build the configuration: file (or defaults), then command line overrides
fn load_config(args: &Args) -> Result<AccessConfig> {
    let mut config = match &args.config {
        Some(path) => AccessConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => AccessConfig::default(),
    };

    if let Some(ms) = args.reveal_interval_ms {
        config.reveal_interval_ms = ms;
    }
    if args.show_secret {
        config.show_secret = true;
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let access_config = load_config(&args)?;

    tracing::info!(
        config = ?args.config,
        reveal_interval_ms = access_config.reveal_interval_ms,
        left_agent = %access_config.agents.left,
        right_agent = %access_config.agents.right,
        "Starting access screen"
    );

    // Narrow window: one glass card, centered
    let window_width = 760.0;
    let window_height = 820.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Agência Secreta - Operação Noite Feliz")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(access_config)
        .launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_without_arguments() {
        let args = Args::try_parse_from(["agency-access-desktop"]).unwrap();
        let config = load_config(&args).unwrap();
        assert_eq!(config, AccessConfig::default());
    }

    #[test]
    fn command_line_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "reveal_interval_ms": 50, "show_secret": false }}"#).unwrap();
        let path = file.path().to_str().unwrap();

        let args = Args::try_parse_from([
            "agency-access-desktop",
            "--config",
            path,
            "--reveal-interval-ms",
            "10",
            "--show-secret",
        ])
        .unwrap();
        let config = load_config(&args).unwrap();
        assert_eq!(config.reveal_interval_ms, 10);
        assert!(config.show_secret);
    }

    #[test]
    fn zero_interval_is_rejected() {
        let args =
            Args::try_parse_from(["agency-access-desktop", "--reveal-interval-ms", "0"]).unwrap();
        assert!(load_config(&args).is_err());
    }

    #[test]
    fn verbosity_counts_flags() {
        let args = Args::try_parse_from(["agency-access-desktop", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
    }
}
