//! Mastering Frontend - the landing page and docs navigator in a terminal
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{eyre, Result, WrapErr};
use mastering_frontend::{logging, run_with_site, RunOverrides};
use mfront_app::config;
use mfront_core::{ContentMetadataTree, ThemePreference};

/// Mastering Frontend - explore modern frontend topics from the terminal
#[derive(Parser, Debug)]
#[command(name = "mfront")]
#[command(
    about = "Landing page and docs navigator for Mastering Modern Frontend",
    long_about = None
)]
struct Args {
    /// Site directory (holds .mfront/config.toml and content/)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Theme preference for this run: light, dark or system
    #[arg(long, value_name = "THEME")]
    theme: Option<ThemePreference>,

    /// Page to open at startup, e.g. /docs/wasm
    #[arg(long, value_name = "ROUTE")]
    route: Option<String>,

    /// Print the content tree as JSON and exit
    #[arg(long)]
    print_tree: bool,

    /// Write a default .mfront/config.toml and exit
    #[arg(long)]
    init: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if let Err(e) = logging::init() {
        eprintln!("Logging disabled: {}", e);
    }

    let site_dir = args
        .path
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    if !site_dir.is_dir() {
        return Err(eyre!("Not a directory: {}", site_dir.display()));
    }

    if args.init {
        config::init_config_dir(&site_dir).wrap_err("Failed to initialise .mfront/")?;
        println!("Wrote {}", config::config_path(&site_dir).display());
        return Ok(());
    }

    if args.print_tree {
        let tree = ContentMetadataTree::load(&site_dir).wrap_err("Failed to load content tree")?;
        println!("{}", serde_json::to_string_pretty(&tree)?);
        return Ok(());
    }

    let overrides = RunOverrides {
        theme: args.theme,
        route: args.route,
    };
    tracing::info!("Starting Mastering Frontend in {}", site_dir.display());
    run_with_site(&site_dir, overrides)
        .await
        .wrap_err("Mastering Frontend exited with an error")
}
