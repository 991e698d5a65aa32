//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod glyphs;
mod icons;
mod serve;
mod store;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::load_settings;

#[derive(Parser)]
#[command(name = "cardstock")]
#[command(about = "Site icon resolution and asset storage for link dashboards")]
#[command(version)]
pub struct Cli {
    /// Data directory for stored assets (overrides config file)
    #[arg(long, short = 'd', global = true, env = "CARDSTOCK_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web API server
    Serve {
        /// Address to bind to: PORT, HOST, or HOST:PORT (default: 127.0.0.1:8040)
        bind: Option<String>,
    },

    /// Resolve icon candidates for a page URL
    Icons {
        /// Page URL to resolve icons for
        url: String,
    },

    /// Store a local file in the asset store
    Store {
        /// File to store
        file: PathBuf,

        /// Asset bucket, e.g. images or modules
        #[arg(short, long, default_value = "images")]
        kind: String,
    },

    /// List the built-in glyph catalog
    Glyphs,
}

/// Parse arguments and dispatch to the selected command.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = load_settings(cli.config.as_deref(), cli.data_dir.as_deref()).await?;

    match cli.command {
        Commands::Serve { bind } => serve::cmd_serve(&settings, bind.as_deref()).await,
        Commands::Icons { url } => icons::cmd_icons(&settings, &url).await,
        Commands::Store { file, kind } => store::cmd_store(&settings, &file, &kind),
        Commands::Glyphs => glyphs::cmd_glyphs(),
    }
}
