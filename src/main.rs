//! Cardstock - site icon resolution and asset storage for link dashboards.
//!
//! A service that discovers usable icons for arbitrary page URLs, stores
//! uploaded card assets, and exposes the bundled glyph catalog.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (before anything else)
    let _ = dotenvy::dotenv();

    // Initialize logging based on verbosity
    let default_filter = if cardstock::cli::is_verbose() {
        "cardstock=info"
    } else {
        "cardstock=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Run CLI
    cardstock::cli::run().await
}
