//! Web server exposing the card icon API.
//!
//! Provides the endpoints a dashboard frontend calls:
//! - Icon resolution for card URLs
//! - Multipart upload of card assets
//! - The built-in glyph catalog
//! - Serving previously uploaded assets back
//!
//! All handlers are thin wrappers over the library types carried in
//! [`AppState`].

mod handlers;
mod routes;

pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use crate::catalog::GlyphCatalog;
use crate::config::Settings;
use crate::favicon::IconResolver;
use crate::storage::Storage;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub resolver: IconResolver,
    pub storage: Storage,
    pub catalog: Arc<GlyphCatalog>,
}

impl AppState {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let catalog = Arc::new(GlyphCatalog::load()?);

        Ok(Self {
            resolver: IconResolver::with_options(
                &settings.user_agent,
                Duration::from_secs(settings.request_timeout),
            ),
            storage: Storage::new(&settings.data_dir),
            catalog,
        })
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings)?;
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
