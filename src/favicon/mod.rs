//! Site icon resolution.
//!
//! Given an arbitrary page URL, discover icon URLs for the page's site:
//! - one candidate declared by the origin's HTML document
//! - one candidate at the conventional `/favicon.ico` path
//!
//! Candidates are only returned after a verification fetch proves they
//! serve actual image bytes rather than an HTML login or error page.
//! Discovery failures shrink the answer instead of raising; only an
//! unparsable input URL is an error.

mod document;
mod normalize;
mod origin;
mod probe;

pub use normalize::normalize;
pub use origin::{Origin, ResolveError};

use std::time::Duration;

use reqwest::Client;

/// Default fetch timeout for the document fetch and icon probes.
pub const FETCH_TIMEOUT_SECS: u64 = 60;

/// Resolves usable icon URLs for arbitrary page URLs.
///
/// Wraps a shared HTTP client; cloning is cheap and clones share the
/// client's connection pool.
#[derive(Clone)]
pub struct IconResolver {
    client: Client,
}

impl IconResolver {
    /// Create a resolver with the default user agent and timeout.
    pub fn new() -> Self {
        Self::with_options(
            &format!("cardstock/{}", env!("CARGO_PKG_VERSION")),
            Duration::from_secs(FETCH_TIMEOUT_SECS),
        )
    }

    /// Create a resolver with a custom user agent and fetch timeout.
    pub fn with_options(user_agent: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Resolve icon candidates for a page URL.
    ///
    /// Returns up to two verified icon URLs: the one declared by the
    /// origin's HTML document first, then the `/favicon.ico` probe. The
    /// two discovery paths are independent and may yield the same URL
    /// twice; both entries are kept so callers see every candidate.
    pub async fn card_icons(&self, url: &str) -> Result<Vec<String>, ResolveError> {
        let origin = Origin::parse(url)?.to_string();

        let mut icons = Vec::new();
        if let Some(icon) = document::from_document(&self.client, &origin).await {
            icons.push(icon);
        }
        if let Some(icon) = probe::verify(&self.client, &format!("{origin}/favicon.ico")).await {
            icons.push(icon);
        }

        Ok(icons)
    }
}

impl Default for IconResolver {
    fn default() -> Self {
        Self::new()
    }
}
