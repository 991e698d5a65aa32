//! Candidate icon verification.
//!
//! Sites routinely answer missing or auth-gated icon paths with a 200 HTML
//! page instead of an error status, so the status line alone proves
//! nothing: the body is fetched and sniffed before a candidate is
//! accepted. Every failure mode here collapses to `None`, without logging.

use reqwest::{Client, Response};

use crate::utils::{is_html, is_html_content_type};

/// Fetch a URL, swallowing every failure into `None`.
///
/// `None` covers connection errors, timeouts, and non-2xx statuses. Both
/// the document fetch and the icon probes route through here so the
/// swallow-everything policy lives in one place.
pub(crate) async fn fetch_ok(client: &Client, url: &str) -> Option<Response> {
    match client.get(url).send().await {
        Ok(response) if response.status().is_success() => Some(response),
        _ => None,
    }
}

/// Verify that a URL serves usable icon bytes.
///
/// Returns the URL unchanged when the fetch yields a non-empty body that
/// is not HTML, `None` otherwise. The declared content type is checked
/// first, but bodies are sniffed regardless since error pages frequently
/// ship with image paths and HTML payloads.
pub(crate) async fn verify(client: &Client, url: &str) -> Option<String> {
    let response = fetch_ok(client, url).await?;

    let declared_html = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(is_html_content_type);

    let body = response.bytes().await.ok()?;
    if body.is_empty() || declared_html || is_html(&body) {
        return None;
    }

    Some(url.to_string())
}
