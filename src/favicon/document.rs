//! Icon extraction from the origin's HTML document.

use reqwest::Client;
use scraper::{Html, Selector};

use super::{normalize, probe};

/// Link elements among the head's direct children, in document order.
/// A declaration is any of these whose `rel` contains `icon`, so
/// `rel="shortcut icon"` and `rel="apple-touch-icon"` both count.
const LINK_SELECTOR: &str = "head > link";

/// Discover an icon by reading the origin's root document.
///
/// Fetches the origin page, takes the first icon link declaration,
/// normalizes its `href` against the origin, and verifies the result.
/// Every failure along the way (unreachable origin, no declaration,
/// unusable target) yields `None`.
pub(crate) async fn from_document(client: &Client, origin: &str) -> Option<String> {
    let response = probe::fetch_ok(client, origin).await?;
    let body = response.text().await.ok()?;

    let href = first_icon_href(&body)?;
    probe::verify(client, &normalize(origin, &href)).await
}

/// Pull the first declared icon reference out of an HTML document.
///
/// Kept synchronous so the parsed document (which is not `Send`) never
/// lives across an await point.
fn first_icon_href(body: &str) -> Option<String> {
    let selector = Selector::parse(LINK_SELECTOR).ok()?;
    let document = Html::parse_document(body);

    document
        .select(&selector)
        .find(|link| {
            link.value()
                .attr("rel")
                .is_some_and(|rel| rel.contains("icon"))
        })
        .and_then(|link| link.value().attr("href"))
        .map(|href| href.to_string())
}
