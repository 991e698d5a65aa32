//! End-to-end icon resolution against local fixture sites.
//!
//! Each test spins up a throwaway web server on an ephemeral port and
//! points the resolver at it, covering the discovery branches without
//! touching the real network.

use std::net::SocketAddr;
use std::time::Duration;

use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;

use cardstock::IconResolver;

/// Leading bytes of a real PNG; enough for content sniffing to see a
/// non-HTML body.
const PNG_BYTES: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52,
];

/// Leading bytes of an ICO file.
const ICO_BYTES: &[u8] = &[0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x10, 0x10];

fn resolver() -> IconResolver {
    IconResolver::with_options("cardstock-tests", Duration::from_secs(5))
}

async fn spawn_site(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn png() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/png")], PNG_BYTES)
}

#[tokio::test]
async fn declared_icon_wins_and_fake_favicon_is_dropped() {
    // The page declares an icon; /favicon.ico answers 200 with an HTML
    // login page that must not survive verification
    let app = Router::new()
        .route(
            "/",
            get(|| async {
                Html(
                    r#"<html><head>
                        <link rel="stylesheet" href="/style.css">
                        <link rel="icon" href="/assets/icon.png">
                    </head><body>welcome</body></html>"#,
                )
            }),
        )
        .route("/assets/icon.png", get(png))
        .route(
            "/favicon.ico",
            get(|| async {
                Html("<html><head><title>Sign in</title></head><body>login required</body></html>")
            }),
        );
    let addr = spawn_site(app).await;

    let icons = resolver()
        .card_icons(&format!("http://{addr}/deep/page?tab=2"))
        .await
        .unwrap();

    assert_eq!(icons, vec![format!("http://{addr}/assets/icon.png")]);
}

#[tokio::test]
async fn favicon_fallback_when_nothing_is_declared() {
    let app = Router::new()
        .route(
            "/",
            get(|| async { Html("<html><head><title>plain</title></head><body></body></html>") }),
        )
        .route(
            "/favicon.ico",
            get(|| async { ([(header::CONTENT_TYPE, "image/x-icon")], ICO_BYTES) }),
        );
    let addr = spawn_site(app).await;

    let icons = resolver()
        .card_icons(&format!("http://{addr}/"))
        .await
        .unwrap();

    assert_eq!(icons, vec![format!("http://{addr}/favicon.ico")]);
}

#[tokio::test]
async fn both_branches_may_return_the_same_url() {
    // The declared icon is /favicon.ico itself; both discovery paths
    // verify it independently and the duplicate is kept
    let app = Router::new()
        .route(
            "/",
            get(|| async {
                Html(r#"<html><head><link rel="icon" href="/favicon.ico"></head></html>"#)
            }),
        )
        .route("/favicon.ico", get(png));
    let addr = spawn_site(app).await;

    let icons = resolver()
        .card_icons(&format!("http://{addr}/page"))
        .await
        .unwrap();

    let expected = format!("http://{addr}/favicon.ico");
    assert_eq!(icons, vec![expected.clone(), expected]);
}

#[tokio::test]
async fn bare_relative_href_resolves_against_origin() {
    // href without a leading slash joins the origin, not the page path
    let app = Router::new()
        .route(
            "/",
            get(|| async {
                Html(r#"<html><head><link rel="shortcut icon" href="img/fav.png"></head></html>"#)
            }),
        )
        .route("/img/fav.png", get(png));
    let addr = spawn_site(app).await;

    let icons = resolver()
        .card_icons(&format!("http://{addr}/section/page"))
        .await
        .unwrap();

    assert_eq!(icons, vec![format!("http://{addr}/img/fav.png")]);
}

#[tokio::test]
async fn empty_icon_body_is_rejected() {
    let app = Router::new()
        .route(
            "/",
            get(|| async {
                Html(r#"<html><head><link rel="icon" href="/empty.png"></head></html>"#)
            }),
        )
        .route(
            "/empty.png",
            get(|| async { ([(header::CONTENT_TYPE, "image/png")], Vec::<u8>::new()) }),
        );
    let addr = spawn_site(app).await;

    let icons = resolver()
        .card_icons(&format!("http://{addr}/"))
        .await
        .unwrap();

    assert!(icons.is_empty());
}

#[tokio::test]
async fn apple_touch_icon_counts_as_a_declaration() {
    // rel matching is by containment, so a page declaring only an
    // apple-touch-icon still yields a document-derived result
    let app = Router::new()
        .route(
            "/",
            get(|| async {
                Html(r#"<html><head><link rel="apple-touch-icon" href="/touch.png"></head></html>"#)
            }),
        )
        .route("/touch.png", get(png));
    let addr = spawn_site(app).await;

    let icons = resolver()
        .card_icons(&format!("http://{addr}/"))
        .await
        .unwrap();

    assert_eq!(icons, vec![format!("http://{addr}/touch.png")]);
}

#[tokio::test]
async fn error_status_favicon_is_ignored() {
    let app = Router::new()
        .route(
            "/",
            get(|| async { Html("<html><head></head><body></body></html>") }),
        )
        .route(
            "/favicon.ico",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
    let addr = spawn_site(app).await;

    let icons = resolver()
        .card_icons(&format!("http://{addr}/"))
        .await
        .unwrap();

    assert!(icons.is_empty());
}

#[tokio::test]
async fn unreachable_origin_resolves_to_nothing() {
    // Bind a port, then drop the listener so connections are refused
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let icons = resolver()
        .card_icons(&format!("http://{addr}/page"))
        .await
        .unwrap();

    assert!(icons.is_empty());
}

#[tokio::test]
async fn invalid_input_urls_are_an_error() {
    let resolver = resolver();

    assert!(resolver.card_icons("example.com/page").await.is_err());
    assert!(resolver.card_icons("").await.is_err());
    assert!(resolver.card_icons("data:text/plain,x").await.is_err());
}
