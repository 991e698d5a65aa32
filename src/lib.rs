//! Cardstock - site icon resolution and asset storage for link dashboards.
//!
//! The crate answers three questions a card-based dashboard keeps asking:
//! - Which icon should a card pointing at an arbitrary URL show?
//! - Where do user-uploaded card assets live?
//! - Which built-in glyphs can a card fall back to?
//!
//! Icon resolution is best-effort: candidate URLs are fetched and verified
//! before being offered, and anything unreachable or fake degrades to an
//! empty answer rather than an error.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod favicon;
pub mod server;
pub mod storage;
pub mod utils;

pub use catalog::{CatalogError, GlyphCatalog};
pub use favicon::{IconResolver, Origin, ResolveError};
pub use storage::{Storage, StorageError};
