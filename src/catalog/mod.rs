//! Built-in glyph catalog for the card icon picker.
//!
//! The catalog is the list of glyph names defined by the bundled SVG icon
//! font. It is parsed once at startup and handed around as an immutable
//! value behind an `Arc`; a malformed asset is fatal before the process
//! starts serving anything.

use regex::Regex;
use thiserror::Error;

/// Bundled icon font the catalog is parsed from.
const GLYPH_SVG: &str = include_str!("glyphs.svg");

/// Glyph name attributes inside the font block. A full XML parser buys
/// nothing here; the asset is machine-generated with one glyph per line.
const GLYPH_NAME_PATTERN: &str = r#"<glyph[^>]*\bglyph-name="([^"]+)""#;

/// Errors raised while loading the glyph catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Glyph asset is malformed: {0}")]
    Malformed(&'static str),
}

/// Immutable list of glyph names from the bundled icon font.
#[derive(Debug, Clone)]
pub struct GlyphCatalog {
    names: Vec<String>,
}

impl GlyphCatalog {
    /// Parse the bundled icon font.
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_svg(GLYPH_SVG)
    }

    /// Parse glyph names out of an SVG font document.
    ///
    /// Names come from `glyph-name` attributes on `<glyph>` elements;
    /// glyphs without one (the blank space glyph, typically) are skipped.
    fn from_svg(svg: &str) -> Result<Self, CatalogError> {
        if !svg.contains("<font") {
            return Err(CatalogError::Malformed("no font block"));
        }

        let pattern = Regex::new(GLYPH_NAME_PATTERN).expect("glyph name pattern compiles");
        let names: Vec<String> = pattern
            .captures_iter(svg)
            .map(|caps| caps[1].to_string())
            .collect();

        if names.is_empty() {
            return Err(CatalogError::Malformed("no named glyphs"));
        }

        Ok(Self { names })
    }

    /// All glyph names, in asset order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of glyphs in the catalog.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the catalog is empty. Never true for a loaded catalog.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
