//! Glyph catalog listing command.

use console::style;

use crate::catalog::GlyphCatalog;

/// Print every glyph name in the built-in catalog.
pub fn cmd_glyphs() -> anyhow::Result<()> {
    let catalog = GlyphCatalog::load()?;

    for name in catalog.names() {
        println!("{}", name);
    }
    println!("{} {} glyphs", style("→").cyan(), catalog.len());
    Ok(())
}
