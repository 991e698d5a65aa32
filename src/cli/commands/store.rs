//! Asset store command.

use std::path::Path;

use anyhow::Context;
use console::style;

use crate::config::Settings;
use crate::storage::Storage;

/// Store a local file in the asset store and print its public path.
pub fn cmd_store(settings: &Settings, file: &Path, kind: &str) -> anyhow::Result<()> {
    settings.ensure_directories()?;

    let bytes = std::fs::read(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let filename = file
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| anyhow::anyhow!("{} has no usable file name", file.display()))?;

    let storage = Storage::new(&settings.data_dir);
    let path = storage.store(&bytes, filename, kind)?;

    println!("{} Stored as {}", style("✓").green(), path);
    println!("  ({} bytes under {})", bytes.len(), settings.data_dir.display());
    Ok(())
}
