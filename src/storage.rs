//! Storage for uploaded card assets on disk.
//!
//! Uploads land at `/ext-resources/{kind}/{YYYYMMDD}/{uuid}.{extension}`
//! relative to the data root. The relative path doubles as the public URL
//! path, so it is what callers get back and what the web server resolves
//! when serving the asset later.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use tempfile::NamedTempFile;
use thiserror::Error;

/// Errors raised while persisting an upload.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Filesystem-backed store for uploaded assets.
#[derive(Debug, Clone)]
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    /// Create a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory uploads are written beneath.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Persist upload bytes under a fresh dated path and return the
    /// relative path.
    ///
    /// The extension is carried over from the client filename; `kind`
    /// buckets assets by purpose (`images`, `modules`, ...). The write
    /// goes through a temporary file in the destination directory and is
    /// renamed into place, so a failure never leaves a partial file at
    /// the returned path.
    pub fn store(&self, bytes: &[u8], filename: &str, kind: &str) -> Result<String, StorageError> {
        let relative = upload_relative_path(kind, filename);
        let dest = self.resolve(&relative);
        let parent = dest.parent().unwrap_or(&self.root);

        std::fs::create_dir_all(parent).map_err(|e| StorageError::CreateDir {
            path: parent.to_path_buf(),
            source: e,
        })?;

        let mut tmp = NamedTempFile::new_in(parent).map_err(|e| StorageError::Write {
            path: dest.clone(),
            source: e,
        })?;
        tmp.write_all(bytes).map_err(|e| StorageError::Write {
            path: dest.clone(),
            source: e,
        })?;
        tmp.persist(&dest).map_err(|e| StorageError::Write {
            path: dest.clone(),
            source: e.error,
        })?;

        Ok(relative)
    }

    /// Resolve a stored relative path against the root.
    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.root.join(relative.trim_start_matches('/'))
    }
}

/// Construct the relative storage path for an upload.
///
/// `/ext-resources/{kind}/{YYYYMMDD}/{uuid}.{extension}` with a hyphenless
/// UUID; the extension comes from the client filename and may be empty.
fn upload_relative_path(kind: &str, filename: &str) -> String {
    let date = Local::now().format("%Y%m%d");
    let id = uuid::Uuid::new_v4().simple();
    let extension = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();

    format!("/ext-resources/{kind}/{date}/{id}.{extension}")
}
