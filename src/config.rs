//! Configuration management.
//!
//! Settings are resolved in layers: compiled defaults, then an optional
//! config file (TOML, YAML, or JSON), then command-line overrides. The
//! config file is either passed explicitly or discovered in the working
//! directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default bind address for the web server.
pub const DEFAULT_BIND: &str = "127.0.0.1:8040";

/// Config filenames probed in the working directory, in order.
const CONFIG_FILENAMES: &[&str] = &[
    "cardstock.toml",
    "cardstock.yaml",
    "cardstock.yml",
    "cardstock.json",
];

/// Application settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base data directory; uploaded assets are written beneath it.
    pub data_dir: PathBuf,
    /// User agent for HTTP requests.
    pub user_agent: String,
    /// Request timeout in seconds for icon resolution fetches.
    pub request_timeout: u64,
    /// Bind address for the web server.
    pub bind: String,
}

impl Default for Settings {
    fn default() -> Self {
        // Default to ~/.local/share/cardstock (or platform equivalent)
        // Falls back gracefully: data dir -> home dir -> current dir
        let data_dir = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cardstock");

        Self {
            data_dir,
            user_agent: format!("cardstock/{}", env!("CARGO_PKG_VERSION")),
            request_timeout: 60,
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

impl Settings {
    /// Create settings with a custom data directory.
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            ..Default::default()
        }
    }

    /// Ensure the data directory exists.
    pub fn ensure_directories(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.data_dir).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!(
                    "Failed to create data directory '{}': {}",
                    self.data_dir.display(),
                    e
                ),
            )
        })
    }
}

/// Configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Data directory path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<String>,
    /// User agent string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<u64>,
    /// Bind address for the web server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind: Option<String>,
    /// Path to the config file this was loaded from (not serialized).
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a specific file path.
    /// Supports JSON, TOML, YAML, and other formats based on file extension.
    pub async fn load_from_path(path: &Path) -> Result<Self, String> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

        let mut config: Config = match ext {
            "toml" => toml::from_str(&contents)
                .map_err(|e| format!("Failed to parse TOML config: {}", e))?,
            "yaml" | "yml" => serde_yaml::from_str(&contents)
                .map_err(|e| format!("Failed to parse YAML config: {}", e))?,
            _ => serde_json::from_str(&contents)
                .map_err(|e| format!("Failed to parse JSON config: {}", e))?,
        };

        config.source_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Get the base directory for resolving relative paths.
    /// Returns the config file's parent directory if available, otherwise None.
    pub fn base_dir(&self) -> Option<PathBuf> {
        self.source_path
            .as_ref()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    /// Resolve a path that may be relative to the config file.
    /// - Absolute paths are returned as-is
    /// - Paths starting with ~ are expanded
    /// - Relative paths are resolved relative to `base_dir`
    pub fn resolve_path(&self, path_str: &str, base_dir: &Path) -> PathBuf {
        let expanded = shellexpand::tilde(path_str);
        let path = Path::new(expanded.as_ref());

        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base_dir.join(path)
        }
    }

    /// Apply configuration to settings.
    /// `base_dir` is used to resolve relative paths (typically config file dir or CWD).
    pub fn apply_to_settings(&self, settings: &mut Settings, base_dir: &Path) {
        if let Some(ref data_dir) = self.data_dir {
            settings.data_dir = self.resolve_path(data_dir, base_dir);
        }
        if let Some(ref user_agent) = self.user_agent {
            settings.user_agent = user_agent.clone();
        }
        if let Some(timeout) = self.request_timeout {
            settings.request_timeout = timeout;
        }
        if let Some(ref bind) = self.bind {
            settings.bind = bind.clone();
        }
    }
}

/// Resolve effective settings: defaults, then config file, then overrides.
///
/// An explicitly passed config path must load; a discovered one that fails
/// to parse is skipped with a warning.
pub async fn load_settings(
    config_path: Option<&Path>,
    data_dir: Option<&Path>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    let config = match config_path {
        Some(path) => Some(
            Config::load_from_path(path)
                .await
                .map_err(|e| anyhow::anyhow!(e))?,
        ),
        None => discover_config().await,
    };

    if let Some(config) = config {
        let base_dir = config.base_dir().unwrap_or_else(|| PathBuf::from("."));
        config.apply_to_settings(&mut settings, &base_dir);
    }

    if let Some(dir) = data_dir {
        settings.data_dir = dir.to_path_buf();
    }

    Ok(settings)
}

/// Look for a config file in the working directory.
async fn discover_config() -> Option<Config> {
    for name in CONFIG_FILENAMES {
        let path = Path::new(name);
        if path.exists() {
            match Config::load_from_path(path).await {
                Ok(config) => return Some(config),
                Err(e) => tracing::warn!("Ignoring config file {}: {}", name, e),
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn load_toml_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cardstock.toml");
        std::fs::write(&path, "data_dir = \"assets\"\nrequest_timeout = 10\n").unwrap();

        let config = Config::load_from_path(&path).await.unwrap();
        assert_eq!(config.data_dir.as_deref(), Some("assets"));
        assert_eq!(config.request_timeout, Some(10));
        assert_eq!(config.source_path.as_deref(), Some(path.as_path()));
    }

    #[tokio::test]
    async fn load_yaml_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cardstock.yaml");
        std::fs::write(&path, "bind: 0.0.0.0:9000\nuser_agent: test-agent\n").unwrap();

        let config = Config::load_from_path(&path).await.unwrap();
        assert_eq!(config.bind.as_deref(), Some("0.0.0.0:9000"));
        assert_eq!(config.user_agent.as_deref(), Some("test-agent"));
    }

    #[tokio::test]
    async fn malformed_config_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cardstock.toml");
        std::fs::write(&path, "data_dir = [broken\n").unwrap();

        assert!(Config::load_from_path(&path).await.is_err());
    }

    #[test]
    fn relative_data_dir_resolves_against_config_location() {
        let config = Config {
            data_dir: Some("assets".to_string()),
            source_path: Some(PathBuf::from("/etc/cardstock/cardstock.toml")),
            ..Default::default()
        };

        let mut settings = Settings::default();
        let base_dir = config.base_dir().unwrap();
        config.apply_to_settings(&mut settings, &base_dir);
        assert_eq!(settings.data_dir, PathBuf::from("/etc/cardstock/assets"));
    }

    #[test]
    fn absolute_data_dir_is_kept() {
        let config = Config {
            data_dir: Some("/var/lib/cardstock".to_string()),
            ..Default::default()
        };

        let mut settings = Settings::default();
        config.apply_to_settings(&mut settings, Path::new("."));
        assert_eq!(settings.data_dir, PathBuf::from("/var/lib/cardstock"));
    }
}
