//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Portfolio backend connection
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Base URL the `/api/...` paths are joined onto
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl BackendConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Site timings and thresholds
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SiteConfig {
    #[serde(default = "default_loading_delay")]
    pub loading_delay_ms: u64,

    #[serde(default = "default_contact_reset")]
    pub contact_reset_ms: u64,

    #[serde(default = "default_project_load_delay")]
    pub project_load_delay_ms: u64,

    #[serde(default = "default_cursor_breakpoint")]
    pub cursor_breakpoint_px: f64,

    #[serde(default = "default_scroll_threshold")]
    pub scroll_threshold_px: f64,
}

fn default_loading_delay() -> u64 {
    2000
}

fn default_contact_reset() -> u64 {
    5000
}

fn default_project_load_delay() -> u64 {
    1000
}

fn default_cursor_breakpoint() -> f64 {
    crate::cursor::CURSOR_BREAKPOINT_PX
}

fn default_scroll_threshold() -> f64 {
    crate::navigation::SCROLL_THRESHOLD_PX
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            loading_delay_ms: default_loading_delay(),
            contact_reset_ms: default_contact_reset(),
            project_load_delay_ms: default_project_load_delay(),
            cursor_breakpoint_px: default_cursor_breakpoint(),
            scroll_threshold_px: default_scroll_threshold(),
        }
    }
}

impl SiteConfig {
    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }

    pub fn contact_reset(&self) -> Duration {
        Duration::from_millis(self.contact_reset_ms)
    }

    pub fn project_load_delay(&self) -> Duration {
        Duration::from_millis(self.project_load_delay_ms)
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `pretty` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    #[cfg(feature = "native")]
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("folio").join("config.toml")),
            Some(PathBuf::from("./folio.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply `FOLIO_*` overrides from an arbitrary lookup
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("FOLIO_API_URL") {
            self.backend.base_url = url;
        }
        if let Some(timeout) = lookup("FOLIO_REQUEST_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse() {
                self.backend.request_timeout_secs = secs;
            }
        }

        if let Some(level) = lookup("FOLIO_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("FOLIO_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Folio Configuration
#
# Environment variables override these settings:
# - FOLIO_API_URL
# - FOLIO_REQUEST_TIMEOUT_SECS
# - FOLIO_LOG_LEVEL
# - FOLIO_LOG_FORMAT

[backend]
# Base URL of the portfolio backend (serves /api/contact and /api/messages)
base_url = "http://localhost:5000"

# Request timeout (seconds)
request_timeout_secs = 30

[site]
# Splash screen duration before the shell mounts (ms)
loading_delay_ms = 2000

# How long the contact success banner stays up (ms)
contact_reset_ms = 5000

# Simulated project fetch delay (ms)
project_load_delay_ms = 1000

# Custom cursor only on viewports wider than this (px)
cursor_breakpoint_px = 768

# Scroll offset past which the navigation bar condenses (px)
scroll_threshold_px = 50

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty, json
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.backend.base_url, "http://localhost:5000");
        assert_eq!(config.site.loading_delay(), Duration::from_millis(2000));
        assert_eq!(config.site.contact_reset(), Duration::from_millis(5000));
        assert_eq!(config.site.project_load_delay(), Duration::from_millis(1000));
        assert_eq!(config.site.cursor_breakpoint_px, 768.0);
        assert_eq!(config.site.scroll_threshold_px, 50.0);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[backend]\nbase_url = \"https://api.example.com\"\n\n[site]\ncontact_reset_ms = 100"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.backend.base_url, "https://api.example.com");
        assert_eq!(config.backend.request_timeout_secs, 30);
        assert_eq!(config.site.contact_reset(), Duration::from_millis(100));
        assert_eq!(config.site.loading_delay_ms, 2000);
    }

    #[test]
    fn test_load_errors() {
        let missing = Config::load(Path::new("/nonexistent/folio.toml"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[backend\nbase_url = 1").unwrap();
        assert!(matches!(
            Config::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("FOLIO_API_URL", "http://10.0.0.2:8080"),
            ("FOLIO_REQUEST_TIMEOUT_SECS", "not-a-number"),
            ("FOLIO_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.backend.base_url, "http://10.0.0.2:8080");
        assert_eq!(config.backend.request_timeout_secs, 30);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }
}
