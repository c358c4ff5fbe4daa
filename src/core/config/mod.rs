//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. CLI flags (applied through [`Config::with_remote_enabled`])
//!
//! # Config Locations
//!
//! Searched in order:
//! 1. An explicit path (`--config`)
//! 2. `$CLASSBLOG_CONFIG` if set
//! 3. `$XDG_CONFIG_HOME/classblog/config.toml`
//! 4. `~/.classblog/config.toml`
//!
//! A missing file is not an error; defaults apply.
//!
//! # Example
//!
//! ```no_run
//! use classblog::core::config::Config;
//!
//! let config = Config::load(None).unwrap();
//! println!("Remote enabled: {}", config.remote_enabled());
//! println!("Base URL: {}", config.base_url());
//! ```

pub mod schema;

pub use schema::{ConfigFile, ListingConfig, RemoteConfig};

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::core::paging::DEFAULT_PAGE_SIZE;

/// Default backend base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.blogmobile.com";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Resolved configuration.
///
/// Accessors apply defaults for anything the file leaves out.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed file contents
    pub file: ConfigFile,
    /// Path the file was loaded from, if any
    path: Option<PathBuf>,
    /// CLI override for `remote.enabled`
    remote_override: Option<bool>,
}

impl Config {
    /// Load configuration from an explicit path or the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if the explicit path cannot be read, or if a config
    /// file exists but cannot be parsed or fails validation.
    pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }

        match Self::discover() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from_path(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        file.validate()?;

        tracing::debug!(path = %path.display(), "loaded config");

        Ok(Config {
            file,
            path: Some(path.to_path_buf()),
            remote_override: None,
        })
    }

    /// Build a configuration from already-parsed contents.
    pub fn from_file(file: ConfigFile) -> Result<Config, ConfigError> {
        file.validate()?;
        Ok(Config {
            file,
            path: None,
            remote_override: None,
        })
    }

    /// Find the first existing config file in the default locations.
    fn discover() -> Option<PathBuf> {
        // 1. Check $CLASSBLOG_CONFIG
        if let Ok(path) = std::env::var("CLASSBLOG_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        // 2. Check $XDG_CONFIG_HOME/classblog/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("classblog/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. Check ~/.classblog/config.toml
        if let Some(home) = dirs::home_dir() {
            let path = home.join(".classblog/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        None
    }

    /// Override `remote.enabled` (CLI flag).
    pub fn with_remote_enabled(mut self, enabled: bool) -> Self {
        self.remote_override = Some(enabled);
        self
    }

    /// Path of the loaded file, if one was found.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// Check if the remote backend should be tried first.
    ///
    /// Defaults to `false` if not configured.
    pub fn remote_enabled(&self) -> bool {
        self.remote_override.unwrap_or_else(|| {
            self.file
                .remote
                .as_ref()
                .and_then(|r| r.enabled)
                .unwrap_or(false)
        })
    }

    /// Get the backend base URL, without trailing slash.
    pub fn base_url(&self) -> &str {
        self.file
            .remote
            .as_ref()
            .and_then(|r| r.base_url.as_deref())
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    /// Get the per-request timeout.
    pub fn timeout(&self) -> Duration {
        let secs = self
            .file
            .remote
            .as_ref()
            .and_then(|r| r.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    /// Get the listing page size.
    pub fn page_size(&self) -> u32 {
        self.file
            .listing
            .as_ref()
            .and_then(|l| l.page_size)
            .unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Render the effective configuration (defaults and overrides applied).
    pub fn to_effective_toml(&self) -> Result<String, ConfigError> {
        let effective = ConfigFile {
            remote: Some(RemoteConfig {
                enabled: Some(self.remote_enabled()),
                base_url: Some(self.base_url().to_string()),
                timeout_secs: Some(self.timeout().as_secs()),
            }),
            listing: Some(ListingConfig {
                page_size: Some(self.page_size()),
            }),
        };
        toml::to_string_pretty(&effective).map_err(|e| ConfigError::InvalidValue(e.to_string()))
    }
}
