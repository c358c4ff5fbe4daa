//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Config values are validated after parsing: the base URL must be an
//! http(s) URL and numeric limits must be positive.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Contents of a configuration file.
///
/// # Example
///
/// ```toml
/// [remote]
/// enabled = true
/// base_url = "https://api.blogmobile.com"
/// timeout_secs = 30
///
/// [listing]
/// page_size = 10
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Remote backend settings
    pub remote: Option<RemoteConfig>,

    /// Listing defaults
    pub listing: Option<ListingConfig>,
}

impl ConfigFile {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(remote) = &self.remote {
            remote.validate()?;
        }
        if let Some(listing) = &self.listing {
            listing.validate()?;
        }
        Ok(())
    }
}

/// Remote backend settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RemoteConfig {
    /// Try the remote backend before the local store
    pub enabled: Option<bool>,

    /// Backend base URL, without trailing slash
    pub base_url: Option<String>,

    /// Per-request timeout in seconds
    pub timeout_secs: Option<u64>,
}

impl RemoteConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.base_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid base_url '{}', must start with http:// or https://",
                    url
                )));
            }
        }

        if self.timeout_secs == Some(0) {
            return Err(ConfigError::InvalidValue(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

/// Listing defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ListingConfig {
    /// Items per page for instructor and student listings
    pub page_size: Option<u32>,
}

impl ListingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == Some(0) {
            return Err(ConfigError::InvalidValue(
                "page_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
