//! access::factory
//!
//! Repository selection and creation.
//!
//! # Design
//!
//! Commands build their repository with [`create_repository`] instead of
//! constructing sources directly, so the choice between local-only and
//! remote-first access is made in one place from configuration.
//!
//! # Example
//!
//! ```
//! use classblog::access::{create_repository, SourceMode};
//! use classblog::core::config::Config;
//! use classblog::store::Store;
//!
//! let config = Config::default();
//! assert_eq!(SourceMode::from_config(&config), SourceMode::Local);
//!
//! let repo = create_repository(&config, Store::seeded()).unwrap();
//! assert_eq!(repo.primary_name(), None);
//! ```

use std::sync::Arc;

use super::http::HttpSource;
use super::local::LocalSource;
use super::repository::Repository;
use super::traits::SourceError;
use crate::core::config::Config;
use crate::store::Store;

/// How the repository reaches its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    /// Local store only.
    Local,
    /// Remote backend first, local store on transient failure.
    Remote,
}

impl SourceMode {
    /// Get the mode name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            SourceMode::Local => "local",
            SourceMode::Remote => "remote",
        }
    }

    /// The mode the configuration selects.
    pub fn from_config(config: &Config) -> Self {
        if config.remote_enabled() {
            SourceMode::Remote
        } else {
            SourceMode::Local
        }
    }
}

impl std::fmt::Display for SourceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Build the repository the configuration asks for, over the given store.
///
/// # Errors
///
/// Returns `NetworkError` if the HTTP client for remote mode cannot be built.
pub fn create_repository(config: &Config, store: Store) -> Result<Repository, SourceError> {
    let local = LocalSource::new(store);
    let mode = SourceMode::from_config(config);
    tracing::debug!(mode = %mode, base_url = config.base_url(), "creating repository");

    match mode {
        SourceMode::Local => Ok(Repository::local(local)),
        SourceMode::Remote => {
            let http = HttpSource::new(config.base_url(), config.timeout())?;
            Ok(Repository::with_primary(Arc::new(http), local))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_is_displayed_by_name() {
        assert_eq!(SourceMode::Local.to_string(), "local");
        assert_eq!(SourceMode::Remote.to_string(), "remote");
    }

    #[test]
    fn remote_override_selects_http_primary() {
        let config = Config::default().with_remote_enabled(true);
        assert_eq!(SourceMode::from_config(&config), SourceMode::Remote);

        let repo = create_repository(&config, Store::new()).unwrap();
        assert_eq!(repo.primary_name(), Some("http"));
    }

    #[test]
    fn default_is_local() {
        let repo = create_repository(&Config::default(), Store::new()).unwrap();
        assert_eq!(repo.primary_name(), None);
    }
}
