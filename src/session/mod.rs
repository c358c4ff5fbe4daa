//! session
//!
//! The currently signed-in account, if any.
//!
//! A [`Session`] holds zero or one [`Account`] and derives the two role
//! flags from it. Signing in asks the repository to authenticate; nothing
//! is persisted, so every process starts signed out.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use classblog::access::{LocalSource, Repository};
//! use classblog::session::Session;
//!
//! # tokio_test::block_on(async {
//! let repo = Arc::new(Repository::local(LocalSource::seeded()));
//! let mut session = Session::new(repo);
//!
//! assert!(session.sign_in("professor@blog.com", "123456").await);
//! assert!(session.is_instructor());
//!
//! session.sign_out();
//! assert!(!session.is_authenticated());
//! # });
//! ```

use std::sync::Arc;

use crate::access::{DataSource, Repository};
use crate::core::model::Account;

/// Zero-or-one authenticated account.
#[derive(Debug, Clone)]
pub struct Session {
    repository: Arc<Repository>,
    account: Option<Account>,
}

impl Session {
    /// A signed-out session.
    pub fn new(repository: Arc<Repository>) -> Self {
        Self {
            repository,
            account: None,
        }
    }

    /// Authenticate and remember the account.
    ///
    /// Returns `false` when the credentials match no account or the lookup
    /// fails; the session is then signed out.
    pub async fn sign_in(&mut self, email: &str, secret: &str) -> bool {
        self.account = match self.repository.authenticate(email, secret).await {
            Ok(account) => account,
            Err(e) => {
                tracing::warn!(error = %e, "sign-in lookup failed");
                None
            }
        };
        tracing::debug!(email, signed_in = self.account.is_some(), "sign-in");
        self.account.is_some()
    }

    /// Forget the current account.
    pub fn sign_out(&mut self) {
        self.account = None;
    }

    pub fn current(&self) -> Option<&Account> {
        self.account.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.account.is_some()
    }

    pub fn is_instructor(&self) -> bool {
        self.account.as_ref().is_some_and(Account::is_instructor)
    }

    pub fn is_student(&self) -> bool {
        self.account.as_ref().is_some_and(Account::is_student)
    }

    pub fn repository(&self) -> &Arc<Repository> {
        &self.repository
    }
}
