//! engine
//!
//! Orchestrates every blog operation: Gate -> Validate -> Access.
//!
//! # Architecture
//!
//! The front end never calls the repository directly. It calls the
//! [`Engine`], which for each operation:
//!
//! 1. **Gate**: asks [`gate::authorize`] whether the session's account may
//!    perform the action
//! 2. **Validate**: checks user-entered fields
//! 3. **Access**: runs the repository operation (remote first when enabled)
//!
//! # Invariants
//!
//! - A denied action never reaches the repository
//! - Invalid input never reaches the repository
//! - Post ownership is checked against the stored post, not the request
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use classblog::access::{LocalSource, Repository};
//! use classblog::engine::Engine;
//!
//! # tokio_test::block_on(async {
//! let repo = Arc::new(Repository::local(LocalSource::seeded()));
//! let mut engine = Engine::with_repository(repo);
//!
//! assert!(engine.sign_in("aluno@blog.com", "123456").await);
//! let posts = engine.search_posts("react").await.unwrap();
//! assert!(!posts.is_empty());
//! # });
//! ```

mod blog;
pub mod gate;

pub use blog::{filter_posts, Engine, EngineError, AUTHOR_LOOKUP_LIMIT};
pub use gate::{authorize, Action, Decision};
