//! access
//!
//! Data access: the local store, the remote backend, and the two-tier
//! repository that combines them.
//!
//! # Architecture
//!
//! The [`DataSource`] trait is the one interface every tier implements.
//! Commands obtain a [`Repository`] from [`create_repository`] and never
//! talk to a specific source directly.
//!
//! - Remote failures never compromise local answers
//! - Not-Found always reaches the caller
//!
//! # Modules
//!
//! - `traits`: `DataSource` trait and `SourceError`
//! - [`local`]: source over the in-memory store
//! - [`http`]: source over the REST backend
//! - [`mock`]: scripted source for deterministic testing
//! - `repository`: primary-then-local fallback
//! - `factory`: repository selection from configuration

mod factory;
pub mod http;
pub mod local;
pub mod mock;
mod repository;
mod traits;

pub use factory::{create_repository, SourceMode};
pub use http::HttpSource;
pub use local::LocalSource;
pub use repository::Repository;
pub use traits::*;
