//! classblog - data access for a two-role class blog
//!
//! Instructors publish posts and administer instructor and student
//! records; students read posts. Records live in an in-memory store and,
//! when configured, a remote REST backend is tried first with the local
//! store answering whenever the backend is unavailable.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to engine)
//! - [`engine`] - Gates and validates every operation before data access
//! - [`session`] - The signed-in account and its role flags
//! - [`access`] - Local, remote and two-tier data sources
//! - [`store`] - In-memory collections and sample data
//! - [`core`] - Domain types, records, paging, validation and configuration
//! - [`ui`] - User interaction utilities
//!
//! # Correctness Invariants
//!
//! 1. Identifiers are unique within each collection
//! 2. Edits never change a post's author or creation time
//! 3. Remote failures never prevent a local answer
//! 4. Denied or invalid requests never reach the data layer

pub mod access;
pub mod cli;
pub mod core;
pub mod engine;
pub mod session;
pub mod store;
pub mod ui;
