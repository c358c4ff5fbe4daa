//! core
//!
//! Core domain types, schemas, and rules for classblog.
//!
//! # Modules
//!
//! - [`types`] - Strong types: EntityId, Role, UtcTimestamp
//! - [`model`] - Records: Account, Instructor, Student, Post, and their patches
//! - [`paging`] - Page requests, pages, and the accumulating pager
//! - [`validate`] - Input validation for user-entered records
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid identifiers at construction time
//! - Schemas are strict and match the backend's wire format
//! - Nothing in `core` performs I/O except config loading

pub mod config;
pub mod model;
pub mod paging;
pub mod types;
pub mod validate;
