//! access::traits
//!
//! DataSource trait definition shared by the local store, the HTTP backend,
//! and the two-tier repository.
//!
//! # Design
//!
//! The `DataSource` trait is async because the remote implementation
//! involves network I/O. All methods return `Result` so a remote failure
//! can be told apart from an answer.
//!
//! Absence is part of the answer, not an error, for reads and deletes:
//! `get_post` returns `None`, `delete_*` returns `false`. Only updates of a
//! missing record fail with [`SourceError::NotFound`].
//!
//! # Example
//!
//! ```ignore
//! use classblog::access::{DataSource, SourceError};
//! use classblog::core::paging::PageRequest;
//!
//! async fn count_students(source: &dyn DataSource) -> Result<usize, SourceError> {
//!     let page = source.list_students(PageRequest::default()).await?;
//!     Ok(page.total)
//! }
//! ```

use async_trait::async_trait;
use thiserror::Error;

use crate::core::model::{
    Account, Instructor, NewPerson, NewPost, PersonPatch, Post, PostPatch, Student,
};
use crate::core::paging::{Page, PageRequest};
use crate::core::types::EntityId;

/// Errors from data source operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SourceError {
    /// The referenced record does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The request could not be sent or the connection failed.
    #[error("network error: {0}")]
    NetworkError(String),

    /// The request did not complete within the configured timeout.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The backend answered with a non-success status.
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// The backend answered with a body that could not be decoded.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl SourceError {
    /// Whether the failure means the backend was unavailable, so the same
    /// operation may be answered from the local store instead.
    ///
    /// `NotFound` is an answer about the data and is never transient.
    pub fn is_transient(&self) -> bool {
        match self {
            SourceError::NotFound(_) => false,
            SourceError::NetworkError(_)
            | SourceError::Timeout(_)
            | SourceError::ApiError { .. }
            | SourceError::InvalidResponse(_) => true,
        }
    }

    pub(crate) fn not_found(kind: &str, id: &EntityId) -> Self {
        SourceError::NotFound(format!("{} {}", kind, id))
    }
}

/// Names of the data source operations, for logging and test doubles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Authenticate,
    ListPosts,
    GetPost,
    CreatePost,
    UpdatePost,
    DeletePost,
    ListInstructors,
    CreateInstructor,
    UpdateInstructor,
    DeleteInstructor,
    ListStudents,
    CreateStudent,
    UpdateStudent,
    DeleteStudent,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Authenticate => "authenticate",
            Operation::ListPosts => "list_posts",
            Operation::GetPost => "get_post",
            Operation::CreatePost => "create_post",
            Operation::UpdatePost => "update_post",
            Operation::DeletePost => "delete_post",
            Operation::ListInstructors => "list_instructors",
            Operation::CreateInstructor => "create_instructor",
            Operation::UpdateInstructor => "update_instructor",
            Operation::DeleteInstructor => "delete_instructor",
            Operation::ListStudents => "list_students",
            Operation::CreateStudent => "create_student",
            Operation::UpdateStudent => "update_student",
            Operation::DeleteStudent => "delete_student",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A source of blog records.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow use across async tasks.
///
/// # Error Handling
///
/// - `NotFound`: an update named a record that does not exist
/// - `NetworkError` / `Timeout`: the backend could not be reached in time
/// - `ApiError`: the backend answered with a non-2xx status
/// - `InvalidResponse`: the backend answered with an unreadable body
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Get the source name (e.g., "local", "http").
    fn name(&self) -> &'static str;

    /// Find the account whose email and secret both match exactly.
    async fn authenticate(&self, email: &str, secret: &str)
        -> Result<Option<Account>, SourceError>;

    /// All posts, in insertion order.
    async fn list_posts(&self) -> Result<Vec<Post>, SourceError>;

    /// A post by identifier.
    async fn get_post(&self, id: &EntityId) -> Result<Option<Post>, SourceError>;

    /// Store a new post.
    ///
    /// The source assigns the identifier and the creation time.
    async fn create_post(&self, post: NewPost) -> Result<Post, SourceError>;

    /// Overlay a patch onto a post.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the post doesn't exist
    async fn update_post(&self, id: &EntityId, patch: PostPatch) -> Result<Post, SourceError>;

    /// Remove a post. Returns `false` if it did not exist.
    async fn delete_post(&self, id: &EntityId) -> Result<bool, SourceError>;

    /// One page of instructors.
    async fn list_instructors(&self, request: PageRequest)
        -> Result<Page<Instructor>, SourceError>;

    /// Store a new instructor. The source assigns the identifier.
    async fn create_instructor(&self, person: NewPerson) -> Result<Instructor, SourceError>;

    /// Overlay a patch onto an instructor.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the instructor doesn't exist
    async fn update_instructor(
        &self,
        id: &EntityId,
        patch: PersonPatch,
    ) -> Result<Instructor, SourceError>;

    /// Remove an instructor. Returns `false` if it did not exist.
    async fn delete_instructor(&self, id: &EntityId) -> Result<bool, SourceError>;

    /// One page of students.
    async fn list_students(&self, request: PageRequest) -> Result<Page<Student>, SourceError>;

    /// Store a new student. The source assigns the identifier.
    async fn create_student(&self, person: NewPerson) -> Result<Student, SourceError>;

    /// Overlay a patch onto a student.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the student doesn't exist
    async fn update_student(
        &self,
        id: &EntityId,
        patch: PersonPatch,
    ) -> Result<Student, SourceError>;

    /// Remove a student. Returns `false` if it did not exist.
    async fn delete_student(&self, id: &EntityId) -> Result<bool, SourceError>;
}
