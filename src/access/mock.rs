//! access::mock
//!
//! Mock data source for deterministic testing.
//!
//! # Design
//!
//! The mock keeps its own [`Store`] in memory, records every call, and can
//! be told to fail one operation (or all of them) with a chosen error. Put
//! it in front of a local source to exercise the repository's fallback.
//!
//! # Example
//!
//! ```
//! use classblog::access::mock::{FailOn, MockSource};
//! use classblog::access::{DataSource, Operation, SourceError};
//!
//! # tokio_test::block_on(async {
//! let source = MockSource::seeded()
//!     .fail_on(FailOn::Operation(Operation::ListPosts, SourceError::Timeout("slow".into())));
//!
//! assert!(source.list_posts().await.is_err());
//! assert!(source.authenticate("professor@blog.com", "123456").await.unwrap().is_some());
//! assert_eq!(source.operations().len(), 2);
//! # });
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::traits::{DataSource, Operation, SourceError};
use crate::core::model::{
    Account, Instructor, NewPerson, NewPost, PersonPatch, Post, PostPatch, Student,
};
use crate::core::paging::{Page, PageRequest};
use crate::core::types::EntityId;
use crate::store::Store;

/// Mock data source for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping.
#[derive(Debug, Clone)]
pub struct MockSource {
    /// Internal state shared across clones.
    inner: Arc<Mutex<MockSourceInner>>,
}

#[derive(Debug)]
struct MockSourceInner {
    store: Store,
    /// Operation to fail (for testing error paths).
    fail_on: Option<FailOn>,
    /// Recorded operations for verification.
    operations: Vec<MockOperation>,
}

/// Configuration for which operation should fail.
#[derive(Debug, Clone)]
pub enum FailOn {
    /// Fail one operation with the given error.
    Operation(Operation, SourceError),
    /// Fail every operation with the given error.
    Everything(SourceError),
}

/// Recorded operation for test verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockOperation {
    pub operation: Operation,
    /// Record the call addressed, when it named one.
    pub id: Option<EntityId>,
}

impl MockSource {
    /// Create a mock with an empty store.
    pub fn new() -> Self {
        Self::with_store(Store::new())
    }

    /// Create a mock holding the sample data.
    pub fn seeded() -> Self {
        Self::with_store(Store::seeded())
    }

    /// Create a mock holding the given store.
    pub fn with_store(store: Store) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockSourceInner {
                store,
                fail_on: None,
                operations: Vec::new(),
            })),
        }
    }

    /// Configure the mock to fail.
    pub fn fail_on(self, fail_on: FailOn) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.fail_on = Some(fail_on);
        }
        self
    }

    /// Clear the failure configuration.
    pub fn clear_fail_on(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.fail_on = None;
    }

    /// Get all recorded operations.
    pub fn operations(&self) -> Vec<MockOperation> {
        let inner = self.inner.lock().unwrap();
        inner.operations.clone()
    }

    /// Clear recorded operations.
    pub fn clear_operations(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.clear();
    }

    /// Copy of the mock's store (for test verification).
    pub fn snapshot(&self) -> Store {
        let inner = self.inner.lock().unwrap();
        inner.store.clone()
    }

    /// Record the call, then either fail it or run `f` against the store.
    fn call<T>(
        &self,
        operation: Operation,
        id: Option<&EntityId>,
        f: impl FnOnce(&mut Store) -> Result<T, SourceError>,
    ) -> Result<T, SourceError> {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(MockOperation {
            operation,
            id: id.cloned(),
        });
        match &inner.fail_on {
            Some(FailOn::Everything(e)) => return Err(e.clone()),
            Some(FailOn::Operation(op, e)) if *op == operation => return Err(e.clone()),
            _ => {}
        }
        f(&mut inner.store)
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DataSource for MockSource {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn authenticate(
        &self,
        email: &str,
        secret: &str,
    ) -> Result<Option<Account>, SourceError> {
        self.call(Operation::Authenticate, None, |s| {
            Ok(s.authenticate(email, secret))
        })
    }

    async fn list_posts(&self) -> Result<Vec<Post>, SourceError> {
        self.call(Operation::ListPosts, None, |s| Ok(s.posts().to_vec()))
    }

    async fn get_post(&self, id: &EntityId) -> Result<Option<Post>, SourceError> {
        self.call(Operation::GetPost, Some(id), |s| Ok(s.post(id)))
    }

    async fn create_post(&self, post: NewPost) -> Result<Post, SourceError> {
        self.call(Operation::CreatePost, None, |s| Ok(s.insert_post(post)))
    }

    async fn update_post(&self, id: &EntityId, patch: PostPatch) -> Result<Post, SourceError> {
        self.call(Operation::UpdatePost, Some(id), |s| {
            s.update_post(id, patch)
                .ok_or_else(|| SourceError::not_found("post", id))
        })
    }

    async fn delete_post(&self, id: &EntityId) -> Result<bool, SourceError> {
        self.call(Operation::DeletePost, Some(id), |s| Ok(s.remove_post(id)))
    }

    async fn list_instructors(
        &self,
        request: PageRequest,
    ) -> Result<Page<Instructor>, SourceError> {
        self.call(Operation::ListInstructors, None, |s| {
            Ok(s.instructor_page(request))
        })
    }

    async fn create_instructor(&self, person: NewPerson) -> Result<Instructor, SourceError> {
        self.call(Operation::CreateInstructor, None, |s| {
            Ok(s.insert_instructor(person))
        })
    }

    async fn update_instructor(
        &self,
        id: &EntityId,
        patch: PersonPatch,
    ) -> Result<Instructor, SourceError> {
        self.call(Operation::UpdateInstructor, Some(id), |s| {
            s.update_instructor(id, patch)
                .ok_or_else(|| SourceError::not_found("instructor", id))
        })
    }

    async fn delete_instructor(&self, id: &EntityId) -> Result<bool, SourceError> {
        self.call(Operation::DeleteInstructor, Some(id), |s| {
            Ok(s.remove_instructor(id))
        })
    }

    async fn list_students(&self, request: PageRequest) -> Result<Page<Student>, SourceError> {
        self.call(Operation::ListStudents, None, |s| Ok(s.student_page(request)))
    }

    async fn create_student(&self, person: NewPerson) -> Result<Student, SourceError> {
        self.call(Operation::CreateStudent, None, |s| {
            Ok(s.insert_student(person))
        })
    }

    async fn update_student(
        &self,
        id: &EntityId,
        patch: PersonPatch,
    ) -> Result<Student, SourceError> {
        self.call(Operation::UpdateStudent, Some(id), |s| {
            s.update_student(id, patch)
                .ok_or_else(|| SourceError::not_found("student", id))
        })
    }

    async fn delete_student(&self, id: &EntityId) -> Result<bool, SourceError> {
        self.call(Operation::DeleteStudent, Some(id), |s| {
            Ok(s.remove_student(id))
        })
    }
}
