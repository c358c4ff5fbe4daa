//! access::repository
//!
//! Two-tier access: an optional primary source in front of the local store.
//!
//! # Fallback
//!
//! Every operation goes to the primary first when one is configured. If the
//! primary fails with a transient error (see [`SourceError::is_transient`])
//! the failure is logged at warn level and the same operation runs against
//! the local source, whose result is returned. Any other error reaches the
//! caller unchanged. Without a primary the local source answers directly.
//!
//! Fallback is not transactional: a primary that failed after applying a
//! write and a local write that then succeeds leave the two tiers diverged.
//! Nothing reconciles them.

use std::sync::Arc;

use async_trait::async_trait;

use super::local::LocalSource;
use super::traits::{DataSource, Operation, SourceError};
use crate::core::model::{
    Account, Instructor, NewPerson, NewPost, PersonPatch, Post, PostPatch, Student,
};
use crate::core::paging::{Page, PageRequest};
use crate::core::types::EntityId;

/// Primary-then-local data access.
#[derive(Clone)]
pub struct Repository {
    primary: Option<Arc<dyn DataSource>>,
    local: LocalSource,
}

impl std::fmt::Debug for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("primary", &self.primary.as_ref().map(|p| p.name()))
            .field("local", &self.local)
            .finish()
    }
}

impl Repository {
    /// A repository answered only by the local source.
    pub fn local(local: LocalSource) -> Self {
        Self {
            primary: None,
            local,
        }
    }

    /// A repository that tries `primary` before the local source.
    pub fn with_primary(primary: Arc<dyn DataSource>, local: LocalSource) -> Self {
        Self {
            primary: Some(primary),
            local,
        }
    }

    /// Name of the primary source, if one is configured.
    pub fn primary_name(&self) -> Option<&'static str> {
        self.primary.as_ref().map(|p| p.name())
    }

    /// The local tier.
    pub fn local_source(&self) -> &LocalSource {
        &self.local
    }

    /// Decide whether a primary failure is recovered locally.
    ///
    /// Returns `Ok(())` to continue with the local source.
    fn recover(&self, operation: Operation, err: SourceError) -> Result<(), SourceError> {
        if !err.is_transient() {
            return Err(err);
        }
        tracing::warn!(
            operation = %operation,
            source = self.primary_name().unwrap_or("primary"),
            error = %err,
            "primary source failed, using local store"
        );
        Ok(())
    }
}

/// Run one source operation against the primary, then against the local
/// source if [`Repository::recover`] allows it.
///
/// Arguments are cloned for the primary call and moved into the local one.
macro_rules! tiered {
    ($repo:ident, $operation:expr, $method:ident($($arg:expr),*)) => {{
        if let Some(primary) = &$repo.primary {
            match primary.$method($(Clone::clone(&$arg)),*).await {
                Ok(value) => return Ok(value),
                Err(e) => $repo.recover($operation, e)?,
            }
        }
        $repo.local.$method($($arg),*).await
    }};
}

#[async_trait]
impl DataSource for Repository {
    fn name(&self) -> &'static str {
        "repository"
    }

    async fn authenticate(
        &self,
        email: &str,
        secret: &str,
    ) -> Result<Option<Account>, SourceError> {
        tiered!(self, Operation::Authenticate, authenticate(email, secret))
    }

    async fn list_posts(&self) -> Result<Vec<Post>, SourceError> {
        tiered!(self, Operation::ListPosts, list_posts())
    }

    async fn get_post(&self, id: &EntityId) -> Result<Option<Post>, SourceError> {
        tiered!(self, Operation::GetPost, get_post(id))
    }

    async fn create_post(&self, post: NewPost) -> Result<Post, SourceError> {
        tiered!(self, Operation::CreatePost, create_post(post))
    }

    async fn update_post(&self, id: &EntityId, patch: PostPatch) -> Result<Post, SourceError> {
        tiered!(self, Operation::UpdatePost, update_post(id, patch))
    }

    async fn delete_post(&self, id: &EntityId) -> Result<bool, SourceError> {
        tiered!(self, Operation::DeletePost, delete_post(id))
    }

    async fn list_instructors(
        &self,
        request: PageRequest,
    ) -> Result<Page<Instructor>, SourceError> {
        tiered!(self, Operation::ListInstructors, list_instructors(request))
    }

    async fn create_instructor(&self, person: NewPerson) -> Result<Instructor, SourceError> {
        tiered!(self, Operation::CreateInstructor, create_instructor(person))
    }

    async fn update_instructor(
        &self,
        id: &EntityId,
        patch: PersonPatch,
    ) -> Result<Instructor, SourceError> {
        tiered!(self, Operation::UpdateInstructor, update_instructor(id, patch))
    }

    async fn delete_instructor(&self, id: &EntityId) -> Result<bool, SourceError> {
        tiered!(self, Operation::DeleteInstructor, delete_instructor(id))
    }

    async fn list_students(&self, request: PageRequest) -> Result<Page<Student>, SourceError> {
        tiered!(self, Operation::ListStudents, list_students(request))
    }

    async fn create_student(&self, person: NewPerson) -> Result<Student, SourceError> {
        tiered!(self, Operation::CreateStudent, create_student(person))
    }

    async fn update_student(
        &self,
        id: &EntityId,
        patch: PersonPatch,
    ) -> Result<Student, SourceError> {
        tiered!(self, Operation::UpdateStudent, update_student(id, patch))
    }

    async fn delete_student(&self, id: &EntityId) -> Result<bool, SourceError> {
        tiered!(self, Operation::DeleteStudent, delete_student(id))
    }
}
