//! access::local
//!
//! DataSource backed by the in-memory [`Store`].
//!
//! # Design
//!
//! The store sits behind `Arc<Mutex<...>>` so clones of a `LocalSource`
//! share one set of collections. The lock is taken for the duration of a
//! single synchronous mutation and never held across an await, so two
//! operations never interleave mid-mutation.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use super::traits::{DataSource, SourceError};
use crate::core::model::{
    Account, Instructor, NewPerson, NewPost, PersonPatch, Post, PostPatch, Student,
};
use crate::core::paging::{Page, PageRequest};
use crate::core::types::EntityId;
use crate::store::Store;

/// Local data source over a shared store.
#[derive(Debug, Clone)]
pub struct LocalSource {
    store: Arc<Mutex<Store>>,
}

impl LocalSource {
    /// Wrap a store.
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// A local source over the fixed sample data.
    pub fn seeded() -> Self {
        Self::new(Store::seeded())
    }

    /// Copy of the current store contents.
    pub fn snapshot(&self) -> Store {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        // A panic mid-mutation leaves at worst a half-applied merge of plain
        // values; the collections themselves stay usable.
        self.store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for LocalSource {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl DataSource for LocalSource {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn authenticate(
        &self,
        email: &str,
        secret: &str,
    ) -> Result<Option<Account>, SourceError> {
        Ok(self.lock().authenticate(email, secret))
    }

    async fn list_posts(&self) -> Result<Vec<Post>, SourceError> {
        Ok(self.lock().posts().to_vec())
    }

    async fn get_post(&self, id: &EntityId) -> Result<Option<Post>, SourceError> {
        Ok(self.lock().post(id))
    }

    async fn create_post(&self, post: NewPost) -> Result<Post, SourceError> {
        Ok(self.lock().insert_post(post))
    }

    async fn update_post(&self, id: &EntityId, patch: PostPatch) -> Result<Post, SourceError> {
        self.lock()
            .update_post(id, patch)
            .ok_or_else(|| SourceError::not_found("post", id))
    }

    async fn delete_post(&self, id: &EntityId) -> Result<bool, SourceError> {
        Ok(self.lock().remove_post(id))
    }

    async fn list_instructors(
        &self,
        request: PageRequest,
    ) -> Result<Page<Instructor>, SourceError> {
        Ok(self.lock().instructor_page(request))
    }

    async fn create_instructor(&self, person: NewPerson) -> Result<Instructor, SourceError> {
        Ok(self.lock().insert_instructor(person))
    }

    async fn update_instructor(
        &self,
        id: &EntityId,
        patch: PersonPatch,
    ) -> Result<Instructor, SourceError> {
        self.lock()
            .update_instructor(id, patch)
            .ok_or_else(|| SourceError::not_found("instructor", id))
    }

    async fn delete_instructor(&self, id: &EntityId) -> Result<bool, SourceError> {
        Ok(self.lock().remove_instructor(id))
    }

    async fn list_students(&self, request: PageRequest) -> Result<Page<Student>, SourceError> {
        Ok(self.lock().student_page(request))
    }

    async fn create_student(&self, person: NewPerson) -> Result<Student, SourceError> {
        Ok(self.lock().insert_student(person))
    }

    async fn update_student(
        &self,
        id: &EntityId,
        patch: PersonPatch,
    ) -> Result<Student, SourceError> {
        self.lock()
            .update_student(id, patch)
            .ok_or_else(|| SourceError::not_found("student", id))
    }

    async fn delete_student(&self, id: &EntityId) -> Result<bool, SourceError> {
        Ok(self.lock().remove_student(id))
    }
}
