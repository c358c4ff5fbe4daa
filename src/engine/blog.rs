//! engine::blog
//!
//! Gated, validated blog operations on top of the repository.

use std::sync::Arc;

use thiserror::Error;

use super::gate::{authorize, Action, Decision};
use crate::access::{DataSource, Repository, SourceError};
use crate::core::model::{
    Account, Instructor, NewPerson, NewPost, PersonPatch, Post, PostPatch, Student,
};
use crate::core::paging::{Page, PageRequest, Pager};
use crate::core::types::EntityId;
use crate::core::validate::{self, PostFields, ValidationError};
use crate::session::Session;

/// How many instructors are scanned when resolving a post's author.
pub const AUTHOR_LOOKUP_LIMIT: u32 = 100;

/// Errors surfaced to the front end.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("permission denied: {0}")]
    Denied(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The signed-in instructor has no instructor record to author posts.
    #[error("no instructor record found for {0}")]
    AuthorNotFound(String),

    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Blog operations for the current session.
#[derive(Debug, Clone)]
pub struct Engine {
    session: Session,
}

impl Engine {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// An engine with a fresh signed-out session over `repository`.
    pub fn with_repository(repository: Arc<Repository>) -> Self {
        Self::new(Session::new(repository))
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub async fn sign_in(&mut self, email: &str, secret: &str) -> bool {
        self.session.sign_in(email, secret).await
    }

    pub fn sign_out(&mut self) {
        self.session.sign_out();
    }

    fn repository(&self) -> &Repository {
        self.session.repository()
    }

    /// Gate an action, returning the signed-in account when allowed.
    fn check(&self, action: &Action) -> Result<&Account, EngineError> {
        let account = self.session.current();
        match (authorize(account, action), account) {
            (Decision::Allow, Some(account)) => Ok(account),
            (Decision::Deny(reason), _) => Err(EngineError::Denied(reason)),
            (Decision::Allow, None) => Err(EngineError::Denied("not signed in".into())),
        }
    }

    // =========================================================================
    // Posts
    // =========================================================================

    pub async fn list_posts(&self) -> Result<Vec<Post>, EngineError> {
        self.check(&Action::ListPosts)?;
        Ok(self.repository().list_posts().await?)
    }

    /// Posts whose title, description or author name contains `query`,
    /// ignoring case. A blank query matches every post.
    pub async fn search_posts(&self, query: &str) -> Result<Vec<Post>, EngineError> {
        let posts = self.list_posts().await?;
        Ok(filter_posts(posts, query))
    }

    /// Posts written by the signed-in instructor.
    pub async fn own_posts(&self) -> Result<Vec<Post>, EngineError> {
        let account = self.check(&Action::ViewOwnPosts)?;
        let email = account.email.clone();
        let posts = self.repository().list_posts().await?;
        Ok(posts
            .into_iter()
            .filter(|p| p.is_authored_by(&email))
            .collect())
    }

    pub async fn get_post(&self, id: &EntityId) -> Result<Post, EngineError> {
        self.check(&Action::ViewPost)?;
        self.fetch_post(id).await
    }

    async fn fetch_post(&self, id: &EntityId) -> Result<Post, EngineError> {
        self.repository()
            .get_post(id)
            .await?
            .ok_or_else(|| SourceError::not_found("post", id).into())
    }

    /// Publish a post authored by the signed-in instructor.
    ///
    /// The author is the instructor record whose email matches the
    /// session, looked up among the first [`AUTHOR_LOOKUP_LIMIT`]
    /// instructors.
    pub async fn create_post(&self, fields: PostFields) -> Result<Post, EngineError> {
        let account = self.check(&Action::CreatePost)?;
        validate::post_fields(&fields)?;
        let author = self.resolve_author(&account.email).await?;

        let post = NewPost {
            title: fields.title,
            description: fields.description,
            body: fields.body,
            author,
        };
        let created = self.repository().create_post(post).await?;
        tracing::debug!(id = %created.id, "created post");
        Ok(created)
    }

    async fn resolve_author(&self, email: &str) -> Result<Instructor, EngineError> {
        let page = self
            .repository()
            .list_instructors(PageRequest::first(AUTHOR_LOOKUP_LIMIT))
            .await?;
        page.items
            .into_iter()
            .find(|i| i.email == email)
            .ok_or_else(|| EngineError::AuthorNotFound(email.to_string()))
    }

    /// Edit a post the signed-in instructor wrote.
    ///
    /// The role and the input are checked before the post is looked up.
    /// The author and creation time are never changed by an edit.
    pub async fn edit_post(&self, id: &EntityId, patch: PostPatch) -> Result<Post, EngineError> {
        self.check(&Action::ManageOwnPosts)?;
        let patch = PostPatch {
            author: None,
            ..patch
        };
        validate::post_patch(&patch)?;

        let post = self.fetch_post(id).await?;
        self.check(&Action::EditPost {
            author_email: post.author.email,
        })?;
        Ok(self.repository().update_post(id, patch).await?)
    }

    /// Delete a post the signed-in instructor wrote.
    ///
    /// Returns `false` if there was no such post.
    pub async fn delete_post(&self, id: &EntityId) -> Result<bool, EngineError> {
        self.check(&Action::ManageOwnPosts)?;
        let Some(post) = self.repository().get_post(id).await? else {
            return Ok(false);
        };
        self.check(&Action::DeletePost {
            author_email: post.author.email,
        })?;
        Ok(self.repository().delete_post(id).await?)
    }

    // =========================================================================
    // Instructors
    // =========================================================================

    pub async fn list_instructors(
        &self,
        request: PageRequest,
    ) -> Result<Page<Instructor>, EngineError> {
        self.check(&Action::ManageInstructors)?;
        Ok(self.repository().list_instructors(request).await?)
    }

    /// Every instructor, fetched page by page.
    pub async fn all_instructors(&self, page_size: u32) -> Result<Vec<Instructor>, EngineError> {
        self.check(&Action::ManageInstructors)?;
        let mut pager = Pager::new(page_size);
        while pager.has_more() {
            let page = self
                .repository()
                .list_instructors(pager.next_request())
                .await?;
            pager.absorb(page);
        }
        Ok(pager.into_items())
    }

    pub async fn create_instructor(&self, person: NewPerson) -> Result<Instructor, EngineError> {
        self.check(&Action::ManageInstructors)?;
        validate::new_person(&person)?;
        Ok(self.repository().create_instructor(person).await?)
    }

    pub async fn update_instructor(
        &self,
        id: &EntityId,
        patch: PersonPatch,
    ) -> Result<Instructor, EngineError> {
        self.check(&Action::ManageInstructors)?;
        validate::person_patch(&patch)?;
        Ok(self.repository().update_instructor(id, patch).await?)
    }

    pub async fn delete_instructor(&self, id: &EntityId) -> Result<bool, EngineError> {
        self.check(&Action::ManageInstructors)?;
        Ok(self.repository().delete_instructor(id).await?)
    }

    // =========================================================================
    // Students
    // =========================================================================

    pub async fn list_students(&self, request: PageRequest) -> Result<Page<Student>, EngineError> {
        self.check(&Action::ManageStudents)?;
        Ok(self.repository().list_students(request).await?)
    }

    /// Every student, fetched page by page.
    pub async fn all_students(&self, page_size: u32) -> Result<Vec<Student>, EngineError> {
        self.check(&Action::ManageStudents)?;
        let mut pager = Pager::new(page_size);
        while pager.has_more() {
            let page = self
                .repository()
                .list_students(pager.next_request())
                .await?;
            pager.absorb(page);
        }
        Ok(pager.into_items())
    }

    pub async fn create_student(&self, person: NewPerson) -> Result<Student, EngineError> {
        self.check(&Action::ManageStudents)?;
        validate::new_person(&person)?;
        Ok(self.repository().create_student(person).await?)
    }

    pub async fn update_student(
        &self,
        id: &EntityId,
        patch: PersonPatch,
    ) -> Result<Student, EngineError> {
        self.check(&Action::ManageStudents)?;
        validate::person_patch(&patch)?;
        Ok(self.repository().update_student(id, patch).await?)
    }

    pub async fn delete_student(&self, id: &EntityId) -> Result<bool, EngineError> {
        self.check(&Action::ManageStudents)?;
        Ok(self.repository().delete_student(id).await?)
    }
}

/// Keep the posts matching `query` (see [`Engine::search_posts`]).
pub fn filter_posts(posts: Vec<Post>, query: &str) -> Vec<Post> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return posts;
    }
    posts
        .into_iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
                || p.author.name.to_lowercase().contains(&needle)
        })
        .collect()
}
