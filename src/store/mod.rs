//! store
//!
//! In-memory data store.
//!
//! # Design
//!
//! A [`Store`] owns four independent collections (accounts, instructors,
//! students, posts) and the identifier clock used to name new records.
//! Each store is a plain value: construct one seeded with the sample data
//! via [`Store::seeded`], or empty via [`Store::new`]. Nothing is shared
//! between instances and nothing outlives the value.
//!
//! Reads are public. Mutation is crate-private and reached only through
//! the access layer ([`crate::access::LocalSource`]).
//!
//! # Invariants
//!
//! - Identifiers are unique within each collection
//! - Collections keep insertion order
//! - A post's creation time is set once, on insert

mod seed;

use crate::core::model::{
    Account, Instructor, Merge, NewPerson, NewPost, PersonPatch, Post, PostPatch, Record, Student,
};
use crate::core::paging::{Page, PageRequest};
use crate::core::types::{EntityId, UtcTimestamp};

/// Issues time-based identifiers that never repeat within one store.
///
/// Identifiers are milliseconds since the Unix epoch. When two records are
/// created within the same millisecond (or the wall clock steps back) the
/// clock moves one past the last value it issued.
#[derive(Debug, Clone, Default)]
struct IdClock {
    last: i64,
}

impl IdClock {
    fn next_at(&mut self, now_millis: i64) -> EntityId {
        let next = now_millis.max(self.last.saturating_add(1));
        self.last = next;
        EntityId::from_number(next)
    }

    fn next(&mut self) -> EntityId {
        self.next_at(chrono::Utc::now().timestamp_millis())
    }
}

/// The in-memory collections.
#[derive(Debug, Clone, Default)]
pub struct Store {
    accounts: Vec<Account>,
    instructors: Vec<Instructor>,
    students: Vec<Student>,
    posts: Vec<Post>,
    ids: IdClock,
}

fn find<'a, T: Record>(items: &'a [T], id: &EntityId) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}

fn update<T, P>(items: &mut [T], id: &EntityId, patch: P) -> Option<T>
where
    T: Record + Merge<P>,
{
    let item = items.iter_mut().find(|item| item.id() == id)?;
    item.merge(patch);
    Some(item.clone())
}

fn remove<T: Record>(items: &mut Vec<T>, id: &EntityId) -> bool {
    match items.iter().position(|item| item.id() == id) {
        Some(index) => {
            items.remove(index);
            true
        }
        None => false,
    }
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the fixed sample data.
    ///
    /// # Example
    ///
    /// ```
    /// use classblog::store::Store;
    ///
    /// let store = Store::seeded();
    /// assert_eq!(store.accounts().len(), 2);
    /// assert_eq!(store.instructors().len(), 2);
    /// assert_eq!(store.students().len(), 3);
    /// assert_eq!(store.posts().len(), 5);
    /// ```
    pub fn seeded() -> Self {
        Self {
            accounts: seed::accounts(),
            instructors: seed::instructors(),
            students: seed::students(),
            posts: seed::posts(),
            ids: IdClock::default(),
        }
    }

    /// Create a store holding the given records.
    pub fn with_records(
        accounts: Vec<Account>,
        instructors: Vec<Instructor>,
        students: Vec<Student>,
        posts: Vec<Post>,
    ) -> Self {
        Self {
            accounts,
            instructors,
            students,
            posts,
            ids: IdClock::default(),
        }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn instructors(&self) -> &[Instructor] {
        &self.instructors
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    // =========================================================================
    // Accounts
    // =========================================================================

    /// Find the account matching both email and secret exactly.
    pub(crate) fn authenticate(&self, email: &str, secret: &str) -> Option<Account> {
        self.accounts
            .iter()
            .find(|a| a.matches(email, secret))
            .cloned()
    }

    // =========================================================================
    // Posts
    // =========================================================================

    pub(crate) fn post(&self, id: &EntityId) -> Option<Post> {
        find(&self.posts, id).cloned()
    }

    pub(crate) fn insert_post(&mut self, new: NewPost) -> Post {
        let post = new.into_post(self.ids.next(), UtcTimestamp::now());
        self.posts.push(post.clone());
        post
    }

    pub(crate) fn update_post(&mut self, id: &EntityId, patch: PostPatch) -> Option<Post> {
        update(&mut self.posts, id, patch)
    }

    pub(crate) fn remove_post(&mut self, id: &EntityId) -> bool {
        remove(&mut self.posts, id)
    }

    // =========================================================================
    // Instructors
    // =========================================================================

    pub(crate) fn instructor_page(&self, request: PageRequest) -> Page<Instructor> {
        request.slice(&self.instructors)
    }

    pub(crate) fn insert_instructor(&mut self, new: NewPerson) -> Instructor {
        let instructor = new.into_instructor(self.ids.next());
        self.instructors.push(instructor.clone());
        instructor
    }

    pub(crate) fn update_instructor(
        &mut self,
        id: &EntityId,
        patch: PersonPatch,
    ) -> Option<Instructor> {
        update(&mut self.instructors, id, patch)
    }

    pub(crate) fn remove_instructor(&mut self, id: &EntityId) -> bool {
        remove(&mut self.instructors, id)
    }

    // =========================================================================
    // Students
    // =========================================================================

    pub(crate) fn student_page(&self, request: PageRequest) -> Page<Student> {
        request.slice(&self.students)
    }

    pub(crate) fn insert_student(&mut self, new: NewPerson) -> Student {
        let student = new.into_student(self.ids.next());
        self.students.push(student.clone());
        student
    }

    pub(crate) fn update_student(&mut self, id: &EntityId, patch: PersonPatch) -> Option<Student> {
        update(&mut self.students, id, patch)
    }

    pub(crate) fn remove_student(&mut self, id: &EntityId) -> bool {
        remove(&mut self.students, id)
    }
}
