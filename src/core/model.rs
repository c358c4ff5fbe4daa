//! core::model
//!
//! Records held by the data store and exchanged with the backend.
//!
//! # Wire format
//!
//! Field names follow the backend's JSON (`nome`, `titulo`, `dataCriacao`,
//! ...); the Rust names are the English equivalents.
//!
//! # Patches
//!
//! Updates are expressed as patches whose fields are all optional. Applying
//! a patch overlays the present fields and leaves the rest untouched (see
//! [`Merge`]). Identifiers and a post's creation time are not patchable.

use serde::{Deserialize, Serialize};

use super::types::{EntityId, Role, UtcTimestamp};

/// A record stored in a collection, addressable by identifier.
pub trait Record: Clone {
    /// The record's identifier.
    fn id(&self) -> &EntityId;
}

/// Overlay a patch onto a record in place.
pub trait Merge<P> {
    fn merge(&mut self, patch: P);
}

/// Credential and role record used for sign-in.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: EntityId,
    pub email: String,
    #[serde(rename = "senha", default, skip_serializing_if = "String::is_empty")]
    pub secret: String,
    #[serde(rename = "tipo")]
    pub role: Role,
    #[serde(rename = "nome")]
    pub name: String,
}

impl Account {
    /// Whether the given credentials match this account exactly.
    ///
    /// Comparison is case-sensitive on both fields.
    pub fn matches(&self, email: &str, secret: &str) -> bool {
        self.email == email && self.secret == secret
    }

    pub fn is_instructor(&self) -> bool {
        self.role == Role::Instructor
    }

    pub fn is_student(&self) -> bool {
        self.role == Role::Student
    }
}

// Custom Debug to avoid exposing the secret
impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("role", &self.role)
            .field("name", &self.name)
            .finish()
    }
}

impl Record for Account {
    fn id(&self) -> &EntityId {
        &self.id
    }
}

/// Instructor record. Instructors author posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    pub id: EntityId,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
}

/// Student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: EntityId,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
}

impl Record for Instructor {
    fn id(&self) -> &EntityId {
        &self.id
    }
}

impl Record for Student {
    fn id(&self) -> &EntityId {
        &self.id
    }
}

/// Fields for creating an instructor or a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPerson {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
}

/// Partial update of an instructor or a student.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonPatch {
    #[serde(rename = "nome", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl PersonPatch {
    /// Check if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

impl NewPerson {
    pub(crate) fn into_instructor(self, id: EntityId) -> Instructor {
        Instructor {
            id,
            name: self.name,
            email: self.email,
        }
    }

    pub(crate) fn into_student(self, id: EntityId) -> Student {
        Student {
            id,
            name: self.name,
            email: self.email,
        }
    }
}

impl Merge<PersonPatch> for Instructor {
    fn merge(&mut self, patch: PersonPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
    }
}

impl Merge<PersonPatch> for Student {
    fn merge(&mut self, patch: PersonPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
    }
}

/// A blog post.
///
/// `author` is a snapshot of the instructor taken when the post was
/// written. Later edits to, or deletion of, that instructor do not touch
/// existing posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: EntityId,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "conteudo")]
    pub body: String,
    #[serde(rename = "dataCriacao")]
    pub created_at: UtcTimestamp,
    #[serde(rename = "autor")]
    pub author: Instructor,
}

impl Post {
    /// Whether the post was written by the account with this email.
    pub fn is_authored_by(&self, email: &str) -> bool {
        self.author.email == email
    }
}

impl Record for Post {
    fn id(&self) -> &EntityId {
        &self.id
    }
}

/// Fields for creating a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "conteudo")]
    pub body: String,
    #[serde(rename = "autor")]
    pub author: Instructor,
}

impl NewPost {
    pub(crate) fn into_post(self, id: EntityId, created_at: UtcTimestamp) -> Post {
        Post {
            id,
            title: self.title,
            description: self.description,
            body: self.body,
            created_at,
            author: self.author,
        }
    }
}

/// Partial update of a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPatch {
    #[serde(rename = "titulo", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "descricao", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "conteudo", skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(rename = "autor", skip_serializing_if = "Option::is_none")]
    pub author: Option<Instructor>,
}

impl PostPatch {
    /// Check if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.body.is_none()
            && self.author.is_none()
    }
}

impl Merge<PostPatch> for Post {
    fn merge(&mut self, patch: PostPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(body) = patch.body {
            self.body = body;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> EntityId {
        EntityId::new(s).unwrap()
    }

    fn silva() -> Instructor {
        Instructor {
            id: id("1"),
            name: "Professor Silva".into(),
            email: "professor@blog.com".into(),
        }
    }

    fn sample_post() -> Post {
        Post {
            id: id("1"),
            title: "Title".into(),
            description: "Desc".into(),
            body: "Body".into(),
            created_at: UtcTimestamp::from_ymd(2024, 1, 15),
            author: silva(),
        }
    }

    #[test]
    fn account_matching_is_exact() {
        let account = Account {
            id: id("1"),
            email: "professor@blog.com".into(),
            secret: "123456".into(),
            role: Role::Instructor,
            name: "Professor Silva".into(),
        };
        assert!(account.matches("professor@blog.com", "123456"));
        assert!(!account.matches("Professor@blog.com", "123456"));
        assert!(!account.matches("professor@blog.com", "1234567"));
        assert!(account.is_instructor());
        assert!(!account.is_student());
    }

    #[test]
    fn account_debug_redacts_secret() {
        let account = Account {
            id: id("2"),
            email: "aluno@blog.com".into(),
            secret: "hunter2".into(),
            role: Role::Student,
            name: "Aluno Costa".into(),
        };
        let debug = format!("{:?}", account);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("aluno@blog.com"));
    }

    #[test]
    fn post_patch_overlays_present_fields() {
        let mut post = sample_post();
        post.merge(PostPatch {
            title: Some("New".into()),
            ..Default::default()
        });
        assert_eq!(post.title, "New");
        assert_eq!(post.description, "Desc");
        assert_eq!(post.body, "Body");
        assert_eq!(post.author, silva());
    }

    #[test]
    fn empty_patch_is_identity() {
        let mut post = sample_post();
        post.merge(PostPatch::default());
        assert_eq!(post, sample_post());
        assert!(PostPatch::default().is_empty());
        assert!(PersonPatch::default().is_empty());
    }

    #[test]
    fn person_patch_applies_to_both_kinds() {
        let mut instructor = silva();
        instructor.merge(PersonPatch {
            email: Some("silva@blog.com".into()),
            name: None,
        });
        assert_eq!(instructor.name, "Professor Silva");
        assert_eq!(instructor.email, "silva@blog.com");

        let mut student = Student {
            id: id("3"),
            name: "Aluno Ferreira".into(),
            email: "aluno.ferreira@blog.com".into(),
        };
        student.merge(PersonPatch {
            name: Some("A. Ferreira".into()),
            email: None,
        });
        assert_eq!(student.name, "A. Ferreira");
        assert_eq!(student.email, "aluno.ferreira@blog.com");
    }

    #[test]
    fn post_uses_backend_field_names() {
        let json = serde_json::to_value(sample_post()).unwrap();
        assert_eq!(json["titulo"], "Title");
        assert_eq!(json["descricao"], "Desc");
        assert_eq!(json["conteudo"], "Body");
        assert_eq!(json["autor"]["nome"], "Professor Silva");
        assert!(json["dataCriacao"].as_str().unwrap().starts_with("2024-01-15"));
    }

    #[test]
    fn patch_serializes_only_present_fields() {
        let patch = PostPatch {
            body: Some("x".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(patch).unwrap();
        assert_eq!(json, serde_json::json!({ "conteudo": "x" }));
    }

    #[test]
    fn account_deserializes_without_secret() {
        let account: Account = serde_json::from_str(
            r#"{"id":"1","email":"professor@blog.com","tipo":"professor","nome":"Professor Silva"}"#,
        )
        .unwrap();
        assert!(account.secret.is_empty());
        assert_eq!(account.role, Role::Instructor);
    }
}
