//! core::validate
//!
//! Input validation for records entered by a user.
//!
//! The access layer stores whatever it is given; these checks run in the
//! engine before a create or edit reaches it.

use thiserror::Error;

use super::model::{NewPerson, PersonPatch, PostPatch};

/// A rejected form field.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("field '{0}' is required")]
    Required(&'static str),

    #[error("invalid email address: '{0}'")]
    InvalidEmail(String),

    #[error("nothing to update")]
    EmptyPatch,
}

/// Title, description and body of a post about to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFields {
    pub title: String,
    pub description: String,
    pub body: String,
}

fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(())
}

fn optional(field: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(v) => required(field, v),
        None => Ok(()),
    }
}

/// Check an email address.
///
/// Only the shape matters here: non-blank and containing `@`.
pub fn email(value: &str) -> Result<(), ValidationError> {
    required("email", value)?;
    if !value.contains('@') {
        return Err(ValidationError::InvalidEmail(value.to_string()));
    }
    Ok(())
}

pub fn post_fields(fields: &PostFields) -> Result<(), ValidationError> {
    required("title", &fields.title)?;
    required("description", &fields.description)?;
    required("body", &fields.body)
}

pub fn post_patch(patch: &PostPatch) -> Result<(), ValidationError> {
    if patch.is_empty() {
        return Err(ValidationError::EmptyPatch);
    }
    optional("title", patch.title.as_deref())?;
    optional("description", patch.description.as_deref())?;
    optional("body", patch.body.as_deref())
}

pub fn new_person(person: &NewPerson) -> Result<(), ValidationError> {
    required("name", &person.name)?;
    email(&person.email)
}

pub fn person_patch(patch: &PersonPatch) -> Result<(), ValidationError> {
    if patch.is_empty() {
        return Err(ValidationError::EmptyPatch);
    }
    optional("name", patch.name.as_deref())?;
    match &patch.email {
        Some(e) => email(e),
        None => Ok(()),
    }
}
