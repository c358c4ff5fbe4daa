//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Output is formatted consistently and respects the quiet flag.
//! Diagnostics go to stderr so listings on stdout stay pipeable.

use std::fmt::Display;

use crate::core::model::{Instructor, Post, Student};
use crate::core::types::EntityId;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Print a success message (respects quiet mode).
pub fn success(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// One line per post: id, date, title, author.
pub fn format_post_line(post: &Post) -> String {
    format!(
        "{:>14}  {}  {}  ({})",
        post.id.as_str(),
        post.created_at.date_string(),
        post.title,
        post.author.name
    )
}

/// Full post view.
pub fn format_post(post: &Post) -> String {
    format!(
        "{}\n{}\n\nBy {} <{}> on {}  [id {}]\n\n{}",
        post.title,
        post.description,
        post.author.name,
        post.author.email,
        post.created_at.date_string(),
        post.id,
        post.body
    )
}

/// One line per person: id, name, email.
pub fn format_person_line(id: &EntityId, name: &str, email: &str) -> String {
    format!("{:>14}  {}  <{}>", id.as_str(), name, email)
}

/// Instructor listing line.
pub fn format_instructor_line(instructor: &Instructor) -> String {
    format_person_line(&instructor.id, &instructor.name, &instructor.email)
}

/// Student listing line.
pub fn format_student_line(student: &Student) -> String {
    format_person_line(&student.id, &student.name, &student.email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;

    #[test]
    fn verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
    }

    #[test]
    fn post_line() {
        let store = Store::seeded();
        let line = format_post_line(&store.posts()[1]);
        assert!(line.ends_with("2  2024-01-20  Expo vs React Native CLI  (Professor Santos)"));
    }

    #[test]
    fn post_detail_has_body_and_author() {
        let store = Store::seeded();
        let text = format_post(&store.posts()[0]);
        assert!(text.starts_with("Introdução ao React Native\n"));
        assert!(text.contains("By Professor Silva <professor@blog.com> on 2024-01-15"));
        assert!(text.contains("Hot reload"));
    }

    #[test]
    fn person_line() {
        let store = Store::seeded();
        let line = format_student_line(&store.students()[2]);
        assert!(line.ends_with("3  Aluno Ferreira  <aluno.ferreira@blog.com>"));
    }
}
