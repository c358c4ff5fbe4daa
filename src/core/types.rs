//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`EntityId`] - Identifier of a record within its collection
//! - [`Role`] - Account role (instructor or student)
//! - [`UtcTimestamp`] - RFC3339 timestamp
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, so an identifier can always be placed in a
//! request path without escaping.
//!
//! # Examples
//!
//! ```
//! use classblog::core::types::{EntityId, Role};
//!
//! let id = EntityId::new("42").unwrap();
//! assert_eq!(id.as_str(), "42");
//!
//! assert_eq!(serde_json::to_string(&Role::Instructor).unwrap(), "\"professor\"");
//! assert!(EntityId::new("a/b").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

/// Identifier of a record within one collection.
///
/// Identifiers are opaque strings. Seeded records use small integers
/// (`"1"`, `"2"`, ...); records created at runtime get a millisecond
/// timestamp. An identifier:
/// - Cannot be empty
/// - Cannot contain `/`, `?`, `#`, whitespace or control characters
///
/// # Example
///
/// ```
/// use classblog::core::types::EntityId;
///
/// let id = EntityId::new("1718000000000").unwrap();
/// assert_eq!(id.to_string(), "1718000000000");
///
/// assert!(EntityId::new("").is_err());
/// assert!(EntityId::new("has space").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityId(String);

impl EntityId {
    /// Create a new validated identifier.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidId` if the identifier is empty or contains
    /// characters that are not allowed in a request path segment.
    pub fn new(id: impl Into<String>) -> Result<Self, TypeError> {
        let id = id.into();
        Self::validate(&id)?;
        Ok(Self(id))
    }

    /// Identifier from a number: a seed ordinal or a millisecond timestamp.
    pub(crate) fn from_number(n: i64) -> Self {
        Self(n.to_string())
    }

    fn validate(id: &str) -> Result<(), TypeError> {
        if id.is_empty() {
            return Err(TypeError::InvalidId("identifier cannot be empty".into()));
        }

        const INVALID_CHARS: [char; 3] = ['/', '?', '#'];
        for c in INVALID_CHARS {
            if id.contains(c) {
                return Err(TypeError::InvalidId(format!(
                    "identifier cannot contain '{c}'"
                )));
            }
        }

        if id.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(TypeError::InvalidId(
                "identifier cannot contain whitespace or control characters".into(),
            ));
        }

        Ok(())
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EntityId {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<EntityId> for String {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for EntityId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Account role.
///
/// The backend encodes roles as `"professor"` and `"aluno"`; those are the
/// serialized forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// May author posts and administer instructor and student records.
    #[serde(rename = "professor")]
    Instructor,
    /// Reads posts.
    #[serde(rename = "aluno")]
    Student,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Instructor => write!(f, "instructor"),
            Role::Student => write!(f, "student"),
        }
    }
}

/// A UTC timestamp, serialized as RFC3339.
///
/// # Example
///
/// ```
/// use classblog::core::types::UtcTimestamp;
///
/// let a = UtcTimestamp::now();
/// let b = UtcTimestamp::now();
/// assert!(a <= b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UtcTimestamp(chrono::DateTime<chrono::Utc>);

impl UtcTimestamp {
    /// Create a timestamp for the current moment.
    pub fn now() -> Self {
        Self(chrono::Utc::now())
    }

    /// Midnight UTC on the given calendar day.
    ///
    /// Out-of-range dates collapse to the Unix epoch.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        use chrono::TimeZone;
        Self(
            chrono::Utc
                .with_ymd_and_hms(year, month, day, 0, 0, 0)
                .single()
                .unwrap_or_default(),
        )
    }

    /// Format as a short calendar date (`YYYY-MM-DD`).
    pub fn date_string(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

impl std::fmt::Display for UtcTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod entity_id {
        use super::*;

        #[test]
        fn accepts_numeric_and_timestamp_ids() {
            assert!(EntityId::new("1").is_ok());
            assert!(EntityId::new("1718000000000").is_ok());
            assert!(EntityId::new("abc-123_x").is_ok());
        }

        #[test]
        fn rejects_empty() {
            assert_eq!(
                EntityId::new(""),
                Err(TypeError::InvalidId("identifier cannot be empty".into()))
            );
        }

        #[test]
        fn rejects_path_characters() {
            assert!(EntityId::new("a/b").is_err());
            assert!(EntityId::new("a?b").is_err());
            assert!(EntityId::new("a#b").is_err());
        }

        #[test]
        fn rejects_whitespace() {
            assert!(EntityId::new("a b").is_err());
            assert!(EntityId::new("a\tb").is_err());
            assert!(EntityId::new("a\nb").is_err());
        }

        #[test]
        fn from_number_round_trips_through_display() {
            let id = EntityId::from_number(1_718_000_000_123);
            assert_eq!(id.as_str(), "1718000000123");
            assert_eq!(id.to_string().parse::<EntityId>().unwrap(), id);
        }

        #[test]
        fn serde_rejects_invalid() {
            let result: Result<EntityId, _> = serde_json::from_str("\"a/b\"");
            assert!(result.is_err());

            let ok: EntityId = serde_json::from_str("\"7\"").unwrap();
            assert_eq!(ok.as_str(), "7");
        }
    }

    mod role {
        use super::*;

        #[test]
        fn serializes_with_wire_names() {
            assert_eq!(
                serde_json::to_string(&Role::Instructor).unwrap(),
                "\"professor\""
            );
            assert_eq!(serde_json::to_string(&Role::Student).unwrap(), "\"aluno\"");
        }

        #[test]
        fn display() {
            assert_eq!(Role::Instructor.to_string(), "instructor");
            assert_eq!(Role::Student.to_string(), "student");
        }
    }

    mod timestamp {
        use super::*;

        #[test]
        fn from_ymd_is_midnight_utc() {
            let ts = UtcTimestamp::from_ymd(2024, 1, 15);
            assert_eq!(ts.to_string(), "2024-01-15T00:00:00+00:00");
            assert_eq!(ts.date_string(), "2024-01-15");
        }

        #[test]
        fn invalid_date_collapses_to_epoch() {
            let ts = UtcTimestamp::from_ymd(2024, 2, 30);
            assert_eq!(ts.to_string(), "1970-01-01T00:00:00+00:00");
        }

        #[test]
        fn deserializes_iso_strings() {
            let ts: UtcTimestamp = serde_json::from_str("\"2024-01-15T03:00:00.000Z\"").unwrap();
            assert_eq!(ts.date_string(), "2024-01-15");
        }
    }
}
