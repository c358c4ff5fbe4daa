//! Gating matrix tests.
//!
//! Every engine operation is exercised for each kind of caller: signed
//! out, student, and instructor (as the author of a post and as someone
//! else). Denied calls must fail before the repository changes.
//!
//! # Test Categories
//!
//! 1. **Reading posts** - Any signed-in account
//! 2. **Writing posts** - Instructors; edits and deletes by the author only
//! 3. **Administration** - Instructors only
//! 4. **Validation** - Runs after the gate, before data access

use std::sync::Arc;

use classblog::access::mock::MockSource;
use classblog::access::{LocalSource, Repository};
use classblog::core::model::{NewPerson, PersonPatch, PostPatch};
use classblog::core::paging::PageRequest;
use classblog::core::types::EntityId;
use classblog::core::validate::{PostFields, ValidationError};
use classblog::engine::{Engine, EngineError};

// =============================================================================
// Test Fixtures
// =============================================================================

const SILVA: (&str, &str) = ("professor@blog.com", "123456");
const COSTA: (&str, &str) = ("aluno@blog.com", "123456");

/// Post 1 is Silva's, post 2 is Santos's.
const OWN_POST: &str = "1";
const OTHER_POST: &str = "2";

fn id(s: &str) -> EntityId {
    EntityId::new(s).unwrap()
}

fn fresh() -> (Engine, LocalSource) {
    let local = LocalSource::seeded();
    let engine = Engine::with_repository(Arc::new(Repository::local(local.clone())));
    (engine, local)
}

async fn engine_as(credentials: Option<(&str, &str)>) -> (Engine, LocalSource) {
    let (mut engine, local) = fresh();
    if let Some((email, secret)) = credentials {
        assert!(engine.sign_in(email, secret).await, "sign-in failed for {email}");
    }
    (engine, local)
}

fn fields() -> PostFields {
    PostFields {
        title: "T".into(),
        description: "D".into(),
        body: "B".into(),
    }
}

fn title_patch() -> PostPatch {
    PostPatch {
        title: Some("Changed".into()),
        ..PostPatch::default()
    }
}

fn person() -> NewPerson {
    NewPerson {
        name: "Nova Pessoa".into(),
        email: "nova@blog.com".into(),
    }
}

fn rename() -> PersonPatch {
    PersonPatch {
        name: Some("Renamed".into()),
        email: None,
    }
}

fn assert_denied<T: std::fmt::Debug>(result: Result<T, EngineError>) {
    assert!(
        matches!(result, Err(EngineError::Denied(_))),
        "expected denial, got {:?}",
        result
    );
}

// =============================================================================
// Category 1: Reading posts
// =============================================================================

mod reading {
    use super::*;

    #[tokio::test]
    async fn signed_out_cannot_read() {
        let (engine, _) = engine_as(None).await;
        assert_denied(engine.list_posts().await);
        assert_denied(engine.search_posts("react").await);
        assert_denied(engine.get_post(&id(OWN_POST)).await);
    }

    #[tokio::test]
    async fn student_reads_everything() {
        let (engine, _) = engine_as(Some(COSTA)).await;
        assert_eq!(engine.list_posts().await.unwrap().len(), 5);
        assert_eq!(engine.get_post(&id(OTHER_POST)).await.unwrap().id, id(OTHER_POST));
        assert_eq!(engine.search_posts("EXPO").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn own_posts_is_instructor_only() {
        let (student, _) = engine_as(Some(COSTA)).await;
        assert_denied(student.own_posts().await);

        let (instructor, _) = engine_as(Some(SILVA)).await;
        let own = instructor.own_posts().await.unwrap();
        assert_eq!(own.len(), 3);
        assert!(own.iter().all(|p| p.author.email == SILVA.0));
    }

    #[tokio::test]
    async fn sign_out_revokes_access() {
        let (mut engine, _) = engine_as(Some(SILVA)).await;
        engine.sign_out();
        assert_denied(engine.list_posts().await);
    }
}

// =============================================================================
// Category 2: Writing posts
// =============================================================================

mod writing {
    use super::*;

    #[tokio::test]
    async fn only_instructors_create() {
        for who in [None, Some(COSTA)] {
            let (engine, local) = engine_as(who).await;
            assert_denied(engine.create_post(fields()).await);
            assert_eq!(local.snapshot().posts().len(), 5);
        }

        let (engine, local) = engine_as(Some(SILVA)).await;
        let post = engine.create_post(fields()).await.unwrap();
        assert_eq!(post.author.email, SILVA.0);
        assert_eq!(local.snapshot().posts().len(), 6);
    }

    #[tokio::test]
    async fn edits_are_author_only() {
        for who in [None, Some(COSTA)] {
            let (engine, _) = engine_as(who).await;
            assert_denied(engine.edit_post(&id(OWN_POST), title_patch()).await);
        }

        let (engine, local) = engine_as(Some(SILVA)).await;
        assert_denied(engine.edit_post(&id(OTHER_POST), title_patch()).await);
        assert_eq!(local.snapshot().posts()[1].title, "Expo vs React Native CLI");

        let edited = engine.edit_post(&id(OWN_POST), title_patch()).await.unwrap();
        assert_eq!(edited.title, "Changed");
        assert_eq!(edited.author.email, SILVA.0);
    }

    #[tokio::test]
    async fn deletes_are_author_only() {
        let (student, local) = engine_as(Some(COSTA)).await;
        assert_denied(student.delete_post(&id(OWN_POST)).await);
        assert_eq!(local.snapshot().posts().len(), 5);

        let (engine, local) = engine_as(Some(SILVA)).await;
        assert_denied(engine.delete_post(&id(OTHER_POST)).await);
        assert!(engine.delete_post(&id(OWN_POST)).await.unwrap());
        assert_eq!(local.snapshot().posts().len(), 4);
    }

    #[tokio::test]
    async fn deleting_a_missing_post() {
        let (student, _) = engine_as(Some(COSTA)).await;
        assert_denied(student.delete_post(&id("404")).await);

        let (instructor, _) = engine_as(Some(SILVA)).await;
        assert!(!instructor.delete_post(&id("404")).await.unwrap());
    }

    #[tokio::test]
    async fn role_is_checked_before_any_lookup() {
        for who in [None, Some(COSTA)] {
            let primary = MockSource::seeded();
            let repository = Repository::with_primary(Arc::new(primary.clone()), LocalSource::seeded());
            let mut engine = Engine::with_repository(Arc::new(repository));
            if let Some((email, secret)) = who {
                assert!(engine.sign_in(email, secret).await);
            }
            primary.clear_operations();

            assert_denied(engine.edit_post(&id("404"), title_patch()).await);
            assert_denied(engine.edit_post(&id(OWN_POST), title_patch()).await);
            assert_denied(engine.delete_post(&id("404")).await);
            assert_denied(engine.delete_post(&id(OWN_POST)).await);
            assert!(primary.operations().is_empty(), "{:?}", primary.operations());
        }
    }

    #[tokio::test]
    async fn editing_a_missing_post_is_not_found() {
        let (engine, _) = engine_as(Some(SILVA)).await;
        let err = engine.edit_post(&id("404"), title_patch()).await.unwrap_err();
        assert!(matches!(err, EngineError::Source(_)), "{:?}", err);
    }
}

// =============================================================================
// Category 3: Administration
// =============================================================================

mod administration {
    use super::*;

    #[tokio::test]
    async fn students_and_signed_out_are_denied() {
        for who in [None, Some(COSTA)] {
            let (engine, local) = engine_as(who).await;

            assert_denied(engine.list_instructors(PageRequest::default()).await);
            assert_denied(engine.all_instructors(10).await);
            assert_denied(engine.create_instructor(person()).await);
            assert_denied(engine.update_instructor(&id("1"), rename()).await);
            assert_denied(engine.delete_instructor(&id("1")).await);

            assert_denied(engine.list_students(PageRequest::default()).await);
            assert_denied(engine.all_students(10).await);
            assert_denied(engine.create_student(person()).await);
            assert_denied(engine.update_student(&id("1"), rename()).await);
            assert_denied(engine.delete_student(&id("1")).await);

            let store = local.snapshot();
            assert_eq!(store.instructors().len(), 2);
            assert_eq!(store.students().len(), 3);
            assert_eq!(store.students()[0].name, "Aluno Costa");
        }
    }

    #[tokio::test]
    async fn instructors_manage_everyone() {
        let (engine, local) = engine_as(Some(SILVA)).await;

        let page = engine.list_students(PageRequest::new(2, 2)).await.unwrap();
        assert_eq!(page.total, 3);
        assert_eq!(page.items.len(), 1);
        assert_eq!(engine.all_instructors(1).await.unwrap().len(), 2);

        let student = engine.create_student(person()).await.unwrap();
        engine.update_student(&student.id, rename()).await.unwrap();
        assert!(engine.delete_student(&student.id).await.unwrap());
        assert!(!engine.delete_student(&student.id).await.unwrap());

        let instructor = engine.create_instructor(person()).await.unwrap();
        let renamed = engine.update_instructor(&instructor.id, rename()).await.unwrap();
        assert_eq!(renamed.name, "Renamed");
        assert_eq!(local.snapshot().instructors().len(), 3);
    }
}

// =============================================================================
// Category 4: Validation
// =============================================================================

mod validation {
    use super::*;

    #[tokio::test]
    async fn gate_runs_before_validation() {
        let (student, _) = engine_as(Some(COSTA)).await;
        let blank = PostFields {
            title: "".into(),
            ..fields()
        };
        assert_denied(student.create_post(blank).await);
    }

    #[tokio::test]
    async fn invalid_input_never_reaches_the_store() {
        let (engine, local) = engine_as(Some(SILVA)).await;

        let blank = PostFields {
            body: "   ".into(),
            ..fields()
        };
        let err = engine.create_post(blank).await.unwrap_err();
        assert!(matches!(
            err,
            EngineError::Validation(ValidationError::Required(_))
        ));

        let bad_email = NewPerson {
            name: "X".into(),
            email: "not-an-email".into(),
        };
        let err = engine.create_student(bad_email).await.unwrap_err();
        assert!(matches!(
            err,
            EngineError::Validation(ValidationError::InvalidEmail(_))
        ));

        let err = engine
            .edit_post(&id(OWN_POST), PostPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::Validation(ValidationError::EmptyPatch)
        ));

        let store = local.snapshot();
        assert_eq!(store.posts().len(), 5);
        assert_eq!(store.students().len(), 3);
        assert_eq!(store.posts()[0].title, "Introdução ao React Native");
    }
}
