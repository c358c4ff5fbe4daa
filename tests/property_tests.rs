//! Property-based tests for core domain types.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated inputs.

use std::collections::HashSet;

use proptest::prelude::*;

use classblog::access::{DataSource, LocalSource};
use classblog::core::model::{Instructor, Merge, NewPerson, PersonPatch, Post, PostPatch};
use classblog::core::paging::{PageRequest, Pager};
use classblog::core::types::{EntityId, UtcTimestamp};
use classblog::store::Store;

/// Strategy for generating identifier characters that are always allowed.
fn id_char() -> impl Strategy<Value = char> {
    prop_oneof![
        prop::char::range('a', 'z'),
        prop::char::range('A', 'Z'),
        prop::char::range('0', '9'),
        Just('-'),
        Just('_'),
        Just('.'),
    ]
}

fn valid_id() -> impl Strategy<Value = String> {
    prop::collection::vec(id_char(), 1..40).prop_map(|chars| chars.into_iter().collect())
}

fn sample_post() -> Post {
    Store::seeded().posts()[0].clone()
}

proptest! {
    /// A page never holds more than its size and always reports the full total.
    #[test]
    fn page_respects_size_and_total(len in 0usize..60, page in 0u32..15, size in 0u32..15) {
        let items: Vec<usize> = (0..len).collect();
        let result = PageRequest::new(page, size).slice(&items);

        prop_assert!(result.items.len() <= size as usize);
        prop_assert_eq!(result.total, len);
        if page == 0 || size == 0 {
            prop_assert!(result.items.is_empty());
        }
    }

    /// Consecutive pages concatenate back to the collection.
    #[test]
    fn pages_tile_the_collection(len in 0usize..60, size in 1u32..15) {
        let items: Vec<usize> = (0..len).collect();
        let mut joined = Vec::new();
        let mut request = PageRequest::first(size);
        loop {
            let page = request.slice(&items);
            if page.is_empty() {
                break;
            }
            joined.extend(page.items);
            request = request.next();
        }
        prop_assert_eq!(joined, items);
    }

    /// A pager fed by slices ends holding every item exactly once.
    #[test]
    fn pager_collects_everything(len in 0usize..60, size in 1u32..15) {
        let items: Vec<usize> = (0..len).collect();
        let mut pager = Pager::new(size);
        let mut rounds = 0;
        while pager.has_more() {
            let page = pager.next_request().slice(&items);
            pager.absorb(page);
            rounds += 1;
            prop_assert!(rounds <= len + 2, "pager did not stop");
        }
        prop_assert_eq!(pager.total(), Some(len));
        prop_assert_eq!(pager.into_items(), items);
    }

    /// Fields left out of a patch keep their values.
    #[test]
    fn post_merge_changes_only_given_fields(
        title in prop::option::of(".{0,20}"),
        description in prop::option::of(".{0,20}"),
        body in prop::option::of(".{0,20}"),
    ) {
        let original = sample_post();
        let mut merged = original.clone();
        merged.merge(PostPatch {
            title: title.clone(),
            description: description.clone(),
            body: body.clone(),
            author: None,
        });

        prop_assert_eq!(&merged.title, title.as_ref().unwrap_or(&original.title));
        prop_assert_eq!(
            &merged.description,
            description.as_ref().unwrap_or(&original.description)
        );
        prop_assert_eq!(&merged.body, body.as_ref().unwrap_or(&original.body));
        prop_assert_eq!(&merged.id, &original.id);
        prop_assert_eq!(&merged.author, &original.author);
        prop_assert_eq!(merged.created_at, original.created_at);
    }

    #[test]
    fn person_merge_changes_only_given_fields(
        name in prop::option::of("[a-zA-Z ]{1,20}"),
        email in prop::option::of("[a-z]{1,10}@[a-z]{1,10}"),
    ) {
        let original = Instructor {
            id: EntityId::new("7").unwrap(),
            name: "Original".into(),
            email: "original@blog.com".into(),
        };
        let mut merged = original.clone();
        merged.merge(PersonPatch { name: name.clone(), email: email.clone() });

        prop_assert_eq!(&merged.name, name.as_ref().unwrap_or(&original.name));
        prop_assert_eq!(&merged.email, email.as_ref().unwrap_or(&original.email));
        prop_assert_eq!(merged.id, original.id);
    }

    /// Valid identifiers round-trip through their string form.
    #[test]
    fn valid_ids_are_accepted(s in valid_id()) {
        let id = EntityId::new(s.clone()).unwrap();
        prop_assert_eq!(id.as_str(), s.as_str());
        prop_assert_eq!(id.to_string(), s);
    }

    /// Identifiers with path separators or whitespace are rejected.
    #[test]
    fn unsafe_ids_are_rejected(
        prefix in valid_id(),
        bad in prop::sample::select(vec!['/', '?', '#', ' ', '\t', '\n']),
        suffix in valid_id(),
    ) {
        let s = format!("{prefix}{bad}{suffix}");
        prop_assert!(EntityId::new(s).is_err());
    }

    /// Records created in a burst all get distinct identifiers.
    #[test]
    fn rapid_creates_get_distinct_ids(count in 1usize..40) {
        let source = LocalSource::new(Store::new());
        let ids = tokio_test::block_on(async {
            let mut ids = Vec::new();
            for n in 0..count {
                let student = source
                    .create_student(NewPerson {
                        name: format!("Aluno {n}"),
                        email: format!("aluno{n}@blog.com"),
                    })
                    .await
                    .unwrap();
                ids.push(student.id);
            }
            ids
        });

        let unique: HashSet<_> = ids.iter().collect();
        prop_assert_eq!(unique.len(), count);
    }
}

#[test]
fn seed_timestamps_are_fixed() {
    let first = Store::seeded().posts()[0].created_at;
    let again = Store::seeded().posts()[0].created_at;
    assert_eq!(first, again);
    assert!(first < UtcTimestamp::now());
}
