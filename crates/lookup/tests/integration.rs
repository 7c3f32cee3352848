//! Integration tests for the lookup crate.
//!
//! Exercises the public API the way the CLI and other callers use it.

use labwork_lookup::{
    build_index, find_user_by_name, Collection, CollectionId, IndexCache, LookupError, Record,
};
use serde_json::json;
use std::sync::Arc;

fn sample_users() -> Collection {
    Collection::from_json(
        r#"[
            {"name": "alice", "age": 30},
            {"name": "bob", "age": 25},
            {"name": "alice", "age": 99}
        ]"#,
    )
    .expect("Failed to parse sample users")
}

fn user(name: &str, age: u32) -> Record {
    Record::try_from(json!({"name": name, "age": age})).unwrap()
}

// =============================================================================
// Lookup Semantics
// =============================================================================

mod lookup {
    use super::*;

    #[test]
    fn test_every_present_key_is_found() {
        let users: Collection = (0..50).map(|i| user(&format!("user-{i}"), i)).collect();
        let cache = IndexCache::new();

        for i in 0..50 {
            let found = cache
                .lookup(&users, &format!("user-{i}"))
                .unwrap()
                .expect("present key should be found");
            assert_eq!(found.get("age"), Some(&json!(i)));
        }
        for missing in ["user-50", "USER-1", ""] {
            assert!(cache.lookup(&users, missing).unwrap().is_none());
        }
        assert_eq!(cache.builds(), 1);
    }

    #[test]
    fn test_example_collection() {
        let cache = IndexCache::new();
        let users = sample_users();

        let alice = find_user_by_name(&cache, &users, "alice").unwrap().unwrap();
        assert_eq!(
            serde_json::to_value(alice.as_ref()).unwrap(),
            json!({"name": "alice", "age": 99})
        );
        assert!(find_user_by_name(&cache, &users, "carol").unwrap().is_none());
    }

    #[test]
    fn test_repeat_lookup_returns_same_record_without_rescan() {
        let cache = IndexCache::new();
        let users = sample_users();

        let first = cache.lookup(&users, "alice").unwrap().unwrap();
        let second = cache.lookup(&users, "alice").unwrap().unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.builds(), 1);
        assert_eq!(cache.index_for(&users).unwrap().scanned(), 3);
    }

    #[test]
    fn test_shared_id_shares_cached_index() {
        let cache = IndexCache::new();
        let id = CollectionId::new();
        let first = Collection::with_id(id, vec![user("alice", 30)]);
        let second = Collection::with_id(id, vec![user("bob", 25)]);

        assert!(cache.lookup(&first, "alice").unwrap().is_some());

        // The identity, not the contents, selects the index.
        assert!(cache.lookup(&second, "alice").unwrap().is_some());
        assert!(cache.lookup(&second, "bob").unwrap().is_none());
        assert_eq!(cache.builds(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_equal_collections_have_separate_entries() {
        let cache = IndexCache::new();
        let a = sample_users();
        let b = sample_users();

        cache.lookup(&a, "bob").unwrap();
        cache.lookup(&b, "bob").unwrap();

        assert_eq!(cache.builds(), 2);
        assert_eq!(cache.len(), 2);
    }
}

// =============================================================================
// Staleness
// =============================================================================

mod staleness {
    use super::*;

    #[test]
    fn test_mutation_after_first_lookup_is_not_seen() {
        let cache = IndexCache::new();
        let mut users = sample_users();
        assert!(cache.lookup(&users, "alice").unwrap().is_some());

        users.push(user("dave", 41));

        assert!(cache.lookup(&users, "dave").unwrap().is_none());
        assert_eq!(cache.builds(), 1);
    }

    /// The index holds its own copies of the records, taken at build time,
    /// so payload edits made afterwards stay invisible until `forget`.
    #[test]
    fn test_payload_edits_after_build_are_not_seen() {
        let cache = IndexCache::new();
        let mut users = sample_users();
        cache.lookup(&users, "bob").unwrap();

        users.records_mut()[1].insert("age", 26);

        let bob = cache.lookup(&users, "bob").unwrap().unwrap();
        assert_eq!(bob.get("age"), Some(&json!(25)));
    }

    #[test]
    fn test_forget_rebuilds_with_mutations() {
        let cache = IndexCache::new();
        let mut users = sample_users();
        cache.lookup(&users, "alice").unwrap();

        users.push(user("dave", 41));
        assert!(cache.forget(users.id()));

        let dave = cache.lookup(&users, "dave").unwrap().unwrap();
        assert_eq!(dave.get("age"), Some(&json!(41)));
        assert_eq!(cache.builds(), 2);
    }
}

// =============================================================================
// Errors
// =============================================================================

mod errors {
    use super::*;

    #[test]
    fn test_missing_key_field_fails_fast() {
        let records: Vec<Record> =
            serde_json::from_value(json!([{"name": "alice"}, {"age": 3}])).unwrap();

        let err = build_index(&records, "name").unwrap_err();
        assert!(matches!(err, LookupError::MissingKeyField { position: 1, .. }));
        assert_eq!(err.to_string(), "record 1 is missing key field 'name'");
    }

    #[test]
    fn test_missing_key_field_through_cache() {
        let cache = IndexCache::new();
        let users = Collection::from_json(r#"[{"age": 3}]"#).unwrap();

        let result = cache.lookup(&users, "alice");
        assert!(matches!(result, Err(LookupError::MissingKeyField { .. })));
        assert!(!cache.contains(users.id()));
    }
}

// =============================================================================
// Concurrency
// =============================================================================

mod concurrency {
    use super::*;

    #[test]
    fn test_concurrent_lookups_build_once() {
        let cache = Arc::new(IndexCache::new());
        let users = Arc::new(sample_users());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let users = Arc::clone(&users);
                std::thread::spawn(move || cache.lookup(&users, "bob").unwrap().unwrap())
            })
            .collect();

        let found: Vec<Arc<Record>> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(cache.builds(), 1);
        assert!(found.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    }
}
