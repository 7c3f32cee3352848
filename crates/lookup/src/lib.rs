//! Name-indexed record lookup.
//!
//! This crate provides:
//! - `Record`: a JSON object with a designated key field
//! - `Collection`: caller-owned records tagged with a stable identity
//! - `build_index`: one linear scan from key value to record (last write wins)
//! - `IndexCache`: memoizes indexes per collection identity
//!
//! The cache never notices in-place mutation of a collection. After mutating,
//! call `IndexCache::forget` or expect stale results.
//!
//! # Example
//!
//! ```
//! use labwork_lookup::{Collection, IndexCache};
//!
//! let users = Collection::from_json(r#"[{"name": "alice", "age": 30}]"#).unwrap();
//! let cache = IndexCache::new();
//!
//! let alice = cache.lookup(&users, "alice").unwrap().unwrap();
//! assert_eq!(alice.get("age"), Some(&serde_json::json!(30)));
//! assert!(cache.lookup(&users, "carol").unwrap().is_none());
//! ```

mod cache;
mod error;
mod index;
mod record;

pub use cache::{find_user_by_name, IndexCache, LookupConfig, DEFAULT_KEY_FIELD};
pub use error::{LookupError, LookupResult};
pub use index::{build_index, Index};
pub use record::{Collection, CollectionId, Record};
