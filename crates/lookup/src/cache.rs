//! Identity-keyed index cache.
//!
//! Indexes are memoized per `CollectionId`. The cache keys on identity, not
//! content, so records added to or edited in a collection after its first
//! lookup are invisible until the entry is forgotten.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::error::LookupResult;
use crate::index::{build_index, Index};
use crate::record::{Collection, CollectionId, Record};

/// Key field used when none is configured.
pub const DEFAULT_KEY_FIELD: &str = "name";

/// Configuration for an `IndexCache`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Field whose string value keys each record.
    pub key_field: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            key_field: DEFAULT_KEY_FIELD.to_string(),
        }
    }
}

/// Cache of indexes keyed by collection identity.
///
/// Entries are never evicted. Lookups from several threads are safe: the
/// check-then-insert runs under one lock, so each identity is indexed once.
#[derive(Debug, Default)]
pub struct IndexCache {
    config: LookupConfig,
    entries: Mutex<HashMap<CollectionId, Arc<Index>>>,
    builds: AtomicU64,
}

impl IndexCache {
    /// Create a cache keyed on the default `name` field.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LookupConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn key_field(&self) -> &str {
        &self.config.key_field
    }

    /// Find the record whose key equals `key`.
    ///
    /// The first call for a collection builds and stores its index; later
    /// calls reuse it without scanning. Returns `Ok(None)` for an absent key.
    pub fn lookup(&self, collection: &Collection, key: &str) -> LookupResult<Option<Arc<Record>>> {
        let index = self.index_for(collection)?;
        Ok(index.get(key).cloned())
    }

    /// Get the cached index for `collection`, building it on first use.
    ///
    /// A failed build leaves the cache untouched.
    pub fn index_for(&self, collection: &Collection) -> LookupResult<Arc<Index>> {
        let id = collection.id();
        let mut entries = self.entries.lock().expect("index cache mutex poisoned");

        if let Some(index) = entries.get(&id) {
            tracing::trace!(collection = %id, "Index cache hit");
            return Ok(Arc::clone(index));
        }

        tracing::debug!(collection = %id, records = collection.len(), "Index cache miss");
        let index = Arc::new(build_index(collection.records(), &self.config.key_field)?);
        self.builds.fetch_add(1, Ordering::Relaxed);
        entries.insert(id, Arc::clone(&index));
        Ok(index)
    }

    /// Number of index builds this cache has performed.
    pub fn builds(&self) -> u64 {
        self.builds.load(Ordering::Relaxed)
    }

    /// Drop the index cached for `id`. Returns whether one was present.
    ///
    /// The next lookup against that identity rescans the collection.
    pub fn forget(&self, id: CollectionId) -> bool {
        let removed = self
            .entries
            .lock()
            .expect("index cache mutex poisoned")
            .remove(&id)
            .is_some();
        if removed {
            tracing::debug!(collection = %id, "Forgot cached index");
        }
        removed
    }

    pub fn clear(&self) {
        self.entries
            .lock()
            .expect("index cache mutex poisoned")
            .clear();
    }

    pub fn contains(&self, id: CollectionId) -> bool {
        self.entries
            .lock()
            .expect("index cache mutex poisoned")
            .contains_key(&id)
    }

    /// Number of cached indexes.
    pub fn len(&self) -> usize {
        self.entries.lock().expect("index cache mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Find a user's profile by name.
///
/// Thin wrapper over `IndexCache::lookup`; `users` is keyed by the cache's
/// key field, which is `name` unless configured otherwise.
pub fn find_user_by_name(
    cache: &IndexCache,
    users: &Collection,
    name: &str,
) -> LookupResult<Option<Arc<Record>>> {
    cache.lookup(users, name)
}
