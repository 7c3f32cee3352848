//! Key value to record index, built by one linear scan.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::LookupResult;
use crate::record::Record;

/// Derived mapping from key value to record.
#[derive(Debug, Clone, Default)]
pub struct Index {
    entries: HashMap<String, Arc<Record>>,
    scanned: usize,
}

impl Index {
    pub fn get(&self, key: &str) -> Option<&Arc<Record>> {
        self.entries.get(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of records scanned while building this index.
    pub fn scanned(&self) -> usize {
        self.scanned
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }
}

/// Build an index over `records` keyed by `key_field`.
///
/// When several records share a key, the one scanned last wins. Fails on the
/// first record without a string key; no partial index is returned.
pub fn build_index(records: &[Record], key_field: &str) -> LookupResult<Index> {
    let mut entries = HashMap::with_capacity(records.len());

    for (position, record) in records.iter().enumerate() {
        let key = record.key_at(key_field, position)?;
        if entries
            .insert(key.to_string(), Arc::new(record.clone()))
            .is_some()
        {
            tracing::trace!(key, position, "Duplicate key replaces earlier record");
        }
    }

    tracing::debug!(
        records = records.len(),
        keys = entries.len(),
        key_field,
        "Built name index"
    );

    Ok(Index {
        entries,
        scanned: records.len(),
    })
}
