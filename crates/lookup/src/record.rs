//! Records and the caller-owned collections that hold them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::{LookupError, LookupResult};

/// A single data item: a JSON object with a key field plus opaque payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    /// Wrap a field map without checking for a key field.
    ///
    /// `build_index` rejects unchecked records that turn out to lack the key.
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Wrap a field map, requiring `key_field` to hold a string.
    pub fn keyed(fields: Map<String, Value>, key_field: &str) -> LookupResult<Self> {
        let record = Self::from_fields(fields);
        record.key_at(key_field, 0)?;
        Ok(record)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Set a field, returning the previous value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(field.into(), value.into())
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Read the key of a record sitting at `position` in a collection.
    pub(crate) fn key_at(&self, key_field: &str, position: usize) -> LookupResult<&str> {
        match self.fields.get(key_field) {
            Some(Value::String(key)) => Ok(key),
            Some(_) => Err(LookupError::InvalidKeyType {
                position,
                field: key_field.to_string(),
            }),
            None => Err(LookupError::MissingKeyField {
                position,
                field: key_field.to_string(),
            }),
        }
    }
}

impl TryFrom<Value> for Record {
    type Error = LookupError;

    fn try_from(value: Value) -> LookupResult<Self> {
        match value {
            Value::Object(fields) => Ok(Self::from_fields(fields)),
            _ => Err(LookupError::NotAnObject { position: 0 }),
        }
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Object(record.fields)
    }
}

/// Stable identity of a collection, used as the index cache key.
///
/// Two collections with equal contents still have different identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollectionId(Uuid);

impl CollectionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CollectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for CollectionId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl std::fmt::Display for CollectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered sequence of records owned by the caller.
///
/// Mutating the records keeps the identity, so any index cached for this
/// collection goes stale. Cloning yields a distinct collection with a fresh
/// identity.
#[derive(Debug, Default)]
pub struct Collection {
    id: CollectionId,
    records: Vec<Record>,
}

impl Collection {
    pub fn new(records: Vec<Record>) -> Self {
        Self::with_id(CollectionId::new(), records)
    }

    /// Build a collection under a caller-chosen identity.
    pub fn with_id(id: CollectionId, records: Vec<Record>) -> Self {
        Self { id, records }
    }

    /// Parse a JSON array of objects.
    pub fn from_json(json: &str) -> LookupResult<Self> {
        let values: Vec<Value> = serde_json::from_str(json)?;
        let records = values
            .into_iter()
            .enumerate()
            .map(|(position, value)| match value {
                Value::Object(fields) => Ok(Record::from_fields(fields)),
                _ => Err(LookupError::NotAnObject { position }),
            })
            .collect::<LookupResult<Vec<_>>>()?;
        Ok(Self::new(records))
    }

    pub fn id(&self) -> CollectionId {
        self.id
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Mutable access to the records. The identity does not change.
    pub fn records_mut(&mut self) -> &mut Vec<Record> {
        &mut self.records
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Clone for Collection {
    fn clone(&self) -> Self {
        Self::new(self.records.clone())
    }
}

impl FromIterator<Record> for Collection {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
