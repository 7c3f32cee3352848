//! Error types for record indexing and lookup.

use thiserror::Error;

/// Result type for lookup operations.
pub type LookupResult<T> = Result<T, LookupError>;

/// Errors that can occur while building records, collections, or indexes.
///
/// A key that is simply absent from an index is not an error; lookups
/// report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum LookupError {
    /// A record has no value under the key field.
    ///
    /// `position` is the record's offset in the scanned collection, or 0
    /// when a single record is checked on its own.
    #[error("record {position} is missing key field '{field}'")]
    MissingKeyField { position: usize, field: String },

    /// The key field holds something other than a string.
    #[error("record {position} has a non-string value in key field '{field}'")]
    InvalidKeyType { position: usize, field: String },

    /// A collection element is not a JSON object.
    #[error("collection element {position} is not a JSON object")]
    NotAnObject { position: usize },

    /// The collection source is not valid JSON.
    #[error("invalid collection JSON: {0}")]
    Json(#[from] serde_json::Error),
}
