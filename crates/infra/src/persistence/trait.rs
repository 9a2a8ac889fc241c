use std::io;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Persistence operation error.
///
/// Every variant is recoverable: callers decide how to surface it, and the
/// in-memory store is never touched when one is returned.
///
/// ## Error Categories
///
/// - **Io**: the location could not be read or written (permissions, missing parent, disk)
/// - **Malformed**: the persisted text does not decode into the expected records
/// - **Encode**: the records could not be serialized
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O failure on {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: io::Error,
    },

    #[error("malformed data in {location}: {source}")]
    Malformed {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("record encoding failed: {0}")]
    Encode(#[source] serde_json::Error),
}

impl PersistenceError {
    pub fn io(location: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            location: location.into(),
            source,
        }
    }

    pub fn malformed(location: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Malformed {
            location: location.into(),
            source,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }
}

/// Save/load boundary between an in-memory record sequence and a durable
/// text encoding at one fixed location.
///
/// ## Save Semantics
///
/// `save()` encodes the full sequence, in order, and replaces whatever the
/// location held before. Implementations must never leave a half-written
/// encoding behind.
///
/// ## Load Semantics
///
/// `load()`:
/// - Returns `Ok(None)` when nothing has ever been saved at the location
/// - Returns `Ok(Some(records))` in saved order otherwise (possibly empty)
/// - Returns `PersistenceError::Malformed` when the content does not decode
///
/// There is no locking: two adapters on the same location are last-writer-wins.
pub trait Persistence: Send + Sync {
    /// Human-readable location (path or name) used in logs and errors.
    fn location(&self) -> &str;

    /// Persist the full ordered sequence.
    fn save<T>(&self, records: &[T]) -> Result<(), PersistenceError>
    where
        T: Serialize;

    /// Restore the full ordered sequence, or `None` if nothing was saved yet.
    fn load<T>(&self) -> Result<Option<Vec<T>>, PersistenceError>
    where
        T: DeserializeOwned;
}

impl<P> Persistence for Arc<P>
where
    P: Persistence + ?Sized,
{
    fn location(&self) -> &str {
        (**self).location()
    }

    fn save<T>(&self, records: &[T]) -> Result<(), PersistenceError>
    where
        T: Serialize,
    {
        (**self).save(records)
    }

    fn load<T>(&self) -> Result<Option<Vec<T>>, PersistenceError>
    where
        T: DeserializeOwned,
    {
        (**self).load()
    }
}

/// Encode records as an indented JSON array.
pub(crate) fn encode<T: Serialize>(records: &[T]) -> Result<String, PersistenceError> {
    serde_json::to_string_pretty(records).map_err(PersistenceError::Encode)
}

/// Decode a JSON array of records read from `location`.
pub(crate) fn decode<T: DeserializeOwned>(
    location: &str,
    text: &str,
) -> Result<Vec<T>, PersistenceError> {
    serde_json::from_str(text).map_err(|e| PersistenceError::malformed(location, e))
}
