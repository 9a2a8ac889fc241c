use std::io;
use std::sync::RwLock;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::r#trait::{Persistence, PersistenceError, decode, encode};

/// In-memory persistence adapter.
///
/// Intended for tests/dev. Holds the encoded JSON text rather than the
/// records themselves, so it exercises the same encoding as the file adapter
/// and can be seeded with arbitrary (including malformed) content.
#[derive(Debug)]
pub struct InMemoryPersistence {
    name: String,
    contents: RwLock<Option<String>>,
}

impl InMemoryPersistence {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: RwLock::new(None),
        }
    }

    /// Adapter whose location already holds `contents`.
    pub fn with_contents(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: RwLock::new(Some(contents.into())),
        }
    }

    /// Currently stored encoding, if anything was saved.
    pub fn contents(&self) -> Option<String> {
        self.contents.read().ok().and_then(|c| c.clone())
    }

    fn poisoned(&self) -> PersistenceError {
        PersistenceError::io(&self.name, io::Error::other("lock poisoned"))
    }
}

impl Default for InMemoryPersistence {
    fn default() -> Self {
        Self::new("memory")
    }
}

impl Persistence for InMemoryPersistence {
    fn location(&self) -> &str {
        &self.name
    }

    fn save<T>(&self, records: &[T]) -> Result<(), PersistenceError>
    where
        T: Serialize,
    {
        let json = encode(records)?;

        let mut contents = self.contents.write().map_err(|_| self.poisoned())?;
        *contents = Some(json);
        Ok(())
    }

    fn load<T>(&self) -> Result<Option<Vec<T>>, PersistenceError>
    where
        T: DeserializeOwned,
    {
        let contents = self.contents.read().map_err(|_| self.poisoned())?;

        match contents.as_deref() {
            Some(text) => decode(&self.name, text).map(Some),
            None => Ok(None),
        }
    }
}
