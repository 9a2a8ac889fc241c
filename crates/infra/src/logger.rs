//! Generic inventory logger: a record store bound to one persistence location.

use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use stocklog_core::Entity;

use crate::persistence::{JsonFilePersistence, Persistence, PersistenceError};
use crate::record_store::RecordStore;

/// Result of a successful `load_from_file`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The store now holds exactly `count` records from the location.
    Loaded { count: usize },
    /// Nothing was ever saved at the location; the store was left untouched.
    NotFound,
}

/// Record store plus the persistence adapter it saves to and loads from.
///
/// The adapter (and therefore the location) is fixed at construction.
#[derive(Debug)]
pub struct InventoryLogger<T, P = JsonFilePersistence> {
    store: RecordStore<T>,
    persistence: P,
}

impl<T> InventoryLogger<T, JsonFilePersistence>
where
    T: Entity + Serialize + DeserializeOwned,
{
    /// Logger backed by a JSON file at `path`.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self::new(JsonFilePersistence::new(path))
    }
}

impl<T, P> InventoryLogger<T, P>
where
    T: Entity + Serialize + DeserializeOwned,
    P: Persistence,
{
    pub fn new(persistence: P) -> Self {
        Self {
            store: RecordStore::new(),
            persistence,
        }
    }

    /// Append a record. Duplicate ids are accepted and only logged.
    pub fn add(&mut self, record: T) {
        if self.store.contains_id(record.id()) {
            tracing::warn!(
                location = %self.persistence.location(),
                id = ?record.id(),
                "appending record with duplicate id"
            );
        }
        self.store.add(record);
    }

    pub fn get_all(&self) -> &[T] {
        self.store.get_all()
    }

    pub fn store(&self) -> &RecordStore<T> {
        &self.store
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Persist every record, in order, to the bound location.
    pub fn save_to_file(&self) -> Result<(), PersistenceError> {
        match self.persistence.save(self.store.get_all()) {
            Ok(()) => {
                tracing::info!(
                    location = %self.persistence.location(),
                    records = self.store.len(),
                    "inventory saved"
                );
                Ok(())
            }
            Err(err) => {
                tracing::error!(
                    location = %self.persistence.location(),
                    error = %err,
                    "failed to save inventory"
                );
                Err(err)
            }
        }
    }

    /// Replace the store's contents with what the bound location holds.
    ///
    /// On `NotFound` or on error the current contents are kept as they were.
    pub fn load_from_file(&mut self) -> Result<LoadOutcome, PersistenceError> {
        let location = self.persistence.location();

        match self.persistence.load::<T>() {
            Ok(Some(records)) => {
                let count = records.len();
                self.store.replace(records);
                tracing::info!(location = %location, records = count, "inventory loaded");
                Ok(LoadOutcome::Loaded { count })
            }
            Ok(None) => {
                tracing::info!(location = %location, "no saved inventory; nothing loaded");
                Ok(LoadOutcome::NotFound)
            }
            Err(err) => {
                tracing::error!(location = %location, error = %err, "failed to load inventory");
                Err(err)
            }
        }
    }
}
