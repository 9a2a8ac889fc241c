//! Infrastructure layer: in-memory record storage, persistence adapters, config.

pub mod config;
pub mod logger;
pub mod persistence;
pub mod record_store;

pub use config::AppConfig;
pub use logger::{InventoryLogger, LoadOutcome};
pub use persistence::{InMemoryPersistence, JsonFilePersistence, Persistence, PersistenceError};
pub use record_store::RecordStore;
