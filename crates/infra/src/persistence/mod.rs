//! Persistence boundary for record sequences.
//!
//! Adapters encode a whole ordered sequence to field-tagged JSON at a single
//! location and decode it back. The record type is chosen per call, so one
//! adapter type serves any serde-capable entity.

pub mod in_memory;
pub mod json_file;
pub mod r#trait;

pub use in_memory::InMemoryPersistence;
pub use json_file::JsonFilePersistence;
pub use r#trait::{Persistence, PersistenceError};
