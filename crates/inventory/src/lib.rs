//! Inventory domain records.
//!
//! Plain data plus sample seed records; no IO, no storage.

pub mod item;
pub mod seed;

pub use item::InventoryItem;
pub use seed::sample_items;
