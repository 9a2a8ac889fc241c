//! `stocklog-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no persistence).

pub mod entity;
pub mod id;

pub use entity::Entity;
pub use id::ItemId;
