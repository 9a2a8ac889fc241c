//! `stocklog-app`
//!
//! **Responsibility:** the console driver around the inventory logger.
//!
//! A session seeds sample stock, saves it, then simulates a restart by binding
//! a fresh logger to the same location, loading, and printing every record.
//! Persistence failures are reported on the output stream and never abort
//! the session; only failures writing to the output itself are returned.

pub mod app;

pub use app::{InventoryApp, run_demo_session};
