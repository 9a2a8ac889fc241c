//! Fixed sample data for the demo session.

use chrono::{DateTime, Utc};

use crate::item::InventoryItem;

const SAMPLE_STOCK: [(i64, &str, i64); 5] = [
    (1, "Laptop", 5),
    (2, "Printer", 3),
    (3, "Router", 7),
    (4, "Monitor", 4),
    (5, "Keyboard", 10),
];

/// The five demo records, all stamped with `added_at`.
pub fn sample_items(added_at: DateTime<Utc>) -> Vec<InventoryItem> {
    SAMPLE_STOCK
        .iter()
        .map(|&(id, name, quantity)| InventoryItem::new(id, name, quantity, added_at))
        .collect()
}
