//! Strongly-typed identifiers used across the domain.

use serde::{Deserialize, Serialize};

/// Caller-assigned identifier of an inventory record.
///
/// Uniqueness within a store is intended but never enforced.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i64);

impl ItemId {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<ItemId> for i64 {
    fn from(value: ItemId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_a_bare_integer() {
        let json = serde_json::to_string(&ItemId::new(42)).unwrap();
        assert_eq!(json, "42");

        let back: ItemId = serde_json::from_str("42").unwrap();
        assert_eq!(back, ItemId::new(42));
    }

    #[test]
    fn displays_the_inner_value() {
        assert_eq!(ItemId::from(-7).to_string(), "-7");
        assert_eq!(i64::from(ItemId::new(9)), 9);
    }
}
