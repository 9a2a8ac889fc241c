use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stocklog_core::{Entity, ItemId};

/// Immutable inventory record.
///
/// Serialized field names are `id`, `name`, `quantity` and `dateAdded`. The
/// PascalCase spellings written by the older .NET logger are accepted on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    #[serde(alias = "Id")]
    id: ItemId,
    #[serde(alias = "Name")]
    name: String,
    /// Not validated; negative quantities are representable.
    #[serde(alias = "Quantity")]
    quantity: i64,
    #[serde(alias = "DateAdded")]
    date_added: DateTime<Utc>,
}

impl InventoryItem {
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        quantity: i64,
        date_added: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
            date_added,
        }
    }

    pub fn item_id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn date_added(&self) -> DateTime<Utc> {
        self.date_added
    }
}

impl Entity for InventoryItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for InventoryItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Quantity: {}, Date Added: {}",
            self.id, self.name, self.quantity, self.date_added
        )
    }
}
