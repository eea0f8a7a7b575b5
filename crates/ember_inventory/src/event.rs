//! Inventory change notifications

use serde::{Deserialize, Serialize};

use crate::item::ItemCategory;

/// Notifications raised by the inventory.
///
/// Every variant carries enough data for a presenter to update one slot
/// without re-querying the model. All events for one mutating call are
/// emitted only after every slot mutation of that call has completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryEvent {
    /// A slot went from empty to occupied
    ItemAdded {
        category: ItemCategory,
        slot: usize,
        item_id: String,
        quantity: u32,
    },
    /// An occupied slot changed quantity. Fires even on partial success.
    ItemUpdated {
        category: ItemCategory,
        slot: usize,
        item_id: String,
        quantity: u32,
    },
    /// A slot was decremented or cleared (`remaining == 0` means cleared)
    ItemRemoved {
        category: ItemCategory,
        slot: usize,
        item_id: String,
        removed: u32,
        remaining: u32,
    },
    /// An add placed nothing at all
    AddFailed { item_id: String, requested: u32 },
    /// An add placed some, but not all, of the requested amount
    PartiallyAdded {
        item_id: String,
        added: u32,
        leftover: u32,
    },
    /// A stack could not absorb the full push, independent of whether the
    /// overall add succeeded
    StackLimitReached {
        category: ItemCategory,
        slot: usize,
        item_id: String,
    },
    /// A placement attempt found no empty slot in the category
    InventoryFull { category: ItemCategory },
}
