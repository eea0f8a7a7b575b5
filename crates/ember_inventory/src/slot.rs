//! Inventory slot cell

use serde::{Deserialize, Serialize};

use crate::item::ItemDefinition;
use crate::stack::ItemStack;

/// Contents of an occupied slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotItem {
    /// Item id (references an [`ItemDefinition`])
    pub item_id: String,
    /// Stack counter; present only for stackable definitions
    pub stack: Option<ItemStack>,
}

/// One fixed-position storage cell.
///
/// Slots are pre-allocated when the inventory is built and never created
/// or destroyed afterwards, so a slot's position in its category array is
/// a stable handle for the presentation layer. Only the contents change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    item: Option<SlotItem>,
}

impl Slot {
    /// Create an empty slot
    pub fn empty() -> Self {
        Self { item: None }
    }

    /// Check if slot is empty
    pub fn is_empty(&self) -> bool {
        self.item.is_none()
    }

    /// Id of the held item, if any
    pub fn item_id(&self) -> Option<&str> {
        self.item.as_ref().map(|i| i.item_id.as_str())
    }

    /// Check whether the slot holds the given item
    pub fn holds(&self, item_id: &str) -> bool {
        self.item_id() == Some(item_id)
    }

    /// Stack of the held item (stackable definitions only)
    pub fn stack(&self) -> Option<&ItemStack> {
        self.item.as_ref().and_then(|i| i.stack.as_ref())
    }

    pub(crate) fn stack_mut(&mut self) -> Option<&mut ItemStack> {
        self.item.as_mut().and_then(|i| i.stack.as_mut())
    }

    /// Held quantity: 0 when empty, 1 for non-stackable items
    pub fn quantity(&self) -> u32 {
        match &self.item {
            None => 0,
            Some(SlotItem {
                stack: Some(stack), ..
            }) => stack.size(),
            Some(_) => 1,
        }
    }

    /// Fill the slot. A stack is built only for stackable definitions;
    /// its constructor clamps the quantity into range.
    pub(crate) fn occupy(&mut self, def: &ItemDefinition, quantity: u32) {
        let stack = def
            .is_stackable()
            .then(|| ItemStack::new(def.max_stack, quantity));
        self.item = Some(SlotItem {
            item_id: def.id.clone(),
            stack,
        });
    }

    /// Drop the held item, returning the slot to empty
    pub(crate) fn clear(&mut self) -> Option<SlotItem> {
        self.item.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemCategory;

    fn potion() -> ItemDefinition {
        ItemDefinition::new("health_potion", "Health Potion")
            .with_category(ItemCategory::Consumable)
            .with_max_stack(10)
    }

    fn sword() -> ItemDefinition {
        ItemDefinition::new("iron_sword", "Iron Sword").with_category(ItemCategory::Weapon)
    }

    #[test]
    fn test_empty_slot() {
        let slot = Slot::empty();
        assert!(slot.is_empty());
        assert_eq!(slot.quantity(), 0);
        assert_eq!(slot.item_id(), None);
    }

    #[test]
    fn test_occupy_stackable() {
        let mut slot = Slot::empty();
        slot.occupy(&potion(), 7);

        assert!(slot.holds("health_potion"));
        assert_eq!(slot.quantity(), 7);
        assert_eq!(slot.stack().map(|s| s.max_size()), Some(10));
    }

    #[test]
    fn test_occupy_non_stackable_has_no_stack() {
        let mut slot = Slot::empty();
        slot.occupy(&sword(), 5);

        assert!(slot.stack().is_none());
        assert_eq!(slot.quantity(), 1);
    }

    #[test]
    fn test_occupy_clamps_quantity() {
        let mut slot = Slot::empty();
        slot.occupy(&potion(), 99);
        assert_eq!(slot.quantity(), 10);
    }

    #[test]
    fn test_clear() {
        let mut slot = Slot::empty();
        slot.occupy(&potion(), 3);

        let taken = slot.clear();
        assert_eq!(taken.map(|i| i.item_id), Some("health_potion".into()));
        assert!(slot.is_empty());
        assert!(slot.clear().is_none());
    }
}
