//! Inventory component: categorized slot storage and add/remove policy

use ember_event::{EventBus, SubscriberId};
use serde::{Deserialize, Serialize};

use crate::error::InventoryError;
use crate::event::InventoryEvent;
use crate::item::{ItemCategory, ItemDefinition};
use crate::slot::Slot;

/// Fixed per-category slot counts, set once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityConfig {
    /// Weapon slots
    pub weapons: usize,
    /// Armor slots
    pub armor: usize,
    /// Consumable slots
    pub consumables: usize,
    /// Misc slots
    pub misc: usize,
}

impl CapacityConfig {
    /// Same capacity for every category
    pub fn uniform(capacity: usize) -> Self {
        Self {
            weapons: capacity,
            armor: capacity,
            consumables: capacity,
            misc: capacity,
        }
    }

    /// Slot count for one category
    pub fn capacity(&self, category: ItemCategory) -> usize {
        match category {
            ItemCategory::Weapon => self.weapons,
            ItemCategory::Armor => self.armor,
            ItemCategory::Consumable => self.consumables,
            ItemCategory::Misc => self.misc,
        }
    }
}

impl Default for CapacityConfig {
    fn default() -> Self {
        Self::uniform(40)
    }
}

/// Result of an add call.
///
/// `added + leftover` always equals the requested amount; a partial add is
/// still a success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddItemResult {
    /// Quantity actually placed
    pub added: u32,
    /// Quantity that fit nowhere
    pub leftover: u32,
}

impl AddItemResult {
    /// Whether anything was placed
    pub fn success(&self) -> bool {
        self.added > 0
    }

    /// Whether some, but not all, of the request was placed
    pub fn is_partial(&self) -> bool {
        self.added > 0 && self.leftover > 0
    }

    /// The originally requested amount
    pub fn requested(&self) -> u32 {
        self.added + self.leftover
    }
}

/// Slotted, capacity-bounded item container.
///
/// Storage is partitioned by [`ItemCategory`]; each category owns a fixed
/// array of pre-allocated slots, so a slot index is a stable handle for
/// the presentation layer. Mutations buffer their [`InventoryEvent`]s and
/// emit them on the owned bus only after all slot changes for the call
/// have completed, so observers never see a half-applied operation.
///
/// The inventory is a plain owned value: its owning context constructs it
/// and hands out access explicitly. Calls are synchronous; `&mut self`
/// receivers make re-entrant mutation unrepresentable.
pub struct Inventory {
    slots: [Vec<Slot>; ItemCategory::COUNT],
    config: CapacityConfig,
    events: EventBus<InventoryEvent>,
}

impl Inventory {
    /// Create an inventory with the given per-category capacities
    pub fn new(config: CapacityConfig) -> Self {
        let slots = ItemCategory::ALL.map(|c| vec![Slot::empty(); config.capacity(c)]);
        Self {
            slots,
            config,
            events: EventBus::new(),
        }
    }

    /// Create an inventory with the same capacity in every category
    pub fn with_uniform_capacity(capacity: usize) -> Self {
        Self::new(CapacityConfig::uniform(capacity))
    }

    /// Subscribe to inventory events, returning the subscription token
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriberId
    where
        F: Fn(&InventoryEvent) + Send + Sync + 'static,
    {
        self.events.subscribe(handler)
    }

    /// Remove a subscription. Returns false if the token is unknown.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Capacity of one category
    pub fn capacity(&self, category: ItemCategory) -> usize {
        self.config.capacity(category)
    }

    /// Get a slot by category and index
    pub fn slot(&self, category: ItemCategory, index: usize) -> Option<&Slot> {
        self.slots[category.index()].get(index)
    }

    /// Number of occupied slots in a category
    pub fn used_slots(&self, category: ItemCategory) -> usize {
        self.slots[category.index()]
            .iter()
            .filter(|s| !s.is_empty())
            .count()
    }

    /// Number of free slots in a category
    pub fn free_slots(&self, category: ItemCategory) -> usize {
        self.capacity(category) - self.used_slots(category)
    }

    /// Check if a category has no free slot left
    pub fn is_full(&self, category: ItemCategory) -> bool {
        self.free_slots(category) == 0
    }

    /// Check if every slot in every category is empty
    pub fn is_empty(&self) -> bool {
        self.slots.iter().flatten().all(|s| s.is_empty())
    }

    /// Iterate the occupied slots of a category in index order
    pub fn items(&self, category: ItemCategory) -> impl Iterator<Item = (usize, &Slot)> {
        self.slots[category.index()]
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.is_empty())
    }

    /// Total quantity of an item across all categories
    pub fn count_item(&self, item_id: &str) -> u32 {
        self.slots
            .iter()
            .flatten()
            .filter(|s| s.holds(item_id))
            .map(|s| s.quantity())
            .sum()
    }

    /// First slot holding an item, scanning categories in ordinal order
    pub fn find_item(&self, item_id: &str) -> Option<(ItemCategory, usize)> {
        ItemCategory::ALL.into_iter().find_map(|category| {
            self.slots[category.index()]
                .iter()
                .position(|s| s.holds(item_id))
                .map(|index| (category, index))
        })
    }

    /// Add an item to its category's slots.
    ///
    /// Non-stackable definitions take one empty slot per unit, lowest
    /// index first. Stackable definitions top up existing stacks of the
    /// same item first; a fresh slot is opened only when the item has no
    /// stack anywhere in the category. Capacity exhaustion is not an
    /// error: the shortfall comes back in [`AddItemResult::leftover`] and
    /// through the event contract.
    pub fn add_item(
        &mut self,
        def: &ItemDefinition,
        amount: u32,
    ) -> Result<AddItemResult, InventoryError> {
        if !def.is_assigned() {
            return Err(InventoryError::InvalidItem);
        }
        if amount == 0 {
            return Err(InventoryError::InvalidQuantity);
        }

        let mut pending = Vec::new();
        let result = if def.is_stackable() {
            self.add_stackable(def, amount, &mut pending)
        } else {
            self.add_non_stackable(def, amount, &mut pending)
        };

        if result.added == 0 {
            log::warn!("add failed for {}: no space for {} item(s)", def.id, amount);
            pending.push(InventoryEvent::AddFailed {
                item_id: def.id.clone(),
                requested: amount,
            });
        } else if result.leftover > 0 {
            log::warn!(
                "partially added {}: {}/{}",
                def.id,
                result.added,
                result.requested()
            );
            pending.push(InventoryEvent::PartiallyAdded {
                item_id: def.id.clone(),
                added: result.added,
                leftover: result.leftover,
            });
        }

        self.flush(pending);
        Ok(result)
    }

    fn add_non_stackable(
        &mut self,
        def: &ItemDefinition,
        amount: u32,
        pending: &mut Vec<InventoryEvent>,
    ) -> AddItemResult {
        let category = def.category;
        let slots = &mut self.slots[category.index()];
        let mut added = 0;

        for _ in 0..amount {
            match slots.iter().position(|s| s.is_empty()) {
                Some(index) => {
                    slots[index].occupy(def, 1);
                    added += 1;
                    pending.push(InventoryEvent::ItemAdded {
                        category,
                        slot: index,
                        item_id: def.id.clone(),
                        quantity: 1,
                    });
                }
                None => {
                    pending.push(InventoryEvent::InventoryFull { category });
                    break;
                }
            }
        }

        AddItemResult {
            added,
            leftover: amount - added,
        }
    }

    fn add_stackable(
        &mut self,
        def: &ItemDefinition,
        amount: u32,
        pending: &mut Vec<InventoryEvent>,
    ) -> AddItemResult {
        let category = def.category;
        let slots = &mut self.slots[category.index()];
        let mut remaining = amount;
        let mut found_existing = false;

        // Top up every stack of this item in index order. Pushing into a
        // full stack is an arithmetic no-op but still reports the limit.
        for (index, slot) in slots.iter_mut().enumerate() {
            if remaining == 0 {
                break;
            }
            if !slot.holds(&def.id) {
                continue;
            }
            found_existing = true;
            if let Some(stack) = slot.stack_mut() {
                let leftover = stack.push(remaining);
                if leftover < remaining {
                    pending.push(InventoryEvent::ItemUpdated {
                        category,
                        slot: index,
                        item_id: def.id.clone(),
                        quantity: stack.size(),
                    });
                }
                if leftover > 0 {
                    pending.push(InventoryEvent::StackLimitReached {
                        category,
                        slot: index,
                        item_id: def.id.clone(),
                    });
                }
                remaining = leftover;
            }
        }

        // Open a fresh slot only when the item has no stack anywhere in
        // the category; an existing stack, even a full one, means the
        // excess is reported as leftover instead.
        if !found_existing && remaining > 0 {
            match slots.iter().position(|s| s.is_empty()) {
                Some(index) => {
                    let placed = remaining.min(def.max_stack);
                    slots[index].occupy(def, placed);
                    remaining -= placed;
                    pending.push(InventoryEvent::ItemAdded {
                        category,
                        slot: index,
                        item_id: def.id.clone(),
                        quantity: placed,
                    });
                    if remaining > 0 {
                        pending.push(InventoryEvent::StackLimitReached {
                            category,
                            slot: index,
                            item_id: def.id.clone(),
                        });
                    }
                }
                None => {
                    pending.push(InventoryEvent::InventoryFull { category });
                }
            }
        }

        AddItemResult {
            added: amount - remaining,
            leftover: remaining,
        }
    }

    /// Remove from one slot, returning the amount actually removed.
    ///
    /// Non-stackable slots are cleared outright (one unit, whatever the
    /// amount). Stackable slots pop up to `amount` and are cleared when
    /// the stack drains to zero. Removing from an empty in-range slot is
    /// `Ok(0)`: the address is valid, there is just nothing to take.
    pub fn remove_item(
        &mut self,
        category: ItemCategory,
        slot_index: usize,
        amount: u32,
    ) -> Result<u32, InventoryError> {
        if amount == 0 {
            return Err(InventoryError::InvalidQuantity);
        }
        let capacity = self.capacity(category);
        if slot_index >= capacity {
            return Err(InventoryError::InvalidSlot {
                index: slot_index,
                capacity,
            });
        }

        let slot = &mut self.slots[category.index()][slot_index];
        if slot.is_empty() {
            return Ok(0);
        }

        let item_id = slot.item_id().unwrap_or_default().to_string();
        let (removed, remaining) = match slot.stack_mut() {
            Some(stack) => {
                let removed = stack.pop(amount);
                (removed, stack.size())
            }
            None => (1, 0),
        };
        if remaining == 0 {
            slot.clear();
        }

        self.flush(vec![InventoryEvent::ItemRemoved {
            category,
            slot: slot_index,
            item_id,
            removed,
            remaining,
        }]);
        Ok(removed)
    }

    /// Log every occupied slot at debug level, one line per slot
    pub fn log_contents(&self) {
        for category in ItemCategory::ALL {
            for (index, slot) in self.items(category) {
                log::debug!(
                    "{:?}[{}] {} x{}",
                    category,
                    index,
                    slot.item_id().unwrap_or("?"),
                    slot.quantity()
                );
            }
        }
    }

    // Events are buffered per call and emitted here, after the mutation
    // has fully completed.
    fn flush(&self, pending: Vec<InventoryEvent>) {
        for event in pending {
            self.events.emit(&event);
        }
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(CapacityConfig::default())
    }
}
