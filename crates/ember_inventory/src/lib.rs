//! Ember Inventory - Slotted Item Storage
//!
//! This crate provides the game client's inventory model: categorized,
//! capacity-bounded slot storage with stacking and change notification.
//!
//! # Features
//!
//! - Item definitions with categories and stacking rules
//! - Read-only item catalog lookup
//! - Pre-allocated per-category slots with stable indices
//! - Merge-first stacking with partial-fill results
//! - Observer events for the presentation layer
//!
//! # Example
//!
//! ```
//! use ember_inventory::prelude::*;
//!
//! let potion = ItemDefinition::new("health_potion", "Health Potion")
//!     .with_category(ItemCategory::Consumable)
//!     .with_max_stack(10);
//!
//! let mut inventory = Inventory::default();
//! let result = inventory.add_item(&potion, 7).unwrap();
//! assert_eq!(result.added, 7);
//! ```

pub mod catalog;
pub mod error;
pub mod event;
pub mod inventory;
pub mod item;
pub mod slot;
pub mod stack;

pub mod prelude {
    pub use crate::catalog::{ItemCatalog, ItemDatabase};
    pub use crate::error::InventoryError;
    pub use crate::event::InventoryEvent;
    pub use crate::inventory::{AddItemResult, CapacityConfig, Inventory};
    pub use crate::item::{ItemCategory, ItemDefinition};
    pub use crate::slot::{Slot, SlotItem};
    pub use crate::stack::ItemStack;
}

pub use prelude::*;
