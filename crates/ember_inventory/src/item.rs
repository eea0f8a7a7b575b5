//! Item categories and definitions

use serde::{Deserialize, Serialize};

/// Item category. Each category owns its own fixed block of inventory slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    /// Weapons (swords, bows, etc.)
    Weapon,
    /// Armor pieces
    Armor,
    /// Consumables (potions, food, etc.)
    Consumable,
    /// Misc items
    Misc,
}

impl ItemCategory {
    /// Number of categories, for category-indexed storage
    pub const COUNT: usize = 4;

    /// All categories in ordinal order
    pub const ALL: [ItemCategory; Self::COUNT] = [
        Self::Weapon,
        Self::Armor,
        Self::Consumable,
        Self::Misc,
    ];

    /// Ordinal used to index per-category storage
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether items of this category may stack at all
    pub const fn allows_stacking(self) -> bool {
        matches!(self, Self::Consumable)
    }
}

impl Default for ItemCategory {
    fn default() -> Self {
        Self::Misc
    }
}

/// Item definition
///
/// Definitions live in the item catalog and are read-only once registered.
/// An empty `id` marks a definition the asset pipeline never assigned; the
/// inventory rejects those.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDefinition {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Description
    pub description: String,
    /// Category
    pub category: ItemCategory,
    /// Maximum stack size (1 = not stackable)
    pub max_stack: u32,
}

impl ItemDefinition {
    /// Create a new item definition
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category: ItemCategory::default(),
            max_stack: 1,
        }
    }

    /// Set description
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Set category. Categories that do not stack force `max_stack` to 1.
    pub fn with_category(mut self, category: ItemCategory) -> Self {
        self.category = category;
        if !category.allows_stacking() {
            self.max_stack = 1;
        }
        self
    }

    /// Set max stack size, clamped to at least 1.
    ///
    /// Set the category first: a non-stacking category pins the stack size
    /// to 1 no matter what is passed here.
    pub fn with_max_stack(mut self, max: u32) -> Self {
        self.max_stack = if self.category.allows_stacking() {
            max.max(1)
        } else {
            1
        };
        self
    }

    /// Check if stackable
    pub fn is_stackable(&self) -> bool {
        self.max_stack > 1
    }

    /// Whether the asset pipeline assigned this definition an id
    pub fn is_assigned(&self) -> bool {
        !self.id.is_empty()
    }
}

impl Default for ItemDefinition {
    fn default() -> Self {
        Self::new("unknown", "Unknown Item")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_definition_builder() {
        let item = ItemDefinition::new("health_potion", "Health Potion")
            .with_description("Restores a little health.")
            .with_category(ItemCategory::Consumable)
            .with_max_stack(10);

        assert_eq!(item.id, "health_potion");
        assert_eq!(item.category, ItemCategory::Consumable);
        assert_eq!(item.max_stack, 10);
        assert!(item.is_stackable());
        assert!(item.is_assigned());
    }

    #[test]
    fn test_non_stacking_category_pins_max_stack() {
        let sword = ItemDefinition::new("iron_sword", "Iron Sword")
            .with_category(ItemCategory::Weapon)
            .with_max_stack(40);

        assert_eq!(sword.max_stack, 1);
        assert!(!sword.is_stackable());

        // Switching away from a stacking category drops the stack size too.
        let relabeled = ItemDefinition::new("ore", "Ore")
            .with_category(ItemCategory::Consumable)
            .with_max_stack(20)
            .with_category(ItemCategory::Misc);
        assert_eq!(relabeled.max_stack, 1);
    }

    #[test]
    fn test_unassigned_definition() {
        let broken = ItemDefinition::new("", "Nameless");
        assert!(!broken.is_assigned());
    }

    #[test]
    fn test_max_stack_clamped_to_one() {
        let item = ItemDefinition::new("dust", "Dust")
            .with_category(ItemCategory::Consumable)
            .with_max_stack(0);
        assert_eq!(item.max_stack, 1);
    }
}
