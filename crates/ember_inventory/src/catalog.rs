//! Read-only item definition lookup

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::item::ItemDefinition;

/// Read-only definition lookup consumed by gameplay systems.
///
/// The catalog is populated by the asset pipeline before gameplay starts
/// and treated as immutable for the inventory's lifetime.
pub trait ItemCatalog {
    /// Look up a definition by item id
    fn definition(&self, item_id: &str) -> Option<&ItemDefinition>;
}

/// In-memory catalog backed by a hash map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemDatabase {
    definitions: HashMap<String, ItemDefinition>,
}

impl ItemDatabase {
    /// Create an empty database
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition. Unassigned ids and duplicate registrations
    /// are rejected and return false.
    pub fn register(&mut self, def: ItemDefinition) -> bool {
        if !def.is_assigned() || self.definitions.contains_key(&def.id) {
            log::warn!("rejected catalog registration for {:?}", def.id);
            return false;
        }
        self.definitions.insert(def.id.clone(), def);
        true
    }

    /// Check whether an id is registered
    pub fn contains(&self, item_id: &str) -> bool {
        self.definitions.contains_key(item_id)
    }

    /// Number of registered definitions
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Check if no definitions are registered
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Iterate all registered definitions
    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.definitions.values()
    }
}

impl ItemCatalog for ItemDatabase {
    fn definition(&self, item_id: &str) -> Option<&ItemDefinition> {
        self.definitions.get(item_id)
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

    #[test]
    fn test_register_and_lookup() {
        let mut db = ItemDatabase::new();
        assert!(db.register(potion()));

        let def = db.definition("health_potion").unwrap();
        assert_eq!(def.name, "Health Potion");
        assert_eq!(db.len(), 1);
        assert!(db.contains("health_potion"));
        assert_eq!(db.iter().count(), 1);
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut db = ItemDatabase::new();
        assert!(db.register(potion()));
        assert!(!db.register(potion()));
        assert_eq!(db.len(), 1);
    }

    #[test]
    fn test_unassigned_registration_rejected() {
        let mut db = ItemDatabase::new();
        assert!(!db.register(ItemDefinition::new("", "Nameless")));
        assert!(db.is_empty());
    }

    #[test]
    fn test_unknown_lookup() {
        let db = ItemDatabase::new();
        assert!(db.definition("missing").is_none());
    }
}
