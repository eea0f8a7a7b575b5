//! Inventory error taxonomy

use thiserror::Error;

/// Errors reported by inventory mutations.
///
/// These cover precondition violations only. Capacity exhaustion is a
/// normal outcome and flows through [`crate::AddItemResult`] and the event
/// contract instead. A rejected call leaves the inventory unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// Unassigned item definition supplied to an add
    #[error("item definition has no assigned id")]
    InvalidItem,
    /// Zero quantity supplied to an add or remove
    #[error("quantity must be at least 1")]
    InvalidQuantity,
    /// Out-of-range slot index supplied to a remove
    #[error("slot index {index} out of range for {capacity} slots")]
    InvalidSlot { index: usize, capacity: usize },
}
