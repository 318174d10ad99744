use thiserror::Error;

/// Errors that can occur during inventory operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InventoryError {
    #[error("invalid slot index: {0}")]
    InvalidSlot(usize),

    #[error("unknown item id: {0}")]
    InvalidItem(String),

    #[error("slot {0} is occupied")]
    SlotOccupied(usize),

    #[error("slot {0} is empty")]
    EmptySlot(usize),

    #[error("inventory is full")]
    InventoryFull,

    #[error("item '{0}' cannot be used")]
    NotUsable(String),
}
