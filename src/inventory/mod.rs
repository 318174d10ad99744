// Slot-based inventory used by the player.

pub mod error;
pub mod inventory;

pub use error::InventoryError;
pub use inventory::Inventory;
