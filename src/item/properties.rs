use serde::{Deserialize, Serialize};

/// What an item does when the player has it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ItemProperties {
    /// Crafting or quest material; cannot be used directly
    Material,
    /// Used up from the inventory for an immediate effect
    Consumable(ConsumableEffect),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ConsumableEffect {
    /// Restore health, capped at max
    Heal(f32),
}
