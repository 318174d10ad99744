//! Save data types
//!
//! Everything here is plain serde data; the game converts to and from it
//! through [`super::Saveable`].

use crate::animation::Direction;
use crate::enemy::EnemyKind;
use crate::inventory::Inventory;
use crate::quest::QuestSaveData;
use crate::weapon::Weapon;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;
use thiserror::Error;

/// Current save file version
pub const CURRENT_SAVE_VERSION: u32 = 1;

/// The root save file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveFile {
    pub version: u32,
    pub timestamp: SystemTime,
    pub metadata: SaveMetadata,
    pub player: PlayerSaveData,
    pub enemies: Vec<EnemySaveData>,
    pub npc_inventory: Vec<Weapon>,
    pub quests: QuestSaveData,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveMetadata {
    pub game_version: String,
    /// Local time of the save, for display
    pub saved_at: String,
    pub playtime_ticks: u64,
    pub save_type: SaveType,
    pub save_slot: u8,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum SaveType {
    Manual,
    QuickSave,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSaveData {
    /// Top-left corner in world units
    pub position: (f32, f32),
    pub health: f32,
    pub max_health: f32,
    pub facing: Direction,
    pub weapons: Vec<Weapon>,
    pub current_weapon_index: usize,
    pub gold: u32,
    pub experience: u32,
    pub inventory: Inventory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemySaveData {
    pub kind: EnemyKind,
    pub position: (f32, f32),
    pub health: f32,
}

/// Error types for save/load operations
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("unsupported save version: {0}")]
    InvalidVersion(u32),
    #[error("no save in slot {0}")]
    NotFound(u8),
    #[error("corrupted save data: {0}")]
    CorruptedData(String),
}

/// Rejects non-finite coordinates.
pub fn check_position(position: (f32, f32), what: &str) -> Result<(), SaveError> {
    if position.0.is_finite() && position.1.is_finite() {
        Ok(())
    } else {
        Err(SaveError::CorruptedData(format!("{what} position is not finite")))
    }
}

/// Rejects health outside `0..=max`.
pub fn check_health(health: f32, max: f32, what: &str) -> Result<(), SaveError> {
    if health.is_finite() && max.is_finite() && max > 0.0 && (0.0..=max).contains(&health) {
        Ok(())
    } else {
        Err(SaveError::CorruptedData(format!(
            "{what} health {health} outside 0..={max}"
        )))
    }
}
