//! Save manager for handling save/load operations
//!
//! Save slots map to `slot_{n}.json` files in one directory.

use super::types::*;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

pub const MIN_SLOT: u8 = 1;
pub const MAX_SLOT: u8 = 5;

pub struct SaveManager {
    save_directory: PathBuf,
    current_save_slot: u8,
}

impl SaveManager {
    /// Creates a new SaveManager, creating the directory if needed.
    pub fn new(save_directory: impl AsRef<Path>) -> Result<Self, SaveError> {
        let save_dir = save_directory.as_ref().to_path_buf();
        if !save_dir.exists() {
            fs::create_dir_all(&save_dir)?;
        }

        Ok(SaveManager {
            save_directory: save_dir,
            current_save_slot: MIN_SLOT,
        })
    }

    /// Per-user data directory, or `./saves` when the platform has none
    pub fn default_directory() -> PathBuf {
        dirs::data_dir()
            .map(|dir| dir.join("knightfall").join("saves"))
            .unwrap_or_else(|| PathBuf::from("saves"))
    }

    pub fn directory(&self) -> &Path {
        &self.save_directory
    }

    /// Sets the current save slot, clamped to 1-5
    pub fn set_save_slot(&mut self, slot: u8) {
        self.current_save_slot = slot.clamp(MIN_SLOT, MAX_SLOT);
    }

    pub fn get_save_slot(&self) -> u8 {
        self.current_save_slot
    }

    fn slot_path(&self, slot: u8) -> PathBuf {
        self.save_directory.join(format!("slot_{}.json", slot))
    }

    /// Writes `save_file` to the slot named in its metadata.
    pub fn save_game(&mut self, save_file: &SaveFile) -> Result<PathBuf, SaveError> {
        let slot = save_file.metadata.save_slot.clamp(MIN_SLOT, MAX_SLOT);
        let filepath = self.slot_path(slot);

        let json = serde_json::to_string_pretty(save_file)?;
        fs::write(&filepath, json)?;
        self.current_save_slot = slot;

        info!("Game saved to {}", filepath.display());
        Ok(filepath)
    }

    /// Reads and version-checks the save in `slot`.
    pub fn load_game(&self, slot: u8) -> Result<SaveFile, SaveError> {
        let filepath = self.slot_path(slot);
        if !filepath.exists() {
            return Err(SaveError::NotFound(slot));
        }
        Self::read_file(&filepath)
    }

    fn read_file(filepath: &Path) -> Result<SaveFile, SaveError> {
        let json = fs::read_to_string(filepath)?;
        let save_file: SaveFile = serde_json::from_str(&json)?;

        if save_file.version > CURRENT_SAVE_VERSION {
            return Err(SaveError::InvalidVersion(save_file.version));
        }
        Ok(save_file)
    }

    /// All readable saves, newest first. Unreadable files are skipped.
    pub fn list_saves(&self) -> Result<Vec<SaveFileInfo>, SaveError> {
        let mut saves = Vec::new();

        for entry in fs::read_dir(&self.save_directory)? {
            let path = entry?.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            match Self::read_file(&path) {
                Ok(save_file) => saves.push(SaveFileInfo {
                    path,
                    timestamp: save_file.timestamp,
                    metadata: save_file.metadata,
                }),
                Err(e) => warn!("Skipping {}: {}", path.display(), e),
            }
        }

        saves.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(saves)
    }

    pub fn save_exists(&self, slot: u8) -> bool {
        self.slot_path(slot).exists()
    }

    pub fn delete_save(&self, slot: u8) -> Result<(), SaveError> {
        let filepath = self.slot_path(slot);
        if !filepath.exists() {
            return Err(SaveError::NotFound(slot));
        }
        fs::remove_file(filepath)?;
        Ok(())
    }
}

pub struct SaveFileInfo {
    pub path: PathBuf,
    pub timestamp: SystemTime,
    pub metadata: SaveMetadata,
}
