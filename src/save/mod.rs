//! Save/Load system
//!
//! - JSON save files (human-readable, debuggable)
//! - Numbered save slots (1-5)
//! - [`Saveable`] for snapshotting and restoring individual game objects
//!
//! # Architecture
//!
//! - `types`: save data structures and error types
//! - `manager`: SaveManager for file operations
//! - `saveable`: Saveable trait implemented by player, enemies, merchant and quests
//!
//! # Example Usage
//!
//! ```ignore
//! let mut save_manager = SaveManager::new(SaveManager::default_directory())?;
//! save_manager.save_game(&game.snapshot(SaveType::Manual))?;
//! let loaded = save_manager.load_game(1)?;
//! ```

pub mod manager;
pub mod saveable;
pub mod types;

pub use manager::{SaveFileInfo, SaveManager};
pub use saveable::Saveable;
pub use types::*;
