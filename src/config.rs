//! Game configuration
//!
//! All tunable constants live in one immutable [`GameConfig`] that is built
//! once at startup and handed to every system that needs it. The defaults are
//! the game's built-in balance; a JSON file can override any subset of them.
//!
//! ```ignore
//! let config = GameConfig::load_or_default("assets/config/game.json");
//! let game = Game::new(config, save_manager);
//! ```

use crate::enemy::EnemyKind;
use crate::terrain::TerrainType;
use crate::weapon;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Errors raised while reading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub width: u32,
    pub height: u32,
    pub target_fps: u32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        ScreenConfig {
            width: 800,
            height: 600,
            target_fps: 60,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub speed: f32,
    pub size: f32,
    pub max_health: f32,
    pub interaction_radius: f32,
    pub spawn: (f32, f32),
    pub starting_gold: u32,
    pub inventory_capacity: usize,
    /// Catalog weapons carried in addition to the starter sword
    pub starting_weapons: Vec<String>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            speed: 5.0,
            size: 64.0,
            max_health: 100.0,
            interaction_radius: 50.0,
            spawn: (368.0, 268.0),
            starting_gold: 0,
            inventory_capacity: 20,
            starting_weapons: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub speed: f32,
    pub size: f32,
    pub max_health: f32,
    pub detection_radius: f32,
    /// Extra distance past `detection_radius` before a chasing enemy gives up.
    /// Zero keeps a single threshold for both directions.
    pub chase_hysteresis: f32,
    pub patrol_radius: f32,
    pub patrol_interval_ticks: u32,
    pub contact_damage: f32,
    pub strike_cooldown_ticks: u32,
    pub loot_chance: f64,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        EnemyConfig {
            speed: 3.0,
            size: 64.0,
            max_health: 50.0,
            detection_radius: 200.0,
            chase_hysteresis: 0.0,
            patrol_radius: 100.0,
            patrol_interval_ticks: 60,
            contact_damage: 10.0,
            strike_cooldown_ticks: 45,
            loot_chance: 0.5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponConfig {
    pub cooldown_ticks: u32,
    pub default_range: f32,
}

impl Default for WeaponConfig {
    fn default() -> Self {
        WeaponConfig {
            cooldown_ticks: 30,
            default_range: 50.0,
        }
    }
}

/// How terrain types are laid out over the chunk grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerrainLayout {
    /// Top third sea, middle desert, bottom hellscape
    VerticalThirds,
    /// `(chunk_x + chunk_y) mod 3` stripes
    DiagonalStripes,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    pub chunk_size: f32,
    /// World extent in chunks, starting at the origin
    pub chunks_x: i32,
    pub chunks_y: i32,
    pub layout: TerrainLayout,
    pub default_terrain: TerrainType,
    pub movement_penalties: HashMap<TerrainType, f32>,
    pub obstacle_chance: HashMap<TerrainType, f64>,
    pub obstacle_min_size: f32,
    pub obstacle_max_size: f32,
    pub boundary_walls: bool,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        TerrainConfig {
            chunk_size: 200.0,
            chunks_x: 4,
            chunks_y: 3,
            layout: TerrainLayout::VerticalThirds,
            default_terrain: TerrainType::Sea,
            movement_penalties: HashMap::from([
                (TerrainType::Sea, 0.5),
                (TerrainType::Desert, 0.7),
                (TerrainType::Hellscape, 1.0),
            ]),
            obstacle_chance: HashMap::from([
                (TerrainType::Sea, 0.2),
                (TerrainType::Desert, 0.1),
                (TerrainType::Hellscape, 0.05),
            ]),
            obstacle_min_size: 30.0,
            obstacle_max_size: 80.0,
            boundary_walls: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackShape {
    /// Attacker's box extended by weapon range in the facing direction
    DirectionalRect,
    /// Circle of weapon range around a point one range ahead of the attacker
    Radius,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    pub invulnerability_ticks: u32,
    pub knockback_force: f32,
    pub attack_shape: AttackShape,
    pub score_per_kill: u32,
}

impl Default for CombatConfig {
    fn default() -> Self {
        CombatConfig {
            invulnerability_ticks: 30,
            knockback_force: 10.0,
            attack_shape: AttackShape::DirectionalRect,
            score_per_kill: 100,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    pub frame_delay_ms: f32,
    pub frame_width: u32,
    pub frame_height: u32,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        AnimationSettings {
            frame_delay_ms: 100.0,
            frame_width: 93,
            frame_height: 93,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NpcConfig {
    pub spawn: (f32, f32),
    pub restock_delay_ticks: u32,
    pub restock_chance: f64,
}

impl Default for NpcConfig {
    fn default() -> Self {
        NpcConfig {
            spawn: (500.0, 250.0),
            restock_delay_ticks: 300,
            restock_chance: 0.5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    pub message_duration_ms: f32,
    pub camera_smoothing: f32,
}

impl Default for HudConfig {
    fn default() -> Self {
        HudConfig {
            message_duration_ms: 2000.0,
            camera_smoothing: 0.1,
        }
    }
}

/// A single enemy placement at world setup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemySpawn {
    pub kind: EnemyKind,
    pub x: f32,
    pub y: f32,
}

impl EnemySpawn {
    pub fn new(kind: EnemyKind, x: f32, y: f32) -> Self {
        EnemySpawn { kind, x, y }
    }
}

fn default_spawns() -> Vec<EnemySpawn> {
    vec![
        EnemySpawn::new(EnemyKind::Grunt, 100.0, 100.0),
        EnemySpawn::new(EnemyKind::Grunt, 700.0, 100.0),
        EnemySpawn::new(EnemyKind::Grunt, 100.0, 500.0),
        EnemySpawn::new(EnemyKind::Berserker, 700.0, 500.0),
        EnemySpawn::new(EnemyKind::Berserker, 400.0, 400.0),
    ]
}

/// The complete, immutable game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen: ScreenConfig,
    pub player: PlayerConfig,
    pub enemy: EnemyConfig,
    pub weapon: WeaponConfig,
    pub terrain: TerrainConfig,
    pub combat: CombatConfig,
    pub animation: AnimationSettings,
    pub npc: NpcConfig,
    pub hud: HudConfig,
    pub enemy_spawns: Vec<EnemySpawn>,
    /// Fixed RNG seed; `None` seeds from entropy
    pub world_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            screen: ScreenConfig::default(),
            player: PlayerConfig::default(),
            enemy: EnemyConfig::default(),
            weapon: WeaponConfig::default(),
            terrain: TerrainConfig::default(),
            combat: CombatConfig::default(),
            animation: AnimationSettings::default(),
            npc: NpcConfig::default(),
            hud: HudConfig::default(),
            enemy_spawns: default_spawns(),
            world_seed: None,
        }
    }
}

impl GameConfig {
    /// Reads a JSON config file. Missing fields take their default values.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: GameConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path` if it exists and is valid, otherwise falls back to defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No config at {}, using built-in defaults", path.display());
            return GameConfig::default();
        }

        match GameConfig::load_from_file(path) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("Ignoring config {}: {}", path.display(), e);
                GameConfig::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.terrain.chunk_size <= 0.0 {
            return Err(ConfigError::Invalid("terrain.chunk_size must be positive".into()));
        }
        if self.terrain.chunks_x <= 0 || self.terrain.chunks_y <= 0 {
            return Err(ConfigError::Invalid("terrain chunk counts must be positive".into()));
        }
        if self.terrain.obstacle_min_size > self.terrain.obstacle_max_size {
            return Err(ConfigError::Invalid(
                "terrain.obstacle_min_size exceeds obstacle_max_size".into(),
            ));
        }
        if self.player.max_health <= 0.0 || self.enemy.max_health <= 0.0 {
            return Err(ConfigError::Invalid("max_health must be positive".into()));
        }
        if self.screen.target_fps == 0 {
            return Err(ConfigError::Invalid("screen.target_fps must be non-zero".into()));
        }
        if self.player.inventory_capacity == 0 {
            return Err(ConfigError::Invalid("player.inventory_capacity must be non-zero".into()));
        }
        if let Some(name) = self
            .player
            .starting_weapons
            .iter()
            .find(|name| weapon::find_in_catalog(&self.weapon, name).is_none())
        {
            return Err(ConfigError::Invalid(format!("unknown starting weapon {}", name)));
        }
        Ok(())
    }

    /// Width and height of the generated world in world units
    pub fn world_size(&self) -> (f32, f32) {
        (
            self.terrain.chunks_x as f32 * self.terrain.chunk_size,
            self.terrain.chunks_y as f32 * self.terrain.chunk_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.terrain.movement_penalties[&TerrainType::Sea], 0.5);
        assert_eq!(config.weapon.cooldown_ticks, 30);
        assert_eq!(config.enemy_spawns.len(), 5);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "enemy": {{ "detection_radius": 150.0 }}, "world_seed": 7 }}"#).unwrap();

        let config = GameConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.enemy.detection_radius, 150.0);
        assert_eq!(config.enemy.speed, 3.0);
        assert_eq!(config.world_seed, Some(7));
        assert_eq!(config.player.max_health, 100.0);
    }

    #[test]
    fn test_invalid_chunk_size_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "terrain": {{ "chunk_size": 0.0 }} }}"#).unwrap();

        let result = GameConfig::load_from_file(file.path());
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_unknown_starting_weapon_rejected() {
        let mut config = GameConfig::default();
        config.player.starting_weapons = vec!["Battle Axe".to_string()];
        assert!(config.validate().is_ok());

        config.player.starting_weapons.push("Excalibur".to_string());
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = GameConfig::load_or_default("does/not/exist.json");
        assert_eq!(config.screen.width, 800);
    }
}
