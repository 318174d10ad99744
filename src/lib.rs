//! knightfall: a top-down 2D action RPG
//!
//! The library holds the whole simulation: terrain, entities, enemy AI,
//! combat, inventory, quests and saves, all driven by [`game::Game`]. The
//! SDL2 window and input live behind the `sdl` feature in [`frontend`].

pub mod animation;
pub mod camera;
pub mod collision;
pub mod combat;
pub mod config;
pub mod dropped_item;
pub mod enemy;
pub mod entity;
pub mod game;
pub mod input_system;
pub mod inventory;
pub mod item;
pub mod logging;
pub mod npc;
pub mod particles;
pub mod player;
pub mod quest;
pub mod save;
pub mod sprite;
pub mod stats;
pub mod terrain;
pub mod weapon;

#[cfg(feature = "sdl")]
pub mod frontend;
