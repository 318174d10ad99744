//! Chunked terrain and static obstacles
//!
//! The world is split into square chunks of `chunk_size` world units. Each
//! chunk carries one [`TerrainType`] that scales the speed of anything
//! standing on it. The grid and its obstacles are generated once and are
//! read-only afterwards.

use crate::collision::{Obstacle, Rect, StaticCollidable};
use crate::config::{TerrainConfig, TerrainLayout};
use glam::Vec2;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const WALL_THICKNESS: f32 = 32.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainType {
    Sea,
    Desert,
    Hellscape,
}

impl TerrainType {
    pub fn name(self) -> &'static str {
        match self {
            TerrainType::Sea => "sea",
            TerrainType::Desert => "desert",
            TerrainType::Hellscape => "hellscape",
        }
    }

    pub fn from_name(name: &str) -> Option<TerrainType> {
        match name {
            "sea" => Some(TerrainType::Sea),
            "desert" => Some(TerrainType::Desert),
            "hellscape" => Some(TerrainType::Hellscape),
            _ => None,
        }
    }
}

/// One cell of the terrain grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chunk {
    pub chunk_x: i32,
    pub chunk_y: i32,
    pub terrain: TerrainType,
    pub movement_penalty: f32,
}

pub struct TerrainManager {
    chunk_size: f32,
    chunks_x: i32,
    chunks_y: i32,
    default_terrain: TerrainType,
    penalties: HashMap<TerrainType, f32>,
    chunks: HashMap<(i32, i32), Chunk>,
    obstacles: Vec<Obstacle>,
}

impl TerrainManager {
    /// Builds the chunk grid and scatters obstacles.
    ///
    /// Obstacles that would overlap any rect in `keep_clear` (spawn points)
    /// are skipped. The same seed always produces the same world.
    pub fn generate(config: &TerrainConfig, rng: &mut impl Rng, keep_clear: &[Rect]) -> Self {
        let mut manager = TerrainManager {
            chunk_size: config.chunk_size,
            chunks_x: config.chunks_x,
            chunks_y: config.chunks_y,
            default_terrain: config.default_terrain,
            penalties: config.movement_penalties.clone(),
            chunks: HashMap::new(),
            obstacles: Vec::new(),
        };

        for cy in 0..config.chunks_y {
            for cx in 0..config.chunks_x {
                let terrain = terrain_for_chunk(config.layout, cx, cy, config.chunks_y);
                let chunk = Chunk {
                    chunk_x: cx,
                    chunk_y: cy,
                    terrain,
                    movement_penalty: manager.movement_penalty_for(terrain),
                };
                manager.chunks.insert((cx, cy), chunk);

                let chance = config
                    .obstacle_chance
                    .get(&terrain)
                    .copied()
                    .unwrap_or(0.0)
                    .clamp(0.0, 1.0);
                if rng.gen_bool(chance) {
                    let obstacle = random_obstacle_in_chunk(config, cx, cy, rng);
                    if keep_clear.iter().any(|r| r.intersects(&obstacle.get_bounds())) {
                        debug!("Skipped obstacle in chunk ({}, {}) over a spawn", cx, cy);
                    } else {
                        manager.obstacles.push(obstacle);
                    }
                }
            }
        }

        if config.boundary_walls {
            let (w, h) = manager.world_size();
            let t = WALL_THICKNESS;
            manager.obstacles.push(Obstacle::new(-t, -t, t, h + 2.0 * t));
            manager.obstacles.push(Obstacle::new(w, -t, t, h + 2.0 * t));
            manager.obstacles.push(Obstacle::new(0.0, -t, w, t));
            manager.obstacles.push(Obstacle::new(0.0, h, w, t));
        }

        debug!(
            "Generated {}x{} chunks with {} obstacles",
            config.chunks_x,
            config.chunks_y,
            manager.obstacles.len()
        );
        manager
    }

    /// Terrain under a world point. Points outside the grid get the default terrain.
    pub fn get_terrain_at(&self, x: f32, y: f32) -> TerrainType {
        self.chunk_at(x, y)
            .map_or(self.default_terrain, |chunk| chunk.terrain)
    }

    pub fn chunk_at(&self, x: f32, y: f32) -> Option<&Chunk> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let cx = (x / self.chunk_size).floor() as i32;
        let cy = (y / self.chunk_size).floor() as i32;
        self.chunks.get(&(cx, cy))
    }

    /// Speed multiplier for `terrain`; unconfigured terrain does not slow.
    pub fn movement_penalty_for(&self, terrain: TerrainType) -> f32 {
        self.penalties.get(&terrain).copied().unwrap_or(1.0)
    }

    /// Name-based lookup; unknown names do not slow.
    pub fn movement_penalty_for_name(&self, name: &str) -> f32 {
        TerrainType::from_name(name).map_or(1.0, |t| self.movement_penalty_for(t))
    }

    pub fn movement_penalty_at(&self, pos: Vec2) -> f32 {
        self.movement_penalty_for(self.get_terrain_at(pos.x, pos.y))
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.values()
    }

    pub fn chunk_size(&self) -> f32 {
        self.chunk_size
    }

    pub fn world_size(&self) -> (f32, f32) {
        (
            self.chunks_x as f32 * self.chunk_size,
            self.chunks_y as f32 * self.chunk_size,
        )
    }
}

fn terrain_for_chunk(layout: TerrainLayout, cx: i32, cy: i32, chunks_y: i32) -> TerrainType {
    let band = match layout {
        TerrainLayout::VerticalThirds => (cy * 3) / chunks_y.max(1),
        TerrainLayout::DiagonalStripes => (cx + cy).rem_euclid(3),
    };
    match band {
        0 => TerrainType::Sea,
        1 => TerrainType::Desert,
        _ => TerrainType::Hellscape,
    }
}

fn random_obstacle_in_chunk(config: &TerrainConfig, cx: i32, cy: i32, rng: &mut impl Rng) -> Obstacle {
    let size = config.chunk_size;
    let min = config.obstacle_min_size.min(size);
    let max = config.obstacle_max_size.min(size).max(min);

    let width = rng.gen_range(min..=max);
    let height = rng.gen_range(min..=max);
    let x = cx as f32 * size + rng.gen_range(0.0..=(size - width).max(0.0));
    let y = cy as f32 * size + rng.gen_range(0.0..=(size - height).max(0.0));

    Obstacle::new(x, y, width, height)
}
