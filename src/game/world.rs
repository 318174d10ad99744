// GameWorld struct and entity management
//
// GameWorld owns every actor in the world plus the terrain they move on.
// Systems that span several actors (combat, scoring, quests) live on Game.

use crate::collision::{Collidable, Rect};
use crate::config::GameConfig;
use crate::dropped_item::DroppedItem;
use crate::enemy::Enemy;
use crate::entity::IdAllocator;
use crate::item::{HEALTH_POTION, ItemRegistry};
use crate::npc::Npc;
use crate::player::Player;
use crate::sprite::SpriteBank;
use crate::terrain::TerrainManager;
use glam::Vec2;
use log::{debug, warn};
use rand::Rng;

const STARTING_POTIONS: u32 = 2;

pub struct GameWorld {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub npc: Npc,
    pub dropped_items: Vec<DroppedItem>,
    pub terrain: TerrainManager,
    ids: IdAllocator,
}

impl GameWorld {
    /// Builds a fresh world: actors at their configured spawns, then terrain
    /// generated around them.
    pub fn new(config: &GameConfig, registry: &ItemRegistry, rng: &mut impl Rng) -> Self {
        let mut ids = IdAllocator::default();
        let mut player = Player::new(ids.next_id(), config);
        if let Err(e) = player.inventory.add_item(HEALTH_POTION, STARTING_POTIONS, registry) {
            warn!("Could not hand out starting potions: {}", e);
        }
        let npc = Npc::new(ids.next_id(), config, rng);

        let enemies: Vec<Enemy> = config
            .enemy_spawns
            .iter()
            .map(|spawn| Enemy::new(ids.next_id(), spawn.kind, Vec2::new(spawn.x, spawn.y), config))
            .collect();

        let mut keep_clear: Vec<Rect> = vec![player.body.bounds(), npc.body.bounds()];
        keep_clear.extend(enemies.iter().map(|e| e.body.bounds()));
        let terrain = TerrainManager::generate(&config.terrain, rng, &keep_clear);

        debug!(
            "World built: {} enemies, {} obstacles",
            enemies.len(),
            terrain.obstacles().len()
        );

        GameWorld {
            player,
            enemies,
            npc,
            dropped_items: Vec::new(),
            terrain,
            ids,
        }
    }

    /// Swaps in restored actors, keeping the terrain. Pickups are dropped.
    pub fn replace_actors(&mut self, player: Player, enemies: Vec<Enemy>, npc: Npc, ids: IdAllocator) {
        self.player = player;
        self.enemies = enemies;
        self.npc = npc;
        self.dropped_items.clear();
        self.ids = ids;
    }

    /// Hands the loaded sheets to every actor's animator, and the masks
    /// to their bodies.
    pub fn install_sprites(&mut self, sprites: &SpriteBank) {
        self.player.animation.install(&sprites.player);
        self.player.body.set_mask(sprites.player_mask.clone());
        for enemy in &mut self.enemies {
            enemy.animation.install(&sprites.enemy);
            enemy.body.set_mask(sprites.enemy_mask.clone());
        }
    }

    /// Drops an item stack centered on `position`.
    pub fn spawn_dropped_item(&mut self, position: Vec2, item_id: &str, quantity: u32) {
        self.dropped_items.push(DroppedItem::new(position, item_id, quantity));
    }

    /// Collects pickups the player overlaps, then ages the rest.
    ///
    /// Returns `(item_id, quantity)` for everything that went into the
    /// inventory. Whatever does not fit stays on the ground.
    pub fn update_dropped_items(&mut self, registry: &ItemRegistry) -> Vec<(String, u32)> {
        let mut picked_up = Vec::new();
        let player_bounds = self.player.body.bounds();
        let inventory = &mut self.player.inventory;

        self.dropped_items.retain_mut(|item| {
            if !item.can_pickup() || !player_bounds.intersects(&item.get_bounds()) {
                return true;
            }
            match inventory.add_item(&item.item_id, item.quantity, registry) {
                Ok(overflow) => {
                    let taken = item.quantity - overflow;
                    if taken > 0 {
                        picked_up.push((item.item_id.clone(), taken));
                    }
                    item.quantity = overflow;
                    overflow > 0
                }
                Err(e) => {
                    warn!("Failed to pick up {}: {}", item.item_id, e);
                    true
                }
            }
        });

        self.dropped_items.retain_mut(|item| !item.update());
        picked_up
    }

    /// Sweeps enemies marked during this tick.
    pub fn cleanup_dead_entities(&mut self) {
        self.enemies
            .retain(|enemy| enemy.is_alive() && !enemy.body.is_marked_for_removal());
    }

    pub fn player_center(&self) -> Option<Vec2> {
        self.player.is_alive().then(|| self.player.body.center())
    }
}
