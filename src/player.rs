use crate::animation::DirectionalAnimation;
use crate::config::GameConfig;
use crate::entity::{Body, EntityId, EntityKind};
use crate::input_system::MoveInput;
use crate::inventory::Inventory;
use crate::save::{PlayerSaveData, SaveError, Saveable, check_health, check_position};
use crate::terrain::TerrainManager;
use crate::weapon::{self, Weapon};
use glam::Vec2;
use log::{debug, warn};

pub struct Player {
    pub body: Body,
    pub speed: f32,
    pub interaction_radius: f32,
    weapons: Vec<Weapon>,
    current_weapon: usize,
    pub inventory: Inventory,
    pub gold: u32,
    pub experience: u32,
    pub animation: DirectionalAnimation,
}

impl Player {
    pub fn new(id: EntityId, config: &GameConfig) -> Self {
        let cfg = &config.player;
        let (x, y) = cfg.spawn;
        let mut weapons = vec![Weapon::starter(&config.weapon)];
        for name in &cfg.starting_weapons {
            match weapon::find_in_catalog(&config.weapon, name) {
                Some(w) => weapons.push(w),
                None => warn!("Unknown starting weapon {}", name),
            }
        }
        Player {
            body: Body::new(id, EntityKind::Player, Vec2::new(x, y), cfg.size, cfg.max_health),
            speed: cfg.speed,
            interaction_radius: cfg.interaction_radius,
            weapons,
            current_weapon: 0,
            inventory: Inventory::new(cfg.inventory_capacity),
            gold: cfg.starting_gold,
            experience: 0,
            animation: DirectionalAnimation::placeholder(
                config.animation.frame_width,
                config.animation.frame_height,
                config.animation.frame_delay_ms,
            ),
        }
    }

    /// One simulation step: movement against terrain, cooldowns and animation.
    pub fn update(&mut self, input: MoveInput, dt_ms: f32, terrain: &TerrainManager) {
        let velocity = input.direction() * self.speed;
        let penalty = terrain.movement_penalty_at(self.body.center());
        self.body.move_and_collide(velocity, penalty, terrain.obstacles());

        for weapon in &mut self.weapons {
            weapon.update();
        }
        self.body.tick_invulnerability();
        self.animation
            .update(dt_ms, self.body.facing, velocity != Vec2::ZERO);
    }

    pub fn is_alive(&self) -> bool {
        self.body.is_alive()
    }

    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    pub fn current_weapon_index(&self) -> usize {
        self.current_weapon
    }

    pub fn current_weapon(&self) -> Option<&Weapon> {
        self.weapons.get(self.current_weapon)
    }

    pub fn current_weapon_mut(&mut self) -> Option<&mut Weapon> {
        self.weapons.get_mut(self.current_weapon)
    }

    /// Body and wielded weapon borrowed together, for attack resolution.
    pub fn attack_parts(&mut self) -> (&Body, Option<&mut Weapon>) {
        (&self.body, self.weapons.get_mut(self.current_weapon))
    }

    /// Cycles through carried weapons; `step` may be negative.
    pub fn switch_weapon(&mut self, step: i32) {
        if self.weapons.is_empty() {
            return;
        }
        let len = self.weapons.len() as i32;
        self.current_weapon = (self.current_weapon as i32 + step).rem_euclid(len) as usize;
        debug!(
            "Switched to {}",
            self.weapons[self.current_weapon].name
        );
    }

    pub fn add_weapon(&mut self, weapon: Weapon) {
        debug!("Player received {}", weapon.name);
        self.weapons.push(weapon);
    }

    /// Replaces the carried weapons (save restore); the index is clamped.
    pub fn set_weapons(&mut self, weapons: Vec<Weapon>, current: usize) {
        self.current_weapon = current.min(weapons.len().saturating_sub(1));
        self.weapons = weapons;
    }

    pub fn spend_gold(&mut self, amount: u32) -> bool {
        if self.gold < amount {
            return false;
        }
        self.gold -= amount;
        true
    }

    pub fn heal(&mut self, amount: f32) -> f32 {
        self.body.health.heal(amount)
    }
}

impl Saveable for Player {
    type Data = PlayerSaveData;

    fn to_save_data(&self) -> PlayerSaveData {
        PlayerSaveData {
            position: (self.body.position.x, self.body.position.y),
            health: self.body.health.current(),
            max_health: self.body.health.max(),
            facing: self.body.facing,
            weapons: self.weapons.clone(),
            current_weapon_index: self.current_weapon,
            gold: self.gold,
            experience: self.experience,
            inventory: self.inventory.clone(),
        }
    }

    fn apply_save_data(&mut self, data: &PlayerSaveData) -> Result<(), SaveError> {
        check_position(data.position, "player")?;
        check_health(data.health, data.max_health, "player")?;
        if !data.weapons.is_empty() && data.current_weapon_index >= data.weapons.len() {
            return Err(SaveError::CorruptedData(format!(
                "weapon index {} out of {} weapons",
                data.current_weapon_index,
                data.weapons.len()
            )));
        }
        if data.inventory.slots.len() != data.inventory.capacity {
            return Err(SaveError::CorruptedData(
                "inventory slot count does not match capacity".to_string(),
            ));
        }

        self.body.position = Vec2::new(data.position.0, data.position.1);
        self.body.health.set_max(data.max_health);
        self.body.health.set_current(data.health);
        self.body.facing = data.facing;
        self.set_weapons(data.weapons.clone(), data.current_weapon_index);
        self.gold = data.gold;
        self.experience = data.experience;
        self.inventory = data.inventory.clone();
        Ok(())
    }
}
