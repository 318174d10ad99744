//! Enemy actors and their patrol/chase/attack state machine
//!
//! Every tick an enemy measures the distance from its center to the player's
//! center and picks a state from it:
//!
//! - `d <= attack_range` (kinds with a melee strike) → [`AiState::Attack`]
//! - `d <= detection_radius` → [`AiState::Chase`]
//! - otherwise → [`AiState::Patrol`]
//!
//! A chasing enemy can optionally keep chasing until the player is
//! `chase_hysteresis` further away than the detection radius.

use crate::animation::{AnimationState, Direction, StateAnimation};
use crate::config::GameConfig;
use crate::entity::{Body, EntityId, EntityKind};
use crate::save::{EnemySaveData, SaveError, Saveable, check_health, check_position};
use crate::terrain::TerrainManager;
use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Enemy variants. Each one chases with its own speed and quirks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Walks straight at the player
    Grunt,
    /// Faster, with random jitter on every chase step
    Berserker,
    /// Slow, but stops to strike when in reach
    Brute,
}

impl EnemyKind {
    pub fn speed_multiplier(self) -> f32 {
        match self {
            EnemyKind::Grunt => 1.0,
            EnemyKind::Berserker => 1.5,
            EnemyKind::Brute => 0.8,
        }
    }

    /// Per-axis random offset added to chase velocity
    pub fn jitter(self) -> f32 {
        match self {
            EnemyKind::Berserker => 0.5,
            _ => 0.0,
        }
    }

    /// Distance at which the enemy stops and strikes
    pub fn attack_range(self) -> Option<f32> {
        match self {
            EnemyKind::Brute => Some(48.0),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiState {
    Patrol,
    Chase,
    Attack,
}

pub struct Enemy {
    pub body: Body,
    pub kind: EnemyKind,
    pub state: AiState,
    /// Patrol anchor (center at spawn)
    pub spawn: Vec2,
    heading: Vec2,
    patrol_timer: u32,
    speed: f32,
    detection_radius: f32,
    chase_hysteresis: f32,
    patrol_radius: f32,
    patrol_interval: u32,
    pub contact_damage: f32,
    strike_cooldown: u32,
    strike_cooldown_ticks: u32,
    /// Velocity chosen by the last AI step, before terrain scaling
    pub desired_velocity: Vec2,
    pub animation: StateAnimation,
}

impl Enemy {
    pub fn new(id: EntityId, kind: EnemyKind, position: Vec2, config: &GameConfig) -> Self {
        let cfg = &config.enemy;
        let body = Body::new(id, EntityKind::Enemy, position, cfg.size, cfg.max_health);
        let spawn = body.center();
        Enemy {
            body,
            kind,
            state: AiState::Patrol,
            spawn,
            heading: Vec2::ZERO,
            patrol_timer: 0,
            speed: cfg.speed,
            detection_radius: cfg.detection_radius,
            chase_hysteresis: cfg.chase_hysteresis.max(0.0),
            patrol_radius: cfg.patrol_radius,
            patrol_interval: cfg.patrol_interval_ticks.max(1),
            contact_damage: cfg.contact_damage,
            strike_cooldown: 0,
            strike_cooldown_ticks: cfg.strike_cooldown_ticks,
            desired_velocity: Vec2::ZERO,
            animation: StateAnimation::placeholder(
                config.animation.frame_width,
                config.animation.frame_height,
                config.animation.frame_delay_ms,
            ),
        }
    }

    /// Chooses state and desired velocity for this tick.
    ///
    /// A missing target (or a non-finite distance) skips the AI: the state is
    /// kept and the enemy stands still.
    pub fn update_ai(&mut self, target: Option<Vec2>, rng: &mut impl Rng) {
        let Some(target) = target else {
            self.desired_velocity = Vec2::ZERO;
            return;
        };

        let center = self.body.center();
        let distance = center.distance(target);
        if !distance.is_finite() {
            self.desired_velocity = Vec2::ZERO;
            return;
        }

        let chasing = matches!(self.state, AiState::Chase | AiState::Attack);
        let chase_limit = if chasing {
            self.detection_radius + self.chase_hysteresis
        } else {
            self.detection_radius
        };

        let in_strike_range = self.kind.attack_range().is_some_and(|range| distance <= range);

        if in_strike_range {
            self.state = AiState::Attack;
            self.desired_velocity = Vec2::ZERO;
            if let Some(direction) = Direction::from_velocity(target - center) {
                self.body.facing = direction;
            }
        } else if distance <= chase_limit {
            self.state = AiState::Chase;
            self.desired_velocity = self.chase_velocity(target - center, rng);
        } else {
            self.state = AiState::Patrol;
            self.desired_velocity = self.patrol_velocity(rng);
        }
    }

    fn chase_velocity(&self, offset: Vec2, rng: &mut impl Rng) -> Vec2 {
        let direction = offset.normalize_or_zero();
        if direction == Vec2::ZERO {
            return Vec2::ZERO;
        }

        let mut velocity = direction * self.speed * self.kind.speed_multiplier();
        let jitter = self.kind.jitter();
        if jitter > 0.0 {
            velocity += Vec2::new(
                rng.gen_range(-jitter..=jitter),
                rng.gen_range(-jitter..=jitter),
            );
        }
        velocity
    }

    fn patrol_velocity(&mut self, rng: &mut impl Rng) -> Vec2 {
        self.patrol_timer += 1;
        if self.heading == Vec2::ZERO || self.patrol_timer >= self.patrol_interval {
            self.patrol_timer = 0;
            self.heading = Direction::ALL[rng.gen_range(0..Direction::ALL.len())].to_vec();
        }

        let center = self.body.center();
        if center.distance(self.spawn) > self.patrol_radius {
            self.heading = (self.spawn - center).normalize_or_zero();
        }

        self.heading * self.speed
    }

    /// AI, movement against terrain, timers and animation for one tick.
    pub fn update(&mut self, target: Option<Vec2>, dt_ms: f32, terrain: &TerrainManager, rng: &mut impl Rng) {
        self.update_ai(target, rng);

        let penalty = terrain.movement_penalty_at(self.body.center());
        self.body
            .move_and_collide(self.desired_velocity, penalty, terrain.obstacles());

        self.strike_cooldown = self.strike_cooldown.saturating_sub(1);
        self.body.tick_invulnerability();

        let anim_state = match self.state {
            AiState::Attack => AnimationState::Attack,
            _ if self.desired_velocity != Vec2::ZERO => AnimationState::Moving,
            _ => AnimationState::Idle,
        };
        self.animation
            .update(dt_ms, anim_state, anim_state != AnimationState::Idle);
    }

    pub fn ready_to_strike(&self) -> bool {
        self.state == AiState::Attack && self.strike_cooldown == 0
    }

    pub fn reset_strike(&mut self) {
        self.strike_cooldown = self.strike_cooldown_ticks;
    }

    pub fn is_alive(&self) -> bool {
        self.body.is_alive()
    }
}

impl Saveable for Enemy {
    type Data = EnemySaveData;

    fn to_save_data(&self) -> EnemySaveData {
        EnemySaveData {
            kind: self.kind,
            position: (self.body.position.x, self.body.position.y),
            health: self.body.health.current(),
        }
    }

    /// Restores kind, position and health. The patrol anchor moves with it.
    fn apply_save_data(&mut self, data: &EnemySaveData) -> Result<(), SaveError> {
        check_position(data.position, "enemy")?;
        check_health(data.health, self.body.health.max(), "enemy")?;

        self.kind = data.kind;
        self.body.position = Vec2::new(data.position.0, data.position.1);
        self.body.health.set_current(data.health);
        self.spawn = self.body.center();
        self.state = AiState::Patrol;
        Ok(())
    }
}
