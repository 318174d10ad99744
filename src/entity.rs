//! Shared physical state for every actor in the world
//!
//! Player, enemies and NPCs each own a [`Body`] and add their own behavior on
//! top of it. The body knows where the entity is, how big it is, how healthy
//! it is and whether it can currently be hurt.

use crate::animation::Direction;
use crate::collision::{self, Collidable, CollisionLayer, CollisionMask, Rect, StaticCollidable};
use crate::stats::{DamageResult, Health};
use glam::Vec2;
use serde::{Deserialize, Serialize};

pub type EntityId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Enemy,
    Npc,
}

impl EntityKind {
    pub fn collision_layer(self) -> CollisionLayer {
        match self {
            EntityKind::Player => CollisionLayer::Player,
            EntityKind::Enemy => CollisionLayer::Enemy,
            EntityKind::Npc => CollisionLayer::Npc,
        }
    }
}

/// Hands out unique entity ids
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: EntityId,
}

impl IdAllocator {
    pub fn next_id(&mut self) -> EntityId {
        let id = self.next;
        self.next += 1;
        id
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub id: EntityId,
    pub kind: EntityKind,
    /// Top-left corner in world units
    pub position: Vec2,
    pub size: Vec2,
    /// Velocity applied on the last movement step, after terrain scaling
    pub velocity: Vec2,
    pub facing: Direction,
    pub health: Health,
    invulnerable_ticks: u32,
    mask: Option<CollisionMask>,
    marked_for_removal: bool,
}

impl Body {
    pub fn new(id: EntityId, kind: EntityKind, position: Vec2, size: f32, max_health: f32) -> Self {
        Body {
            id,
            kind,
            position,
            size: Vec2::splat(size),
            velocity: Vec2::ZERO,
            facing: Direction::default(),
            health: Health::new(max_health),
            invulnerable_ticks: 0,
            mask: None,
            marked_for_removal: false,
        }
    }

    pub fn set_mask(&mut self, mask: Option<CollisionMask>) {
        self.mask = mask;
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.size.x, self.size.y)
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size / 2.0
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.position = center - self.size / 2.0;
    }

    pub fn is_alive(&self) -> bool {
        self.health.is_alive()
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable_ticks > 0
    }

    pub fn invulnerable_ticks(&self) -> u32 {
        self.invulnerable_ticks
    }

    pub fn start_invulnerability(&mut self, ticks: u32) {
        self.invulnerable_ticks = ticks;
    }

    /// Counts the invulnerability window down by one tick.
    pub fn tick_invulnerability(&mut self) {
        self.invulnerable_ticks = self.invulnerable_ticks.saturating_sub(1);
    }

    /// Applies damage unless the body is invulnerable.
    pub fn take_damage(&mut self, amount: f32) -> DamageResult {
        if self.is_invulnerable() {
            return DamageResult::no_damage();
        }
        self.health.take_damage(amount)
    }

    pub fn mark_for_removal(&mut self) {
        self.marked_for_removal = true;
    }

    pub fn is_marked_for_removal(&self) -> bool {
        self.marked_for_removal
    }

    /// Moves by `velocity * penalty`, X then Y, stopping at obstacles.
    ///
    /// Facing follows the requested velocity; a zero request keeps it.
    pub fn move_and_collide<S: StaticCollidable>(&mut self, velocity: Vec2, penalty: f32, obstacles: &[S]) {
        if let Some(direction) = Direction::from_velocity(velocity) {
            self.facing = direction;
        }

        let scaled = velocity * penalty;
        let resolved = collision::move_and_collide(self.bounds(), scaled, obstacles);
        self.position = Vec2::new(resolved.x, resolved.y);
        self.velocity = scaled;
    }

    /// Pushes the body `force` units along `direction`, still blocked by obstacles.
    ///
    /// A zero direction does nothing.
    pub fn knockback<S: StaticCollidable>(&mut self, direction: Vec2, force: f32, obstacles: &[S]) {
        let push = direction.normalize_or_zero() * force;
        if push == Vec2::ZERO {
            return;
        }
        let resolved = collision::move_and_collide(self.bounds(), push, obstacles);
        self.position = Vec2::new(resolved.x, resolved.y);
    }
}

impl Collidable for Body {
    fn get_bounds(&self) -> Rect {
        self.bounds()
    }

    fn get_collision_layer(&self) -> CollisionLayer {
        self.kind.collision_layer()
    }

    fn get_collision_mask(&self) -> Option<&CollisionMask> {
        self.mask.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::Obstacle;

    fn body() -> Body {
        Body::new(1, EntityKind::Enemy, Vec2::new(100.0, 100.0), 64.0, 50.0)
    }

    #[test]
    fn test_invulnerable_blocks_damage() {
        let mut b = body();
        b.start_invulnerability(2);

        assert_eq!(b.take_damage(10.0), DamageResult::no_damage());
        assert_eq!(b.health.current(), 50.0);

        b.tick_invulnerability();
        b.tick_invulnerability();
        assert!(!b.is_invulnerable());
        b.tick_invulnerability();
        assert_eq!(b.invulnerable_ticks(), 0);

        b.take_damage(10.0);
        assert_eq!(b.health.current(), 40.0);
    }

    #[test]
    fn test_movement_scaled_by_penalty() {
        let mut b = body();
        let no_obstacles: Vec<Obstacle> = Vec::new();

        b.move_and_collide(Vec2::new(4.0, 0.0), 0.5, &no_obstacles);

        assert_eq!(b.position, Vec2::new(102.0, 100.0));
        assert_eq!(b.velocity, Vec2::new(2.0, 0.0));
        assert_eq!(b.facing, Direction::Right);
    }

    #[test]
    fn test_zero_velocity_keeps_facing() {
        let mut b = body();
        let no_obstacles: Vec<Obstacle> = Vec::new();
        b.move_and_collide(Vec2::new(0.0, -3.0), 1.0, &no_obstacles);
        assert_eq!(b.facing, Direction::Up);

        b.move_and_collide(Vec2::ZERO, 1.0, &no_obstacles);
        assert_eq!(b.facing, Direction::Up);
    }

    #[test]
    fn test_knockback_blocked_by_obstacle() {
        let mut b = body();
        let wall = vec![Obstacle::new(170.0, 0.0, 20.0, 400.0)];

        b.knockback(Vec2::new(1.0, 0.0), 10.0, &wall);

        assert_eq!(b.bounds().right(), 170.0);
    }

    #[test]
    fn test_zero_knockback_is_noop() {
        let mut b = body();
        let no_obstacles: Vec<Obstacle> = Vec::new();
        b.knockback(Vec2::ZERO, 10.0, &no_obstacles);
        assert_eq!(b.position, Vec2::new(100.0, 100.0));
    }
}
