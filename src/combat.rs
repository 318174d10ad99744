//! Hit detection and damage resolution
//!
//! Three resolvers run every playing tick:
//!
//! - [`resolve_attack`]: the player's weapon against every enemy
//! - [`resolve_contact_damage`]: enemies touching the player
//! - [`resolve_enemy_strikes`]: enemies in their attack state striking
//!
//! Double hits within one tick are impossible: weapon attacks are gated by
//! the weapon cooldown and damage to the player by its invulnerability window.

use crate::animation::Direction;
use crate::collision::{aabb_intersect, entities_overlap, Rect, StaticCollidable};
use crate::config::{AttackShape, CombatConfig};
use crate::enemy::Enemy;
use crate::entity::{Body, EntityId};
use crate::weapon::Weapon;
use glam::Vec2;
use log::debug;

/// What caused damage to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageSource {
    Contact,
    Strike,
}

/// Outcomes reported to the rest of the game (effects, sounds, quests, score)
#[derive(Debug, Clone, PartialEq)]
pub enum CombatEvent {
    /// An attack was issued, whether or not it connected
    Swing { position: Vec2 },
    Hit { target: EntityId, damage: f32, position: Vec2 },
    Kill { target: EntityId, position: Vec2 },
    PlayerHurt { damage: f32, source: DamageSource, fatal: bool, position: Vec2 },
}

/// The area an attack covers
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitRegion {
    Rect(Rect),
    Circle { center: Vec2, radius: f32 },
}

impl HitRegion {
    /// Region of an attack from `attacker` reaching `range` units in its facing direction.
    pub fn for_attack(attacker: &Body, range: f32, shape: AttackShape) -> Self {
        match shape {
            AttackShape::DirectionalRect => {
                let b = attacker.bounds();
                let rect = match attacker.facing {
                    Direction::Right => Rect::new(b.x, b.y, b.width + range, b.height),
                    Direction::Left => Rect::new(b.x - range, b.y, b.width + range, b.height),
                    Direction::Down => Rect::new(b.x, b.y, b.width, b.height + range),
                    Direction::Up => Rect::new(b.x, b.y - range, b.width, b.height + range),
                };
                HitRegion::Rect(rect)
            }
            AttackShape::Radius => HitRegion::Circle {
                center: attacker.center() + attacker.facing.to_vec() * range,
                radius: range,
            },
        }
    }

    pub fn hits(&self, target: &Body) -> bool {
        match self {
            HitRegion::Rect(rect) => aabb_intersect(rect, &target.bounds()),
            HitRegion::Circle { center, radius } => target.center().distance(*center) <= *radius,
        }
    }
}

/// Swings `weapon` from `attacker` at every defender.
///
/// No weapon or a weapon still cooling down means nothing happens. Otherwise
/// every living defender inside the hit region takes the weapon's damage and
/// is knocked back along the attacker's facing; the weapon cooldown restarts.
pub fn resolve_attack<'a, S: StaticCollidable>(
    attacker: &Body,
    weapon: Option<&mut Weapon>,
    defenders: impl IntoIterator<Item = &'a mut Body>,
    config: &CombatConfig,
    obstacles: &[S],
) -> Vec<CombatEvent> {
    let Some(weapon) = weapon else {
        return Vec::new();
    };
    if !weapon.can_attack() {
        return Vec::new();
    }

    let region = HitRegion::for_attack(attacker, weapon.range, config.attack_shape);
    let push = attacker.facing.to_vec();
    let mut events = vec![CombatEvent::Swing {
        position: attacker.center() + push * weapon.range / 2.0,
    }];

    for defender in defenders {
        if !defender.is_alive() || defender.is_marked_for_removal() || !region.hits(defender) {
            continue;
        }

        let result = defender.take_damage(weapon.damage);
        if result.damage_dealt <= 0.0 {
            continue;
        }
        defender.knockback(push, config.knockback_force, obstacles);
        events.push(CombatEvent::Hit {
            target: defender.id,
            damage: result.damage_dealt,
            position: defender.center(),
        });

        if result.is_fatal {
            defender.mark_for_removal();
            events.push(CombatEvent::Kill {
                target: defender.id,
                position: defender.center(),
            });
        }
    }

    debug!("{} swung for {} ({} events)", weapon.name, weapon.damage, events.len());
    weapon.trigger();
    events
}

fn hurt_player<S: StaticCollidable>(
    player: &mut Body,
    damage: f32,
    from: Vec2,
    source: DamageSource,
    config: &CombatConfig,
    obstacles: &[S],
) -> Option<CombatEvent> {
    if player.is_invulnerable() || !player.is_alive() {
        return None;
    }

    let result = player.take_damage(damage);
    player.start_invulnerability(config.invulnerability_ticks);
    player.knockback(player.center() - from, config.knockback_force, obstacles);

    Some(CombatEvent::PlayerHurt {
        damage: result.damage_dealt,
        source,
        fatal: result.is_fatal,
        position: player.center(),
    })
}

/// Damages the player for touching an enemy.
///
/// The first overlapping enemy starts the invulnerability window, so the
/// rest of the overlaps this tick do nothing.
pub fn resolve_contact_damage<S: StaticCollidable>(
    player: &mut Body,
    enemies: &[Enemy],
    config: &CombatConfig,
    obstacles: &[S],
) -> Vec<CombatEvent> {
    let mut events = Vec::new();
    for enemy in enemies {
        if !enemy.is_alive() || enemy.body.is_marked_for_removal() {
            continue;
        }
        if !entities_overlap(player, &enemy.body) {
            continue;
        }
        if let Some(event) = hurt_player(
            player,
            enemy.contact_damage,
            enemy.body.center(),
            DamageSource::Contact,
            config,
            obstacles,
        ) {
            events.push(event);
        }
    }
    events
}

/// Lets every enemy in its attack state with a ready strike hit the player.
pub fn resolve_enemy_strikes<S: StaticCollidable>(
    player: &mut Body,
    enemies: &mut [Enemy],
    config: &CombatConfig,
    obstacles: &[S],
) -> Vec<CombatEvent> {
    let mut events = Vec::new();
    for enemy in enemies.iter_mut() {
        if !enemy.is_alive() || !enemy.ready_to_strike() {
            continue;
        }
        enemy.reset_strike();
        if let Some(event) = hurt_player(
            player,
            enemy.contact_damage,
            enemy.body.center(),
            DamageSource::Strike,
            config,
            obstacles,
        ) {
            events.push(event);
        }
    }
    events
}
