//! End-to-end gameplay scenarios against the public API

use glam::Vec2;
use knightfall::collision::Obstacle;
use knightfall::combat::{CombatEvent, resolve_attack, resolve_contact_damage};
use knightfall::config::{AttackShape, CombatConfig, EnemySpawn, GameConfig};
use knightfall::enemy::{AiState, Enemy, EnemyKind};
use knightfall::entity::{Body, EntityKind};
use knightfall::game::{Game, GameState};
use knightfall::input_system::{GameAction, MoveInput};
use knightfall::save::SaveManager;
use knightfall::terrain::TerrainManager;
use knightfall::weapon::Weapon;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;

const NO_OBSTACLES: &[Obstacle] = &[];

fn body_centered(kind: EntityKind, center: Vec2, health: f32) -> Body {
    let mut body = Body::new(1, kind, Vec2::ZERO, 64.0, health);
    body.set_center(center);
    body
}

#[test]
fn attack_in_range_damages_enemy_with_either_shape() {
    for shape in [AttackShape::DirectionalRect, AttackShape::Radius] {
        let config = CombatConfig {
            attack_shape: shape,
            ..CombatConfig::default()
        };
        let player = body_centered(EntityKind::Player, Vec2::new(400.0, 300.0), 100.0);
        let mut enemy = body_centered(EntityKind::Enemy, Vec2::new(420.0, 300.0), 50.0);
        let mut sword = Weapon::new("Short Sword", 15.0, 100, 50.0, 30);

        let events = resolve_attack(&player, Some(&mut sword), [&mut enemy], &config, NO_OBSTACLES);

        assert_eq!(enemy.health.current(), 35.0, "{:?}", shape);
        assert!(events.iter().any(|e| matches!(e, CombatEvent::Hit { damage, .. } if *damage == 15.0)));
        assert_eq!(sword.current_cooldown(), 30);
    }
}

#[test]
fn cooling_weapon_does_nothing() {
    let player = body_centered(EntityKind::Player, Vec2::new(400.0, 300.0), 100.0);
    let mut enemy = body_centered(EntityKind::Enemy, Vec2::new(420.0, 300.0), 50.0);
    let mut sword = Weapon::new("Short Sword", 15.0, 100, 50.0, 30);
    sword.set_cooldown(5);

    let events = resolve_attack(&player, Some(&mut sword), [&mut enemy], &CombatConfig::default(), NO_OBSTACLES);

    assert!(events.is_empty());
    assert_eq!(enemy.health.current(), 50.0);
    assert_eq!(sword.current_cooldown(), 5);
}

#[test]
fn overkill_marks_enemy_for_removal() {
    let player = body_centered(EntityKind::Player, Vec2::new(400.0, 300.0), 100.0);
    let mut enemy = body_centered(EntityKind::Enemy, Vec2::new(420.0, 300.0), 50.0);
    let mut axe = Weapon::new("Big Axe", 60.0, 0, 50.0, 30);

    let events = resolve_attack(&player, Some(&mut axe), [&mut enemy], &CombatConfig::default(), NO_OBSTACLES);

    assert_eq!(enemy.health.current(), 0.0);
    assert!(enemy.is_marked_for_removal());
    assert!(events.iter().any(|e| matches!(e, CombatEvent::Kill { .. })));
}

#[test]
fn invulnerability_window_blocks_repeat_contact() {
    let config = GameConfig::default();
    let mut player = body_centered(EntityKind::Player, Vec2::new(400.0, 300.0), 100.0);
    let mut grunt = Enemy::new(2, EnemyKind::Grunt, Vec2::ZERO, &config);
    grunt.body.set_center(Vec2::new(400.0, 300.0));
    let enemies = vec![grunt];

    resolve_contact_damage(&mut player, &enemies, &config.combat, NO_OBSTACLES);
    assert_eq!(player.health.current(), 90.0);

    // Overlap again while invulnerable
    player.set_center(Vec2::new(400.0, 300.0));
    let events = resolve_contact_damage(&mut player, &enemies, &config.combat, NO_OBSTACLES);
    assert!(events.is_empty());
    assert_eq!(player.health.current(), 90.0);

    for _ in 0..config.combat.invulnerability_ticks {
        player.tick_invulnerability();
    }
    player.set_center(Vec2::new(400.0, 300.0));
    resolve_contact_damage(&mut player, &enemies, &config.combat, NO_OBSTACLES);
    assert_eq!(player.health.current(), 80.0);
}

#[test]
fn chase_exactly_at_detection_radius() {
    let config = GameConfig::default();
    let mut rng = StdRng::seed_from_u64(5);
    let mut enemy = Enemy::new(3, EnemyKind::Grunt, Vec2::ZERO, &config);
    let center = enemy.body.center();
    let radius = config.enemy.detection_radius;

    enemy.update_ai(Some(center + Vec2::new(radius, 0.0)), &mut rng);
    assert_eq!(enemy.state, AiState::Chase);

    enemy.update_ai(Some(center + Vec2::new(radius + 1.0, 0.0)), &mut rng);
    assert_eq!(enemy.state, AiState::Patrol);
}

#[test]
fn obstacle_stops_rightward_movement_flush() {
    let obstacles = [Obstacle::new(200.0, 0.0, 50.0, 200.0)];
    let mut body = Body::new(1, EntityKind::Player, Vec2::new(130.0, 50.0), 64.0, 100.0);

    body.move_and_collide(Vec2::new(10.0, 0.0), 1.0, &obstacles);

    assert_eq!(body.bounds().right(), 200.0);
}

#[test]
fn terrain_lookup_is_stable_within_a_chunk() {
    let config = GameConfig::default();
    let terrain = TerrainManager::generate(&config.terrain, &mut StdRng::seed_from_u64(9), &[]);

    let first = terrain.get_terrain_at(10.0, 10.0);
    assert_eq!(terrain.get_terrain_at(10.0, 10.0), first);
    assert_eq!(terrain.get_terrain_at(199.0, 199.0), first);
    assert_eq!(terrain.get_terrain_at(-5000.0, 1.0e9), config.terrain.default_terrain);
}

fn quiet_config() -> GameConfig {
    let mut config = GameConfig::default();
    config.world_seed = Some(1234);
    config.terrain.obstacle_chance = HashMap::new();
    config.enemy_spawns = vec![EnemySpawn::new(EnemyKind::Grunt, 20.0, 20.0)];
    config
}

#[test]
fn save_and_load_into_fresh_game() {
    let dir = tempfile::tempdir().unwrap();

    let mut game = Game::new(quiet_config(), SaveManager::new(dir.path()).unwrap());
    game.tick(&[GameAction::MenuConfirm], MoveInput::default(), 16.0);
    game.world.player.body.position = Vec2::new(100.0, 200.0);
    game.world.player.body.health.set_current(80.0);
    game.save_game(1).unwrap();

    let mut fresh = Game::new(quiet_config(), SaveManager::new(dir.path()).unwrap());
    assert!(fresh.load_game(1));

    assert_eq!(fresh.state, GameState::Playing);
    assert_eq!(fresh.world.player.body.position, Vec2::new(100.0, 200.0));
    assert_eq!(fresh.world.player.body.health.current(), 80.0);
    assert_eq!(fresh.world.enemies.len(), 1);
}

#[test]
fn missing_or_corrupt_save_leaves_game_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = Game::new(quiet_config(), SaveManager::new(dir.path()).unwrap());
    let before = game.world.player.body.position;

    assert!(!game.load_game(3));
    std::fs::write(dir.path().join("slot_3.json"), "{\"version\": 1}").unwrap();
    assert!(!game.load_game(3));

    assert_eq!(game.state, GameState::Menu);
    assert_eq!(game.world.player.body.position, before);
}
