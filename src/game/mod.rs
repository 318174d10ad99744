// Game module - owns the world and drives it one tick at a time
//
// This module contains:
// - world.rs: GameWorld struct and entity management
// - state.rs: top-level game mode
// - menu.rs: main menu selection
// - hud.rs: values shown over the world
// - events.rs: sound cues emitted by the simulation
// - clock.rs: frame pacing for the main loop

pub mod clock;
pub mod events;
pub mod hud;
pub mod menu;
pub mod state;
pub mod world;

pub use clock::FrameClock;
pub use events::SoundCue;
pub use hud::Hud;
pub use menu::{MainMenu, MenuOption};
pub use state::GameState;
pub use world::GameWorld;

use crate::camera::Camera;
use crate::combat::{self, CombatEvent};
use crate::config::GameConfig;
use crate::enemy::Enemy;
use crate::entity::IdAllocator;
use crate::input_system::{GameAction, InputContext, MoveInput};
use crate::item::{ConsumableEffect, ItemRegistry, WEAPON_PART};
use crate::npc::{Npc, NpcInteraction};
use crate::particles::ParticleSystem;
use crate::player::Player;
use crate::quest::QuestManager;
use crate::save::{
    CURRENT_SAVE_VERSION, SaveError, SaveFile, SaveManager, SaveMetadata, SaveType, Saveable,
};
use crate::sprite::SpriteBank;
use glam::Vec2;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use std::time::SystemTime;

pub struct Game {
    config: GameConfig,
    pub state: GameState,
    pub world: GameWorld,
    pub quests: QuestManager,
    pub particles: ParticleSystem,
    pub camera: Camera,
    pub hud: Hud,
    pub menu: MainMenu,
    pub score: u32,
    registry: ItemRegistry,
    sprites: SpriteBank,
    saves: SaveManager,
    rng: StdRng,
    sounds: Vec<SoundCue>,
    ticks: u64,
    quit_requested: bool,
}

impl Game {
    /// Builds the world and opens on the main menu.
    pub fn new(config: GameConfig, saves: SaveManager) -> Self {
        let mut rng = match config.world_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let registry = ItemRegistry::create_default();
        let world = GameWorld::new(&config, &registry, &mut rng);
        let mut camera = Camera::new(
            config.screen.width,
            config.screen.height,
            config.hud.camera_smoothing,
        );
        camera.snap_to(world.player.body.center());

        Game {
            quests: QuestManager::new(config.weapon.cooldown_ticks),
            hud: Hud::new(config.hud.message_duration_ms),
            state: GameState::Menu,
            world,
            particles: ParticleSystem::new(),
            camera,
            menu: MainMenu::new(),
            score: 0,
            registry,
            sprites: SpriteBank::default(),
            saves,
            rng,
            sounds: Vec::new(),
            ticks: 0,
            quit_requested: false,
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn registry(&self) -> &ItemRegistry {
        &self.registry
    }

    pub fn saves(&self) -> &SaveManager {
        &self.saves
    }

    pub fn input_context(&self) -> InputContext {
        self.state.input_context()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Uses `sprites` for the current actors and every one created later.
    pub fn set_sprites(&mut self, sprites: SpriteBank) {
        self.world.install_sprites(&sprites);
        self.sprites = sprites;
    }

    /// Sound cues emitted since the last call
    pub fn drain_sounds(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.sounds)
    }

    /// Throws away the current run and starts a new one.
    pub fn restart(&mut self) {
        self.world = GameWorld::new(&self.config, &self.registry, &mut self.rng);
        self.world.install_sprites(&self.sprites);
        self.quests = QuestManager::new(self.config.weapon.cooldown_ticks);
        self.particles.clear();
        self.hud = Hud::new(self.config.hud.message_duration_ms);
        self.camera.snap_to(self.world.player.body.center());
        self.score = 0;
        self.sounds.clear();
        self.state = GameState::Playing;
        info!("New game started");
    }

    /// Advances the game by one frame.
    ///
    /// Actions are dispatched first against the current state; the world
    /// only simulates while playing.
    pub fn tick(&mut self, actions: &[GameAction], movement: MoveInput, dt_ms: f32) {
        for action in actions {
            self.handle_action(*action);
        }

        if self.state.is_simulating() {
            self.simulate(movement, dt_ms);
        }
        self.hud.update(dt_ms, &self.world.player, self.score);
    }

    fn handle_action(&mut self, action: GameAction) {
        match (self.state, action) {
            (GameState::Menu, GameAction::MenuUp) => self.menu.select_previous(),
            (GameState::Menu, GameAction::MenuDown) => self.menu.select_next(),
            (GameState::Menu, GameAction::MenuConfirm) => self.confirm_menu(),
            (GameState::Menu, GameAction::Quit) => self.quit_requested = true,

            (GameState::Playing, GameAction::Attack) => self.player_attack(),
            (GameState::Playing, GameAction::NextWeapon) => self.world.player.switch_weapon(1),
            (GameState::Playing, GameAction::PreviousWeapon) => self.world.player.switch_weapon(-1),
            (GameState::Playing, GameAction::Interact) => self.interact(),
            (GameState::Playing, GameAction::BuyItem(index)) => self.buy(index),
            (GameState::Playing, GameAction::QuickUse) => {
                match self.world.player.inventory.first_usable_slot(&self.registry) {
                    Some(slot) => self.use_item(slot),
                    None => self.hud.show_message("Nothing to use"),
                }
            }
            (GameState::Playing, GameAction::ToggleInventory) => self.state = GameState::Inventory,
            (GameState::Playing, GameAction::TogglePause) => self.state = GameState::Paused,
            (GameState::Playing | GameState::GameOver | GameState::Victory, GameAction::OpenMenu) => {
                self.state = GameState::Menu
            }

            (GameState::Inventory, GameAction::ToggleInventory) => self.state = GameState::Playing,
            (GameState::Inventory, GameAction::UseItem(slot)) => self.use_item(slot),

            (GameState::Paused, GameAction::TogglePause) => self.state = GameState::Playing,

            (GameState::Playing | GameState::Paused, GameAction::QuickSave) => {
                if let Err(e) = self.quick_save() {
                    warn!("Quick save failed: {}", e);
                    self.hud.show_message("Save failed");
                }
            }
            (GameState::Playing, GameAction::QuickLoad) => {
                let slot = self.saves.get_save_slot();
                self.load_game(slot);
            }

            (GameState::GameOver | GameState::Victory, GameAction::Restart) => self.restart(),
            _ => {}
        }
    }

    fn confirm_menu(&mut self) {
        match self.menu.selected() {
            MenuOption::Start => self.restart(),
            MenuOption::Load => {
                let slot = self.saves.get_save_slot();
                self.load_game(slot);
            }
            MenuOption::Quit => self.quit_requested = true,
        }
    }

    fn simulate(&mut self, movement: MoveInput, dt_ms: f32) {
        let world = &mut self.world;
        world.player.update(movement, dt_ms, &world.terrain);

        let target = world.player_center();
        for enemy in world
            .enemies
            .iter_mut()
            .filter(|e| !e.body.is_marked_for_removal())
        {
            enemy.update(target, dt_ms, &world.terrain, &mut self.rng);
        }

        let mut events = combat::resolve_contact_damage(
            &mut world.player.body,
            &world.enemies,
            &self.config.combat,
            world.terrain.obstacles(),
        );
        events.extend(combat::resolve_enemy_strikes(
            &mut world.player.body,
            &mut world.enemies,
            &self.config.combat,
            world.terrain.obstacles(),
        ));
        self.apply_combat_events(events);

        self.world.npc.update(&mut self.rng);

        for (item_id, quantity) in self.world.update_dropped_items(&self.registry) {
            self.quests.record_pickup(&item_id, quantity);
            self.sounds.push(SoundCue::ItemPickup);
            let name = self
                .registry
                .get(&item_id)
                .map_or(item_id.as_str(), |def| def.name.as_str());
            self.hud.show_message(format!("Picked up {} x{}", name, quantity));
        }

        for title in self.quests.check_completion(&mut self.world.player) {
            self.hud.show_message(format!("Quest complete: {}", title));
        }

        self.world.cleanup_dead_entities();
        self.particles.update();
        self.camera.update(self.world.player.body.center());
        self.ticks += 1;

        if !self.world.player.is_alive() {
            info!("Player died with score {}", self.score);
            self.state = GameState::GameOver;
        } else if self.world.enemies.is_empty() {
            info!("All enemies defeated, score {}", self.score);
            self.state = GameState::Victory;
        }
    }

    fn player_attack(&mut self) {
        let world = &mut self.world;
        let (attacker, weapon) = world.player.attack_parts();
        let events = combat::resolve_attack(
            attacker,
            weapon,
            world.enemies.iter_mut().map(|e| &mut e.body),
            &self.config.combat,
            world.terrain.obstacles(),
        );
        self.apply_combat_events(events);
    }

    /// Turns combat results into score, quest progress, loot and effects.
    fn apply_combat_events(&mut self, events: Vec<CombatEvent>) {
        for event in events {
            self.sounds.push(SoundCue::for_combat(&event));
            match event {
                CombatEvent::Swing { position } => {
                    let facing = self.world.player.body.facing.to_vec();
                    self.particles
                        .create_attack_effect(position, facing, &mut self.rng);
                }
                CombatEvent::Hit { position, .. } => {
                    self.particles.create_hit_effect(position, &mut self.rng);
                }
                CombatEvent::Kill { position, .. } => {
                    self.score = self.score.saturating_add(self.config.combat.score_per_kill);
                    self.quests.record_kill();
                    self.particles.create_death_effect(position, &mut self.rng);
                    let loot_chance = self.config.enemy.loot_chance.clamp(0.0, 1.0);
                    if self.rng.gen_bool(loot_chance) {
                        self.world.spawn_dropped_item(position, WEAPON_PART, 1);
                    }
                }
                CombatEvent::PlayerHurt { position, .. } => {
                    self.particles.create_hit_effect(position, &mut self.rng);
                }
            }
        }
    }

    fn interact(&mut self) {
        let player = &self.world.player;
        if !self
            .world
            .npc
            .in_reach(player.body.center(), player.interaction_radius)
        {
            return;
        }

        let mut message = match self.world.npc.interact() {
            NpcInteraction::Shop(stock) => {
                let items: Vec<String> = stock
                    .iter()
                    .enumerate()
                    .map(|(i, w)| format!("{}) {} {}g", i + 1, w.name, w.price))
                    .collect();
                format!("{}: {}", self.world.npc.name, items.join("  "))
            }
            NpcInteraction::OutOfStock(text) => text.to_string(),
        };
        if let Some(title) = self.quests.accept_next() {
            message = format!("New quest: {}. {}", title, message);
        }
        self.hud.show_message(message);
    }

    fn buy(&mut self, index: usize) {
        let player = &mut self.world.player;
        if !self
            .world
            .npc
            .in_reach(player.body.center(), player.interaction_radius)
        {
            return;
        }
        match self.world.npc.buy(index, &mut player.gold) {
            Ok(weapon) => {
                self.hud.show_message(format!("Bought {}", weapon.name));
                player.add_weapon(weapon);
            }
            Err(e) => self.hud.show_message(e.to_string()),
        }
    }

    fn use_item(&mut self, slot: usize) {
        match self.world.player.inventory.use_item(slot, &self.registry) {
            Ok(ConsumableEffect::Heal(amount)) => {
                let healed = self.world.player.heal(amount);
                self.hud.show_message(format!("Healed {:.0}", healed));
            }
            Err(e) => self.hud.show_message(e.to_string()),
        }
    }

    /// Captures the current run as a save file for `slot`.
    pub fn snapshot(&self, save_type: SaveType, slot: u8) -> SaveFile {
        SaveFile {
            version: CURRENT_SAVE_VERSION,
            timestamp: SystemTime::now(),
            metadata: SaveMetadata {
                game_version: env!("CARGO_PKG_VERSION").to_string(),
                saved_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
                playtime_ticks: self.ticks,
                save_type,
                save_slot: slot,
            },
            player: self.world.player.to_save_data(),
            enemies: self.world.enemies.iter().map(Saveable::to_save_data).collect(),
            npc_inventory: self.world.npc.to_save_data(),
            quests: self.quests.to_save_data(),
            score: self.score,
        }
    }

    pub fn save_game(&mut self, slot: u8) -> Result<PathBuf, SaveError> {
        let file = self.snapshot(SaveType::Manual, slot);
        self.write_save(&file)
    }

    /// Saves into the currently selected slot.
    pub fn quick_save(&mut self) -> Result<PathBuf, SaveError> {
        let file = self.snapshot(SaveType::QuickSave, self.saves.get_save_slot());
        self.write_save(&file)
    }

    fn write_save(&mut self, file: &SaveFile) -> Result<PathBuf, SaveError> {
        let path = self.saves.save_game(file)?;
        self.hud
            .show_message(format!("Saved to slot {}", file.metadata.save_slot));
        Ok(path)
    }

    /// Loads `slot` into the running game.
    ///
    /// Returns false when the save is missing or unusable; in that case the
    /// current game is left exactly as it was.
    pub fn load_game(&mut self, slot: u8) -> bool {
        let result = match self.saves.load_game(slot) {
            Ok(file) => self.restore(&file),
            Err(e) => Err(e),
        };
        match result {
            Ok(()) => {
                self.saves.set_save_slot(slot);
                self.hud.show_message(format!("Loaded slot {}", slot));
                info!("Loaded save slot {}", slot);
                true
            }
            Err(e) => {
                warn!("Failed to load slot {}: {}", slot, e);
                self.hud.show_message(format!("Could not load slot {}", slot));
                false
            }
        }
    }

    /// Rebuilds every actor from `file`, then swaps them in. Nothing changes
    /// unless the whole file applies cleanly.
    fn restore(&mut self, file: &SaveFile) -> Result<(), SaveError> {
        let config = &self.config;
        let mut ids = IdAllocator::default();

        let mut player = Player::new(ids.next_id(), config);
        player.apply_save_data(&file.player)?;

        let mut npc = Npc::unstocked(ids.next_id(), config);
        npc.apply_save_data(&file.npc_inventory)?;

        let enemies = file
            .enemies
            .iter()
            .map(|data| {
                let position = Vec2::new(data.position.0, data.position.1);
                let mut enemy = Enemy::new(ids.next_id(), data.kind, position, config);
                enemy.apply_save_data(data)?;
                Ok(enemy)
            })
            .collect::<Result<Vec<_>, SaveError>>()?;

        let mut quests = QuestManager::new(config.weapon.cooldown_ticks);
        quests.apply_save_data(&file.quests)?;

        self.world.replace_actors(player, enemies, npc, ids);
        self.world.install_sprites(&self.sprites);
        self.quests = quests;
        self.score = file.score;
        self.ticks = file.metadata.playtime_ticks;
        self.particles.clear();
        self.camera.snap_to(self.world.player.body.center());
        self.state = GameState::Playing;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnemySpawn;
    use crate::enemy::EnemyKind;
    use crate::input_system::Key;
    use rand::RngCore;
    use std::collections::HashMap;

    fn config_with(spawns: Vec<EnemySpawn>) -> GameConfig {
        let mut config = GameConfig::default();
        config.world_seed = Some(42);
        config.terrain.obstacle_chance = HashMap::new();
        config.enemy_spawns = spawns;
        config
    }

    fn playing_game(config: GameConfig, dir: &tempfile::TempDir) -> Game {
        let saves = SaveManager::new(dir.path()).unwrap();
        let mut game = Game::new(config, saves);
        game.tick(&[GameAction::MenuConfirm], MoveInput::default(), 16.0);
        game
    }

    /// An enemy parked just right of the player spawn, far from others
    fn adjacent_grunt() -> EnemySpawn {
        EnemySpawn::new(EnemyKind::Grunt, 388.0, 268.0)
    }

    #[test]
    fn test_starts_on_menu() {
        let dir = tempfile::tempdir().unwrap();
        let game = Game::new(config_with(vec![]), SaveManager::new(dir.path()).unwrap());
        assert_eq!(game.state, GameState::Menu);
        assert_eq!(game.input_context(), InputContext::Menu);
    }

    #[test]
    fn test_menu_quit() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = Game::new(config_with(vec![]), SaveManager::new(dir.path()).unwrap());
        game.tick(&[GameAction::MenuUp, GameAction::MenuConfirm], MoveInput::default(), 16.0);
        assert!(game.quit_requested());
    }

    #[test]
    fn test_empty_world_is_victory() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = playing_game(config_with(vec![]), &dir);
        assert_eq!(game.state, GameState::Victory);

        game.tick(&[GameAction::Restart], MoveInput::default(), 16.0);
        assert_eq!(game.state, GameState::Victory);
    }

    #[test]
    fn test_kill_scores_and_advances_quest() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_with(vec![adjacent_grunt(), EnemySpawn::new(EnemyKind::Grunt, 10.0, 10.0)]);
        config.enemy.max_health = 10.0;
        config.enemy.loot_chance = 1.0;
        let mut game = playing_game(config, &dir);
        game.quests.accept_quest("QUEST_001");

        game.tick(&[GameAction::Attack], MoveInput::default(), 16.0);

        assert_eq!(game.score, 100);
        assert_eq!(game.world.enemies.len(), 1);
        assert_eq!(game.world.dropped_items.len(), 1);
        assert_eq!(game.quests.to_save_data().active.get("QUEST_001"), Some(&vec![1]));
        let sounds = game.drain_sounds();
        assert!(sounds.contains(&SoundCue::SwordSwing));
        assert!(sounds.contains(&SoundCue::EnemyDeath));
        assert!(game.drain_sounds().is_empty());
    }

    #[test]
    fn test_player_death_is_game_over() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_with(vec![adjacent_grunt()]);
        config.enemy.contact_damage = 1000.0;
        let mut game = playing_game(config, &dir);
        assert_eq!(game.state, GameState::GameOver);
        assert_eq!(game.input_context(), InputContext::Ended);

        game.tick(&[GameAction::Restart], MoveInput::default(), 16.0);
        // The grunt spawns overlapping the player again
        assert_eq!(game.state, GameState::GameOver);
        assert_eq!(game.score, 0);
    }

    #[test]
    fn test_pause_freezes_world() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = playing_game(config_with(vec![EnemySpawn::new(EnemyKind::Grunt, 10.0, 10.0)]), &dir);
        game.tick(&[GameAction::TogglePause], MoveInput::default(), 16.0);
        let before = game.world.player.body.position;
        let ticks = game.ticks();

        game.tick(&[], MoveInput::from_held(&[Key::D]), 16.0);
        assert_eq!(game.world.player.body.position, before);
        assert_eq!(game.ticks(), ticks);

        game.tick(&[GameAction::TogglePause], MoveInput::from_held(&[Key::D]), 16.0);
        assert_ne!(game.world.player.body.position, before);
    }

    #[test]
    fn test_quick_use_heals() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = playing_game(config_with(vec![EnemySpawn::new(EnemyKind::Grunt, 10.0, 10.0)]), &dir);
        game.world.player.body.health.set_current(50.0);

        game.tick(&[GameAction::QuickUse], MoveInput::default(), 16.0);
        assert_eq!(game.world.player.body.health.current(), 75.0);
        assert_eq!(game.hud.message(), Some("Healed 25"));
    }

    #[test]
    fn test_save_then_load_restores_run() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = playing_game(config_with(vec![EnemySpawn::new(EnemyKind::Brute, 10.0, 10.0)]), &dir);
        game.world.player.body.position = Vec2::new(100.0, 200.0);
        game.world.player.body.health.set_current(80.0);
        game.score = 700;
        game.save_game(2).unwrap();

        game.world.player.body.position = Vec2::new(0.0, 0.0);
        game.score = 0;
        assert!(game.load_game(2));

        assert_eq!(game.world.player.body.position, Vec2::new(100.0, 200.0));
        assert_eq!(game.world.player.body.health.current(), 80.0);
        assert_eq!(game.score, 700);
        assert_eq!(game.world.enemies[0].kind, EnemyKind::Brute);
    }

    #[test]
    fn test_failed_load_keeps_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = playing_game(config_with(vec![EnemySpawn::new(EnemyKind::Grunt, 10.0, 10.0)]), &dir);
        game.world.player.body.position = Vec2::new(50.0, 60.0);

        assert!(!game.load_game(4));
        std::fs::write(dir.path().join("slot_4.json"), "not a save").unwrap();
        assert!(!game.load_game(4));

        assert_eq!(game.world.player.body.position, Vec2::new(50.0, 60.0));
        assert_eq!(game.state, GameState::Playing);
    }

    #[test]
    fn test_rejected_load_leaves_rng_alone() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = playing_game(config_with(vec![EnemySpawn::new(EnemyKind::Grunt, 10.0, 10.0)]), &dir);
        let path = game.save_game(2).unwrap();

        let mut file: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        file["enemies"][0]["health"] = serde_json::json!(9999.0);
        std::fs::write(&path, serde_json::to_string(&file).unwrap()).unwrap();

        let before = game.rng.clone().next_u64();
        assert!(!game.load_game(2));
        assert_eq!(game.rng.clone().next_u64(), before);
    }

    #[test]
    fn test_quick_save_uses_selected_slot() {
        let dir = tempfile::tempdir().unwrap();
        let mut game = playing_game(config_with(vec![EnemySpawn::new(EnemyKind::Grunt, 10.0, 10.0)]), &dir);
        game.saves.set_save_slot(3);

        game.tick(&[GameAction::QuickSave], MoveInput::default(), 16.0);

        let file = game.saves().load_game(3).unwrap();
        assert_eq!(file.metadata.save_type, SaveType::QuickSave);
        assert_eq!(file.metadata.save_slot, 3);
        assert_eq!(game.hud.message(), Some("Saved to slot 3"));
    }

    #[test]
    fn test_walking_cycles_through_installed_frames() {
        use crate::animation::Direction;
        use crate::sprite::{Frame, FrameSet, SpriteSource};
        use std::collections::HashSet;

        let frames = (0..4).map(|i| Frame::new(i * 93, 0, 93, 93)).collect();
        let walk = FrameSet::new(SpriteSource::Sheet("player_right.png".into()), frames).unwrap();
        let mut bank = SpriteBank::default();
        bank.player.insert(Direction::Right, walk);

        let dir = tempfile::tempdir().unwrap();
        let mut game = Game::new(
            config_with(vec![EnemySpawn::new(EnemyKind::Grunt, 10.0, 10.0)]),
            SaveManager::new(dir.path()).unwrap(),
        );
        game.set_sprites(bank);
        game.tick(&[GameAction::MenuConfirm], MoveInput::default(), 16.0);

        let mut seen = HashSet::new();
        for _ in 0..40 {
            game.tick(&[], MoveInput::from_held(&[Key::D]), 16.0);
            seen.insert(game.world.player.animation.frame_index());
        }
        assert_eq!(game.world.player.animation.current_set().map(FrameSet::len), Some(4));
        assert_eq!(seen, HashSet::from([0, 1, 2, 3]));
    }

    #[test]
    fn test_masks_decide_contact_damage() {
        use crate::collision::CollisionMask;

        // Only the top-left pixel of each 64x64 sprite is solid
        let mut rows = vec![".".repeat(64); 64];
        rows[0].replace_range(0..1, "#");
        let corner = CollisionMask::from_rows(&rows).unwrap();

        let mut config = config_with(vec![adjacent_grunt()]);
        config.enemy.contact_damage = 1000.0;
        let dir = tempfile::tempdir().unwrap();
        let mut game = Game::new(config, SaveManager::new(dir.path()).unwrap());
        game.set_sprites(SpriteBank {
            player_mask: Some(corner.clone()),
            enemy_mask: Some(corner),
            ..SpriteBank::default()
        });

        game.tick(&[GameAction::MenuConfirm], MoveInput::default(), 16.0);

        assert_eq!(game.state, GameState::Playing);
        assert_eq!(game.world.player.body.health.current(), 100.0);
    }
}
