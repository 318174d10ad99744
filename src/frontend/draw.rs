//! Scene drawing
//!
//! Everything is drawn in screen space through the game camera. Each actor's
//! animator says which frame of which sheet to show; colored rects stand in
//! for sheets that failed to load.

use super::text::{draw_text, draw_text_centered};
use crate::camera::Camera;
use crate::collision::{Rect as WorldRect, StaticCollidable};
use crate::enemy::Enemy;
use crate::game::{Game, GameState, MenuOption};
use crate::sprite::{self, FrameSet, SpriteSource};
use crate::terrain::TerrainType;
use glam::Vec2;
use log::warn;
use sdl2::image::LoadTexture;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

fn sdl_color(color: sprite::Color) -> Color {
    Color::RGB(color.r, color.g, color.b)
}

fn terrain_color(terrain: TerrainType) -> Color {
    match terrain {
        TerrainType::Sea => Color::RGB(40, 90, 160),
        TerrainType::Desert => Color::RGB(200, 170, 100),
        TerrainType::Hellscape => Color::RGB(120, 30, 20),
    }
}

/// Lazily loaded sheet textures. A sheet that fails once is not retried.
pub struct TextureCache<'a> {
    creator: &'a TextureCreator<WindowContext>,
    loaded: HashMap<PathBuf, Texture<'a>>,
    failed: HashSet<PathBuf>,
}

impl<'a> TextureCache<'a> {
    pub fn new(creator: &'a TextureCreator<WindowContext>) -> Self {
        TextureCache {
            creator,
            loaded: HashMap::new(),
            failed: HashSet::new(),
        }
    }

    fn get(&mut self, path: &Path) -> Option<&Texture<'a>> {
        if self.failed.contains(path) {
            return None;
        }
        if !self.loaded.contains_key(path) {
            match self.creator.load_texture(path) {
                Ok(texture) => {
                    self.loaded.insert(path.to_path_buf(), texture);
                }
                Err(e) => {
                    warn!("Failed to load {}: {}", path.display(), e);
                    self.failed.insert(path.to_path_buf());
                    return None;
                }
            }
        }
        self.loaded.get(path)
    }
}

fn screen_rect(camera: &Camera, bounds: WorldRect) -> Rect {
    let top_left = camera.world_to_screen(Vec2::new(bounds.x, bounds.y));
    Rect::new(
        top_left.x.round() as i32,
        top_left.y.round() as i32,
        bounds.width.max(1.0) as u32,
        bounds.height.max(1.0) as u32,
    )
}

pub struct Renderer<'a> {
    textures: TextureCache<'a>,
}

impl<'a> Renderer<'a> {
    pub fn new(textures: TextureCache<'a>) -> Self {
        Renderer { textures }
    }

    pub fn render(&mut self, canvas: &mut Canvas<Window>, game: &Game) -> Result<(), String> {
        canvas.set_blend_mode(BlendMode::Blend);
        canvas.set_draw_color(Color::RGB(0, 0, 0));
        canvas.clear();

        if game.state != GameState::Menu {
            self.draw_world(canvas, game)?;
            self.draw_hud(canvas, game)?;
        }

        match game.state {
            GameState::Menu => draw_menu(canvas, game)?,
            GameState::Paused => draw_banner(canvas, game, "PAUSED", "P to resume, F5 to save")?,
            GameState::Inventory => draw_inventory(canvas, game)?,
            GameState::GameOver => draw_banner(canvas, game, "GAME OVER", "Enter to restart")?,
            GameState::Victory => draw_banner(canvas, game, "VICTORY", "Enter to play again")?,
            GameState::Playing => {}
        }

        canvas.present();
        Ok(())
    }

    fn draw_world(&mut self, canvas: &mut Canvas<Window>, game: &Game) -> Result<(), String> {
        let camera = &game.camera;
        let world = &game.world;
        let chunk_size = world.terrain.chunk_size();

        for chunk in world.terrain.chunks() {
            let bounds = WorldRect::new(
                chunk.chunk_x as f32 * chunk_size,
                chunk.chunk_y as f32 * chunk_size,
                chunk_size,
                chunk_size,
            );
            canvas.set_draw_color(terrain_color(chunk.terrain));
            canvas.fill_rect(screen_rect(camera, bounds))?;
        }

        canvas.set_draw_color(Color::RGB(70, 70, 70));
        for obstacle in world.terrain.obstacles() {
            canvas.fill_rect(screen_rect(camera, obstacle.get_bounds()))?;
        }

        for item in &world.dropped_items {
            let bounds = WorldRect::from_center(item.position.x, item.position.y, 16.0, 16.0);
            canvas.set_draw_color(Color::RGB(230, 200, 60));
            canvas.fill_rect(screen_rect(camera, bounds))?;
        }

        canvas.set_draw_color(Color::RGB(60, 200, 200));
        canvas.fill_rect(screen_rect(camera, world.npc.body.bounds()))?;

        for enemy in &world.enemies {
            self.draw_enemy(canvas, camera, enemy)?;
        }

        let player = &world.player;
        let dst = screen_rect(camera, player.body.bounds());
        // Flicker while invulnerable
        if !player.body.is_invulnerable() || player.body.invulnerable_ticks() % 8 < 4 {
            draw_sprite(
                canvas,
                &mut self.textures,
                player.animation.current_set(),
                player.animation.frame_index(),
                dst,
            )?;
        }

        for particle in game.particles.particles() {
            let c = particle.color;
            canvas.set_draw_color(Color::RGBA(c.r, c.g, c.b, particle.alpha()));
            let bounds = WorldRect::from_center(
                particle.position.x,
                particle.position.y,
                particle.size,
                particle.size,
            );
            canvas.fill_rect(screen_rect(camera, bounds))?;
        }
        Ok(())
    }

    fn draw_enemy(&mut self, canvas: &mut Canvas<Window>, camera: &Camera, enemy: &Enemy) -> Result<(), String> {
        let dst = screen_rect(camera, enemy.body.bounds());
        draw_sprite(
            canvas,
            &mut self.textures,
            enemy.animation.current_set(),
            enemy.animation.frame_index(),
            dst,
        )?;
        draw_bar(
            canvas,
            Rect::new(dst.x(), dst.y() - 8, dst.width(), 4),
            enemy.body.health.percentage(),
            Color::RGB(150, 0, 150),
        )
    }

    fn draw_hud(&self, canvas: &mut Canvas<Window>, game: &Game) -> Result<(), String> {
        let hud = &game.hud;
        let health_color = if hud.health_fraction < 0.3 {
            Color::RGB(200, 0, 0)
        } else {
            Color::RGB(0, 200, 0)
        };
        draw_bar(canvas, Rect::new(10, 10, 200, 16), hud.health_fraction, health_color)?;

        let white = Color::RGB(255, 255, 255);
        draw_text(canvas, &format!("SCORE {}", hud.score), 10, 34, white, 2)?;
        draw_text(canvas, &format!("GOLD {}", hud.gold), 10, 54, white, 2)?;
        if let Some(weapon) = &hud.weapon_name {
            draw_text(canvas, weapon, 10, 74, white, 2)?;
        }
        if let Some(message) = hud.message() {
            let screen = &game.config().screen;
            draw_text_centered(
                canvas,
                message,
                screen.width as i32 / 2,
                screen.height as i32 - 40,
                Color::RGB(255, 255, 160),
                2,
            )?;
        }
        Ok(())
    }
}

fn draw_sprite(
    canvas: &mut Canvas<Window>,
    textures: &mut TextureCache,
    set: Option<&FrameSet>,
    frame_index: usize,
    dst: Rect,
) -> Result<(), String> {
    let Some(set) = set else {
        canvas.set_draw_color(Color::RGB(255, 255, 255));
        return canvas.fill_rect(dst);
    };
    let frame = set.frame(frame_index % set.len().max(1)).copied();

    match (set.source(), frame) {
        (SpriteSource::Sheet(path), Some(frame)) => {
            if let Some(texture) = textures.get(path) {
                let src = Rect::new(frame.x, frame.y, frame.width, frame.height);
                return canvas.copy(texture, src, dst);
            }
            canvas.set_draw_color(Color::RGB(255, 0, 255));
            canvas.fill_rect(dst)
        }
        (SpriteSource::Placeholder(color), _) => {
            canvas.set_draw_color(sdl_color(*color));
            canvas.fill_rect(dst)
        }
        (SpriteSource::Sheet(_), None) => Ok(()),
    }
}

fn draw_bar(canvas: &mut Canvas<Window>, area: Rect, fraction: f32, color: Color) -> Result<(), String> {
    canvas.set_draw_color(Color::RGB(60, 0, 0));
    canvas.fill_rect(area)?;
    let filled = (area.width() as f32 * fraction.clamp(0.0, 1.0)) as u32;
    if filled > 0 {
        canvas.set_draw_color(color);
        canvas.fill_rect(Rect::new(area.x(), area.y(), filled, area.height()))?;
    }
    Ok(())
}

fn draw_overlay(canvas: &mut Canvas<Window>, game: &Game) -> Result<(), String> {
    let screen = &game.config().screen;
    canvas.set_draw_color(Color::RGBA(0, 0, 0, 170));
    canvas.fill_rect(Rect::new(0, 0, screen.width, screen.height))
}

fn draw_banner(canvas: &mut Canvas<Window>, game: &Game, title: &str, hint: &str) -> Result<(), String> {
    draw_overlay(canvas, game)?;
    let screen = &game.config().screen;
    let center_x = screen.width as i32 / 2;
    let center_y = screen.height as i32 / 2;
    draw_text_centered(canvas, title, center_x, center_y - 40, Color::RGB(255, 255, 255), 5)?;
    draw_text_centered(canvas, hint, center_x, center_y + 20, Color::RGB(200, 200, 200), 2)
}

fn draw_menu(canvas: &mut Canvas<Window>, game: &Game) -> Result<(), String> {
    let screen = &game.config().screen;
    let center_x = screen.width as i32 / 2;
    draw_text_centered(canvas, "KNIGHTFALL", center_x, 120, Color::RGB(255, 220, 120), 6)?;

    for (i, option) in MenuOption::ALL.iter().enumerate() {
        let selected = i == game.menu.selected_index();
        let color = if selected {
            Color::RGB(255, 255, 0)
        } else {
            Color::RGB(180, 180, 180)
        };
        let label = if selected {
            format!("> {} <", option.label())
        } else {
            option.label().to_string()
        };
        draw_text_centered(canvas, &label, center_x, 260 + i as i32 * 40, color, 3)?;
    }
    Ok(())
}

fn draw_inventory(canvas: &mut Canvas<Window>, game: &Game) -> Result<(), String> {
    draw_overlay(canvas, game)?;
    let white = Color::RGB(255, 255, 255);
    draw_text(canvas, "INVENTORY", 60, 60, white, 3)?;

    let inventory = &game.world.player.inventory;
    for (slot, stack) in inventory.slots.iter().enumerate().take(9) {
        let line = match stack {
            Some(stack) => {
                let name = game
                    .registry()
                    .get(&stack.item_id)
                    .map_or(stack.item_id.as_str(), |def| def.name.as_str());
                format!("{}) {} x{}", slot + 1, name, stack.quantity)
            }
            None => format!("{}) -", slot + 1),
        };
        draw_text(canvas, &line, 60, 110 + slot as i32 * 24, white, 2)?;
    }

    let player = &game.world.player;
    for (i, weapon) in player.weapons().iter().enumerate() {
        let marker = if i == player.current_weapon_index() { ">" } else { " " };
        let line = format!("{}{} {:.0} DMG", marker, weapon.name, weapon.damage);
        draw_text(canvas, &line, 420, 110 + i as i32 * 24, white, 2)?;
    }
    Ok(())
}
