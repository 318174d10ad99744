//! SDL2 window, input and drawing
//!
//! The front end owns nothing but presentation: it turns SDL events into
//! game actions, runs [`Game::tick`] once per frame and draws the result.

pub mod draw;
pub mod keymap;
pub mod text;

use crate::game::{FrameClock, Game};
use crate::input_system::{InputSystem, Key, MoveInput};
use crate::sprite::{ManifestLoader, SpriteBank};
use draw::{Renderer, TextureCache};
use keymap::map_keycode;
use log::{debug, info};
use sdl2::event::Event;
use sdl2::image::InitFlag;
use sdl2::keyboard::Keycode;
use std::path::Path;

const SPRITE_DIR: &str = "assets/sprites";

/// Opens the window and runs the game until it asks to quit or the window
/// is closed.
pub fn run(game: &mut Game) -> Result<(), String> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(InitFlag::PNG)?;

    let screen = game.config().screen.clone();
    let window = video_subsystem
        .window("Knightfall", screen.width, screen.height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;
    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();

    let (frame_width, frame_height) = {
        let animation = &game.config().animation;
        (animation.frame_width, animation.frame_height)
    };
    game.set_sprites(SpriteBank::load(
        &mut ManifestLoader,
        Path::new(SPRITE_DIR),
        frame_width,
        frame_height,
    ));
    let mut renderer = Renderer::new(TextureCache::new(&texture_creator));

    let mut event_pump = sdl_context.event_pump()?;
    let mut input = InputSystem::new();
    let mut clock = FrameClock::new(screen.target_fps);
    let mut dt_ms = clock.frame_ms();
    info!("Window open at {}x{}", screen.width, screen.height);

    'running: loop {
        let mut pressed: Vec<Key> = Vec::new();
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => break 'running,
                Event::KeyDown {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => pressed.extend(map_keycode(keycode)),
                _ => {}
            }
        }

        let held: Vec<Key> = event_pump
            .keyboard_state()
            .pressed_scancodes()
            .filter_map(Keycode::from_scancode)
            .filter_map(map_keycode)
            .collect();

        input.set_context(game.input_context());
        let actions = input.translate(&pressed);
        game.tick(&actions, MoveInput::from_held(&held), dt_ms);

        for cue in game.drain_sounds() {
            debug!("sound: {:?} ({})", cue, cue.file_name());
        }
        if game.quit_requested() {
            break 'running;
        }

        renderer.render(&mut canvas, game)?;
        dt_ms = clock.tick();
    }

    info!("Window closed");
    Ok(())
}
