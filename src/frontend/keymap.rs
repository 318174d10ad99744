use crate::input_system::Key;
use sdl2::keyboard::Keycode;

/// Maps an SDL keycode onto the game's key set. Unbound keys give `None`.
pub fn map_keycode(keycode: Keycode) -> Option<Key> {
    let key = match keycode {
        Keycode::W => Key::W,
        Keycode::A => Key::A,
        Keycode::S => Key::S,
        Keycode::D => Key::D,
        Keycode::Up => Key::Up,
        Keycode::Down => Key::Down,
        Keycode::Left => Key::Left,
        Keycode::Right => Key::Right,
        Keycode::Space => Key::Space,
        Keycode::Return => Key::Return,
        Keycode::Escape => Key::Escape,
        Keycode::E => Key::E,
        Keycode::H => Key::H,
        Keycode::I => Key::I,
        Keycode::P => Key::P,
        Keycode::Q => Key::Q,
        Keycode::Tab => Key::Tab,
        Keycode::F5 => Key::F5,
        Keycode::F9 => Key::F9,
        Keycode::Num1 => Key::Num(1),
        Keycode::Num2 => Key::Num(2),
        Keycode::Num3 => Key::Num(3),
        Keycode::Num4 => Key::Num(4),
        Keycode::Num5 => Key::Num(5),
        Keycode::Num6 => Key::Num(6),
        Keycode::Num7 => Key::Num(7),
        Keycode::Num8 => Key::Num(8),
        Keycode::Num9 => Key::Num(9),
        _ => return None,
    };
    Some(key)
}
