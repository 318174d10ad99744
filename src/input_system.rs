//! Input translation
//!
//! Front ends report raw key presses as [`Key`] values; [`InputSystem`] turns
//! them into [`GameAction`]s according to the current [`InputContext`]. Held
//! movement keys are sampled separately each frame into a [`MoveInput`].

use glam::Vec2;

/// Keys the game reacts to, independent of any windowing library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Left,
    Right,
    Space,
    Return,
    Escape,
    E,
    H,
    I,
    P,
    Q,
    Tab,
    F5,
    F9,
    /// Number row, 1 through 9
    Num(u8),
}

/// Actions the player can perform in the game
///
/// Decouples input handling from action execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    // === Combat ===
    Attack,
    NextWeapon,
    PreviousWeapon,

    // === World Interaction ===
    Interact,
    /// Buy the n-th item of the nearby merchant's stock
    BuyItem(usize),
    /// Use the first usable item in the inventory
    QuickUse,

    // === UI Navigation ===
    ToggleInventory,
    TogglePause,
    OpenMenu,
    MenuUp,
    MenuDown,
    MenuConfirm,

    // === Inventory Actions ===
    UseItem(usize),

    // === System ===
    QuickSave,
    QuickLoad,
    Restart,
    Quit,
}

/// Input context determines which actions are available
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    Menu,
    Playing,
    Paused,
    Inventory,
    /// Game over or victory screen
    Ended,
}

/// Held movement keys for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveInput {
    /// Builds movement from the set of currently held keys (WASD or arrows).
    pub fn from_held(held: &[Key]) -> Self {
        let pressed = |a: Key, b: Key| held.iter().any(|k| *k == a || *k == b);
        MoveInput {
            up: pressed(Key::W, Key::Up),
            down: pressed(Key::S, Key::Down),
            left: pressed(Key::A, Key::Left),
            right: pressed(Key::D, Key::Right),
        }
    }

    /// Unit-length direction (diagonals included), or zero.
    pub fn direction(&self) -> Vec2 {
        let x = (self.right as i32 - self.left as i32) as f32;
        let y = (self.down as i32 - self.up as i32) as f32;
        Vec2::new(x, y).normalize_or_zero()
    }

    pub fn is_idle(&self) -> bool {
        self.direction() == Vec2::ZERO
    }
}

/// Translates key presses into GameActions
pub struct InputSystem {
    pub context: InputContext,
}

impl InputSystem {
    pub fn new() -> Self {
        InputSystem {
            context: InputContext::Menu,
        }
    }

    pub fn set_context(&mut self, context: InputContext) {
        self.context = context;
    }

    /// Translates a batch of key presses, skipping unbound keys.
    pub fn translate(&self, keys: &[Key]) -> Vec<GameAction> {
        keys.iter().filter_map(|key| self.handle_keydown(*key)).collect()
    }

    pub fn handle_keydown(&self, key: Key) -> Option<GameAction> {
        match self.context {
            InputContext::Menu => Self::menu_key(key),
            InputContext::Playing => Self::playing_key(key),
            InputContext::Paused => Self::paused_key(key),
            InputContext::Inventory => Self::inventory_key(key),
            InputContext::Ended => Self::ended_key(key),
        }
    }

    fn playing_key(key: Key) -> Option<GameAction> {
        match key {
            Key::Space => Some(GameAction::Attack),
            Key::Tab => Some(GameAction::NextWeapon),
            Key::Q => Some(GameAction::PreviousWeapon),
            Key::E => Some(GameAction::Interact),
            Key::H => Some(GameAction::QuickUse),
            Key::Num(n @ 1..=9) => Some(GameAction::BuyItem(n as usize - 1)),
            Key::I => Some(GameAction::ToggleInventory),
            Key::P => Some(GameAction::TogglePause),
            Key::Escape => Some(GameAction::OpenMenu),
            Key::F5 => Some(GameAction::QuickSave),
            Key::F9 => Some(GameAction::QuickLoad),
            _ => None,
        }
    }

    fn inventory_key(key: Key) -> Option<GameAction> {
        match key {
            Key::I | Key::Escape => Some(GameAction::ToggleInventory),
            Key::Num(n @ 1..=9) => Some(GameAction::UseItem(n as usize - 1)),
            _ => None,
        }
    }

    fn paused_key(key: Key) -> Option<GameAction> {
        match key {
            Key::P | Key::Escape => Some(GameAction::TogglePause),
            Key::F5 => Some(GameAction::QuickSave),
            _ => None,
        }
    }

    fn menu_key(key: Key) -> Option<GameAction> {
        match key {
            Key::Up | Key::W => Some(GameAction::MenuUp),
            Key::Down | Key::S => Some(GameAction::MenuDown),
            Key::Return | Key::Space => Some(GameAction::MenuConfirm),
            Key::Escape => Some(GameAction::Quit),
            _ => None,
        }
    }

    fn ended_key(key: Key) -> Option<GameAction> {
        match key {
            Key::Return | Key::Space => Some(GameAction::Restart),
            Key::Escape => Some(GameAction::OpenMenu),
            _ => None,
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_system_starts_in_menu() {
        let input = InputSystem::new();
        assert_eq!(input.context, InputContext::Menu);
        assert_eq!(input.handle_keydown(Key::Down), Some(GameAction::MenuDown));
        assert_eq!(input.handle_keydown(Key::Space), Some(GameAction::MenuConfirm));
    }

    #[test]
    fn test_same_key_differs_by_context() {
        let mut input = InputSystem::new();
        input.set_context(InputContext::Playing);
        assert_eq!(input.handle_keydown(Key::Num(2)), Some(GameAction::BuyItem(1)));
        assert_eq!(input.handle_keydown(Key::Space), Some(GameAction::Attack));

        input.set_context(InputContext::Inventory);
        assert_eq!(input.handle_keydown(Key::Num(2)), Some(GameAction::UseItem(1)));
        assert_eq!(input.handle_keydown(Key::Space), None);
    }

    #[test]
    fn test_translate_drops_unbound() {
        let mut input = InputSystem::new();
        input.set_context(InputContext::Paused);
        let actions = input.translate(&[Key::W, Key::P, Key::Num(0)]);
        assert_eq!(actions, vec![GameAction::TogglePause]);
    }

    #[test]
    fn test_diagonal_movement_is_normalized() {
        let input = MoveInput::from_held(&[Key::W, Key::D]);
        let dir = input.direction();
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert!((dir.x - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
        assert!(dir.y < 0.0);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let input = MoveInput::from_held(&[Key::Left, Key::Right]);
        assert!(input.is_idle());
    }
}
