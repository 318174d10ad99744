use crate::input_system::InputContext;

/// Top-level game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Menu,
    Playing,
    Paused,
    Inventory,
    GameOver,
    Victory,
}

impl GameState {
    /// Key binding set that applies in this state
    pub fn input_context(self) -> InputContext {
        match self {
            GameState::Menu => InputContext::Menu,
            GameState::Playing => InputContext::Playing,
            GameState::Paused => InputContext::Paused,
            GameState::Inventory => InputContext::Inventory,
            GameState::GameOver | GameState::Victory => InputContext::Ended,
        }
    }

    /// Whether the world simulation advances
    pub fn is_simulating(self) -> bool {
        self == GameState::Playing
    }
}
