use crate::player::Player;

/// Values the front end draws over the world
#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    pub health_fraction: f32,
    pub score: u32,
    pub gold: u32,
    pub weapon_name: Option<String>,
    message: Option<String>,
    message_remaining_ms: f32,
    message_duration_ms: f32,
}

impl Hud {
    pub fn new(message_duration_ms: f32) -> Self {
        Hud {
            health_fraction: 1.0,
            score: 0,
            gold: 0,
            weapon_name: None,
            message: None,
            message_remaining_ms: 0.0,
            message_duration_ms,
        }
    }

    /// Replaces the current message and restarts its timer.
    pub fn show_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
        self.message_remaining_ms = self.message_duration_ms;
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn update(&mut self, dt_ms: f32, player: &Player, score: u32) {
        self.health_fraction = player.body.health.percentage();
        self.score = score;
        self.gold = player.gold;
        self.weapon_name = player.current_weapon().map(|w| w.name.clone());

        if self.message.is_some() {
            self.message_remaining_ms -= dt_ms;
            if self.message_remaining_ms <= 0.0 {
                self.message = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn test_message_expires() {
        let player = Player::new(0, &GameConfig::default());
        let mut hud = Hud::new(2000.0);
        hud.show_message("Hello");

        hud.update(1999.0, &player, 0);
        assert_eq!(hud.message(), Some("Hello"));
        hud.update(1.0, &player, 0);
        assert_eq!(hud.message(), None);
    }

    #[test]
    fn test_tracks_player() {
        let mut player = Player::new(0, &GameConfig::default());
        player.body.health.set_current(25.0);
        let mut hud = Hud::new(2000.0);

        hud.update(16.0, &player, 300);
        assert_eq!(hud.health_fraction, 0.25);
        assert_eq!(hud.score, 300);
        assert_eq!(hud.weapon_name.as_deref(), Some("Rusty Sword"));
    }
}
