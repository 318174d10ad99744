use crate::combat::CombatEvent;

/// Fire-and-forget audio cue for the front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    SwordSwing,
    Hit,
    PlayerHurt,
    ItemPickup,
    EnemyDeath,
}

impl SoundCue {
    pub fn for_combat(event: &CombatEvent) -> SoundCue {
        match event {
            CombatEvent::Swing { .. } => SoundCue::SwordSwing,
            CombatEvent::Hit { .. } => SoundCue::Hit,
            CombatEvent::Kill { .. } => SoundCue::EnemyDeath,
            CombatEvent::PlayerHurt { .. } => SoundCue::PlayerHurt,
        }
    }

    /// Asset path the front end plays for this cue
    pub fn file_name(self) -> &'static str {
        match self {
            SoundCue::SwordSwing => "assets/sounds/sword_swing.wav",
            SoundCue::Hit => "assets/sounds/hit.wav",
            SoundCue::PlayerHurt => "assets/sounds/player_hurt.wav",
            SoundCue::ItemPickup => "assets/sounds/item_pickup.wav",
            SoundCue::EnemyDeath => "assets/sounds/enemy_death.wav",
        }
    }
}
