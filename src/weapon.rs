use crate::config::WeaponConfig;
use serde::{Deserialize, Serialize};

/// A melee or ranged weapon the player can wield.
///
/// Attacks are gated by a per-weapon cooldown counted in ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub damage: f32,
    pub price: u32,
    pub range: f32,
    pub cooldown_ticks: u32,
    #[serde(default)]
    current_cooldown: u32,
}

impl Weapon {
    pub fn new(name: impl Into<String>, damage: f32, price: u32, range: f32, cooldown_ticks: u32) -> Self {
        Weapon {
            name: name.into(),
            damage,
            price,
            range,
            cooldown_ticks,
            current_cooldown: 0,
        }
    }

    /// The weapon every new character starts with
    pub fn starter(config: &WeaponConfig) -> Self {
        Weapon::new("Rusty Sword", 10.0, 0, 40.0, config.cooldown_ticks)
    }

    pub fn can_attack(&self) -> bool {
        self.current_cooldown == 0
    }

    pub fn current_cooldown(&self) -> u32 {
        self.current_cooldown
    }

    /// Starts the cooldown after an attack was issued.
    pub fn trigger(&mut self) {
        self.current_cooldown = self.cooldown_ticks;
    }

    /// Advances the cooldown by one tick.
    pub fn update(&mut self) {
        self.current_cooldown = self.current_cooldown.saturating_sub(1);
    }

    pub fn set_cooldown(&mut self, ticks: u32) {
        self.current_cooldown = ticks;
    }
}

/// Weapons found in the world and sold by merchants
pub fn catalog(config: &WeaponConfig) -> Vec<Weapon> {
    vec![
        Weapon::new("Short Sword", 15.0, 100, 50.0, config.cooldown_ticks),
        Weapon::new("Battle Axe", 25.0, 200, 45.0, config.cooldown_ticks),
        Weapon::new("Magic Staff", 20.0, 150, 100.0, config.cooldown_ticks),
    ]
}

pub fn find_in_catalog(config: &WeaponConfig, name: &str) -> Option<Weapon> {
    catalog(config).into_iter().find(|w| w.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cooldown_gates_attack() {
        let mut weapon = Weapon::starter(&WeaponConfig::default());
        assert!(weapon.can_attack());

        weapon.trigger();
        assert!(!weapon.can_attack());
        assert_eq!(weapon.current_cooldown(), 30);

        for _ in 0..30 {
            weapon.update();
        }
        assert!(weapon.can_attack());
        weapon.update();
        assert_eq!(weapon.current_cooldown(), 0);
    }

    #[test]
    fn test_catalog_lookup() {
        let config = WeaponConfig::default();
        let axe = find_in_catalog(&config, "Battle Axe").unwrap();
        assert_eq!(axe.damage, 25.0);
        assert_eq!(axe.price, 200);
        assert!(find_in_catalog(&config, "Laser").is_none());
    }
}
