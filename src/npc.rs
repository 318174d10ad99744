use crate::config::GameConfig;
use crate::entity::{Body, EntityId, EntityKind};
use crate::save::{SaveError, Saveable};
use crate::weapon::Weapon;
use glam::Vec2;
use log::debug;
use rand::Rng;
use thiserror::Error;

pub const OUT_OF_STOCK_MESSAGE: &str =
    "I will go out and look for weapons parts. Please come back later.";

#[derive(Debug, Error, PartialEq)]
pub enum ShopError {
    #[error("nothing for sale in slot {0}")]
    NoSuchItem(usize),
    #[error("{name} costs {price} gold, you have {gold}")]
    NotEnoughGold { name: String, price: u32, gold: u32 },
}

/// Result of talking to a merchant
#[derive(Debug, Clone, PartialEq)]
pub enum NpcInteraction {
    Shop(Vec<Weapon>),
    OutOfStock(&'static str),
}

/// A stationary weapon merchant
pub struct Npc {
    pub body: Body,
    pub name: String,
    stock: Vec<Weapon>,
    restock_timer: u32,
    restock_delay: u32,
    restock_chance: f64,
    weapon_cooldown: u32,
}

impl Npc {
    /// Creates the merchant and rolls its opening stock.
    pub fn new(id: EntityId, config: &GameConfig, rng: &mut impl Rng) -> Self {
        let mut npc = Npc::unstocked(id, config);
        npc.restock(rng);
        npc
    }

    /// Creates the merchant with nothing for sale.
    pub fn unstocked(id: EntityId, config: &GameConfig) -> Self {
        let (x, y) = config.npc.spawn;
        Npc {
            body: Body::new(id, EntityKind::Npc, Vec2::new(x, y), config.enemy.size, 1.0),
            name: "Merchant".to_string(),
            stock: Vec::new(),
            restock_timer: 0,
            restock_delay: config.npc.restock_delay_ticks.max(1),
            restock_chance: config.npc.restock_chance.clamp(0.0, 1.0),
            weapon_cooldown: config.weapon.cooldown_ticks,
        }
    }

    fn full_stock(&self) -> Vec<Weapon> {
        vec![
            Weapon::new("Iron Sword", 20.0, 150, 50.0, self.weapon_cooldown),
            Weapon::new("Steel Axe", 25.0, 200, 50.0, self.weapon_cooldown),
        ]
    }

    /// Either refills the full stock or leaves the merchant empty-handed.
    pub fn restock(&mut self, rng: &mut impl Rng) {
        if rng.gen_bool(self.restock_chance) {
            self.stock = self.full_stock();
        } else {
            self.stock.clear();
        }
        debug!("{} restocked: {} items", self.name, self.stock.len());
    }

    pub fn update(&mut self, rng: &mut impl Rng) {
        self.restock_timer += 1;
        if self.restock_timer >= self.restock_delay {
            self.restock_timer = 0;
            self.restock(rng);
        }
    }

    pub fn in_reach(&self, player_center: Vec2, radius: f32) -> bool {
        self.body.center().distance(player_center) <= radius
    }

    pub fn interact(&self) -> NpcInteraction {
        if self.stock.is_empty() {
            NpcInteraction::OutOfStock(OUT_OF_STOCK_MESSAGE)
        } else {
            NpcInteraction::Shop(self.stock.clone())
        }
    }

    /// Sells stock item `index` if the buyer has enough gold.
    pub fn buy(&mut self, index: usize, gold: &mut u32) -> Result<Weapon, ShopError> {
        let item = self.stock.get(index).ok_or(ShopError::NoSuchItem(index))?;
        if *gold < item.price {
            return Err(ShopError::NotEnoughGold {
                name: item.name.clone(),
                price: item.price,
                gold: *gold,
            });
        }
        *gold -= item.price;
        Ok(self.stock.remove(index))
    }

    pub fn stock(&self) -> &[Weapon] {
        &self.stock
    }

    pub fn set_stock(&mut self, stock: Vec<Weapon>) {
        self.stock = stock;
    }
}

/// Only the shop inventory is persisted; the restock timer starts over.
impl Saveable for Npc {
    type Data = Vec<Weapon>;

    fn to_save_data(&self) -> Vec<Weapon> {
        self.stock.clone()
    }

    fn apply_save_data(&mut self, data: &Vec<Weapon>) -> Result<(), SaveError> {
        if let Some(bad) = data
            .iter()
            .find(|w| !(w.damage.is_finite() && w.damage >= 0.0 && w.range.is_finite()))
        {
            return Err(SaveError::CorruptedData(format!("shop weapon {}", bad.name)));
        }
        self.set_stock(data.clone());
        self.restock_timer = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn merchant(chance: f64) -> Npc {
        let mut config = GameConfig::default();
        config.npc.restock_chance = chance;
        Npc::new(9, &config, &mut StdRng::seed_from_u64(0))
    }

    #[test]
    fn test_out_of_stock_message() {
        let npc = merchant(0.0);
        assert_eq!(npc.interact(), NpcInteraction::OutOfStock(OUT_OF_STOCK_MESSAGE));
    }

    #[test]
    fn test_restock_on_timer() {
        let mut npc = merchant(0.0);
        npc.restock_chance = 1.0;
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..299 {
            npc.update(&mut rng);
        }
        assert!(npc.stock().is_empty());
        npc.update(&mut rng);
        assert_eq!(npc.stock().len(), 2);
    }

    #[test]
    fn test_buy_spends_gold() {
        let mut npc = merchant(1.0);
        let mut gold = 160;

        let sword = npc.buy(0, &mut gold).unwrap();
        assert_eq!(sword.name, "Iron Sword");
        assert_eq!(gold, 10);
        assert_eq!(npc.stock().len(), 1);

        assert!(matches!(npc.buy(0, &mut gold), Err(ShopError::NotEnoughGold { price: 200, .. })));
        assert_eq!(npc.buy(5, &mut gold), Err(ShopError::NoSuchItem(5)));
    }

    #[test]
    fn test_reach_uses_centers() {
        let npc = merchant(1.0);
        let center = npc.body.center();
        assert!(npc.in_reach(center + Vec2::new(50.0, 0.0), 50.0));
        assert!(!npc.in_reach(center + Vec2::new(50.0, 1.0), 50.0));
    }

    #[test]
    fn test_save_data_restores_stock() {
        let full = merchant(1.0);
        let mut empty = merchant(0.0);

        empty.apply_save_data(&full.to_save_data()).unwrap();
        assert_eq!(empty.stock(), full.stock());

        let mut broken = full.to_save_data();
        broken[0].damage = f32::NAN;
        assert!(empty.apply_save_data(&broken).is_err());
    }
}
