use super::definition::ItemDefinition;
use super::properties::{ConsumableEffect, ItemProperties};
use log::warn;
use std::collections::HashMap;
use thiserror::Error;

pub const WEAPON_PART: &str = "weapon_part";
pub const HEALTH_POTION: &str = "health_potion";

#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    #[error("item '{0}' already registered")]
    AlreadyRegistered(String),
}

/// Central registry of all item definitions
///
/// All item references (inventories, pickups, saves) are ids resolved here.
#[derive(Debug)]
pub struct ItemRegistry {
    items: HashMap<String, ItemDefinition>,
}

impl ItemRegistry {
    pub fn new() -> Self {
        ItemRegistry {
            items: HashMap::new(),
        }
    }

    /// A registry with every built-in item
    pub fn create_default() -> Self {
        let mut registry = Self::new();
        for item in base_items() {
            if let Err(e) = registry.register(item) {
                warn!("{}", e);
            }
        }
        registry
    }

    pub fn register(&mut self, item: ItemDefinition) -> Result<(), RegistryError> {
        if self.items.contains_key(&item.id) {
            return Err(RegistryError::AlreadyRegistered(item.id));
        }
        self.items.insert(item.id.clone(), item);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&ItemDefinition> {
        self.items.get(id)
    }

    pub fn exists(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }
}

impl Default for ItemRegistry {
    fn default() -> Self {
        Self::create_default()
    }
}

fn base_items() -> Vec<ItemDefinition> {
    vec![
        ItemDefinition::new(
            WEAPON_PART,
            "Weapon Part",
            "Salvaged metal. Merchants and quest givers want these.",
            64,
            ItemProperties::Material,
        ),
        ItemDefinition::new(
            HEALTH_POTION,
            "Health Potion",
            "Restores 25 health.",
            16,
            ItemProperties::Consumable(ConsumableEffect::Heal(25.0)),
        ),
    ]
}
