use super::properties::ItemProperties;
use serde::{Deserialize, Serialize};

/// The blueprint for an item type
///
/// Shared by every stack of that item; stacks only carry the id and a count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDefinition {
    /// Unique identifier used by inventories, pickups and saves
    pub id: String,
    pub name: String,
    pub description: String,
    /// Maximum stack size (1 = non-stackable)
    pub max_stack_size: u32,
    pub properties: ItemProperties,
}

impl ItemDefinition {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        max_stack_size: u32,
        properties: ItemProperties,
    ) -> Self {
        ItemDefinition {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            max_stack_size: max_stack_size.max(1),
            properties,
        }
    }

    pub fn is_usable(&self) -> bool {
        matches!(self.properties, ItemProperties::Consumable(_))
    }
}
