// Item definitions, the registry that owns them, and stacks of items
// carried in inventories or lying on the ground.

pub mod definition;
pub mod properties;
pub mod registry;
pub mod stack;

pub use definition::ItemDefinition;
pub use properties::{ConsumableEffect, ItemProperties};
pub use registry::{ItemRegistry, RegistryError, HEALTH_POTION, WEAPON_PART};
pub use stack::ItemStack;
