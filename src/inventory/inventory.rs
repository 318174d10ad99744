use super::error::InventoryError;
use crate::item::{ConsumableEffect, ItemProperties, ItemRegistry, ItemStack};
use serde::{Deserialize, Serialize};

/// Bounded, ordered slots of item stacks
///
/// Adding an item first tops up existing stacks of the same id, then opens
/// new stacks in empty slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    /// `None` marks an empty slot
    pub slots: Vec<Option<ItemStack>>,
    pub capacity: usize,
}

impl Inventory {
    pub fn new(capacity: usize) -> Self {
        Inventory {
            slots: vec![None; capacity],
            capacity,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn count_item(&self, item_id: &str) -> u32 {
        self.iter_items()
            .filter(|stack| stack.item_id == item_id)
            .map(|stack| stack.quantity)
            .sum()
    }

    pub fn find_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    pub fn get(&self, slot_index: usize) -> Option<&ItemStack> {
        self.slots.get(slot_index).and_then(Option::as_ref)
    }

    /// Adds items, returning how many did not fit.
    pub fn add_item(
        &mut self,
        item_id: &str,
        quantity: u32,
        item_registry: &ItemRegistry,
    ) -> Result<u32, InventoryError> {
        if quantity == 0 {
            return Ok(0);
        }

        let max_stack_size = item_registry
            .get(item_id)
            .ok_or_else(|| InventoryError::InvalidItem(item_id.to_string()))?
            .max_stack_size;
        let mut remaining = quantity;

        for stack in self.slots.iter_mut().flatten() {
            if remaining == 0 {
                break;
            }
            if stack.item_id == item_id && stack.quantity < max_stack_size {
                remaining = stack.add(remaining, max_stack_size);
            }
        }

        while remaining > 0 {
            let Some(empty_index) = self.find_empty_slot() else {
                break;
            };
            let stack_size = remaining.min(max_stack_size);
            self.slots[empty_index] = Some(ItemStack::new(item_id, stack_size));
            remaining -= stack_size;
        }

        Ok(remaining)
    }

    /// Like `add_item`, but fails without changes unless everything fits.
    pub fn try_add_all(
        &mut self,
        item_id: &str,
        quantity: u32,
        item_registry: &ItemRegistry,
    ) -> Result<(), InventoryError> {
        let mut probe = self.clone();
        if probe.add_item(item_id, quantity, item_registry)? > 0 {
            return Err(InventoryError::InventoryFull);
        }
        *self = probe;
        Ok(())
    }

    /// Removes up to `quantity`, returning how many were removed.
    pub fn remove_item(&mut self, item_id: &str, quantity: u32) -> u32 {
        let mut remaining = quantity;
        let mut removed_total = 0;

        for slot in self.slots.iter_mut() {
            if remaining == 0 {
                break;
            }
            if let Some(stack) = slot {
                if stack.item_id == item_id {
                    let taken = stack.take(remaining);
                    remaining -= taken;
                    removed_total += taken;
                    if stack.is_empty() {
                        *slot = None;
                    }
                }
            }
        }

        removed_total
    }

    /// Takes `quantity` from one slot; the whole stack when it holds no more than that.
    pub fn take_from_slot(&mut self, slot_index: usize, quantity: u32) -> Option<ItemStack> {
        let slot = self.slots.get_mut(slot_index)?;
        let stack = slot.as_mut()?;
        if quantity >= stack.quantity {
            slot.take()
        } else {
            stack.split(quantity)
        }
    }

    pub fn swap_slots(&mut self, slot_a: usize, slot_b: usize) -> Result<(), InventoryError> {
        for index in [slot_a, slot_b] {
            if index >= self.capacity {
                return Err(InventoryError::InvalidSlot(index));
            }
        }
        self.slots.swap(slot_a, slot_b);
        Ok(())
    }

    /// Consumes one item from `slot_index` and returns its effect.
    ///
    /// Non-consumables stay in place and produce `NotUsable`.
    pub fn use_item(
        &mut self,
        slot_index: usize,
        item_registry: &ItemRegistry,
    ) -> Result<ConsumableEffect, InventoryError> {
        if slot_index >= self.capacity {
            return Err(InventoryError::InvalidSlot(slot_index));
        }
        let stack = self.slots[slot_index]
            .as_ref()
            .ok_or(InventoryError::EmptySlot(slot_index))?;
        let definition = item_registry
            .get(&stack.item_id)
            .ok_or_else(|| InventoryError::InvalidItem(stack.item_id.clone()))?;

        let ItemProperties::Consumable(effect) = definition.properties else {
            return Err(InventoryError::NotUsable(stack.item_id.clone()));
        };

        self.take_from_slot(slot_index, 1);
        Ok(effect)
    }

    /// First slot holding a usable item
    pub fn first_usable_slot(&self, item_registry: &ItemRegistry) -> Option<usize> {
        self.slots.iter().position(|slot| {
            slot.as_ref()
                .and_then(|stack| item_registry.get(&stack.item_id))
                .is_some_and(|def| def.is_usable())
        })
    }

    pub fn clear(&mut self) {
        self.slots.fill(None);
    }

    pub fn iter_items(&self) -> impl Iterator<Item = &ItemStack> {
        self.slots.iter().filter_map(Option::as_ref)
    }
}
