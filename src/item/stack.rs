use serde::{Deserialize, Serialize};

/// A quantity of one item type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    pub item_id: String,
    pub quantity: u32,
}

impl ItemStack {
    pub fn new(item_id: impl Into<String>, quantity: u32) -> Self {
        ItemStack {
            item_id: item_id.into(),
            quantity,
        }
    }

    /// Adds up to `max_stack_size`; returns the overflow.
    pub fn add(&mut self, amount: u32, max_stack_size: u32) -> u32 {
        let total = self.quantity.saturating_add(amount);
        if total <= max_stack_size {
            self.quantity = total;
            0
        } else {
            self.quantity = max_stack_size;
            total - max_stack_size
        }
    }

    /// Moves `amount` items into a new stack. `None` for zero or the whole stack.
    pub fn split(&mut self, amount: u32) -> Option<ItemStack> {
        if amount == 0 || amount >= self.quantity {
            return None;
        }
        self.quantity -= amount;
        Some(ItemStack::new(self.item_id.clone(), amount))
    }

    /// Takes up to `amount`; returns how many were taken.
    pub fn take(&mut self, amount: u32) -> u32 {
        let taken = amount.min(self.quantity);
        self.quantity -= taken;
        taken
    }

    pub fn is_empty(&self) -> bool {
        self.quantity == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_overflows_at_max() {
        let mut stack = ItemStack::new("weapon_part", 60);
        assert_eq!(stack.add(10, 64), 6);
        assert_eq!(stack.quantity, 64);
    }

    #[test]
    fn test_split_and_take() {
        let mut stack = ItemStack::new("weapon_part", 10);
        let half = stack.split(4).unwrap();
        assert_eq!((stack.quantity, half.quantity), (6, 4));
        assert!(stack.split(6).is_none());

        assert_eq!(stack.take(10), 6);
        assert!(stack.is_empty());
    }
}
