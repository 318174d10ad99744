use crate::collision::{Collidable, CollisionLayer, Rect};
use glam::Vec2;

/// Ticks before a fresh drop can be collected (half a second at 60 Hz)
pub const PICKUP_DELAY_TICKS: u32 = 30;
/// Ticks before an uncollected drop disappears (five minutes at 60 Hz)
pub const DESPAWN_TICKS: u32 = 60 * 300;

/// Loot lying on the ground
#[derive(Debug, Clone, PartialEq)]
pub struct DroppedItem {
    /// Center of the drop
    pub position: Vec2,
    pub item_id: String,
    pub quantity: u32,
    pub pickup_radius: f32,
    age_ticks: u32,
}

impl DroppedItem {
    pub fn new(position: Vec2, item_id: impl Into<String>, quantity: u32) -> Self {
        DroppedItem {
            position,
            item_id: item_id.into(),
            quantity,
            pickup_radius: 24.0,
            age_ticks: 0,
        }
    }

    /// Ages the drop by one tick. Returns true once it should despawn.
    pub fn update(&mut self) -> bool {
        self.age_ticks = self.age_ticks.saturating_add(1);
        self.age_ticks >= DESPAWN_TICKS
    }

    pub fn can_pickup(&self) -> bool {
        self.age_ticks >= PICKUP_DELAY_TICKS
    }

    pub fn ticks_until_despawn(&self) -> u32 {
        DESPAWN_TICKS.saturating_sub(self.age_ticks)
    }
}

impl Collidable for DroppedItem {
    fn get_bounds(&self) -> Rect {
        Rect::from_center(
            self.position.x,
            self.position.y,
            self.pickup_radius * 2.0,
            self.pickup_radius * 2.0,
        )
    }

    fn get_collision_layer(&self) -> CollisionLayer {
        CollisionLayer::Item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pickup_delay() {
        let mut drop = DroppedItem::new(Vec2::new(10.0, 10.0), "weapon_part", 1);
        assert!(!drop.can_pickup());
        for _ in 0..PICKUP_DELAY_TICKS {
            drop.update();
        }
        assert!(drop.can_pickup());
    }

    #[test]
    fn test_despawn_after_timeout() {
        let mut drop = DroppedItem::new(Vec2::ZERO, "weapon_part", 1);
        let mut expired = false;
        for _ in 0..DESPAWN_TICKS {
            expired = drop.update();
        }
        assert!(expired);
        assert_eq!(drop.ticks_until_despawn(), 0);
    }

    #[test]
    fn test_bounds_centered() {
        let drop = DroppedItem::new(Vec2::new(100.0, 100.0), "weapon_part", 1);
        assert_eq!(drop.get_bounds(), Rect::new(76.0, 76.0, 48.0, 48.0));
    }
}
