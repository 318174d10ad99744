//! Health tracking shared by every living entity
//!
//! Health values are `f32` so fractional damage and healing work without
//! conversions. Current health is always clamped into `0.0..=max`.

use serde::{Deserialize, Serialize};

/// Represents an entity's health points
///
/// # Example
///
/// ```rust
/// use knightfall::stats::Health;
///
/// let mut health = Health::new(100.0);
/// health.take_damage(30.0);
/// assert_eq!(health.current(), 70.0);
/// assert_eq!(health.percentage(), 0.7);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Health {
    current: f32,
    max: f32,
}

impl Health {
    /// Creates a new Health instance with full health
    pub fn new(max: f32) -> Self {
        Health { current: max, max }
    }

    /// Creates a Health with an explicit current value, clamped into range.
    pub fn with_current(current: f32, max: f32) -> Self {
        Health {
            current: current.clamp(0.0, max),
            max,
        }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Returns health as a fraction (0.0 to 1.0)
    pub fn percentage(&self) -> f32 {
        if self.max <= 0.0 {
            0.0
        } else {
            self.current / self.max
        }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0.0
    }

    /// Applies damage, clamping at zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use knightfall::stats::Health;
    ///
    /// let mut health = Health::new(100.0);
    /// let result = health.take_damage(150.0);
    /// assert_eq!(result.damage_dealt, 100.0);
    /// assert!(result.is_fatal);
    /// assert_eq!(result.overkill, 50.0);
    /// ```
    pub fn take_damage(&mut self, amount: f32) -> DamageResult {
        if amount <= 0.0 {
            return DamageResult::no_damage();
        }

        let old_health = self.current;
        self.current = (self.current - amount).max(0.0);

        DamageResult {
            damage_dealt: old_health - self.current,
            is_fatal: self.current <= 0.0,
            overkill: if self.current <= 0.0 {
                amount - old_health
            } else {
                0.0
            },
        }
    }

    /// Heals health, capped at max health.
    ///
    /// Returns the amount actually restored.
    pub fn heal(&mut self, amount: f32) -> f32 {
        let old_health = self.current;
        self.current = (self.current + amount.max(0.0)).min(self.max);
        self.current - old_health
    }

    /// Overwrites the current value (used when restoring a save), clamped into range.
    pub fn set_current(&mut self, value: f32) {
        self.current = value.clamp(0.0, self.max);
    }

    /// Sets the maximum health and caps current health if needed
    pub fn set_max(&mut self, new_max: f32) {
        self.max = new_max;
        if self.current > self.max {
            self.current = self.max;
        }
    }
}

/// Result of a damage operation
#[derive(Debug, Clone, PartialEq)]
pub struct DamageResult {
    /// Actual damage dealt (may be less than requested if target had less health)
    pub damage_dealt: f32,
    /// Whether this damage killed the target
    pub is_fatal: bool,
    /// Excess damage beyond what was needed to kill (0.0 if not fatal)
    pub overkill: f32,
}

impl DamageResult {
    /// A result representing no damage dealt
    pub fn no_damage() -> Self {
        DamageResult {
            damage_dealt: 0.0,
            is_fatal: false,
            overkill: 0.0,
        }
    }
}
