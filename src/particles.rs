//! Short-lived visual particles for hits, deaths and weapon swings
//!
//! Particles are pure simulation state. Each tick they move, fall under a
//! small gravity, slow down through drag and fade out; the front end draws
//! whatever [`ParticleSystem::particles`] holds.

use crate::sprite::Color;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::{FRAC_PI_4, TAU};

const GRAVITY: f32 = 0.1;
const DRAG: f32 = 0.98;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub color: Color,
    pub size: f32,
    lifetime: u32,
    max_lifetime: u32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, color: Color, lifetime: u32, size: f32) -> Self {
        Particle {
            position,
            velocity,
            color,
            size,
            lifetime,
            max_lifetime: lifetime.max(1),
        }
    }

    pub fn update(&mut self) {
        self.position += self.velocity;
        self.velocity.y += GRAVITY;
        self.velocity *= DRAG;
        self.lifetime = self.lifetime.saturating_sub(1);
    }

    pub fn is_alive(&self) -> bool {
        self.lifetime > 0
    }

    /// Opacity from 255 (fresh) down to 0 (expired)
    pub fn alpha(&self) -> u8 {
        ((self.lifetime as f32 / self.max_lifetime as f32) * 255.0) as u8
    }
}

/// Parameters for one burst of particles
struct Burst {
    count: (u32, u32),
    speed: (f32, f32),
    lifetime: (u32, u32),
    size: (f32, f32),
}

#[derive(Debug, Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        ParticleSystem {
            particles: Vec::new(),
        }
    }

    pub fn update(&mut self) {
        self.particles.retain(Particle::is_alive);
        for particle in &mut self.particles {
            particle.update();
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Small white spray where a blow landed
    pub fn create_hit_effect(&mut self, position: Vec2, rng: &mut impl Rng) {
        let burst = Burst {
            count: (5, 8),
            speed: (2.0, 5.0),
            lifetime: (20, 30),
            size: (2.0, 4.0),
        };
        self.emit(position, Color::WHITE, &burst, 0.0, TAU, rng);
    }

    /// Large red burst where an enemy died
    pub fn create_death_effect(&mut self, position: Vec2, rng: &mut impl Rng) {
        let burst = Burst {
            count: (15, 20),
            speed: (3.0, 7.0),
            lifetime: (30, 45),
            size: (3.0, 6.0),
        };
        self.emit(position, Color::RED, &burst, 0.0, TAU, rng);
    }

    /// Yellow fan within 45 degrees of `direction`
    pub fn create_attack_effect(&mut self, position: Vec2, direction: Vec2, rng: &mut impl Rng) {
        let burst = Burst {
            count: (8, 12),
            speed: (4.0, 8.0),
            lifetime: (15, 25),
            size: (2.0, 4.0),
        };
        let heading = direction.y.atan2(direction.x);
        self.emit(
            position,
            Color::YELLOW,
            &burst,
            heading - FRAC_PI_4,
            FRAC_PI_4 * 2.0,
            rng,
        );
    }

    fn emit(
        &mut self,
        position: Vec2,
        color: Color,
        burst: &Burst,
        angle_start: f32,
        angle_span: f32,
        rng: &mut impl Rng,
    ) {
        let count = rng.gen_range(burst.count.0..=burst.count.1);
        for _ in 0..count {
            let angle = angle_start + rng.gen_range(0.0..=angle_span);
            let speed = rng.gen_range(burst.speed.0..=burst.speed.1);
            let velocity = Vec2::from_angle(angle) * speed;
            let lifetime = rng.gen_range(burst.lifetime.0..=burst.lifetime.1);
            let size = rng.gen_range(burst.size.0..=burst.size.1);
            self.particles
                .push(Particle::new(position, velocity, color, lifetime, size));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_burst_sizes() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut system = ParticleSystem::new();

        system.create_hit_effect(Vec2::ZERO, &mut rng);
        let hits = system.particles().len();
        assert!((5..=8).contains(&hits));

        system.clear();
        system.create_death_effect(Vec2::ZERO, &mut rng);
        assert!((15..=20).contains(&system.particles().len()));

        system.clear();
        system.create_attack_effect(Vec2::ZERO, Vec2::X, &mut rng);
        assert!((8..=12).contains(&system.particles().len()));
        for p in system.particles() {
            // Fan faces right
            assert!(p.velocity.x > 0.0);
        }
    }

    #[test]
    fn test_gravity_and_drag() {
        let mut p = Particle::new(Vec2::ZERO, Vec2::new(1.0, 0.0), Color::WHITE, 10, 2.0);
        p.update();

        assert_eq!(p.position, Vec2::new(1.0, 0.0));
        assert!((p.velocity.x - 0.98).abs() < 1e-6);
        assert!((p.velocity.y - 0.098).abs() < 1e-6);
        assert_eq!(p.alpha(), 229);
    }

    #[test]
    fn test_expired_particles_removed() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut system = ParticleSystem::new();
        system.create_hit_effect(Vec2::ZERO, &mut rng);

        for _ in 0..32 {
            system.update();
        }
        assert!(system.particles().is_empty());
    }
}
