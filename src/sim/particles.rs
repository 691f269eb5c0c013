//! Transient visual particles
//!
//! Particles are purely cosmetic: nothing in the simulation reads them back.
//! Each one fades linearly from full opacity to zero over its lifespan and
//! is dropped the frame its age reaches the lifespan.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use std::f32::consts::TAU;

use super::state::Rgb;
use crate::consts::*;

/// A short-lived fading dot
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    /// Pixels per frame
    pub vel: Vec2,
    pub size: f32,
    pub color: Rgb,
    pub lifespan_ms: u64,
    pub created_at: u64,
}

impl Particle {
    pub fn age(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.created_at)
    }

    /// Linear fade from 255 to 0 over the lifespan; clamped at 0
    pub fn opacity(&self, now_ms: u64) -> f32 {
        let fade = 1.0 - self.age(now_ms) as f32 / self.lifespan_ms as f32;
        (255.0 * fade).max(0.0)
    }

    pub fn expired(&self, now_ms: u64) -> bool {
        self.age(now_ms) >= self.lifespan_ms
    }
}

/// Advance and cull all particles for one frame
pub fn update(particles: &mut Vec<Particle>, now_ms: u64) {
    for p in particles.iter_mut() {
        p.pos += p.vel;
    }
    particles.retain(|p| !p.expired(now_ms));
}

/// Radial explosion burst for a destroyed entity, in its color
pub fn spawn_explosion(particles: &mut Vec<Particle>, rng: &mut Pcg32, at: Vec2, color: Rgb, now_ms: u64) {
    for _ in 0..EXPLOSION_PARTICLES {
        let angle = rng.random::<f32>() * TAU;
        let speed = rng.random::<f32>() * 3.0 + 1.0;
        particles.push(Particle {
            pos: at,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            size: rng.random::<f32>() * 3.0 + 1.0,
            color,
            lifespan_ms: EXPLOSION_LIFESPAN_MS,
            created_at: now_ms,
        });
    }
}

/// Small scatter burst for a damage hit, in the damaged entity's color
pub fn spawn_burst(
    particles: &mut Vec<Particle>,
    rng: &mut Pcg32,
    at: Vec2,
    color: Rgb,
    count: usize,
    lifespan_ms: u64,
    now_ms: u64,
) {
    for _ in 0..count {
        particles.push(Particle {
            pos: at,
            vel: Vec2::new(
                rng.random::<f32>() * 2.0 - 1.0,
                rng.random::<f32>() * 2.0 - 1.0,
            ),
            size: rng.random::<f32>() * 2.0 + 1.0,
            color,
            lifespan_ms,
            created_at: now_ms,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_explosion_burst_size_and_ranges() {
        let mut particles = Vec::new();
        let mut rng = Pcg32::seed_from_u64(42);
        spawn_explosion(&mut particles, &mut rng, Vec2::new(50.0, 50.0), Rgb::GREEN, 100);
        assert_eq!(particles.len(), 30);
        for p in &particles {
            assert_eq!(p.pos, Vec2::new(50.0, 50.0));
            assert_eq!(p.lifespan_ms, 1000);
            assert!(p.size >= 1.0 && p.size < 4.0);
            let speed = p.vel.length();
            assert!(speed > 0.99 && speed < 4.01);
        }
    }

    #[test]
    fn test_damage_burst_velocity_range() {
        let mut particles = Vec::new();
        let mut rng = Pcg32::seed_from_u64(42);
        spawn_burst(&mut particles, &mut rng, Vec2::ZERO, Rgb::RED, 10, 500, 0);
        assert_eq!(particles.len(), 10);
        for p in &particles {
            assert!(p.vel.x >= -1.0 && p.vel.x < 1.0);
            assert!(p.vel.y >= -1.0 && p.vel.y < 1.0);
        }
    }

    #[test]
    fn test_opacity_fade() {
        let p = Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: 2.0,
            color: Rgb::RED,
            lifespan_ms: 1000,
            created_at: 0,
        };
        assert_eq!(p.opacity(0), 255.0);
        assert!((p.opacity(500) - 127.5).abs() < 0.001);
        assert_eq!(p.opacity(2000), 0.0);
    }

    #[test]
    fn test_lifespan_boundary() {
        let p = Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: 2.0,
            color: Rgb::RED,
            lifespan_ms: 1000,
            created_at: 100,
        };
        assert!(!p.expired(1099));
        assert!(p.expired(1101));
    }

    #[test]
    fn test_update_moves_and_culls() {
        let mut particles = vec![
            Particle {
                pos: Vec2::ZERO,
                vel: Vec2::new(1.0, -1.0),
                size: 2.0,
                color: Rgb::RED,
                lifespan_ms: 1000,
                created_at: 0,
            },
            Particle {
                pos: Vec2::ZERO,
                vel: Vec2::ZERO,
                size: 2.0,
                color: Rgb::RED,
                lifespan_ms: 300,
                created_at: 0,
            },
        ];
        update(&mut particles, 500);
        assert_eq!(particles.len(), 1);
        assert_eq!(particles[0].pos, Vec2::new(1.0, -1.0));
    }
}
