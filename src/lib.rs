//! Star Barrage - simulation core for a top-down arcade space shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collisions, progression)
//!
//! Rendering, input devices, and menu screens are external collaborators:
//! they feed a [`sim::TickInput`] into [`sim::tick`] each frame and draw the
//! [`sim::FrameSnapshot`] the state exposes.

pub mod sim;

pub use sim::{FrameSnapshot, GamePhase, GameState, ShipClass, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Play area dimensions (pixels)
    pub const PLAY_WIDTH: f32 = 800.0;
    pub const PLAY_HEIGHT: f32 = 600.0;

    /// Target frame rate for callers pacing the loop
    pub const TARGET_FPS: u32 = 60;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 50.0;
    /// Gap between the player's lower edge and the bottom of the play area at spawn
    pub const PLAYER_BOTTOM_MARGIN: f32 = 30.0;
    /// Flat damage taken on contact with an enemy
    pub const CONTACT_DAMAGE: f32 = 20.0;
    /// Health regeneration cadence
    pub const REGEN_INTERVAL_MS: u64 = 1000;
    /// Post-hit invulnerability window
    pub const INVULN_DURATION_MS: u64 = 1000;
    /// Minimum interval between shots while fire is held
    pub const SHOOT_INTERVAL_MS: u64 = 150;

    /// Bullet defaults
    pub const BULLET_WIDTH: f32 = 4.0;
    pub const BULLET_HEIGHT: f32 = 15.0;
    /// Upward speed, pixels per frame
    pub const BULLET_SPEED: f32 = 10.0;

    /// Enemy defaults
    pub const ENEMY_SIZE: f32 = 40.0;
    /// Downward speed floor, pixels per frame; scaled up with level at spawn
    pub const ENEMY_BASE_SPEED: f32 = 2.0;
    pub const ENEMY_SPEED_PER_LEVEL: f32 = 0.5;
    pub const ENEMY_BASE_HEALTH: f32 = 10.0;
    pub const ENEMY_HEALTH_PER_LEVEL: f32 = 5.0;
    /// Probability a spawned enemy is the oscillating "advanced" kind
    pub const ADVANCED_CHANCE: f64 = 0.3;
    /// Phase increment per frame for advanced horizontal drift
    pub const DRIFT_PHASE_STEP: f32 = 0.1;
    /// Horizontal drift amplitude, pixels per frame
    pub const DRIFT_AMPLITUDE: f32 = 2.0;

    /// Spawn cadence: max(floor, base - level * step)
    pub const SPAWN_INTERVAL_BASE_MS: u64 = 1500;
    pub const SPAWN_INTERVAL_STEP_MS: u64 = 100;
    pub const SPAWN_INTERVAL_FLOOR_MS: u64 = 300;

    /// Scoring
    pub const ENEMY_POINTS: u64 = 100;
    pub const LEVEL_UP_SCORE: u64 = 1000;
    /// Level at which the player's shots become double bullets
    pub const DOUBLE_BULLETS_LEVEL: u32 = 3;
    /// Per-level stat gains
    pub const LEVEL_UP_DAMAGE: f32 = 5.0;
    pub const LEVEL_UP_REGEN: f32 = 0.5;

    /// Particle bursts
    pub const EXPLOSION_PARTICLES: usize = 30;
    pub const EXPLOSION_LIFESPAN_MS: u64 = 1000;
    pub const ENEMY_HIT_PARTICLES: usize = 5;
    pub const ENEMY_HIT_LIFESPAN_MS: u64 = 300;
    pub const PLAYER_HIT_PARTICLES: usize = 10;
    pub const PLAYER_HIT_LIFESPAN_MS: u64 = 500;
}
