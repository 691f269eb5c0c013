//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Driven entirely by the caller-supplied clock (milliseconds)
//! - Seeded RNG only
//! - Stable iteration order (registration order)
//! - No rendering or platform dependencies

pub mod bounds;
pub mod collision;
pub mod particles;
pub mod progression;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use bounds::Aabb;
pub use particles::Particle;
pub use snapshot::{
    BulletView, EnemyView, FrameSnapshot, Hud, ParticleView, PlayerView,
};
pub use state::{
    Bullet, Enemy, EnemyKind, GamePhase, GameState, InvulnState, Player, Rgb, ShipClass,
};
pub use tick::{TickInput, tick};
