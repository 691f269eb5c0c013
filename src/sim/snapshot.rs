//! Immutable per-frame view for the renderer and HUD
//!
//! The presentation layer never touches [`GameState`] directly; after each
//! tick it takes a [`FrameSnapshot`] and draws that. Snapshot types are
//! serde-serializable so headless callers can dump them as JSON.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{EnemyKind, GameState, Rgb, ShipClass};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub size: Vec2,
    pub class: ShipClass,
    pub color: Rgb,
    /// Renderers typically dim the ship while this is set
    pub invulnerable: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletView {
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Rgb,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: EnemyKind,
    pub color: Rgb,
    /// In (0, 1]; drives the health bar above the enemy
    pub health_ratio: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleView {
    pub pos: Vec2,
    pub size: f32,
    pub color: Rgb,
    /// 0-255 alpha, already faded for the particle's age
    pub opacity: f32,
}

/// HUD numbers for the current frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hud {
    pub score: u64,
    pub level: u32,
    pub health: f32,
    pub max_health: f32,
    pub damage: f32,
    pub regen_rate: f32,
    pub double_bullets: bool,
}

/// Everything the presentation layer needs for one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub player: PlayerView,
    pub bullets: Vec<BulletView>,
    pub enemies: Vec<EnemyView>,
    pub particles: Vec<ParticleView>,
    pub hud: Hud,
    pub game_over: bool,
}

impl GameState {
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            player: PlayerView {
                pos: self.player.pos,
                size: self.player.size,
                class: self.player.class,
                color: self.player.color,
                invulnerable: self.player.is_invulnerable(),
            },
            bullets: self
                .bullets
                .iter()
                .map(|b| BulletView {
                    pos: b.pos,
                    size: b.size,
                    color: Rgb::YELLOW,
                })
                .collect(),
            enemies: self
                .enemies
                .iter()
                .map(|e| EnemyView {
                    pos: e.pos,
                    size: e.size,
                    kind: e.kind,
                    color: e.color,
                    health_ratio: e.health_ratio(),
                })
                .collect(),
            particles: self
                .particles
                .iter()
                .map(|p| ParticleView {
                    pos: p.pos,
                    size: p.size,
                    color: p.color,
                    opacity: p.opacity(self.time_ms),
                })
                .collect(),
            hud: Hud {
                score: self.score,
                level: self.level,
                health: self.player.health,
                max_health: self.player.max_health,
                damage: self.player.damage,
                regen_rate: self.player.regen_rate,
                double_bullets: self.player.double_bullets,
            },
            game_over: self.is_game_over(),
        }
    }
}
