//! Game state and core simulation types
//!
//! Everything a session owns lives in [`GameState`]: the player, the live
//! bullet/enemy/particle collections, the session RNG, and the score/level
//! progression counters. The clock is never read here; every timer compares
//! a stored timestamp against the `now_ms` injected into [`tick`].
//!
//! [`tick`]: super::tick::tick

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bounds::Aabb;
use super::particles::{self, Particle};
use crate::consts::*;

/// Cosmetic color tag; the renderer maps it straight to a fill color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const RED: Rgb = Rgb(231, 76, 60);
    pub const GREEN: Rgb = Rgb(46, 204, 113);
    pub const BLUE: Rgb = Rgb(52, 152, 219);
    pub const YELLOW: Rgb = Rgb(241, 196, 15);
}

/// Closed set of playable ship classes, each a fixed stat preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShipClass {
    /// Balanced all-rounder
    #[default]
    Fighter,
    /// Fast and fragile
    Scout,
    /// Slow, heavy, hard-hitting
    Tank,
}

/// Stat preset for a ship class
#[derive(Debug, Clone, Copy)]
pub struct ShipPreset {
    /// Pixels per frame per held direction
    pub speed: f32,
    pub max_health: f32,
    pub damage: f32,
    /// Health units per regen interval
    pub regen_rate: f32,
    pub color: Rgb,
}

impl ShipClass {
    pub fn preset(self) -> ShipPreset {
        match self {
            ShipClass::Scout => ShipPreset {
                speed: 7.0,
                max_health: 180.0,
                damage: 8.0,
                regen_rate: 0.8,
                color: Rgb::GREEN,
            },
            ShipClass::Tank => ShipPreset {
                speed: 3.0,
                max_health: 250.0,
                damage: 15.0,
                regen_rate: 1.2,
                color: Rgb::RED,
            },
            ShipClass::Fighter => ShipPreset {
                speed: 5.0,
                max_health: 200.0,
                damage: 10.0,
                regen_rate: 1.0,
                color: Rgb::BLUE,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShipClass::Fighter => "fighter",
            ShipClass::Scout => "scout",
            ShipClass::Tank => "tank",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "fighter" => Some(ShipClass::Fighter),
            "scout" => Some(ShipClass::Scout),
            "tank" => Some(ShipClass::Tank),
            _ => None,
        }
    }
}

/// Player invulnerability window after taking a hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvulnState {
    Normal,
    /// Blocks damage application until the fixed duration elapses;
    /// collisions are still detected and resolved for the enemy
    Invulnerable { since: u64 },
}

/// The player ship
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub max_health: f32,
    pub health: f32,
    /// Damage per shot, copied into each bullet at creation
    pub damage: f32,
    /// Health units added once per regen interval
    pub regen_rate: f32,
    /// Latches true at the unlock level, never reverts
    pub double_bullets: bool,
    pub invuln: InvulnState,
    pub class: ShipClass,
    pub color: Rgb,
    last_regen: u64,
}

impl Player {
    pub fn new(class: ShipClass) -> Self {
        let preset = class.preset();
        let size = Vec2::splat(PLAYER_SIZE);
        Self {
            pos: Vec2::new(
                (PLAY_WIDTH - size.x) / 2.0,
                PLAY_HEIGHT - size.y - PLAYER_BOTTOM_MARGIN,
            ),
            size,
            speed: preset.speed,
            max_health: preset.max_health,
            health: preset.max_health,
            damage: preset.damage,
            regen_rate: preset.regen_rate,
            double_bullets: false,
            invuln: InvulnState::Normal,
            class,
            color: preset.color,
            last_regen: 0,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    pub fn is_invulnerable(&self) -> bool {
        matches!(self.invuln, InvulnState::Invulnerable { .. })
    }

    /// Move by held directions, clamp to the play area, apply regen, and
    /// auto-clear an expired invulnerability window.
    pub fn update(&mut self, held: MoveInput, now_ms: u64) {
        if held.left {
            self.pos.x -= self.speed;
        }
        if held.right {
            self.pos.x += self.speed;
        }
        if held.up {
            self.pos.y -= self.speed;
        }
        if held.down {
            self.pos.y += self.speed;
        }
        self.pos.x = self.pos.x.clamp(0.0, PLAY_WIDTH - self.size.x);
        self.pos.y = self.pos.y.clamp(0.0, PLAY_HEIGHT - self.size.y);

        if now_ms - self.last_regen > REGEN_INTERVAL_MS {
            self.last_regen = now_ms;
            if self.health < self.max_health {
                self.health = (self.health + self.regen_rate).min(self.max_health);
            }
        }

        if let InvulnState::Invulnerable { since } = self.invuln
            && now_ms - since > INVULN_DURATION_MS
        {
            self.invuln = InvulnState::Normal;
        }
    }

    /// Apply damage unless invulnerable. A successful application opens the
    /// invulnerability window and emits a red damage burst. Returns true if
    /// the player died.
    pub fn take_damage(
        &mut self,
        amount: f32,
        now_ms: u64,
        particles: &mut Vec<Particle>,
        rng: &mut Pcg32,
    ) -> bool {
        if self.is_invulnerable() {
            return false;
        }
        self.health = (self.health - amount).max(0.0);
        self.invuln = InvulnState::Invulnerable { since: now_ms };
        particles::spawn_burst(
            particles,
            rng,
            self.aabb().center(),
            Rgb::RED,
            PLAYER_HIT_PARTICLES,
            PLAYER_HIT_LIFESPAN_MS,
            now_ms,
        );
        self.health <= 0.0
    }

    /// Emit this frame's shot: one bullet from the nose, or two wing shots
    /// once double bullets are unlocked.
    pub fn shoot(&self, bullets: &mut Vec<Bullet>) {
        if self.double_bullets {
            bullets.push(Bullet::new(self.pos.x + 10.0, self.pos.y, self.damage));
            bullets.push(Bullet::new(
                self.pos.x + self.size.x - 10.0,
                self.pos.y,
                self.damage,
            ));
        } else {
            bullets.push(Bullet::new(
                self.pos.x + self.size.x / 2.0,
                self.pos.y,
                self.damage,
            ));
        }
    }

    /// Per-level stat gains; double bullets latch on at the unlock level
    pub fn level_up(&mut self, level: u32) {
        self.damage += LEVEL_UP_DAMAGE;
        self.regen_rate += LEVEL_UP_REGEN;
        if level >= DOUBLE_BULLETS_LEVEL {
            self.double_bullets = true;
        }
    }
}

/// Held movement directions for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// A player shot traveling up the screen
#[derive(Debug, Clone)]
pub struct Bullet {
    pub pos: Vec2,
    pub size: Vec2,
    /// Upward speed, pixels per frame
    pub speed: f32,
    /// Frozen at creation; later level-ups do not affect bullets in flight
    pub damage: f32,
}

impl Bullet {
    /// `x` is the muzzle center; the bullet rectangle is centered on it
    pub fn new(x: f32, y: f32, damage: f32) -> Self {
        Self {
            pos: Vec2::new(x - BULLET_WIDTH / 2.0, y),
            size: Vec2::new(BULLET_WIDTH, BULLET_HEIGHT),
            speed: BULLET_SPEED,
            damage,
        }
    }

    pub fn advance(&mut self) {
        self.pos.y -= self.speed;
    }

    /// Fully above the top edge
    pub fn off_screen(&self) -> bool {
        self.pos.y < -self.size.y
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// Enemy movement variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Straight descent
    Basic,
    /// Descends while drifting horizontally on a sine wave
    Advanced,
}

/// A descending enemy ship
#[derive(Debug, Clone)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: Vec2,
    /// Downward speed, pixels per frame
    pub speed: f32,
    pub health: f32,
    pub max_health: f32,
    pub color: Rgb,
    pub kind: EnemyKind,
    /// Drift phase for advanced enemies
    pub phase: f32,
}

impl Enemy {
    pub fn advance(&mut self) {
        self.pos.y += self.speed;
        if self.kind == EnemyKind::Advanced {
            self.phase += DRIFT_PHASE_STEP;
            self.pos.x += self.phase.sin() * DRIFT_AMPLITUDE;
            self.pos.x = self.pos.x.clamp(0.0, PLAY_WIDTH - self.size.x);
        }
    }

    /// Fully below the bottom edge; an escape, not a kill
    pub fn off_screen(&self) -> bool {
        self.pos.y > PLAY_HEIGHT
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    pub fn health_ratio(&self) -> f32 {
        self.health / self.max_health
    }

    /// Apply bullet damage and emit a hit burst. Returns true if the enemy
    /// is destroyed.
    pub fn take_damage(
        &mut self,
        amount: f32,
        now_ms: u64,
        particles: &mut Vec<Particle>,
        rng: &mut Pcg32,
    ) -> bool {
        self.health -= amount;
        particles::spawn_burst(
            particles,
            rng,
            self.aabb().center(),
            self.color,
            ENEMY_HIT_PARTICLES,
            ENEMY_HIT_LIFESPAN_MS,
            now_ms,
        );
        self.health <= 0.0
    }
}

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Session ended; ticks are no-ops
    GameOver,
}

/// Complete session state
///
/// The clock supplied to [`tick`] must be session-relative (start near zero)
/// and monotonic; all timers below store the last timestamp they fired at.
///
/// [`tick`]: super::tick::tick
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub score: u64,
    pub level: u32,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub particles: Vec<Particle>,
    /// Timestamp of the most recent enemy spawn
    pub last_spawn: u64,
    /// Current spawn interval; recomputed from level after each spawn
    pub spawn_interval: u64,
    /// Timestamp of the most recent shot (auto-fire gating)
    pub last_shot: u64,
    /// Clock value of the latest tick
    pub time_ms: u64,
    /// Frames simulated
    pub frame: u64,
}

impl GameState {
    pub fn new(class: ShipClass, seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            score: 0,
            level: 1,
            player: Player::new(class),
            bullets: Vec::new(),
            enemies: Vec::new(),
            particles: Vec::new(),
            last_spawn: 0,
            spawn_interval: SPAWN_INTERVAL_BASE_MS,
            last_shot: 0,
            time_ms: 0,
            frame: 0,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
