//! Enemy spawn scheduling
//!
//! One timer, one enemy per expiry. The interval is recomputed from the
//! current level after every spawn, so the cadence tightens as the session
//! progresses, floored so high levels stay survivable.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Enemy, EnemyKind, GameState, Rgb};
use crate::consts::*;

/// Spawn interval for a level: `max(floor, base - level * step)`
pub fn interval_for_level(level: u32) -> u64 {
    SPAWN_INTERVAL_BASE_MS
        .saturating_sub(level as u64 * SPAWN_INTERVAL_STEP_MS)
        .max(SPAWN_INTERVAL_FLOOR_MS)
}

/// Build one enemy at the top edge with level-scaled stats
pub fn spawn_enemy(rng: &mut Pcg32, level: u32) -> Enemy {
    let size = Vec2::splat(ENEMY_SIZE);
    let x = rng.random_range(0.0..=(PLAY_WIDTH - size.x));
    let speed = ENEMY_BASE_SPEED + rng.random::<f32>() * level as f32 * ENEMY_SPEED_PER_LEVEL;
    let health = ENEMY_BASE_HEALTH + level as f32 * ENEMY_HEALTH_PER_LEVEL;
    let color = Rgb(
        rng.random_range(50..=255),
        rng.random_range(50..=255),
        rng.random_range(50..=255),
    );
    let kind = if rng.random_bool(ADVANCED_CHANCE) {
        EnemyKind::Advanced
    } else {
        EnemyKind::Basic
    };
    Enemy {
        pos: Vec2::new(x, -size.y),
        size,
        speed,
        health,
        max_health: health,
        color,
        kind,
        phase: 0.0,
    }
}

/// Run the scheduler for one frame
pub fn run(state: &mut GameState, now_ms: u64) {
    if now_ms - state.last_spawn > state.spawn_interval {
        state.last_spawn = now_ms;
        let enemy = spawn_enemy(&mut state.rng, state.level);
        log::debug!(
            "spawn {:?} enemy at x={:.0} speed={:.2} health={}",
            enemy.kind,
            enemy.pos.x,
            enemy.speed,
            enemy.health
        );
        state.enemies.push(enemy);
        state.spawn_interval = interval_for_level(state.level);
    }
}
