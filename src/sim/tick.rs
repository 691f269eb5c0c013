//! Per-frame simulation step
//!
//! One call advances the whole session by one frame in a fixed order:
//! player update, fire handling, bullet movement, spawning, enemy movement,
//! particle aging, then the collision passes. All timing comes from the
//! caller-supplied `now_ms`; the frame rate cap lives with the caller.

use super::collision;
use super::particles;
use super::spawn;
use super::state::{GamePhase, GameState, MoveInput};
use crate::consts::SHOOT_INTERVAL_MS;

/// Input snapshot for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Fire went down this frame; always emits a shot
    pub fire_pressed: bool,
    /// Fire currently held; auto-fires on the fixed cadence
    pub fire_held: bool,
}

impl TickInput {
    fn held(&self) -> MoveInput {
        MoveInput {
            up: self.up,
            down: self.down,
            left: self.left,
            right: self.right,
        }
    }
}

/// Advance the session by one frame
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: u64) {
    if state.phase == GamePhase::GameOver {
        return;
    }
    state.frame += 1;
    state.time_ms = now_ms;

    state.player.update(input.held(), now_ms);

    // A press edge always fires; holding fires on the auto-fire cadence
    if input.fire_pressed
        || (input.fire_held && now_ms - state.last_shot > SHOOT_INTERVAL_MS)
    {
        state.player.shoot(&mut state.bullets);
        state.last_shot = now_ms;
    }

    for bullet in &mut state.bullets {
        bullet.advance();
    }
    state.bullets.retain(|b| !b.off_screen());

    spawn::run(state, now_ms);

    for enemy in &mut state.enemies {
        enemy.advance();
    }
    // Escapes: no score, no explosion
    state.enemies.retain(|e| !e.off_screen());

    particles::update(&mut state.particles, now_ms);

    if collision::resolve(state, now_ms) {
        state.phase = GamePhase::GameOver;
        log::info!(
            "game over: score={} level={} frames={}",
            state.score,
            state.level,
            state.frame
        );
    }
}
