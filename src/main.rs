//! Star Barrage headless demo runner
//!
//! Drives a full session with a simple autopilot and a synthetic 60 Hz
//! clock, logging progression along the way and dumping the final frame
//! snapshot as JSON. Useful for smoke-testing the simulation and for
//! renderer development against realistic snapshot data.
//!
//! Usage: `star-barrage [fighter|scout|tank] [seed] [max-frames]`

use std::time::{SystemTime, UNIX_EPOCH};

use star_barrage::consts::*;
use star_barrage::sim::{GameState, ShipClass, TickInput, tick};

/// Milliseconds per simulated frame at the target rate
const FRAME_MS: u64 = 1000 / TARGET_FPS as u64;

/// Pick inputs the way a cautious player would: line up under the nearest
/// enemy to shoot it, but dodge sideways when one is about to ram us.
fn autopilot(state: &GameState, first_frame: bool) -> TickInput {
    let player_cx = state.player.pos.x + state.player.size.x / 2.0;

    // Nearest enemy by vertical distance to the player
    let target = state
        .enemies
        .iter()
        .min_by(|a, b| {
            let da = (state.player.pos.y - a.pos.y).abs();
            let db = (state.player.pos.y - b.pos.y).abs();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|e| (e.pos.x + e.size.x / 2.0, e.pos.y + e.size.y));

    let mut input = TickInput {
        fire_pressed: first_frame,
        fire_held: true,
        ..Default::default()
    };

    if let Some((enemy_cx, enemy_bottom)) = target {
        let closing = enemy_bottom > state.player.pos.y - 150.0;
        let dx = enemy_cx - player_cx;
        if closing && dx.abs() < state.player.size.x {
            // Too close to trade: sidestep toward the wider gap
            if player_cx < PLAY_WIDTH / 2.0 {
                input.right = true;
            } else {
                input.left = true;
            }
        } else if dx < -2.0 {
            input.left = true;
        } else if dx > 2.0 {
            input.right = true;
        }
    }

    input
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let class = args
        .next()
        .and_then(|s| ShipClass::from_str(&s))
        .unwrap_or_default();
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    let max_frames: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(36_000);

    log::info!("session start: class={} seed={}", class.as_str(), seed);

    let mut state = GameState::new(class, seed);
    let mut now_ms = 0;

    for frame in 0..max_frames {
        now_ms += FRAME_MS;
        let input = autopilot(&state, frame == 0);
        tick(&mut state, &input, now_ms);

        if state.is_game_over() {
            break;
        }
        if frame % 600 == 599 {
            log::info!(
                "t={}s score={} level={} enemies={} bullets={} particles={}",
                now_ms / 1000,
                state.score,
                state.level,
                state.enemies.len(),
                state.bullets.len(),
                state.particles.len()
            );
        }
    }

    log::info!(
        "session end: score={} level={} frames={}",
        state.score,
        state.level,
        state.frame
    );

    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("snapshot serialization failed: {e}"),
    }
}
