//! Score and level progression
//!
//! Score only ever grows; the level check runs after every award and steps
//! the level by exactly one, so a large overshoot still levels once per
//! subsequent kill rather than jumping.

use super::state::GameState;
use crate::consts::LEVEL_UP_SCORE;

/// Add points, then evaluate the level-up threshold `score >= level * 1000`
pub fn award(state: &mut GameState, points: u64) {
    state.score += points;
    if state.score >= state.level as u64 * LEVEL_UP_SCORE {
        state.level += 1;
        state.player.level_up(state.level);
        log::info!(
            "level up: level={} score={} damage={} regen={:.1}",
            state.level,
            state.score,
            state.player.damage,
            state.player.regen_rate
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ShipClass;

    #[test]
    fn test_no_level_up_below_threshold() {
        let mut state = GameState::new(ShipClass::Fighter, 0);
        for _ in 0..3 {
            award(&mut state, 100);
        }
        assert_eq!(state.score, 300);
        assert_eq!(state.level, 1);
    }

    #[test]
    fn test_level_up_at_exact_threshold() {
        let mut state = GameState::new(ShipClass::Fighter, 0);
        for _ in 0..10 {
            award(&mut state, 100);
        }
        assert_eq!(state.score, 1000);
        assert_eq!(state.level, 2);
        assert_eq!(state.player.damage, 15.0);
        assert_eq!(state.player.regen_rate, 1.5);
    }

    #[test]
    fn test_overshoot_levels_one_step_per_award() {
        let mut state = GameState::new(ShipClass::Fighter, 0);
        // Single huge award crosses several thresholds but levels once
        award(&mut state, 5000);
        assert_eq!(state.level, 2);
        // The re-check happens on the next award
        award(&mut state, 100);
        assert_eq!(state.level, 3);
    }

    #[test]
    fn test_double_bullets_unlock_and_latch() {
        let mut state = GameState::new(ShipClass::Fighter, 0);
        award(&mut state, 1000);
        assert_eq!(state.level, 2);
        assert!(!state.player.double_bullets);

        award(&mut state, 1000);
        assert_eq!(state.level, 3);
        assert!(state.player.double_bullets);

        award(&mut state, 1000);
        assert_eq!(state.level, 4);
        assert!(state.player.double_bullets);
    }
}
