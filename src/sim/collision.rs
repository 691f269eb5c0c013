//! Collision detection and damage policy
//!
//! Two passes per frame, after movement: bullet vs enemy, then player vs
//! enemy. Both passes mark victims during the scan and compact the entity
//! lists afterwards so iteration order stays stable within the frame.

use super::particles;
use super::progression;
use super::state::GameState;
use crate::consts::{CONTACT_DAMAGE, ENEMY_POINTS};

/// Resolve all collisions for one frame. Returns true if the player died.
pub fn resolve(state: &mut GameState, now_ms: u64) -> bool {
    bullet_enemy_pass(state, now_ms);
    player_enemy_pass(state, now_ms)
}

/// Bullet vs enemy: first overlapping enemy in registration order takes the
/// bullet's damage; a bullet never damages more than one enemy per frame.
/// Enemies killed earlier in the pass are skipped by later bullets - a corpse
/// awaiting compaction neither absorbs shots nor scores twice.
fn bullet_enemy_pass(state: &mut GameState, now_ms: u64) {
    let mut spent_bullets = vec![false; state.bullets.len()];
    let mut dead_enemies = vec![false; state.enemies.len()];

    for bi in 0..state.bullets.len() {
        let bullet_box = state.bullets[bi].aabb();
        let damage = state.bullets[bi].damage;

        for ei in 0..state.enemies.len() {
            if dead_enemies[ei] {
                continue;
            }
            if !bullet_box.intersects(&state.enemies[ei].aabb()) {
                continue;
            }

            let died = state.enemies[ei].take_damage(
                damage,
                now_ms,
                &mut state.particles,
                &mut state.rng,
            );
            spent_bullets[bi] = true;

            if died {
                dead_enemies[ei] = true;
                let center = state.enemies[ei].aabb().center();
                let color = state.enemies[ei].color;
                particles::spawn_explosion(
                    &mut state.particles,
                    &mut state.rng,
                    center,
                    color,
                    now_ms,
                );
                progression::award(state, ENEMY_POINTS);
            }
            break;
        }
    }

    let mut i = 0;
    state.bullets.retain(|_| {
        let keep = !spent_bullets[i];
        i += 1;
        keep
    });
    let mut i = 0;
    state.enemies.retain(|_| {
        let keep = !dead_enemies[i];
        i += 1;
        keep
    });
}

/// Player vs enemy: every overlapping enemy is destroyed with an explosion;
/// contact damage goes through the player's invulnerability gate. Returns
/// true if the player's health reached zero.
fn player_enemy_pass(state: &mut GameState, now_ms: u64) -> bool {
    let mut game_over = false;
    let player_box = state.player.aabb();
    let mut collided = vec![false; state.enemies.len()];

    for ei in 0..state.enemies.len() {
        if !player_box.intersects(&state.enemies[ei].aabb()) {
            continue;
        }
        collided[ei] = true;

        if state.player.take_damage(
            CONTACT_DAMAGE,
            now_ms,
            &mut state.particles,
            &mut state.rng,
        ) {
            game_over = true;
        }

        let center = state.enemies[ei].aabb().center();
        let color = state.enemies[ei].color;
        particles::spawn_explosion(&mut state.particles, &mut state.rng, center, color, now_ms);
    }

    let mut i = 0;
    state.enemies.retain(|_| {
        let keep = !collided[i];
        i += 1;
        keep
    });

    game_over
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Bullet, Enemy, EnemyKind, Rgb, ShipClass};
    use glam::Vec2;

    fn enemy_at(x: f32, y: f32, health: f32) -> Enemy {
        Enemy {
            pos: Vec2::new(x, y),
            size: Vec2::splat(40.0),
            speed: 2.0,
            health,
            max_health: health,
            color: Rgb::GREEN,
            kind: EnemyKind::Basic,
            phase: 0.0,
        }
    }

    fn state_with(enemies: Vec<Enemy>, bullets: Vec<Bullet>) -> GameState {
        let mut state = GameState::new(ShipClass::Fighter, 42);
        state.enemies = enemies;
        state.bullets = bullets;
        state
    }

    #[test]
    fn test_bullet_damages_exactly_one_enemy() {
        let mut state = state_with(
            vec![enemy_at(100.0, 100.0, 50.0)],
            vec![Bullet::new(120.0, 110.0, 10.0)],
        );
        resolve(&mut state, 0);

        assert!(state.bullets.is_empty());
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.enemies[0].health, 40.0);
        // Hit burst only
        assert_eq!(state.particles.len(), 5);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_kill_awards_score_and_explodes() {
        let mut state = state_with(
            vec![enemy_at(100.0, 100.0, 10.0)],
            vec![Bullet::new(120.0, 110.0, 10.0)],
        );
        resolve(&mut state, 0);

        assert!(state.enemies.is_empty());
        assert!(state.bullets.is_empty());
        assert_eq!(state.score, 100);
        // 5 hit particles + 30 explosion particles
        assert_eq!(state.particles.len(), 35);
    }

    #[test]
    fn test_first_match_wins_by_registration_order() {
        // Both enemies overlap the bullet; only the first registered is hit
        let mut state = state_with(
            vec![enemy_at(100.0, 100.0, 50.0), enemy_at(110.0, 100.0, 50.0)],
            vec![Bullet::new(120.0, 110.0, 10.0)],
        );
        resolve(&mut state, 0);

        assert_eq!(state.enemies[0].health, 40.0);
        assert_eq!(state.enemies[1].health, 50.0);
    }

    #[test]
    fn test_corpse_does_not_absorb_or_double_score() {
        // Two bullets overlap one 10-health enemy in the same frame. The
        // first kills it; the second passes through the corpse.
        let mut state = state_with(
            vec![enemy_at(100.0, 100.0, 10.0)],
            vec![Bullet::new(120.0, 110.0, 10.0), Bullet::new(121.0, 110.0, 10.0)],
        );
        resolve(&mut state, 0);

        assert!(state.enemies.is_empty());
        assert_eq!(state.score, 100);
        assert_eq!(state.bullets.len(), 1);
    }

    #[test]
    fn test_deferred_removal_keeps_scan_order_stable() {
        // Bullet A kills enemy 0, bullet B must still reach enemy 1 at its
        // original index.
        let mut state = state_with(
            vec![enemy_at(100.0, 100.0, 10.0), enemy_at(300.0, 100.0, 50.0)],
            vec![Bullet::new(120.0, 110.0, 10.0), Bullet::new(320.0, 110.0, 10.0)],
        );
        resolve(&mut state, 0);

        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.enemies[0].health, 40.0);
        assert_eq!(state.score, 100);
    }

    #[test]
    fn test_player_collision_scenario() {
        // Full-health fighter rammed by one enemy
        let mut state = GameState::new(ShipClass::Fighter, 42);
        let ram = enemy_at(state.player.pos.x, state.player.pos.y, 30.0);
        state.enemies.push(ram);

        let game_over = resolve(&mut state, 5000);

        assert!(!game_over);
        assert_eq!(state.player.health, 180.0);
        assert!(state.player.is_invulnerable());
        assert!(state.enemies.is_empty());
        // 10 damage particles + 30 explosion particles
        assert_eq!(state.particles.len(), 40);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_invulnerable_player_takes_no_damage() {
        let mut state = GameState::new(ShipClass::Fighter, 42);
        state.enemies.push(enemy_at(state.player.pos.x, state.player.pos.y, 30.0));
        resolve(&mut state, 1000);
        assert_eq!(state.player.health, 180.0);

        // Second ram inside the window: enemy still destroyed and explodes,
        // health and particles from the damage burst unchanged
        let before = state.particles.len();
        state.enemies.push(enemy_at(state.player.pos.x, state.player.pos.y, 30.0));
        resolve(&mut state, 1500);

        assert_eq!(state.player.health, 180.0);
        assert!(state.enemies.is_empty());
        assert_eq!(state.particles.len(), before + 30);
    }

    #[test]
    fn test_lethal_ram_reports_game_over() {
        let mut state = GameState::new(ShipClass::Fighter, 42);
        state.player.health = 20.0;
        state.enemies.push(enemy_at(state.player.pos.x, state.player.pos.y, 30.0));

        assert!(resolve(&mut state, 0));
        assert_eq!(state.player.health, 0.0);
    }

    #[test]
    fn test_non_overlapping_entities_untouched() {
        let mut state = state_with(
            vec![enemy_at(100.0, 100.0, 50.0)],
            vec![Bullet::new(700.0, 500.0, 10.0)],
        );
        resolve(&mut state, 0);

        assert_eq!(state.bullets.len(), 1);
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.enemies[0].health, 50.0);
        assert!(state.particles.is_empty());
    }
}
