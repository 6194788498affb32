//! Obstacle scrolling, recycling, scoring, and collision.

use super::evolution::{hitbox, Hitbox};
use super::types::{GameState, Obstacle};
use crate::constants::*;
use log::trace;
use rand::Rng;

/// What happened to the obstacles during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObstacleOutcome {
    /// Obstacles newly passed this tick.
    pub scored: u32,
    /// Slots sent back to the right edge.
    pub recycled: u32,
    /// The bird overlapped a spike.
    pub collided: bool,
}

/// Whether `hitbox` overlaps either spike of `obstacle`.
pub fn collides(hitbox: &Hitbox, obstacle: &Obstacle) -> bool {
    let overlaps_columns = hitbox.right >= obstacle.x && hitbox.left < obstacle.trailing_edge();
    if !overlaps_columns {
        return false;
    }
    let hits_top = hitbox.bottom >= 1 && hitbox.top <= obstacle.gap_top - 1;
    let hits_bottom =
        hitbox.top <= SCREEN_HEIGHT as i32 - 2 && hitbox.bottom >= obstacle.bottom_spike_top();
    hits_top || hits_bottom
}

/// Run one simulation tick of the obstacle engine.
///
/// Obstacles shift left one column every [`SCROLL_EVERY_TICKS`] calls, so
/// they move at half the frame rate. Every call then scores, recycles, and
/// collision-tests each slot against the already-updated bird.
pub fn advance<R: Rng>(state: &mut GameState, rng: &mut R) -> ObstacleOutcome {
    let mut outcome = ObstacleOutcome::default();

    state.scroll_counter += 1;
    if state.scroll_counter >= SCROLL_EVERY_TICKS {
        state.scroll_counter = 0;
        for obstacle in state.obstacles.iter_mut() {
            obstacle.x -= 1;
        }
    }

    let bird_x = state.bird.x;
    let hb = hitbox(&state.bird);
    for obstacle in state.obstacles.iter_mut() {
        if obstacle.trailing_edge() < bird_x && !obstacle.passed {
            obstacle.passed = true;
            outcome.scored += 1;
        }

        if obstacle.trailing_edge() < 0 {
            obstacle.respawn(SCREEN_WIDTH as i32 + RESPAWN_OFFSET, rng);
            outcome.recycled += 1;
            trace!("obstacle recycled with gap_top {}", obstacle.gap_top);
        }

        if collides(&hb, obstacle) {
            outcome.collided = true;
        }
    }

    state.score += outcome.scored;
    if outcome.collided && !state.config.invincible {
        state.game_over = true;
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    /// A started game with every obstacle parked far off-screen.
    fn clear_field(rng: &mut ChaCha8Rng) -> GameState {
        let mut state = GameState::new(GameConfig::default(), rng);
        state.started = true;
        for (i, obstacle) in state.obstacles.iter_mut().enumerate() {
            *obstacle = Obstacle::with_gap_top(200 + i as i32 * 25, 5);
        }
        state
    }

    #[test]
    fn test_scrolls_every_second_tick() {
        let mut rng = create_test_rng();
        let mut state = clear_field(&mut rng);

        advance(&mut state, &mut rng);
        assert_eq!(state.obstacles[0].x, 200);
        assert_eq!(state.scroll_counter, 1);

        advance(&mut state, &mut rng);
        assert_eq!(state.obstacles[0].x, 199);
        assert_eq!(state.obstacles[2].x, 249);
        assert_eq!(state.scroll_counter, 0);

        advance(&mut state, &mut rng);
        assert_eq!(state.obstacles[0].x, 199);
    }

    #[test]
    fn test_scores_once_per_obstacle() {
        let mut rng = create_test_rng();
        let mut state = clear_field(&mut rng);
        // Trailing edge at 10 == bird.x: not yet passed
        state.obstacles[0] = Obstacle::with_gap_top(6, 5);
        state.bird.y = 10.0;

        let outcome = advance(&mut state, &mut rng);
        assert_eq!(outcome.scored, 0);

        let outcome = advance(&mut state, &mut rng);
        assert_eq!(outcome.scored, 1);
        assert!(state.obstacles[0].passed);
        assert_eq!(state.score, 1);

        for _ in 0..10 {
            advance(&mut state, &mut rng);
        }
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_recycles_off_screen_obstacle() {
        let mut rng = create_test_rng();
        let mut state = clear_field(&mut rng);
        state.obstacles[1] = Obstacle {
            x: -4,
            gap_top: 3,
            gap_bottom: 9,
            passed: true,
        };
        state.scroll_counter = 1;

        let outcome = advance(&mut state, &mut rng);
        assert_eq!(outcome.recycled, 1);
        let recycled = state.obstacles[1];
        assert_eq!(recycled.x, 90);
        assert!(!recycled.passed);
        assert!((1..=10).contains(&recycled.gap_top));
        assert_eq!(recycled.gap_top + recycled.gap_bottom, 12);
    }

    #[test]
    fn test_partially_visible_obstacle_is_kept() {
        let mut rng = create_test_rng();
        let mut state = clear_field(&mut rng);
        state.obstacles[0] = Obstacle::with_gap_top(-4, 5);
        let outcome = advance(&mut state, &mut rng);
        assert_eq!(outcome.recycled, 0);
        assert_eq!(state.obstacles[0].x, -4);
    }

    #[test]
    fn test_collides_with_top_spike() {
        let obstacle = Obstacle::with_gap_top(9, 6);
        let hb = Hitbox {
            left: 10,
            right: 10,
            top: 5,
            bottom: 5,
        };
        assert!(collides(&hb, &obstacle));

        let in_gap = Hitbox {
            top: 6,
            bottom: 6,
            ..hb
        };
        assert!(!collides(&in_gap, &obstacle));
    }

    #[test]
    fn test_collides_with_bottom_spike() {
        // gap_top 6 -> gap rows 6..=13, bottom spike from row 14
        let obstacle = Obstacle::with_gap_top(9, 6);
        let lowest_safe = Hitbox {
            left: 10,
            right: 10,
            top: 13,
            bottom: 13,
        };
        assert!(!collides(&lowest_safe, &obstacle));
        let hit = Hitbox {
            top: 13,
            bottom: 14,
            ..lowest_safe
        };
        assert!(collides(&hit, &obstacle));
    }

    #[test]
    fn test_collision_needs_column_overlap() {
        let obstacle = Obstacle::with_gap_top(20, 10);
        let hb = Hitbox {
            left: 10,
            right: 19,
            top: 2,
            bottom: 2,
        };
        assert!(!collides(&hb, &obstacle));
        assert!(collides(&Hitbox { right: 20, ..hb }, &obstacle));
        assert!(collides(&Hitbox { left: 23, right: 25, ..hb }, &obstacle));
        assert!(!collides(&Hitbox { left: 24, right: 25, ..hb }, &obstacle));
    }

    #[test]
    fn test_advance_sets_game_over_on_collision() {
        let mut rng = create_test_rng();
        let mut state = clear_field(&mut rng);
        state.obstacles[0] = Obstacle::with_gap_top(8, 10);
        state.bird.y = 5.0;

        let outcome = advance(&mut state, &mut rng);
        assert!(outcome.collided);
        assert!(state.game_over);
    }

    #[test]
    fn test_invincible_scores_through_spikes() {
        let mut rng = create_test_rng();
        let mut state = clear_field(&mut rng);
        state.config.invincible = true;
        state.obstacles[0] = Obstacle::with_gap_top(8, 10);
        state.bird.y = 5.0;

        for _ in 0..12 {
            advance(&mut state, &mut rng);
        }
        assert!(!state.game_over);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_gap_invariant_holds_over_long_run() {
        let mut rng = create_test_rng();
        let mut state = clear_field(&mut rng);
        state.config.invincible = true;
        for _ in 0..5000 {
            advance(&mut state, &mut rng);
            for obstacle in &state.obstacles {
                assert_eq!(obstacle.gap_top + obstacle.gap_bottom, 12);
            }
        }
    }
}
