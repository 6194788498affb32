//! Bird physics: gravity, the jump impulse, and screen-edge collisions.

use super::evolution::hitbox;
use super::types::{Bird, GameState};
use crate::constants::*;

/// Advance the bird by one tick. Positions snap to whole rows, so sub-row
/// motion is dropped (truncated toward zero) every step.
pub fn step_physics(bird: &mut Bird) {
    bird.velocity += GRAVITY;
    bird.y = (bird.y + bird.velocity).trunc();
}

/// Replace the current velocity with the upward impulse.
pub fn apply_impulse(bird: &mut Bird) {
    bird.velocity = IMPULSE;
}

/// Whether the bird's hitbox touches the top or bottom border rows.
pub fn out_of_bounds(bird: &Bird) -> bool {
    let hb = hitbox(bird);
    hb.top <= 0 || hb.bottom >= SCREEN_HEIGHT as i32 - 1
}

/// Pin the bird inside the screen rows, stopping it at the edge.
pub fn clamp_to_screen(bird: &mut Bird) {
    let max_y = (SCREEN_HEIGHT - 1) as f64;
    if bird.y < 0.0 || bird.y > max_y {
        bird.y = bird.y.clamp(0.0, max_y);
        bird.velocity = 0.0;
    }
}

/// Physics step plus the border check. Returns whether the bird hit a
/// border; the game only ends on it when not invincible. An invincible
/// bird is held on screen instead.
pub fn update_bird(state: &mut GameState) -> bool {
    step_physics(&mut state.bird);
    let hit = out_of_bounds(&state.bird);
    if hit {
        if state.config.invincible {
            clamp_to_screen(&mut state.bird);
        } else {
            state.game_over = true;
        }
    }
    hit
}
