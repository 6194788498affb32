//! Draws a [`GameState`] into a [`ScreenBuffer`].

use crate::constants::*;
use crate::game::difficulty::frames_per_second;
use crate::game::{GamePhase, GameState};
use crate::screen::ScreenBuffer;

const TITLE: &str = "=== FLAPPY TERMINAL ===";
const MENU_LINES: [(usize, &str); 5] = [
    (6, "Controls:"),
    (7, "SPACE - Jump / Start game"),
    (8, "R - Restart (after game over)"),
    (9, "Q - Quit (after game over)"),
    (11, "Press SPACE to start..."),
];
const GAME_OVER_LINES: [(usize, &str); 3] = [
    (SCREEN_HEIGHT / 2, "GAME OVER!"),
    (SCREEN_HEIGHT / 2 + 2, "Press R to restart"),
    (SCREEN_HEIGHT / 2 + 4, "Press Q to quit"),
];

/// Whether `(x, y)` lies inside the border.
fn in_interior(x: i32, y: i32) -> bool {
    x >= 1 && x < SCREEN_WIDTH as i32 - 1 && y >= 1 && y < SCREEN_HEIGHT as i32 - 1
}

/// Rebuild the whole frame from scratch.
pub fn draw_frame(state: &GameState, screen: &mut ScreenBuffer) {
    screen.clear();
    screen.draw_border();

    if state.started {
        draw_obstacles(state, screen);
        draw_bird(state, screen);
    }

    draw_interface(state, screen);
}

fn draw_obstacles(state: &GameState, screen: &mut ScreenBuffer) {
    let height = SCREEN_HEIGHT as i32;
    // Slots that have started leaving or have not yet arrived stay hidden
    let on_screen = state
        .obstacles
        .iter()
        .filter(|o| (0..SCREEN_WIDTH as i32).contains(&o.x));
    for obstacle in on_screen {
        let rows = (1..obstacle.gap_top).chain(obstacle.bottom_spike_top()..height - 1);
        for y in rows {
            for x in obstacle.x..obstacle.trailing_edge() {
                if in_interior(x, y) {
                    screen.put(x, y, OBSTACLE_CHAR);
                }
            }
        }
    }
}

/// The glyph is anchored one row above and two columns left of the bird.
fn draw_bird(state: &GameState, screen: &mut ScreenBuffer) {
    let bird = &state.bird;
    for (i, row) in bird.glyph.iter().enumerate() {
        for (j, &ch) in row.iter().enumerate() {
            let y = bird.row().saturating_sub(1).saturating_add(i as i32);
            let x = bird.x - 2 + j as i32;
            if ch != ' ' && in_interior(x, y) {
                screen.put(x, y, ch);
            }
        }
    }
}

fn draw_interface(state: &GameState, screen: &mut ScreenBuffer) {
    let score_line = if state.config.invincible {
        format!(
            "Score: {} | Level: {} | FPS: {} | [INVINCIBLE]",
            state.score,
            state.bird.evolution_level,
            frames_per_second(state.tick_delay_us)
        )
    } else {
        format!("Score: {}", state.score)
    };
    screen.write_centered(2, &score_line);

    match state.phase() {
        GamePhase::Menu => {
            screen.write_centered(4, TITLE);
            for (row, text) in MENU_LINES {
                screen.write_centered(row, text);
            }
        }
        GamePhase::GameOver => {
            for (row, text) in GAME_OVER_LINES {
                screen.write_centered(row, text);
            }
        }
        GamePhase::Playing => {}
    }
}
