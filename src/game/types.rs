//! Flappy Terminal data structures.
//!
//! One bird, exactly three recycled obstacle slots, and the flags that drive
//! the menu / playing / game-over state machine. Everything lives in a
//! single [`GameState`] value that the loop passes to each subsystem.

use super::evolution;
use crate::config::{GameConfig, Playfield};
use crate::constants::*;
use rand::Rng;

/// Bird sprite: 4 rows by 6 columns of characters, spaces are transparent.
pub type Glyph = [[char; GLYPH_COLS]; GLYPH_ROWS];

/// The player's bird.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    /// Fixed column. Never changes after init.
    pub x: i32,
    /// Vertical position in rows (row 0 = top border). Always a whole row.
    pub y: f64,
    /// Rows per tick, positive = downward.
    pub velocity: f64,
    /// `score / 2`, capped at [`MAX_EVOLUTION_LEVEL`].
    pub evolution_level: u8,
    pub glyph: Glyph,
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

impl Bird {
    pub fn new() -> Self {
        Self {
            x: BIRD_X,
            y: BIRD_START_Y,
            velocity: 0.0,
            evolution_level: 0,
            glyph: evolution::build_glyph(0),
        }
    }

    /// Row the bird currently occupies.
    pub fn row(&self) -> i32 {
        self.y as i32
    }
}

/// One obstacle slot: a top spike and a bottom spike around a fixed-size gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Obstacle {
    /// Leftmost column.
    pub x: i32,
    /// Rows occupied by the top spike, counted from the top border.
    pub gap_top: i32,
    /// Rows occupied by the bottom spike, counted from the bottom border.
    pub gap_bottom: i32,
    /// Whether the bird has already scored this obstacle.
    pub passed: bool,
}

impl Obstacle {
    pub fn with_gap_top(x: i32, gap_top: i32) -> Self {
        Self {
            x,
            gap_top,
            gap_bottom: SCREEN_HEIGHT as i32 - gap_top - GAP_SPAN,
            passed: false,
        }
    }

    /// Create an obstacle at `x` with a uniformly random gap.
    pub fn spawn<R: Rng>(x: i32, rng: &mut R) -> Self {
        Self::with_gap_top(x, rng.gen_range(Playfield::STANDARD.gap_top_range()))
    }

    /// Overwrite this slot in place with a fresh gap at `x`.
    pub fn respawn<R: Rng>(&mut self, x: i32, rng: &mut R) {
        *self = Self::spawn(x, rng);
    }

    /// First column to the right of the obstacle.
    pub fn trailing_edge(&self) -> i32 {
        self.x + OBSTACLE_WIDTH
    }

    /// First row of the bottom spike.
    pub fn bottom_spike_top(&self) -> i32 {
        SCREEN_HEIGHT as i32 - self.gap_bottom
    }
}

/// Which of the three screens the loop is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Menu,
    Playing,
    GameOver,
}

/// Complete state of one game process.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub bird: Bird,
    pub obstacles: [Obstacle; OBSTACLE_COUNT],
    pub score: u32,
    /// False until the player leaves the menu. Stays true across restarts.
    pub started: bool,
    pub game_over: bool,
    /// Sleep between frames, derived from the score.
    pub tick_delay_us: u64,
    /// Simulation ticks since obstacles last moved.
    pub scroll_counter: u32,
    pub config: GameConfig,
}

impl GameState {
    /// Fresh game sitting on the menu screen.
    pub fn new<R: Rng>(config: GameConfig, rng: &mut R) -> Self {
        let obstacles = std::array::from_fn(|i| {
            Obstacle::spawn(SCREEN_WIDTH as i32 + i as i32 * OBSTACLE_SPACING, rng)
        });
        Self {
            bird: Bird::new(),
            obstacles,
            score: 0,
            started: false,
            game_over: false,
            tick_delay_us: BASE_TICK_DELAY_US,
            scroll_counter: 0,
            config,
        }
    }

    pub fn phase(&self) -> GamePhase {
        match (self.started, self.game_over) {
            (false, _) => GamePhase::Menu,
            (true, false) => GamePhase::Playing,
            (true, true) => GamePhase::GameOver,
        }
    }

    /// Reset everything back to a new game, skipping the menu.
    pub fn restart<R: Rng>(&mut self, rng: &mut R) {
        let config = self.config.clone();
        *self = Self::new(config, rng);
        self.started = true;
    }
}
