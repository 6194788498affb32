//! Runtime game configuration.

use crate::constants::*;
use crate::error::ConfigError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::ops::RangeInclusive;

/// Fixed playfield geometry that obstacle generation depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playfield {
    pub width: usize,
    pub height: usize,
    pub gap_span: i32,
    pub bird_x: i32,
    pub obstacle_width: i32,
    pub obstacle_spacing: i32,
}

impl Playfield {
    /// The compiled-in 80x20 playfield.
    pub const STANDARD: Playfield = Playfield {
        width: SCREEN_WIDTH,
        height: SCREEN_HEIGHT,
        gap_span: GAP_SPAN,
        bird_x: BIRD_X,
        obstacle_width: OBSTACLE_WIDTH,
        obstacle_spacing: OBSTACLE_SPACING,
    };

    /// Valid heights for an obstacle's top spike. Keeps at least one spike
    /// row on each side of the gap inside the border.
    pub fn gap_top_range(&self) -> RangeInclusive<i32> {
        1..=(self.height as i32 - self.gap_span - 2)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gap_top_range().is_empty() {
            return Err(ConfigError::EmptyGapRange {
                screen_height: self.height,
                gap_span: self.gap_span,
            });
        }
        if self.bird_x < 1 || self.bird_x >= self.width as i32 - 1 {
            return Err(ConfigError::BirdOutsidePlayfield {
                bird_x: self.bird_x,
                screen_width: self.width,
            });
        }
        if self.obstacle_spacing < self.obstacle_width {
            return Err(ConfigError::ObstacleSpacingTooSmall {
                spacing: self.obstacle_spacing,
                width: self.obstacle_width,
            });
        }
        Ok(())
    }
}

/// Options chosen at launch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameConfig {
    /// Suppress every game-over trigger. Scoring and evolution still run.
    pub invincible: bool,
    /// Seed for obstacle gaps (None = random)
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        Playfield::STANDARD.validate()
    }

    /// Build the RNG that drives obstacle gaps for this session.
    pub fn make_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
