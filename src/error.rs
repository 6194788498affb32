//! Errors raised while validating the game configuration.

use std::fmt;

/// Playfield geometry that the game cannot run with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// No valid height exists for the top spike.
    EmptyGapRange { screen_height: usize, gap_span: i32 },
    /// The bird's column lies outside the drawable interior.
    BirdOutsidePlayfield { bird_x: i32, screen_width: usize },
    /// Obstacle slots would overlap each other at spawn.
    ObstacleSpacingTooSmall { spacing: i32, width: i32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGapRange {
                screen_height,
                gap_span,
            } => write!(
                f,
                "gap span {gap_span} leaves no room for obstacles on a {screen_height}-row screen"
            ),
            Self::BirdOutsidePlayfield {
                bird_x,
                screen_width,
            } => write!(
                f,
                "bird column {bird_x} is outside the {screen_width}-column playfield"
            ),
            Self::ObstacleSpacingTooSmall { spacing, width } => write!(
                f,
                "obstacle spacing {spacing} is smaller than obstacle width {width}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
