//! Bird evolution: the tier table that decides both the sprite and the
//! collision hitbox for each evolution level.

use super::types::{Bird, Glyph};
use crate::constants::*;
use log::debug;

/// How far the hitbox reaches from the bird's `(x, row)` anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitboxExtent {
    pub left: i32,
    pub right: i32,
    pub up: i32,
    pub down: i32,
}

impl HitboxExtent {
    const fn new(left: i32, right: i32, up: i32, down: i32) -> Self {
        Self {
            left,
            right,
            up,
            down,
        }
    }
}

/// Absolute, inclusive hitbox bounds in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hitbox {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

/// One evolution tier. A glyph for level L is the union of the stamps of
/// tiers `0..=L`, so each tier only lists the cell it adds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvolutionTier {
    /// `(row, col)` inside the glyph.
    pub stamp: (usize, usize),
    pub stamp_char: char,
    pub extent: HitboxExtent,
}

const SINGLE: HitboxExtent = HitboxExtent::new(0, 0, 0, 0);
const WIDE: HitboxExtent = HitboxExtent::new(1, 1, 0, 0);
const TALL: HitboxExtent = HitboxExtent::new(1, 2, 0, 1);
const FULL: HitboxExtent = HitboxExtent::new(2, 3, 1, 2);

const fn tier(row: usize, col: usize, extent: HitboxExtent) -> EvolutionTier {
    EvolutionTier {
        stamp: (row, col),
        stamp_char: BODY_CHAR,
        extent,
    }
}

#[rustfmt::skip]
pub const EVOLUTION_TIERS: [EvolutionTier; MAX_EVOLUTION_LEVEL as usize + 1] = [
    tier(3, 1, SINGLE), // 0
    tier(3, 2, WIDE),   // 1
    tier(3, 3, WIDE),   // 2
    tier(2, 0, TALL),   // 3
    tier(2, 1, TALL),   // 4
    tier(2, 2, TALL),   // 5
    tier(2, 3, TALL),   // 6
    tier(1, 1, FULL),   // 7
    tier(1, 2, FULL),   // 8
    tier(1, 3, FULL),   // 9
    tier(0, 1, FULL),   // 10
    tier(0, 2, FULL),   // 11
    EvolutionTier { stamp: (0, 3), stamp_char: BEAK_CHAR, extent: FULL }, // 12
];

/// Evolution level reached at `score`.
pub fn level_for_score(score: u32) -> u8 {
    (score / SCORE_PER_LEVEL).min(MAX_EVOLUTION_LEVEL as u32) as u8
}

pub fn tier_for(level: u8) -> &'static EvolutionTier {
    &EVOLUTION_TIERS[level.min(MAX_EVOLUTION_LEVEL) as usize]
}

/// Build the sprite for `level` from scratch.
pub fn build_glyph(level: u8) -> Glyph {
    let mut glyph = [[' '; GLYPH_COLS]; GLYPH_ROWS];
    for tier in &EVOLUTION_TIERS[..=level.min(MAX_EVOLUTION_LEVEL) as usize] {
        let (row, col) = tier.stamp;
        glyph[row][col] = tier.stamp_char;
    }
    glyph
}

/// Current hitbox of `bird`.
pub fn hitbox(bird: &Bird) -> Hitbox {
    let extent = tier_for(bird.evolution_level).extent;
    let row = bird.row();
    Hitbox {
        left: bird.x - extent.left,
        right: bird.x + extent.right,
        top: row.saturating_sub(extent.up),
        bottom: row.saturating_add(extent.down),
    }
}

/// Bring the bird's level in line with `score`, rebuilding the glyph only
/// when the level actually changes. Returns the new level on change.
pub fn evolve(bird: &mut Bird, score: u32) -> Option<u8> {
    let level = level_for_score(score);
    if level == bird.evolution_level {
        return None;
    }
    debug!(
        "bird evolved from level {} to {} at score {}",
        bird.evolution_level, level, score
    );
    bird.evolution_level = level;
    bird.glyph = build_glyph(level);
    Some(level)
}
