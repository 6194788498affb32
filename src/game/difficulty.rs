//! Game speed as a function of score.
//!
//! The frame delay stays at the base rate until the bird is fully evolved,
//! then drops one step for every further evolution's worth of points, down
//! to a floor of roughly double speed.

use crate::constants::*;

/// Sleep between frames, in microseconds, for `score`.
pub fn tick_delay_us(score: u32) -> u64 {
    let full_evolution_score = SCORE_PER_LEVEL * MAX_EVOLUTION_LEVEL as u32;
    if score < full_evolution_score {
        return BASE_TICK_DELAY_US;
    }
    let steps = ((score - full_evolution_score) / SCORE_PER_LEVEL) as u64;
    BASE_TICK_DELAY_US
        .saturating_sub(steps * TICK_DELAY_STEP_US)
        .max(MIN_TICK_DELAY_US)
}

/// Frames per second implied by a frame delay.
pub fn frames_per_second(delay_us: u64) -> u64 {
    1_000_000 / delay_us.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_before_full_evolution() {
        for score in 0..=25 {
            assert_eq!(tick_delay_us(score), 33_333, "score {}", score);
        }
    }

    #[test]
    fn test_ramp_after_full_evolution() {
        assert_eq!(tick_delay_us(26), 32_333);
        assert_eq!(tick_delay_us(27), 32_333);
        assert_eq!(tick_delay_us(28), 31_333);
        assert_eq!(tick_delay_us(50), 20_333);
        assert_eq!(tick_delay_us(57), 17_333);
    }

    #[test]
    fn test_floor() {
        assert_eq!(tick_delay_us(58), MIN_TICK_DELAY_US);
        assert_eq!(tick_delay_us(1_000), MIN_TICK_DELAY_US);
        assert_eq!(tick_delay_us(u32::MAX), MIN_TICK_DELAY_US);
    }

    #[test]
    fn test_never_increases_with_score() {
        let mut prev = tick_delay_us(0);
        for score in 1..200 {
            let delay = tick_delay_us(score);
            assert!(delay <= prev);
            prev = delay;
        }
    }

    #[test]
    fn test_frames_per_second() {
        assert_eq!(frames_per_second(BASE_TICK_DELAY_US), 30);
        assert_eq!(frames_per_second(MIN_TICK_DELAY_US), 60);
        assert_eq!(frames_per_second(0), 1_000_000);
    }
}
