//! The bird game itself.
//!
//! A bird falls under gravity while the player taps Space to push it
//! upward through a stream of scrolling spike pairs. Each pass scores a
//! point, every two points grow the bird (and its hitbox), and once the
//! bird is fully grown the game speeds up.

pub mod difficulty;
pub mod evolution;
pub mod logic;
pub mod obstacles;
pub mod physics;
pub mod types;

pub use logic::*;
pub use types::*;
