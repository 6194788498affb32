//! Flappy Terminal - a bird-and-spikes arcade game for the terminal.
//!
//! This module exposes the game logic for testing and for the binary.

pub mod app;
pub mod build_info;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod input;
pub mod render;
pub mod screen;
pub mod terminal;

pub use config::GameConfig;
pub use constants::*;
pub use error::ConfigError;
pub use game::{GameInput, GamePhase, GameState, LoopControl, TickEvents};
pub use screen::ScreenBuffer;
