//! Game state machine: input dispatch per phase and the per-tick simulation.

use super::difficulty::tick_delay_us;
use super::evolution::evolve;
use super::obstacles::advance;
use super::physics::{apply_impulse, update_bird};
use super::types::{GamePhase, GameState};
use log::{debug, info};
use rand::Rng;

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Space: start from the menu, or jump while playing.
    Jump,
    /// R: new game after a crash.
    Restart,
    /// Q: leave after a crash.
    Quit,
    /// Any other key.
    Other,
}

/// Whether the loop should keep running after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Everything that happened during one simulation tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// Points scored this tick.
    pub scored: u32,
    /// Bird touched the top or bottom border.
    pub out_of_bounds: bool,
    /// Bird touched a spike.
    pub hit_obstacle: bool,
    /// New evolution level, if it changed.
    pub evolved_to: Option<u8>,
    /// New frame delay, if it changed.
    pub delay_changed_to: Option<u64>,
    /// The game ended this tick.
    pub game_over: bool,
}

/// Apply one key press. Keys that mean nothing in the current phase are ignored.
pub fn process_input<R: Rng>(state: &mut GameState, input: GameInput, rng: &mut R) -> LoopControl {
    match (state.phase(), input) {
        (GamePhase::Menu, GameInput::Jump) => {
            state.started = true;
            info!("game started");
        }
        (GamePhase::Playing, GameInput::Jump) => apply_impulse(&mut state.bird),
        (GamePhase::GameOver, GameInput::Restart) => {
            state.restart(rng);
            info!("game restarted");
        }
        (GamePhase::GameOver, GameInput::Quit) => {
            info!("quit with final score {}", state.score);
            return LoopControl::Quit;
        }
        _ => {}
    }
    LoopControl::Continue
}

/// Run one simulation tick. Does nothing outside the playing phase.
///
/// Order: bird physics and border check, obstacles, evolution, then the
/// frame delay for the new score.
pub fn process_tick<R: Rng>(state: &mut GameState, rng: &mut R) -> TickEvents {
    if state.phase() != GamePhase::Playing {
        return TickEvents::default();
    }

    let mut events = TickEvents {
        out_of_bounds: update_bird(state),
        ..Default::default()
    };

    let outcome = advance(state, rng);
    events.scored = outcome.scored;
    events.hit_obstacle = outcome.collided;

    events.evolved_to = evolve(&mut state.bird, state.score);

    let delay = tick_delay_us(state.score);
    if delay != state.tick_delay_us {
        debug!("frame delay {}us -> {}us", state.tick_delay_us, delay);
        state.tick_delay_us = delay;
        events.delay_changed_to = Some(delay);
    }

    if state.game_over {
        events.game_over = true;
        info!(
            "game over at score {} (level {})",
            state.score, state.bird.evolution_level
        );
    }
    events
}
