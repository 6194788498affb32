//! The frame loop: poll one key, simulate, draw, flush, sleep.

use crate::config::GameConfig;
use crate::game::{process_input, process_tick, GameInput, GameState, LoopControl, TickEvents};
use crate::input::{InputSource, TerminalInput};
use crate::render::draw_frame;
use crate::screen::ScreenBuffer;
use crate::terminal::TerminalGuard;
use log::info;
use rand::Rng;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// One running game: its state, frame buffer, and random source.
pub struct Session<R: Rng> {
    pub state: GameState,
    pub screen: ScreenBuffer,
    rng: R,
}

impl<R: Rng> Session<R> {
    pub fn new(config: GameConfig, mut rng: R) -> Self {
        let state = GameState::new(config, &mut rng);
        Self {
            state,
            screen: ScreenBuffer::new(),
            rng,
        }
    }

    /// One loop iteration without the sleep. Returns `Quit` before drawing
    /// when the player leaves.
    pub fn step(
        &mut self,
        input: Option<GameInput>,
        out: &mut impl Write,
    ) -> io::Result<(LoopControl, TickEvents)> {
        if let Some(input) = input {
            if process_input(&mut self.state, input, &mut self.rng) == LoopControl::Quit {
                return Ok((LoopControl::Quit, TickEvents::default()));
            }
        }

        let events = process_tick(&mut self.state, &mut self.rng);

        draw_frame(&self.state, &mut self.screen);
        self.screen.render(out)?;
        Ok((LoopControl::Continue, events))
    }

    pub fn frame_delay(&self) -> Duration {
        Duration::from_micros(self.state.tick_delay_us)
    }

    /// Run until the player quits.
    pub fn run(&mut self, input: &mut impl InputSource, out: &mut impl Write) -> io::Result<()> {
        loop {
            let key = input.poll_input()?;
            let (control, _) = self.step(key, out)?;
            if control == LoopControl::Quit {
                return Ok(());
            }
            thread::sleep(self.frame_delay());
        }
    }
}

/// Play on the real terminal. The terminal is restored on every exit path.
pub fn run(config: GameConfig) -> io::Result<()> {
    let rng = config.make_rng();
    let mut session = Session::new(config, rng);

    let _guard = TerminalGuard::enter()?;
    info!("entering game loop");
    session.run(&mut TerminalInput, &mut io::stdout())
}
