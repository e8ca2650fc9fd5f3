//! Shared game harness
//!
//! Both games plug into the same loop: poll input, step the simulation, stop
//! on a terminal state, otherwise render and present. `Session` holds that
//! loop's logic independent of any window so it can be driven from tests;
//! `run` wires it to winit and wgpu.

mod app;

use std::process::ExitCode;

use crate::error::Result;
use crate::input::{InputEvent, Key};
use crate::renderer::{Frame, colors};
use crate::settings::Settings;

/// A game the harness can drive
pub trait Game {
    /// Window title
    fn title(&self) -> &str;

    /// Window size in pixels; also the game's coordinate space
    fn size(&self) -> (u32, u32);

    /// Feed one input event to the game's input mapper
    fn handle_input(&mut self, event: InputEvent);

    /// Advance by `dt` seconds of wall-clock time. Each game decides how many
    /// simulation ticks that amounts to.
    fn step(&mut self, dt: f32);

    /// Describe the current state
    fn render(&self, frame: &mut Frame);

    /// Terminal state reached
    fn is_over(&self) -> bool;
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Window closed or Escape pressed
    Quit,
    /// The game reached its terminal state
    GameOver,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Quit => ExitCode::SUCCESS,
            Outcome::GameOver => ExitCode::FAILURE,
        }
    }
}

/// One play session: a game plus the loop bookkeeping around it
pub struct Session<G: Game> {
    game: G,
    frame: Frame,
    outcome: Option<Outcome>,
}

impl<G: Game> Session<G> {
    pub fn new(game: G) -> Self {
        Self {
            game,
            frame: Frame::new(colors::NAVY),
            outcome: None,
        }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Route one input event. Quit requests end the session; everything else
    /// goes to the game.
    pub fn handle(&mut self, event: InputEvent) {
        if self.outcome.is_some() {
            return;
        }
        match event {
            InputEvent::Quit | InputEvent::KeyDown(Key::Escape) => {
                log::info!("Quit requested");
                self.outcome = Some(Outcome::Quit);
            }
            event => self.game.handle_input(event),
        }
    }

    /// Step the game. Returns the outcome once the game is over.
    pub fn advance(&mut self, dt: f32) -> Option<Outcome> {
        if self.outcome.is_none() {
            self.game.step(dt);
            if self.game.is_over() {
                self.outcome = Some(Outcome::GameOver);
            }
        }
        self.outcome
    }

    /// Rebuild and return the frame for the current state
    pub fn draw(&mut self) -> &Frame {
        self.frame.reset(colors::NAVY);
        self.game.render(&mut self.frame);
        &self.frame
    }
}

/// Open a window for `game` and run it until quit or game over
pub fn run<G: Game>(game: G, settings: &Settings) -> Result<Outcome> {
    app::run(Session::new(game), settings)
}

/// Report a finished run on stderr and map it to a process exit code
pub fn finish(result: Result<Outcome>) -> ExitCode {
    match result {
        Ok(Outcome::Quit) => {
            log::info!("Bye");
            Outcome::Quit.exit_code()
        }
        Ok(Outcome::GameOver) => {
            eprintln!("GAME OVER!");
            Outcome::GameOver.exit_code()
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
