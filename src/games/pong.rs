//! Paddle game: two players, one ball, no score

use crate::consts::pong::*;
use crate::harness::Game;
use crate::input::{InputEvent, PaddleInput};
use crate::renderer::{Frame, colors};
use crate::sim::pong::{PongState, tick};

pub struct PongGame {
    pub state: PongState,
    input: PaddleInput,
    /// Seconds not yet consumed by fixed ticks
    accumulator: f32,
}

impl Default for PongGame {
    fn default() -> Self {
        Self::new()
    }
}

impl PongGame {
    pub fn new() -> Self {
        Self {
            state: PongState::new(),
            input: PaddleInput::default(),
            accumulator: 0.0,
        }
    }

    /// Run one fixed tick with the current paddle intents
    fn fixed_tick(&mut self) {
        self.state.left.vel = self.input.left.velocity(PADDLE_SPEED);
        self.state.right.vel = self.input.right.velocity(PADDLE_SPEED);
        tick(&mut self.state);
    }
}

impl Game for PongGame {
    fn title(&self) -> &str {
        "PONG"
    }

    fn size(&self) -> (u32, u32) {
        (WINDOW_WIDTH as u32, WINDOW_HEIGHT as u32)
    }

    fn handle_input(&mut self, event: InputEvent) {
        self.input.handle(event);
    }

    fn step(&mut self, dt: f32) {
        self.accumulator += dt;
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.fixed_tick();
            self.accumulator -= SIM_DT;
            substeps += 1;
            if self.state.is_over() {
                break;
            }
        }
        // Drop the backlog after a stall instead of fast-forwarding
        if substeps == MAX_SUBSTEPS {
            self.accumulator = 0.0;
        }
    }

    fn render(&self, frame: &mut Frame) {
        frame.clear = colors::NAVY;
        frame.fill(self.state.left.rect, colors::WHITE);
        frame.fill(self.state.right.rect, colors::WHITE);
        frame.fill(self.state.ball.rect, colors::WHITE);
    }

    fn is_over(&self) -> bool {
        self.state.is_over()
    }
}
