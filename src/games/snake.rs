//! Snake game: eat the target, avoid the border and yourself

use crate::consts::snake::*;
use crate::harness::Game;
use crate::input::{InputEvent, SnakeInput};
use crate::renderer::{Frame, colors};
use crate::settings::Settings;
use crate::sim::Rect;
use crate::sim::snake::{SnakeState, advance_time, tile_rect};

pub struct SnakeGame {
    pub state: SnakeState,
    input: SnakeInput,
}

impl SnakeGame {
    pub fn new(seed: u64) -> Self {
        log::info!("Snake seed: {seed}");
        Self {
            state: SnakeState::new(seed),
            input: SnakeInput::default(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut game = Self::new(settings.effective_seed());
        game.state.log_body = settings.log_snake_body;
        game
    }

    /// The four border bars, left, top, right, bottom
    pub fn border() -> [Rect; 4] {
        [
            Rect::new(0, 0, BORDER_WIDTH, WINDOW_HEIGHT),
            Rect::new(0, 0, WINDOW_WIDTH, BORDER_WIDTH),
            Rect::new(WINDOW_WIDTH - BORDER_WIDTH, 0, BORDER_WIDTH, WINDOW_HEIGHT),
            Rect::new(0, WINDOW_HEIGHT - BORDER_WIDTH, WINDOW_WIDTH, BORDER_WIDTH),
        ]
    }
}

impl Game for SnakeGame {
    fn title(&self) -> &str {
        "SNAKE"
    }

    fn size(&self) -> (u32, u32) {
        (WINDOW_WIDTH as u32, WINDOW_HEIGHT as u32)
    }

    fn handle_input(&mut self, event: InputEvent) {
        self.input.handle(event);
    }

    fn step(&mut self, dt: f32) {
        let dt_ms = (dt * 1000.0).max(0.0).round() as u32;
        advance_time(&mut self.state, self.input.direction(), dt_ms);
    }

    fn render(&self, frame: &mut Frame) {
        frame.clear = colors::NAVY;
        for bar in Self::border() {
            frame.fill(bar, colors::RED);
        }
        for segment in self.state.snake.segments().rev() {
            frame.fill(tile_rect(segment), colors::WHITE);
        }
        frame.fill(tile_rect(self.state.target.pos), colors::RED);
    }

    fn is_over(&self) -> bool {
        self.state.is_over()
    }
}
