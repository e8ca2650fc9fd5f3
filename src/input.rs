//! Keyboard input and per-game input mappers
//!
//! The harness turns platform events into `InputEvent`s; each game feeds them
//! through its mapper to get a movement intent.

use serde::{Deserialize, Serialize};

use crate::sim::Direction;

/// Keys the games care about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    W,
    S,
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// Window closed or quit requested
    Quit,
}

/// Movement intent for one paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaddleMove {
    #[default]
    None,
    Up,
    Down,
}

impl PaddleMove {
    /// Vertical velocity for this intent (screen y grows downward)
    pub fn velocity(self, speed: i32) -> i32 {
        match self {
            PaddleMove::None => 0,
            PaddleMove::Up => -speed,
            PaddleMove::Down => speed,
        }
    }
}

/// Paddle game mapper: `W`/`S` drive the left paddle, arrows the right one.
/// Releasing either key of a pair stops that paddle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleInput {
    pub left: PaddleMove,
    pub right: PaddleMove,
}

impl PaddleInput {
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(Key::Up) => self.right = PaddleMove::Up,
            InputEvent::KeyDown(Key::Down) => self.right = PaddleMove::Down,
            InputEvent::KeyDown(Key::W) => self.left = PaddleMove::Up,
            InputEvent::KeyDown(Key::S) => self.left = PaddleMove::Down,
            InputEvent::KeyUp(Key::Up | Key::Down) => self.right = PaddleMove::None,
            InputEvent::KeyUp(Key::W | Key::S) => self.left = PaddleMove::None,
            _ => {}
        }
    }
}

/// Snake game mapper: arrows set a persistent direction. A key opposite to the
/// current direction is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SnakeInput {
    direction: Direction,
}

impl SnakeInput {
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn handle(&mut self, event: InputEvent) {
        let wanted = match event {
            InputEvent::KeyDown(Key::Up) => Direction::Up,
            InputEvent::KeyDown(Key::Down) => Direction::Down,
            InputEvent::KeyDown(Key::Left) => Direction::Left,
            InputEvent::KeyDown(Key::Right) => Direction::Right,
            _ => return,
        };
        if wanted != self.direction.opposite() {
            self.direction = wanted;
        }
    }
}
