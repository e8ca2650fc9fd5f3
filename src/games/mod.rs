//! The two games, as `Game` implementations for the harness

pub mod pong;
pub mod snake;

pub use pong::PongGame;
pub use snake::SnakeGame;
