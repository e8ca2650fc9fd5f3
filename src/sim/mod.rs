//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Integer positions only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod pong;
pub mod snake;

pub use collision::Rect;
pub use pong::{Ball, Paddle, PongPhase, PongState, Side, dy_scale};
pub use snake::{Direction, Snake, SnakePhase, SnakeState, Target, advance_time, out_of_bounds, playfield};
