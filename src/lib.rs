//! Tile Arcade - two tiny arcade games sharing one harness
//!
//! Core modules:
//! - `sim`: Deterministic simulation (collisions, paddle game, snake game)
//! - `input`: Keyboard events and per-game input mappers
//! - `games`: `Game` implementations binding input, sim and frame building
//! - `harness`: Window, event loop and fixed-cadence stepping
//! - `renderer`: Frame description and the wgpu solid-rect pipeline
//! - `settings`: Runtime settings loaded from JSON

pub mod error;
pub mod games;
pub mod harness;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Paddle game tuning (pixels, pixels per tick)
    pub mod pong {
        pub const WINDOW_WIDTH: i32 = 540;
        pub const WINDOW_HEIGHT: i32 = 480;

        pub const PADDLE_WIDTH: i32 = 12;
        pub const PADDLE_HEIGHT: i32 = 64;
        /// Gap between a paddle and its side wall
        pub const PADDLE_MARGIN: i32 = 10;
        pub const PADDLE_SPEED: i32 = 3;

        pub const BALL_SIZE: i32 = 15;
        pub const BALL_SPEED: f32 = 5.0;

        /// Fixed simulation timestep (one tick per 60 Hz frame)
        pub const SIM_DT: f32 = 1.0 / 60.0;
        /// Maximum substeps per frame to prevent spiral of death
        pub const MAX_SUBSTEPS: u32 = 4;
    }

    /// Snake game tuning (pixels, milliseconds)
    pub mod snake {
        pub const WINDOW_WIDTH: i32 = 960;
        pub const WINDOW_HEIGHT: i32 = 820;

        pub const TILE_SIZE: i32 = 20;
        pub const BORDER_WIDTH: i32 = TILE_SIZE;

        /// Minimum time between two moves
        pub const FRAME_LENGTH_MS: u32 = 82;
        /// Moves during which the tail is kept after eating
        pub const GROWTH_DELAY: u32 = 5;

        /// Initial snake: tail column, length and row (in tiles)
        pub const START_COLUMN: i32 = 3;
        pub const START_LENGTH: usize = 6;
        pub const START_ROW: i32 = 10;
    }
}
