//! Snake game simulation
//!
//! The body is a deque of tile positions, head at the front. A move pushes a
//! new head and evicts the tail unless growth is pending. Moves are gated by
//! elapsed wall-clock time so the snake crawls at a fixed pace regardless of
//! frame rate.

use std::collections::VecDeque;
use std::fmt;

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::snake::*;

/// Movement mode of the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    /// Not moving yet
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Offset of one tile in this direction
    pub fn offset(self) -> IVec2 {
        match self {
            Direction::None => IVec2::ZERO,
            Direction::Up => IVec2::new(0, -TILE_SIZE),
            Direction::Down => IVec2::new(0, TILE_SIZE),
            Direction::Left => IVec2::new(-TILE_SIZE, 0),
            Direction::Right => IVec2::new(TILE_SIZE, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::None => Direction::None,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Current phase of the snake game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnakePhase {
    Running,
    /// Hit a wall or itself
    GameOver,
}

/// Interior of the border, where the snake and target live
pub fn playfield() -> Rect {
    Rect::new(
        BORDER_WIDTH,
        BORDER_WIDTH,
        WINDOW_WIDTH - 2 * BORDER_WIDTH,
        WINDOW_HEIGHT - 2 * BORDER_WIDTH,
    )
}

/// Rectangle covered by the tile at `pos`
pub fn tile_rect(pos: IVec2) -> Rect {
    Rect {
        pos,
        size: IVec2::splat(TILE_SIZE),
    }
}

/// True if the tile at `pos` sticks out of the playfield
pub fn out_of_bounds(pos: IVec2) -> bool {
    !tile_rect(pos).within(&playfield())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    /// Segments from head (front) to tail (back), never empty
    body: VecDeque<IVec2>,
    /// Moves left during which the tail is kept
    growth_delay: u32,
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}

impl Snake {
    /// Horizontal snake on `START_ROW`, tail at `START_COLUMN`, facing right
    pub fn new() -> Self {
        let y = START_ROW * TILE_SIZE;
        let body = (0..START_LENGTH as i32)
            .rev()
            .map(|i| IVec2::new((START_COLUMN + i) * TILE_SIZE, y))
            .collect();
        Self {
            body,
            growth_delay: 0,
        }
    }

    /// Build a snake from segments listed head first. Returns `None` for an
    /// empty list.
    pub fn from_segments(segments: impl IntoIterator<Item = IVec2>) -> Option<Self> {
        let body: VecDeque<IVec2> = segments.into_iter().collect();
        if body.is_empty() {
            return None;
        }
        Some(Self {
            body,
            growth_delay: 0,
        })
    }

    pub fn head(&self) -> IVec2 {
        self.body[0]
    }

    pub fn tail(&self) -> IVec2 {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Segments from head to tail
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = IVec2> + '_ {
        self.body.iter().copied()
    }

    pub fn growth_delay(&self) -> u32 {
        self.growth_delay
    }

    /// Keep the tail for the next `moves` moves
    pub fn grow(&mut self, moves: u32) {
        self.growth_delay = moves;
    }

    /// Move one tile. Returns false if `direction` is `None`.
    pub fn advance(&mut self, direction: Direction) -> bool {
        if direction == Direction::None {
            return false;
        }
        self.body.push_front(self.head() + direction.offset());
        if self.growth_delay > 0 {
            self.growth_delay -= 1;
        } else {
            self.body.pop_back();
        }
        true
    }

    /// True if the head shares a tile with any other segment
    pub fn hits_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&segment| segment == head)
    }
}

impl fmt::Display for Snake {
    /// Segments from tail to head, `(x,y)` each
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.body.iter().rev().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "({},{})", segment.x, segment.y)?;
        }
        Ok(())
    }
}

/// The tile the snake is chasing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub pos: IVec2,
}

impl Target {
    /// Number of tiles across and down the playfield
    pub fn grid() -> (i32, i32) {
        let field = playfield();
        (field.size.x / TILE_SIZE, field.size.y / TILE_SIZE)
    }

    /// Target on the `index`-th playfield tile, row-major
    pub fn at_index(index: u32) -> Self {
        let (cols, _) = Self::grid();
        let index = index as i32;
        let col = index % cols;
        let row = index / cols;
        Self {
            pos: IVec2::new(BORDER_WIDTH + col * TILE_SIZE, BORDER_WIDTH + row * TILE_SIZE),
        }
    }

    /// Uniformly random playfield tile. Tiles under the snake are not excluded.
    pub fn random(rng: &mut impl Rng) -> Self {
        let (cols, rows) = Self::grid();
        Self::at_index(rng.random_range(0..(cols * rows) as u32))
    }
}

/// Complete snake game state
#[derive(Debug, Clone)]
pub struct SnakeState {
    pub snake: Snake,
    pub target: Target,
    pub phase: SnakePhase,
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    /// Milliseconds accumulated since the last move
    pub elapsed_ms: u32,
    /// Moves made so far
    pub moves: u64,
    /// Dump the body at debug level after every move
    pub log_body: bool,
}

impl SnakeState {
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let target = Target::random(&mut rng);
        Self {
            snake: Snake::new(),
            target,
            phase: SnakePhase::Running,
            seed,
            rng,
            elapsed_ms: 0,
            moves: 0,
            log_body: false,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == SnakePhase::GameOver
    }

    /// Move the target to a fresh random tile
    pub fn relocate_target(&mut self) {
        self.target = Target::random(&mut self.rng);
        log::debug!("Target moved to ({},{})", self.target.pos.x, self.target.pos.y);
    }
}

/// Accumulate `dt_ms` and make one move once more than a frame length has
/// passed. Returns true if a step ran.
pub fn advance_time(state: &mut SnakeState, direction: Direction, dt_ms: u32) -> bool {
    state.elapsed_ms = state.elapsed_ms.saturating_add(dt_ms);
    if state.elapsed_ms <= FRAME_LENGTH_MS {
        return false;
    }
    state.elapsed_ms = 0;
    tick(state, direction);
    true
}

/// Make one move in `direction` and resolve walls, self-collision and eating
pub fn tick(state: &mut SnakeState, direction: Direction) {
    if state.is_over() {
        return;
    }

    if state.snake.advance(direction) {
        state.moves += 1;
        if state.log_body {
            log::debug!("{}", state.snake);
        }
    }

    let head = state.snake.head();
    if out_of_bounds(head) || state.snake.hits_itself() {
        state.phase = SnakePhase::GameOver;
        log::info!(
            "Snake died at ({},{}) after {} moves, length {}",
            head.x,
            head.y,
            state.moves,
            state.snake.len()
        );
        return;
    }

    if head == state.target.pos {
        state.snake.grow(GROWTH_DELAY);
        log::debug!("Target eaten, length {}", state.snake.len());
        state.relocate_target();
    }
}
