//! Paddle game simulation
//!
//! Integer pixel positions, one tick per frame. The ball never slows down;
//! a round ends as soon as it reaches either side wall.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::pong::*;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PongPhase {
    Playing,
    /// Ball reached a side wall
    GameOver,
}

/// Which side a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    /// Vertical velocity in pixels per tick, set by the input mapper
    pub vel: i32,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        let x = match side {
            Side::Left => PADDLE_MARGIN,
            Side::Right => WINDOW_WIDTH - PADDLE_MARGIN - PADDLE_WIDTH,
        };
        Self {
            rect: Rect::new(x, (WINDOW_HEIGHT - PADDLE_HEIGHT) / 2, PADDLE_WIDTH, PADDLE_HEIGHT),
            vel: 0,
        }
    }

    /// Keep the paddle fully inside the window vertically
    pub fn clamp_to_window(&mut self) {
        self.rect.pos.y = self.rect.pos.y.clamp(0, WINDOW_HEIGHT - self.rect.size.y);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    pub vel: IVec2,
}

impl Default for Ball {
    fn default() -> Self {
        let x = (WINDOW_WIDTH as f32 / 2.0 - BALL_SIZE as f32 / 2.0) as i32;
        let y = (WINDOW_HEIGHT as f32 / 2.0 - BALL_SIZE as f32 / 2.0) as i32;
        Self {
            rect: Rect::new(x, y, BALL_SIZE, BALL_SIZE),
            vel: IVec2::new(-(BALL_SPEED as i32), 0),
        }
    }
}

impl Ball {
    fn advance(&mut self) {
        self.rect.pos += self.vel;
    }
}

/// Complete paddle game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PongState {
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub phase: PongPhase,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl Default for PongState {
    fn default() -> Self {
        Self::new()
    }
}

impl PongState {
    pub fn new() -> Self {
        Self {
            left: Paddle::new(Side::Left),
            right: Paddle::new(Side::Right),
            ball: Ball::default(),
            phase: PongPhase::Playing,
            time_ticks: 0,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == PongPhase::GameOver
    }
}

/// Normalised impact point of the ball along a paddle's height
///
/// `-1.0` at the paddle's top edge, `0.0` at its centre, `1.0` at the bottom.
pub fn dy_scale(ball: &Rect, paddle: &Rect) -> f32 {
    let ball_center = ball.pos.y as f32 + ball.size.y as f32 / 2.0;
    let offset = (ball_center - paddle.pos.y as f32) / paddle.size.y as f32;
    (offset - 0.5) * 2.0
}

/// Move a paddle by its velocity. A paddle that runs into the ball stays put
/// and knocks the ball back along both axes.
fn move_paddle(paddle: &mut Paddle, ball: &mut Ball) {
    paddle.rect.pos.y += paddle.vel;
    if ball.rect.intersects(&paddle.rect) {
        paddle.rect.pos.y -= paddle.vel;
        ball.vel = -ball.vel;
        ball.advance();
    }
    paddle.clamp_to_window();
}

/// Advance the paddle game by one tick
pub fn tick(state: &mut PongState) {
    if state.is_over() {
        return;
    }
    state.time_ticks += 1;

    move_paddle(&mut state.left, &mut state.ball);
    move_paddle(&mut state.right, &mut state.ball);

    let ball = &mut state.ball;

    // Horizontal move; side walls end the round
    ball.rect.pos.x += ball.vel.x;
    if ball.rect.left() <= 0 || ball.rect.right() >= WINDOW_WIDTH {
        state.phase = PongPhase::GameOver;
        log::info!("Ball left the field after {} ticks", state.time_ticks);
        return;
    }

    // Paddle return, angled by where the ball struck
    let struck = if ball.rect.intersects(&state.left.rect) {
        Some(&state.left)
    } else if ball.rect.intersects(&state.right.rect) {
        Some(&state.right)
    } else {
        None
    };
    if let Some(paddle) = struck {
        ball.rect.pos.x -= ball.vel.x;
        ball.vel.x = -ball.vel.x;
        ball.vel.y = (dy_scale(&ball.rect, &paddle.rect) * BALL_SPEED) as i32;
    }

    // Vertical move; top/bottom walls bounce
    ball.rect.pos.y += ball.vel.y;
    if ball.rect.top() <= 0 || ball.rect.bottom() >= WINDOW_HEIGHT {
        ball.rect.pos.y -= ball.vel.y;
        ball.vel.y = -ball.vel.y;
    }

    // Ball slid into a paddle's top or bottom: back out and reverse
    if ball.rect.intersects(&state.left.rect) || ball.rect.intersects(&state.right.rect) {
        ball.rect.pos.y -= ball.vel.y;
        ball.vel = -ball.vel;
        ball.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_initial_layout() {
        let state = PongState::new();
        assert_eq!(state.left.rect, Rect::new(10, 208, 12, 64));
        assert_eq!(state.right.rect, Rect::new(518, 208, 12, 64));
        assert_eq!(state.ball.rect, Rect::new(262, 232, 15, 15));
        assert_eq!(state.ball.vel, IVec2::new(-5, 0));
        assert_eq!(state.phase, PongPhase::Playing);
    }

    #[test]
    fn test_dy_scale_centre_and_edges() {
        let paddle = Rect::new(10, 200, PADDLE_WIDTH, PADDLE_HEIGHT);
        let ball_at = |centre_y: i32| Rect::new(25, centre_y - BALL_SIZE / 2, BALL_SIZE, BALL_SIZE);
        // An odd ball size puts the true centre half a pixel below `centre_y`
        let half_px = 0.5 / PADDLE_HEIGHT as f32 * 2.0;

        assert!((dy_scale(&ball_at(232), &paddle) - half_px).abs() < 1e-6);
        assert!((dy_scale(&ball_at(200), &paddle) - (-1.0 + half_px)).abs() < 1e-6);
        assert!((dy_scale(&ball_at(264), &paddle) - (1.0 + half_px)).abs() < 1e-6);
    }

    /// Place the ball so its next horizontal move lands on the left paddle
    fn state_with_ball_at_left_paddle(ball_y: i32) -> PongState {
        let mut state = PongState::new();
        state.ball.rect.pos = IVec2::new(25, ball_y);
        state.ball.vel = IVec2::new(-5, 0);
        state
    }

    #[test]
    fn test_centre_hit_returns_flat() {
        let mut state = state_with_ball_at_left_paddle(208 + 24);
        tick(&mut state);
        assert_eq!(state.ball.vel, IVec2::new(5, 0));
        assert_eq!(state.ball.rect.pos, IVec2::new(25, 232));
        assert!(!state.is_over());
    }

    #[test]
    fn test_ball_sliding_onto_paddle_top_backs_out() {
        let mut state = PongState::new();
        // Clears the paddle horizontally, then drops onto its top edge
        state.ball.rect.pos = IVec2::new(15, 190);
        state.ball.vel = IVec2::new(5, 4);
        tick(&mut state);
        assert_eq!(state.ball.vel, IVec2::new(-5, -4));
        assert_eq!(state.ball.rect.pos, IVec2::new(15, 186));
        assert!(!state.ball.rect.intersects(&state.left.rect));
        assert!(!state.is_over());
    }

    #[test]
    fn test_top_edge_hit_returns_upward() {
        let mut state = state_with_ball_at_left_paddle(200);
        tick(&mut state);
        assert_eq!(state.ball.vel, IVec2::new(5, -(BALL_SPEED as i32)));
        assert_eq!(state.ball.rect.pos.y, 195);
    }

    #[test]
    fn test_bottom_edge_hit_returns_downward() {
        let mut state = state_with_ball_at_left_paddle(208 + 57);
        tick(&mut state);
        assert_eq!(state.ball.vel, IVec2::new(5, BALL_SPEED as i32));
    }

    #[test]
    fn test_right_paddle_return_points_left() {
        let mut state = PongState::new();
        state.ball.rect.pos = IVec2::new(500, 232);
        state.ball.vel = IVec2::new(5, 0);
        tick(&mut state);
        assert_eq!(state.ball.vel, IVec2::new(-5, 0));
        assert_eq!(state.ball.rect.pos.x, 500);
    }

    #[test]
    fn test_wall_bounce() {
        let mut state = PongState::new();
        state.ball.rect.pos = IVec2::new(262, 3);
        state.ball.vel = IVec2::new(-5, -4);
        tick(&mut state);
        assert_eq!(state.ball.vel, IVec2::new(-5, 4));
        assert_eq!(state.ball.rect.pos, IVec2::new(257, 3));

        state.ball.rect.pos = IVec2::new(262, WINDOW_HEIGHT - BALL_SIZE - 2);
        state.ball.vel = IVec2::new(-5, 4);
        tick(&mut state);
        assert_eq!(state.ball.vel, IVec2::new(-5, -4));
    }

    #[test]
    fn test_side_wall_ends_round_once() {
        let mut state = PongState::new();
        // Park the left paddle out of the way
        state.left.rect.pos.y = 0;
        state.ball.rect.pos = IVec2::new(3, 300);
        tick(&mut state);
        assert!(state.is_over());
        assert_eq!(state.time_ticks, 1);

        state.left.vel = PADDLE_SPEED;
        let frozen = state.clone();
        for _ in 0..10 {
            tick(&mut state);
        }
        assert_eq!(state, frozen);
    }

    #[test]
    fn test_right_wall_ends_round() {
        let mut state = PongState::new();
        state.right.rect.pos.y = 0;
        state.ball.rect.pos = IVec2::new(WINDOW_WIDTH - BALL_SIZE - 3, 300);
        state.ball.vel = IVec2::new(5, 0);
        tick(&mut state);
        assert!(state.is_over());
    }

    #[test]
    fn test_centred_rally_never_ends() {
        let mut state = PongState::new();
        for _ in 0..2_000 {
            tick(&mut state);
        }
        assert!(!state.is_over());
        assert_eq!(state.ball.vel.y, 0);
    }

    #[test]
    fn test_missed_ball_ends_round() {
        let mut state = PongState::new();
        state.left.vel = -PADDLE_SPEED;
        let mut ticks = 0;
        while !state.is_over() && ticks < 200 {
            tick(&mut state);
            ticks += 1;
        }
        assert!(state.is_over());
        assert!(state.left.rect.bottom() < state.ball.rect.top());
    }

    #[test]
    fn test_paddle_running_into_ball_deflects_it() {
        let mut state = PongState::new();
        // Ball just below the left paddle, overlapping it horizontally
        state.ball.rect.pos = IVec2::new(15, 274);
        state.ball.vel = IVec2::new(5, -1);
        state.left.vel = PADDLE_SPEED;
        tick(&mut state);
        assert_eq!(state.left.rect.pos.y, 208);
        assert_eq!(state.ball.vel, IVec2::new(-5, 1));
    }

    #[test]
    fn test_right_paddle_running_into_ball_deflects_it() {
        let mut state = PongState::new();
        state.ball.rect.pos = IVec2::new(505, 274);
        state.ball.vel = IVec2::new(-5, -1);
        state.right.vel = PADDLE_SPEED;
        tick(&mut state);
        // The right paddle is checked against itself, not the left paddle
        assert_eq!(state.right.rect.pos.y, 208);
        assert_eq!(state.ball.vel, IVec2::new(5, 1));
        assert_eq!(state.ball.rect.pos, IVec2::new(515, 276));
    }

    proptest! {
        #[test]
        fn prop_paddles_stay_in_window(
            left_y in -1_000i32..1_000,
            right_y in -1_000i32..1_000,
            left_vel in -50i32..50,
            right_vel in -50i32..50,
            ticks in 1usize..20,
        ) {
            let mut state = PongState::new();
            state.left.rect.pos.y = left_y;
            state.right.rect.pos.y = right_y;
            state.left.vel = left_vel;
            state.right.vel = right_vel;
            for _ in 0..ticks {
                tick(&mut state);
                for paddle in [&state.left, &state.right] {
                    prop_assert!(paddle.rect.top() >= 0);
                    prop_assert!(paddle.rect.top() <= WINDOW_HEIGHT - PADDLE_HEIGHT);
                }
            }
        }
    }
}
