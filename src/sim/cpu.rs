//! Computer-controlled paddle
//!
//! Follows the ball's height. A dead zone of one step keeps the paddle from
//! jittering around the target.

use super::state::{Ball, Paddle};
use super::tick::Direction;

/// Pick a direction that brings the paddle centre toward the ball
pub fn steer(paddle: &Paddle, ball: &Ball) -> Direction {
    let offset = ball.pos.y - paddle.center_y();
    if offset.abs() <= paddle.speed {
        Direction::Idle
    } else if offset < 0.0 {
        Direction::Up
    } else {
        Direction::Down
    }
}
