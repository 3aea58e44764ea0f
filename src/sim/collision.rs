//! Collision detection for the rectangular arena
//!
//! Pure geometry: no state is modified here. Response (reflection, clamping)
//! happens in `tick`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Arena, Ball, Paddle, Side};

/// Horizontal arena walls the ball bounces off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Top,
    Bottom,
}

/// Result of a ball/paddle overlap check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Closest point on the paddle to the ball centre
    pub point: Vec2,
    /// Penetration depth
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Which horizontal wall the ball's leading edge has reached, if any
pub fn ball_wall_contact(ball: &Ball, arena: &Arena) -> Option<Wall> {
    if ball.bottom() >= arena.height {
        Some(Wall::Bottom)
    } else if ball.top() <= 0.0 {
        Some(Wall::Top)
    } else {
        None
    }
}

/// Which goal line the ball has crossed, if any
///
/// The right line is checked first, so the result is always a single side.
pub fn ball_goal_contact(ball: &Ball, arena: &Arena) -> Option<Side> {
    if ball.right() >= arena.width {
        Some(Side::Right)
    } else if ball.left() <= 0.0 {
        Some(Side::Left)
    } else {
        None
    }
}

/// Circle vs axis-aligned rectangle overlap
pub fn ball_paddle_collision(ball: &Ball, paddle: &Paddle) -> CollisionResult {
    let closest = ball.pos.clamp(paddle.pos, paddle.max());
    let dist_sq = ball.pos.distance_squared(closest);

    if dist_sq >= ball.radius * ball.radius {
        return CollisionResult::miss();
    }

    CollisionResult {
        hit: true,
        point: closest,
        penetration: ball.radius - dist_sq.sqrt(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> Arena {
        Arena::new(800.0, 600.0)
    }

    fn ball_at(x: f32, y: f32) -> Ball {
        Ball::new(Vec2::new(x, y), Vec2::new(5.0, 5.0), 15.0)
    }

    #[test]
    fn test_wall_contact() {
        assert_eq!(ball_wall_contact(&ball_at(400.0, 300.0), &arena()), None);
        assert_eq!(
            ball_wall_contact(&ball_at(400.0, 585.0), &arena()),
            Some(Wall::Bottom)
        );
        assert_eq!(
            ball_wall_contact(&ball_at(400.0, 10.0), &arena()),
            Some(Wall::Top)
        );
    }

    #[test]
    fn test_goal_contact() {
        assert_eq!(
            ball_goal_contact(&ball_at(810.0, 300.0), &arena()),
            Some(Side::Right)
        );
        assert_eq!(
            ball_goal_contact(&ball_at(15.0, 300.0), &arena()),
            Some(Side::Left)
        );
        assert_eq!(ball_goal_contact(&ball_at(16.0, 300.0), &arena()), None);
    }

    #[test]
    fn test_paddle_face_hit() {
        let paddle = Paddle::new(Vec2::new(765.0, 240.0), Vec2::new(25.0, 120.0), 6.0);

        // Edge 5px into the left face
        let result = ball_paddle_collision(&ball_at(755.0, 300.0), &paddle);
        assert!(result.hit);
        assert_eq!(result.point, Vec2::new(765.0, 300.0));
        assert!((result.penetration - 5.0).abs() < 0.001);

        // Just short of the face
        let result = ball_paddle_collision(&ball_at(749.0, 300.0), &paddle);
        assert!(!result.hit);
    }

    #[test]
    fn test_paddle_corner_miss() {
        let paddle = Paddle::new(Vec2::new(765.0, 240.0), Vec2::new(25.0, 120.0), 6.0);

        // Inside the bounding box of the expanded rectangle but outside the
        // rounded corner region
        let result = ball_paddle_collision(&ball_at(754.0, 229.0), &paddle);
        assert!(!result.hit);

        let result = ball_paddle_collision(&ball_at(758.0, 233.0), &paddle);
        assert!(result.hit);
    }
}
