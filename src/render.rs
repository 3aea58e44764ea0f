//! Rendering seam
//!
//! The simulation never draws. A frontend implements `Canvas` and draws a
//! `Snapshot` copied out of the game state each frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{Arena, Ball, GamePhase, GameState, Paddle, Side};

/// Primitive drawing surface supplied by a frontend
pub trait Canvas {
    fn fill_circle(&mut self, center: Vec2, radius: f32);
    fn fill_rect(&mut self, top_left: Vec2, size: Vec2);
    fn line(&mut self, from: Vec2, to: Vec2);
    fn score(&mut self, side: Side, value: u32);
}

/// Anything that can describe itself to a `Canvas`
pub trait Drawable {
    fn draw(&self, canvas: &mut dyn Canvas);
}

impl Drawable for Ball {
    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.fill_circle(self.pos, self.radius);
    }
}

impl Drawable for Paddle {
    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.pos, self.size);
    }
}

/// Read-only copy of everything a frame needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub arena: Arena,
    pub ball: Ball,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub left_score: u32,
    pub right_score: u32,
    pub phase: GamePhase,
    pub tick: u64,
}

impl Snapshot {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            arena: state.arena,
            ball: state.ball.clone(),
            left_paddle: state.left_paddle.clone(),
            right_paddle: state.right_paddle.clone(),
            left_score: state.scores.left,
            right_score: state.scores.right,
            phase: state.phase,
            tick: state.time_ticks,
        }
    }
}

impl Drawable for Snapshot {
    fn draw(&self, canvas: &mut dyn Canvas) {
        let mid_x = self.arena.width / 2.0;
        canvas.line(Vec2::new(mid_x, 0.0), Vec2::new(mid_x, self.arena.height));
        self.ball.draw(canvas);
        self.left_paddle.draw(canvas);
        self.right_paddle.draw(canvas);
        canvas.score(Side::Left, self.left_score);
        canvas.score(Side::Right, self.right_score);
    }
}
