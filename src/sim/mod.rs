//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed step only (velocities are per tick)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod cpu;
pub mod state;
pub mod tick;

pub use collision::{
    CollisionResult, Wall, ball_goal_contact, ball_paddle_collision, ball_wall_contact,
};
pub use state::{Arena, Ball, GamePhase, GameState, Paddle, Scores, Side};
pub use tick::{
    Direction, PaddleControl, ScoreEvent, TickInput, advance_ball, apply_score, bounce_off_paddle,
    check_scoring, move_paddle, reset_ball, tick,
};
