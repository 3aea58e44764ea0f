//! Fixed timestep simulation tick
//!
//! Each operation is a total function over plain state. `tick` composes them
//! in a fixed order: paddles, ball and walls, paddle bounces, scoring.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{Wall, ball_goal_contact, ball_paddle_collision, ball_wall_contact};
use super::cpu;
use super::state::{Arena, Ball, GamePhase, GameState, Paddle, Scores, Side};

/// Vertical paddle command for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    #[default]
    Idle,
}

impl Direction {
    /// Screen-space sign (y grows downward)
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Up => -1.0,
            Direction::Down => 1.0,
            Direction::Idle => 0.0,
        }
    }
}

/// Who drives a paddle this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaddleControl {
    /// Direction read from a player's input device
    Human(Direction),
    /// Built-in opponent tracks the ball
    Cpu,
}

impl Default for PaddleControl {
    fn default() -> Self {
        PaddleControl::Human(Direction::Idle)
    }
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub left: PaddleControl,
    pub right: PaddleControl,
    /// Pause toggle
    pub pause: bool,
    /// Start a new match once the current one is over
    pub restart: bool,
}

/// A goal line was crossed; `side` is credited with the point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEvent {
    pub side: Side,
}

/// Move the ball one step and bounce it off the top/bottom walls
///
/// The ball is clamped back inside the arena and its vertical velocity is
/// pointed away from the wall it touched.
pub fn advance_ball(ball: &mut Ball, arena: &Arena) -> Option<Wall> {
    ball.pos += ball.vel;

    let wall = ball_wall_contact(ball, arena)?;
    match wall {
        Wall::Bottom => {
            ball.vel.y = -ball.vel.y.abs();
            ball.pos.y = arena.height - ball.radius;
        }
        Wall::Top => {
            ball.vel.y = ball.vel.y.abs();
            ball.pos.y = ball.radius;
        }
    }
    log::debug!("Ball bounced off {:?} wall at x={:.1}", wall, ball.pos.x);
    Some(wall)
}

/// Emit a score event if the ball has crossed a goal line
///
/// Crossing the right line credits the right side, the left line the left
/// side. Never more than one event per call.
pub fn check_scoring(ball: &Ball, arena: &Arena) -> Option<ScoreEvent> {
    ball_goal_contact(ball, arena).map(|side| ScoreEvent { side })
}

/// Serve the ball again from the centre with random signs
///
/// Speed magnitudes are kept per axis; only the signs change. A component
/// that has somehow reached zero is restored from `serve_speed`.
pub fn reset_ball<R: Rng + ?Sized>(
    ball: &mut Ball,
    arena: &Arena,
    serve_speed: Vec2,
    rng: &mut R,
) {
    ball.pos = arena.center();

    let magnitude = ball.vel.abs();
    let serve = serve_speed.abs();
    let magnitude = Vec2::new(
        if magnitude.x > 0.0 { magnitude.x } else { serve.x },
        if magnitude.y > 0.0 { magnitude.y } else { serve.y },
    );
    let sign_x = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
    let sign_y = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
    ball.vel = magnitude * Vec2::new(sign_x, sign_y);

    log::debug!("Ball served with velocity {:?}", ball.vel);
}

/// Move a paddle by its speed and keep it inside the arena
pub fn move_paddle(paddle: &mut Paddle, direction: Direction, arena: &Arena) {
    paddle.pos.y += direction.sign() * paddle.speed;
    paddle.limit_movement(arena);
}

/// Credit exactly one point for an event
pub fn apply_score(scores: &mut Scores, event: ScoreEvent) {
    match event.side {
        Side::Left => scores.left += 1,
        Side::Right => scores.right += 1,
    }
}

/// Reflect the ball off a paddle face
///
/// Only counts while the ball travels toward the paddle from the field side,
/// so a ball still overlapping after a bounce is not caught twice and a ball
/// already behind the paddle is not pulled back into play.
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle, side: Side) -> bool {
    if !ball_paddle_collision(ball, paddle).hit {
        return false;
    }

    let face_center_x = paddle.pos.x + paddle.size.x / 2.0;
    let approaching = match side {
        Side::Left => ball.vel.x < 0.0 && ball.pos.x > face_center_x,
        Side::Right => ball.vel.x > 0.0 && ball.pos.x < face_center_x,
    };
    if !approaching {
        return false;
    }

    ball.vel.x = -ball.vel.x;
    ball.pos.x = match side {
        Side::Left => paddle.max().x + ball.radius,
        Side::Right => paddle.pos.x - ball.radius,
    };
    true
}

fn resolve_direction(control: PaddleControl, paddle: &Paddle, ball: &Ball) -> Direction {
    match control {
        PaddleControl::Human(direction) => direction,
        PaddleControl::Cpu => cpu::steer(paddle, ball),
    }
}

/// Advance the match by one step
///
/// Returns the point scored this tick, if any.
pub fn tick(state: &mut GameState, input: &TickInput) -> Option<ScoreEvent> {
    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                return None;
            }
            GamePhase::Paused => state.phase = GamePhase::Playing,
            GamePhase::GameOver { .. } => {}
        }
    }

    match state.phase {
        GamePhase::Paused => return None,
        GamePhase::GameOver { .. } => {
            if input.restart {
                state.restart();
            }
            return None;
        }
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;

    let left = resolve_direction(input.left, &state.left_paddle, &state.ball);
    let right = resolve_direction(input.right, &state.right_paddle, &state.ball);
    move_paddle(&mut state.left_paddle, left, &state.arena);
    move_paddle(&mut state.right_paddle, right, &state.arena);

    advance_ball(&mut state.ball, &state.arena);

    if bounce_off_paddle(&mut state.ball, &state.left_paddle, Side::Left)
        || bounce_off_paddle(&mut state.ball, &state.right_paddle, Side::Right)
    {
        log::debug!("Paddle hit at tick {}", state.time_ticks);
    }

    let event = check_scoring(&state.ball, &state.arena)?;
    apply_score(&mut state.scores, event);
    let serve_speed = Vec2::new(state.settings.ball_speed_x, state.settings.ball_speed_y);
    reset_ball(&mut state.ball, &state.arena, serve_speed, &mut state.rng);

    let points = state.scores.get(event.side);
    log::info!(
        "{:?} scores, now on {} ({} - {})",
        event.side,
        points,
        state.scores.left,
        state.scores.right
    );

    // Only the side that just scored can have reached the target
    if state.settings.win_score.is_some_and(|target| points >= target) {
        state.phase = GamePhase::GameOver { winner: event.side };
        log::info!("{:?} wins at tick {}", event.side, state.time_ticks);
    }

    Some(event)
}
