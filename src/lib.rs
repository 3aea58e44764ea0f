//! Paddle Duel - a two-player Pong simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, paddles, scoring, game state)
//! - `render`: Read-only snapshots and the drawing capability
//! - `settings`: Data-driven arena and entity configuration
//! - `error`: Configuration errors

pub mod error;
pub mod render;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use render::{Canvas, Drawable, Snapshot};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 15.0;
    /// Pixels per tick on each axis
    pub const BALL_SPEED: f32 = 5.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 25.0;
    pub const PADDLE_HEIGHT: f32 = 120.0;
    /// Pixels per tick
    pub const PADDLE_SPEED: f32 = 6.0;
    /// Gap between a paddle and its side wall
    pub const PADDLE_MARGIN: f32 = 10.0;

    /// Nominal frame rate the per-tick speeds are tuned for
    pub const TICKS_PER_SECOND: u32 = 60;
}
