//! Game state and core simulation types
//!
//! Everything a match needs to continue deterministically lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::render::Snapshot;
use crate::settings::Settings;

/// Which half of the arena a paddle or point belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball in play
    Playing,
    /// Frozen until the next pause toggle
    Paused,
    /// A side reached the win score
    GameOver { winner: Side },
}

/// The fixed rectangular playing field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Where the ball is served from
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Centre position
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }
}

/// A player's paddle, an axis-aligned rectangle that only moves vertically
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    /// Width, height
    pub size: Vec2,
    /// Vertical pixels per tick
    pub speed: f32,
}

impl Paddle {
    pub fn new(pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self { pos, size, speed }
    }

    /// Paddle for one side, vertically centred and inset from its wall
    pub fn for_side(side: Side, settings: &Settings) -> Self {
        let size = Vec2::new(settings.paddle_width, settings.paddle_height);
        let x = match side {
            Side::Left => settings.paddle_margin,
            Side::Right => settings.arena_width - settings.paddle_width - settings.paddle_margin,
        };
        let y = (settings.arena_height - settings.paddle_height) / 2.0;
        Self::new(Vec2::new(x, y), size, settings.paddle_speed)
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    /// Vertical centre line
    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Keep the paddle fully inside the arena vertically
    pub fn limit_movement(&mut self, arena: &Arena) {
        if self.pos.y <= 0.0 {
            self.pos.y = 0.0;
        }
        if self.pos.y + self.size.y >= arena.height {
            self.pos.y = arena.height - self.size.y;
        }
    }
}

/// Points per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub left: u32,
    pub right: u32,
}

impl Scores {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Settings the match was built from
    pub settings: Settings,
    pub arena: Arena,
    pub ball: Ball,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub scores: Scores,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Serve direction source
    pub rng: Pcg32,
}

impl GameState {
    /// Create a new match with the given settings and seed
    pub fn new(settings: Settings, seed: u64) -> Result<Self, ConfigError> {
        settings.validate()?;

        let arena = settings.arena();
        let ball = Ball::new(
            arena.center(),
            Vec2::new(settings.ball_speed_x, settings.ball_speed_y),
            settings.ball_radius,
        );

        log::debug!(
            "New match: {}x{} arena, seed {}",
            arena.width,
            arena.height,
            seed
        );

        Ok(Self {
            seed,
            arena,
            ball,
            left_paddle: Paddle::for_side(Side::Left, &settings),
            right_paddle: Paddle::for_side(Side::Right, &settings),
            scores: Scores::default(),
            phase: GamePhase::Playing,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            settings,
        })
    }

    /// Start a fresh match with the same settings and seed
    pub fn restart(&mut self) {
        let arena = self.arena;
        self.ball = Ball::new(
            arena.center(),
            Vec2::new(self.settings.ball_speed_x, self.settings.ball_speed_y),
            self.settings.ball_radius,
        );
        self.left_paddle = Paddle::for_side(Side::Left, &self.settings);
        self.right_paddle = Paddle::for_side(Side::Right, &self.settings);
        self.scores = Scores::default();
        self.phase = GamePhase::Playing;
        self.time_ticks = 0;
        self.rng = Pcg32::seed_from_u64(self.seed);
        log::info!("Match restarted");
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_state(self)
    }
}
