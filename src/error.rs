//! Configuration errors
//!
//! Per-tick simulation is total; the only failure is a session that can't
//! be built from its settings.

use std::fmt;

/// Why a set of settings was rejected
#[derive(Debug)]
pub enum ConfigError {
    /// NaN or infinity in a numeric field
    NonFinite { field: &'static str, value: f32 },
    /// A dimension or speed that must be strictly positive wasn't
    NonPositive { field: &'static str, value: f32 },
    /// Paddle would not fit vertically, so it can't be clamped
    PaddleTooTall { paddle_height: f32, arena_height: f32 },
    /// Ball would touch both walls of an axis at once
    BallTooLarge { radius: f32, arena_width: f32, arena_height: f32 },
    /// Paddles must sit inside the arena without meeting in the middle
    PaddlesDontFit { paddle_width: f32, paddle_margin: f32, arena_width: f32 },
    /// A serve velocity component of zero never leaves its axis
    ZeroBallSpeed,
    /// A match to zero points would be over before the first serve
    ZeroWinScore,
    /// Settings file couldn't be read
    Io(std::io::Error),
    /// Settings file wasn't valid JSON for `Settings`
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonFinite { field, value } => {
                write!(f, "{} must be finite, got {}", field, value)
            }
            ConfigError::NonPositive { field, value } => {
                write!(f, "{} must be positive, got {}", field, value)
            }
            ConfigError::PaddleTooTall {
                paddle_height,
                arena_height,
            } => write!(
                f,
                "paddle height {} must be less than arena height {}",
                paddle_height, arena_height
            ),
            ConfigError::BallTooLarge {
                radius,
                arena_width,
                arena_height,
            } => write!(
                f,
                "ball radius {} does not fit a {}x{} arena",
                radius, arena_width, arena_height
            ),
            ConfigError::PaddlesDontFit {
                paddle_width,
                paddle_margin,
                arena_width,
            } => write!(
                f,
                "paddles {} wide with margin {} do not fit an arena {} wide",
                paddle_width, paddle_margin, arena_width
            ),
            ConfigError::ZeroWinScore => write!(f, "win score must be at least 1"),
            ConfigError::ZeroBallSpeed => write!(f, "ball speed must be non-zero on both axes"),
            ConfigError::Io(err) => write!(f, "failed to read settings: {}", err),
            ConfigError::Parse(err) => write!(f, "failed to parse settings: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}
