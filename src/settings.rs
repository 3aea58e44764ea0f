//! Match settings
//!
//! Arena size, entity dimensions and speeds. Loaded from an optional JSON
//! file; any missing field falls back to the defaults in `consts`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::Arena;

/// Ball pace presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Pace {
    Relaxed,
    #[default]
    Classic,
    Frantic,
}

impl Pace {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pace::Relaxed => "Relaxed",
            Pace::Classic => "Classic",
            Pace::Frantic => "Frantic",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "relaxed" | "slow" => Some(Pace::Relaxed),
            "classic" | "normal" => Some(Pace::Classic),
            "frantic" | "fast" => Some(Pace::Frantic),
            _ => None,
        }
    }

    /// Ball speed multiplier (1.0 = classic)
    pub fn speed_factor(&self) -> f32 {
        match self {
            Pace::Relaxed => 0.6,
            Pace::Classic => 1.0,
            Pace::Frantic => 1.6,
        }
    }
}

/// Match settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Serve velocity per tick; the sign picks the first serve direction
    pub ball_speed_x: f32,
    pub ball_speed_y: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Vertical pixels per tick
    pub paddle_speed: f32,
    /// Gap between each paddle and its side wall
    pub paddle_margin: f32,

    // === Match ===
    /// First side to reach this many points wins. `None` plays forever.
    pub win_score: Option<u32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: SCREEN_WIDTH,
            arena_height: SCREEN_HEIGHT,

            ball_radius: BALL_RADIUS,
            ball_speed_x: BALL_SPEED,
            ball_speed_y: BALL_SPEED,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_margin: PADDLE_MARGIN,

            win_score: None,
        }
    }
}

impl Settings {
    /// Create settings from a pace preset (default geometry)
    pub fn from_pace(pace: Pace) -> Self {
        let mut settings = Self::default();
        settings.apply_pace(pace);
        settings
    }

    /// Scale the serve speed by a pace preset
    pub fn apply_pace(&mut self, pace: Pace) {
        self.ball_speed_x *= pace.speed_factor();
        self.ball_speed_y *= pace.speed_factor();
    }

    /// Arena bounds described by these settings
    pub fn arena(&self) -> Arena {
        Arena::new(self.arena_width, self.arena_height)
    }

    /// Reject settings that would make clamping or scoring impossible
    pub fn validate(&self) -> Result<(), ConfigError> {
        let numeric = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("ball_radius", self.ball_radius),
            ("ball_speed_x", self.ball_speed_x),
            ("ball_speed_y", self.ball_speed_y),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("paddle_margin", self.paddle_margin),
        ];
        for (field, value) in numeric {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }

        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("ball_radius", self.ball_radius),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if self.paddle_height >= self.arena_height {
            return Err(ConfigError::PaddleTooTall {
                paddle_height: self.paddle_height,
                arena_height: self.arena_height,
            });
        }

        let diameter = self.ball_radius * 2.0;
        if diameter >= self.arena_width || diameter >= self.arena_height {
            return Err(ConfigError::BallTooLarge {
                radius: self.ball_radius,
                arena_width: self.arena_width,
                arena_height: self.arena_height,
            });
        }

        if self.paddle_margin < 0.0
            || 2.0 * (self.paddle_margin + self.paddle_width) >= self.arena_width
        {
            return Err(ConfigError::PaddlesDontFit {
                paddle_width: self.paddle_width,
                paddle_margin: self.paddle_margin,
                arena_width: self.arena_width,
            });
        }

        if self.ball_speed_x == 0.0 || self.ball_speed_y == 0.0 {
            return Err(ConfigError::ZeroBallSpeed);
        }

        if self.win_score == Some(0) {
            return Err(ConfigError::ZeroWinScore);
        }

        Ok(())
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file is missing or bad
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!(
                    "Using default settings ({}: {})",
                    path.as_ref().display(),
                    err
                );
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
        assert!(Settings::from_pace(Pace::Frantic).validate().is_ok());
    }

    #[test]
    fn test_paddle_taller_than_arena_rejected() {
        let settings = Settings {
            paddle_height: 600.0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::PaddleTooTall { .. })
        ));
    }

    #[test]
    fn test_non_positive_rejected() {
        let settings = Settings {
            ball_radius: 0.0,
            ..Default::default()
        };
        match settings.validate() {
            Err(ConfigError::NonPositive { field, .. }) => assert_eq!(field, "ball_radius"),
            other => panic!("expected NonPositive, got {:?}", other),
        }

        let settings = Settings {
            paddle_speed: -6.0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::NonPositive { field: "paddle_speed", .. })
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        let cases = [
            Settings {
                ball_speed_x: f32::NAN,
                ..Default::default()
            },
            Settings {
                ball_speed_y: f32::NEG_INFINITY,
                ..Default::default()
            },
            Settings {
                arena_width: f32::INFINITY,
                ..Default::default()
            },
            Settings {
                arena_height: f32::NAN,
                ..Default::default()
            },
            Settings {
                paddle_margin: f32::NAN,
                ..Default::default()
            },
        ];
        for settings in cases {
            assert!(
                matches!(settings.validate(), Err(ConfigError::NonFinite { .. })),
                "accepted {:?}",
                settings
            );
        }
    }

    #[test]
    fn test_overflowing_json_speed_rejected() {
        // 1e39 is past f32::MAX and parses as infinity
        match Settings::from_json(r#"{ "ball_speed_x": 1e39 }"#) {
            Err(ConfigError::NonFinite { field, .. }) => assert_eq!(field, "ball_speed_x"),
            other => panic!("expected NonFinite, got {:?}", other),
        }
    }

    #[test]
    fn test_paddle_margin_rejected() {
        let settings = Settings {
            paddle_margin: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::PaddlesDontFit { .. })
        ));

        // 2 * (375 + 25) == 800: paddles would meet at the centre line
        let settings = Settings {
            paddle_margin: 375.0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::PaddlesDontFit { .. })
        ));

        let settings = Settings {
            paddle_margin: 0.0,
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_zero_win_score_rejected() {
        let settings = Settings {
            win_score: Some(0),
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(ConfigError::ZeroWinScore)));

        let settings = Settings {
            win_score: Some(1),
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_oversized_ball_and_zero_speed_rejected() {
        let settings = Settings {
            ball_radius: 300.0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::BallTooLarge { .. })
        ));

        let settings = Settings {
            ball_speed_y: 0.0,
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(ConfigError::ZeroBallSpeed)));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "arena_width": 1024, "win_score": 11 }"#).unwrap();
        assert_eq!(settings.arena_width, 1024.0);
        assert_eq!(settings.arena_height, SCREEN_HEIGHT);
        assert_eq!(settings.win_score, Some(11));
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "paddle_height": 900 }"#),
            Err(ConfigError::PaddleTooTall { .. })
        ));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load_or_default("/nonexistent/paddle-duel.json");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_pace_parsing() {
        assert_eq!(Pace::from_str("FAST"), Some(Pace::Frantic));
        assert_eq!(Pace::from_str("classic"), Some(Pace::Classic));
        assert_eq!(Pace::from_str("warp"), None);
        assert_eq!(Pace::Relaxed.as_str(), "Relaxed");
    }
}
