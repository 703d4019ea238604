//! Game balance settings
//!
//! Loaded from an optional JSON file. Every group is `#[serde(default)]` so a
//! file only needs the values it overrides.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Playfield size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            width: SCENE_WIDTH,
            height: SCENE_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallSettings {
    /// Constant speed (units per second)
    pub speed: f32,
    /// Radius after every reset
    pub radius: f32,
    /// Shrink floor
    pub min_radius: f32,
    /// Radius multiplier per brick hit
    pub shrink_factor: f32,
    /// Spawn point (circle center)
    pub spawn: Vec2,
}

impl Default for BallSettings {
    fn default() -> Self {
        Self {
            speed: BALL_SPEED,
            radius: BALL_RADIUS,
            min_radius: BALL_MIN_RADIUS,
            shrink_factor: BALL_SHRINK_FACTOR,
            spawn: BALL_SPAWN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleSettings {
    pub width: f32,
    pub height: f32,
    pub center_y: f32,
    pub steering: f32,
}

impl Default for PaddleSettings {
    fn default() -> Self {
        Self {
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            center_y: PADDLE_CENTER_Y,
            steering: PADDLE_STEERING,
        }
    }
}

/// Brick cell size and top margin. The grid itself is always
/// `BRICK_ROWS` x `BRICK_COLS`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickSettings {
    pub width: f32,
    pub height: f32,
    pub top_margin: f32,
}

impl Default for BrickSettings {
    fn default() -> Self {
        Self {
            width: BRICK_WIDTH,
            height: BRICK_HEIGHT,
            top_margin: BRICK_TOP_MARGIN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    pub lives: u32,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            lives: INITIAL_LIFE,
        }
    }
}

/// Complete game balance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub scene: SceneSettings,
    pub ball: BallSettings,
    pub paddle: PaddleSettings,
    pub bricks: BrickSettings,
    pub session: SessionSettings,
}

impl Settings {
    /// Parse settings from JSON text, falling back to defaults on error
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Settings>(json) {
            Ok(settings) => settings.sanitized(),
            Err(e) => {
                log::warn!("Invalid settings JSON ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => {
                log::info!("Loaded settings from {}", path.display());
                Self::from_json(&json)
            }
            Err(e) => {
                log::warn!("Could not read {} ({}), using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Serialize to pretty JSON (for writing a starter file)
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Clamp values the simulation cannot honor
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !(self.ball.shrink_factor > 0.0 && self.ball.shrink_factor < 1.0) {
            log::warn!(
                "ball.shrink_factor {} outside (0, 1), using {}",
                self.ball.shrink_factor,
                defaults.ball.shrink_factor
            );
            self.ball.shrink_factor = defaults.ball.shrink_factor;
        }
        if self.ball.speed <= 0.0 {
            log::warn!("ball.speed {} must be positive, using {}", self.ball.speed, BALL_SPEED);
            self.ball.speed = BALL_SPEED;
        }
        if self.ball.radius <= 0.0 {
            log::warn!("ball.radius {} must be positive, using {}", self.ball.radius, BALL_RADIUS);
            self.ball.radius = BALL_RADIUS;
        }
        if self.ball.min_radius <= 0.0 || self.ball.min_radius > self.ball.radius {
            let fixed = BALL_MIN_RADIUS.min(self.ball.radius);
            log::warn!(
                "ball.min_radius {} must be in (0, {}], using {}",
                self.ball.min_radius,
                self.ball.radius,
                fixed
            );
            self.ball.min_radius = fixed;
        }
        if self.session.lives == 0 {
            log::warn!("session.lives must be at least 1, using {}", INITIAL_LIFE);
            self.session.lives = INITIAL_LIFE;
        }
        if self.scene.width <= 0.0 || self.scene.height <= 0.0 {
            log::warn!("scene size must be positive, using defaults");
            self.scene = defaults.scene;
        }
        if self.paddle.width <= 0.0 || self.paddle.height <= 0.0 {
            log::warn!(
                "paddle size {}x{} must be positive, using defaults",
                self.paddle.width,
                self.paddle.height
            );
            self.paddle.width = defaults.paddle.width;
            self.paddle.height = defaults.paddle.height;
        }
        if self.bricks.width <= 0.0 || self.bricks.height <= 0.0 {
            log::warn!(
                "brick size {}x{} must be positive, using defaults",
                self.bricks.width,
                self.bricks.height
            );
            self.bricks.width = defaults.bricks.width;
            self.bricks.height = defaults.bricks.height;
        }
        if self.bricks.top_margin < 0.0 {
            log::warn!(
                "bricks.top_margin {} is negative, using {}",
                self.bricks.top_margin,
                defaults.bricks.top_margin
            );
            self.bricks.top_margin = defaults.bricks.top_margin;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "ball": { "speed": 300.0 } }"#);
        assert_eq!(settings.ball.speed, 300.0);
        assert_eq!(settings.ball.radius, BALL_RADIUS);
        assert_eq!(settings.paddle, PaddleSettings::default());
        assert_eq!(settings.session.lives, INITIAL_LIFE);
    }

    #[test]
    fn test_malformed_json_falls_back() {
        let settings = Settings::from_json("{ not json");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load("/definitely/not/here/brick_rush.json");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_sanitized_clamps_bad_values() {
        let mut settings = Settings::default();
        settings.ball.shrink_factor = 1.5;
        settings.ball.min_radius = 50.0;
        settings.session.lives = 0;

        let fixed = settings.sanitized();
        assert_eq!(fixed.ball.shrink_factor, BALL_SHRINK_FACTOR);
        assert!(fixed.ball.min_radius <= fixed.ball.radius);
        assert_eq!(fixed.session.lives, INITIAL_LIFE);
    }

    #[test]
    fn test_sanitized_restores_entity_sizes() {
        let mut settings = Settings::default();
        settings.bricks.width = 0.0;
        settings.bricks.top_margin = -10.0;
        settings.paddle.height = -1.0;

        let fixed = settings.sanitized();
        assert_eq!(fixed.bricks, Settings::default().bricks);
        assert_eq!(fixed.paddle, Settings::default().paddle);

        // Valid sizes pass through untouched
        let mut wide = Settings::default();
        wide.paddle.width = 120.0;
        assert_eq!(wide.sanitized().paddle.width, 120.0);
    }

    #[test]
    fn test_json_roundtrip_of_defaults() {
        let json = Settings::default().to_json();
        assert_eq!(Settings::from_json(&json), Settings::default());
    }
}
