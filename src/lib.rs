//! Brick Rush - A single-screen brick breaker
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (ball, bricks, paddle, wall, session)
//! - `render`: Draw descriptors and vertex tessellation for the host renderer
//! - `driver`: Per-frame loop driver and demo autopilot
//! - `settings`: Data-driven game balance loaded from JSON

pub mod driver;
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Playfield dimensions
    pub const SCENE_WIDTH: f32 = 800.0;
    pub const SCENE_HEIGHT: f32 = 600.0;

    /// Brick grid
    pub const BRICK_WIDTH: f32 = 40.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLS: usize = 20;
    pub const BRICK_COUNT: usize = BRICK_ROWS * BRICK_COLS;
    /// Y of the first brick row
    pub const BRICK_TOP_MARGIN: f32 = 60.0;

    /// Ball defaults
    pub const BALL_SPEED: f32 = 480.0;
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_MIN_RADIUS: f32 = 2.0;
    pub const BALL_SPAWN: Vec2 = Vec2::new(400.0, 400.0);
    /// Radius multiplier applied on every brick hit
    pub const BALL_SHRINK_FACTOR: f32 = 0.95;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 60.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    pub const PADDLE_CENTER_Y: f32 = 500.0;
    /// Horizontal deflection per unit of offset from paddle center
    pub const PADDLE_STEERING: f32 = 10.0;

    pub const INITIAL_LIFE: u32 = 3;

    /// Reflection masks (component-wise multipliers)
    pub const REFLECT_VERTICAL: Vec2 = Vec2::new(1.0, -1.0);
    pub const REFLECT_HORIZONTAL: Vec2 = Vec2::new(-1.0, 1.0);

    /// Largest frame gap fed to the simulation
    pub const MAX_FRAME_DT: f32 = 0.1;
}
