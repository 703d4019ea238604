//! Frame-driven simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - One tick per frame, `dt` supplied by the caller
//! - Stable iteration order (bricks scanned by ascending index)
//! - Phase changes only through `session::transition`

pub mod ball;
pub mod bricks;
pub mod geom;
pub mod paddle;
pub mod session;
pub mod state;
pub mod tick;
pub mod wall;

pub use ball::Ball;
pub use bricks::{Brick, BrickField, BrickHit, HitFace};
pub use geom::{Circle, Rect, Segment};
pub use paddle::Paddle;
pub use session::{Effect, GamePhase, Session, Transition, Trigger, WorldEffect, transition};
pub use state::{GameEvent, GameState};
pub use tick::{TickInput, tick};
pub use wall::{Wall, WallBounce};
